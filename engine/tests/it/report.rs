use demand_core::{DemandReportSink, Port, TimeInterval, VesselCount, VesselCountSeries};
use engine::CsvReportSink;
use rand::random;

use crate::helper::*;

fn output_directory() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("port-demand-report-{}", random::<u32>()))
}

#[tokio::test]
async fn writes_one_row_per_bucket() {
    let directory = output_directory();
    let sink = CsvReportSink::new(directory.clone());
    let series = VesselCountSeries {
        interval: TimeInterval::Hour,
        counts: vec![
            VesselCount {
                bucket_start: ts(10, 0),
                unique_vessels: 2,
            },
            VesselCount {
                bucket_start: ts(11, 0),
                unique_vessels: 1,
            },
        ],
    };

    sink.persist(
        &Port::test_default("Long Beach", LONG_BEACH.0, LONG_BEACH.1),
        &series,
    )
    .await
    .unwrap();

    let path = directory.join("long_beach_hourly_unique_vessels.csv");
    let mut reader = csv::Reader::from_path(path).unwrap();
    let rows = reader
        .deserialize::<(String, u32)>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].1, 2);
    assert_eq!(rows[1].1, 1);
    assert!(rows[0].0.starts_with("2020-01-01T10:00:00"));
}

#[tokio::test]
async fn gap_filled_series_covers_the_full_range() {
    let directory = output_directory();
    let sink = CsvReportSink::new(directory.clone());
    let series = VesselCountSeries {
        interval: TimeInterval::Day,
        counts: vec![
            VesselCount {
                bucket_start: ts(0, 0),
                unique_vessels: 4,
            },
            VesselCount {
                bucket_start: ts(0, 0) + TimeInterval::Day.duration() * 3,
                unique_vessels: 1,
            },
        ],
    }
    .fill_gaps();

    sink.persist(
        &Port::test_default("Long Beach", LONG_BEACH.0, LONG_BEACH.1),
        &series,
    )
    .await
    .unwrap();

    let path = directory.join("long_beach_daily_unique_vessels.csv");
    let mut reader = csv::Reader::from_path(path).unwrap();
    let rows = reader
        .deserialize::<(String, u32)>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1].1, 0);
    assert_eq!(rows[2].1, 0);
}

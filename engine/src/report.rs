use std::path::PathBuf;

use async_trait::async_trait;
use demand_core::{BoxError, CoreResult, DemandReportSink, Port, ReportSnafu, VesselCountSeries};
use snafu::ResultExt;
use tracing::{Level, event};

/// Writes one `<port>_<interval>_unique_vessels.csv` per series into the
/// output directory.
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    directory: PathBuf,
}

impl CsvReportSink {
    pub fn new(directory: PathBuf) -> CsvReportSink {
        CsvReportSink { directory }
    }

    fn file_name(port: &Port, series: &VesselCountSeries) -> String {
        let port = port.name.to_lowercase().replace(' ', "_");
        format!("{}_{}_unique_vessels.csv", port, series.interval)
    }
}

#[async_trait]
impl DemandReportSink for CsvReportSink {
    async fn persist(&self, port: &Port, series: &VesselCountSeries) -> CoreResult<()> {
        std::fs::create_dir_all(&self.directory)
            .map_err(BoxError::from)
            .context(ReportSnafu)?;

        let path = self.directory.join(Self::file_name(port, series));

        let mut writer = csv::Writer::from_path(&path)
            .map_err(BoxError::from)
            .context(ReportSnafu)?;
        for count in &series.counts {
            writer
                .serialize(count)
                .map_err(BoxError::from)
                .context(ReportSnafu)?;
        }
        writer.flush().map_err(BoxError::from).context(ReportSnafu)?;

        event!(
            Level::INFO,
            "wrote {} buckets to {}",
            series.counts.len(),
            path.display(),
        );

        Ok(())
    }
}

use demand_core::{
    BoundingBox, CARGO_SHIP_TYPES, Coordinates, DemandQuery, Error, TimeInterval,
    filter_by_box_and_type, port_demand,
};

use crate::helper::*;

fn query(interval: TimeInterval) -> DemandQuery {
    DemandQuery {
        port_name: "Long Beach".to_string(),
        box_width: 0.5,
        box_height: 0.5,
        ship_types: CARGO_SHIP_TYPES.to_vec(),
        interval,
    }
}

#[tokio::test]
async fn counts_unique_vessels_per_hour_bucket() {
    // mmsi 1 reports twice within the same hour, mmsi 2 once
    let store = store().with_positions(vec![
        cargo_position(1, ts(10, 5), 33.7, -118.2),
        cargo_position(1, ts(10, 25), 33.72, -118.21),
        cargo_position(2, ts(10, 45), 33.8, -118.1),
    ]);

    let demand = port_demand(&store, &query(TimeInterval::Hour))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(demand.port.name, "Long Beach");
    assert_eq!(demand.series.counts.len(), 1);
    assert_eq!(demand.series.counts[0].bucket_start, ts(10, 0));
    assert_eq!(demand.series.counts[0].unique_vessels, 2);
}

#[tokio::test]
async fn daily_buckets_span_the_whole_day() {
    let store = store().with_positions(vec![
        cargo_position(1, ts(0, 10), 33.7, -118.2),
        cargo_position(2, ts(13, 10), 33.7, -118.2),
        cargo_position(3, ts(23, 50), 33.7, -118.2),
    ]);

    let demand = port_demand(&store, &query(TimeInterval::Day))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(demand.series.counts.len(), 1);
    assert_eq!(demand.series.counts[0].bucket_start, ts(0, 0));
    assert_eq!(demand.series.counts[0].unique_vessels, 3);
}

#[tokio::test]
async fn unknown_port_short_circuits_without_a_position_query() {
    let store = store();

    let result = port_demand(
        &store,
        &DemandQuery {
            port_name: "Nowhere".to_string(),
            ..query(TimeInterval::Hour)
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
    assert_eq!(store.position_queries(), 0);
}

#[tokio::test]
async fn existing_port_without_matching_vessels_yields_an_empty_series() {
    let store = store();

    let demand = port_demand(&store, &query(TimeInterval::Hour))
        .await
        .unwrap()
        .unwrap();

    assert!(demand.series.is_empty());
    assert_eq!(store.position_queries(), 1);
}

#[tokio::test]
async fn empty_ship_type_allow_list_yields_an_empty_series() {
    let store = store().with_positions(vec![cargo_position(1, ts(10, 5), 33.7, -118.2)]);

    let demand = port_demand(
        &store,
        &DemandQuery {
            ship_types: Vec::new(),
            ..query(TimeInterval::Hour)
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert!(demand.series.is_empty());
}

#[tokio::test]
async fn unavailable_store_fails_the_analysis() {
    let store = store().unavailable();

    let error = port_demand(&store, &query(TimeInterval::Hour))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::StoreUnavailable { .. }));
}

#[tokio::test]
async fn positions_outside_the_bounding_box_are_excluded() {
    let store = store().with_positions(vec![
        // On the northern edge, inclusive
        cargo_position(1, ts(10, 5), 34.0, -118.2),
        cargo_position(2, ts(10, 6), 34.01, -118.2),
        cargo_position(3, ts(10, 7), 33.7, -118.5),
    ]);

    let demand = port_demand(&store, &query(TimeInterval::Hour))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(demand.series.counts.len(), 1);
    assert_eq!(demand.series.counts[0].unique_vessels, 1);
}

#[tokio::test]
async fn filtering_is_idempotent() {
    let bbox = BoundingBox::from_center(
        Coordinates {
            latitude: LONG_BEACH.0,
            longitude: LONG_BEACH.1,
        },
        0.5,
        0.5,
    );
    let ship_types = CARGO_SHIP_TYPES.to_vec();
    let positions = vec![
        cargo_position(1, ts(10, 5), 33.7, -118.2),
        cargo_position(2, ts(10, 6), 35.0, -118.2),
        cargo_position(3, ts(10, 7), 33.8, -118.3),
    ];

    let once = filter_by_box_and_type(positions, &bbox, &ship_types);
    let twice = filter_by_box_and_type(once.clone(), &bbox, &ship_types);

    assert_eq!(once, twice);
}

use tracing::{Level, event, instrument};

use crate::{
    BoundingBox, CoreResult, Port, PortDemandOutbound, ShipType, TimeInterval, VesselCountSeries,
    VesselPosition, count_unique_vessels_by_interval,
};

/// Parameters for a single port demand analysis.
#[derive(Debug, Clone)]
pub struct DemandQuery {
    pub port_name: String,
    /// Bounding box width in decimal degrees.
    pub box_width: f64,
    /// Bounding box height in decimal degrees.
    pub box_height: f64,
    pub ship_types: Vec<ShipType>,
    pub interval: TimeInterval,
}

#[derive(Debug, Clone)]
pub struct PortDemand {
    pub port: Port,
    pub series: VesselCountSeries,
}

/// Runs the full analysis against the given record store: resolve the port,
/// fetch and filter positions inside the bounding box around it, aggregate
/// into unique-vessel counts. Returns `Ok(None)` when the port name has no
/// reference record, without issuing a position query.
#[instrument(skip(adapter))]
pub async fn port_demand(
    adapter: &dyn PortDemandOutbound,
    query: &DemandQuery,
) -> CoreResult<Option<PortDemand>> {
    let Some(port) = adapter.find_port(&query.port_name).await? else {
        return Ok(None);
    };

    let bbox = BoundingBox::from_center(port.coordinates, query.box_width, query.box_height);
    let candidates = adapter.vessel_positions(&bbox, &query.ship_types).await?;
    let positions = filter_by_box_and_type(candidates, &bbox, &query.ship_types);

    event!(
        Level::INFO,
        "{} positions within the bounding box around '{}'",
        positions.len(),
        port.name,
    );

    let series = count_unique_vessels_by_interval(&positions, query.interval);

    Ok(Some(PortDemand { port, series }))
}

/// The authoritative box/type predicate. The store is expected to narrow
/// with the same conditions; filtering an already filtered set changes
/// nothing.
pub fn filter_by_box_and_type(
    positions: Vec<VesselPosition>,
    bbox: &BoundingBox,
    ship_types: &[ShipType],
) -> Vec<VesselPosition> {
    positions
        .into_iter()
        .filter(|p| {
            bbox.contains(p.latitude, p.longitude)
                && p.ship_type.is_some_and(|t| ship_types.contains(&t))
        })
        .collect()
}

use async_trait::async_trait;

use crate::{BoundingBox, CoreResult, Port, ShipType, VesselCountSeries, VesselPosition};

/// The narrow read capability the analysis needs from a record store. How
/// the store is backed is none of the core's business.
#[async_trait]
pub trait PortDemandOutbound: Send + Sync {
    /// Exact, case-sensitive lookup. `Ok(None)` means the dataset has no
    /// such port, a normal outcome distinct from store failure.
    async fn find_port(&self, name: &str) -> CoreResult<Option<Port>>;

    async fn vessel_positions(
        &self,
        bbox: &BoundingBox,
        ship_types: &[ShipType],
    ) -> CoreResult<Vec<VesselPosition>>;
}

/// Consumes a finished series and produces a persisted artifact.
#[async_trait]
pub trait DemandReportSink: Send + Sync {
    async fn persist(&self, port: &Port, series: &VesselCountSeries) -> CoreResult<()>;
}

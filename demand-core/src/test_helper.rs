use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use snafu::IntoError;

use crate::{
    BoundingBox, CoreResult, Error, Port, PortDemandOutbound, ShipType, StoreUnavailableSnafu,
    VesselPosition, filter_by_box_and_type,
};

/// In-memory record store for driving the pipeline in tests.
#[derive(Default)]
pub struct InMemoryStore {
    ports: Vec<Port>,
    positions: Vec<VesselPosition>,
    unavailable: bool,
    position_queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> InMemoryStore {
        InMemoryStore::default()
    }

    pub fn with_port(mut self, port: Port) -> InMemoryStore {
        self.ports.push(port);
        self
    }

    pub fn with_positions(mut self, mut positions: Vec<VesselPosition>) -> InMemoryStore {
        self.positions.append(&mut positions);
        self
    }

    /// Every store call fails as if the backing database were unreachable.
    pub fn unavailable(mut self) -> InMemoryStore {
        self.unavailable = true;
        self
    }

    /// Number of position queries issued against this store.
    pub fn position_queries(&self) -> usize {
        self.position_queries.load(Ordering::Relaxed)
    }

    fn connection_refused() -> Error {
        StoreUnavailableSnafu.into_error(Box::new(std::io::Error::from(
            std::io::ErrorKind::ConnectionRefused,
        )))
    }
}

#[async_trait]
impl PortDemandOutbound for InMemoryStore {
    async fn find_port(&self, name: &str) -> CoreResult<Option<Port>> {
        if self.unavailable {
            return Err(Self::connection_refused());
        }
        Ok(self.ports.iter().find(|p| p.name == name).cloned())
    }

    async fn vessel_positions(
        &self,
        bbox: &BoundingBox,
        ship_types: &[ShipType],
    ) -> CoreResult<Vec<VesselPosition>> {
        if self.unavailable {
            return Err(Self::connection_refused());
        }
        self.position_queries.fetch_add(1, Ordering::Relaxed);
        Ok(filter_by_box_and_type(
            self.positions.clone(),
            bbox,
            ship_types,
        ))
    }
}

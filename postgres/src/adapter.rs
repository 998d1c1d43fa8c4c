use std::path::PathBuf;

use async_trait::async_trait;
use demand_core::{BoundingBox, CoreResult, Port, PortDemandOutbound, ShipType, VesselPosition};
use serde::Deserialize;
use snafu::ResultExt;
use sqlx::{
    ConnectOptions, PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::error::{ConnectionSnafu, Result};

#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pub(crate) pool: PgPool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PsqlSettings {
    pub ip: String,
    pub port: u16,
    pub db_name: Option<String>,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
    pub root_cert: Option<PathBuf>,
    #[serde(default)]
    pub log_statements: PsqlLogStatements,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum PsqlLogStatements {
    Enable,
    #[default]
    Disable,
}

impl PostgresAdapter {
    pub async fn new(settings: &PsqlSettings) -> Result<PostgresAdapter> {
        let mut connections_per_pool = settings.max_connections / 2;
        if connections_per_pool == 0 {
            connections_per_pool = 1;
        }

        let mut opts = PgConnectOptions::new()
            .username(&settings.username)
            .password(&settings.password)
            .host(&settings.ip)
            .port(settings.port)
            .options([("plan_cache_mode", "force_custom_plan")]);

        if let Some(db_name) = &settings.db_name {
            opts = opts.database(db_name);
        }

        if let Some(root_cert_path) = &settings.root_cert {
            opts = opts
                .ssl_root_cert(root_cert_path)
                .ssl_mode(PgSslMode::VerifyFull);
        }

        match settings.log_statements {
            PsqlLogStatements::Enable => (),
            PsqlLogStatements::Disable => {
                opts = opts.disable_statement_logging();
            }
        }

        let pool = PgPoolOptions::new()
            .max_connections(connections_per_pool)
            .connect_with(opts)
            .await
            .context(ConnectionSnafu)?;

        Ok(PostgresAdapter { pool })
    }
}

#[async_trait]
impl PortDemandOutbound for PostgresAdapter {
    async fn find_port(&self, name: &str) -> CoreResult<Option<Port>> {
        Ok(self.port_by_name_impl(name).await?.map(Port::from))
    }

    async fn vessel_positions(
        &self,
        bbox: &BoundingBox,
        ship_types: &[ShipType],
    ) -> CoreResult<Vec<VesselPosition>> {
        Ok(self
            .vessel_positions_impl(bbox, ship_types)
            .await?
            .into_iter()
            .map(VesselPosition::from)
            .collect())
    }
}

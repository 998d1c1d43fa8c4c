use demand_core::{BoundingBox, ShipType};
use snafu::ResultExt;

use crate::{
    PostgresAdapter,
    error::{QuerySnafu, Result},
    models::AisPosition,
};

impl PostgresAdapter {
    // The WHERE clause mirrors the in-core filter predicate; both range
    // checks are inclusive.
    pub(crate) async fn vessel_positions_impl(
        &self,
        bbox: &BoundingBox,
        ship_types: &[ShipType],
    ) -> Result<Vec<AisPosition>> {
        sqlx::query_as::<_, AisPosition>(
            r#"
SELECT
    "MMSI"::INT AS mmsi,
    "BaseDateTime" AT TIME ZONE 'UTC' AS msgtime,
    "LAT" AS latitude,
    "LON" AS longitude,
    "VesselType" AS ship_type,
    "SOG" AS speed_over_ground,
    "COG" AS course_over_ground,
    "Heading" AS true_heading,
    "VesselName" AS vessel_name,
    "CallSign" AS call_sign
FROM
    public.ais_data
WHERE
    "MMSI" IS NOT NULL
    AND "BaseDateTime" IS NOT NULL
    AND "LAT" BETWEEN $1 AND $2
    AND "LON" BETWEEN $3 AND $4
    AND "VesselType" = ANY ($5)
            "#,
        )
        .bind(bbox.lat_min())
        .bind(bbox.lat_max())
        .bind(bbox.lon_min())
        .bind(bbox.lon_max())
        .bind(ship_types)
        .fetch_all(&self.pool)
        .await
        .context(QuerySnafu)
    }
}

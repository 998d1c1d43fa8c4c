use snafu::ResultExt;

use crate::{
    PostgresAdapter,
    error::{QuerySnafu, Result},
    models::Port,
};

impl PostgresAdapter {
    pub(crate) async fn port_by_name_impl(&self, name: &str) -> Result<Option<Port>> {
        sqlx::query_as::<_, Port>(
            r#"
SELECT
    "Main Port Name" AS name,
    "UN/LOCODE" AS unlocode,
    "Latitude"::FLOAT8 AS latitude,
    "Longitude"::FLOAT8 AS longitude
FROM
    port_coordinates
WHERE
    "Main Port Name" = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context(QuerySnafu)
    }
}

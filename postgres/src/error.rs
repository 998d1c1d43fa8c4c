use demand_core::StoreUnavailableSnafu;
use snafu::{IntoError, Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Failed to establish a connection to postgres"))]
    Connection {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
    #[snafu(display("A postgres query failed"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: sqlx::Error,
    },
}

impl From<Error> for demand_core::Error {
    fn from(value: Error) -> Self {
        // A broken pool or socket mid-query still means the store is gone,
        // not that the query was at fault.
        let unreachable = match &value {
            Error::Connection { .. } => true,
            Error::Query { error, .. } => matches!(
                error,
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
            ),
        };

        if unreachable {
            StoreUnavailableSnafu.into_error(Box::new(value))
        } else {
            demand_core::QuerySnafu.into_error(Box::new(value))
        }
    }
}

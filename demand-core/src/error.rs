use snafu::{Location, Snafu};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Record store is unavailable"))]
    StoreUnavailable {
        #[snafu(implicit)]
        location: Location,
        source: BoxError,
    },
    #[snafu(display("Record store query failed"))]
    Query {
        #[snafu(implicit)]
        location: Location,
        source: BoxError,
    },
    #[snafu(display("'{given}' is not a supported bucketing interval"))]
    InvalidInterval {
        #[snafu(implicit)]
        location: Location,
        given: String,
    },
    #[snafu(display("Failed to persist a demand report"))]
    Report {
        #[snafu(implicit)]
        location: Location,
        source: BoxError,
    },
}

#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod analysis;
mod domain;
mod error;
mod ports;

pub use analysis::*;
pub use domain::*;
pub use error::*;
pub use ports::*;

#[cfg(feature = "test")]
mod test_helper;
#[cfg(feature = "test")]
pub use test_helper::*;

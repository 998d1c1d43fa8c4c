mod ais;
mod port;

pub use ais::*;
pub use port::*;

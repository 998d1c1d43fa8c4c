mod ais;
mod bounding_box;
mod demand;
mod ports;

pub use ais::*;
pub use bounding_box::*;
pub use demand::*;
pub use ports::*;

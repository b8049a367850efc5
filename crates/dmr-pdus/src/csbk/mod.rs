pub mod enums;
pub mod pdus;

pub use enums::csbko::Csbko;
pub use pdus::csbk::{CSBK_BLOCK_BITS, CSBK_BLOCK_BYTES, Csbk, CsbkArgs};

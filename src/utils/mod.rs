// Utils compartidos

pub mod constants;
pub mod day_key;

pub use constants::*;
pub use day_key::*;

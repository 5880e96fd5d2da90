pub mod power;
pub mod stats;

pub mod rate;
pub mod scaling_harness;

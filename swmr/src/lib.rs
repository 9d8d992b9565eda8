pub mod arena;
pub mod harness;
pub mod occupancy;
pub mod remedy;
pub mod role;
pub mod scenario;
pub mod shared_state;
pub mod strategy;
pub mod workload;

#[cfg(test)]
pub mod test_utils;

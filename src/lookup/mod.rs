mod address;
mod client;
mod coordinates;
mod error;
mod orchestrator;
mod passes;
mod types;

#[cfg(test)]
mod testing;

pub use orchestrator::Orchestrator;
pub use types::{Coordinates, NetworkAddress, PassTimeResult, PassWindow};

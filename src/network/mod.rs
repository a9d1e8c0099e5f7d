pub mod config;
pub mod network;
pub mod scratch;
pub mod topology;

pub use config::NetworkConfig;
pub use network::Network;
pub use scratch::Scratch;
pub use topology::Topology;

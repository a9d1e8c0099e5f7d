pub mod activation;
pub mod error;
pub mod neuron;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, derived_sigmoid};
pub use error::NetworkError;
pub use neuron::{Neuron, Trace};
pub use network::{Network, NetworkConfig, Scratch, Topology};
pub use loss::MseLoss;
pub use train::{train_loop, EpochStats, Sample, TrainConfig};

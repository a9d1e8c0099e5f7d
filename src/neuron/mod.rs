pub mod neuron;
pub mod trace;

pub use neuron::Neuron;
pub use trace::Trace;

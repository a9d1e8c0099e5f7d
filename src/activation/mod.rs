pub mod sigmoid;

pub use sigmoid::{derived_sigmoid, sigmoid};

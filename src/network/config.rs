use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Shape and learning rate of a network.
///
/// - `input_size`: feature count of every sample; fixes the fan-in of
///   the first hidden layer
/// - `depth`: number of hidden layers
/// - `neurons_per_layer`: width of every hidden layer
/// - `learning_rate`: SGD step size in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub depth: usize,
    pub neurons_per_layer: usize,
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(
        input_size: usize,
        depth: usize,
        neurons_per_layer: usize,
        learning_rate: f64,
    ) -> Self {
        NetworkConfig { input_size, depth, neurons_per_layer, learning_rate }
    }

    /// Checks the config before any neuron is built.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.input_size == 0 {
            return Err(NetworkError::InvalidConfig("input_size must be at least 1".into()));
        }
        if self.depth == 0 {
            return Err(NetworkError::InvalidConfig("depth must be at least 1".into()));
        }
        if self.neurons_per_layer == 0 {
            return Err(NetworkError::InvalidConfig("neurons_per_layer must be at least 1".into()));
        }
        validate_learning_rate(self.learning_rate)
    }

    /// Deserializes a `NetworkConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig, NetworkError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(2, 2, 2, 0.1)
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<(), NetworkError> {
    if learning_rate.is_finite() && learning_rate > 0.0 && learning_rate <= 1.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidConfig(format!(
            "learning_rate must be in (0, 1], got {learning_rate}"
        )))
    }
}

use std::fmt;

/// All errors the network can report.
#[derive(Debug)]
pub enum NetworkError {
    /// A neuron was asked to evaluate an input vector whose length differs
    /// from its weight count.
    DimensionMismatch { expected: usize, actual: usize },
    /// A `Scratch` whose slot count differs from the network's neuron count,
    /// i.e. one built for another network.
    ScratchMismatch { expected: usize, actual: usize },
    /// Rejected before any neuron is built.
    InvalidConfig(String),
    /// Reading a configuration file failed.
    Io(std::io::Error),
    /// A configuration file was not valid JSON for `NetworkConfig`.
    Json(serde_json::Error),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "mismatched length: neuron has {expected} weights but got {actual} inputs"
            ),
            Self::ScratchMismatch { expected, actual } => write!(
                f,
                "scratch has {actual} slots but the network has {expected} neurons"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NetworkError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

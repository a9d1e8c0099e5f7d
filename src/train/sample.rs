use serde::{Deserialize, Serialize};

/// One labelled example. For prediction queries the label is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>,
    #[serde(default)]
    pub label: f64,
}

impl Sample {
    pub fn new(features: Vec<f64>, label: f64) -> Sample {
        Sample { features, label }
    }
}

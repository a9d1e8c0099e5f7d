pub struct MseLoss;

impl MseLoss {
    /// Squared error of the single output: (expected − predicted)².
    /// The mean over one output needs no division.
    pub fn loss(predicted: f64, expected: f64) -> f64 {
        (expected - predicted).powi(2)
    }

    /// ∂E/∂ŷ = −2 · (expected − predicted)
    pub fn derivative(predicted: f64, expected: f64) -> f64 {
        -2.0 * (expected - predicted)
    }
}

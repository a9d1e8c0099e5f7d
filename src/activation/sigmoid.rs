/// Logistic activation: 1 / (1 + e^-x).
///
/// Not clamped. For large negative `x`, `exp(-x)` overflows to infinity and
/// the result saturates to 0.0, which is the limit anyway.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed through its own output.
///
/// `sigmoid_output` must be the stored activation `s = sigmoid(z)`, not the
/// pre-activation `z`: σ'(z) = s · (1 − s).
pub fn derived_sigmoid(sigmoid_output: f64) -> f64 {
    sigmoid_output * (1.0 - sigmoid_output)
}

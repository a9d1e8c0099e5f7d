/// Per-sample working state of one neuron.
///
/// A `Neuron` only owns its parameters. Everything that is recomputed for
/// each sample (the inputs it saw, its activation, and the local derivatives
/// the backward pass produces) lives here, so a stale value from a previous
/// sample can never be mistaken for a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// The inputs bound by the last `Neuron::set_inputs`.
    pub inputs: Vec<f64>,
    /// Activation computed by the last `Neuron::feed_forward`.
    pub output: f64,
    /// ∂output/∂weight[i], parallel to the neuron's weights.
    pub derivative_weights: Vec<f64>,
    /// ∂output/∂input[i]. Read by the previous layer during the update pass,
    /// never by the neuron that produced it.
    pub derivative_inputs: Vec<f64>,
    /// ∂output/∂bias.
    pub derivative_bias: f64,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    /// A trace with inputs and output already filled in, as if a forward
    /// pass had run. Derivative vectors are zeroed to match `inputs`.
    pub fn with_state(inputs: Vec<f64>, output: f64) -> Trace {
        let n = inputs.len();
        Trace {
            inputs,
            output,
            derivative_weights: vec![0.0; n],
            derivative_inputs: vec![0.0; n],
            derivative_bias: 0.0,
        }
    }
}

use rand::Rng;

use crate::activation::{derived_sigmoid, sigmoid};
use crate::error::NetworkError;
use crate::neuron::trace::Trace;

/// One sigmoid unit: its weights, its bias, and whether it is the network's
/// output neuron.
///
/// The fan-in is fixed when the neuron is built. Binding an input vector of a
/// different length is an error, never a silent re-initialisation, so learned
/// weights cannot be wiped by a caller that feeds the wrong width.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub is_output: bool,
}

impl Neuron {
    /// Builds a neuron with `fan_in` weights and a bias, all drawn uniformly
    /// from [0, 1).
    pub fn new<R: Rng + ?Sized>(fan_in: usize, is_output: bool, rng: &mut R) -> Neuron {
        let weights = (0..fan_in).map(|_| rng.gen::<f64>()).collect();
        let bias = rng.gen::<f64>();
        Neuron { weights, bias, is_output }
    }

    pub fn with_params(weights: Vec<f64>, bias: f64, is_output: bool) -> Neuron {
        Neuron { weights, bias, is_output }
    }

    pub fn fan_in(&self) -> usize {
        self.weights.len()
    }

    /// Binds `inputs` to `trace` and zeroes its derivatives.
    ///
    /// # Errors
    /// `DimensionMismatch` if `inputs.len()` differs from the fan-in; the
    /// trace is left untouched in that case.
    pub fn set_inputs(&self, trace: &mut Trace, inputs: &[f64]) -> Result<(), NetworkError> {
        if inputs.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        trace.inputs.clear();
        trace.inputs.extend_from_slice(inputs);
        trace.derivative_inputs = vec![0.0; inputs.len()];
        trace.derivative_weights = vec![0.0; self.weights.len()];
        Ok(())
    }

    /// Forward evaluation: `sigmoid(bias + Σ wᵢ·xᵢ)`, stored in
    /// `trace.output` and returned.
    ///
    /// # Errors
    /// `DimensionMismatch` if the trace's inputs do not match the weights,
    /// e.g. when called on a fresh trace without `set_inputs`.
    pub fn feed_forward(&self, trace: &mut Trace) -> Result<f64, NetworkError> {
        if trace.inputs.len() != self.weights.len() {
            return Err(NetworkError::DimensionMismatch {
                expected: self.weights.len(),
                actual: trace.inputs.len(),
            });
        }
        let total = self.weights.iter()
            .zip(trace.inputs.iter())
            .fold(self.bias, |acc, (w, x)| acc + w * x);
        trace.output = sigmoid(total);
        Ok(trace.output)
    }

    /// Local derivatives of this neuron's output, from the output already
    /// stored in `trace` by `feed_forward`:
    ///
    /// - `derivative_weights[i] = inputs[i] · σ'(out)`
    /// - `derivative_inputs[i]  = weights[i] · σ'(out)`
    /// - `derivative_bias       = σ'(out)`
    pub fn calculate_and_store_derivatives(&self, trace: &mut Trace) {
        let d_out = derived_sigmoid(trace.output);

        trace.derivative_weights.resize(self.weights.len(), 0.0);
        for (dw, x) in trace.derivative_weights.iter_mut().zip(trace.inputs.iter()) {
            *dw = x * d_out;
        }

        trace.derivative_inputs.clear();
        trace.derivative_inputs.resize(trace.inputs.len(), 0.0);
        for (dx, w) in trace.derivative_inputs.iter_mut().zip(self.weights.iter()) {
            *dx = w * d_out;
        }

        trace.derivative_bias = d_out;
    }

    /// One gradient-descent step on weights and bias.
    ///
    /// `derivative_y` is ∂E/∂ŷ for the current sample, shared by every neuron.
    /// `derivative_output` is the chain-rule factor handed down from the next
    /// layer; the output neuron ignores it (its own factor is 1).
    pub fn update_weights_and_bias(
        &mut self,
        trace: &Trace,
        learn_rate: f64,
        derivative_y: f64,
        derivative_output: f64,
    ) {
        let scale = self.step_scale(learn_rate, derivative_y, derivative_output);
        for (w, dw) in self.weights.iter_mut().zip(trace.derivative_weights.iter()) {
            *w -= scale * dw;
        }
        self.bias -= scale * trace.derivative_bias;
    }

    fn step_scale(&self, learn_rate: f64, derivative_y: f64, derivative_output: f64) -> f64 {
        if self.is_output {
            learn_rate * derivative_y
        } else {
            learn_rate * derivative_y * derivative_output
        }
    }
}

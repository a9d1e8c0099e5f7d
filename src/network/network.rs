use log::{info, trace};
use rand::Rng;

use crate::error::NetworkError;
use crate::loss::MseLoss;
use crate::network::config::{validate_learning_rate, NetworkConfig};
use crate::network::scratch::Scratch;
use crate::network::topology::Topology;
use crate::neuron::Neuron;
use crate::train::loop_fn::train_loop;
use crate::train::sample::Sample;
use crate::train::train_config::TrainConfig;

/// A fully connected multilayer perceptron with one sigmoid output neuron.
///
/// Neurons live in a flat arena; `Topology` maps (layer, position) to arena
/// slots. The network only holds parameters; per-sample state is kept in a
/// `Scratch` owned by whoever drives the passes.
#[derive(Debug, Clone)]
pub struct Network {
    learn_rate: f64,
    neurons: Vec<Neuron>,
    topology: Topology,
}

impl Network {
    /// Builds a network with uniformly random parameters from the thread RNG.
    pub fn new(config: &NetworkConfig) -> Result<Network, NetworkError> {
        Network::with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a network drawing its initial parameters from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        config.validate()?;

        let widths = vec![config.neurons_per_layer; config.depth];
        let topology = Topology::new(&widths);

        let mut neurons = Vec::with_capacity(topology.neuron_count());
        let mut fan_in = config.input_size;
        for &width in &widths {
            neurons.extend((0..width).map(|_| Neuron::new(fan_in, false, rng)));
            fan_in = width;
        }
        neurons.push(Neuron::new(fan_in, true, rng));

        info!(
            "built network: {} inputs, {} hidden layers x {} neurons, learning rate {}",
            config.input_size, config.depth, config.neurons_per_layer, config.learning_rate
        );

        Ok(Network { learn_rate: config.learning_rate, neurons, topology })
    }

    /// Assembles a network from explicit neurons.
    ///
    /// `layers` are the hidden layers in order; `output` is fed by the last
    /// one. The `is_output` flags are overwritten to match each neuron's
    /// position.
    ///
    /// # Errors
    /// `InvalidConfig` if there are no hidden layers, a layer is empty, the
    /// learning rate is outside (0, 1], or the first layer's neurons disagree
    /// on their fan-in. `DimensionMismatch` if a neuron's fan-in is not the
    /// width of the layer before it.
    pub fn from_layers(
        learn_rate: f64,
        layers: Vec<Vec<Neuron>>,
        output: Neuron,
    ) -> Result<Network, NetworkError> {
        validate_learning_rate(learn_rate)?;
        if layers.is_empty() {
            return Err(NetworkError::InvalidConfig("at least one hidden layer is required".into()));
        }
        if layers.iter().any(|layer| layer.is_empty()) {
            return Err(NetworkError::InvalidConfig("hidden layers must not be empty".into()));
        }

        let input_size = layers[0][0].fan_in();
        if input_size == 0 || layers[0].iter().any(|n| n.fan_in() != input_size) {
            return Err(NetworkError::InvalidConfig(
                "first hidden layer neurons must share a non-zero fan-in".into(),
            ));
        }
        for pair in layers.windows(2) {
            let expected = pair[0].len();
            if let Some(n) = pair[1].iter().find(|n| n.fan_in() != expected) {
                return Err(NetworkError::DimensionMismatch { expected, actual: n.fan_in() });
            }
        }
        let last_width = layers[layers.len() - 1].len();
        if output.fan_in() != last_width {
            return Err(NetworkError::DimensionMismatch {
                expected: last_width,
                actual: output.fan_in(),
            });
        }

        let widths: Vec<usize> = layers.iter().map(Vec::len).collect();
        let topology = Topology::new(&widths);

        let mut neurons: Vec<Neuron> = layers.into_iter().flatten().collect();
        for neuron in &mut neurons {
            neuron.is_output = false;
        }
        neurons.push(Neuron { is_output: true, ..output });

        Ok(Network { learn_rate, neurons, topology })
    }

    pub fn learn_rate(&self) -> f64 {
        self.learn_rate
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Feature count expected by the first hidden layer.
    pub fn input_size(&self) -> usize {
        self.neurons[0].fan_in()
    }

    /// Hidden neuron at (`layer`, `position`).
    pub fn neuron(&self, layer: usize, position: usize) -> Option<&Neuron> {
        self.topology.index(layer, position).map(|idx| &self.neurons[idx])
    }

    pub fn output_neuron(&self) -> &Neuron {
        &self.neurons[self.topology.output()]
    }

    /// A fresh per-sample scratch shaped for this network.
    pub fn scratch(&self) -> Scratch {
        Scratch::new(self.neurons.len())
    }

    fn check_scratch(&self, scratch: &Scratch) -> Result<(), NetworkError> {
        if scratch.len() != self.neurons.len() {
            return Err(NetworkError::ScratchMismatch {
                expected: self.neurons.len(),
                actual: scratch.len(),
            });
        }
        Ok(())
    }

    /// Forward pass: features through every hidden layer in order, then the
    /// last layer's outputs through the output neuron. Returns the output.
    ///
    /// # Errors
    /// `DimensionMismatch` if `features.len()` is not `input_size()`.
    /// `ScratchMismatch` if `scratch` was not built for this network.
    pub fn feed_forward(
        &self,
        scratch: &mut Scratch,
        features: &[f64],
    ) -> Result<f64, NetworkError> {
        self.check_scratch(scratch)?;
        let mut inputs = features.to_vec();
        for layer in 0..self.topology.depth() {
            let range = self.topology.layer(layer);
            for idx in range.clone() {
                let neuron = &self.neurons[idx];
                let trace = &mut scratch.traces[idx];
                neuron.set_inputs(trace, &inputs)?;
                neuron.feed_forward(trace)?;
            }
            inputs = scratch.outputs(range);
        }

        let out = self.topology.output();
        let trace = &mut scratch.traces[out];
        self.neurons[out].set_inputs(trace, &inputs)?;
        self.neurons[out].feed_forward(trace)
    }

    /// Backward pass: local derivatives for the output neuron, then for the
    /// hidden layers from last to first.
    ///
    /// # Errors
    /// `ScratchMismatch` if `scratch` was not built for this network.
    pub fn back_propagate(&self, scratch: &mut Scratch) -> Result<(), NetworkError> {
        self.check_scratch(scratch)?;
        let out = self.topology.output();
        self.neurons[out].calculate_and_store_derivatives(&mut scratch.traces[out]);

        for layer in (0..self.topology.depth()).rev() {
            for idx in self.topology.layer(layer) {
                self.neurons[idx].calculate_and_store_derivatives(&mut scratch.traces[idx]);
            }
        }
        Ok(())
    }

    /// Update pass for a sample whose true output is `label`.
    ///
    /// The output neuron steps on ∂E/∂ŷ alone. Neuron `j` of the last hidden
    /// layer takes the output neuron's `derivative_inputs[j]` as its
    /// downstream factor; neuron `j` of any earlier layer takes the mean of
    /// `derivative_inputs[j]` over the next layer's neurons. All factors come
    /// from the backward pass, before any parameter moved.
    ///
    /// # Errors
    /// `ScratchMismatch` if `scratch` was not built for this network; no
    /// parameter is touched in that case.
    pub fn adjust_weights_and_bias(
        &mut self,
        scratch: &Scratch,
        label: f64,
    ) -> Result<(), NetworkError> {
        self.check_scratch(scratch)?;
        let out = self.topology.output();
        let output_trace = &scratch.traces[out];
        let derivative_y = MseLoss::derivative(output_trace.output, label);
        let learn_rate = self.learn_rate;

        self.neurons[out].update_weights_and_bias(output_trace, learn_rate, derivative_y, 0.0);

        let last = self.topology.depth() - 1;
        for layer in (0..=last).rev() {
            for (j, idx) in self.topology.layer(layer).enumerate() {
                let derivative_output = if layer == last {
                    derivative_input(&output_trace.derivative_inputs, j)
                } else {
                    let next = self.topology.layer(layer + 1);
                    let width = next.len() as f64;
                    next.map(|k| derivative_input(&scratch.traces[k].derivative_inputs, j))
                        .sum::<f64>()
                        / width
                };
                self.neurons[idx].update_weights_and_bias(
                    &scratch.traces[idx],
                    learn_rate,
                    derivative_y,
                    derivative_output,
                );
            }
        }
        Ok(())
    }

    /// Forward, backward and update for one sample. Returns the squared error
    /// of the prediction made before the update.
    pub fn train_sample(
        &mut self,
        scratch: &mut Scratch,
        sample: &Sample,
    ) -> Result<f64, NetworkError> {
        let predicted = self.feed_forward(scratch, &sample.features)?;
        self.back_propagate(scratch)?;
        self.adjust_weights_and_bias(scratch, sample.label)?;

        let loss = MseLoss::loss(predicted, sample.label);
        trace!(
            "sample {:?}: predicted {predicted:.6}, label {}, loss {loss:.6}",
            sample.features,
            sample.label
        );
        Ok(loss)
    }

    /// Trains for `epochs` passes over `dataset`, in dataset order.
    /// Returns the mean squared error seen during the last epoch.
    pub fn train(&mut self, epochs: usize, dataset: &[Sample]) -> Result<f64, NetworkError> {
        train_loop(self, dataset, &TrainConfig::new(epochs))
    }

    /// Forward pass only, on a fresh scratch. Never touches parameters, so
    /// repeated calls with the same features return the same value.
    pub fn predict(&self, features: &[f64]) -> Result<f64, NetworkError> {
        let mut scratch = self.scratch();
        self.feed_forward(&mut scratch, features)
    }

    /// Mean squared error of `predict` over `dataset`; 0.0 when empty.
    pub fn evaluate(&self, dataset: &[Sample]) -> Result<f64, NetworkError> {
        if dataset.is_empty() {
            return Ok(0.0);
        }
        let mut scratch = self.scratch();
        let mut total = 0.0;
        for sample in dataset {
            let predicted = self.feed_forward(&mut scratch, &sample.features)?;
            total += MseLoss::loss(predicted, sample.label);
        }
        Ok(total / dataset.len() as f64)
    }
}

/// A derivative that was never computed contributes nothing.
fn derivative_input(derivatives: &[f64], j: usize) -> f64 {
    derivatives.get(j).copied().unwrap_or(0.0)
}

use std::ops::Range;

use crate::neuron::Trace;

/// Per-sample state for a whole network: one `Trace` per arena slot, indexed
/// exactly like the network's neuron arena.
///
/// Obtain one from `Network::scratch`. The passes reject a scratch built for
/// a network with a different neuron count with `ScratchMismatch`.
#[derive(Debug, Clone)]
pub struct Scratch {
    pub(crate) traces: Vec<Trace>,
}

impl Scratch {
    pub(crate) fn new(len: usize) -> Scratch {
        Scratch { traces: vec![Trace::new(); len] }
    }

    pub fn trace(&self, idx: usize) -> Option<&Trace> {
        self.traces.get(idx)
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Outputs of the neurons in `range`, in arena order.
    pub(crate) fn outputs(&self, range: Range<usize>) -> Vec<f64> {
        self.traces[range].iter().map(|t| t.output).collect()
    }
}

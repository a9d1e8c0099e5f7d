use std::ops::Range;

/// Index table over the network's flat neuron arena.
///
/// Hidden layers occupy contiguous arena ranges in layer order; the single
/// output neuron occupies the slot right after the last hidden layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    layers: Vec<Range<usize>>,
    output: usize,
}

impl Topology {
    /// Builds the table from the width of each hidden layer.
    pub fn new(widths: &[usize]) -> Topology {
        let mut layers = Vec::with_capacity(widths.len());
        let mut start = 0;
        for &width in widths {
            layers.push(start..start + width);
            start += width;
        }
        Topology { layers, output: start }
    }

    /// Number of hidden layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Arena range of hidden layer `layer`.
    ///
    /// # Panics
    /// Panics if `layer >= depth()`.
    pub fn layer(&self, layer: usize) -> Range<usize> {
        self.layers[layer].clone()
    }

    /// Neuron count of hidden layer `layer`, or `None` if out of range.
    pub fn width(&self, layer: usize) -> Option<usize> {
        self.layers.get(layer).map(|range| range.len())
    }

    /// Arena index of the neuron at `position` within hidden layer `layer`,
    /// or `None` if either is out of range.
    pub fn index(&self, layer: usize, position: usize) -> Option<usize> {
        let range = self.layers.get(layer)?;
        let idx = range.start + position;
        (idx < range.end).then_some(idx)
    }

    /// Arena index of the output neuron.
    pub fn output(&self) -> usize {
        self.output
    }

    /// Total number of neurons, output included.
    pub fn neuron_count(&self) -> usize {
        self.output + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_are_laid_out_back_to_back() {
        let topology = Topology::new(&[2, 3, 1]);
        assert_eq!(topology.depth(), 3);
        assert_eq!(topology.layer(0), 0..2);
        assert_eq!(topology.layer(1), 2..5);
        assert_eq!(topology.layer(2), 5..6);
        assert_eq!(topology.output(), 6);
        assert_eq!(topology.neuron_count(), 7);
        assert_eq!(topology.width(1), Some(3));
        assert_eq!(topology.width(3), None);
    }

    #[test]
    fn index_maps_layer_and_position() {
        let topology = Topology::new(&[2, 2]);
        assert_eq!(topology.index(0, 0), Some(0));
        assert_eq!(topology.index(1, 1), Some(3));
        assert_eq!(topology.index(1, 2), None);
        assert_eq!(topology.index(2, 0), None);
    }
}

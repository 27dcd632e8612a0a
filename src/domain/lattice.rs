use super::topology::{Neighbors, Topology};

/// Weight sentinel for a cell that never moves
pub const PINNED_WEIGHT: f64 = f64::INFINITY;

/// Check a weight against the pin sentinel
#[inline]
pub fn is_pinned_weight(weight: f64) -> bool {
    weight == PINNED_WEIGHT
}

/// Lattice owns the height field and the cached neighbor table.
///
/// Per-cell state is stored as parallel vectors of the same length. Setters
/// do not enforce invariants such as `weight > 0`; the interaction
/// controller and the update engine are the only writers and keep them.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice<T: Topology> {
    pub(super) topology: T,
    pub(super) heights: Vec<f64>,
    pub(super) prev_heights: Vec<f64>,
    pub(super) velocities: Vec<f64>,
    pub(super) weights: Vec<f64>,
    pub(super) active: Vec<bool>,
    pub(super) neighbors: Vec<Neighbors>,
}

impl<T: Topology> Lattice<T> {
    /// Create a lattice at rest with the topology's default pin mask applied
    pub fn new(topology: T) -> Self {
        let len = topology.len();
        let weights = (0..len)
            .map(|i| if topology.is_pinned(i) { PINNED_WEIGHT } else { 1.0 })
            .collect();
        let neighbors = (0..len).map(|i| topology.neighbors(i)).collect();

        Self {
            heights: vec![0.0; len],
            prev_heights: vec![0.0; len],
            velocities: vec![0.0; len],
            weights,
            active: vec![true; len],
            neighbors,
            topology,
        }
    }

    /// Discard all state and rebuild exactly as `new` would
    pub fn reset(&mut self) {
        *self = Self::new(self.topology.clone());
    }

    pub fn topology(&self) -> &T {
        &self.topology
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Precomputed adjacent indices of a cell (empty when out of range)
    pub fn neighbors_of(&self, index: usize) -> &[usize] {
        self.neighbors.get(index).map_or(&[], |n| n.as_slice())
    }

    pub fn height(&self, index: usize) -> Option<f64> {
        self.heights.get(index).copied()
    }

    pub fn prev_height(&self, index: usize) -> Option<f64> {
        self.prev_heights.get(index).copied()
    }

    pub fn velocity(&self, index: usize) -> Option<f64> {
        self.velocities.get(index).copied()
    }

    pub fn weight(&self, index: usize) -> Option<f64> {
        self.weights.get(index).copied()
    }

    /// Whether the update engine simulates this cell
    pub fn is_active(&self, index: usize) -> Option<bool> {
        self.active.get(index).copied()
    }

    pub fn set_height(&mut self, index: usize, height: f64) {
        if let Some(h) = self.heights.get_mut(index) {
            *h = height;
        }
    }

    pub fn set_velocity(&mut self, index: usize, velocity: f64) {
        if let Some(v) = self.velocities.get_mut(index) {
            *v = velocity;
        }
    }

    pub fn set_weight(&mut self, index: usize, weight: f64) {
        if let Some(w) = self.weights.get_mut(index) {
            *w = weight;
        }
    }

    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(a) = self.active.get_mut(index) {
            *a = active;
        }
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn prev_heights(&self) -> &[f64] {
        &self.prev_heights
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterate (index, height, weight) for rendering
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.heights
            .iter()
            .zip(&self.weights)
            .enumerate()
            .map(|(i, (&h, &w))| (i, h, w))
    }
}

//! Update engine: advances a lattice by one time step.
//!
//! Each cell's velocity is pulled toward the mean of its neighbors' heights
//! from the previous step, scaled by `1 / weight`, then the height moves by
//! the new velocity (semi-implicit Euler). Neighbor reads only ever see
//! `prev_heights`, and `prev_heights` is committed once the whole sweep has
//! finished, so the result does not depend on visiting order.

use rayon::prelude::*;
use super::lattice::{is_pinned_weight, Lattice};
use super::topology::Topology;

/// Advance one cell in place. Cells without neighbors are left untouched.
#[inline]
fn relax(height: &mut f64, velocity: &mut f64, weight: f64, neighbors: &[usize], prev_heights: &[f64]) {
    if neighbors.is_empty() {
        return;
    }

    let sum: f64 = neighbors.iter().map(|&n| prev_heights[n]).sum();
    let average = sum / neighbors.len() as f64;

    // Pinned cells take no impulse at all; inf / inf would be NaN
    if !is_pinned_weight(weight) {
        *velocity += (average - *height) / weight;
    }
    *height += *velocity;
}

/// Serial sweep over every active cell, then commit
pub fn step<T: Topology>(lattice: &mut Lattice<T>) {
    let Lattice { heights, prev_heights, velocities, weights, active, neighbors, .. } = lattice;

    for i in 0..heights.len() {
        if !active[i] {
            continue;
        }
        relax(&mut heights[i], &mut velocities[i], weights[i], &neighbors[i], prev_heights);
    }

    prev_heights.copy_from_slice(heights);
}

/// Parallel sweep using rayon. Produces the same state as [`step`]
/// because every cell only reads the previous snapshot.
pub fn step_parallel<T: Topology>(lattice: &mut Lattice<T>) {
    let Lattice { heights, prev_heights, velocities, weights, active, neighbors, .. } = lattice;
    let (prev, weights, active, neighbors) = (&prev_heights[..], &weights[..], &active[..], &neighbors[..]);

    heights
        .par_iter_mut()
        .zip(velocities.par_iter_mut())
        .enumerate()
        .filter(|(i, _)| active[*i])
        .for_each(|(i, (height, velocity))| {
            relax(height, velocity, weights[i], &neighbors[i], prev);
        });

    prev_heights.copy_from_slice(heights);
}

//! Fiber kernels for k-qubit gate application
//!
//! For targets `q_0 .. q_{k-1}`, mask `r` is the OR of `1 << q_j` over the set
//! bits `j` of `r`. Every `base` with none of the target bits set anchors one
//! fiber: the `2^k` indices `base | mask[r]`. Fibers partition the state, so
//! each can be gathered, multiplied and scattered independently.

use densim_gates::GateMatrix;
use num_complex::Complex64;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};

/// Per-gate offset table, one entry per local row index
pub(crate) type FiberMasks = SmallVec<[usize; 4]>;

/// Build the offset table for the given target qubits
///
/// Bit `j` of the local index maps to `qubits[j]`.
pub(crate) fn fiber_masks(qubits: &[usize]) -> FiberMasks {
    (0..1usize << qubits.len())
        .map(|r| {
            qubits
                .iter()
                .enumerate()
                .filter(|(j, _)| r & (1 << j) != 0)
                .fold(0, |mask, (_, &q)| mask | (1 << q))
        })
        .collect()
}

/// Apply `matrix` to every fiber of `state`, one after another
pub(crate) fn apply_fibers_sequential(
    state: &mut [Complex64],
    matrix: &GateMatrix,
    masks: &[usize],
) {
    let targets = masks[masks.len() - 1];
    let mut input: SmallVec<[Complex64; 4]> = smallvec![Complex64::new(0.0, 0.0); masks.len()];
    let mut output: SmallVec<[Complex64; 4]> = smallvec![Complex64::new(0.0, 0.0); masks.len()];

    for base in 0..state.len() {
        if base & targets != 0 {
            continue;
        }

        for (slot, &mask) in input.iter_mut().zip(masks) {
            *slot = state[base | mask];
        }
        matrix.mul_vec_into(&input, &mut output);
        for (&value, &mask) in output.iter().zip(masks) {
            state[base | mask] = value;
        }
    }
}

/// Chunk length that keeps every fiber inside a single chunk
///
/// All target bits lie below the chunk size, so splitting the state into
/// aligned chunks of this length never cuts through a fiber.
#[inline]
pub(crate) fn fiber_chunk_len(masks: &[usize]) -> usize {
    let targets = masks[masks.len() - 1];
    1 << (usize::BITS - targets.leading_zeros())
}

/// Apply `matrix` to every fiber of `state` on the rayon thread pool
///
/// Produces the same amplitudes as [`apply_fibers_sequential`]. Chunks are
/// `2^(highest target + 1)` long, so a gate touching the top qubit of the
/// register yields a single chunk and runs on one thread.
pub(crate) fn apply_fibers_parallel(
    state: &mut [Complex64],
    matrix: &GateMatrix,
    masks: &[usize],
) {
    let chunk_len = fiber_chunk_len(masks);
    state
        .par_chunks_mut(chunk_len)
        .for_each(|chunk| apply_fibers_sequential(chunk, matrix, masks));
}

/// Multiply every amplitude by -1
pub(crate) fn negate(state: &mut [Complex64], parallel: bool) {
    if parallel {
        state.par_iter_mut().for_each(|amplitude| *amplitude = -*amplitude);
    } else {
        state.iter_mut().for_each(|amplitude| *amplitude = -*amplitude);
    }
}

//! Dense scatter accumulator
//!
//! Holds one output row (Gustavson) or column (column-wise) while partial
//! products are scattered into it. Only touched positions are tracked, so
//! resetting costs O(touched) rather than O(len).

use num_traits::Num;
use std::ops::AddAssign;

/// Dense accumulator for a single output row or column
pub struct DenseAccumulator<T> {
    /// The dense accumulation array
    values: Vec<T>,

    /// Flags to track which positions have been written
    occupied: Vec<bool>,

    /// Positions written since the last reset, in first-touch order
    indices: Vec<usize>,
}

impl<T> DenseAccumulator<T>
where
    T: Copy + Num + AddAssign,
{
    /// Create a new dense accumulator covering `len` positions
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![T::zero(); len],
            occupied: vec![false; len],
            indices: Vec::new(),
        }
    }

    /// Reset the accumulator for reuse without reallocating memory
    pub fn reset(&mut self) {
        for &idx in &self.indices {
            self.occupied[idx] = false;
        }
        self.indices.clear();
    }

    /// Accumulate a single partial product at `idx`
    pub fn accumulate(&mut self, idx: usize, val: T) {
        if !self.occupied[idx] {
            self.occupied[idx] = true;
            self.indices.push(idx);
            self.values[idx] = val;
        } else {
            self.values[idx] += val;
        }
    }

    /// Number of touched positions
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing has been accumulated since the last reset
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Hands every touched (position, value) to `sink`, then resets
    pub fn drain_with<F>(&mut self, mut sink: F)
    where
        F: FnMut(usize, T),
    {
        for &idx in &self.indices {
            sink(idx, self.values[idx]);
        }
        self.reset();
    }

    /// Extracts the nonzero entries sorted by position, then resets
    ///
    /// Positions whose contributions cancelled to zero are dropped.
    pub fn drain_sorted(&mut self) -> (Vec<usize>, Vec<T>) {
        self.indices.sort_unstable();

        let mut positions = Vec::with_capacity(self.indices.len());
        let mut values = Vec::with_capacity(self.indices.len());
        for &idx in &self.indices {
            let v = self.values[idx];
            if !v.is_zero() {
                positions.push(idx);
                values.push(v);
            }
        }

        self.reset();
        (positions, values)
    }
}

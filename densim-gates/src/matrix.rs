//! Dense square gate matrices in row-major order
//!
//! A `GateMatrix` acting on `k` qubits has dimension `2^k`. Bit `j` of a row or
//! column index selects the value of the j-th qubit listed at the call site,
//! so the matrix layout and the caller's qubit ordering are coupled: for
//! `CNOT` applied to `[control, target]`, index bit 0 is the control.

use crate::error::{GateError, Result};
use num_complex::Complex64;
use std::fmt;

/// Square complex matrix of dimension `2^k`, stored row-major
#[derive(Clone, PartialEq)]
pub struct GateMatrix {
    dimension: usize,
    data: Vec<Complex64>,
}

impl GateMatrix {
    /// Build a matrix from a slice of rows
    ///
    /// # Errors
    /// Returns [`GateError::InvalidMatrix`] if the input is empty, ragged,
    /// not square, or its dimension is not a power of two.
    ///
    /// # Example
    /// ```
    /// use densim_gates::GateMatrix;
    /// use num_complex::Complex64;
    ///
    /// let zero = Complex64::new(0.0, 0.0);
    /// let one = Complex64::new(1.0, 0.0);
    /// let x = GateMatrix::from_rows(&[vec![zero, one], vec![one, zero]]).unwrap();
    /// assert_eq!(x.num_qubits(), 1);
    /// ```
    pub fn from_rows<R: AsRef<[Complex64]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        if dimension == 0 || !dimension.is_power_of_two() {
            return Err(GateError::InvalidMatrix {
                reason: format!("dimension {} is not a power of two", dimension),
            });
        }

        let mut data = Vec::with_capacity(dimension * dimension);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dimension {
                return Err(GateError::InvalidMatrix {
                    reason: format!(
                        "row {} has {} entries, expected {}",
                        index,
                        row.len(),
                        dimension
                    ),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { dimension, data })
    }

    /// Build a matrix from a fixed-size array
    ///
    /// # Errors
    /// Returns [`GateError::InvalidMatrix`] if `N` is not a power of two.
    pub fn from_array<const N: usize>(rows: [[Complex64; N]; N]) -> Result<Self> {
        Self::from_rows(&rows)
    }

    /// Catalog constants are 2×2 or 4×4 by construction.
    pub(crate) fn from_table<const N: usize>(rows: &[[Complex64; N]; N]) -> Self {
        debug_assert!(N.is_power_of_two());
        Self {
            dimension: N,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Identity on `num_qubits` qubits
    ///
    /// # Panics
    /// Panics if `2^num_qubits` squared does not fit in `usize`.
    pub fn identity(num_qubits: usize) -> Self {
        assert!(
            num_qubits < (usize::BITS / 2) as usize,
            "identity on {num_qubits} qubits does not fit in memory"
        );
        let dimension = 1 << num_qubits;
        let mut data = vec![Complex64::new(0.0, 0.0); dimension * dimension];
        for i in 0..dimension {
            data[i * dimension + i] = Complex64::new(1.0, 0.0);
        }
        Self { dimension, data }
    }

    /// Number of rows (and columns)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of qubits the matrix acts on
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.dimension.trailing_zeros() as usize
    }

    /// Entry at `(row, col)`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        assert!(row < self.dimension && col < self.dimension);
        self.data[row * self.dimension + col]
    }

    /// One row of the matrix
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[Complex64] {
        &self.data[row * self.dimension..(row + 1) * self.dimension]
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.data.chunks_exact(self.dimension)
    }

    /// Row-major backing storage
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Multiply by a column vector: `output[row] = Σ_col self[row][col] · input[col]`
    ///
    /// Both slices must have length `dimension()`.
    #[inline]
    pub fn mul_vec_into(&self, input: &[Complex64], output: &mut [Complex64]) {
        debug_assert_eq!(input.len(), self.dimension);
        debug_assert_eq!(output.len(), self.dimension);

        for (row, out) in self.rows().zip(output.iter_mut()) {
            *out = row.iter().zip(input).map(|(m, v)| m * v).sum();
        }
    }

    /// Conjugate transpose U†
    pub fn adjoint(&self) -> Self {
        let n = self.dimension;
        let mut data = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                data.push(self.data[col * n + row].conj());
            }
        }
        Self { dimension: n, data }
    }

    /// Matrix product `self · other`
    ///
    /// # Errors
    /// Returns [`GateError::InvalidMatrix`] if the dimensions differ.
    pub fn matmul(&self, other: &GateMatrix) -> Result<Self> {
        if self.dimension != other.dimension {
            return Err(GateError::InvalidMatrix {
                reason: format!(
                    "cannot multiply {0}x{0} by {1}x{1}",
                    self.dimension, other.dimension
                ),
            });
        }

        let n = self.dimension;
        let mut data = vec![Complex64::new(0.0, 0.0); n * n];
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k];
                for j in 0..n {
                    data[i * n + j] += a * other.data[k * n + j];
                }
            }
        }
        Ok(Self { dimension: n, data })
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &GateMatrix, epsilon: f64) -> bool {
        self.dimension == other.dimension
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).norm() <= epsilon)
    }

    /// Check U†U = I within `epsilon`
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        match self.adjoint().matmul(self) {
            Ok(product) => product.approx_eq(&Self::identity(self.num_qubits()), epsilon),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for GateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[Complex64]> = self.rows().collect();
        f.debug_struct("GateMatrix")
            .field("dimension", &self.dimension)
            .field("rows", &rows)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_rows_rejects_non_power_of_two() {
        let rows = vec![vec![c(1.0, 0.0); 3]; 3];
        assert!(matches!(
            GateMatrix::from_rows(&rows),
            Err(GateError::InvalidMatrix { .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![c(1.0, 0.0), c(0.0, 0.0)], vec![c(1.0, 0.0)]];
        let err = GateMatrix::from_rows(&rows).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        let rows: Vec<Vec<Complex64>> = Vec::new();
        assert!(GateMatrix::from_rows(&rows).is_err());
    }

    #[test]
    fn test_identity_layout() {
        let id = GateMatrix::identity(2);
        assert_eq!(id.dimension(), 4);
        assert_eq!(id.num_qubits(), 2);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id.get(i, j), c(expected, 0.0));
            }
        }
    }

    #[test]
    fn test_mul_vec_row_major() {
        // [[1, 2], [3, 4]] · [1, i]
        let m = GateMatrix::from_array([[c(1.0, 0.0), c(2.0, 0.0)], [c(3.0, 0.0), c(4.0, 0.0)]])
            .unwrap();
        let input = [c(1.0, 0.0), c(0.0, 1.0)];
        let mut output = [c(0.0, 0.0); 2];
        m.mul_vec_into(&input, &mut output);

        assert_relative_eq!(output[0].re, 1.0);
        assert_relative_eq!(output[0].im, 2.0);
        assert_relative_eq!(output[1].re, 3.0);
        assert_relative_eq!(output[1].im, 4.0);
    }

    #[test]
    fn test_adjoint_conjugates_and_transposes() {
        let m = GateMatrix::from_array([[c(1.0, 1.0), c(2.0, -1.0)], [c(0.0, 3.0), c(4.0, 0.0)]])
            .unwrap();
        let adj = m.adjoint();
        assert_eq!(adj.get(0, 0), c(1.0, -1.0));
        assert_eq!(adj.get(0, 1), c(0.0, -3.0));
        assert_eq!(adj.get(1, 0), c(2.0, 1.0));
        assert_eq!(adj.get(1, 1), c(4.0, 0.0));
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = GateMatrix::identity(1);
        let b = GateMatrix::identity(2);
        assert!(a.matmul(&b).is_err());
    }

    #[test]
    fn test_non_unitary_detected() {
        let m = GateMatrix::from_array([[c(1.0, 0.0), c(1.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]])
            .unwrap();
        assert!(!m.is_unitary(1e-10));
        assert!(GateMatrix::identity(3).is_unitary(1e-12));
    }

    #[test]
    #[should_panic(expected = "does not fit in memory")]
    fn test_identity_rejects_oversized_register() {
        let _ = GateMatrix::identity((usize::BITS / 2) as usize);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let _ = GateMatrix::identity(1).row(2);
    }
}

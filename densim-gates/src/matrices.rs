//! Constant unitaries backing the standard catalog
//!
//! Row/column bit `j` corresponds to the j-th qubit passed at the call site.
//! For the two-qubit tables this means index bit 0 is the first operand
//! (the control for `CNOT`) and bit 1 is the second.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

/// 1/√2
pub const INV_SQRT2: f64 = 0.7071067811865476;

const S: Complex64 = Complex64::new(INV_SQRT2, 0.0);
const NEG_S: Complex64 = Complex64::new(-INV_SQRT2, 0.0);

// (1 ± i)/2 and negations, used by the square-root rotations
const HALF_P_P: Complex64 = Complex64::new(0.5, 0.5);
const HALF_P_N: Complex64 = Complex64::new(0.5, -0.5);
const HALF_N_P: Complex64 = Complex64::new(-0.5, 0.5);
const HALF_N_N: Complex64 = Complex64::new(-0.5, -0.5);

/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, ONE]];

// Pauli gates

/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [[ZERO, ONE], [ONE, ZERO]];

/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [[ZERO, NEG_I], [I, ZERO]];

/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_ONE]];

// Axis exchange gates

/// H = H_XZ = 1/√2 * [[1,  1],
///                    [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [[S, S], [S, NEG_S]];

/// H_XY = 1/√2 * [[0,   1-i],
///                [1+i, 0  ]]
pub const H_XY: [[Complex64; 2]; 2] = [
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
    [Complex64::new(INV_SQRT2, INV_SQRT2), ZERO],
];

/// H_YZ = 1/√2 * [[1, -i],
///                [i, -1]]
pub const H_YZ: [[Complex64; 2]; 2] = [
    [S, Complex64::new(0.0, -INV_SQRT2)],
    [Complex64::new(0.0, INV_SQRT2), NEG_S],
];

// 90 degree rotations

/// √X = 1/2 * [[1+i, 1-i],
///             [1-i, 1+i]]
pub const SQRT_X: [[Complex64; 2]; 2] = [[HALF_P_P, HALF_P_N], [HALF_P_N, HALF_P_P]];

/// √X† = 1/2 * [[1-i, 1+i],
///              [1+i, 1-i]]
pub const SQRT_X_DAG: [[Complex64; 2]; 2] = [[HALF_P_N, HALF_P_P], [HALF_P_P, HALF_P_N]];

/// √Y = 1/2 * [[1+i, -1-i],
///             [1+i,  1+i]]
pub const SQRT_Y: [[Complex64; 2]; 2] = [[HALF_P_P, HALF_N_N], [HALF_P_P, HALF_P_P]];

/// √Y† = 1/2 * [[ 1-i, 1-i],
///              [-1+i, 1-i]]
pub const SQRT_Y_DAG: [[Complex64; 2]; 2] = [[HALF_P_N, HALF_P_N], [HALF_N_P, HALF_P_N]];

/// S = √Z = [[1, 0],
///           [0, i]]
pub const S_GATE: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, I]];

/// S† = √Z† = [[1,  0],
///             [0, -i]]
pub const S_GATE_DAGGER: [[Complex64; 2]; 2] = [[ONE, ZERO], [ZERO, NEG_I]];

// Two-qubit gates

/// CNOT with index bit 0 = control, bit 1 = target
///
/// |c=1, t=0⟩ (index 1) ↔ |c=1, t=1⟩ (index 3)
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
];

/// CZ = diag(1, 1, 1, -1)
pub const CZ: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, NEG_ONE],
];

/// SWAP exchanges indices 1 and 2
pub const SWAP: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

//! Signed Pauli strings
//!
//! A Pauli string is a tensor product of single-qubit Paulis over a
//! contiguous run of qubits, with an overall sign of ±1. Each position stores
//! an X bit and a Z bit:
//!
//! | X | Z | Pauli |
//! |---|---|-------|
//! | 0 | 0 | I     |
//! | 1 | 0 | X     |
//! | 0 | 1 | Z     |
//! | 1 | 1 | Y     |
//!
//! Y is never stored on its own; it is the combination of both bits.
//!
//! # Text form
//!
//! An optional `+` or `-` followed by one character per qubit from
//! `I`/`_`, `X`, `Y`, `Z` (case-insensitive), e.g. `"-X_Z"`.

use crate::error::PauliParseError;
use std::fmt;
use std::str::FromStr;

/// Single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity operator
    I,
    /// Pauli X (bit flip)
    X,
    /// Pauli Y
    Y,
    /// Pauli Z (phase flip)
    Z,
}

impl Pauli {
    /// Parse a Pauli operator from a character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' | '_' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Convert to character representation (`_` for identity)
    pub fn to_char(self) -> char {
        match self {
            Pauli::I => '_',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Decode from an (X bit, Z bit) pair
    #[inline]
    pub fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (false, true) => Pauli::Z,
            (true, true) => Pauli::Y,
        }
    }

    /// Encode as an (X bit, Z bit) pair
    #[inline]
    pub fn bits(self) -> (bool, bool) {
        match self {
            Pauli::I => (false, false),
            Pauli::X => (true, false),
            Pauli::Z => (false, true),
            Pauli::Y => (true, true),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A signed tensor product of Pauli operators
///
/// ```
/// use densim_state::{Pauli, PauliString};
///
/// let p: PauliString = "-XZ".parse().unwrap();
/// assert_eq!(p.len(), 2);
/// assert!(p.is_negative());
/// assert_eq!(p.get(1), Some(Pauli::Z));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    xs: Vec<bool>,
    zs: Vec<bool>,
    negative: bool,
}

impl PauliString {
    /// Identity string of the given length with a positive sign
    pub fn identity(len: usize) -> Self {
        Self {
            xs: vec![false; len],
            zs: vec![false; len],
            negative: false,
        }
    }

    /// Build a positive string from a sequence of Paulis
    pub fn from_paulis<I: IntoIterator<Item = Pauli>>(paulis: I) -> Self {
        let (xs, zs) = paulis.into_iter().map(Pauli::bits).unzip();
        Self {
            xs,
            zs,
            negative: false,
        }
    }

    /// Set the overall sign
    pub fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Number of qubits covered
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Whether the overall sign is -1
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn x_bit(&self, k: usize) -> bool {
        self.xs[k]
    }

    #[inline]
    pub fn z_bit(&self, k: usize) -> bool {
        self.zs[k]
    }

    /// Pauli at position `k`, or `None` past the end
    pub fn get(&self, k: usize) -> Option<Pauli> {
        if k < self.len() {
            Some(Pauli::from_bits(self.xs[k], self.zs[k]))
        } else {
            None
        }
    }

    /// Replace the Pauli at position `k`
    ///
    /// # Panics
    /// Panics if `k >= len()`.
    pub fn set(&mut self, k: usize, pauli: Pauli) {
        let (x, z) = pauli.bits();
        self.xs[k] = x;
        self.zs[k] = z;
    }

    /// Iterate over the factors in qubit order
    pub fn iter(&self) -> impl Iterator<Item = Pauli> + '_ {
        self.xs
            .iter()
            .zip(&self.zs)
            .map(|(&x, &z)| Pauli::from_bits(x, z))
    }

    /// Number of non-identity factors
    pub fn weight(&self) -> usize {
        self.xs.iter().zip(&self.zs).filter(|(x, z)| **x || **z).count()
    }
}

impl FromStr for PauliString {
    type Err = PauliParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body, skipped) = match s.chars().next() {
            Some('-') => (true, &s[1..], 1),
            Some('+') => (false, &s[1..], 1),
            _ => (false, s, 0),
        };

        let mut xs = Vec::with_capacity(body.len());
        let mut zs = Vec::with_capacity(body.len());
        for (position, character) in body.chars().enumerate() {
            let pauli = Pauli::from_char(character).ok_or(PauliParseError::InvalidCharacter {
                character,
                position: position + skipped,
            })?;
            let (x, z) = pauli.bits();
            xs.push(x);
            zs.push(z);
        }

        Ok(Self { xs, zs, negative })
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.negative { '-' } else { '+' })?;
        for pauli in self.iter() {
            write!(f, "{}", pauli)?;
        }
        Ok(())
    }
}

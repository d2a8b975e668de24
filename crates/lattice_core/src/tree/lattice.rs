//! Recombining-tree container.
//!
//! A binomial tree over `T` periods collapses into a triangle of `T + 1`
//! levels, where level `i` holds exactly `i + 1` nodes. The same container
//! carries stock prices on the way forward and option values on the way
//! back, so the shape invariant lives here and is checked exactly once, at
//! construction.

use crate::types::LatticeError;
use num_traits::Float;

/// Triangular container for node values of a recombining binomial tree.
///
/// Level `i` (for `i` in `0..=periods`) holds exactly `i + 1` values. Node
/// `(i, j)` is the node of level `i` reached by `i - j` up-moves and `j`
/// down-moves, so `j = 0` is the top of the level and `j = i` the bottom.
/// The container is immutable once built.
///
/// Stock lattices built with `up > down > 0` from a positive spot hold each
/// level in strictly descending order; that is a property of the builder,
/// not of this container, because option-value triangles generally repeat
/// values (e.g. a terminal payoff clipped at zero).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use lattice_core::tree::Lattice;
///
/// let lattice = Lattice::from_levels(vec![
///     vec![100.0],
///     vec![110.0, 90.0],
///     vec![121.0, 99.0, 81.0],
/// ])
/// .unwrap();
///
/// assert_eq!(lattice.periods(), 2);
/// assert_eq!(lattice.root(), 100.0);
/// assert_eq!(lattice.node(2, 2), Some(81.0));
/// assert_eq!(lattice.terminal(), &[121.0, 99.0, 81.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lattice<T: Float> {
    /// Node values per level; level `i` holds `i + 1` entries.
    levels: Vec<Vec<T>>,
}

impl<T: Float> Lattice<T> {
    /// Construct a lattice from explicit levels, validating the shape.
    ///
    /// # Arguments
    ///
    /// * `levels` - One `Vec` per level; level `i` must hold `i + 1` values
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::ShapeMismatch`] if `levels` is empty or any
    /// level `i` does not hold exactly `i + 1` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use lattice_core::tree::Lattice;
    ///
    /// let result = Lattice::from_levels(vec![vec![1.0], vec![2.0]]);
    /// assert!(result.is_err()); // level 1 must hold two entries
    /// ```
    pub fn from_levels(levels: Vec<Vec<T>>) -> Result<Self, LatticeError> {
        if levels.is_empty() {
            return Err(LatticeError::ShapeMismatch {
                context: "lattice levels",
                expected: 1,
                found: 0,
            });
        }
        for (i, level) in levels.iter().enumerate() {
            if level.len() != i + 1 {
                return Err(LatticeError::ShapeMismatch {
                    context: "lattice level",
                    expected: i + 1,
                    found: level.len(),
                });
            }
        }
        Ok(Self { levels })
    }

    /// Return the number of periods `T` (one less than the level count).
    #[inline]
    pub fn periods(&self) -> usize {
        self.levels.len() - 1
    }

    /// Return all levels, outermost index is the period.
    #[inline]
    pub fn levels(&self) -> &[Vec<T>] {
        &self.levels
    }

    /// Return the nodes of level `period`, or `None` past the last level.
    #[inline]
    pub fn level(&self, period: usize) -> Option<&[T]> {
        self.levels.get(period).map(Vec::as_slice)
    }

    /// Return the value at node `(period, index)`, or `None` out of range.
    #[inline]
    pub fn node(&self, period: usize, index: usize) -> Option<T> {
        self.levels.get(period)?.get(index).copied()
    }

    /// Return the single value at level 0.
    #[inline]
    pub fn root(&self) -> T {
        self.levels[0][0]
    }

    /// Return the nodes of the last level.
    #[inline]
    pub fn terminal(&self) -> &[T] {
        &self.levels[self.levels.len() - 1]
    }
}

//! Reusable row buffers for the distance table.
//!
//! The engine only needs the previous and current rows of the dynamic
//! programming table, plus the insertion cost of every target element. A
//! [`DistanceWorkspace`] owns those three buffers so that repeated calls with
//! similar-sized inputs stop allocating once the buffers have grown.
//!
//! # Thread Safety
//!
//! A workspace is mutable scratch space and belongs to one caller at a time.
//! For parallel scoring use one workspace per thread; the engine itself never
//! stores one.

/// Caller-owned scratch buffers for [`LevenshteinDistance::distance_with`].
///
/// [`LevenshteinDistance::distance_with`]: super::LevenshteinDistance::distance_with
///
/// # Usage
///
/// ```rust
/// use phonetic_distance::distance::{DistanceWorkspace, LevenshteinDistance};
///
/// let engine = LevenshteinDistance::unit();
/// let mut workspace = DistanceWorkspace::new();
///
/// let reference = ['k', 'a', 't'];
/// for candidate in [['k', 'a', 't'], ['k', 'a', 'p'], ['b', 'a', 'p']] {
///     let d = engine.distance_with(&mut workspace, &reference, &candidate);
///     assert!(d <= 2.0);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceWorkspace {
    previous: Vec<f64>,
    current: Vec<f64>,
    insertion: Vec<f64>,
}

impl DistanceWorkspace {
    /// Create an empty workspace. Buffers grow on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace pre-sized for targets of up to `target_len`
    /// elements.
    pub fn with_capacity(target_len: usize) -> Self {
        let width = target_len + 1;
        Self {
            previous: Vec::with_capacity(width),
            current: Vec::with_capacity(width),
            insertion: Vec::with_capacity(target_len),
        }
    }

    /// Longest target length the workspace can handle without reallocating.
    pub fn capacity(&self) -> usize {
        self.previous
            .capacity()
            .min(self.current.capacity())
            .saturating_sub(1)
            .min(self.insertion.capacity())
    }

    /// Reset the buffers for a table of `target_len + 1` columns and hand them
    /// out as `(previous_row, current_row, insertion_costs)`.
    pub(crate) fn prepare(&mut self, target_len: usize) -> (&mut [f64], &mut [f64], &mut Vec<f64>) {
        let width = target_len + 1;

        self.previous.clear();
        self.previous.resize(width, 0.0);
        self.current.clear();
        self.current.resize(width, 0.0);
        self.insertion.clear();
        self.insertion.reserve(target_len);

        (
            self.previous.as_mut_slice(),
            self.current.as_mut_slice(),
            &mut self.insertion,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let workspace = DistanceWorkspace::new();
        assert_eq!(workspace.capacity(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let workspace = DistanceWorkspace::with_capacity(16);
        assert!(workspace.capacity() >= 16);
    }

    #[test]
    fn test_prepare_sizes_rows() {
        let mut workspace = DistanceWorkspace::new();
        {
            let (previous, current, insertion) = workspace.prepare(4);
            assert_eq!(previous.len(), 5);
            assert_eq!(current.len(), 5);
            assert!(insertion.is_empty());
            previous[3] = 7.0;
            insertion.push(1.0);
        }

        // Buffers are cleared between uses and keep their allocation.
        let (previous, _, insertion) = workspace.prepare(2);
        assert_eq!(&previous[..], &[0.0, 0.0, 0.0][..]);
        assert!(insertion.is_empty());
        assert!(workspace.capacity() >= 4);
    }
}

//! Generic weighted Levenshtein distance.
//!
//! [`LevenshteinDistance`] computes the minimum total cost of insertions,
//! deletions and substitutions turning one sequence into another. What each
//! operation costs is decided by its [`CostPolicy`], so the same engine runs
//! over characters, bytes or phonetic segments.
//!
//! The table is filled row by row:
//!
//! ```text
//! D[0][0] = 0
//! D[i][0] = D[i-1][0] + indel(A[i-1])
//! D[0][j] = D[0][j-1] + indel(B[j-1])
//! D[i][j] = min(D[i-1][j]   + indel(A[i-1]),            // deletion
//!               D[i][j-1]   + indel(B[j-1]),            // insertion
//!               D[i-1][j-1] + subst(A[i-1], B[j-1]))    // substitution
//! ```
//!
//! Only the previous row is kept, so memory is linear in the target length.
//! Only the final cost is reported; no edit script is reconstructed.

use log::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::policy::{CostPolicy, UnitCost};
use super::workspace::DistanceWorkspace;

/// Weighted edit distance engine.
///
/// The engine is stateless apart from its policy: every call allocates (or
/// borrows from a caller's [`DistanceWorkspace`]) its own rows, so one engine
/// may be shared across threads and reused for any number of comparisons.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::LevenshteinDistance;
///
/// let engine = LevenshteinDistance::unit();
/// let kitten: Vec<char> = "kitten".chars().collect();
/// let sitting: Vec<char> = "sitting".chars().collect();
/// assert_eq!(engine.distance(&kitten, &sitting), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LevenshteinDistance<P = UnitCost> {
    policy: P,
}

impl LevenshteinDistance<UnitCost> {
    /// Create a unit-cost engine: the classic Levenshtein distance.
    #[inline]
    pub const fn unit() -> Self {
        Self::new(UnitCost)
    }
}

impl<P> LevenshteinDistance<P> {
    /// Create an engine pricing operations with `policy`.
    #[inline]
    pub const fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The cost policy in use.
    #[inline]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Minimum total cost of transforming `source` into `target`.
    ///
    /// Empty sequences are valid: the distance from an empty sequence is the
    /// summed insertion cost of the other one.
    pub fn distance<T>(&self, source: &[T], target: &[T]) -> f64
    where
        P: CostPolicy<T>,
    {
        let mut workspace = DistanceWorkspace::new();
        self.distance_with(&mut workspace, source, target)
    }

    /// Same as [`distance`](Self::distance), reusing `workspace` for the rows
    /// instead of allocating them.
    pub fn distance_with<T>(
        &self,
        workspace: &mut DistanceWorkspace,
        source: &[T],
        target: &[T],
    ) -> f64
    where
        P: CostPolicy<T>,
    {
        let (trimmed_source, trimmed_target) = self.strip_common_affixes(source, target);
        let distance = self.table_distance(workspace, trimmed_source, trimmed_target);

        trace!(
            "distance {}x{} (trimmed to {}x{}) = {}",
            source.len(),
            target.len(),
            trimmed_source.len(),
            trimmed_target.len(),
            distance
        );
        distance
    }

    /// Distance scaled into `[0, 1]`.
    ///
    /// The distance is divided by the larger of the two sequences' summed
    /// indel costs and clamped to `1.0`. Under [`UnitCost`] that is the
    /// familiar `d / max(m, n)`. Two sequences that cost nothing to insert
    /// (including two empty ones) have a normalized distance of `0.0`.
    pub fn normalized_distance<T>(&self, source: &[T], target: &[T]) -> f64
    where
        P: CostPolicy<T>,
    {
        let scale = self.indel_total(source).max(self.indel_total(target));
        if scale <= 0.0 {
            return 0.0;
        }
        (self.distance(source, target) / scale).min(1.0)
    }

    /// How closely `candidate` matches `reference`, from `0.0` (nothing in
    /// common) to `1.0` (identical under the policy).
    ///
    /// This is `1.0 - normalized_distance(reference, candidate)`.
    pub fn similarity<T>(&self, reference: &[T], candidate: &[T]) -> f64
    where
        P: CostPolicy<T>,
    {
        1.0 - self.normalized_distance(reference, candidate)
    }

    /// Distance from `reference` to each candidate, in candidate order.
    ///
    /// A single workspace is reused across the candidates.
    pub fn distances<T, S>(&self, reference: &[T], candidates: &[S]) -> Vec<f64>
    where
        P: CostPolicy<T>,
        S: AsRef<[T]>,
    {
        let mut workspace = DistanceWorkspace::with_capacity(
            candidates
                .iter()
                .map(|candidate| candidate.as_ref().len())
                .max()
                .unwrap_or(0),
        );

        candidates
            .iter()
            .map(|candidate| self.distance_with(&mut workspace, reference, candidate.as_ref()))
            .collect()
    }

    /// Parallel [`distances`](Self::distances) on the rayon thread pool.
    ///
    /// Each worker keeps its own workspace. Results are in candidate order.
    #[cfg(feature = "parallel")]
    pub fn par_distances<T, S>(&self, reference: &[T], candidates: &[S]) -> Vec<f64>
    where
        P: CostPolicy<T> + Sync,
        T: Sync,
        S: AsRef<[T]> + Sync,
    {
        candidates
            .par_iter()
            .map_init(DistanceWorkspace::new, |workspace, candidate| {
                self.distance_with(workspace, reference, candidate.as_ref())
            })
            .collect()
    }

    fn indel_total<T>(&self, sequence: &[T]) -> f64
    where
        P: CostPolicy<T>,
    {
        sequence
            .iter()
            .fold(0.0, |total, x| total + self.policy.insert_delete_cost(x))
    }

    /// Strip leading and trailing pairs with zero substitution cost, when the
    /// policy allows it.
    ///
    /// Mirrors the prefix/suffix optimization of the plain string distance:
    /// for strings with substantial overlap only the differing middle is left
    /// for the table.
    fn strip_common_affixes<'a, T>(&self, source: &'a [T], target: &'a [T]) -> (&'a [T], &'a [T])
    where
        P: CostPolicy<T>,
    {
        if !self.policy.trims_common_affixes() {
            return (source, target);
        }

        let matches = |(a, b): (&T, &T)| self.policy.substitution_cost(a, b) == 0.0;

        let prefix_len = source
            .iter()
            .zip(target)
            .take_while(|&pair| matches(pair))
            .count();
        let (source, target) = (&source[prefix_len..], &target[prefix_len..]);

        // The prefix is gone, so the suffix cannot overlap it.
        let suffix_len = source
            .iter()
            .rev()
            .zip(target.iter().rev())
            .take_while(|&pair| matches(pair))
            .count();

        (
            &source[..source.len() - suffix_len],
            &target[..target.len() - suffix_len],
        )
    }

    fn table_distance<T>(&self, workspace: &mut DistanceWorkspace, source: &[T], target: &[T]) -> f64
    where
        P: CostPolicy<T>,
    {
        let policy = &self.policy;

        if source.is_empty() {
            return self.indel_total(target);
        }
        if target.is_empty() {
            return self.indel_total(source);
        }

        let n = target.len();
        let (mut prev_row, mut curr_row, insertion) = workspace.prepare(n);
        insertion.extend(target.iter().map(|x| policy.insert_delete_cost(x)));

        // First row: insert every target prefix
        for j in 0..n {
            prev_row[j + 1] = prev_row[j] + insertion[j];
        }

        for a in source {
            let deletion = policy.insert_delete_cost(a);
            curr_row[0] = prev_row[0] + deletion;

            for (j, b) in target.iter().enumerate() {
                curr_row[j + 1] = (prev_row[j + 1] + deletion) // deletion
                    .min(curr_row[j] + insertion[j]) // insertion
                    .min(prev_row[j] + policy.substitution_cost(a, b)); // substitution
            }

            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[n]
    }
}

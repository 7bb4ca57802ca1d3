//! Edit distance between sequences of phones.

use super::engine::LevenshteinDistance;
use super::phonetic_cost::PhoneticCost;
use super::policy::{CostPolicy, UnitCost};
use super::workspace::DistanceWorkspace;
use crate::phonetic::Phone;

/// Weighted Levenshtein distance over [`Phone`] sequences.
///
/// The default policy is [`UnitCost`]: two phones match only when every
/// feature is equal. [`PhoneSequenceDistance::phonetic`] switches to
/// [`PhoneticCost`], which charges less for substituting similar sounds.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::PhoneSequenceDistance;
/// use phonetic_distance::phonetic::{Phone, Phonation, Place, Manner, Height, Backness, Roundedness};
///
/// let p = Phone::consonant(Phonation::Voiceless, Place::Bilabial, Manner::Plosive);
/// let t = Phone::consonant(Phonation::Voiceless, Place::Alveolar, Manner::Plosive);
/// let i = Phone::vowel(Height::Close, Backness::Front, Roundedness::Unrounded, false);
///
/// let phones = PhoneSequenceDistance::new();
/// assert_eq!(phones.distance(&[p, t, i], &[p, t, i]), 0.0);
/// assert_eq!(phones.distance(&[p, t, i], &[p, i]), 1.0);
///
/// let graded = PhoneSequenceDistance::phonetic();
/// assert!(graded.distance(&[p, i], &[t, i]) < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhoneSequenceDistance<P = UnitCost> {
    engine: LevenshteinDistance<P>,
}

impl PhoneSequenceDistance<UnitCost> {
    /// Create a phone distance where any mismatch costs 1.
    #[inline]
    pub const fn new() -> Self {
        Self::with_policy(UnitCost)
    }
}

impl PhoneSequenceDistance<PhoneticCost> {
    /// Create a phone distance with the default [`PhoneticCost`].
    pub fn phonetic() -> Self {
        Self::with_policy(PhoneticCost::default())
    }
}

impl<P: CostPolicy<Phone>> PhoneSequenceDistance<P> {
    /// Create a phone distance pricing operations with `policy`.
    #[inline]
    pub const fn with_policy(policy: P) -> Self {
        Self {
            engine: LevenshteinDistance::new(policy),
        }
    }

    /// The cost policy in use.
    #[inline]
    pub fn policy(&self) -> &P {
        self.engine.policy()
    }

    /// Edit distance between two phone sequences.
    pub fn distance(&self, a: &[Phone], b: &[Phone]) -> f64 {
        self.engine.distance(a, b)
    }

    /// Same as [`distance`](Self::distance), reusing `workspace`.
    pub fn distance_with(&self, workspace: &mut DistanceWorkspace, a: &[Phone], b: &[Phone]) -> f64 {
        self.engine.distance_with(workspace, a, b)
    }

    /// How closely `candidate` matches `reference`, in `[0, 1]`.
    ///
    /// See [`LevenshteinDistance::similarity`].
    pub fn similarity(&self, reference: &[Phone], candidate: &[Phone]) -> f64 {
        self.engine.similarity(reference, candidate)
    }

    /// Distance from `reference` to each candidate, in candidate order.
    pub fn distances<S: AsRef<[Phone]>>(&self, reference: &[Phone], candidates: &[S]) -> Vec<f64> {
        self.engine.distances(reference, candidates)
    }

    /// Parallel [`distances`](Self::distances) on the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn par_distances<S>(&self, reference: &[Phone], candidates: &[S]) -> Vec<f64>
    where
        P: Sync,
        S: AsRef<[Phone]> + Sync,
    {
        self.engine.par_distances(reference, candidates)
    }
}

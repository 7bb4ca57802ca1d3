//! Feature-weighted substitution costs for phonetic segments.
//!
//! [`PhoneticCost`] prices the substitution of one [`Phone`] for another by
//! how much of their articulation they share, so that a candidate saying
//! `[d]` for `[t]` scores closer to the reference than one saying `[m]`.
//!
//! # Cost model
//!
//! - identical phones cost `0`
//! - phones of different categories cost `max_substitution_cost`
//! - otherwise the cost is `max_substitution_cost × Σ wᵢ·dᵢ / Σ wᵢ` over the
//!   features of the shared category, with each difference `dᵢ` in `[0, 1]`
//!
//! Features on a physical scale (place, height, backness, phonation) are
//! graded: their difference is the distance between the two ordinals divided
//! by the length of the scale. Manner, roundedness, rhoticity and syllabicity
//! are all-or-nothing. Insertions and deletions cost `indel_cost`.
//!
//! The model is symmetric, so distances computed with it are symmetric too.

use log::debug;

use super::policy::CostPolicy;
use crate::error::CostConfigError;
use crate::phonetic::{Articulation, Backness, Height, PhoneCategory, Phonation, Phone, Place};

/// Relative importance of each articulatory feature.
///
/// Only the ratios within a category matter: consonant costs are normalized
/// over `place + manner + phonation + syllabic`, vowel costs over
/// `height + backness + roundedness + rhotic + phonation + syllabic`, and
/// costs between two `Other` segments over `phonation + syllabic`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneticWeights {
    /// Consonant place of articulation
    pub place: f64,
    /// Consonant manner of articulation
    pub manner: f64,
    /// Vowel height
    pub height: f64,
    /// Vowel backness
    pub backness: f64,
    /// Vowel lip rounding
    pub roundedness: f64,
    /// Vowel r-colouring
    pub rhotic: f64,
    /// Phonation, for every category
    pub phonation: f64,
    /// Syllabicity, for every category
    pub syllabic: f64,
}

impl Default for PhoneticWeights {
    fn default() -> Self {
        Self {
            place: 1.0,
            manner: 1.0,
            height: 1.0,
            backness: 1.0,
            roundedness: 0.5,
            rhotic: 0.5,
            phonation: 0.5,
            syllabic: 0.25,
        }
    }
}

impl PhoneticWeights {
    fn consonant_total(&self) -> f64 {
        self.place + self.manner + self.phonation + self.syllabic
    }

    fn vowel_total(&self) -> f64 {
        self.height + self.backness + self.roundedness + self.rhotic + self.phonation + self.syllabic
    }

    fn other_total(&self) -> f64 {
        self.phonation + self.syllabic
    }

    fn validate(&self) -> Result<(), CostConfigError> {
        for (name, value) in [
            ("place weight", self.place),
            ("manner weight", self.manner),
            ("height weight", self.height),
            ("backness weight", self.backness),
            ("roundedness weight", self.roundedness),
            ("rhotic weight", self.rhotic),
            ("phonation weight", self.phonation),
            ("syllabic weight", self.syllabic),
        ] {
            CostConfigError::check(name, value)?;
        }

        for (category, total) in [
            (PhoneCategory::Consonant, self.consonant_total()),
            (PhoneCategory::Vowel, self.vowel_total()),
            (PhoneCategory::Other, self.other_total()),
        ] {
            if total <= 0.0 {
                return Err(CostConfigError::ZeroWeights { category });
            }
        }
        Ok(())
    }
}

/// Graded substitution cost policy for [`Phone`] sequences.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::{CostPolicy, PhoneticCost};
/// use phonetic_distance::phonetic::{Phone, Phonation, Place, Manner};
///
/// let t = Phone::consonant(Phonation::Voiceless, Place::Alveolar, Manner::Plosive);
/// let d = Phone::consonant(Phonation::Modal, Place::Alveolar, Manner::Plosive);
/// let m = Phone::consonant(Phonation::Modal, Place::Bilabial, Manner::Nasal);
///
/// let cost = PhoneticCost::default();
/// assert!(cost.substitution_cost(&t, &d) < cost.substitution_cost(&t, &m));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneticCost {
    weights: PhoneticWeights,
    max_substitution_cost: f64,
    indel_cost: f64,
}

impl Default for PhoneticCost {
    fn default() -> Self {
        Self {
            weights: PhoneticWeights::default(),
            max_substitution_cost: 1.0,
            indel_cost: 1.0,
        }
    }
}

impl PhoneticCost {
    /// Start a builder from the default configuration.
    pub fn builder() -> PhoneticCostBuilder {
        PhoneticCostBuilder::new()
    }

    /// Feature weights in use.
    pub fn weights(&self) -> &PhoneticWeights {
        &self.weights
    }

    /// Cost of substituting phones that share nothing.
    pub fn max_substitution_cost(&self) -> f64 {
        self.max_substitution_cost
    }

    /// Cost of inserting or deleting a phone.
    pub fn indel_cost(&self) -> f64 {
        self.indel_cost
    }

    /// Weighted share of features on which `a` and `b` differ, in `[0, 1]`.
    ///
    /// Phones of different categories differ completely (`1.0`).
    pub fn feature_difference(&self, a: &Phone, b: &Phone) -> f64 {
        let w = &self.weights;
        let phonation = graded(
            a.phonation().ordinal(),
            b.phonation().ordinal(),
            Phonation::scale_len(),
        );
        let syllabic = flag(a.is_syllabic() != b.is_syllabic());

        match (a.articulation(), b.articulation()) {
            (
                Articulation::Consonant {
                    place: place_a,
                    manner: manner_a,
                },
                Articulation::Consonant {
                    place: place_b,
                    manner: manner_b,
                },
            ) => {
                let place = graded(place_a.ordinal(), place_b.ordinal(), Place::scale_len());
                let weighted = w.place * place
                    + w.manner * flag(manner_a != manner_b)
                    + w.phonation * phonation
                    + w.syllabic * syllabic;
                weighted / w.consonant_total()
            }
            (
                Articulation::Vowel {
                    height: height_a,
                    backness: backness_a,
                    roundedness: roundedness_a,
                    rhotic: rhotic_a,
                },
                Articulation::Vowel {
                    height: height_b,
                    backness: backness_b,
                    roundedness: roundedness_b,
                    rhotic: rhotic_b,
                },
            ) => {
                let height = graded(height_a.ordinal(), height_b.ordinal(), Height::scale_len());
                let backness =
                    graded(backness_a.ordinal(), backness_b.ordinal(), Backness::scale_len());
                let weighted = w.height * height
                    + w.backness * backness
                    + w.roundedness * flag(roundedness_a != roundedness_b)
                    + w.rhotic * flag(rhotic_a != rhotic_b)
                    + w.phonation * phonation
                    + w.syllabic * syllabic;
                weighted / w.vowel_total()
            }
            (Articulation::Other, Articulation::Other) => {
                (w.phonation * phonation + w.syllabic * syllabic) / w.other_total()
            }
            _ => 1.0,
        }
    }
}

impl CostPolicy<Phone> for PhoneticCost {
    #[inline]
    fn substitution_cost(&self, a: &Phone, b: &Phone) -> f64 {
        if a == b {
            return 0.0;
        }
        self.max_substitution_cost * self.feature_difference(a, b)
    }

    #[inline]
    fn insert_delete_cost(&self, _x: &Phone) -> f64 {
        self.indel_cost
    }
}

/// Ordinal distance normalized to `[0, 1]` by the span of a scale with
/// `scale_len` values.
#[inline]
fn graded(a: u32, b: u32, scale_len: usize) -> f64 {
    let span = scale_len.saturating_sub(1).max(1) as f64;
    f64::from(a.abs_diff(b)) / span
}

#[inline]
fn flag(differs: bool) -> f64 {
    if differs {
        1.0
    } else {
        0.0
    }
}

/// Builder for a validated [`PhoneticCost`].
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::{PhoneticCost, PhoneticWeights};
///
/// let cost = PhoneticCost::builder()
///     .weights(PhoneticWeights { syllabic: 0.0, ..PhoneticWeights::default() })
///     .indel_cost(1.5)
///     .build()?;
/// assert_eq!(cost.indel_cost(), 1.5);
/// # Ok::<(), phonetic_distance::CostConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhoneticCostBuilder {
    weights: PhoneticWeights,
    max_substitution_cost: f64,
    indel_cost: f64,
}

impl PhoneticCostBuilder {
    /// Create a builder holding the default configuration.
    pub fn new() -> Self {
        let defaults = PhoneticCost::default();
        Self {
            weights: defaults.weights,
            max_substitution_cost: defaults.max_substitution_cost,
            indel_cost: defaults.indel_cost,
        }
    }

    /// Set the feature weights.
    pub fn weights(mut self, weights: PhoneticWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the cost of substituting phones that share nothing.
    pub fn max_substitution_cost(mut self, cost: f64) -> Self {
        self.max_substitution_cost = cost;
        self
    }

    /// Set the cost of inserting or deleting a phone.
    pub fn indel_cost(mut self, cost: f64) -> Self {
        self.indel_cost = cost;
        self
    }

    /// Build the [`PhoneticCost`].
    ///
    /// # Errors
    ///
    /// Returns an error if any cost or weight is negative or not finite, or
    /// if every weight relevant to some category is zero.
    pub fn build(self) -> Result<PhoneticCost, CostConfigError> {
        let result = self.validate().map(|()| PhoneticCost {
            weights: self.weights,
            max_substitution_cost: self.max_substitution_cost,
            indel_cost: self.indel_cost,
        });

        match &result {
            Ok(cost) => debug!("built {:?}", cost),
            Err(err) => debug!("rejected phonetic cost configuration: {}", err),
        }
        result
    }

    fn validate(&self) -> Result<(), CostConfigError> {
        CostConfigError::check("max substitution cost", self.max_substitution_cost)?;
        CostConfigError::check("indel cost", self.indel_cost)?;
        self.weights.validate()
    }
}

impl Default for PhoneticCostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! The [`Phone`] value type.

use std::fmt;

use super::builder::PhoneBuilder;
use super::types::{
    Articulation, Backness, Height, Manner, PhoneCategory, Phonation, Place, Roundedness,
};

/// A single discrete speech sound.
///
/// `Phone` is an immutable value: it is `Copy`, has no setters and no interior
/// mutability, so it can be shared freely between sequences and threads.
/// Values are normally produced by an external phonetic analyzer.
///
/// Category-specific accessors return `None` when the feature does not apply
/// to the phone's category. That is an ordinary answer, not an error.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::phonetic::{Phone, Phonation, Place, Manner, Height};
///
/// let p = Phone::consonant(Phonation::Voiceless, Place::Bilabial, Manner::Plosive);
/// assert_eq!(p.place(), Some(Place::Bilabial));
/// assert_eq!(p.height(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    phonation: Phonation,
    articulation: Articulation,
    syllabic: bool,
}

impl Phone {
    /// Create a phone from its phonation, articulation and syllabicity.
    #[inline]
    pub const fn new(phonation: Phonation, articulation: Articulation, syllabic: bool) -> Self {
        Self {
            phonation,
            articulation,
            syllabic,
        }
    }

    /// Create a non-syllabic consonant.
    #[inline]
    pub const fn consonant(phonation: Phonation, place: Place, manner: Manner) -> Self {
        Self::new(phonation, Articulation::Consonant { place, manner }, false)
    }

    /// Create a modally voiced, syllabic vowel.
    #[inline]
    pub const fn vowel(
        height: Height,
        backness: Backness,
        roundedness: Roundedness,
        rhotic: bool,
    ) -> Self {
        Self::new(
            Phonation::Modal,
            Articulation::Vowel {
                height,
                backness,
                roundedness,
                rhotic,
            },
            true,
        )
    }

    /// Create a segment with no category-specific features, e.g. silence.
    #[inline]
    pub const fn other(phonation: Phonation) -> Self {
        Self::new(phonation, Articulation::Other, false)
    }

    /// Start a validating builder for a phone of the given category.
    pub fn builder(category: PhoneCategory) -> PhoneBuilder {
        PhoneBuilder::new(category)
    }

    /// Category of this phone.
    #[inline]
    pub fn category(&self) -> PhoneCategory {
        self.articulation.category()
    }

    /// Voicing of this phone. Defined for every category.
    #[inline]
    pub fn phonation(&self) -> Phonation {
        self.phonation
    }

    /// Whether this phone forms a syllable nucleus.
    #[inline]
    pub fn is_syllabic(&self) -> bool {
        self.syllabic
    }

    /// Category and category-specific features, for callers that prefer
    /// matching over the individual accessors.
    #[inline]
    pub fn articulation(&self) -> Articulation {
        self.articulation
    }

    /// Place of articulation; `None` unless this is a consonant.
    #[inline]
    pub fn place(&self) -> Option<Place> {
        match self.articulation {
            Articulation::Consonant { place, .. } => Some(place),
            _ => None,
        }
    }

    /// Manner of articulation; `None` unless this is a consonant.
    #[inline]
    pub fn manner(&self) -> Option<Manner> {
        match self.articulation {
            Articulation::Consonant { manner, .. } => Some(manner),
            _ => None,
        }
    }

    /// Vowel height; `None` unless this is a vowel.
    #[inline]
    pub fn height(&self) -> Option<Height> {
        match self.articulation {
            Articulation::Vowel { height, .. } => Some(height),
            _ => None,
        }
    }

    /// Vowel backness; `None` unless this is a vowel.
    #[inline]
    pub fn backness(&self) -> Option<Backness> {
        match self.articulation {
            Articulation::Vowel { backness, .. } => Some(backness),
            _ => None,
        }
    }

    /// Lip rounding; `None` unless this is a vowel.
    #[inline]
    pub fn roundedness(&self) -> Option<Roundedness> {
        match self.articulation {
            Articulation::Vowel { roundedness, .. } => Some(roundedness),
            _ => None,
        }
    }

    /// R-colouring; `None` unless this is a vowel.
    #[inline]
    pub fn is_rhotic(&self) -> Option<bool> {
        match self.articulation {
            Articulation::Vowel { rhotic, .. } => Some(rhotic),
            _ => None,
        }
    }

    /// Returns true if this is a consonant.
    #[inline]
    pub fn is_consonant(&self) -> bool {
        matches!(self.articulation, Articulation::Consonant { .. })
    }

    /// Returns true if this is a vowel.
    #[inline]
    pub fn is_vowel(&self) -> bool {
        matches!(self.articulation, Articulation::Vowel { .. })
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}", self.category(), self.phonation)?;
        if !matches!(self.articulation, Articulation::Other) {
            write!(f, " {}", self.articulation)?;
        }
        // Only the unusual syllabicity for the category is spelled out.
        match (self.is_vowel(), self.syllabic) {
            (false, true) => f.write_str(" syllabic")?,
            (true, false) => f.write_str(" non-syllabic")?,
            _ => {}
        }
        f.write_str("]")
    }
}

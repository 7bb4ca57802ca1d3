//! Builder pattern for assembling [`Phone`] values from loose features.
//!
//! The typed constructors on [`Phone`] cannot express a phone whose features
//! disagree with its category. `PhoneBuilder` is for callers that receive the
//! category and features separately (for example a binding layer reading them
//! from a host object) and need that consistency checked.

use log::debug;

use super::phone::Phone;
use super::types::{
    Articulation, Backness, Height, Manner, PhoneCategory, Phonation, Place, Roundedness,
};
use crate::error::PhoneError;

/// Builder for constructing a [`Phone`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::phonetic::{Phone, PhoneCategory, Place, Manner, Phonation};
///
/// let t = Phone::builder(PhoneCategory::Consonant)
///     .phonation(Phonation::Voiceless)
///     .place(Place::Alveolar)
///     .manner(Manner::Plosive)
///     .build()?;
/// assert_eq!(t.place(), Some(Place::Alveolar));
/// # Ok::<(), phonetic_distance::PhoneError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PhoneBuilder {
    category: PhoneCategory,
    phonation: Option<Phonation>,
    syllabic: Option<bool>,
    place: Option<Place>,
    manner: Option<Manner>,
    height: Option<Height>,
    backness: Option<Backness>,
    roundedness: Option<Roundedness>,
    rhotic: Option<bool>,
}

impl PhoneBuilder {
    /// Create an empty builder for the given category.
    pub fn new(category: PhoneCategory) -> Self {
        PhoneBuilder {
            category,
            phonation: None,
            syllabic: None,
            place: None,
            manner: None,
            height: None,
            backness: None,
            roundedness: None,
            rhotic: None,
        }
    }

    /// Set the phonation. Defaults to [`Phonation::Modal`].
    pub fn phonation(mut self, phonation: Phonation) -> Self {
        self.phonation = Some(phonation);
        self
    }

    /// Set syllabicity. Defaults to `true` for vowels, `false` otherwise.
    pub fn syllabic(mut self, syllabic: bool) -> Self {
        self.syllabic = Some(syllabic);
        self
    }

    /// Set the place of articulation (consonants only).
    pub fn place(mut self, place: Place) -> Self {
        self.place = Some(place);
        self
    }

    /// Set the manner of articulation (consonants only).
    pub fn manner(mut self, manner: Manner) -> Self {
        self.manner = Some(manner);
        self
    }

    /// Set the vowel height (vowels only).
    pub fn height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the vowel backness (vowels only).
    pub fn backness(mut self, backness: Backness) -> Self {
        self.backness = Some(backness);
        self
    }

    /// Set the lip rounding (vowels only).
    pub fn roundedness(mut self, roundedness: Roundedness) -> Self {
        self.roundedness = Some(roundedness);
        self
    }

    /// Set r-colouring (vowels only). Defaults to `false`.
    pub fn rhotic(mut self, rhotic: bool) -> Self {
        self.rhotic = Some(rhotic);
        self
    }

    /// Build the [`Phone`].
    ///
    /// # Errors
    ///
    /// - [`PhoneError::InapplicableAttribute`] if a feature of another
    ///   category was set
    /// - [`PhoneError::MissingAttribute`] if a feature the category requires
    ///   was not set
    pub fn build(self) -> Result<Phone, PhoneError> {
        let category = self.category;
        let result = self.articulation().map(|articulation| {
            Phone::new(
                self.phonation.unwrap_or(Phonation::Modal),
                articulation,
                self.syllabic.unwrap_or(category == PhoneCategory::Vowel),
            )
        });

        if let Err(ref err) = result {
            debug!("rejected {} phone: {}", category, err);
        }
        result
    }

    fn articulation(&self) -> Result<Articulation, PhoneError> {
        let category = self.category;
        let inapplicable = |attribute| PhoneError::InapplicableAttribute {
            attribute,
            category,
        };
        let missing = |attribute| PhoneError::MissingAttribute {
            attribute,
            category,
        };

        if category != PhoneCategory::Consonant {
            if self.place.is_some() {
                return Err(inapplicable("place"));
            }
            if self.manner.is_some() {
                return Err(inapplicable("manner"));
            }
        }
        if category != PhoneCategory::Vowel {
            if self.height.is_some() {
                return Err(inapplicable("height"));
            }
            if self.backness.is_some() {
                return Err(inapplicable("backness"));
            }
            if self.roundedness.is_some() {
                return Err(inapplicable("roundedness"));
            }
            if self.rhotic.is_some() {
                return Err(inapplicable("rhotic"));
            }
        }

        Ok(match category {
            PhoneCategory::Consonant => Articulation::Consonant {
                place: self.place.ok_or_else(|| missing("place"))?,
                manner: self.manner.ok_or_else(|| missing("manner"))?,
            },
            PhoneCategory::Vowel => Articulation::Vowel {
                height: self.height.ok_or_else(|| missing("height"))?,
                backness: self.backness.ok_or_else(|| missing("backness"))?,
                roundedness: self.roundedness.ok_or_else(|| missing("roundedness"))?,
                rhotic: self.rhotic.unwrap_or(false),
            },
            PhoneCategory::Other => Articulation::Other,
        })
    }
}

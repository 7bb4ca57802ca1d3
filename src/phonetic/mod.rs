//! Phonetic segment model.
//!
//! A [`Phone`] is one IPA-style speech sound: a phonation, a syllabicity flag
//! and an [`Articulation`] carrying the category-specific features.
//!
//! # Not-applicable features
//!
//! Consonants have place and manner; vowels have height, backness,
//! roundedness and rhoticity. The accessor for a feature of another category
//! returns `None`:
//!
//! ```rust
//! use phonetic_distance::phonetic::{Phone, Phonation, Place, Manner};
//!
//! let k = Phone::consonant(Phonation::Voiceless, Place::Velar, Manner::Plosive);
//! assert_eq!(k.height(), None);
//! assert_eq!(k.is_rhotic(), None);
//! ```
//!
//! Callers that prefer exhaustive handling can match on
//! [`Phone::articulation`] instead.
//!
//! Phones are normally supplied by an external phonetic analyzer. When the
//! category and features arrive separately, [`PhoneBuilder`] checks that they
//! agree.

pub mod builder;
pub mod phone;
pub mod types;

pub use builder::PhoneBuilder;
pub use phone::Phone;
pub use types::{
    Articulation, Backness, Height, Manner, PhoneCategory, Phonation, Place, Roundedness,
};

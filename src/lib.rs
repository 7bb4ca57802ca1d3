//! # phonetic-distance
//!
//! Weighted Levenshtein distance over strings and phonetic segments.
//!
//! The crate has two halves:
//! - [`phonetic`]: the [`Phone`](phonetic::Phone) value type, a speech sound
//!   described by phonation, syllabicity and category-specific articulatory
//!   features
//! - [`distance`]: a generic edit distance engine parameterized by a
//!   [`CostPolicy`](distance::CostPolicy), plus ready-made string and phone
//!   sequence distances
//!
//! ## Example
//!
//! ```rust
//! use phonetic_distance::prelude::*;
//!
//! assert_eq!(StringDistance::new().distance("kitten", "sitting"), 3.0);
//!
//! let p = Phone::consonant(Phonation::Voiceless, Place::Bilabial, Manner::Plosive);
//! let b = Phone::consonant(Phonation::Modal, Place::Bilabial, Manner::Plosive);
//! let a = Phone::vowel(Height::Open, Backness::Front, Roundedness::Unrounded, false);
//!
//! let strict = PhoneSequenceDistance::new();
//! let graded = PhoneSequenceDistance::phonetic();
//! assert_eq!(strict.distance(&[p, a], &[b, a]), 1.0);
//! assert!(graded.distance(&[p, a], &[b, a]) < 0.5);
//! ```
//!
//! ## Features
//!
//! - `parallel`: `par_distances` batch scoring on the rayon thread pool
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: builder
//! rejections at `debug`, per-call table sizes at `trace`. Nothing is logged
//! unless the application installs a logger.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod phonetic;

pub use error::{CostConfigError, PhoneError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{
        standard_distance, ByteStringDistance, CostPolicy, CustomCost, DistanceWorkspace,
        LevenshteinDistance, PhoneSequenceDistance, PhoneticCost, PhoneticWeights,
        StringDistance, UnitCost,
    };
    pub use crate::error::{CostConfigError, PhoneError};
    pub use crate::phonetic::{
        Articulation, Backness, Height, Manner, Phonation, Phone, PhoneBuilder, PhoneCategory,
        Place, Roundedness,
    };
}

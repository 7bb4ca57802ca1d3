//! Weighted edit distance.
//!
//! [`LevenshteinDistance`] is the generic engine: it computes the minimum
//! total cost of insertions, deletions and substitutions between two slices,
//! with the cost of each operation supplied by a [`CostPolicy`].
//!
//! Two specializations cover the common inputs:
//! - [`StringDistance`]: strings split into characters (or bytes with
//!   [`ByteStringDistance`]), unit costs
//! - [`PhoneSequenceDistance`]: sequences of [`Phone`](crate::phonetic::Phone)s,
//!   with unit costs or the feature-graded [`PhoneticCost`]
//!
//! For scoring many candidates, reuse a [`DistanceWorkspace`] or call
//! [`LevenshteinDistance::distances`].

pub mod engine;
pub mod phone_sequence;
pub mod phonetic_cost;
pub mod policy;
pub mod string;
pub mod unit;
pub mod workspace;

pub use engine::LevenshteinDistance;
pub use phone_sequence::PhoneSequenceDistance;
pub use phonetic_cost::{PhoneticCost, PhoneticCostBuilder, PhoneticWeights};
pub use policy::{CostPolicy, CustomCost, UnitCost};
pub use string::{standard_distance, ByteStringDistance, StringDistance};
pub use unit::{CharUnit, Units};
pub use workspace::DistanceWorkspace;

//! Unit-cost edit distance between strings.

use std::marker::PhantomData;

use super::engine::LevenshteinDistance;
use super::policy::UnitCost;
use super::unit::CharUnit;
use super::workspace::DistanceWorkspace;

/// Classic Levenshtein distance between two strings.
///
/// Strings are split into [`CharUnit`]s (Unicode scalar values by default,
/// bytes with [`ByteStringDistance`]) and compared with [`UnitCost`]: a
/// substitution is free iff the units are equal, everything else costs 1.
/// The result is always a non-negative whole number.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::StringDistance;
///
/// let strings = StringDistance::new();
/// assert_eq!(strings.distance("kitten", "sitting"), 3.0);
/// assert_eq!(strings.distance("", ""), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringDistance<U = char> {
    engine: LevenshteinDistance<UnitCost>,
    _unit: PhantomData<fn() -> U>,
}

/// String distance over UTF-8 bytes.
pub type ByteStringDistance = StringDistance<u8>;

impl StringDistance<char> {
    /// Create a character-level string distance.
    #[inline]
    pub const fn new() -> Self {
        Self::with_unit()
    }
}

impl<U: CharUnit> StringDistance<U> {
    /// Create a string distance over units of type `U`.
    #[inline]
    pub const fn with_unit() -> Self {
        Self {
            engine: LevenshteinDistance::unit(),
            _unit: PhantomData,
        }
    }

    /// Edit distance between `a` and `b`.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.engine.distance(&U::units(a), &U::units(b))
    }

    /// Same as [`distance`](Self::distance), reusing `workspace`.
    pub fn distance_with(&self, workspace: &mut DistanceWorkspace, a: &str, b: &str) -> f64 {
        self.engine.distance_with(workspace, &U::units(a), &U::units(b))
    }

    /// How closely `candidate` matches `reference`, in `[0, 1]`.
    ///
    /// See [`LevenshteinDistance::similarity`].
    pub fn similarity(&self, reference: &str, candidate: &str) -> f64 {
        self.engine.similarity(&U::units(reference), &U::units(candidate))
    }
}

/// Unit-cost character distance between two strings as a whole number.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    StringDistance::new().distance(source, target) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_distance_scenarios() {
        let strings = StringDistance::new();
        assert_eq!(strings.distance("kitten", "sitting"), 3.0);
        assert_eq!(strings.distance("", ""), 0.0);
        assert_eq!(strings.distance("abc", "abc"), 0.0);
        assert_eq!(strings.distance("a", "b"), 1.0);
    }

    #[test]
    fn test_string_distance_empty() {
        let strings = StringDistance::new();
        assert_eq!(strings.distance("", "test"), 4.0);
        assert_eq!(strings.distance("test", ""), 4.0);
    }

    #[test]
    fn test_char_vs_byte_units() {
        let chars = StringDistance::new();
        let bytes = ByteStringDistance::with_unit();

        assert_eq!(chars.distance("café", "cafe"), 1.0);
        assert_eq!(bytes.distance("café", "cafe"), 2.0);
        assert_eq!(chars.distance("日本", "本日"), 2.0);
        assert_eq!(bytes.distance("abc", "abd"), 1.0);
    }

    #[test]
    fn test_string_distance_with_workspace() {
        let strings = StringDistance::new();
        let mut workspace = DistanceWorkspace::new();

        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "x")] {
            assert_eq!(
                strings.distance_with(&mut workspace, a, b),
                strings.distance(a, b)
            );
        }
    }

    #[test]
    fn test_string_similarity() {
        let strings = StringDistance::new();
        assert_eq!(strings.similarity("test", "test"), 1.0);
        assert_eq!(strings.similarity("test", "best"), 0.75);
        assert_eq!(strings.similarity("", ""), 1.0);
    }

    #[test]
    fn test_standard_distance() {
        assert_eq!(standard_distance("kitten", "sitting"), 3);
        assert_eq!(standard_distance("saturday", "sunday"), 3);
        assert_eq!(standard_distance("", "¡"), 1);
    }
}

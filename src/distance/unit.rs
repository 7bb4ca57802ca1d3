//! String unit abstraction for text distance.
//!
//! [`CharUnit`] decides what one "element" of a string is when comparing
//! text: a byte ([`u8`]) or a Unicode scalar value ([`char`]).
//!
//! # Trade-offs
//!
//! - **Byte-level (u8)**: cheapest, but a multi-byte UTF-8 character counts
//!   as several elements. `"café"` and `"cafe"` are 2 apart.
//! - **Character-level (char)**: correct for non-ASCII text. `"café"` and
//!   `"cafe"` are 1 apart.

use smallvec::SmallVec;

/// Units collected from one string. Short strings stay on the stack.
pub type Units<U> = SmallVec<[U; 32]>;

/// Trait abstracting the element type strings are split into.
pub trait CharUnit:
    Copy + Clone + Eq + PartialEq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Split a string slice into units.
    ///
    /// For `u8`, this yields the UTF-8 bytes.
    /// For `char`, this yields the Unicode scalar values.
    fn units(s: &str) -> Units<Self>;
}

/// Byte-level implementation.
impl CharUnit for u8 {
    #[inline]
    fn units(s: &str) -> Units<Self> {
        SmallVec::from_slice(s.as_bytes())
    }
}

/// Character-level implementation (Unicode-aware).
impl CharUnit for char {
    #[inline]
    fn units(s: &str) -> Units<Self> {
        s.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_ascii() {
        let units = u8::units("hello");
        assert_eq!(units.as_slice(), b"hello");
    }

    #[test]
    fn test_u8_unicode() {
        // 'é' is 2 bytes in UTF-8: 0xC3 0xA9
        let units = u8::units("café");
        assert_eq!(units.len(), 5);
    }

    #[test]
    fn test_char_unicode() {
        let units = char::units("café");
        assert_eq!(units.as_slice(), &['c', 'a', 'f', 'é']);
    }

    #[test]
    fn test_char_cjk() {
        let units = char::units("中文");
        assert_eq!(units.as_slice(), &['中', '文']);
    }

    #[test]
    fn test_long_string_spills() {
        let long = "x".repeat(100);
        let units = char::units(&long);
        assert_eq!(units.len(), 100);
        assert!(units.spilled());
    }
}

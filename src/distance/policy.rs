//! Cost policies for weighted edit distance.
//!
//! A [`CostPolicy`] tells the engine what each edit operation costs for a
//! given element type. Policies are pure: they may carry immutable
//! configuration but never mutate state while pricing operations, so a single
//! policy can serve any number of concurrent distance computations.
//!
//! ## Zero-Cost Default
//!
//! [`UnitCost`] is a zero-sized type. Once the engine is monomorphized over it,
//! the substitution cost compiles down to an equality test and the indel cost
//! to the constant `1.0`, matching a hand-written unit-cost Levenshtein loop.
//!
//! ```rust
//! use phonetic_distance::distance::{CostPolicy, UnitCost};
//!
//! assert_eq!(std::mem::size_of::<UnitCost>(), 0);
//! assert_eq!(UnitCost.substitution_cost(&'a', &'a'), 0.0);
//! assert_eq!(UnitCost.substitution_cost(&'a', &'b'), 1.0);
//! ```

use crate::error::CostConfigError;

/// Pricing of edit operations over elements of type `T`.
///
/// Implementations must return finite, non-negative costs. A policy is
/// *symmetric* when `substitution_cost(a, b) == substitution_cost(b, a)`;
/// the engine's distance is then symmetric as well.
pub trait CostPolicy<T: ?Sized> {
    /// Cost of replacing `a` by `b`.
    ///
    /// Should be `0.0` when `a` and `b` are to be treated as equal.
    fn substitution_cost(&self, a: &T, b: &T) -> f64;

    /// Cost of inserting or deleting `x`. Defaults to `1.0`.
    #[inline(always)]
    fn insert_delete_cost(&self, _x: &T) -> f64 {
        1.0
    }

    /// Whether the engine may skip common leading and trailing elements
    /// (pairs with zero substitution cost) before running the full table.
    ///
    /// Only return `true` when doing so cannot change the result, which holds
    /// when zero-cost substitution is an equivalence and every other
    /// substitution costs at least as much as any mismatch it replaces. The
    /// default is `false`.
    #[inline(always)]
    fn trims_common_affixes(&self) -> bool {
        false
    }
}

impl<T: ?Sized, P: CostPolicy<T> + ?Sized> CostPolicy<T> for &P {
    #[inline(always)]
    fn substitution_cost(&self, a: &T, b: &T) -> f64 {
        (**self).substitution_cost(a, b)
    }

    #[inline(always)]
    fn insert_delete_cost(&self, x: &T) -> f64 {
        (**self).insert_delete_cost(x)
    }

    #[inline(always)]
    fn trims_common_affixes(&self) -> bool {
        (**self).trims_common_affixes()
    }
}

/// Unit-cost policy: the classic Levenshtein distance.
///
/// Substitution costs `0.0` when the elements are equal (`==`) and `1.0`
/// otherwise; every insertion and deletion costs `1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitCost;

impl<T: PartialEq + ?Sized> CostPolicy<T> for UnitCost {
    #[inline(always)]
    fn substitution_cost(&self, a: &T, b: &T) -> f64 {
        if a == b {
            0.0
        } else {
            1.0
        }
    }

    #[inline(always)]
    fn trims_common_affixes(&self) -> bool {
        true
    }
}

/// Policy backed by a caller-supplied substitution function.
///
/// Insertions and deletions cost a uniform `indel_cost`.
///
/// # Example
///
/// ```rust
/// use phonetic_distance::distance::{CustomCost, LevenshteinDistance};
///
/// // Case differences cost half a substitution.
/// let policy = CustomCost::new(|a: &char, b: &char| {
///     if a == b {
///         0.0
///     } else if a.eq_ignore_ascii_case(b) {
///         0.5
///     } else {
///         1.0
///     }
/// });
/// let engine = LevenshteinDistance::new(policy);
/// let a: Vec<char> = "Cat".chars().collect();
/// let b: Vec<char> = "cat".chars().collect();
/// assert_eq!(engine.distance(&a, &b), 0.5);
/// ```
#[derive(Clone, Copy)]
pub struct CustomCost<F> {
    substitution: F,
    indel_cost: f64,
}

impl<F> CustomCost<F> {
    /// Create a policy with the given substitution function and unit indel
    /// cost.
    #[inline]
    pub fn new(substitution: F) -> Self {
        Self {
            substitution,
            indel_cost: 1.0,
        }
    }

    /// Set the cost of every insertion and deletion.
    ///
    /// # Errors
    ///
    /// Returns an error if `indel_cost` is negative, NaN or infinite.
    #[inline]
    pub fn with_indel_cost(mut self, indel_cost: f64) -> Result<Self, CostConfigError> {
        self.indel_cost = CostConfigError::check("indel cost", indel_cost)?;
        Ok(self)
    }

    /// Cost of every insertion and deletion.
    #[inline]
    pub fn indel_cost(&self) -> f64 {
        self.indel_cost
    }
}

impl<T: ?Sized, F> CostPolicy<T> for CustomCost<F>
where
    F: Fn(&T, &T) -> f64,
{
    #[inline(always)]
    fn substitution_cost(&self, a: &T, b: &T) -> f64 {
        (self.substitution)(a, b)
    }

    #[inline(always)]
    fn insert_delete_cost(&self, _x: &T) -> f64 {
        self.indel_cost
    }
}

impl<F> std::fmt::Debug for CustomCost<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomCost")
            .field("indel_cost", &self.indel_cost)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_is_zst() {
        assert_eq!(std::mem::size_of::<UnitCost>(), 0);
    }

    #[test]
    fn test_unit_cost() {
        assert_eq!(UnitCost.substitution_cost(&b'a', &b'a'), 0.0);
        assert_eq!(UnitCost.substitution_cost(&b'a', &b'b'), 1.0);
        assert_eq!(CostPolicy::<u8>::insert_delete_cost(&UnitCost, &b'a'), 1.0);
        assert!(CostPolicy::<u8>::trims_common_affixes(&UnitCost));
    }

    #[test]
    fn test_unit_cost_unsized() {
        assert_eq!(UnitCost.substitution_cost("ab", "ab"), 0.0);
        assert_eq!(UnitCost.substitution_cost("ab", "ba"), 1.0);
    }

    #[test]
    fn test_reference_delegates() {
        let policy = CustomCost::new(|_: &u8, _: &u8| 0.25)
            .with_indel_cost(2.0)
            .unwrap();
        let by_ref = &policy;

        assert_eq!(by_ref.substitution_cost(&1u8, &2u8), 0.25);
        assert_eq!(by_ref.insert_delete_cost(&1u8), 2.0);
        assert!(!CostPolicy::<u8>::trims_common_affixes(&by_ref));
    }

    #[test]
    fn test_custom_cost_indel_cost() {
        let policy = CustomCost::new(|_: &u8, _: &u8| 1.0);
        assert_eq!(policy.indel_cost(), 1.0);
        assert_eq!(policy.with_indel_cost(0.5).unwrap().indel_cost(), 0.5);
        assert_eq!(policy.with_indel_cost(0.0).unwrap().indel_cost(), 0.0);
    }

    #[test]
    fn test_custom_cost_rejects_negative_indel() {
        let policy = CustomCost::new(|_: &u8, _: &u8| 1.0);
        assert_eq!(
            policy.with_indel_cost(-3.0).unwrap_err(),
            CostConfigError::NegativeCost {
                name: "indel cost",
                value: -3.0
            }
        );
    }

    #[test]
    fn test_custom_cost_rejects_non_finite_indel() {
        let policy = CustomCost::new(|_: &u8, _: &u8| 1.0);
        assert!(matches!(
            policy.with_indel_cost(f64::NAN),
            Err(CostConfigError::NonFiniteCost { name: "indel cost", .. })
        ));
        // An infinite indel cost must never turn into a free edit.
        assert!(matches!(
            policy.with_indel_cost(f64::INFINITY),
            Err(CostConfigError::NonFiniteCost { name: "indel cost", .. })
        ));
    }

    #[test]
    fn test_custom_cost_debug() {
        let policy = CustomCost::new(|_: &u8, _: &u8| 1.0);
        assert!(format!("{:?}", policy).contains("indel_cost"));
    }
}

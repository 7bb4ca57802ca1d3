//! Error types.
//!
//! Asking a [`Phone`](crate::phonetic::Phone) for a feature its category does
//! not have is not an error; the accessors return `None`. The types here cover
//! the checked construction paths only.

use crate::phonetic::PhoneCategory;

/// Error type for [`PhoneBuilder`](crate::phonetic::PhoneBuilder) validation
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    /// A feature was supplied that the declared category does not have
    #[error("{attribute} does not apply to a {category}")]
    InapplicableAttribute {
        /// Name of the offending feature
        attribute: &'static str,
        /// Category the phone was declared with
        category: PhoneCategory,
    },
    /// A feature the declared category requires was not supplied
    #[error("a {category} requires {attribute}. Use .{attribute}() to set it.")]
    MissingAttribute {
        /// Name of the missing feature
        attribute: &'static str,
        /// Category the phone was declared with
        category: PhoneCategory,
    },
}

/// Error type for invalid cost policy configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostConfigError {
    /// A cost or weight was below zero
    #[error("{name} must be non-negative, got {value}")]
    NegativeCost {
        /// Name of the setting
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// A cost or weight was NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFiniteCost {
        /// Name of the setting
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// Every feature weight for a category was zero
    #[error("at least one {category} feature weight must be positive")]
    ZeroWeights {
        /// Category whose weights sum to zero
        category: PhoneCategory,
    },
}

impl CostConfigError {
    /// Check that `value` is a usable cost: finite and non-negative.
    pub(crate) fn check(name: &'static str, value: f64) -> Result<f64, CostConfigError> {
        if !value.is_finite() {
            return Err(CostConfigError::NonFiniteCost { name, value });
        }
        if value < 0.0 {
            return Err(CostConfigError::NegativeCost { name, value });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_error_display() {
        let inapplicable = PhoneError::InapplicableAttribute {
            attribute: "height",
            category: PhoneCategory::Consonant,
        };
        let missing = PhoneError::MissingAttribute {
            attribute: "place",
            category: PhoneCategory::Consonant,
        };

        assert_eq!(inapplicable.to_string(), "height does not apply to a consonant");
        assert!(missing.to_string().contains(".place()"));
    }

    #[test]
    fn test_check_cost() {
        assert_eq!(CostConfigError::check("indel cost", 0.0), Ok(0.0));
        assert_eq!(CostConfigError::check("indel cost", 2.5), Ok(2.5));
        assert!(matches!(
            CostConfigError::check("indel cost", -1.0),
            Err(CostConfigError::NegativeCost { .. })
        ));
        assert!(matches!(
            CostConfigError::check("indel cost", f64::NAN),
            Err(CostConfigError::NonFiniteCost { .. })
        ));
        assert!(matches!(
            CostConfigError::check("indel cost", f64::INFINITY),
            Err(CostConfigError::NonFiniteCost { .. })
        ));
    }
}

//! Macro for implementing Display and FromStr for status enums
//!
//! Record status and condition columns are stored and exchanged as
//! snake_case strings. This macro provides a single implementation for both
//! Display and FromStr, with case-insensitive parsing so that the
//! SCREAMING_SNAKE_CASE wire form of the source system parses too.
//!
//! # Example
//!
//! ```rust
//! use straycare_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum KennelStatus {
//!     Open,
//!     Full,
//! }
//!
//! impl_domain_status_conversions!(KennelStatus {
//!     Open => "open",
//!     Full => "full",
//! });
//!
//! assert_eq!("FULL".parse::<KennelStatus>().unwrap(), KennelStatus::Full);
//! ```

/// Implements Display and FromStr traits for status enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their snake_case strings
/// - FromStr trait: parses case-insensitive strings to enum variants
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        InProgress,
        Closed,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Closed => "closed",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStatus::Pending.to_string(), "pending");
        assert_eq!(TestStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TestStatus::Closed.to_string(), "closed");
    }

    #[test]
    fn test_fromstr_screaming_case() {
        assert_eq!(TestStatus::from_str("IN_PROGRESS").unwrap(), TestStatus::InProgress);
        assert_eq!(TestStatus::from_str("Closed").unwrap(), TestStatus::Closed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("archived");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStatus: archived"));
    }

    #[test]
    fn test_roundtrip() {
        for status in [TestStatus::Pending, TestStatus::InProgress, TestStatus::Closed] {
            let parsed = TestStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(status, parsed);
        }
    }
}

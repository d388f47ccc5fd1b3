//! Configuration types for convgen.
//!
//! This module provides the explicit generator configuration: how many
//! examples to generate and how their names are derived. Passing these
//! as a configuration structure (rather than ambient constants) makes
//! the generator's contract explicit and testable.
//!
//! # Examples
//!
//! ```
//! use convgen_core::{GeneratorConfig, NamingScheme};
//!
//! // Use default configuration (300 examples, prefix "A")
//! let config = GeneratorConfig::default();
//! assert_eq!(config.count, 300);
//!
//! // Create custom configuration
//! let custom = GeneratorConfig {
//!     count: 2,
//!     ..Default::default()
//! };
//! ```

use crate::NamingScheme;

/// Configuration for one generation run.
///
/// # Examples
///
/// ```
/// use convgen_core::{GeneratorConfig, NamingScheme};
///
/// let config = GeneratorConfig {
///     count: 10,
///     naming: NamingScheme::new("Bench").unwrap(),
/// };
///
/// assert_eq!(config.count, 10);
/// assert_eq!(config.naming.name_for(10).as_str(), "Bench10");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of examples to generate.
    ///
    /// A count of zero yields only the fixed preambles.
    /// Default: 300
    pub count: usize,

    /// Scheme used to derive type names from indices.
    ///
    /// Default: prefix "A" (names `A1`, `A2`, ...)
    pub naming: NamingScheme,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 300,
            naming: NamingScheme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.count, 300);
        assert_eq!(config.naming.prefix(), "A");
    }

    #[test]
    fn test_custom_count() {
        let config = GeneratorConfig {
            count: 0,
            ..Default::default()
        };
        assert_eq!(config.count, 0);
    }
}

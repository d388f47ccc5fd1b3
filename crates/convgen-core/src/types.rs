//! Strong domain types for convgen.
//!
//! This module implements the newtype pattern to provide type safety for
//! domain primitives (strong types over primitives).
//!
//! # Examples
//!
//! ```
//! use convgen_core::{NamingScheme, TypeName};
//!
//! let naming = NamingScheme::default();
//! let name = naming.name_for(1);
//! assert_eq!(name.as_str(), "A1");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Derived name of a generated C++ type (newtype over String).
///
/// The derived name is used both as the generated struct's type name and
/// embedded in generated function names (`TestFunc{name}`), so it must be
/// a valid C++ identifier. Using a strong type prevents unvalidated
/// strings from reaching the templates.
///
/// # Examples
///
/// ```
/// use convgen_core::TypeName;
///
/// let name = TypeName::new("A42").unwrap();
/// assert_eq!(name.as_str(), "A42");
///
/// assert!(TypeName::new("1abc").is_err());
/// assert!(TypeName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeName(String);

impl TypeName {
    /// Creates a new type name, validating it as a C++ identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the name is empty, starts with a
    /// digit, or contains characters other than ASCII alphanumerics and
    /// underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_core::TypeName;
    ///
    /// let name = TypeName::new("MyStruct").unwrap();
    /// assert_eq!(name.as_str(), "MyStruct");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !valid_start {
            return Err(Error::Validation {
                field: "name".to_string(),
                reason: format!("'{name}' must start with an ASCII letter or underscore"),
            });
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(Error::Validation {
                field: "name".to_string(),
                reason: format!("'{name}' contains characters invalid in a C++ identifier"),
            });
        }

        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_core::TypeName;
    ///
    /// let name = TypeName::new("A1").unwrap();
    /// assert_eq!(name.as_str(), "A1");
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `TypeName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scheme for deriving type names from 1-based indices.
///
/// Names are the concatenation of a fixed prefix and the index, so they
/// are pairwise distinct for distinct indices and byte-reproducible
/// across runs.
///
/// # Examples
///
/// ```
/// use convgen_core::NamingScheme;
///
/// let naming = NamingScheme::new("Conv").unwrap();
/// assert_eq!(naming.name_for(7).as_str(), "Conv7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingScheme {
    prefix: String,
}

impl NamingScheme {
    /// Creates a naming scheme with the given prefix.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the prefix is not a valid C++
    /// identifier (derived names would not be either).
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        // Reuse identifier validation; a valid prefix followed by digits
        // stays a valid identifier.
        TypeName::new(prefix.as_str()).map_err(|_| Error::Validation {
            field: "prefix".to_string(),
            reason: format!("'{prefix}' is not a valid C++ identifier prefix"),
        })?;
        Ok(Self { prefix })
    }

    /// Returns the prefix as a string slice.
    #[inline]
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Derives the type name for a 1-based index.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_core::NamingScheme;
    ///
    /// let naming = NamingScheme::default();
    /// assert_eq!(naming.name_for(1).as_str(), "A1");
    /// assert_eq!(naming.name_for(300).as_str(), "A300");
    /// ```
    #[must_use]
    pub fn name_for(&self, index: usize) -> TypeName {
        // Prefix is validated at construction, so prefix + digits is
        // always a valid identifier.
        TypeName(format!("{}{index}", self.prefix))
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            prefix: "A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_valid() {
        assert!(TypeName::new("A1").is_ok());
        assert!(TypeName::new("_private").is_ok());
        assert!(TypeName::new("Snake_Case_42").is_ok());
    }

    #[test]
    fn test_type_name_rejects_invalid() {
        assert!(TypeName::new("").is_err());
        assert!(TypeName::new("1A").is_err());
        assert!(TypeName::new("has space").is_err());
        assert!(TypeName::new("semi;colon").is_err());
    }

    #[test]
    fn test_type_name_display() {
        let name = TypeName::new("A9").unwrap();
        assert_eq!(name.to_string(), "A9");
        assert_eq!(name.into_inner(), "A9");
    }

    #[test]
    fn test_naming_scheme_default_prefix() {
        let naming = NamingScheme::default();
        assert_eq!(naming.prefix(), "A");
        assert_eq!(naming.name_for(1).as_str(), "A1");
    }

    #[test]
    fn test_naming_scheme_custom_prefix() {
        let naming = NamingScheme::new("Gen").unwrap();
        assert_eq!(naming.name_for(12).as_str(), "Gen12");
    }

    #[test]
    fn test_naming_scheme_rejects_invalid_prefix() {
        assert!(NamingScheme::new("").is_err());
        assert!(NamingScheme::new("9x").is_err());
    }

    #[test]
    fn test_names_pairwise_distinct() {
        let naming = NamingScheme::default();
        let names: Vec<_> = (1..=300).map(|i| naming.name_for(i)).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

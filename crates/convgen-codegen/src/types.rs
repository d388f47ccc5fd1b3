//! Types for code generation.
//!
//! Defines the data structures used while generating the C++ corpus:
//! the template rendering context and the in-memory file set that the
//! pure generation step produces.
//!
//! # Examples
//!
//! ```
//! use convgen_codegen::{GeneratedCode, GeneratedFile};
//!
//! let file = GeneratedFile {
//!     path: "structs.h".to_string(),
//!     content: "#pragma once\n".to_string(),
//! };
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(file);
//! assert_eq!(code.file_count(), 1);
//! ```

use convgen_core::TypeName;
use serde::{Deserialize, Serialize};

/// Template rendering context for one generated example.
///
/// Carries the single substitution variable used by the block templates:
/// the derived name. Immutable after creation; exists only for the
/// duration of one template rendering.
///
/// # Examples
///
/// ```
/// use convgen_codegen::CodeExample;
///
/// let example = CodeExample::new("A1");
/// assert_eq!(example.name, "A1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    /// Derived name, used as the struct type name and embedded in
    /// function names.
    pub name: String,
}

impl CodeExample {
    /// Creates a rendering context from a name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<TypeName> for CodeExample {
    fn from(name: TypeName) -> Self {
        Self {
            name: name.into_inner(),
        }
    }
}

/// Result of code generation containing all generated files.
///
/// This is the main output type returned by the generator. Contains an
/// ordered list of files that should be written to disk by the writer
/// adapter.
///
/// # Examples
///
/// ```
/// use convgen_codegen::GeneratedCode;
///
/// let code = GeneratedCode::new();
/// assert_eq!(code.file_count(), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// List of generated files with paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "foldmap.hpp".to_string(),
    ///     content: "#pragma once\n".to_string(),
    /// });
    ///
    /// assert_eq!(code.file_count(), 1);
    /// ```
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the total size of all file contents in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "structs.h".to_string(),
    ///     content: "#pragma once\n".to_string(),
    /// });
    ///
    /// assert_eq!(code.total_bytes(), 13);
    /// ```
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.content.len()).sum()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a generated file by path.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::{GeneratedCode, GeneratedFile};
    ///
    /// let mut code = GeneratedCode::new();
    /// code.add_file(GeneratedFile {
    ///     path: "simple.cpp".to_string(),
    ///     content: String::new(),
    /// });
    ///
    /// assert!(code.file("simple.cpp").is_some());
    /// assert!(code.file("missing.cpp").is_none());
    /// ```
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

impl Default for GeneratedCode {
    fn default() -> Self {
        Self::new()
    }
}

/// A single generated file with path and content.
///
/// Represents one file that will be written to the filesystem during
/// generation. The path is relative to the output directory.
///
/// # Examples
///
/// ```
/// use convgen_codegen::GeneratedFile;
///
/// let file = GeneratedFile {
///     path: "foldmap.cpp".to_string(),
///     content: "#include \"foldmap.hpp\"\n".to_string(),
/// };
///
/// assert_eq!(file.path(), "foldmap.cpp");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative path where the file should be written
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_new() {
        let code = GeneratedCode::new();
        assert_eq!(code.file_count(), 0);
        assert_eq!(code.total_bytes(), 0);
    }

    #[test]
    fn test_add_file_and_lookup() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile {
            path: "structs.h".to_string(),
            content: "#pragma once\n".to_string(),
        });

        assert_eq!(code.file_count(), 1);
        assert_eq!(code.file("structs.h").unwrap().content(), "#pragma once\n");
        assert!(code.file("other.h").is_none());
    }

    #[test]
    fn test_total_bytes_sums_contents() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile {
            path: "a".to_string(),
            content: "12345".to_string(),
        });
        code.add_file(GeneratedFile {
            path: "b".to_string(),
            content: "678".to_string(),
        });
        assert_eq!(code.total_bytes(), 8);
    }

    #[test]
    fn test_code_example_from_type_name() {
        let name = convgen_core::TypeName::new("A3").unwrap();
        let example = CodeExample::from(name);
        assert_eq!(example.name, "A3");
    }
}

//! The corpus generator.
//!
//! Pure transformation from a [`GeneratorConfig`] to the four output
//! streams: `structs.h`, `simple.cpp`, `foldmap.hpp`, and `foldmap.cpp`.
//! No I/O happens here; [`crate::writer`] performs the writes.
//!
//! # Examples
//!
//! ```
//! use convgen_codegen::Generator;
//! use convgen_core::GeneratorConfig;
//!
//! let generator = Generator::new().unwrap();
//! let config = GeneratorConfig { count: 2, ..Default::default() };
//! let code = generator.generate(&config).unwrap();
//!
//! assert_eq!(code.file_count(), 4);
//! assert!(code.file("structs.h").unwrap().content().contains("struct A2"));
//! ```

use crate::template_engine::TemplateEngine;
use crate::template_set::{TemplateSet, names};
use crate::types::{CodeExample, GeneratedCode, GeneratedFile};
use convgen_core::{GeneratorConfig, Result};

/// Relative path of the struct declaration stream.
pub const STRUCTS_PATH: &str = "structs.h";
/// Relative path of the manual-loop function stream.
pub const SIMPLE_PATH: &str = "simple.cpp";
/// Relative path of the generic fold/map utility header.
pub const FOLDMAP_HEADER_PATH: &str = "foldmap.hpp";
/// Relative path of the fold-map function stream.
pub const FOLDMAP_PATH: &str = "foldmap.cpp";

/// Generator for the C++ conversion benchmark corpus.
///
/// Owns the template engine and the template set. Output is
/// deterministic: blocks are appended in strictly increasing index
/// order, so two runs with the same configuration are byte-identical.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
///
/// # Examples
///
/// ```
/// use convgen_codegen::Generator;
///
/// let generator = Generator::new().unwrap();
/// ```
#[derive(Debug)]
pub struct Generator<'a> {
    engine: TemplateEngine<'a>,
    templates: TemplateSet,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default template set.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with the built-in templates).
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::Generator;
    ///
    /// let generator = Generator::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_templates(TemplateSet::default())
    }

    /// Creates a generator with an explicit template set.
    ///
    /// # Errors
    ///
    /// Returns error if any block template has invalid Handlebars syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::{Generator, TemplateSet};
    ///
    /// let mut templates = TemplateSet::default();
    /// templates.struct_block = "\nstruct {{name}} final {\n\tint x = 0;\n};\n".to_string();
    /// let generator = Generator::with_templates(templates).unwrap();
    /// ```
    pub fn with_templates(templates: TemplateSet) -> Result<Self> {
        let engine = TemplateEngine::new(&templates)?;
        Ok(Self { engine, templates })
    }

    /// Generates the corpus for the given configuration.
    ///
    /// Produces exactly four files:
    /// - `structs.h`: preamble + one struct block per index
    /// - `simple.cpp`: preamble + one manual-loop function per index
    /// - `foldmap.hpp`: the fixed generic utility header
    /// - `foldmap.cpp`: preamble + one fold-map function per index
    ///
    /// Indices run from 1 to `config.count`; a count of zero yields the
    /// preambles only.
    ///
    /// # Errors
    ///
    /// Returns error if template rendering fails (only reachable with a
    /// custom template set referencing variables other than `name`).
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::Generator;
    /// use convgen_core::GeneratorConfig;
    ///
    /// let generator = Generator::new().unwrap();
    /// let code = generator.generate(&GeneratorConfig::default()).unwrap();
    /// assert_eq!(code.file_count(), 4);
    /// ```
    pub fn generate(&self, config: &GeneratorConfig) -> Result<GeneratedCode> {
        tracing::info!(
            "Generating conversion corpus: {} examples (prefix '{}')",
            config.count,
            config.naming.prefix()
        );

        let mut structs = self.templates.structs_preamble.clone();
        let mut simple = self.templates.simple_preamble.clone();
        let mut foldmap = self.templates.foldmap_preamble.clone();

        for index in 1..=config.count {
            let example = CodeExample::from(config.naming.name_for(index));

            structs.push_str(&self.engine.render(names::STRUCT_BLOCK, &example)?);
            simple.push_str(&self.engine.render(names::SIMPLE_BLOCK, &example)?);
            foldmap.push_str(&self.engine.render(names::FOLDMAP_BLOCK, &example)?);

            tracing::debug!("Generated blocks for {}", example.name);
        }

        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile {
            path: STRUCTS_PATH.to_string(),
            content: structs,
        });
        code.add_file(GeneratedFile {
            path: SIMPLE_PATH.to_string(),
            content: simple,
        });
        code.add_file(GeneratedFile {
            path: FOLDMAP_HEADER_PATH.to_string(),
            content: self.templates.foldmap_header.clone(),
        });
        code.add_file(GeneratedFile {
            path: FOLDMAP_PATH.to_string(),
            content: foldmap,
        });

        tracing::info!(
            "Generated {} files, {} bytes total",
            code.file_count(),
            code.total_bytes()
        );

        Ok(code)
    }
}

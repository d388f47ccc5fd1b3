//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the block templates of a
//! [`TemplateSet`] pre-registered.
//!
//! # Examples
//!
//! ```
//! use convgen_codegen::template_engine::TemplateEngine;
//! use convgen_codegen::{CodeExample, TemplateSet};
//!
//! let engine = TemplateEngine::new(&TemplateSet::default()).unwrap();
//! let example = CodeExample::new("A1");
//! let block = engine.render("struct_block", &example).unwrap();
//! assert!(block.contains("struct A1"));
//! ```

use crate::template_set::{TemplateSet, names};
use convgen_core::{Error, Result};
use handlebars::{Handlebars, no_escape};
use serde::Serialize;

/// Template engine for code generation.
///
/// Wraps Handlebars and registers the three per-index block templates
/// from a [`TemplateSet`]. Substituted values pass through unescaped
/// because the output is C++ source, not HTML.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the set's block templates
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (cannot happen with
    /// the default template set; custom sets with invalid Handlebars
    /// syntax surface here).
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::template_engine::TemplateEngine;
    /// use convgen_codegen::TemplateSet;
    ///
    /// let engine = TemplateEngine::new(&TemplateSet::default()).unwrap();
    /// ```
    pub fn new(templates: &TemplateSet) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        // Generated output is C++ source; HTML escaping would corrupt it
        handlebars.register_escape_fn(no_escape);

        Self::register(&mut handlebars, names::STRUCT_BLOCK, &templates.struct_block)?;
        Self::register(&mut handlebars, names::SIMPLE_BLOCK, &templates.simple_block)?;
        Self::register(
            &mut handlebars,
            names::FOLDMAP_BLOCK,
            &templates.foldmap_block,
        )?;

        Ok(Self { handlebars })
    }

    fn register(handlebars: &mut Handlebars<'a>, name: &str, template: &str) -> Result<()> {
        handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::Template {
                message: format!("failed to register template '{name}': {e}"),
            })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails (missing variable under strict mode)
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::template_engine::TemplateEngine;
    /// use convgen_codegen::{CodeExample, TemplateSet};
    ///
    /// let engine = TemplateEngine::new(&TemplateSet::default()).unwrap();
    /// let block = engine.render("simple_block", &CodeExample::new("A2")).unwrap();
    /// assert!(block.contains("TestFuncA2"));
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Template {
                message: format!("template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// Allows registering additional templates at runtime.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use convgen_codegen::template_engine::TemplateEngine;
    /// use convgen_codegen::TemplateSet;
    ///
    /// let mut engine = TemplateEngine::new(&TemplateSet::default()).unwrap();
    /// engine.register_template_string("custom", "// {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        Self::register(&mut self.handlebars, name, template)
    }
}

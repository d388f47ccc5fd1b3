//! Code generation for the C++ conversion benchmark corpus.
//!
//! Renders a configurable number of near-identical C++ struct definitions
//! and two parallel sets of conversion functions (manual loop vs. generic
//! fold/map) using Handlebars templates. Generation is a pure
//! transformation into an in-memory file set; a thin writer adapter
//! performs the actual filesystem writes.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod template_set;
pub mod types;
pub mod writer;

pub use generator::Generator;
pub use template_set::TemplateSet;
pub use types::{CodeExample, GeneratedCode, GeneratedFile};
pub use writer::write_to_dir;

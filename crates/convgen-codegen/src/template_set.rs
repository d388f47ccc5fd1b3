//! The named template strings driving generation.
//!
//! Templates are passed to the generator as an explicit configuration
//! structure rather than ambient constants. The only substitution
//! variable in the per-index block templates is `{{name}}`.

/// Template names under which block templates are registered with the
/// engine.
pub mod names {
    /// Per-index struct declaration block.
    pub const STRUCT_BLOCK: &str = "struct_block";
    /// Per-index manual-loop conversion function.
    pub const SIMPLE_BLOCK: &str = "simple_block";
    /// Per-index fold-map conversion function.
    pub const FOLDMAP_BLOCK: &str = "foldmap_block";
}

/// The full set of templates for one generation run.
///
/// Four fixed preambles (written once per output stream, no substitution)
/// and three per-index block templates (rendered once per derived name).
/// `foldmap_header` is the entire N-independent `foldmap.hpp` content.
///
/// The default set reproduces the reference corpus byte for byte.
///
/// # Examples
///
/// ```
/// use convgen_codegen::TemplateSet;
///
/// let templates = TemplateSet::default();
/// assert!(templates.structs_preamble.starts_with("#pragma once"));
/// assert!(templates.struct_block.contains("{{name}}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Preamble of `structs.h`.
    pub structs_preamble: String,
    /// Block template appended to `structs.h` once per index.
    pub struct_block: String,
    /// Preamble of `simple.cpp` (includes + trivial entry point).
    pub simple_preamble: String,
    /// Block template appended to `simple.cpp` once per index.
    pub simple_block: String,
    /// Entire fixed content of `foldmap.hpp` (independent of the count).
    pub foldmap_header: String,
    /// Preamble of `foldmap.cpp` (includes the generic header).
    pub foldmap_preamble: String,
    /// Block template appended to `foldmap.cpp` once per index.
    pub foldmap_block: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            structs_preamble: include_str!("../templates/structs_preamble.h").to_string(),
            struct_block: include_str!("../templates/struct_block.h.hbs").to_string(),
            simple_preamble: include_str!("../templates/simple_preamble.cpp").to_string(),
            simple_block: include_str!("../templates/simple_block.cpp.hbs").to_string(),
            foldmap_header: include_str!("../templates/foldmap.hpp").to_string(),
            foldmap_preamble: include_str!("../templates/foldmap_preamble.cpp").to_string(),
            foldmap_block: include_str!("../templates/foldmap_block.cpp.hbs").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preambles() {
        let templates = TemplateSet::default();
        assert_eq!(templates.structs_preamble, "#pragma once\n");
        assert!(templates.simple_preamble.contains("#include \"structs.h\""));
        assert!(templates.simple_preamble.contains("int main()"));
        assert!(
            templates
                .foldmap_preamble
                .contains("#include \"foldmap.hpp\"")
        );
    }

    #[test]
    fn test_default_blocks_use_name_variable() {
        let templates = TemplateSet::default();
        assert!(templates.struct_block.contains("struct {{name}}"));
        assert!(templates.simple_block.contains("TestFunc{{name}}"));
        assert!(templates.foldmap_block.contains("TestFunc{{name}}"));
    }

    #[test]
    fn test_foldmap_header_is_count_independent() {
        let templates = TemplateSet::default();
        assert!(templates.foldmap_header.contains("void FoldMap"));
        assert!(templates.foldmap_header.contains("void ConvertToVector"));
        assert!(!templates.foldmap_header.contains("{{name}}"));
    }
}

//! Formatter style-document loading.
//!
//! A style document is itself a hit document whose sole top-level section is
//! `[format]`:
//!
//! ```text
//! [format]
//!   indent_string = '  '
//!   line_length = 100
//!   canonical_section_markers = true
//!   [sorting]
//!     [pattern]
//!       section = ''
//!       order = 'Mesh ** Outputs'
//!     []
//!   []
//! []
//! ```
//!
//! All fields are optional; unknown fields are ignored for forward
//! compatibility. Malformed documents yield `invalid format style: ...`.

use crate::error::{Error, Result};
use crate::parser::parse;
use crate::tree::Node;

/// Settings read out of a style document.
#[derive(Debug, Clone)]
pub(crate) struct StyleDoc {
    pub indent_string: String,
    pub line_length: usize,
    pub canonical_section_markers: bool,
    /// (section pattern, order tokens) pairs in declaration order.
    pub patterns: Vec<(String, Vec<String>)>,
}

impl Default for StyleDoc {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            line_length: 100,
            canonical_section_markers: true,
            patterns: Vec::new(),
        }
    }
}

fn style_err(err: &Error) -> Error {
    Error::Style(err.to_string())
}

pub(crate) fn load(fname: &str, input: &str) -> Result<StyleDoc> {
    let root = parse(fname, input).map_err(|e| style_err(&e))?;
    let defaults = StyleDoc::default();

    let indent_string = root
        .param_or::<String>("format/indent_string", defaults.indent_string)
        .map_err(|e| style_err(&e))?;
    if !indent_string.chars().all(char::is_whitespace) {
        return Err(Error::Style(format!(
            "indent_string must be whitespace, got '{indent_string}'"
        )));
    }

    let line_length = root
        .param_or::<i64>("format/line_length", 100)
        .map_err(|e| style_err(&e))?;
    let line_length = usize::try_from(line_length)
        .map_err(|_| Error::Style(format!("line_length must be non-negative, got {line_length}")))?;

    let canonical_section_markers = root
        .param_or::<bool>("format/canonical_section_markers", true)
        .map_err(|e| style_err(&e))?;

    let mut patterns = Vec::new();
    if let Some(sorting) = root.find("format/sorting") {
        for child in sorting.children() {
            let Node::Section(pattern) = child else {
                continue;
            };
            if pattern.name() != "pattern" {
                continue;
            }
            let section = child
                .param::<String>("section")
                .map_err(|_| Error::Style("each sorting pattern requires a 'section' field".to_string()))?;
            let order = child
                .param::<String>("order")
                .map_err(|_| Error::Style("each sorting pattern requires an 'order' field".to_string()))?;
            let tokens: Vec<String> = order.split_whitespace().map(str::to_string).collect();
            patterns.push((section, tokens));
        }
    }

    Ok(StyleDoc {
        indent_string,
        line_length,
        canonical_section_markers,
        patterns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_from_empty_doc() {
        let style = load("style", "").unwrap();
        assert_eq!(style.indent_string, "  ");
        assert_eq!(style.line_length, 100);
        assert!(style.canonical_section_markers);
        assert!(style.patterns.is_empty());
    }

    #[test]
    fn test_load_settings() {
        let doc = "[format]\n  indent_string = '    '\n  line_length = 80\n  \
                   canonical_section_markers = false\n[]\n";
        let style = load("style", doc).unwrap();
        assert_eq!(style.indent_string, "    ");
        assert_eq!(style.line_length, 80);
        assert!(!style.canonical_section_markers);
    }

    #[test]
    fn test_load_patterns_in_order() {
        let doc = "[format]\n  [sorting]\n    [pattern]\n      section = 'a'\n      order = 'x y'\n    []\n    \
                   [pattern]\n      section = ''\n      order = 'type'\n    []\n  []\n[]\n";
        let style = load("style", doc).unwrap();
        assert_eq!(style.patterns.len(), 2);
        assert_eq!(style.patterns[0].0, "a");
        assert_eq!(style.patterns[0].1, vec!["x", "y"]);
        assert_eq!(style.patterns[1].0, "");
        assert_eq!(style.patterns[1].1, vec!["type"]);
    }

    #[test]
    fn test_load_rejects_bad_indent() {
        let err = load("style", "[format]\n  indent_string = 'xx'\n[]\n").unwrap_err();
        assert!(format!("{err}").starts_with("invalid format style:"));
    }

    #[test]
    fn test_load_rejects_negative_line_length() {
        let err = load("style", "[format]\n  line_length = -1\n[]\n").unwrap_err();
        assert!(format!("{err}").contains("line_length"));
    }

    #[test]
    fn test_load_rejects_pattern_missing_order() {
        let doc = "[format]\n  [sorting]\n    [pattern]\n      section = ''\n    []\n  []\n[]\n";
        let err = load("style", doc).unwrap_err();
        assert!(format!("{err}").contains("'order'"));
    }

    #[test]
    fn test_load_rejects_unparsable_doc() {
        let err = load("style", "[format\n").unwrap_err();
        assert!(format!("{err}").starts_with("invalid format style:"));
    }

    #[test]
    fn test_load_ignores_unknown_fields() {
        let doc = "[format]\n  future_option = 1\n[]\n";
        assert!(load("style", doc).is_ok());
    }
}

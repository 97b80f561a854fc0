//! Style-driven canonical re-emission of hit documents.
//!
//! A [`Formatter`] normalizes whitespace around `=`, collapses runs of blank
//! lines to one, re-indents with a configurable indent string, optionally
//! rewrites legacy section markers to the canonical forms, reorders section
//! children according to sort patterns, and soft-wraps long quoted values.

mod style;

use regex::Regex;

use crate::error::{Error, Result};
use crate::parser::parse;
use crate::tree::{path_join, Node, RenderOptions, Section};

/// How a matched section's children are ordered.
#[derive(Debug, Clone)]
enum SortOrder {
    /// Sections first, then fields, each group alphabetical by name.
    Type,
    /// An explicit name order; `**` stands for all unnamed children.
    Explicit(Vec<String>),
}

#[derive(Debug)]
struct Pattern {
    section: Regex,
    order: SortOrder,
}

/// Formats hit text to a uniform, configurable style.
///
/// # Examples
///
/// ```
/// use hit::Formatter;
///
/// let fmt = Formatter::new();
/// let out = fmt.format("in.i", "[s]\nx=1\n\n\n\ny=2\n[]\n").unwrap();
/// assert_eq!(out, "[s]\n  x = 1\n\n  y = 2\n[]\n");
/// ```
#[derive(Debug)]
pub struct Formatter {
    /// Text used for a single level of nesting indentation.
    pub indent_string: String,
    /// Soft wrap target for long quoted field values.
    pub line_length: usize,
    /// Rewrite `[./name]`/`[../]` markers to `[name]`/`[]`.
    pub canonical_section_markers: bool,
    patterns: Vec<Pattern>,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            indent_string: "  ".to_string(),
            line_length: 100,
            canonical_section_markers: true,
            patterns: Vec::new(),
        }
    }
}

impl Formatter {
    /// Create a formatter with the canonical default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter configured by a style document.
    ///
    /// `fname` labels the style input in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] for unparsable documents, non-whitespace
    /// indent strings, negative line lengths, incomplete sorting patterns,
    /// and invalid section regexes.
    pub fn from_style(fname: &str, input: &str) -> Result<Self> {
        let doc = style::load(fname, input)?;
        let mut fmt = Self {
            indent_string: doc.indent_string,
            line_length: doc.line_length,
            canonical_section_markers: doc.canonical_section_markers,
            patterns: Vec::new(),
        };
        for (section, order) in doc.patterns {
            fmt.add_pattern(&section, order)?;
        }
        Ok(fmt)
    }

    /// Add a sorting pattern.
    ///
    /// `section` is a regex matched against a section's entire fullpath (the
    /// empty pattern matches the root). `order` is either the single token
    /// `type` or a list of child names; the token `**` stands for all
    /// children not named elsewhere in the list. Patterns are consulted in
    /// insertion order and the first match wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if the section regex does not compile.
    pub fn add_pattern(&mut self, section: &str, order: Vec<String>) -> Result<()> {
        let anchored = format!("^(?:{section})$");
        let regex = Regex::new(&anchored)
            .map_err(|e| Error::Style(format!("bad section pattern '{section}': {e}")))?;
        let order = if order.len() == 1 && order[0] == "type" {
            SortOrder::Type
        } else {
            SortOrder::Explicit(order)
        };
        self.patterns.push(Pattern {
            section: regex,
            order,
        });
        Ok(())
    }

    /// Parse `input` and return it formatted in this formatter's style.
    ///
    /// `fname` labels the input in parse errors.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the input is not valid hit text.
    pub fn format(&self, fname: &str, input: &str) -> Result<String> {
        let mut root = parse(fname, input)?;
        self.format_tree(&mut root);
        Ok(root.render_with(&self.render_options()))
    }

    /// Apply blank-line collapsing and sorting to an already parsed tree.
    pub fn format_tree(&self, root: &mut Node) {
        if let Node::Section(sec) = root {
            self.format_section(sec, "");
        }
    }

    /// The render options corresponding to this formatter's settings.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_level: 0,
            indent_string: self.indent_string.clone(),
            line_length: self.line_length,
            canonical_markers: self.canonical_section_markers,
        }
    }

    fn format_section(&self, sec: &mut Section, fullpath: &str) {
        collapse_blanks(sec.children_mut());

        if let Some(pattern) = self.patterns.iter().find(|p| p.section.is_match(fullpath)) {
            sort_children(sec.children_mut(), &pattern.order);
        }

        for child in sec.children_mut().iter_mut() {
            if let Node::Section(inner) = child {
                let child_path = path_join(&[fullpath, inner.name()]);
                self.format_section(inner, &child_path);
            }
        }
    }
}

/// Collapse runs of blank lines to at most one.
fn collapse_blanks(children: &mut Vec<Node>) {
    let mut prev_blank = false;
    children.retain(|child| {
        let blank = matches!(child, Node::Blank(_));
        let keep = !(blank && prev_blank);
        prev_blank = blank;
        keep
    });
}

/// A unit is a node plus the inline comment attached to its line, moved as
/// one piece when sorting.
type Unit = Vec<Node>;

fn sort_children(children: &mut Vec<Node>, order: &SortOrder) {
    let old = std::mem::take(children);
    let mut units: Vec<Unit> = Vec::new();
    for node in old {
        let inline = matches!(&node, Node::Comment(c) if c.is_inline());
        if inline && !units.is_empty() {
            if let Some(last) = units.last_mut() {
                last.push(node);
                continue;
            }
        }
        units.push(vec![node]);
    }

    // only Section/Field units move; comments and blanks hold their slots
    let sortable_slots: Vec<usize> = units
        .iter()
        .enumerate()
        .filter(|(_, unit)| matches!(unit[0], Node::Section(_) | Node::Field(_)))
        .map(|(idx, _)| idx)
        .collect();

    let mut slots: Vec<Option<Unit>> = units.into_iter().map(Some).collect();
    let items: Vec<Unit> = sortable_slots
        .iter()
        .filter_map(|&idx| slots[idx].take())
        .collect();

    let arranged = match order {
        SortOrder::Type => arrange_by_type(items),
        SortOrder::Explicit(names) => arrange_explicit(items, names),
    };

    for (&slot, unit) in sortable_slots.iter().zip(arranged) {
        slots[slot] = Some(unit);
    }
    *children = slots.into_iter().flatten().flatten().collect();
}

/// Sections first then fields, each group alphabetical by name.
fn arrange_by_type(items: Vec<Unit>) -> Vec<Unit> {
    let (mut sections, mut fields): (Vec<Unit>, Vec<Unit>) = items
        .into_iter()
        .partition(|unit| matches!(unit[0], Node::Section(_)));
    sections.sort_by(|a, b| a[0].name().cmp(b[0].name()));
    fields.sort_by(|a, b| a[0].name().cmp(b[0].name()));
    sections.extend(fields);
    sections
}

/// Named children take the order of the name list; unnamed children keep
/// their original relative order at the `**` position (or after the named
/// prefix when no `**` is present).
fn arrange_explicit(items: Vec<Unit>, names: &[String]) -> Vec<Unit> {
    let glob = names.iter().position(|n| n == "**");
    let (front, back) = match glob {
        Some(idx) => (&names[..idx], &names[idx + 1..]),
        None => (names, &[][..]),
    };

    let mut slots: Vec<Option<Unit>> = items.into_iter().map(Some).collect();
    let take_named = |slots: &mut Vec<Option<Unit>>, wanted: &[String]| -> Vec<Unit> {
        let mut taken = Vec::new();
        for name in wanted {
            for slot in slots.iter_mut() {
                if slot.as_ref().is_some_and(|unit| unit[0].name() == name) {
                    if let Some(unit) = slot.take() {
                        taken.push(unit);
                    }
                }
            }
        }
        taken
    };

    let front_units = take_named(&mut slots, front);
    let back_units = take_named(&mut slots, back);
    let middle: Vec<Unit> = slots.into_iter().flatten().collect();

    let mut result = front_units;
    result.extend(middle);
    result.extend(back_units);
    result
}

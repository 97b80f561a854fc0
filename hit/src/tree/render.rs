//! Canonical re-emission of hit trees as text.

use crate::tree::node::{quote_char, Field, Node, Section};

/// Options controlling how a tree is rendered.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Nesting level the receiver starts at.
    pub indent_level: usize,
    /// Text repeated once per nesting level.
    pub indent_string: String,
    /// Soft wrap target for long quoted field values; 0 disables wrapping.
    pub line_length: usize,
    /// Emit `[name]`/`[]` markers even where the source used the legacy
    /// `[./name]`/`[../]` forms.
    pub canonical_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_level: 0,
            indent_string: "  ".to_string(),
            line_length: 0,
            canonical_markers: true,
        }
    }
}

impl RenderOptions {
    /// Render at the given starting indent level.
    #[must_use]
    pub fn at_level(level: usize) -> Self {
        Self {
            indent_level: level,
            ..Self::default()
        }
    }

    fn indent(&self, level: usize) -> String {
        self.indent_string.repeat(level)
    }
}

pub(crate) fn render(node: &Node, opts: &RenderOptions) -> String {
    let mut buf = String::new();
    render_node(node, opts.indent_level, opts, &mut buf);
    buf
}

fn render_node(node: &Node, level: usize, opts: &RenderOptions, buf: &mut String) {
    match node {
        Node::Section(sec) if sec.name().is_empty() => {
            render_children(sec, level, opts, buf);
        }
        Node::Section(sec) => {
            let ind = opts.indent(level);
            let legacy = sec.legacy_markers && !opts.canonical_markers;
            if legacy {
                buf.push_str(&format!("{ind}[./{}]\n", sec.name()));
            } else {
                buf.push_str(&format!("{ind}[{}]\n", sec.name()));
            }
            render_children(sec, level + 1, opts, buf);
            if legacy {
                buf.push_str(&format!("{ind}[../]\n"));
            } else {
                buf.push_str(&format!("{ind}[]\n"));
            }
        }
        Node::Field(field) => {
            buf.push_str(&field_line(field, level, opts));
        }
        Node::Comment(comment) => {
            buf.push_str(&format!("{}{}\n", opts.indent(level), comment.text()));
        }
        Node::Blank(_) => buf.push('\n'),
    }
}

fn render_children(sec: &Section, level: usize, opts: &RenderOptions, buf: &mut String) {
    for child in sec.children() {
        // an inline comment re-attaches to the line emitted just before it
        if let Node::Comment(comment) = child {
            if comment.is_inline() && buf.ends_with('\n') && !buf.is_empty() {
                buf.pop();
                buf.push(' ');
                buf.push_str(comment.text());
                buf.push('\n');
                continue;
            }
        }
        render_node(child, level, opts, buf);
    }
}

fn field_line(field: &Field, level: usize, opts: &RenderOptions) -> String {
    let ind = opts.indent(level);
    let line = format!("{ind}{} = {}\n", field.name(), field.val());
    if opts.line_length == 0 {
        return line;
    }
    let first_len = line.lines().next().map_or(0, |l| l.chars().count());
    if first_len <= opts.line_length {
        return line;
    }
    let Some(quote) = quote_char(field.val()) else {
        return line;
    };
    let inner = &field.val()[1..field.val().len() - 1];
    let words: Vec<&str> = inner.split_whitespace().collect();
    if words.len() < 2 {
        return line;
    }
    wrap_field(&ind, field.name(), quote, &words, opts.line_length)
}

/// Reflow a long quoted value into a multi-line string with continuation
/// lines aligned under the opening quote.
fn wrap_field(ind: &str, name: &str, quote: char, words: &[&str], max: usize) -> String {
    let head = format!("{ind}{name} = {quote}");
    let pad = " ".repeat(head.chars().count());
    let mut out = head;
    let mut line_len = out.chars().count();
    let mut first = true;
    for word in words {
        let word_len = word.chars().count();
        if !first && line_len + 1 + word_len + 1 > max {
            out.push('\n');
            out.push_str(&pad);
            line_len = pad.chars().count();
        } else if !first {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
        first = false;
    }
    out.push(quote);
    out.push('\n');
    out
}

//! Node types and tree operations.

use crate::error::{Error, Result};
use crate::tree::path::{path_join, path_norm};
use crate::tree::render::RenderOptions;

/// Source location of a node: input label plus 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Name of the input the node came from (file name or `stdin`).
    pub file: String,
    /// Line the node starts on (1-based; 0 for synthetic nodes).
    pub line: usize,
}

impl Location {
    /// Create a location from an input label and line number.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// The semantic type of a field value, determined by lexical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One of true/false/yes/no/on/off (any case).
    Bool,
    /// A decimal or hex integer literal.
    Int,
    /// A floating-point literal.
    Float,
    /// A quoted or unquoted string.
    String,
}

/// Restricts which node kinds a [`Walker`] visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeFilter {
    /// Visit every node.
    All,
    /// Visit only Field nodes.
    Field,
    /// Visit only Section nodes.
    Section,
}

impl NodeFilter {
    /// Whether this filter admits the given node.
    #[must_use]
    pub fn matches(self, node: &Node) -> bool {
        match self {
            Self::All => true,
            Self::Field => matches!(node, Node::Field(_)),
            Self::Section => matches!(node, Node::Section(_)),
        }
    }
}

/// Pre-order visitor over a hit tree.
///
/// The lifetime `'t` ties visited references to the tree borrow, so a walker
/// may collect `&'t Node` references (as [`crate::walkers::GatherParamWalker`]
/// does).
pub trait Walker<'t> {
    /// Called for each node admitted by [`Walker::filter`]. `fullpath` is the
    /// slash-joined chain of section names from the walk root to the node.
    fn visit(&mut self, fullpath: &str, node: &'t Node);

    /// The node kinds this walker is applied to.
    fn filter(&self) -> NodeFilter {
        NodeFilter::Field
    }
}

/// A named container of ordered child nodes.
#[derive(Debug, Clone)]
pub struct Section {
    pub(crate) name: String,
    pub(crate) children: Vec<Node>,
    pub(crate) location: Location,
    /// True when the source used `[./name]` / `[../]` markers.
    pub(crate) legacy_markers: bool,
}

impl Section {
    /// Create a section with no children and no source location.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_location(name, Location::default())
    }

    /// Create a section with a source location.
    #[must_use]
    pub fn with_location(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            location,
            legacy_markers: false,
        }
    }

    /// The section's name (empty for a root).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The section's ordered children.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to the section's children.
    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Append a child node, taking ownership.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Insert a child node prior to the supplied index.
    pub fn insert_child(&mut self, index: usize, child: Node) {
        self.children.insert(index, child);
    }
}

/// A name/value parameter.
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
    pub(crate) raw: String,
    pub(crate) location: Location,
}

impl Field {
    /// Create a field with no source location. `raw` is the value text
    /// exactly as it would appear in a document (quotes included).
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind, raw: impl Into<String>) -> Self {
        Self::with_location(name, kind, raw, Location::default())
    }

    /// Create a field with a source location.
    #[must_use]
    pub fn with_location(
        name: impl Into<String>,
        kind: FieldKind,
        raw: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            raw: raw.into(),
            location,
        }
    }

    /// The field's name (the text before the `=`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The semantic type of the stored value.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The raw value text as read from the input, quotes included.
    #[must_use]
    pub fn val(&self) -> &str {
        &self.raw
    }

    /// Overwrite the field's value and kind.
    pub fn set_val(&mut self, raw: impl Into<String>, kind: FieldKind) {
        self.raw = raw.into();
        self.kind = kind;
    }

    /// The value as a normalized string: one level of matching quotes is
    /// stripped and escaped quote characters are unescaped.
    #[must_use]
    pub fn str_val(&self) -> String {
        match quote_char(&self.raw) {
            Some(q) => {
                let inner = &self.raw[1..self.raw.len() - 1];
                inner.replace(&format!("\\{q}"), &q.to_string())
            }
            None => self.raw.clone(),
        }
    }

    /// The value as a boolean.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the value is not one of
    /// true/false/yes/no/on/off.
    pub fn bool_val(&self) -> Result<bool> {
        to_bool(&self.str_val()).ok_or_else(|| self.mismatch("boolean"))
    }

    /// The value as a 64-bit integer (decimal or hex).
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the value does not parse as an integer.
    pub fn int_val(&self) -> Result<i64> {
        parse_int(self.str_val().trim()).ok_or_else(|| self.mismatch("integer"))
    }

    /// The value as a 64-bit float.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the value does not parse as a number.
    pub fn float_val(&self) -> Result<f64> {
        let s = self.str_val();
        let s = s.trim();
        if let Some(i) = parse_int(s) {
            return Ok(i as f64);
        }
        s.parse::<f64>().map_err(|_| self.mismatch("float"))
    }

    /// The value split on whitespace.
    #[must_use]
    pub fn vec_str_val(&self) -> Vec<String> {
        self.str_val()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// The value as whitespace-delimited integers.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if any entry does not parse as an integer.
    pub fn vec_int_val(&self) -> Result<Vec<i64>> {
        self.str_val()
            .split_whitespace()
            .map(|tok| parse_int(tok).ok_or_else(|| self.mismatch("integer vector")))
            .collect()
    }

    /// The value as whitespace-delimited floats.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if any entry does not parse as a number.
    pub fn vec_float_val(&self) -> Result<Vec<f64>> {
        self.str_val()
            .split_whitespace()
            .map(|tok| {
                parse_int(tok).map(|i| i as f64).map_or_else(
                    || tok.parse::<f64>().map_err(|_| self.mismatch("float vector")),
                    Ok,
                )
            })
            .collect()
    }

    fn mismatch(&self, wanted: &'static str) -> Error {
        Error::TypeMismatch {
            path: self.name.clone(),
            wanted,
            raw: self.raw.clone(),
        }
    }
}

/// A preserved comment.
#[derive(Debug, Clone)]
pub struct Comment {
    pub(crate) text: String,
    pub(crate) inline: bool,
    pub(crate) location: Location,
}

impl Comment {
    /// Create a comment. `text` includes the leading `#`; `inline` marks a
    /// comment sharing a line with a field or section header.
    #[must_use]
    pub fn new(text: impl Into<String>, inline: bool) -> Self {
        Self::with_location(text, inline, Location::default())
    }

    /// Create a comment with a source location.
    #[must_use]
    pub fn with_location(text: impl Into<String>, inline: bool, location: Location) -> Self {
        Self {
            text: text.into(),
            inline,
            location,
        }
    }

    /// The comment text, `#` included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this comment shared a line with other content.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        self.inline
    }
}

/// A preserved blank-line separator.
#[derive(Debug, Clone, Default)]
pub struct Blank {
    pub(crate) location: Location,
}

impl Blank {
    /// Create a blank line with a source location.
    #[must_use]
    pub fn with_location(location: Location) -> Self {
        Self { location }
    }
}

/// An element of a parsed hit tree.
///
/// The differences between node kinds are data, not behavior, so the tree is
/// a tagged union rather than a trait hierarchy.
#[derive(Debug, Clone)]
pub enum Node {
    /// A named container of child nodes.
    Section(Section),
    /// A name/value parameter.
    Field(Field),
    /// A preserved comment.
    Comment(Comment),
    /// A preserved blank line.
    Blank(Blank),
}

impl Node {
    /// The node's own contribution to its fullpath: the section or field
    /// name, empty for comments and blanks.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Section(s) => &s.name,
            Self::Field(f) => &f.name,
            Self::Comment(_) | Self::Blank(_) => "",
        }
    }

    /// The node's source location.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Section(s) => &s.location,
            Self::Field(f) => &f.location,
            Self::Comment(c) => &c.location,
            Self::Blank(b) => &b.location,
        }
    }

    /// The line of the original input this node started on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.location().line
    }

    /// The name of the original input this node came from.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.location().file
    }

    /// Borrow this node as a section, if it is one.
    #[must_use]
    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Self::Section(s) => Some(s),
            _ => None,
        }
    }

    /// Mutably borrow this node as a section, if it is one.
    pub fn as_section_mut(&mut self) -> Option<&mut Section> {
        match self {
            Self::Section(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow this node as a field, if it is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(f) => Some(f),
            _ => None,
        }
    }

    /// The node's children (empty for non-sections).
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Section(s) => &s.children,
            _ => &[],
        }
    }

    /// Resolve a slash-delimited path downward from this node.
    ///
    /// Returns the first node found at the given relative path, or `None`.
    /// An empty (or all-`.`) path resolves to this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use hit::parse;
    ///
    /// let root = parse("in.i", "[a]\n  [b]\n    x = 1\n  []\n[]\n").unwrap();
    /// assert!(root.find("a/b/x").is_some());
    /// assert!(root.find("a/missing").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&Node> {
        let normed = path_norm(path);
        if normed.is_empty() {
            return Some(self);
        }
        self.find_inner(&normed)
    }

    fn find_inner(&self, path: &str) -> Option<&Node> {
        let Self::Section(sec) = self else {
            return None;
        };
        for child in &sec.children {
            let name = path_norm(child.name());
            if name.is_empty() {
                continue;
            }
            if name == path {
                return Some(child);
            }
            if let Some(rest) = path.strip_prefix(&name) {
                if let Some(rest) = rest.strip_prefix('/') {
                    if let Some(found) = child.find_inner(rest) {
                        return Some(found);
                    }
                }
            }
        }
        None
    }

    /// Depth-first pre-order traversal, visiting nodes admitted by the
    /// walker's filter. Fullpaths are relative to this node's own name.
    pub fn walk<'t, W: Walker<'t> + ?Sized>(&'t self, walker: &mut W) {
        let prefix = path_norm(self.name());
        self.walk_inner(&prefix, walker);
    }

    fn walk_inner<'t, W: Walker<'t> + ?Sized>(&'t self, fullpath: &str, walker: &mut W) {
        if !fullpath.is_empty() && walker.filter().matches(self) {
            walker.visit(fullpath, self);
        }
        if let Self::Section(sec) = self {
            for child in &sec.children {
                let child_path = path_join(&[fullpath, child.name()]);
                child.walk_inner(&child_path, walker);
            }
        }
    }

    /// Deep-copy this node under a different name.
    ///
    /// Used with a node's fullpath as the new name, the clone can later be
    /// repositioned by `explode` into a synthetic tree.
    #[must_use]
    pub fn clone_renamed(&self, name: &str) -> Node {
        let mut cloned = self.clone();
        match &mut cloned {
            Self::Section(s) => s.name = name.to_string(),
            Self::Field(f) => f.name = name.to_string(),
            Self::Comment(_) | Self::Blank(_) => {}
        }
        cloned
    }

    /// The node's value as a normalized string.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch for nodes that hold no value.
    pub fn str_val(&self) -> Result<String> {
        match self {
            Self::Field(f) => Ok(f.str_val()),
            _ => Err(Error::TypeMismatch {
                path: self.name().to_string(),
                wanted: "string",
                raw: String::new(),
            }),
        }
    }

    /// Look up the field at `path` and convert its value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParameter`] if no field exists at the path, or a
    /// type mismatch if the value cannot be represented as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hit::parse;
    ///
    /// let root = parse("in.i", "[hello]\n  world = 42\n[]\n").unwrap();
    /// assert_eq!(root.param::<i64>("hello/world").unwrap(), 42);
    /// assert!(root.param::<i64>("hello/missing").is_err());
    /// ```
    pub fn param<T: FromField>(&self, path: &str) -> Result<T> {
        let node = self.find(path).ok_or_else(|| Error::NoParameter {
            path: path.to_string(),
        })?;
        match node {
            Self::Field(f) => T::from_field(f),
            _ => Err(Error::NoParameter {
                path: path.to_string(),
            }),
        }
    }

    /// Like [`Node::param`], but returns `default` if no field exists at the
    /// path.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if a field exists but cannot be represented
    /// as `T`.
    pub fn param_or<T: FromField>(&self, path: &str, default: T) -> Result<T> {
        match self.find(path) {
            Some(Self::Field(f)) => T::from_field(f),
            _ => Ok(default),
        }
    }

    /// Render this node (and its subtree) as hit text under default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render this node (and its subtree) under the given options.
    #[must_use]
    pub fn render_with(&self, opts: &RenderOptions) -> String {
        crate::tree::render::render(self, opts)
    }
}

/// Convert a field's value into a typed Rust value.
///
/// Implemented for the scalar and vector types a hit field can represent;
/// used by [`Node::param`].
pub trait FromField: Sized {
    /// Convert the field's value.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the value cannot be represented as `Self`.
    fn from_field(field: &Field) -> Result<Self>;
}

impl FromField for bool {
    fn from_field(field: &Field) -> Result<Self> {
        field.bool_val()
    }
}

impl FromField for i64 {
    fn from_field(field: &Field) -> Result<Self> {
        field.int_val()
    }
}

impl FromField for f64 {
    fn from_field(field: &Field) -> Result<Self> {
        field.float_val()
    }
}

impl FromField for String {
    fn from_field(field: &Field) -> Result<Self> {
        Ok(field.str_val())
    }
}

impl FromField for Vec<i64> {
    fn from_field(field: &Field) -> Result<Self> {
        field.vec_int_val()
    }
}

impl FromField for Vec<f64> {
    fn from_field(field: &Field) -> Result<Self> {
        field.vec_float_val()
    }
}

impl FromField for Vec<String> {
    fn from_field(field: &Field) -> Result<Self> {
        Ok(field.vec_str_val())
    }
}

/// The quote character surrounding `s`, if any.
#[must_use]
pub fn quote_char(s: &str) -> Option<char> {
    let first = s.chars().next()?;
    if (first == '\'' || first == '"') && s.len() >= 2 && s.ends_with(first) {
        Some(first)
    } else {
        None
    }
}

/// Convert a hit boolean word to a `bool`.
///
/// Recognizes true/false/yes/no/on/off in any case.
#[must_use]
pub fn to_bool(val: &str) -> Option<bool> {
    match val.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Some(true),
        "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a decimal or hex integer literal with an optional sign.
#[must_use]
pub fn parse_int(s: &str) -> Option<i64> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let value = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<i64>().ok()?
    };
    Some(if negative { -value } else { value })
}

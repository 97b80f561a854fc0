//! The hit tree model.
//!
//! A parsed hit document is a tree of [`Node`]s: sections containing
//! parameters, nested sections, comments, and blank-line separators. Nodes
//! are owned exclusively by their parent section (the root by the caller);
//! fullpaths are computed during traversal rather than stored, so no parent
//! back-references exist to invalidate across transforms.
//!
//! # Examples
//!
//! ```
//! use hit::parse;
//!
//! let root = parse("in.i", "[mesh]\n  dim = 2\n[]\n").unwrap();
//! assert_eq!(root.param::<i64>("mesh/dim").unwrap(), 2);
//! ```

mod node;
mod path;
mod render;

pub use node::{
    parse_int, quote_char, to_bool, Blank, Comment, Field, FieldKind, FromField, Location, Node,
    NodeFilter, Section, Walker,
};
pub use path::{path_join, path_norm};
pub use render::RenderOptions;

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hit
//!
//! A library for parsing, transforming, and formatting hierarchical input
//! text (hit) configuration documents.
//!
//! Hit documents declare named sections holding parameters and nested
//! sections:
//!
//! ```text
//! [mesh]
//!   dim = 2
//!   file = 'square.e'
//! []
//! ```
//!
//! ## Core Types
//!
//! - [`Node`], [`Section`], [`Field`]: the parsed tree
//! - [`parse`]: text → tree; [`Node::render`]: tree → text
//! - [`explode`] and [`merge`]: structural transforms
//! - [`Formatter`]: style-driven canonical re-emission
//! - [`BraceExpander`]: `${...}` expression expansion
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hit::parse;
//!
//! let root = parse("in.i", "[hello]\n  world = 42\n[]\n").unwrap();
//! assert_eq!(root.param::<i64>("hello/world").unwrap(), 42);
//! assert_eq!(root.render(), "[hello]\n  world = 42\n[]\n");
//! ```

pub mod braceexpr;
pub mod error;
pub mod format;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod transform;
pub mod tree;
pub mod walkers;

// Re-export key types at crate root for convenience
pub use braceexpr::{BraceExpander, EnvEvaluator, Evaluator, RawEvaluator};
pub use error::{Error, Result};
pub use format::Formatter;
pub use logging::{init_logger, LogLevel, Logger};
pub use parser::{check, parse};
pub use transform::{explode, merge};
pub use tree::{
    path_join, path_norm, Field, FieldKind, FromField, Location, Node, NodeFilter, RenderOptions,
    Section, Walker,
};
pub use walkers::{
    duplicate_errors, gather_params, remove_empty_sections, remove_params, DupParamWalker,
    GatherParamWalker, ParamMap,
};

//! synmark - regex-driven syntax annotation for code regions
//!
//! Splits the text of a region into plain and category-tagged segments
//! using a per-language table of regular expressions, then renders the
//! result as HTML spans or terminal colors.

pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod render;
pub mod syntax;

pub use config::Config;
pub use document::Document;
pub use error::{FaultKind, HighlightError, Result};
pub use syntax::{Category, HighlightReport, HighlightStatus, Highlighter, Region, Segment};

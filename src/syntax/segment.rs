//! Segments and regions
//!
//! A region is a span of a document assigned a language. It owns an
//! ordered list of segments whose concatenated text is always the
//! region's original text.

use super::category::Category;

/// A contiguous slice of a region's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Uncategorized text, still open to later passes
    Plain(String),
    /// Text tagged with a category; never re-scanned
    Tagged { category: Category, text: String },
    /// Markup copied through verbatim; never scanned
    Markup(String),
}

impl Segment {
    /// Create a plain segment
    pub fn plain(text: impl Into<String>) -> Self {
        Segment::Plain(text.into())
    }

    /// Create a tagged segment
    pub fn tagged(category: Category, text: impl Into<String>) -> Self {
        Segment::Tagged {
            category,
            text: text.into(),
        }
    }

    /// Create a raw markup segment
    pub fn markup(markup: impl Into<String>) -> Self {
        Segment::Markup(markup.into())
    }

    /// Get the segment text (the raw markup for markup segments)
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Tagged { text, .. } | Segment::Markup(text) => {
                text.as_str()
            }
        }
    }

    /// Get the category, if tagged
    pub fn category(&self) -> Option<&Category> {
        match self {
            Segment::Tagged { category, .. } => Some(category),
            Segment::Plain(_) | Segment::Markup(_) => None,
        }
    }

    /// Check if this is a plain segment
    pub fn is_plain(&self) -> bool {
        matches!(self, Segment::Plain(_))
    }
}

/// A span of text assigned a language for annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Language identifier (None = use the highlighter's default)
    pub language: Option<String>,
    segments: Vec<Segment>,
}

impl Region {
    /// Create a region holding a single plain segment
    pub fn new(language: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            language: language.map(str::to_string),
            segments: vec![Segment::Plain(text.into())],
        }
    }

    /// Create a region from an existing segment sequence
    ///
    /// Tagged segments in the input stay opaque to every later pass.
    pub fn from_segments(language: Option<&str>, segments: Vec<Segment>) -> Self {
        Self {
            language: language.map(str::to_string),
            segments,
        }
    }

    /// Get the segment sequence
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Insert a segment at a position
    pub fn insert(&mut self, index: usize, segment: Segment) {
        self.segments.insert(index, segment);
    }

    /// Take the segment sequence out, leaving the region empty
    pub(crate) fn take_segments(&mut self) -> Vec<Segment> {
        std::mem::take(&mut self.segments)
    }

    /// Replace the segment sequence
    pub(crate) fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    /// Concatenate the text of every segment
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Number of tagged segments
    pub fn tagged_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| s.category().is_some())
            .count()
    }
}

//! Highlight regions in HTML documents
//!
//! A region is any element whose `class` attribute contains `highlight`.
//! Its language comes from the `data-language` attribute. Everything
//! outside region bodies is kept byte for byte when the document is
//! rendered back, and so is the body of any region no pass changed.
//!
//! Inside a body, `<span class="...">` elements around plain text become
//! tagged segments that later passes leave alone, so a page can pre-mark
//! text by hand. Any other markup (tags, comments, whole elements) is
//! kept as an opaque segment and written back verbatim.

use std::ops::Range;

use tracing::{debug, warn};

use crate::render::render_html;
use crate::syntax::{Category, Region, Segment};

/// Class marking an element as a highlight region
const HIGHLIGHT_CLASS: &str = "highlight";

/// Elements that never have a closing tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// A document split into pass-through text and highlight regions
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    /// Byte ranges of region bodies in `source`, in document order
    bodies: Vec<Range<usize>>,
    regions: Vec<Region>,
    /// Segments of each region as parsed
    parsed: Vec<Vec<Segment>>,
}

impl Document {
    /// Find the highlight regions of a document
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        // ASCII lowering keeps byte offsets identical to `source`
        let lower = source.to_ascii_lowercase();
        let mut bodies = Vec::new();
        let mut regions = Vec::new();
        let mut pos = 0;

        while let Some(tag) = next_open_tag(&lower, pos) {
            pos = tag.end;
            if tag.is_void(&lower) {
                continue;
            }

            let attrs = &source[tag.attrs.clone()];
            if !has_class(attrs, HIGHLIGHT_CLASS) {
                continue;
            }

            let Some(close) = matching_close(&lower, tag.end, tag.name) else {
                warn!(offset = tag.end, "highlight region <{}> is never closed", tag.name);
                continue;
            };

            let body = tag.end..close.start;
            let language = attr_value(attrs, "data-language").filter(|l| !l.is_empty());
            debug!(offset = body.start, language = ?language, "found highlight region");
            regions.push(Region::from_segments(
                language.as_deref(),
                parse_body(&source[body.clone()]),
            ));
            pos = close.end;
            bodies.push(body);
        }

        let parsed = regions.iter().map(|r| r.segments().to_vec()).collect();
        Self {
            source,
            bodies,
            regions,
            parsed,
        }
    }

    /// Get the regions in document order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Get the regions for highlighting
    pub fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }

    /// Check if the document has no highlight regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Write the document back with every changed region body rendered
    /// as HTML
    ///
    /// A region whose segments are still the parsed ones (skipped, rolled
    /// back, or nothing matched) keeps its source body exactly.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut last = 0;
        for ((body, region), parsed) in self.bodies.iter().zip(&self.regions).zip(&self.parsed) {
            out.push_str(&self.source[last..body.start]);
            if region.segments() == parsed.as_slice() {
                out.push_str(&self.source[body.clone()]);
            } else {
                out.push_str(&render_html(region));
            }
            last = body.end;
        }
        out.push_str(&self.source[last..]);
        out
    }
}

/// An opening tag found in lowercased source
struct OpenTag<'a> {
    name: &'a str,
    /// Offset of `<`
    start: usize,
    /// Attribute text between the name and `>`
    attrs: Range<usize>,
    /// Offset just past `>`
    end: usize,
}

/// Find the next opening tag at or after `from`
fn next_open_tag(lower: &str, from: usize) -> Option<OpenTag<'_>> {
    let mut pos = from;
    loop {
        let lt = pos + lower.get(pos..)?.find('<')?;
        let name_start = lt + 1;
        let name_len = lower[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        let name_end = name_start + name_len;
        pos = name_start;
        if name_len == 0 {
            continue;
        }

        let gt = name_end + lower[name_end..].find('>')?;
        return Some(OpenTag {
            name: &lower[name_start..name_end],
            start: lt,
            attrs: name_end..gt,
            end: gt + 1,
        });
    }
}

impl OpenTag<'_> {
    /// Check if the element has no body (`<br>`, `<x/>`)
    fn is_void(&self, lower: &str) -> bool {
        VOID_ELEMENTS.contains(&self.name) || lower[self.attrs.clone()].trim_end().ends_with('/')
    }
}

/// Find the closing tag of an element whose opening tag ends at `from`
///
/// Same-name elements nested inside are skipped over. Returns the byte
/// range of the closing tag.
fn matching_close(lower: &str, from: usize, name: &str) -> Option<Range<usize>> {
    let mut depth = 0usize;
    let mut pos = from;

    loop {
        let lt = pos + lower.get(pos..)?.find('<')?;
        pos = lt + 1;
        let rest = &lower[pos..];
        let (closing, rest) = match rest.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };
        let names_element = rest.starts_with(name)
            && !rest
                .as_bytes()
                .get(name.len())
                .is_some_and(|b| b.is_ascii_alphanumeric());
        if !names_element {
            continue;
        }

        let gt = pos + lower[pos..].find('>')?;
        if closing {
            if depth == 0 {
                return Some(lt..gt + 1);
            }
            depth -= 1;
        } else if !lower[..gt].ends_with('/') {
            depth += 1;
        }
        pos = gt + 1;
    }
}

/// Check if a class list attribute contains `class`
fn has_class(attrs: &str, class: &str) -> bool {
    attr_value(attrs, "class").is_some_and(|v| v.split_whitespace().any(|c| c == class))
}

/// Get an attribute value from a tag's attribute text
fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let lower = attrs.to_ascii_lowercase();
    let mut from = 0;

    while let Some(found) = lower[from..].find(name) {
        let start = from + found;
        let after = start + name.len();
        from = after;

        let at_word_start = start == 0 || lower.as_bytes()[start - 1].is_ascii_whitespace();
        let rest = attrs[after..].trim_start();
        if !at_word_start || !rest.starts_with('=') {
            continue;
        }

        let value = rest[1..].trim_start();
        let raw = match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..].split(quote).next().unwrap_or(""),
            Some(_) => value
                .split(|c: char| c.is_whitespace() || c == '/')
                .next()
                .unwrap_or(""),
            None => "",
        };
        return Some(decode_entities(raw));
    }

    None
}

/// Split a region body into plain text, pre-tagged spans and markup
fn parse_body(body: &str) -> Vec<Segment> {
    let lower = body.to_ascii_lowercase();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(lt) = lower.get(pos..).and_then(|rest| rest.find('<')) {
        let lt = pos + lt;
        pos = lt + 1;
        let Some((end, segment)) = read_markup(body, &lower, lt) else {
            continue;
        };

        if text_start < lt {
            segments.push(Segment::plain(decode_entities(&body[text_start..lt])));
        }
        segments.push(segment);
        pos = end;
        text_start = end;
    }

    if text_start < body.len() || segments.is_empty() {
        segments.push(Segment::plain(decode_entities(&body[text_start..])));
    }
    segments
}

/// Read the markup starting with the `<` at `lt`
///
/// Returns where it ends and the segment standing for it. A `<` that
/// starts no markup is text and yields `None`.
fn read_markup(body: &str, lower: &str, lt: usize) -> Option<(usize, Segment)> {
    let rest = &lower[lt + 1..];

    if rest.starts_with("!--") {
        let end = rest.find("-->").map_or(body.len(), |i| lt + 1 + i + 3);
        return Some((end, Segment::markup(&body[lt..end])));
    }
    if rest.starts_with(['/', '!', '?']) {
        let end = lt + 1 + rest.find('>')? + 1;
        return Some((end, Segment::markup(&body[lt..end])));
    }

    if !rest.as_bytes().first().is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let tag = next_open_tag(lower, lt).filter(|tag| tag.start == lt)?;
    let close = if tag.is_void(lower) {
        None
    } else {
        matching_close(lower, tag.end, tag.name)
    };
    let Some(close) = close else {
        return Some((tag.end, Segment::markup(&body[lt..tag.end])));
    };

    if tag.name == "span" {
        let inner = &body[tag.end..close.start];
        let class = attr_value(&body[tag.attrs.clone()], "class")
            .and_then(|v| v.split_whitespace().next().map(str::to_string));
        if let Some(class) = class.filter(|_| !inner.is_empty() && !inner.contains('<')) {
            let segment = Segment::tagged(Category::from_name(&class), decode_entities(inner));
            return Some((close.end, segment));
        }
    }

    Some((close.end, Segment::markup(&body[lt..close.end])))
}

/// Decode character references in HTML text
///
/// Unrecognised references are left as they are.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode one reference name (the part between `&` and `;`)
fn decode_entity(name: &str) -> Option<char> {
    match name {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_marked_regions() {
        let doc = Document::parse(
            "<p>intro</p>\n\
             <pre class=\"highlight\" data-language=\"C\">int x;</pre>\n\
             <pre>not marked</pre>\n\
             <code class='inline highlight'>y</code>",
        );
        assert_eq!(doc.regions().len(), 2);
        assert_eq!(doc.regions()[0].language.as_deref(), Some("C"));
        assert_eq!(doc.regions()[0].text(), "int x;");
        assert_eq!(doc.regions()[1].language, None);
        assert_eq!(doc.regions()[1].text(), "y");
    }

    #[test]
    fn test_no_regions() {
        let doc = Document::parse("<div class=\"highlighted\">x</div>");
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "<div class=\"highlighted\">x</div>");
    }

    #[test]
    fn test_unclosed_region_is_ignored() {
        let doc = Document::parse("<pre class=highlight>int x;");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_body_entities_decoded() {
        let doc = Document::parse("<pre class=\"highlight\">a &lt; b &amp;&amp; c &#62; d &bogus;</pre>");
        assert_eq!(doc.regions()[0].text(), "a < b && c > d &bogus;");
    }

    #[test]
    fn test_existing_spans_become_tagged() {
        let doc = Document::parse(
            "<pre class=\"highlight\">x <span class=\"keyword\">if</span> y</pre>",
        );
        assert_eq!(
            doc.regions()[0].segments(),
            &[
                Segment::plain("x "),
                Segment::tagged(Category::Keyword, "if"),
                Segment::plain(" y"),
            ]
        );
    }

    #[test]
    fn test_render_replaces_bodies_only() {
        let mut doc = Document::parse(
            "<h1>T</h1><pre class=\"highlight\" data-language=\"java\">a<b</pre><p>end</p>",
        );
        doc.regions_mut()[0] = Region::from_segments(
            Some("java"),
            vec![
                Segment::plain("a"),
                Segment::tagged(Category::Keyword, "<b"),
            ],
        );
        assert_eq!(
            doc.render(),
            "<h1>T</h1><pre class=\"highlight\" data-language=\"java\">\
             a<span class=\"keyword\">&lt;b</span></pre><p>end</p>"
        );
    }

    #[test]
    fn test_any_element_can_be_a_region() {
        let doc = Document::parse(
            "<p class=\"highlight\" data-language=\"C\">int x;</p>\
             <span class=\"highlight\">y</span><br class=\"highlight\">",
        );
        assert_eq!(doc.regions().len(), 2);
        assert_eq!(doc.regions()[0].text(), "int x;");
        assert_eq!(doc.regions()[1].text(), "y");
    }

    #[test]
    fn test_nested_same_name_element() {
        let doc = Document::parse(
            "<div class=\"highlight\"><div>int a;</div>int b;</div><div>after</div>",
        );
        assert_eq!(
            doc.regions()[0].segments(),
            &[Segment::markup("<div>int a;</div>"), Segment::plain("int b;")]
        );
        assert_eq!(matching_close("<div><div></div></div>", 5, "div"), Some(16..22));
        assert_eq!(matching_close("<div><div/></div>", 5, "div"), Some(11..17));
        assert_eq!(matching_close("<div><divx></div>", 5, "div"), Some(11..17));
    }

    #[test]
    fn test_body_markup_is_opaque() {
        let doc = Document::parse(
            "<pre class=\"highlight\">a<br>b <b>c</b> <span>d</span> \
             <span class=\"x\"><i>e</i></span><!-- f --></g>h < i</pre>",
        );
        assert_eq!(
            doc.regions()[0].segments(),
            &[
                Segment::plain("a"),
                Segment::markup("<br>"),
                Segment::plain("b "),
                Segment::markup("<b>c</b>"),
                Segment::plain(" "),
                Segment::markup("<span>d</span>"),
                Segment::plain(" "),
                Segment::markup("<span class=\"x\"><i>e</i></span>"),
                Segment::markup("<!-- f -->"),
                Segment::markup("</g>"),
                Segment::plain("h < i"),
            ]
        );
    }

    #[test]
    fn test_unchanged_region_renders_source() {
        let source = "<pre class=\"highlight\" data-language=\"cobol\">MOVE A<br>TO B &amp; C</pre>";
        let doc = Document::parse(source);
        assert_eq!(doc.render(), source);
    }

    #[test]
    fn test_changed_region_keeps_markup() {
        let mut doc = Document::parse("<pre class=\"highlight\"><b>int</b> x;<br>y</pre>");
        let mut segments = doc.regions()[0].segments().to_vec();
        segments[1] = Segment::tagged(Category::Type, " x;");
        doc.regions_mut()[0] = Region::from_segments(None, segments);
        assert_eq!(
            doc.render(),
            "<pre class=\"highlight\"><b>int</b><span class=\"type\"> x;</span><br>y</pre>"
        );
    }

    #[test]
    fn test_attr_value_forms() {
        assert_eq!(attr_value(r#" class="a b""#, "class").as_deref(), Some("a b"));
        assert_eq!(attr_value(" CLASS = 'x'", "class").as_deref(), Some("x"));
        assert_eq!(attr_value(" class=x id=y", "class").as_deref(), Some("x"));
        assert_eq!(attr_value(" data-class=\"x\"", "class"), None);
        assert_eq!(attr_value(" id=\"x\"", "class"), None);
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(decode_entities("&quot;&#39;&#x41;&apos;"), "\"'A'");
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&#xZZ;"), "&#xZZ;");
    }
}

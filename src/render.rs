//! Region rendering
//!
//! HTML output wraps tagged text in `<span class="category">` and leaves
//! the look to the page's style sheet. Terminal output resolves each
//! category to its default style and writes ANSI sequences via crossterm.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{self as term, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::syntax::{Color, Region, Segment, Style};

/// Escape text for inclusion in HTML element content or attributes
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render a region's segments as HTML
pub fn render_html(region: &Region) -> String {
    let mut out = String::new();
    for segment in region.segments() {
        match segment {
            Segment::Plain(text) => out.push_str(&html_escape(text)),
            Segment::Markup(markup) => out.push_str(markup),
            Segment::Tagged { category, text } => {
                out.push_str("<span class=\"");
                out.push_str(&html_escape(category.name()));
                out.push_str("\">");
                out.push_str(&html_escape(text));
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Write a region's segments with terminal styling
pub fn write_ansi<W: Write>(out: &mut W, region: &Region) -> io::Result<()> {
    for segment in region.segments() {
        match segment {
            Segment::Plain(text) | Segment::Markup(text) => queue!(out, Print(text))?,
            Segment::Tagged { category, text } => {
                apply_style(out, &category.default_style())?;
                queue!(
                    out,
                    Print(text),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
            }
        }
    }
    out.flush()
}

/// Queue the commands that switch the terminal to a style
fn apply_style<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(term_color(style.fg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Map the 16-color palette onto crossterm's color names
fn term_color(color: Color) -> term::Color {
    match color {
        Color::Default => term::Color::Reset,
        Color::Black => term::Color::Black,
        Color::Red => term::Color::DarkRed,
        Color::Green => term::Color::DarkGreen,
        Color::Yellow => term::Color::DarkYellow,
        Color::Blue => term::Color::DarkBlue,
        Color::Magenta => term::Color::DarkMagenta,
        Color::Cyan => term::Color::DarkCyan,
        Color::White => term::Color::Grey,
        Color::BrightBlack => term::Color::DarkGrey,
        Color::BrightRed => term::Color::Red,
        Color::BrightGreen => term::Color::Green,
        Color::BrightYellow => term::Color::Yellow,
        Color::BrightBlue => term::Color::Blue,
        Color::BrightMagenta => term::Color::Magenta,
        Color::BrightCyan => term::Color::Cyan,
        Color::BrightWhite => term::Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    fn sample() -> Region {
        Region::from_segments(
            Some("C"),
            vec![
                Segment::tagged(Category::Keyword, "if"),
                Segment::plain(" (a < b) "),
                Segment::tagged(Category::String, "\"&\""),
            ],
        )
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a<b && c>'d'"), "a&lt;b &amp;&amp; c&gt;&#39;d&#39;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_render_html() {
        assert_eq!(
            render_html(&sample()),
            "<span class=\"keyword\">if</span> (a &lt; b) \
             <span class=\"string\">&quot;&amp;&quot;</span>"
        );
    }

    #[test]
    fn test_markup_passes_through() {
        let region = Region::from_segments(
            Some("C"),
            vec![
                Segment::markup("<b>"),
                Segment::tagged(Category::Type, "int"),
                Segment::markup("</b>"),
                Segment::plain(" a<b"),
            ],
        );
        assert_eq!(
            render_html(&region),
            "<b><span class=\"type\">int</span></b> a&lt;b"
        );
    }

    #[test]
    fn test_plain_ansi_is_verbatim() {
        let region = Region::new(None, "no styling here\n");
        let mut out = Vec::new();
        write_ansi(&mut out, &region).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "no styling here\n");
    }

    #[test]
    fn test_tagged_ansi_is_styled() {
        let mut out = Vec::new();
        write_ansi(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("if"));
        assert!(text.contains(" (a < b) "));
        assert!(text.contains("\"&\""));
    }
}

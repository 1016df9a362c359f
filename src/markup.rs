//! Inline markup for slide text.
//!
//! Only `<b>`, `<i>` and `<u>` are recognised (any letter case). Every other
//! tag-like sequence is kept as literal text and escaped on output, so slide
//! content can never inject markup into a rendered page. A closing tag with
//! no matching opener is literal text; openers left unclosed end with the
//! string. Re-opening a style that is already open adds no nesting, so the
//! span tree is at most three styles deep whatever the input.

use std::fmt::Write as _;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    pub fn tag(self) -> &'static str {
        match self {
            Style::Bold => "b",
            Style::Italic => "i",
            Style::Underline => "u",
        }
    }

    fn from_tag(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "b" => Some(Style::Bold),
            "i" => Some(Style::Italic),
            "u" => Some(Style::Underline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Styled { style: Style, children: Vec<Span> },
}

/// Parsed inline markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup {
    spans: Vec<Span>,
}

enum Tag {
    Open(Style),
    Close(Style),
}

/// Recognise an allow-listed tag at the start of `rest` (which begins with `<`).
fn scan_tag(rest: &str) -> Option<(Tag, usize)> {
    let end = rest.find('>')?;
    let inner = &rest[1..end];
    let (closing, name) = match inner.strip_prefix('/') {
        Some(name) => (true, name),
        None => (false, inner),
    };
    let style = Style::from_tag(name.trim_end())?;
    let tag = if closing { Tag::Close(style) } else { Tag::Open(style) };
    Some((tag, end + 1))
}

struct Frame {
    style: Option<Style>,
    spans: Vec<Span>,
    /// Redundant openers of `style` still waiting for their closer.
    repeats: usize,
}

impl Frame {
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Span::Text(last)) = self.spans.last_mut() {
            last.push_str(text);
        } else {
            self.spans.push(Span::Text(text.to_string()));
        }
    }
}

/// Parse markup. Never fails.
pub fn parse(input: &str) -> Markup {
    let mut stack = vec![Frame {
        style: None,
        spans: Vec::new(),
        repeats: 0,
    }];
    let mut text = String::new();
    let mut rest = input;

    while let Some(pos) = rest.find('<') {
        text.push_str(&decode_entities(&rest[..pos]));
        rest = &rest[pos..];

        match scan_tag(rest) {
            Some((Tag::Open(style), len)) => {
                match stack.iter_mut().find(|frame| frame.style == Some(style)) {
                    Some(open) => open.repeats += 1,
                    None => {
                        flush(&mut stack, &mut text);
                        stack.push(Frame {
                            style: Some(style),
                            spans: Vec::new(),
                            repeats: 0,
                        });
                    }
                }
                rest = &rest[len..];
            }
            Some((Tag::Close(style), len))
                if stack.iter().any(|frame| frame.style == Some(style)) =>
            {
                if let Some(open) = stack
                    .iter_mut()
                    .rev()
                    .find(|frame| frame.style == Some(style) && frame.repeats > 0)
                {
                    open.repeats -= 1;
                    rest = &rest[len..];
                    continue;
                }
                flush(&mut stack, &mut text);
                while let Some(frame) = stack.pop() {
                    let done = frame.style == Some(style);
                    close_into(&mut stack, frame);
                    if done {
                        break;
                    }
                }
                rest = &rest[len..];
            }
            _ => {
                text.push('<');
                rest = &rest[1..];
            }
        }
    }
    text.push_str(&decode_entities(rest));
    flush(&mut stack, &mut text);

    while stack.len() > 1 {
        if let Some(frame) = stack.pop() {
            close_into(&mut stack, frame);
        }
    }
    let spans = stack.pop().map(|root| root.spans).unwrap_or_default();
    Markup { spans }
}

fn flush(stack: &mut [Frame], text: &mut String) {
    if let Some(top) = stack.last_mut() {
        top.push_text(text);
    }
    text.clear();
}

fn close_into(stack: &mut [Frame], frame: Frame) {
    let (Some(style), Some(parent)) = (frame.style, stack.last_mut()) else {
        return;
    };
    if !frame.spans.is_empty() {
        parent.spans.push(Span::Styled {
            style,
            children: frame.spans,
        });
    }
}

fn decode_entities(raw: &str) -> std::borrow::Cow<'_, str> {
    if !raw.contains('&') {
        return std::borrow::Cow::Borrowed(raw);
    }
    std::borrow::Cow::Owned(
        raw.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&nbsp;", "\u{a0}")
            .replace("&amp;", "&"),
    )
}

/// Escape text for use in HTML content or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

impl Markup {
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Sanitised HTML: allow-listed tags plus escaped text.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_spans(&mut out, &self.spans);
        out
    }

    /// Text with all formatting removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(&mut out, &self.spans);
        out
    }
}

fn write_spans(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(&escape_html(text)),
            Span::Styled { style, children } => {
                let _ = write!(out, "<{}>", style.tag());
                write_spans(out, children);
                let _ = write!(out, "</{}>", style.tag());
            }
        }
    }
}

fn collect_text(out: &mut String, spans: &[Span]) {
    for span in spans {
        match span {
            Span::Text(text) => out.push_str(text),
            Span::Styled { children, .. } => collect_text(out, children),
        }
    }
}

/// Plain text of a markup string.
pub fn plain_text(input: &str) -> String {
    parse(input).plain_text()
}

/// Wrap the selected byte range of `text` in `style`'s tags. An empty
/// selection inserts the literal word `text` between the tags. Offsets are
/// clamped to the string and snapped down to character boundaries.
pub fn wrap_selection(text: &str, range: Range<usize>, style: Style) -> String {
    let start = floor_boundary(text, range.start);
    let end = floor_boundary(text, range.end).max(start);
    let selected = &text[start..end];
    let inner = if selected.is_empty() { "text" } else { selected };
    format!(
        "{}<{tag}>{}</{tag}>{}",
        &text[..start],
        inner,
        &text[end..],
        tag = style.tag()
    )
}

fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_tags_survive() {
        let markup = parse("<b>Bold</b> and <I>it</I>");
        assert_eq!(markup.to_html(), "<b>Bold</b> and <i>it</i>");
        assert_eq!(markup.plain_text(), "Bold and it");
    }

    #[test]
    fn other_tags_are_escaped() {
        let markup = parse(r#"<script>alert(1)</script><img src=x>"#);
        assert_eq!(
            markup.to_html(),
            "&lt;script&gt;alert(1)&lt;/script&gt;&lt;img src=x&gt;"
        );
        assert_eq!(markup.plain_text(), "<script>alert(1)</script><img src=x>");
    }

    #[test]
    fn unclosed_tags_end_with_string() {
        assert_eq!(parse("<b>open <u>both").to_html(), "<b>open <u>both</u></b>");
    }

    #[test]
    fn reopened_style_adds_no_nesting() {
        assert_eq!(parse("<b>a<b>b</b>c</b>d").to_html(), "<b>abc</b>d");
        assert_eq!(parse("<i>x<u>y<i>z").to_html(), "<i>x<u>yz</u></i>");
    }

    #[test]
    fn deeply_repeated_openers_stay_flat() {
        let source = "<b>x".repeat(10_000);
        let markup = parse(&source);
        assert_eq!(markup.spans().len(), 1);
        assert_eq!(markup.plain_text(), "x".repeat(10_000));
        assert_eq!(markup.to_html(), format!("<b>{}</b>", "x".repeat(10_000)));

        let mixed = "<b><i><u>y".repeat(5_000);
        assert_eq!(parse(&mixed).plain_text(), "y".repeat(5_000));
    }

    #[test]
    fn stray_closer_is_literal() {
        assert_eq!(parse("a</b>c").to_html(), "a&lt;/b&gt;c");
    }

    #[test]
    fn closer_pops_inner_frames() {
        assert_eq!(parse("<b>x<i>y</b>z").to_html(), "<b>x<i>y</i></b>z");
    }

    #[test]
    fn entities_decode_for_plain_text() {
        assert_eq!(plain_text("R&amp;D &lt;3"), "R&D <3");
        assert_eq!(parse("R&amp;D").to_html(), "R&amp;D");
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        assert_eq!(plain_text("a < b"), "a < b");
    }

    #[test]
    fn wrap_selection_wraps_range() {
        assert_eq!(
            wrap_selection("hello world", 6..11, Style::Bold),
            "hello <b>world</b>"
        );
    }

    #[test]
    fn wrap_empty_selection_inserts_placeholder() {
        assert_eq!(wrap_selection("ab", 1..1, Style::Italic), "a<i>text</i>b");
    }

    #[test]
    fn wrap_selection_clamps_offsets() {
        assert_eq!(wrap_selection("é", 1..9, Style::Underline), "<u>é</u>");
    }
}

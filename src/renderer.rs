//! Pretty renderer - turns a DOM tree into inspectable output
//!
//! [`PrettyDom`] renders a tree rooted at any rcdom node into two
//! independent forms:
//!
//! - [`PrettyDom::render_html`]: a self-contained HTML fragment, one
//!   `<div class="line">` per node inside a `<div class="pretty-html">`
//!   wrapper, with styled markers for depth, whitespace, and selection
//!   boundaries. The class names are a stable contract for an external
//!   stylesheet (see the `CLASS_*` constants).
//! - [`PrettyDom::render_text`]: a plain newline-joined listing for
//!   console output. This mode never consults the selection range.
//!
//! Both walk the tree exactly once in document order and build one line
//! per visited node. The renderer holds only the root handle and the
//! optional range; it never mutates the tree, keeps no state across
//! calls, and cannot fail - rendering the same inputs twice produces
//! byte-identical output.
//!
//! # Line anatomy (HTML mode)
//!
//! For each node, in order:
//!
//! 1. a depth marker, `<span class="depth depth-N">` holding N indent
//!    units of `&nbsp;&nbsp;`;
//! 2. the before-node boundary marker, if the selection starts or ends
//!    immediately before the node;
//! 3. the node content - text wrapped in `<span class="text">` with
//!    inside-text boundary markers and whitespace glyphs, or the
//!    lowercased tag name with its attribute list in
//!    `<span class="element">`;
//! 4. for elements only, the after-node boundary marker.
//!
//! Document, comment, doctype, and processing-instruction nodes render as
//! the depth marker alone, with no content and no boundary markers.

use markup5ever_rcdom::{Handle, NodeData};

use crate::attributes;
use crate::range::{BoundaryMark, BoundarySide, SelectionRange, TextMarks, sibling_boundary, text_marks};
use crate::walker::walk;
use crate::whitespace::push_char_html;

/// Class of the outer wrapper element.
pub const CLASS_WRAPPER: &str = "pretty-html";
/// Class of each per-line container.
pub const CLASS_LINE: &str = "line";
/// Class of the depth-indentation marker; the numeric depth is appended
/// as a `depth-N` modifier.
pub const CLASS_DEPTH: &str = "depth";
/// Class of the element-name marker.
pub const CLASS_ELEMENT: &str = "element";
/// Class of the text-content marker.
pub const CLASS_TEXT: &str = "text";
/// Class of a collapsed (point) selection marker.
pub const CLASS_RANGE: &str = "range";
/// Class of a selection-start marker.
pub const CLASS_RANGE_START: &str = "range start";
/// Class of a selection-end marker.
pub const CLASS_RANGE_END: &str = "range end";

const INDENT_UNIT: &str = "&nbsp;&nbsp;";

/// Renderer over a DOM tree with an optional selection range.
///
/// Construction is cheap (two `Rc` clones) and the renderer is intended
/// to be created per rendering request. Both entry points are pure reads;
/// concurrent independent renders over the same tree are safe.
///
/// # Examples
///
/// ```rust
/// use html5ever::parse_document;
/// use html5ever::tendril::TendrilSink;
/// use markup5ever_rcdom::RcDom;
/// use pretty_dom::PrettyDom;
///
/// let dom = parse_document(RcDom::default(), Default::default())
///     .one("<p class=\"intro\">hi</p>");
/// let out = PrettyDom::new(&dom.document, None).render_text();
/// assert!(out.contains("[ p | class = 'intro' ]"));
/// assert!(out.contains("'hi'"));
/// ```
pub struct PrettyDom {
    root: Handle,
    range: Option<SelectionRange>,
}

impl PrettyDom {
    /// Create a renderer for the tree rooted at `root`, overlaying
    /// `range` onto the HTML output if one is given.
    pub fn new(root: &Handle, range: Option<SelectionRange>) -> Self {
        Self {
            root: root.clone(),
            range,
        }
    }

    /// Render the tree as a self-contained HTML fragment.
    ///
    /// One `.line` div per visited node inside a `.pretty-html` wrapper,
    /// with the selection range (when present) shown as empty
    /// `<span class="range ...">` markers at the resolved boundary
    /// positions.
    pub fn render_html(&self) -> String {
        let mut lines = Vec::new();

        walk(&self.root, |node, depth| {
            let mut line = String::new();

            line.push_str(&format!("<span class=\"{CLASS_DEPTH} {CLASS_DEPTH}-{depth}\">"));
            for _ in 0..depth {
                line.push_str(INDENT_UNIT);
            }
            line.push_str("</span>");

            match &node.data {
                NodeData::Text { contents } => {
                    self.push_boundary(&mut line, node, BoundarySide::Before);
                    line.push_str(&format!("<span class=\"{CLASS_TEXT}\">"));
                    self.push_marked_text(&mut line, node, &contents.borrow());
                    line.push_str("</span>");
                }
                NodeData::Element { name, attrs, .. } => {
                    self.push_boundary(&mut line, node, BoundarySide::Before);
                    line.push_str(&format!("<span class=\"{CLASS_ELEMENT}\">"));
                    line.push_str(&name.local.as_ref().to_ascii_lowercase());
                    let pairs = attributes::extract(&attrs.borrow());
                    if !pairs.is_empty() {
                        push_attr_list(&mut line, &pairs);
                    }
                    line.push_str("</span>");
                    self.push_boundary(&mut line, node, BoundarySide::After);
                }
                // Document, comments, doctypes, and processing
                // instructions render as indentation only.
                _ => {}
            }

            lines.push(line);
        });

        format!(
            "<div class=\"{CLASS_WRAPPER}\"><div class=\"{CLASS_LINE}\">{}</div></div>",
            lines.join(&format!("</div><div class=\"{CLASS_LINE}\">"))
        )
    }

    /// Render the tree as plain text, one line per node, joined by `\n`.
    ///
    /// Text content is single-quoted with whitespace shown as glyphs;
    /// elements appear as `[ name ]` or `[ name | a = 'x', b = 'y' ]`.
    /// The selection range is never consulted in this mode.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();

        walk(&self.root, |node, depth| {
            let mut line = "  ".repeat(depth);

            match &node.data {
                NodeData::Text { contents } => {
                    line.push('\'');
                    line.push_str(&crate::whitespace::encode_plain(&contents.borrow()));
                    line.push('\'');
                }
                NodeData::Element { name, attrs, .. } => {
                    line.push_str("[ ");
                    line.push_str(&name.local.as_ref().to_ascii_lowercase());
                    let pairs = attributes::extract(&attrs.borrow());
                    if !pairs.is_empty() {
                        push_attr_list(&mut line, &pairs);
                    }
                    line.push_str(" ]");
                }
                _ => {}
            }

            lines.push(line);
        });

        lines.join("\n")
    }

    /// Append the sibling-boundary marker for `node` on `side`, if the
    /// range resolves one.
    fn push_boundary(&self, out: &mut String, node: &Handle, side: BoundarySide) {
        if let Some(range) = &self.range
            && let Some(mark) = sibling_boundary(node, range, side)
        {
            out.push_str(range_span(mark));
        }
    }

    /// Append a text node's content with inside-text boundary markers
    /// inserted and whitespace encoded as styled glyphs.
    ///
    /// Boundary offsets address characters, not bytes, and are clamped to
    /// the content's character count; an out-of-bounds offset degrades to
    /// a marker at the end of the text.
    fn push_marked_text(&self, out: &mut String, node: &Handle, contents: &str) {
        let marks = self
            .range
            .as_ref()
            .and_then(|range| text_marks(node, range));

        let chars: Vec<char> = contents.chars().collect();
        let len = chars.len();

        match marks {
            None => push_chars(out, &chars),
            Some(TextMarks::Span { start, end }) => {
                let (start, end) = (start.min(len), end.min(len));
                push_chars(out, &chars[..start]);
                out.push_str(range_span(BoundaryMark::Start));
                push_chars(out, &chars[start..end]);
                out.push_str(range_span(BoundaryMark::End));
                push_chars(out, &chars[end..]);
            }
            Some(TextMarks::Collapsed { cut_from, resume_at }) => {
                let (cut_from, resume_at) = (cut_from.min(len), resume_at.min(len));
                push_chars(out, &chars[..cut_from]);
                out.push_str(range_span(BoundaryMark::Point));
                push_chars(out, &chars[resume_at..]);
            }
            Some(TextMarks::StartOnly { at }) => {
                let at = at.min(len);
                push_chars(out, &chars[..at]);
                out.push_str(range_span(BoundaryMark::Start));
                push_chars(out, &chars[at..]);
            }
            Some(TextMarks::EndOnly { at }) => {
                let at = at.min(len);
                push_chars(out, &chars[..at]);
                out.push_str(range_span(BoundaryMark::End));
                push_chars(out, &chars[at..]);
            }
        }
    }
}

/// The empty styled span a boundary marker renders as.
fn range_span(mark: BoundaryMark) -> &'static str {
    match mark {
        BoundaryMark::Point => "<span class=\"range\"></span>",
        BoundaryMark::Start => "<span class=\"range start\"></span>",
        BoundaryMark::End => "<span class=\"range end\"></span>",
    }
}

/// Append ` | name = 'value', ...` for a non-empty attribute mapping.
fn push_attr_list(out: &mut String, pairs: &[(String, String)]) {
    out.push_str(" | ");
    for (i, (name, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
        out.push_str(" = '");
        out.push_str(value);
        out.push('\'');
    }
}

fn push_chars(out: &mut String, chars: &[char]) {
    for &ch in chars {
        push_char_html(out, ch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{append, comment, element, element_with_attrs, parse, text};

    #[test]
    fn test_render_text_basic_shape() {
        let root = element("div");
        let p = element("p");
        append(&root, &p);
        append(&p, &text("hi there"));

        let out = PrettyDom::new(&root, None).render_text();
        assert_eq!(out, "[ div ]\n  [ p ]\n    'hi·there'");
    }

    #[test]
    fn test_render_text_element_with_attributes() {
        let root = element_with_attrs("a", &[("href", "/x"), ("class", "nav")]);
        let out = PrettyDom::new(&root, None).render_text();
        assert_eq!(out, "[ a | href = '/x', class = 'nav' ]");
    }

    #[test]
    fn test_render_text_omits_attribute_segment_when_empty() {
        let out = PrettyDom::new(&element("br"), None).render_text();
        assert_eq!(out, "[ br ]", "No pipe segment for attribute-less elements");
    }

    #[test]
    fn test_render_text_other_nodes_are_indentation_only() {
        let root = element("div");
        append(&root, &comment("note"));
        let out = PrettyDom::new(&root, None).render_text();
        assert_eq!(out, "[ div ]\n  ", "Comment line is indentation only");
    }

    #[test]
    fn test_render_html_wrapper_and_line_structure() {
        let root = element("p");
        append(&root, &text("x"));
        let out = PrettyDom::new(&root, None).render_html();

        assert_eq!(
            out,
            "<div class=\"pretty-html\">\
             <div class=\"line\"><span class=\"depth depth-0\"></span>\
             <span class=\"element\">p</span></div>\
             <div class=\"line\"><span class=\"depth depth-1\">&nbsp;&nbsp;</span>\
             <span class=\"text\">x</span></div>\
             </div>"
        );
    }

    #[test]
    fn test_render_html_element_attributes() {
        let root = element_with_attrs("a", &[("href", "/x")]);
        let out = PrettyDom::new(&root, None).render_html();
        assert!(
            out.contains("<span class=\"element\">a | href = '/x'</span>"),
            "Attribute list should sit inside the element span: {out}"
        );
    }

    #[test]
    fn test_render_html_whitespace_glyphs() {
        let root = element("pre");
        append(&root, &text(" \t\r\n"));
        let out = PrettyDom::new(&root, None).render_html();
        assert!(out.contains(
            "<span class=\"text\">\
             <span class=\"whitespace space\">·</span>\
             <span class=\"whitespace tab\">‣</span>\
             <span class=\"whitespace newline\">¬</span>\
             <span class=\"whitespace newline\">¬</span>\
             </span>"
        ));
    }

    #[test]
    fn test_render_html_span_inside_text() {
        // Selection covering "el" of "hello".
        let root = element("p");
        let t = text("hello");
        append(&root, &t);
        let range = SelectionRange::new(&t, 1, &t, 3, false);

        let out = PrettyDom::new(&root, Some(range)).render_html();
        assert!(
            out.contains(
                "<span class=\"text\">h<span class=\"range start\"></span>\
                 el<span class=\"range end\"></span>lo</span>"
            ),
            "Markers should bracket chars 1..3: {out}"
        );
    }

    #[test]
    fn test_render_html_degenerate_text_range_drops_slice() {
        // end (1) sorts before start (3): point at the start offset, the
        // chars in 1..3 dropped.
        let root = element("p");
        let t = text("hello");
        append(&root, &t);
        let range = SelectionRange::new(&t, 3, &t, 1, false);

        let out = PrettyDom::new(&root, Some(range)).render_html();
        assert!(
            out.contains("<span class=\"text\">h<span class=\"range\"></span>lo</span>"),
            "Expected point marker with 'el' dropped: {out}"
        );
    }

    #[test]
    fn test_render_html_caret_inside_text() {
        let root = element("p");
        let t = text("hello");
        append(&root, &t);
        let out = PrettyDom::new(&root, Some(SelectionRange::caret(&t, 2))).render_html();
        assert!(
            out.contains("<span class=\"text\">he<span class=\"range\"></span>llo</span>"),
            "Collapsed caret keeps all text: {out}"
        );
    }

    #[test]
    fn test_render_html_text_offset_clamps_past_end() {
        let root = element("p");
        let t = text("hi");
        append(&root, &t);
        let out = PrettyDom::new(&root, Some(SelectionRange::caret(&t, 99))).render_html();
        assert!(
            out.contains("<span class=\"text\">hi<span class=\"range\"></span></span>"),
            "Out-of-bounds offset clamps to the end: {out}"
        );
    }

    #[test]
    fn test_render_html_point_between_children() {
        let parent = element("div");
        let a = element("em");
        let b = element("strong");
        append(&parent, &a);
        append(&parent, &b);

        let out =
            PrettyDom::new(&parent, Some(SelectionRange::caret(&parent, 1))).render_html();
        assert!(
            out.contains(
                "<span class=\"range\"></span><span class=\"element\">strong</span>"
            ),
            "Point should sit immediately before the second child: {out}"
        );
        assert_eq!(out.matches("class=\"range\"").count(), 1);
    }

    #[test]
    fn test_render_html_point_after_last_child() {
        let parent = element("div");
        let a = element("em");
        append(&parent, &a);

        let out =
            PrettyDom::new(&parent, Some(SelectionRange::caret(&parent, 1))).render_html();
        assert!(
            out.contains("<span class=\"element\">em</span><span class=\"range\"></span>"),
            "Point past the only child renders after it: {out}"
        );
    }

    #[test]
    fn test_render_html_no_range_emits_no_markers() {
        let root = parse("<div><p>one</p><p>two</p></div>");
        let out = PrettyDom::new(&root, None).render_html();
        assert!(!out.contains("class=\"range"));
    }

    #[test]
    fn test_render_text_never_consults_range() {
        let root = parse("<div><p>hello world</p></div>");
        let t = crate::testutil::find_text(&root, "hello");
        let with_range =
            PrettyDom::new(&root, Some(SelectionRange::new(&t, 1, &t, 6, false))).render_text();
        let without = PrettyDom::new(&root, None).render_text();
        assert_eq!(with_range, without);
    }

    #[test]
    fn test_render_is_deterministic() {
        let root = parse("<div id=\"a\"><p>x y</p><!-- c --><span>z</span></div>");
        let renderer = PrettyDom::new(&root, None);
        assert_eq!(renderer.render_html(), renderer.render_html());
        assert_eq!(renderer.render_text(), renderer.render_text());
    }

    #[test]
    fn test_render_html_lowercases_tag_names() {
        let root = element("DIV");
        let out = PrettyDom::new(&root, None).render_text();
        assert_eq!(out, "[ div ]");
    }
}

//! Selection ranges and boundary resolution
//!
//! A [`SelectionRange`] describes a selection over the tree as two
//! (container, offset) boundaries plus a collapsed flag, mirroring the DOM
//! Range model: the offset is a character offset when the container is a
//! text node and a child index (0..=child_count) when the container is an
//! element.
//!
//! This module answers two questions for the renderer, both pure reads
//! over the tree:
//!
//! 1. **Sibling boundaries** - does a range boundary fall immediately
//!    before or immediately after a given node, as a child index within
//!    its parent? ([`sibling_boundary`])
//! 2. **Inside-text boundaries** - where inside a text node's content do
//!    the boundaries fall, as character offsets? ([`text_marks`])
//!
//! Both queries trust the caller's range. Internal consistency (start
//! sorted before end, offsets in bounds, containers reachable from the
//! rendered root) is never validated; inconsistent input degrades to
//! best-effort output rather than an error.
//!
//! # Node identity
//!
//! Containers are compared to tree positions by handle identity
//! (`Rc::ptr_eq`), never by value: two text nodes with equal content are
//! still different containers.

use std::rc::{Rc, Weak};

use markup5ever_rcdom::Handle;

/// A selection over the tree: two (container, offset) boundaries and a
/// collapsed flag.
///
/// All fields are public and taken at face value. In particular
/// `collapsed` is supplied by the caller rather than derived, matching
/// the DOM Range surface this mirrors.
#[derive(Clone)]
pub struct SelectionRange {
    /// Node containing the start boundary.
    pub start_container: Handle,
    /// Character offset (text container) or child index (element container)
    /// of the start boundary.
    pub start_offset: usize,
    /// Node containing the end boundary.
    pub end_container: Handle,
    /// Character offset or child index of the end boundary.
    pub end_offset: usize,
    /// True when start and end describe the same point (a caret, not a
    /// span).
    pub collapsed: bool,
}

impl SelectionRange {
    /// Create a range from explicit boundaries.
    pub fn new(
        start_container: &Handle,
        start_offset: usize,
        end_container: &Handle,
        end_offset: usize,
        collapsed: bool,
    ) -> Self {
        Self {
            start_container: start_container.clone(),
            start_offset,
            end_container: end_container.clone(),
            end_offset,
            collapsed,
        }
    }

    /// Create a collapsed range (a caret) with both boundaries at the same
    /// point.
    pub fn caret(container: &Handle, offset: usize) -> Self {
        Self::new(container, offset, container, offset, true)
    }
}

/// Which side of a node a sibling-boundary query asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySide {
    /// Immediately before the node, at its own child index.
    Before,
    /// Immediately after the node, at its child index plus one.
    After,
}

/// The marker a resolved boundary produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMark {
    /// Only the range start falls here.
    Start,
    /// Only the range end falls here.
    End,
    /// Start and end coincide here (collapsed-range marker).
    Point,
}

/// Boundary positions inside a text node's content, in character offsets.
///
/// Offsets are raw (unclamped); the renderer clamps them to the actual
/// character count when slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMarks {
    /// The node holds both boundaries and the selection covers
    /// `start..end` of its content.
    Span { start: usize, end: usize },
    /// The node holds both boundaries but the end offset does not sort
    /// after the start offset. A single point marker is placed at the
    /// start offset and the characters in `cut_from..resume_at` are
    /// dropped from the output. For a genuinely collapsed range the two
    /// offsets coincide and the cut is empty.
    Collapsed { cut_from: usize, resume_at: usize },
    /// Only the start boundary falls in this node.
    StartOnly { at: usize },
    /// Only the end boundary falls in this node.
    EndOnly { at: usize },
}

/// Read a node's parent, if it has one and the parent is still alive.
///
/// rcdom stores the parent as a `Cell<Option<Weak<..>>>`, so reading it
/// means taking the weak handle out and putting it back.
pub(crate) fn parent_of(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(Weak::upgrade);
    node.parent.set(weak);
    parent
}

/// Zero-based index of `node` in `parent`'s child list.
fn child_index(parent: &Handle, node: &Handle) -> Option<usize> {
    parent
        .children
        .borrow()
        .iter()
        .position(|child| Rc::ptr_eq(child, node))
}

/// Resolve whether a range boundary falls immediately before or after
/// `node`, as a child index within its parent.
///
/// Returns `None` for a node with no parent (the root - there is no
/// sibling position to mark) and for nodes whose parent is not a range
/// container. The node's child index is computed once, only when at least
/// one container matches the parent.
///
/// For [`BoundarySide::Before`], the start boundary matches when the
/// node's index equals the start offset; the end boundary matches at the
/// end offset only for collapsed ranges (a non-collapsed end is rendered
/// after the preceding node instead).
///
/// For [`BoundarySide::After`], the start boundary matches at index + 1
/// only when the node is the last child (otherwise the boundary belongs
/// before the next sibling); the end boundary matches at index + 1 when
/// the node is the last child or the range is not collapsed.
///
/// When both boundaries land on the same side of the same node the two
/// markers fuse into a single [`BoundaryMark::Point`].
pub fn sibling_boundary(
    node: &Handle,
    range: &SelectionRange,
    side: BoundarySide,
) -> Option<BoundaryMark> {
    let parent = parent_of(node)?;

    let in_start = Rc::ptr_eq(&range.start_container, &parent);
    let in_end = Rc::ptr_eq(&range.end_container, &parent);
    if !in_start && !in_end {
        return None;
    }

    // A node missing from its recorded parent's child list is a malformed
    // tree; degrade to "no boundary" rather than panicking.
    let offset = child_index(&parent, node)?;
    let is_last = offset + 1 == parent.children.borrow().len();

    let (start, end) = match side {
        BoundarySide::Before => (
            in_start && offset == range.start_offset,
            in_end && offset == range.end_offset && range.collapsed,
        ),
        BoundarySide::After => (
            in_start && offset + 1 == range.start_offset && is_last,
            in_end && offset + 1 == range.end_offset && (is_last || !range.collapsed),
        ),
    };

    match (start, end) {
        (true, true) => Some(BoundaryMark::Point),
        (true, false) => Some(BoundaryMark::Start),
        (false, true) => Some(BoundaryMark::End),
        (false, false) => None,
    }
}

/// Resolve where the range boundaries fall inside a text node's content.
///
/// Returns `None` when the node is neither container. Markers are
/// positional insertions; they never consume characters. The one
/// exception is the degenerate both-containers case with
/// `end_offset <= start_offset`, where the slice between the offsets is
/// dropped from the output (see [`TextMarks::Collapsed`]).
pub fn text_marks(node: &Handle, range: &SelectionRange) -> Option<TextMarks> {
    let in_start = Rc::ptr_eq(&range.start_container, node);
    let in_end = Rc::ptr_eq(&range.end_container, node);

    match (in_start, in_end) {
        (true, true) => {
            if range.end_offset > range.start_offset {
                Some(TextMarks::Span {
                    start: range.start_offset,
                    end: range.end_offset,
                })
            } else {
                Some(TextMarks::Collapsed {
                    cut_from: range.end_offset,
                    resume_at: range.start_offset,
                })
            }
        }
        (true, false) => Some(TextMarks::StartOnly {
            at: range.start_offset,
        }),
        (false, true) => Some(TextMarks::EndOnly {
            at: range.end_offset,
        }),
        (false, false) => None,
    }
}

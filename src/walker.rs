//! Depth-first DOM traversal
//!
//! This module provides the single traversal primitive the renderers are
//! built on: a pre-order, depth-first walk over an rcdom tree that hands
//! every node to a visitor together with its nesting depth.
//!
//! The walk is fully deterministic: nodes are visited in document order
//! (the order of each node's `children` list), the root is visited first
//! at depth 0, and every node is visited exactly once. There is no early
//! termination and no suspension - the walk is a plain synchronous
//! recursion that never mutates the tree.

use markup5ever_rcdom::Handle;

/// Walk the tree rooted at `root` in pre-order, invoking `visit` with each
/// node and its depth.
///
/// The root itself is visited at depth 0; each child is visited at its
/// parent's depth plus one, in child-list order.
///
/// # Examples
///
/// ```rust
/// use html5ever::parse_document;
/// use html5ever::tendril::TendrilSink;
/// use markup5ever_rcdom::RcDom;
/// use pretty_dom::walk;
///
/// let dom = parse_document(RcDom::default(), Default::default()).one("<p>hi</p>");
/// let mut count = 0;
/// walk(&dom.document, |_node, _depth| count += 1);
/// assert!(count >= 5); // document, html, head, body, p, text
/// ```
pub fn walk<F>(root: &Handle, mut visit: F)
where
    F: FnMut(&Handle, usize),
{
    walk_at(root, 0, &mut visit);
}

fn walk_at<F>(node: &Handle, depth: usize, visit: &mut F)
where
    F: FnMut(&Handle, usize),
{
    visit(node, depth);

    for child in node.children.borrow().iter() {
        walk_at(child, depth + 1, visit);
    }
}

//! pretty-dom - inspectable renderings of DOM trees
//!
//! This library renders an already-built DOM tree (a `markup5ever_rcdom`
//! tree, as produced by html5ever or assembled by hand) into two
//! human-readable forms: an HTML visualization with styleable markers and
//! a plain-text listing for console output. An optional selection range -
//! a pair of (container, offset) boundaries in the DOM Range shape - is
//! overlaid onto the HTML output, showing where the selection starts and
//! ends relative to text content and element boundaries.
//!
//! # Architecture
//!
//! - `walker`: pre-order depth-first traversal with a visitor callback
//! - `range`: selection ranges and boundary resolution (before/after a
//!   node, or inside a text node's content)
//! - `renderer`: the two formatting strategies built on the walker and
//!   the boundary resolver
//! - `attributes`: attribute-list normalization into an ordered mapping
//! - `whitespace`: visible-glyph substitution for whitespace characters
//!
//! The library only reads the tree: it never parses, constructs, or
//! mutates nodes, and rendering is a pure, deterministic single pass.
//!
//! # Example
//!
//! ```rust
//! use html5ever::parse_document;
//! use html5ever::tendril::TendrilSink;
//! use markup5ever_rcdom::RcDom;
//! use pretty_dom::PrettyDom;
//!
//! let dom = parse_document(RcDom::default(), Default::default())
//!     .one("<ul><li>one</li></ul>");
//! let listing = PrettyDom::new(&dom.document, None).render_text();
//! assert!(listing.contains("[ ul ]"));
//! assert!(listing.contains("'one'"));
//! ```

// Module declarations
pub mod attributes;
pub mod range;
pub mod renderer;
pub mod walker;
pub mod whitespace;

// Re-export main types for convenience
pub use range::{BoundaryMark, BoundarySide, SelectionRange};
pub use renderer::PrettyDom;
pub use walker::walk;

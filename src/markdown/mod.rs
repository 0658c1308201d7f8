//! Limited-dialect Markdown rendering
//!
//! Content files embed a small Markdown subset: links `[t](u)`, bold
//! `**t**`, italic `*t*`, headings `#`/`##`/`###`, paragraphs separated by
//! blank lines, and an optional leading front-matter block. Documents are
//! parsed into a structured form (blocks of inline spans) before any HTML is
//! emitted, so link labels nest emphasis correctly and inline HTML is never
//! mistaken for block content.

pub mod block;
pub mod inline;

pub use block::{render_document, Block};
pub use inline::{render_inline, Span};

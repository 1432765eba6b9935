//! Shared source-location types used by the tokenizer, the path builder and
//! error reporting.

pub mod span;

pub use span::{render_snippet, Position, Span, Spanned};

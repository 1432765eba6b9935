//! Token system for gNMI path expressions
//!
//! The tokenizer turns an expression such as
//! `interfaces/interface[name=eth0]/state` into a flat sequence of
//! delimiters, text runs, and whitespace runs. Text is never classified
//! here; whether a run is an element name, a key name, a value, or the
//! `and` junction depends on where the path builder is in its state
//! machine.
//!
//! ## Token Types
//!
//! - **Delimiters**: `/`, `[`, `]`, `=`, `<`, `>`
//! - **Text**: everything else, with quoted literals kept whole, quotes included
//! - **Whitespace**: runs of whitespace outside quotes, skipped by consumers
//!
//! A `/` inside an open filter is not a delimiter. It stays part of the
//! surrounding text so values such as `Ethernet1/1` survive unquoted.

pub mod token;
pub mod token_stream;

pub use token::{is_quote_char, is_quoted_literal, strip_quotes, Delimiter, Token, AND_KEYWORD};
pub use token_stream::{SpannedToken, TokenStream};

pub use crate::utils::{Position, Span, Spanned};

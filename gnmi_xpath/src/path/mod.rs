//! Path construction
//!
//! Folds a token stream into a structured `Path`, failing fast on the first
//! malformed construct, and resolves its origin through an `OriginPolicy`.

pub mod builder;
pub mod error;
pub mod origin;
pub mod types;

pub use builder::PathBuilder;
pub use error::{ErrorKind, PathError, PathResult};
pub use origin::{FixedOrigin, ModulePrefix, OriginPolicy, PassThrough};
pub use types::{Path, PathElement};

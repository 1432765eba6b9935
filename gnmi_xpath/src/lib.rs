//! Parser for gNMI path expressions
//!
//! Turns text such as `interfaces/interface[name=eth0]/state` into a
//! structured [`Path`] of named elements with equality keys.
//!
//! ```ignore
//! let path = gnmi_xpath::parse_xpath("interfaces/interface[name=eth0]", None)?;
//! assert_eq!(path.element(1).unwrap().key("name"), Some("eth0"));
//! ```

// Internal modules
#[macro_use]
pub mod logging;
pub mod config;
pub mod lexical;
pub mod path;
pub mod pipeline;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use path::{
    ErrorKind, FixedOrigin, ModulePrefix, OriginPolicy, PassThrough, Path, PathElement,
    PathError, PathResult,
};
pub use pipeline::{
    parse_bytes, parse_many, parse_value, parse_value_with, parse_xpath, parse_xpath_with,
    trim_xpath, BatchEntry, BatchResults, ParseOptions,
};

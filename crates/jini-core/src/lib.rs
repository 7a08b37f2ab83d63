//! # Jini Core
//!
//! Read, mutate and rewrite INI configuration files without losing their
//! comments, blank lines, multi-line values or line-ending convention.
//!
//! ## Architecture
//!
//! - **document**: the `Ini` type; load, accessors, save
//! - **types**: sections, entries and line breaks
//! - **parser**: single-pass text to model
//! - **writer**: model back to text
//! - **options**: load and save options
//! - **fs**: scoped file reads and writes
//!
//! ```
//! use jini_core::Ini;
//!
//! let mut ini = Ini::parse("[a]\nx=1\n;note\ny=2\n");
//! assert_eq!(ini.get("a", "x", ""), ("1".to_string(), true));
//!
//! ini.set("a", "x", "2");
//! assert_eq!(ini.to_text(), "[a]\nx=2\n;note\ny=2\n");
//! ```

pub mod document;
pub mod error;
mod fs;
pub mod options;
mod parser;
pub mod types;
mod writer;

pub use document::Ini;
pub use error::{IniError, Result};
pub use options::{LoadOptions, SaveOptions};
pub use types::{Entry, LineBreak, Section};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

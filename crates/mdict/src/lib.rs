//! Delimited key paths and path-based access to nested JSON values.
//!
//! A path such as `a.b.0` names a value inside nested objects and arrays.
//! The [`Tokenizer`] splits paths into keys (honoring `\`-escaped
//! delimiters), and the accessor functions walk a [`serde_json::Value`]
//! with those keys.
//!
//! # Example
//!
//! ```
//! use datakit_mdict::{get, set, tokenize};
//! use serde_json::json;
//!
//! assert_eq!(tokenize(r"a/b\/c//d", '/'), ["a", "b/c", "", "d"]);
//!
//! let mut config = json!({"server": {"ports": [80, 443]}});
//! set(&mut config, "server.host", json!("localhost"))?;
//! assert_eq!(get(&config, "server.ports.-1")?, &json!(443));
//! # Ok::<(), datakit_mdict::Error>(())
//! ```

mod access;
mod classify;
mod dict;
mod error;
mod flatten;
mod mdict;
mod tokenizer;

pub use access::{delete, delete_at, get, get_at, get_at_mut, set, set_at};
pub use classify::{Split, Tree, classify};
pub use dict::{first, merge, merge_objects, partition};
pub use error::{Error, Result};
pub use flatten::{InflateOptions, flatten, inflate, inflate_with};
pub use mdict::MDict;
pub use tokenizer::{DEFAULT_DELIMITER, DEFAULT_ESCAPE, Tokenizer, Tokens, join, tokenize};

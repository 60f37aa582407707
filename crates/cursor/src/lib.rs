//! extralib-cursor - stackless pre-order cursor over nested values.
//!
//! A [`Path`] is a flat list of keys relative to a root [`Value`]. Moving the
//! cursor re-resolves the keys against the root and computes a new key list,
//! so no traversal stack is ever kept. [`Path::increment`] and
//! [`Path::decrement`] are exact inverses along any run of successful moves.
//!
//! # Example
//!
//! ```
//! use extralib_cursor::Path;
//! use extralib_value::Value;
//! use serde_json::json;
//!
//! let root = Value::from(json!([10, {"x": 20, "y": [30, 40]}]));
//!
//! let mut path = Path::new();
//! let mut seen = Vec::new();
//! while let Some(next) = path.increment(&root).unwrap() {
//!     seen.push(next.resolve(&root).unwrap().to_string());
//!     path = next;
//! }
//! assert_eq!(seen, ["10", r#"{"x": 20, "y": [30, 40]}"#, "20", "[30, 40]", "30", "40"]);
//!
//! // And back again.
//! let back = path.decrement(&root).unwrap().unwrap();
//! assert_eq!(back.resolve(&root).unwrap(), Value::from(30));
//! ```

pub mod expand;
pub mod path;
pub mod preorder;
pub mod step;

pub use expand::{expand, first, last, Expansion};
pub use path::Path;
pub use preorder::{preorder, Preorder};
pub use step::{decrement_key, increment_key, resolve};

pub use extralib_value::{Error, Key, Result, Value};

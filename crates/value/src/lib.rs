//! extralib-value - heterogeneous values for cursor traversal.
//!
//! A [`Value`] is a scalar, a shared sequence, an insertion-ordered map, or a
//! user-defined [`Extensible`] value. This crate classifies values and
//! provides the generic services callers use on them: shallow and deep
//! [`clone`], structural [`equal`] and a total order ([`lt`] and friends).
//!
//! # Example
//!
//! ```
//! use extralib_value::{clone, equal, lt, Value};
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"a": [1, 2], "b": 3}));
//! let copy = clone(&doc, true).unwrap();
//! assert!(equal(&doc, &copy).unwrap());
//!
//! assert!(lt(&Value::from(1), &Value::from("x")).unwrap());
//! ```

pub mod clone;
pub mod equal;
pub mod error;
pub mod json;
pub mod kind;
pub mod order;
pub mod types;

pub use clone::clone;
pub use equal::equal;
pub use error::{Error, Result};
pub use kind::{classify, is_char, is_primitive, Kind};
pub use order::{compare, gt, gte, lt, lte, KIND_ORDER};
pub use types::{Children, CustomKey, Dict, Extensible, Key, Scalar, Seq, Value};

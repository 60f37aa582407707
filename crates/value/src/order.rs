//! Total ordering over values.
//!
//! Values of the same kind compare by value; sized kinds (strings, tuples,
//! sequences) compare by length first and only then element by element.
//! Everything else falls back to a fixed kind rank, see [`KIND_ORDER`].

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::equal::equal;
use crate::kind::is_char_scalar;
use crate::types::{Scalar, Value};

/// Kind ranks used when two values have no common ordering.
///
/// Kinds missing from the table (null, maps, custom values) cannot be
/// ordered against other kinds.
pub const KIND_ORDER: [&str; 6] = ["bool", "int", "float", "string", "tuple", "sequence"];

fn kind_name(value: &Value) -> Option<&'static str> {
    match value {
        Value::Scalar(Scalar::Bool(_)) => Some("bool"),
        Value::Scalar(Scalar::Int(_)) => Some("int"),
        Value::Scalar(Scalar::Float(_)) => Some("float"),
        Value::Scalar(Scalar::Str(_)) => Some("string"),
        Value::Scalar(Scalar::Tuple(_)) => Some("tuple"),
        Value::Sequence(_) => Some("sequence"),
        Value::Scalar(Scalar::Null) | Value::Map(_) | Value::Extensible(_) => None,
    }
}

fn kind_rank(value: &Value) -> Option<usize> {
    let name = kind_name(value)?;
    KIND_ORDER.iter().position(|k| *k == name)
}

/// Length first, then the first differing element decides.
fn sized_lt<T>(xs: &[T], ys: &[T], lt: impl Fn(&T, &T) -> Result<bool>) -> Result<bool> {
    if xs.len() != ys.len() {
        return Ok(xs.len() < ys.len());
    }
    for (x, y) in xs.iter().zip(ys.iter()) {
        if lt(x, y)? {
            return Ok(true);
        }
        if lt(y, x)? {
            return Ok(false);
        }
    }
    Ok(false)
}

fn str_lt(a: &str, b: &str) -> bool {
    let (len1, len2) = (a.chars().count(), b.chars().count());
    if len1 == len2 {
        a < b
    } else {
        len1 < len2
    }
}

fn scalar_lt(a: &Scalar, b: &Scalar) -> Option<Result<bool>> {
    match (a, b) {
        (Scalar::Bool(x), Scalar::Bool(y)) => Some(Ok(x < y)),
        (Scalar::Int(x), Scalar::Int(y)) => Some(Ok(x < y)),
        (Scalar::Float(x), Scalar::Float(y)) => Some(Ok(x < y)),
        (Scalar::Str(x), Scalar::Str(y)) if is_char_scalar(a) && is_char_scalar(b) => Some(Ok(x < y)),
        (Scalar::Str(x), Scalar::Str(y)) => Some(Ok(str_lt(x, y))),
        (Scalar::Tuple(xs), Scalar::Tuple(ys)) => Some(sized_lt(xs, ys, |x, y| {
            lt(&Value::Scalar(x.clone()), &Value::Scalar(y.clone()))
        })),
        _ => None,
    }
}

/// Strict "less than".
///
/// # Errors
///
/// Returns [`Error::NotComparable`] when the kinds differ and one of them is
/// absent from [`KIND_ORDER`].
///
/// # Examples
///
/// ```
/// use extralib_value::{lt, Value};
///
/// assert!(lt(&Value::from(1), &Value::from(2)).unwrap());
/// // Different kinds fall back to the kind rank: ints sort before strings.
/// assert!(lt(&Value::from(1), &Value::from("x")).unwrap());
/// assert!(!lt(&Value::from("x"), &Value::from(1)).unwrap());
/// ```
pub fn lt(a: &Value, b: &Value) -> Result<bool> {
    let same_kind = match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => scalar_lt(x, y),
        (Value::Sequence(x), Value::Sequence(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            Some(sized_lt(x.as_slice(), y.as_slice(), lt))
        }
        _ => None,
    };
    if let Some(result) = same_kind {
        return result;
    }
    match (kind_rank(a), kind_rank(b)) {
        (Some(r1), Some(r2)) => Ok(r1 < r2),
        _ => Err(Error::not_comparable(a, b)),
    }
}

/// `lt(a, b) || equal(a, b)`.
pub fn lte(a: &Value, b: &Value) -> Result<bool> {
    if lt(a, b)? {
        return Ok(true);
    }
    equal(a, b)
}

/// `!lt(a, b)`.
pub fn gte(a: &Value, b: &Value) -> Result<bool> {
    Ok(!lt(a, b)?)
}

/// `!lte(a, b)`.
pub fn gt(a: &Value, b: &Value) -> Result<bool> {
    Ok(!lte(a, b)?)
}

/// Three-way comparison built from [`lt`] in both directions.
///
/// Pairs where neither side is less compare as [`Ordering::Equal`], which
/// includes NaN against anything.
pub fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    if lt(a, b)? {
        Ok(Ordering::Less)
    } else if lt(b, a)? {
        Ok(Ordering::Greater)
    } else {
        Ok(Ordering::Equal)
    }
}

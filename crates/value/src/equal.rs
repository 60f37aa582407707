use crate::error::{Error, Result};
use crate::types::{Scalar, Value};

/// Structural equality over values.
///
/// Scalars compare by value: bools, ints and floats are all numbers here,
/// so `1 == 1.0` and `true == 1`. Tuples compare element by element.
///
/// Map equality is order-sensitive: entries are compared pairwise in
/// insertion order, so `{a: 1, b: 2}` and `{b: 2, a: 1}` are not equal.
///
/// A custom value is asked first; if it cannot compare and the other side is
/// custom too, the other side is asked. A scalar never equals a container,
/// and such a pair is reported as [`Error::NotComparable`].
///
/// # Examples
///
/// ```
/// use extralib_value::{equal, Value};
///
/// let a = Value::seq(vec![1.into(), 2.into()]);
/// let b = Value::seq(vec![1.into(), 2.into()]);
/// let c = Value::seq(vec![2.into(), 1.into()]);
///
/// assert!(equal(&a, &b).unwrap());
/// assert!(!equal(&a, &c).unwrap());
/// ```
pub fn equal(a: &Value, b: &Value) -> Result<bool> {
    match (a, b) {
        (Value::Scalar(x), Value::Scalar(y)) => Ok(scalar_eq(x, y)),
        (Value::Sequence(x), Value::Sequence(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            if x.len() != y.len() {
                return Ok(false);
            }
            for (el1, el2) in x.iter().zip(y.iter()) {
                if !equal(el1, el2)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Map(x), Value::Map(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            if x.len() != y.len() {
                return Ok(false);
            }
            for ((k1, v1), (k2, v2)) in x.iter().zip(y.iter()) {
                if k1 != k2 || !equal(v1, v2)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Extensible(ext), _) => match (ext.equal(b), b) {
            (Err(Error::NotComparable { .. }), Value::Extensible(other)) => other.equal(a),
            (result, _) => result,
        },
        (_, Value::Extensible(ext)) => ext.equal(a),
        _ => Err(Error::not_comparable(a, b)),
    }
}

/// Bools and ints as exact integers.
fn as_integer(scalar: &Scalar) -> Option<i64> {
    match scalar {
        Scalar::Bool(b) => Some(i64::from(*b)),
        Scalar::Int(i) => Some(*i),
        _ => None,
    }
}

/// Exact comparison: a float only equals an integer it represents without loss.
fn int_float_eq(i: i64, x: f64) -> bool {
    // 2^63, the first float past i64::MAX
    const UPPER: f64 = 9_223_372_036_854_775_808.0;
    x.fract() == 0.0 && x >= i64::MIN as f64 && x < UPPER && x as i64 == i
}

fn scalar_eq(a: &Scalar, b: &Scalar) -> bool {
    match (a, b) {
        (Scalar::Tuple(xs), Scalar::Tuple(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| scalar_eq(x, y))
        }
        (Scalar::Float(x), Scalar::Float(y)) => x == y,
        (Scalar::Float(x), other) | (other, Scalar::Float(x)) => {
            as_integer(other).is_some_and(|i| int_float_eq(i, *x))
        }
        _ => match (as_integer(a), as_integer(b)) {
            (Some(i), Some(j)) => i == j,
            _ => a == b,
        },
    }
}

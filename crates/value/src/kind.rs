use crate::error::{Error, Result};
use crate::types::{Scalar, Value};

/// The four shapes a value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Sequence,
    Map,
    Extensible,
}

/// Classifies a value by shape.
///
/// A custom value only classifies as [`Kind::Extensible`] when it can
/// expand; one that exposes no children at all is unclassifiable.
///
/// # Example
///
/// ```
/// use extralib_value::{classify, Kind, Value};
///
/// assert_eq!(classify(&Value::from(1)).unwrap(), Kind::Scalar);
/// assert_eq!(classify(&Value::seq(vec![])).unwrap(), Kind::Sequence);
/// ```
pub fn classify(value: &Value) -> Result<Kind> {
    match value {
        Value::Scalar(_) => Ok(Kind::Scalar),
        Value::Sequence(_) => Ok(Kind::Sequence),
        Value::Map(_) => Ok(Kind::Map),
        Value::Extensible(ext) => match ext.expand() {
            Some(_) => Ok(Kind::Extensible),
            None => Err(Error::UnclassifiableValue(value.to_string())),
        },
    }
}

/// Returns true for scalar leaves.
pub fn is_primitive(value: &Value) -> bool {
    matches!(value, Value::Scalar(_))
}

/// Returns true for a string of exactly one character.
pub fn is_char(value: &Value) -> bool {
    matches!(value, Value::Scalar(s) if is_char_scalar(s))
}

pub(crate) fn is_char_scalar(scalar: &Scalar) -> bool {
    match scalar {
        Scalar::Str(s) => {
            let mut chars = s.chars();
            chars.next().is_some() && chars.next().is_none()
        }
        _ => false,
    }
}

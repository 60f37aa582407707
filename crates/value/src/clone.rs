use indexmap::IndexMap;

use crate::error::Result;
use crate::types::Value;

/// Copies a value.
///
/// Scalars are returned as-is. A shallow copy of a sequence or map creates a
/// new top-level container whose elements are still shared with the
/// original; a deep copy recreates every nested container. Custom values
/// decide for themselves through [`crate::Extensible::clone_value`].
///
/// # Examples
///
/// ```
/// use extralib_value::{clone, Value};
///
/// let original = Value::seq(vec![Value::seq(vec![1.into()])]);
/// let copy = clone(&original, true).unwrap();
/// assert_eq!(original, copy);
/// ```
pub fn clone(value: &Value, deep: bool) -> Result<Value> {
    match value {
        Value::Scalar(s) => Ok(Value::Scalar(s.clone())),
        Value::Sequence(seq) => {
            let items = seq.borrow();
            let copied = if deep {
                items
                    .iter()
                    .map(|el| clone(el, true))
                    .collect::<Result<Vec<_>>>()?
            } else {
                items.clone()
            };
            Ok(Value::seq(copied))
        }
        Value::Map(dict) => {
            let entries = dict.borrow();
            let copied = if deep {
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), clone(v, true)?)))
                    .collect::<Result<IndexMap<_, _>>>()?
            } else {
                entries.clone()
            };
            Ok(Value::map(copied))
        }
        Value::Extensible(ext) => ext.clone_value(deep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Extensible;
    use std::any::Any;

    fn push(value: &Value, item: Value) {
        if let Value::Sequence(seq) = value {
            seq.borrow_mut().push(item);
        }
    }

    fn first(value: &Value) -> Value {
        match value {
            Value::Sequence(seq) => seq.borrow()[0].clone(),
            _ => panic!("expected sequence"),
        }
    }

    #[test]
    fn test_clone_scalar() {
        let value = Value::from("hello");
        assert_eq!(clone(&value, false).unwrap(), value);
        assert_eq!(clone(&value, true).unwrap(), value);
    }

    #[test]
    fn test_shallow_clone_shares_nested() {
        let original = Value::seq(vec![Value::seq(vec![1.into()])]);
        let copy = clone(&original, false).unwrap();

        push(&first(&copy), 2.into());
        assert_eq!(first(&original).len(), Some(2));

        // The top-level container itself is new.
        push(&copy, 3.into());
        assert_eq!(original.len(), Some(1));
    }

    #[test]
    fn test_deep_clone_detaches_nested() {
        let original = Value::seq(vec![Value::seq(vec![1.into()])]);
        let copy = clone(&original, true).unwrap();

        push(&first(&copy), 2.into());
        assert_eq!(first(&original).len(), Some(1));
        assert_eq!(first(&copy).len(), Some(2));
    }

    #[test]
    fn test_clone_map_keeps_order() {
        let original = Value::from_entries([("b", Value::from(1)), ("a", Value::from(2))]);
        let copy = clone(&original, true).unwrap();
        assert_eq!(copy.to_string(), r#"{"b": 1, "a": 2}"#);
    }

    #[derive(Debug)]
    struct Fixed;

    impl Extensible for Fixed {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_clone_not_cloneable() {
        let nested = Value::seq(vec![Value::extensible(Fixed)]);
        assert!(clone(&nested, false).is_ok());
        assert!(matches!(clone(&nested, true), Err(Error::NotCloneable(_))));
    }
}

//! Resolving a single key and stepping it to its neighbours.
//!
//! Sequences step by index, maps by insertion order and custom keys step
//! themselves. Ordinary keys inside a custom value step along that value's
//! expansion, so the stepping order always matches [`crate::expand()`].

use extralib_value::{Error, Extensible, Key, Result, Value};

/// The child of `value` stored under `key`.
///
/// # Errors
///
/// - [`Error::IndexOutOfRange`] for an index past the end of a sequence.
/// - [`Error::KeyNotFound`] for a missing map entry, or a key that does not
///   fit the container at all.
pub fn resolve(value: &Value, key: &Key) -> Result<Value> {
    match (key, value) {
        (Key::Custom(custom), _) => custom.resolve(value),
        (Key::Index(index), Value::Sequence(seq)) => {
            let items = seq.borrow();
            items.get(*index).cloned().ok_or(Error::IndexOutOfRange {
                index: *index,
                len: items.len(),
            })
        }
        (Key::Name(name), Value::Map(dict)) => dict
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(key.to_string())),
        (_, Value::Extensible(ext)) => ext.child(key),
        _ => Err(Error::KeyNotFound(key.to_string())),
    }
}

/// The key following `key` inside `container`, or `None` at the last entry.
///
/// A map key that is not present has no successor.
///
/// # Errors
///
/// Returns [`Error::UnsupportedKeyStep`] when the key does not fit the
/// container, e.g. an index into a map.
pub fn increment_key(container: &Value, key: &Key) -> Result<Option<Key>> {
    match (key, container) {
        (Key::Custom(custom), _) => custom.increment(container),
        (Key::Index(index), Value::Sequence(seq)) => {
            let len = seq.borrow().len();
            Ok(index.checked_add(1).filter(|next| *next < len).map(Key::Index))
        }
        (Key::Name(name), Value::Map(dict)) => {
            let dict = dict.borrow();
            Ok(dict
                .get_index_of(name)
                .and_then(|i| dict.get_index(i + 1))
                .map(|(k, _)| Key::Name(k.clone())))
        }
        (_, Value::Extensible(ext)) => step_in_expansion(&**ext, container, key, true),
        _ => Err(Error::unsupported_step(key, container)),
    }
}

/// The key preceding `key` inside `container`, or `None` at the first entry.
///
/// Inverse of [`increment_key`] for every key present in the container.
pub fn decrement_key(container: &Value, key: &Key) -> Result<Option<Key>> {
    match (key, container) {
        (Key::Custom(custom), _) => custom.decrement(container),
        (Key::Index(index), Value::Sequence(_)) => Ok(index.checked_sub(1).map(Key::Index)),
        (Key::Name(name), Value::Map(dict)) => {
            let dict = dict.borrow();
            Ok(dict
                .get_index_of(name)
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| dict.get_index(i))
                .map(|(k, _)| Key::Name(k.clone())))
        }
        (_, Value::Extensible(ext)) => step_in_expansion(&**ext, container, key, false),
        _ => Err(Error::unsupported_step(key, container)),
    }
}

fn step_in_expansion(
    ext: &dyn Extensible,
    container: &Value,
    key: &Key,
    forward: bool,
) -> Result<Option<Key>> {
    let Some(children) = ext.expand() else {
        return Err(Error::unsupported_step(key, container));
    };
    let mut keys = children.map(|(k, _)| k);
    if forward {
        if keys.by_ref().any(|k| &k == key) {
            return Ok(keys.next());
        }
        return Ok(None);
    }
    let mut previous = None;
    for k in keys {
        if &k == key {
            return Ok(previous);
        }
        previous = Some(k);
    }
    Ok(None)
}

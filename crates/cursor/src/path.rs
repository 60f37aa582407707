//! The cursor: a flat sequence of keys relative to an external root.
//!
//! A [`Path`] holds no reference to the root it walks. Every operation takes
//! the root as an argument and re-resolves the keys against it, so moving
//! the cursor never needs a traversal stack. Moves return a new path and
//! leave the receiver untouched.

use std::fmt;

use extralib_value::{Key, Result, Value};

use crate::expand::{expand, first, last, Expansion};
use crate::step::{decrement_key, increment_key, resolve};

/// A position in the depth-first pre-order enumeration of a root value.
///
/// The empty path points at the root itself.
///
/// # Example
///
/// ```
/// use extralib_cursor::Path;
/// use extralib_value::Value;
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": [1, 2], "b": 3}));
/// let path = Path::new();
/// let next = path.increment(&root).unwrap().unwrap();
/// assert_eq!(next.to_string(), r#"Path(["a"])"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    keys: Vec<Key>,
}

impl Path {
    /// The root position.
    pub fn new() -> Self {
        Path { keys: Vec::new() }
    }

    /// A path from an explicit key sequence.
    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Path {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// The path with its last key dropped, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        self.keys.split_last().map(|(_, prefix)| Path::from_keys(prefix.to_vec()))
    }

    /// Copies the path.
    ///
    /// A shallow copy duplicates the key sequence and shares custom keys. A
    /// deep copy also asks every custom key to copy itself; keys that decline
    /// are shared.
    pub fn clone_path(&self, deep: bool) -> Path {
        if !deep {
            return self.clone();
        }
        self.keys
            .iter()
            .map(|key| match key {
                Key::Custom(custom) => custom
                    .clone_key(true)
                    .unwrap_or_else(|| Key::Custom(custom.clone())),
                other => other.clone(),
            })
            .collect()
    }

    /// The value this path points at under `root`.
    ///
    /// # Errors
    ///
    /// Fails with [`extralib_value::Error::KeyNotFound`] or
    /// [`extralib_value::Error::IndexOutOfRange`] when a key does not resolve.
    pub fn resolve(&self, root: &Value) -> Result<Value> {
        self.keys
            .iter()
            .try_fold(root.clone(), |value, key| resolve(&value, key))
    }

    /// Resolves every level: `parents[i]` is the container `keys[i]` is
    /// looked up in, and the second element is the node the path points at.
    fn chain(&self, root: &Value) -> Result<(Vec<Value>, Value)> {
        let mut parents = Vec::with_capacity(self.keys.len());
        let mut value = root.clone();
        for key in &self.keys {
            let child = resolve(&value, key)?;
            parents.push(value);
            value = child;
        }
        Ok((parents, value))
    }

    /// True at the root position. Only the path length is inspected.
    pub fn is_first(&self, _root: &Value) -> bool {
        self.keys.is_empty()
    }

    /// True when no forward move exists from this position.
    pub fn is_end(&self, root: &Value) -> Result<bool> {
        self.is_end_with(root, &expand)
    }

    /// [`Path::is_end`] with a caller-supplied expansion.
    pub fn is_end_with<E>(&self, root: &Value, expander: &E) -> Result<bool>
    where
        E: for<'v> Fn(&'v Value) -> Expansion<'v>,
    {
        let (parents, node) = self.chain(root)?;

        // descent is possible
        if first(expander, &node).is_some() {
            return Ok(false);
        }

        for (key, parent) in self.keys.iter().zip(parents.iter()).rev() {
            if increment_key(parent, key)?.is_some() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The next position in pre-order, or `None` at the last node.
    ///
    /// Descends into the first child when there is one; otherwise moves to
    /// the next sibling of the deepest level that has one.
    ///
    /// # Example
    ///
    /// ```
    /// use extralib_cursor::Path;
    /// use extralib_value::{Key, Value};
    ///
    /// let root = Value::seq(vec![1.into(), 2.into()]);
    /// let p1 = Path::new().increment(&root).unwrap().unwrap();
    /// assert_eq!(p1, Path::from_keys([Key::Index(0)]));
    /// let p2 = p1.increment(&root).unwrap().unwrap();
    /// assert_eq!(p2, Path::from_keys([Key::Index(1)]));
    /// assert!(p2.increment(&root).unwrap().is_none());
    /// ```
    pub fn increment(&self, root: &Value) -> Result<Option<Path>> {
        self.increment_with(root, &expand)
    }

    /// [`Path::increment`] with a caller-supplied expansion.
    ///
    /// The expansion only decides where the cursor may descend; sibling
    /// steps always follow the containers' own order.
    pub fn increment_with<E>(&self, root: &Value, expander: &E) -> Result<Option<Path>>
    where
        E: for<'v> Fn(&'v Value) -> Expansion<'v>,
    {
        let (parents, node) = self.chain(root)?;

        if let Some((key, _)) = first(expander, &node) {
            let mut keys = self.keys.clone();
            keys.push(key);
            return Ok(Some(Path { keys }));
        }

        for (depth, (key, parent)) in self.keys.iter().zip(parents.iter()).enumerate().rev() {
            if let Some(next) = increment_key(parent, key)? {
                let mut keys = self.keys[..depth].to_vec();
                keys.push(next);
                return Ok(Some(Path { keys }));
            }
        }
        Ok(None)
    }

    /// The previous position in pre-order, or `None` at the root.
    ///
    /// Without a previous sibling the predecessor is the parent. Otherwise it
    /// is the rightmost descendant of the previous sibling.
    pub fn decrement(&self, root: &Value) -> Result<Option<Path>> {
        self.decrement_with(root, &expand)
    }

    /// [`Path::decrement`] with a caller-supplied expansion.
    pub fn decrement_with<E>(&self, root: &Value, expander: &E) -> Result<Option<Path>>
    where
        E: for<'v> Fn(&'v Value) -> Expansion<'v>,
    {
        let (parents, _) = self.chain(root)?;
        let (Some(key), Some(parent)) = (self.keys.last(), parents.last()) else {
            return Ok(None);
        };
        let depth = self.keys.len() - 1;

        let Some(prev) = decrement_key(parent, key)? else {
            return Ok(Some(Path {
                keys: self.keys[..depth].to_vec(),
            }));
        };

        let mut value = resolve(parent, &prev)?;
        let mut keys = self.keys[..depth].to_vec();
        keys.push(prev);
        while let Some((child_key, child)) = last(expander, &value) {
            keys.push(child_key);
            value = child;
        }
        Ok(Some(Path { keys }))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Path([")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("])")
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path::from_keys(iter)
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path { keys }
    }
}

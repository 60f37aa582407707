//! Lazy expansion of a value into its `(key, child)` pairs.

use extralib_value::{Children, Dict, Key, Seq, Value};

/// Children of one value in canonical forward order.
///
/// Sequences yield `(0, v[0]), (1, v[1]), ...`, maps yield their entries in
/// insertion order, custom values yield whatever their own expansion yields
/// and scalars yield nothing. The iterator is double-ended, so the last
/// child is as cheap to reach as the first one.
pub struct Expansion<'a> {
    inner: Inner<'a>,
}

enum Inner<'a> {
    Empty,
    Sequence { seq: Seq, front: usize, back: usize },
    Map { dict: Dict, front: usize, back: usize },
    Custom(Children<'a>),
}

impl<'a> Expansion<'a> {
    /// An expansion without children.
    pub fn empty() -> Self {
        Expansion { inner: Inner::Empty }
    }

    /// Wraps children produced elsewhere, e.g. by a custom expansion strategy.
    pub fn from_children(children: Children<'a>) -> Self {
        Expansion {
            inner: Inner::Custom(children),
        }
    }
}

impl std::fmt::Debug for Expansion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match &self.inner {
            Inner::Empty => "Empty",
            Inner::Sequence { .. } => "Sequence",
            Inner::Map { .. } => "Map",
            Inner::Custom(_) => "Custom",
        };
        f.debug_struct("Expansion").field("kind", &kind).finish()
    }
}

impl Iterator for Expansion<'_> {
    type Item = (Key, Value);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Empty => None,
            Inner::Sequence { seq, front, back } => {
                if *front >= *back {
                    return None;
                }
                let item = seq.borrow().get(*front).cloned()?;
                *front += 1;
                Some((Key::Index(*front - 1), item))
            }
            Inner::Map { dict, front, back } => {
                if *front >= *back {
                    return None;
                }
                let entry = dict
                    .borrow()
                    .get_index(*front)
                    .map(|(k, v)| (Key::Name(k.clone()), v.clone()))?;
                *front += 1;
                Some(entry)
            }
            Inner::Custom(children) => children.next(),
        }
    }
}

impl DoubleEndedIterator for Expansion<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Empty => None,
            Inner::Sequence { seq, front, back } => {
                if *front >= *back {
                    return None;
                }
                *back -= 1;
                let item = seq.borrow().get(*back).cloned()?;
                Some((Key::Index(*back), item))
            }
            Inner::Map { dict, front, back } => {
                if *front >= *back {
                    return None;
                }
                *back -= 1;
                dict.borrow()
                    .get_index(*back)
                    .map(|(k, v)| (Key::Name(k.clone()), v.clone()))
            }
            Inner::Custom(children) => children.next_back(),
        }
    }
}

/// Expands a value into its children.
///
/// Every call starts from scratch; the returned iterator is not shared.
///
/// # Example
///
/// ```
/// use extralib_cursor::expand;
/// use extralib_value::{Key, Value};
///
/// let seq = Value::seq(vec![10.into(), 20.into()]);
/// let keys: Vec<Key> = expand(&seq).map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
/// assert!(expand(&Value::from(1)).next().is_none());
/// ```
pub fn expand(value: &Value) -> Expansion<'_> {
    let inner = match value {
        Value::Scalar(_) => Inner::Empty,
        Value::Sequence(seq) => Inner::Sequence {
            back: seq.borrow().len(),
            seq: seq.clone(),
            front: 0,
        },
        Value::Map(dict) => Inner::Map {
            back: dict.borrow().len(),
            dict: dict.clone(),
            front: 0,
        },
        Value::Extensible(ext) => ext.expand().map_or(Inner::Empty, Inner::Custom),
    };
    Expansion { inner }
}

/// First `(key, child)` pair of an expansion.
pub fn first<'v, E>(expander: &E, value: &'v Value) -> Option<(Key, Value)>
where
    E: Fn(&'v Value) -> Expansion<'v> + ?Sized,
{
    expander(value).next()
}

/// Last `(key, child)` pair of an expansion.
pub fn last<'v, E>(expander: &E, value: &'v Value) -> Option<(Key, Value)>
where
    E: Fn(&'v Value) -> Expansion<'v> + ?Sized,
{
    expander(value).next_back()
}

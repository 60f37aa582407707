//! The value model: scalars, shared containers, keys and the two
//! capability traits custom types implement to take part in traversal.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A shared, mutable ordered sequence.
pub type Seq = Rc<RefCell<Vec<Value>>>;

/// A shared, mutable map whose iteration order is insertion order.
pub type Dict = Rc<RefCell<IndexMap<String, Value>>>;

/// Children of a value as `(key, child)` pairs in canonical forward order.
///
/// Double-ended so that both the first and the last child are cheap to reach.
pub type Children<'a> = Box<dyn DoubleEndedIterator<Item = (Key, Value)> + 'a>;

/// An immutable leaf value.
///
/// `Str` doubles as the character type: a string of exactly one `char` is a
/// char for ordering purposes. `Tuple` is an immutable ordered group of
/// scalars and is never descended into.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Scalar>),
}

/// A node of a heterogeneous tree.
///
/// Cloning a `Value` through [`Clone`] copies the handle: containers are
/// shared, not duplicated. Use [`crate::clone`] for shallow or deep copies.
#[derive(Debug, Clone)]
pub enum Value {
    Scalar(Scalar),
    Sequence(Seq),
    Map(Dict),
    Extensible(Rc<dyn Extensible>),
}

/// A single step of a path.
#[derive(Debug, Clone)]
pub enum Key {
    /// Position inside a sequence.
    Index(usize),
    /// Entry name inside a map.
    Name(String),
    /// A key type that knows how to resolve and step itself.
    Custom(Rc<dyn CustomKey>),
}

/// A user-defined value that takes part in cloning, equality and traversal.
///
/// Every capability is optional: the defaults report that the capability
/// is missing.
pub trait Extensible: fmt::Debug {
    /// Exposes the concrete type for downcasting in [`Extensible::equal`].
    fn as_any(&self) -> &dyn Any;

    /// Copies the value. `deep` asks for children to be copied too.
    fn clone_value(&self, deep: bool) -> Result<Value> {
        let _ = deep;
        Err(Error::NotCloneable(format!("{self:?}")))
    }

    /// Structural equality against any other value.
    fn equal(&self, other: &Value) -> Result<bool> {
        Err(Error::not_comparable(format!("{self:?}"), other))
    }

    /// Children in canonical order, or `None` when the value cannot expand.
    fn expand(&self) -> Option<Children<'_>> {
        None
    }

    /// Looks up the child stored under an ordinary key.
    ///
    /// The default scans [`Extensible::expand`] for a matching key.
    fn child(&self, key: &Key) -> Result<Value> {
        self.expand()
            .and_then(|mut children| children.find(|(k, _)| k == key))
            .map(|(_, child)| child)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }
}

/// A user-defined key that resolves and steps itself inside a container.
pub trait CustomKey: fmt::Debug {
    /// Exposes the concrete type for downcasting in [`CustomKey::key_eq`].
    fn as_any(&self) -> &dyn Any;

    /// The child of `container` this key addresses.
    fn resolve(&self, container: &Value) -> Result<Value>;

    /// The next sibling key, or `None` when this key is the last one.
    fn increment(&self, container: &Value) -> Result<Option<Key>> {
        Err(Error::unsupported_step(format!("{self:?}"), container))
    }

    /// The previous sibling key, or `None` when this key is the first one.
    fn decrement(&self, container: &Value) -> Result<Option<Key>> {
        Err(Error::unsupported_step(format!("{self:?}"), container))
    }

    /// Copies the key. `None` means the key is opaque and its handle is shared.
    fn clone_key(&self, deep: bool) -> Option<Key> {
        let _ = deep;
        None
    }

    /// Equality against another custom key. Identity is checked separately.
    fn key_eq(&self, other: &dyn CustomKey) -> bool {
        let _ = other;
        false
    }
}

impl Value {
    /// Wraps a vector into a fresh shared sequence.
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Sequence(Rc::new(RefCell::new(items)))
    }

    /// Wraps an ordered map into a fresh shared map.
    pub fn map(entries: IndexMap<String, Value>) -> Self {
        Value::Map(Rc::new(RefCell::new(entries)))
    }

    /// Builds a map from `(name, value)` pairs, keeping their order.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Wraps a custom value.
    pub fn extensible<T: Extensible + 'static>(value: T) -> Self {
        Value::Extensible(Rc::new(value))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Number of direct entries of a sequence or map.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Sequence(seq) => Some(seq.borrow().len()),
            Value::Map(dict) => Some(dict.borrow().len()),
            _ => None,
        }
    }
}

/// Structural equality through [`crate::equal`]; incomparable pairs are unequal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equal(self, other).unwrap_or(false)
    }
}

impl Key {
    /// Wraps a custom key.
    pub fn custom<T: CustomKey + 'static>(key: T) -> Self {
        Key::Custom(Rc::new(key))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Index(a), Key::Index(b)) => a == b,
            (Key::Name(a), Key::Name(b)) => a == b,
            (Key::Custom(a), Key::Custom(b)) => Rc::ptr_eq(a, b) || a.key_eq(b.as_ref()),
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x:?}"),
            Scalar::Str(s) => write!(f, "{s:?}"),
            Scalar::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Sequence(seq) => {
                f.write_str("[")?;
                for (i, item) in seq.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(dict) => {
                f.write_str("{")?;
                for (i, (k, v)) in dict.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                f.write_str("}")
            }
            Value::Extensible(ext) => write!(f, "{ext:?}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => write!(f, "{name:?}"),
            Key::Custom(key) => write!(f, "{key:?}"),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Scalar(Scalar::Int(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Scalar(Scalar::Int(i.into()))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Scalar(Scalar::Float(x))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Scalar(Scalar::Str(c.to_string()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::seq(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::map(entries)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

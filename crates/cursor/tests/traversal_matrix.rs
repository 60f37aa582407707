use std::any::Any;
use std::rc::Rc;

use extralib_cursor::{decrement_key, expand, increment_key, preorder, Path};
use extralib_value::{Children, CustomKey, Error, Extensible, Key, Result, Value};
use serde_json::json;

fn walk_forward(root: &Value) -> Vec<Path> {
    let mut paths = vec![Path::new()];
    while let Some(next) = paths.last().unwrap().increment(root).unwrap() {
        paths.push(next);
    }
    paths
}

#[test]
fn round_trip_scenario() {
    let root = Value::from(json!([10, {"x": 20, "y": [30, 40]}]));
    let paths = walk_forward(&root);

    let values: Vec<Value> = paths[1..]
        .iter()
        .map(|p| p.resolve(&root).unwrap())
        .collect();
    let expected = [
        Value::from(json!(10)),
        Value::from(json!({"x": 20, "y": [30, 40]})),
        Value::from(json!(20)),
        Value::from(json!([30, 40])),
        Value::from(json!(30)),
        Value::from(json!(40)),
    ];
    assert_eq!(values, expected);

    let last = paths.last().unwrap();
    assert!(last.is_end(&root).unwrap());

    let mut backwards = vec![last.clone()];
    while let Some(prev) = backwards.last().unwrap().decrement(&root).unwrap() {
        backwards.push(prev);
    }
    backwards.reverse();
    assert_eq!(backwards, paths);
    assert!(backwards[0].is_first(&root));
}

#[test]
fn preorder_descends_before_moving_sideways() {
    let root = Value::from(json!({"a": [1, 2], "b": 3}));
    let rendered: Vec<String> = preorder(&root)
        .map(|p| p.unwrap().to_string())
        .collect();
    assert_eq!(
        rendered,
        [
            "Path([])",
            r#"Path(["a"])"#,
            r#"Path(["a", 0])"#,
            r#"Path(["a", 1])"#,
            r#"Path(["b"])"#,
        ]
    );
}

#[test]
fn decrement_from_leaf_after_deep_subtree() {
    let root = Value::from(json!({"a": {"b": {"c": [1, [2, 3]]}}, "d": 4}));
    let d = Path::from_keys([Key::from("d")]);
    let prev = d.decrement(&root).unwrap().unwrap();
    assert_eq!(
        prev,
        Path::from_keys([
            Key::from("a"),
            Key::from("b"),
            Key::from("c"),
            Key::Index(1),
            Key::Index(1),
        ])
    );
    assert_eq!(prev.resolve(&root).unwrap(), Value::from(3));
    assert_eq!(prev.increment(&root).unwrap(), Some(d));
}

#[test]
fn boundary_consistency_on_every_position() {
    let root = Value::from(json!({"k": [[], {}, [1]], "z": {"q": null}}));
    for path in preorder(&root) {
        let path = path.unwrap();
        assert_eq!(
            path.is_end(&root).unwrap(),
            path.increment(&root).unwrap().is_none(),
            "{path}"
        );
    }
}

/// A node with a label and children addressed by ordinary indices.
#[derive(Debug)]
struct Node {
    label: &'static str,
    children: Vec<Value>,
}

impl Extensible for Node {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_value(&self, deep: bool) -> Result<Value> {
        let children = if deep {
            self.children
                .iter()
                .map(|c| extralib_value::clone(c, true))
                .collect::<Result<_>>()?
        } else {
            self.children.clone()
        };
        Ok(Value::extensible(Node {
            label: self.label,
            children,
        }))
    }

    fn equal(&self, other: &Value) -> Result<bool> {
        let Value::Extensible(ext) = other else {
            return Ok(false);
        };
        let Some(other) = ext.as_any().downcast_ref::<Node>() else {
            return Ok(false);
        };
        if self.label != other.label || self.children.len() != other.children.len() {
            return Ok(false);
        }
        for (a, b) in self.children.iter().zip(other.children.iter()) {
            if !extralib_value::equal(a, b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn expand(&self) -> Option<Children<'_>> {
        Some(Box::new(
            self.children
                .iter()
                .cloned()
                .enumerate()
                .map(|(i, c)| (Key::Index(i), c)),
        ))
    }
}

fn node(label: &'static str, children: Vec<Value>) -> Value {
    Value::extensible(Node { label, children })
}

#[test]
fn extensible_values_step_along_their_expansion() {
    let root = node(
        "root",
        vec![node("left", vec![1.into()]), Value::from(json!([2, 3]))],
    );
    let paths = walk_forward(&root);
    let leaves: Vec<Value> = paths
        .iter()
        .map(|p| p.resolve(&root).unwrap())
        .filter(|v| v.as_int().is_some())
        .collect();
    assert_eq!(leaves, [Value::from(1), Value::from(2), Value::from(3)]);
    assert_eq!(paths.len(), 6);

    assert_eq!(
        increment_key(&root, &Key::Index(0)).unwrap(),
        Some(Key::Index(1))
    );
    assert_eq!(increment_key(&root, &Key::Index(1)).unwrap(), None);
    assert_eq!(decrement_key(&root, &Key::Index(0)).unwrap(), None);

    for pair in paths.windows(2) {
        assert_eq!(pair[1].decrement(&root).unwrap().as_ref(), Some(&pair[0]));
    }
}

#[test]
fn extensible_clone_and_equal() {
    let original = node("n", vec![Value::from(json!([1]))]);
    let copy = extralib_value::clone(&original, true).unwrap();
    assert_eq!(copy, original);
    assert_ne!(node("m", vec![Value::from(json!([1]))]), original);
}

/// Children addressed by a custom key counting down from the last one.
#[derive(Debug)]
struct Countdown(usize);

#[derive(Debug, Clone, PartialEq)]
struct Tick(usize);

impl Extensible for Countdown {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn expand(&self) -> Option<Children<'_>> {
        Some(Box::new(
            (0..self.0)
                .rev()
                .map(|i| (Key::custom(Tick(i)), Value::from(i as i64))),
        ))
    }
}

fn countdown_len(container: &Value) -> Result<usize> {
    match container {
        Value::Extensible(ext) => ext
            .as_any()
            .downcast_ref::<Countdown>()
            .map(|c| c.0)
            .ok_or_else(|| Error::KeyNotFound(format!("{ext:?}"))),
        other => Err(Error::KeyNotFound(other.to_string())),
    }
}

impl CustomKey for Tick {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn resolve(&self, container: &Value) -> Result<Value> {
        let len = countdown_len(container)?;
        if self.0 < len {
            Ok(Value::from(self.0 as i64))
        } else {
            Err(Error::IndexOutOfRange { index: self.0, len })
        }
    }

    fn increment(&self, container: &Value) -> Result<Option<Key>> {
        countdown_len(container)?;
        Ok(self.0.checked_sub(1).map(|i| Key::custom(Tick(i))))
    }

    fn decrement(&self, container: &Value) -> Result<Option<Key>> {
        let len = countdown_len(container)?;
        Ok(Some(self.0 + 1)
            .filter(|i| *i < len)
            .map(|i| Key::custom(Tick(i))))
    }

    fn clone_key(&self, _deep: bool) -> Option<Key> {
        Some(Key::custom(self.clone()))
    }

    fn key_eq(&self, other: &dyn CustomKey) -> bool {
        other.as_any().downcast_ref::<Tick>() == Some(self)
    }
}

#[test]
fn custom_keys_drive_resolution_and_stepping() {
    let root = Value::from_entries([("c", Value::extensible(Countdown(3)))]);
    let values: Vec<i64> = preorder(&root)
        .skip(2)
        .map(|p| p.unwrap().resolve(&root).unwrap().as_int().unwrap())
        .collect();
    assert_eq!(values, [2, 1, 0]);

    let last = Path::from_keys([Key::from("c"), Key::custom(Tick(0))]);
    assert!(last.is_end(&root).unwrap());
    let prev = last.decrement(&root).unwrap().unwrap();
    assert_eq!(prev, Path::from_keys([Key::from("c"), Key::custom(Tick(1))]));

    let first = Path::from_keys([Key::from("c"), Key::custom(Tick(2))]);
    assert_eq!(
        first.decrement(&root).unwrap(),
        Some(Path::from_keys([Key::from("c")]))
    );
}

#[test]
fn deep_path_clone_copies_custom_keys() {
    let tick: Rc<dyn CustomKey> = Rc::new(Tick(4));
    let path = Path::from_keys([Key::Index(0), Key::Custom(tick.clone())]);

    let shallow = path.clone_path(false);
    let deep = path.clone_path(true);
    assert_eq!(shallow, path);
    assert_eq!(deep, path);

    match (&shallow.keys()[1], &deep.keys()[1]) {
        (Key::Custom(s), Key::Custom(d)) => {
            assert!(Rc::ptr_eq(s, &tick));
            assert!(!Rc::ptr_eq(d, &tick));
        }
        _ => panic!("expected custom keys"),
    }
}

#[test]
fn expansion_of_custom_value_is_restartable() {
    let value = Value::extensible(Countdown(2));
    assert_eq!(expand(&value).count(), 2);
    assert_eq!(expand(&value).count(), 2);
}

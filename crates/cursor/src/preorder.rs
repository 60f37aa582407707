use extralib_value::{Error, Result, Value};

use crate::path::Path;

/// Iterator over every position of `root` in depth-first pre-order.
///
/// Starts at the root position and advances with [`Path::increment`]. After
/// an error the iterator yields that error once and then stops.
#[derive(Debug)]
pub struct Preorder<'r> {
    root: &'r Value,
    next: Option<Path>,
    error: Option<Error>,
}

/// Walks `root` from the root position to its last node.
///
/// # Example
///
/// ```
/// use extralib_cursor::preorder;
/// use extralib_value::Value;
/// use serde_json::json;
///
/// let root = Value::from(json!([10, {"x": 20, "y": [30, 40]}]));
/// let values: Vec<String> = preorder(&root)
///     .map(|path| path.unwrap().resolve(&root).unwrap().to_string())
///     .collect();
/// assert_eq!(values[1], "10");
/// assert_eq!(values.len(), 7);
/// ```
pub fn preorder(root: &Value) -> Preorder<'_> {
    Preorder {
        root,
        next: Some(Path::new()),
        error: None,
    }
}

impl Iterator for Preorder<'_> {
    type Item = Result<Path>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.error.take() {
            return Some(Err(err));
        }
        let current = self.next.take()?;
        match current.increment(self.root) {
            Ok(next) => self.next = next,
            Err(err) => self.error = Some(err),
        }
        Some(Ok(current))
    }
}

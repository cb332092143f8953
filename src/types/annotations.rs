//! Key/value annotations carried by an error node.
//!
//! [`Annotations`] stores auxiliary structured context such as the offending
//! value or the name of a property. Values are anything that implements
//! [`Display`]; they are rendered lazily, only when the error is printed or
//! projected into traces.
//!
//! Entries are always iterated and rendered in key order:
//!
//! ```
//! use error_stacktrace::{AnnotationValue, Annotations};
//!
//! let mut info = Annotations::new();
//! info.add("zeta", AnnotationValue::new(3))
//!     .add("alpha", AnnotationValue::new("first"));
//!
//! assert_eq!(info.to_string(), "alpha: first: zeta: 3");
//! ```

use crate::types::alloc_type::{Arc, BTreeMap, String};
use alloc::string::ToString;
use core::fmt::{Debug, Display, Formatter};

/// A shared, renderable annotation value.
#[derive(Clone)]
pub struct AnnotationValue(Arc<dyn Display + Send + Sync>);

impl AnnotationValue {
    /// Wraps any displayable value.
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Display + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    /// Renders the value.
    #[inline]
    pub fn render(&self) -> String {
        self.0.to_string()
    }
}

impl Display for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

impl Debug for AnnotationValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("AnnotationValue").field(&self.render()).finish()
    }
}

/// Sorted map of annotation keys to renderable values.
///
/// Mutation goes through `&mut self`, so a store cannot be changed from two
/// places at once.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    entries: BTreeMap<String, AnnotationValue>,
}

impl Annotations {
    /// Creates an empty store.
    #[inline]
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Inserts or replaces the value stored under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: AnnotationValue) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.entries.get(key)
    }

    /// Returns the rendered value stored under `key`.
    #[inline]
    pub fn string_by(&self, key: &str) -> Option<String> {
        self.get(key).map(AnnotationValue::render)
    }

    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.entries.remove(key);
        self
    }

    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copies every entry of `other` into this store, overwriting equal keys.
    pub fn update(&mut self, other: &Annotations) -> &mut Self {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Display for Annotations {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Annotations {
    type Item = (&'a String, &'a AnnotationValue);
    type IntoIter = alloc::collections::btree_map::Iter<'a, String, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

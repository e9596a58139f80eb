use alloc::vec::Vec;
use core::slice;

/// An entry of a mixed sequence: either a raw element or a sequence of raw elements.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Item(T),
    Seq(Vec<T>),
}

impl<T> Nested<T> {
    /// The number of raw elements this entry contributes once flattened.
    pub fn len(&self) -> usize {
        match self {
            Self::Item(_) => 1,
            Self::Seq(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Item(value) => slice::from_ref(value),
            Self::Seq(values) => values,
        }
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values)
    }
}

/// Removes one level of nesting from a mixed sequence, preserving order.
///
/// The input is left untouched. Only a single level is removed: `Nested<Vec<U>>` flattens to
/// `Vec<Vec<U>>`, not to `Vec<U>`.
#[must_use]
pub fn flatten<T: Clone>(items: &[Nested<T>]) -> Vec<T> {
    let mut flat = Vec::with_capacity(items.iter().map(Nested::len).sum());
    for item in items {
        flat.extend_from_slice(item.as_slice());
    }
    flat
}

/// Like [`flatten`], but consumes the input so no element has to be cloned.
#[must_use]
pub fn flatten_owned<T>(items: Vec<Nested<T>>) -> Vec<T> {
    let mut flat = Vec::with_capacity(items.iter().map(Nested::len).sum());
    for item in items {
        match item {
            Nested::Item(value) => flat.push(value),
            Nested::Seq(values) => flat.extend(values),
        }
    }
    flat
}

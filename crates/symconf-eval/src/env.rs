//! Binding environment for declared constants.

use std::collections::BTreeMap;
use symconf_types::Scalar;

/// Mapping from constant name to its declared value.
///
/// A single flat scope: declarations are global to one translation run and
/// the language has no blocks that could shadow them. Re-declaring a name
/// replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: BTreeMap<String, Scalar>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the value it replaced (if any).
    pub fn define(&mut self, name: &str, value: impl Into<Scalar>) -> Option<Scalar> {
        self.bindings.insert(name.to_string(), value.into())
    }

    /// Look up a constant.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

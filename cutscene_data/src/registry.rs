use std::collections::BTreeMap;

use crate::PreconditionType;

/// Lookup table of precondition types keyed by their id character.
///
/// Built once when the type table is loaded and only read afterwards; parsers
/// borrow it, hosts that render on another thread can wrap it in an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreconditionRegistry {
    types: BTreeMap<char, PreconditionType>,
}

impl PreconditionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type unless its id is already taken. The first definition wins.
    ///
    /// Returns `false` when the type was ignored because of a collision.
    pub fn insert(&mut self, ty: PreconditionType) -> bool {
        if self.types.contains_key(&ty.id) {
            return false;
        }
        self.types.insert(ty.id, ty);
        true
    }

    pub fn get(&self, id: char) -> Option<&PreconditionType> {
        self.types.get(&id)
    }

    pub fn contains(&self, id: char) -> bool {
        self.types.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreconditionType> {
        self.types.values()
    }
}

impl FromIterator<PreconditionType> for PreconditionRegistry {
    fn from_iter<I: IntoIterator<Item = PreconditionType>>(iter: I) -> Self {
        let mut registry = PreconditionRegistry::new();
        for ty in iter {
            registry.insert(ty);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(id: char, label: &str) -> PreconditionType {
        PreconditionType {
            id,
            label: label.into(),
            param_types: Vec::new(),
            param_labels: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    #[test]
    fn first_definition_wins() {
        let mut registry = PreconditionRegistry::new();
        assert!(registry.insert(named('a', "first")));
        assert!(!registry.insert(named('a', "second")));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get('a').map(|t| t.label.as_str()), Some("first"));
    }

    #[test]
    fn collect_keeps_ids_sorted() {
        let registry: PreconditionRegistry = vec![named('z', "Z"), named('b', "B")].into_iter().collect();
        let ids: Vec<char> = registry.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!['b', 'z']);
        assert!(registry.contains('z'));
        assert!(!registry.contains('q'));
    }
}

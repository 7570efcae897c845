use std::collections::BTreeSet;

/// Container behind a collection property
///
/// Collections are set-like: inserting a member already present is a no-op,
/// so element order never produces spurious mutations.
pub trait ValueSet: Default + Send + Sync {
    type Item: PartialEq;

    fn members(&self) -> Box<dyn Iterator<Item = &Self::Item> + '_>;

    fn contains_value(&self, value: &Self::Item) -> bool {
        self.members().any(|m| m == value)
    }

    /// Returns `true` when the member was not present
    fn insert_value(&mut self, value: Self::Item) -> bool;

    /// Returns `true` when a member was removed
    fn remove_value(&mut self, value: &Self::Item) -> bool;
}

impl<E: PartialEq + Send + Sync> ValueSet for Vec<E> {
    type Item = E;

    fn members(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }

    fn insert_value(&mut self, value: E) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.push(value);
        true
    }

    fn remove_value(&mut self, value: &E) -> bool {
        let before = self.len();
        self.retain(|m| m != value);
        self.len() != before
    }
}

impl<E: Ord + Send + Sync> ValueSet for BTreeSet<E> {
    type Item = E;

    fn members(&self) -> Box<dyn Iterator<Item = &E> + '_> {
        Box::new(self.iter())
    }

    fn contains_value(&self, value: &E) -> bool {
        self.contains(value)
    }

    fn insert_value(&mut self, value: E) -> bool {
        self.insert(value)
    }

    fn remove_value(&mut self, value: &E) -> bool {
        self.remove(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_insert_is_idempotent() {
        let mut levels: Vec<i32> = vec![1];
        assert!(!levels.insert_value(1));
        assert!(levels.insert_value(2));
        assert_eq!(levels, vec![1, 2]);
    }

    #[test]
    fn test_vec_remove_reports_change() {
        let mut levels: Vec<i32> = vec![1, 2];
        assert!(levels.remove_value(&1));
        assert!(!levels.remove_value(&1));
        assert_eq!(levels, vec![2]);
    }

    #[test]
    fn test_btree_set_delegates() {
        let mut set: BTreeSet<String> = BTreeSet::new();
        assert!(set.insert_value("a".into()));
        assert!(set.contains_value(&"a".to_string()));
        assert!(set.remove_value(&"a".to_string()));
        assert!(set.is_empty());
    }
}

//! # List Reconciliation
//!
//! Compares the current state of a configuration list against the desired
//! state and reports what has to be added and removed to get there.
//!
//! Additions come back in the order of the desired list so callers can apply
//! them deterministically (LUN ordering, portal ordering). Removals come
//! back in set iteration order and carry no ordering guarantee.

use std::cell::Cell;
use std::collections::HashSet;
use std::hash::Hash;

/// A one-shot diff between a `current` and a `new` list.
///
/// Both lists are snapshots taken at construction and never modified.
/// Membership uses set semantics, so duplicate entries count once.
#[derive(Debug, Clone)]
pub struct ListComparison<T> {
    current: Vec<T>,
    new: Vec<T>,
    changed: Cell<bool>,
}

impl<T> ListComparison<T>
where
    T: Eq + Hash,
{
    pub fn new(current: impl IntoIterator<Item = T>, new: impl IntoIterator<Item = T>) -> Self {
        Self {
            current: current.into_iter().collect(),
            new: new.into_iter().collect(),
            changed: Cell::new(false),
        }
    }

    pub fn current(&self) -> &[T] {
        &self.current
    }

    pub fn new_items(&self) -> &[T] {
        &self.new
    }

    /// Items present in `new` but not in `current`, in `new`'s order.
    ///
    /// Latches [`changed`](Self::changed) when anything was added.
    pub fn added(&self) -> Vec<&T> {
        let current: HashSet<&T> = self.current.iter().collect();
        let additions: Vec<&T> = self
            .new
            .iter()
            .filter(|item| !current.contains(item))
            .collect();

        if !additions.is_empty() {
            self.changed.set(true);
        }
        additions
    }

    /// Items present in `current` but not in `new`, in no particular order.
    ///
    /// Latches [`changed`](Self::changed) when anything was removed.
    pub fn removed(&self) -> HashSet<&T> {
        let new: HashSet<&T> = self.new.iter().collect();
        let removals: HashSet<&T> = self
            .current
            .iter()
            .filter(|item| !new.contains(item))
            .collect();

        if !removals.is_empty() {
            self.changed.set(true);
        }
        removals
    }

    /// True once [`added`](Self::added) or [`removed`](Self::removed) has
    /// returned a non-empty result. Never resets.
    pub fn changed(&self) -> bool {
        self.changed.get()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_lists_report_both_directions() {
        let diff = ListComparison::new([1, 2, 3], [2, 3, 4]);
        assert!(!diff.changed());
        assert_eq!(diff.added(), vec![&4]);
        assert_eq!(diff.removed(), HashSet::from([&1]));
        assert!(diff.changed());
    }

    #[test]
    fn identical_lists_are_unchanged() {
        let diff = ListComparison::new([1, 2], [1, 2]);
        assert!(diff.added().is_empty());
        assert!(diff.removed().is_empty());
        assert!(!diff.changed());
    }

    #[test]
    fn added_follows_desired_order() {
        let diff = ListComparison::new(Vec::<&str>::new(), ["a", "b", "c"]);
        assert_eq!(diff.added(), vec![&"a", &"b", &"c"]);

        let diff = ListComparison::new(["m"], ["z", "m", "a", "q"]);
        assert_eq!(diff.added(), vec![&"z", &"a", &"q"]);
    }

    #[test]
    fn duplicates_collapse_to_set_members() {
        let diff = ListComparison::new([1, 1, 2], [1, 2, 2, 3]);
        assert_eq!(diff.added(), vec![&3]);
        assert!(diff.removed().is_empty());
    }

    #[test]
    fn removed_alone_latches_changed() {
        let diff = ListComparison::new(["iqn.a", "iqn.b"], ["iqn.a"]);
        assert!(diff.added().is_empty());
        assert!(!diff.changed());
        assert_eq!(diff.removed(), HashSet::from([&"iqn.b"]));
        assert!(diff.changed());
    }

    #[test]
    fn changed_never_resets_on_recompute() {
        let diff = ListComparison::new([1], [2]);
        assert_eq!(diff.added(), vec![&2]);
        assert!(diff.changed());
        assert_eq!(diff.added(), vec![&2]);
        assert_eq!(diff.removed(), HashSet::from([&1]));
        assert!(diff.changed());
    }

    #[test]
    fn works_with_owned_strings() {
        let current: Vec<String> = vec!["rbd/disk_1".into(), "rbd/disk_2".into()];
        let desired: Vec<String> = vec!["rbd/disk_2".into(), "rbd/disk_3".into()];
        let diff = ListComparison::new(current, desired);
        assert_eq!(diff.added(), vec![&"rbd/disk_3".to_string()]);
        assert_eq!(diff.current().len(), 2);
        assert_eq!(diff.new_items().len(), 2);
    }
}

//! Pure column-list operations: partition, reconcile, reorder
//!
//! All functions here are total. Malformed input (unknown ids, empty
//! schemas) degrades to safe defaults rather than erroring: column
//! visibility is cosmetic and must never be able to break a table render.

use std::collections::HashSet;

use crate::columns::descriptor::Column;

/// Locked-column ids used when the caller supplies none
pub const DEFAULT_LOCKED_IDS: &[&str] = &["select"];

/// Split a schema into (locked, toggleable) by key membership
///
/// Order-preserving: both halves keep schema order. An empty `locked_ids`
/// set falls back to [`DEFAULT_LOCKED_IDS`].
pub fn partition(columns: &[Column], locked_ids: &[String]) -> (Vec<Column>, Vec<Column>) {
    let fallback: Vec<String>;
    let locked_ids = if locked_ids.is_empty() {
        fallback = DEFAULT_LOCKED_IDS.iter().map(|s| s.to_string()).collect();
        &fallback
    } else {
        locked_ids
    };
    let locked_set: HashSet<&str> = locked_ids.iter().map(|s| s.as_str()).collect();

    let mut locked = Vec::new();
    let mut toggleable = Vec::new();
    for column in columns {
        if locked_set.contains(column.key.as_str()) {
            locked.push(column.clone());
        } else {
            toggleable.push(column.clone());
        }
    }
    (locked, toggleable)
}

/// Compute the initial visible list from optional caller intent
///
/// Ids without a matching toggleable column are dropped. If nothing
/// matches (or no intent was given) the result is all of `toggleable`
/// in schema order: degrade to "show everything", never "show nothing".
pub fn initialize_visible(toggleable: &[Column], initial_ids: Option<&[String]>) -> Vec<Column> {
    if let Some(ids) = initial_ids {
        if !ids.is_empty() {
            let chosen: Vec<Column> = ids
                .iter()
                .filter_map(|id| toggleable.iter().find(|c| &c.key == id).cloned())
                .collect();
            if !chosen.is_empty() {
                return chosen;
            }
        }
    }
    toggleable.to_vec()
}

/// Merge a previously visible list against a changed schema
///
/// Two passes: survivors from `previous` keep their relative order and
/// are re-bound to the new descriptor instances; keys that vanished are
/// dropped silently; keys new to `toggleable` are appended in schema
/// order. The result has no duplicate keys, and running the merge twice
/// against the same schema is a no-op.
pub fn reconcile(previous: &[Column], toggleable: &[Column]) -> Vec<Column> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut next = Vec::with_capacity(toggleable.len());

    for column in previous {
        if let Some(fresh) = toggleable.iter().find(|c| c.key == column.key) {
            if seen.insert(fresh.key.as_str()) {
                next.push(fresh.clone());
            }
        }
    }
    for column in toggleable {
        if seen.insert(column.key.as_str()) {
            next.push(column.clone());
        }
    }
    next
}

/// Structural equality over the sequence of column keys
///
/// Two lists are equal iff they have the same key at every position.
/// Every mutating operation consults this before committing, so that
/// structurally identical results never fire change notifications.
pub fn keys_equal(a: &[Column], b: &[Column]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key == y.key)
}

/// Rebuild the visible list in the order the caller gave
///
/// Lookup is against `previous` only: reordering operates over what is
/// already visible. Unknown ids are dropped; visible columns missing
/// from `ordered_ids` (a filtered reorder) are appended in their
/// previous relative order so the action never hides columns. An empty
/// result is a no-op returning `previous` unchanged.
pub fn reorder(previous: &[Column], ordered_ids: &[String]) -> Vec<Column> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut next = Vec::with_capacity(previous.len());

    for id in ordered_ids {
        if let Some(column) = previous.iter().find(|c| &c.key == id) {
            if used.insert(column.key.as_str()) {
                next.push(column.clone());
            }
        }
    }
    for column in previous {
        if !used.contains(column.key.as_str()) {
            next.push(column.clone());
        }
    }

    if next.is_empty() {
        previous.to_vec()
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::descriptor::ColumnDescriptor;

    fn schema(keys: &[&str]) -> Vec<Column> {
        Column::from_schema(
            &keys
                .iter()
                .map(|k| ColumnDescriptor::with_id(*k, k.to_uppercase()))
                .collect::<Vec<_>>(),
        )
    }

    fn keys(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.key.as_str()).collect()
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partition_preserves_schema_order() {
        let columns = schema(&["select", "name", "status"]);
        let (locked, toggleable) = partition(&columns, &ids(&["select"]));
        assert_eq!(keys(&locked), vec!["select"]);
        assert_eq!(keys(&toggleable), vec!["name", "status"]);
    }

    #[test]
    fn test_partition_empty_locked_defaults_to_select() {
        let columns = schema(&["select", "name"]);
        let (locked, toggleable) = partition(&columns, &[]);
        assert_eq!(keys(&locked), vec!["select"]);
        assert_eq!(keys(&toggleable), vec!["name"]);
    }

    #[test]
    fn test_partition_multiple_locked() {
        let columns = schema(&["a", "select", "b", "actions"]);
        let (locked, toggleable) = partition(&columns, &ids(&["actions", "select"]));
        assert_eq!(keys(&locked), vec!["select", "actions"]);
        assert_eq!(keys(&toggleable), vec!["a", "b"]);
    }

    #[test]
    fn test_initialize_visible_honors_caller_order() {
        let toggleable = schema(&["name", "qty", "status"]);
        let visible = initialize_visible(&toggleable, Some(&ids(&["status", "name"])));
        assert_eq!(keys(&visible), vec!["status", "name"]);
    }

    #[test]
    fn test_initialize_visible_drops_unknown_ids() {
        let toggleable = schema(&["name", "status"]);
        let visible = initialize_visible(&toggleable, Some(&ids(&["ghost", "status"])));
        assert_eq!(keys(&visible), vec!["status"]);
    }

    #[test]
    fn test_initialize_visible_all_unknown_degrades_to_everything() {
        let toggleable = schema(&["name", "status"]);
        let visible = initialize_visible(&toggleable, Some(&ids(&["ghost", "phantom"])));
        assert_eq!(keys(&visible), vec!["name", "status"]);
    }

    #[test]
    fn test_initialize_visible_none_shows_everything() {
        let toggleable = schema(&["name", "status"]);
        let visible = initialize_visible(&toggleable, None);
        assert_eq!(keys(&visible), vec!["name", "status"]);
    }

    #[test]
    fn test_reconcile_drops_vanished_keeps_order_appends_new() {
        let previous = schema(&["status", "name", "owner"]);
        let toggleable = schema(&["name", "qty", "status"]);
        let next = reconcile(&previous, &toggleable);
        assert_eq!(keys(&next), vec!["status", "name", "qty"]);
    }

    #[test]
    fn test_reconcile_rebinds_to_new_descriptor_instances() {
        let previous = schema(&["name"]);
        let toggleable = Column::from_schema(&[ColumnDescriptor::with_id("name", "Full Name")]);
        let next = reconcile(&previous, &toggleable);
        assert_eq!(next[0].header(), "Full Name");
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let previous = schema(&["c", "a"]);
        let toggleable = schema(&["a", "b", "c", "d"]);
        let once = reconcile(&previous, &toggleable);
        let twice = reconcile(&once, &toggleable);
        assert!(keys_equal(&once, &twice));
        assert_eq!(keys(&once), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_reconcile_no_duplicate_keys() {
        // Duplicate keys in the previous list collapse to one survivor
        let mut previous = schema(&["a", "b"]);
        previous.push(previous[0].clone());
        let toggleable = schema(&["a", "b"]);
        let next = reconcile(&previous, &toggleable);
        assert_eq!(keys(&next), vec!["a", "b"]);
    }

    #[test]
    fn test_reconcile_empty_schema_empties_visible() {
        let previous = schema(&["a", "b"]);
        let next = reconcile(&previous, &[]);
        assert!(next.is_empty());
    }

    #[test]
    fn test_keys_equal_ignores_descriptor_identity() {
        let a = schema(&["x", "y"]);
        let b = Column::from_schema(&[
            ColumnDescriptor::with_id("x", "Other Header"),
            ColumnDescriptor::with_id("y", "Labels Differ"),
        ]);
        assert!(keys_equal(&a, &b));
        assert!(!keys_equal(&a, &schema(&["y", "x"])));
        assert!(!keys_equal(&a, &schema(&["x"])));
    }

    #[test]
    fn test_reorder_full_permutation() {
        let previous = schema(&["a", "b", "c"]);
        let next = reorder(&previous, &ids(&["c", "a", "b"]));
        assert_eq!(keys(&next), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_subset_appends_remainder_in_prior_order() {
        let previous = schema(&["a", "b", "c", "d"]);
        let next = reorder(&previous, &ids(&["c", "a"]));
        assert_eq!(keys(&next), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_reorder_unknown_ids_dropped_nothing_lost() {
        let previous = schema(&["a", "b"]);
        let next = reorder(&previous, &ids(&["ghost", "b"]));
        assert_eq!(keys(&next), vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_never_hides_the_table() {
        let previous = schema(&["a", "b"]);
        let next = reorder(&previous, &ids(&["ghost", "phantom"]));
        // No matches, so the remainder pass restores everything
        assert_eq!(keys(&next), vec!["a", "b"]);

        let empty: Vec<Column> = Vec::new();
        assert!(reorder(&empty, &ids(&["a"])).is_empty());
    }
}

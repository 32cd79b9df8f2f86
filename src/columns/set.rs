//! Stateful column set owned by a table view
//!
//! Wraps the pure operations in [`crate::columns::reconcile`] and holds
//! the one piece of state with memory across schema updates: the visible
//! column list. Every mutation is guarded by key equality so the change
//! callback fires at most once per actual change.

use std::fmt;

use crate::columns::descriptor::{Column, ColumnDescriptor};
use crate::columns::reconcile::{initialize_visible, keys_equal, partition, reconcile, reorder};

/// Callback invoked with the new visible list whenever it changes
pub type VisibleChangeCallback = Box<dyn FnMut(&[Column])>;

/// Construction options for a [`ColumnSet`]
#[derive(Debug, Clone, Default)]
pub struct ColumnSetOptions {
    /// Column ids that are always visible and rendered first
    /// (empty = the default `select` set)
    pub locked_ids: Vec<String>,
    /// Initially visible column ids, in display order
    pub initial_visible_ids: Option<Vec<String>>,
}

/// Session-scoped column state for one table view
pub struct ColumnSet {
    locked_ids: Vec<String>,
    locked: Vec<Column>,
    toggleable: Vec<Column>,
    visible: Vec<Column>,
    on_change: Option<VisibleChangeCallback>,
}

impl fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSet")
            .field("locked_ids", &self.locked_ids)
            .field("locked", &self.locked)
            .field("toggleable", &self.toggleable)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

impl ColumnSet {
    /// Build column state from an initial schema
    pub fn new(schema: &[ColumnDescriptor], options: ColumnSetOptions) -> Self {
        let columns = Column::from_schema(schema);
        let (locked, toggleable) = partition(&columns, &options.locked_ids);
        let visible = initialize_visible(&toggleable, options.initial_visible_ids.as_deref());
        Self {
            locked_ids: options.locked_ids,
            locked,
            toggleable,
            visible,
            on_change: None,
        }
    }

    /// Register a callback fired when the visible list actually changes
    pub fn on_visible_change(&mut self, callback: impl FnMut(&[Column]) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Apply a changed schema: re-partition and reconcile the visible list
    pub fn set_schema(&mut self, schema: &[ColumnDescriptor]) {
        let columns = Column::from_schema(schema);
        let (locked, toggleable) = partition(&columns, &self.locked_ids);
        self.locked = locked;
        let next = reconcile(&self.visible, &toggleable);
        self.toggleable = toggleable;
        self.commit(next);
    }

    /// Make a toggleable column visible (appended after current columns)
    pub fn show(&mut self, key: &str) {
        if self.visible.iter().any(|c| c.key == key) {
            return;
        }
        if let Some(column) = self.toggleable.iter().find(|c| c.key == key).cloned() {
            let mut next = self.visible.clone();
            next.push(column);
            self.commit(next);
        }
    }

    /// Hide a visible column; unknown keys are a no-op
    pub fn hide(&mut self, key: &str) {
        let next: Vec<Column> = self
            .visible
            .iter()
            .filter(|c| c.key != key)
            .cloned()
            .collect();
        self.commit(next);
    }

    /// Replace the visible list with the given ids, in that order
    ///
    /// Degrades like initialization: unknown ids dropped, an empty match
    /// falls back to all toggleable columns.
    pub fn set_visible_ids(&mut self, ids: &[String]) {
        let next = initialize_visible(&self.toggleable, Some(ids));
        self.commit(next);
    }

    /// Apply a user drag-reorder over the visible columns
    pub fn reorder(&mut self, ordered_ids: &[String]) {
        let next = reorder(&self.visible, ordered_ids);
        self.commit(next);
    }

    /// Locked columns, in schema order
    pub fn locked(&self) -> &[Column] {
        &self.locked
    }

    /// The universe of columns the user may show/hide/reorder
    pub fn toggleable(&self) -> &[Column] {
        &self.toggleable
    }

    /// Currently visible toggleable columns, in display order
    pub fn visible(&self) -> &[Column] {
        &self.visible
    }

    /// What the table renders: locked columns first, then visible ones
    pub fn displayed(&self) -> Vec<Column> {
        let mut displayed = self.locked.clone();
        displayed.extend(self.visible.iter().cloned());
        displayed
    }

    fn commit(&mut self, next: Vec<Column>) {
        if keys_equal(&self.visible, &next) {
            return;
        }
        self.visible = next;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.visible);
        }
    }
}

//! Column state module - descriptors, partitioning, and reconciliation
//!
//! A table view feeds its column schema through this module to get a
//! stable locked/toggleable/visible split. The pure functions in
//! [`reconcile`] do the actual work; [`set::ColumnSet`] is the thin
//! stateful wrapper a view holds onto across schema changes.

pub mod descriptor;
pub mod reconcile;
pub mod set;

pub use descriptor::{AccessorKey, Column, ColumnDescriptor};
pub use reconcile::{
    initialize_visible, keys_equal, partition, reconcile, reorder, DEFAULT_LOCKED_IDS,
};
pub use set::{ColumnSet, ColumnSetOptions};

//! JSON encoder: array of objects keyed by column key, pretty-printed

use serde_json::{Map, Value};

use crate::export::Grid;

pub(crate) fn encode(grid: &Grid) -> String {
    let items: Vec<Value> = grid
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for (key, cell) in grid.keys.iter().zip(row) {
                object.insert(key.clone(), Value::String(cell.clone()));
            }
            Value::Object(object)
        })
        .collect();
    // Serializing a string-only Value tree cannot fail
    serde_json::to_string_pretty(&Value::Array(items)).unwrap_or_else(|_| "[]".to_string())
}

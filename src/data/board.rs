//! Raw project items to a board of columns.

use super::{sort_columns, Board, Column};
use crate::integrations::github::ProjectItem;
use std::collections::HashMap;

/// Name of the single-select field whose value picks the column
pub const STATUS_FIELD: &str = "Status";

/// Group items into columns by their Status value, then order the columns.
///
/// Items without a Status value are not placed on the board. Within a
/// column, items keep the order they were encountered in.
pub fn build_board(items: &[ProjectItem]) -> Board {
    let mut columns: HashMap<String, Column> = HashMap::new();

    for raw in items {
        for value in &raw.field_values {
            if value.field_name() != Some(STATUS_FIELD) {
                continue;
            }
            let Some(status) = value.selected_option() else {
                continue;
            };

            columns
                .entry(status.to_string())
                .or_insert_with(|| Column::new(status))
                .items
                .push(raw.to_item());
        }
    }

    // HashMap order is arbitrary; sort every time values are collected.
    let columns = sort_columns(columns.into_values().collect());
    tracing::debug!(columns = columns.len(), "Built board");

    Board { columns }
}

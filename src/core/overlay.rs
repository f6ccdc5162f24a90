//! Change overlay: shows pending changes on top of a rendered table.

use crate::models::{Annotation, Change, ChangeStatus, RenderedTable, RowKey, TableDescriptor};
use crate::utils::formatting::display_value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Changes grouped by the row they target, each group in input order.
#[derive(Debug, Default)]
pub struct ChangeIndex<'a> {
    by_row: HashMap<RowKey, Vec<&'a Change>>,
}

impl<'a> ChangeIndex<'a> {
    pub fn build(changes: &'a [Change]) -> Self {
        let mut by_row: HashMap<RowKey, Vec<&'a Change>> = HashMap::new();
        for change in changes {
            match change.target() {
                Some(key) => by_row.entry(key).or_default().push(change),
                None => debug!(change_id = change.id, "change without data_id ignored"),
            }
        }
        Self { by_row }
    }

    pub fn changes_for(&self, key: &RowKey) -> &[&'a Change] {
        self.by_row.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn targets(&self) -> impl Iterator<Item = &RowKey> {
        self.by_row.keys()
    }
}

/// Keeps only changes in the given review state.
pub fn filter_by_status(changes: &[Change], status: ChangeStatus) -> Vec<Change> {
    changes
        .iter()
        .filter(|c| c.status == status)
        .cloned()
        .collect()
}

/// Overlays `changes` on `rendered`.
///
/// Every change whose row and column exist adds one annotation to the
/// matching cell; several changes to one cell all stay visible, oldest
/// first. Changes to unknown rows or unbound fields are dropped. With no
/// changes the table is returned untouched.
///
/// Applying a second change set to an already annotated table appends to
/// it; re-render from records first to start clean.
pub fn apply_changes(
    table: &TableDescriptor,
    mut rendered: RenderedTable,
    changes: &[Change],
) -> RenderedTable {
    if changes.is_empty() {
        return rendered;
    }

    let index = ChangeIndex::build(changes);

    // first occurrence of a key wins
    let mut row_ix: HashMap<RowKey, usize> = HashMap::new();
    for (ix, row) in rendered.rows.iter().enumerate() {
        let Some(key) = &row.key else { continue };
        if row_ix.contains_key(key) {
            warn!(key = %key, "duplicate row key, changes go to the first row");
        } else {
            row_ix.insert(key.clone(), ix);
        }
    }

    // first column bound to a field wins, like rows
    for (ix, column) in table.columns.iter().enumerate() {
        if let Some(name) = column.field_name.as_deref()
            && table.column_index(name) != Some(ix)
        {
            warn!(field = name, "field bound to more than one column, changes go to the first");
        }
    }

    for key in index.targets() {
        if !row_ix.contains_key(key) {
            debug!(key = %key, "changes target a row that is not in the table");
        }
    }

    let mut applied = 0usize;
    for (key, &ix) in &row_ix {
        for change in index.changes_for(key) {
            for (field, value) in change.updates(table.id_field()) {
                let Some(col) = table.column_index(field) else {
                    debug!(change_id = change.id, field, "no column bound to changed field");
                    continue;
                };
                rendered.rows[ix].cells[col]
                    .content
                    .push_annotation(Annotation {
                        change_id: change.id,
                        value: display_value(value),
                        user_id: change.user_id.clone(),
                        note: change.note.clone().filter(|n| !n.is_empty()),
                    });
                applied += 1;
            }
        }
    }

    debug!(changes = changes.len(), applied, "overlaid changes");
    rendered
}

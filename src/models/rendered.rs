use crate::models::record::RowKey;
use serde::Serialize;

/// One pending change shown on top of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Id handed to the caller's delete handler.
    pub change_id: i64,
    pub value: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Text {
        text: String,
    },
    /// 1-based position of the row.
    RowNumber {
        number: usize,
    },
    /// Edit affordance; the caller wires `handler` to `target_id`.
    EditAction {
        #[serde(skip_serializing_if = "Option::is_none")]
        handler: Option<String>,
        target_id: String,
    },
    /// Original content superseded by one or more changes, oldest first.
    Changed {
        original: Box<CellContent>,
        annotations: Vec<Annotation>,
    },
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        CellContent::Text { text: text.into() }
    }

    pub fn empty() -> Self {
        CellContent::text(String::new())
    }

    /// Display text of the cell before any change was applied.
    pub fn base_text(&self) -> String {
        match self {
            CellContent::Text { text } => text.clone(),
            CellContent::RowNumber { number } => format!("{number}."),
            CellContent::EditAction { .. } => String::new(),
            CellContent::Changed { original, .. } => original.base_text(),
        }
    }

    /// Single-line rendering used by text, CSV, XLSX and PDF outputs.
    pub fn plain_text(&self) -> String {
        match self {
            CellContent::Changed {
                original,
                annotations,
            } => {
                let proposals: Vec<String> = annotations
                    .iter()
                    .map(|a| match &a.note {
                        Some(note) => format!("{} ({}: {})", a.value, a.user_id, note),
                        None => format!("{} ({})", a.value, a.user_id),
                    })
                    .collect();
                format!("{} => {}", original.base_text(), proposals.join("; "))
            }
            other => other.base_text(),
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        match self {
            CellContent::Changed { annotations, .. } => annotations,
            _ => &[],
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, CellContent::Changed { .. })
    }

    /// Appends a change; the first one wraps the current content as the original.
    pub fn push_annotation(&mut self, annotation: Annotation) {
        match self {
            CellContent::Changed { annotations, .. } => annotations.push(annotation),
            current => {
                let original = std::mem::replace(current, CellContent::empty());
                *current = CellContent::Changed {
                    original: Box::new(original),
                    annotations: vec![annotation],
                };
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub class: String,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<RowKey>,
    pub cells: Vec<Cell>,
}

impl RenderedRow {
    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.content.plain_text()).collect()
    }
}

/// Rendered table body: rows in input order, cells in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub rows: Vec<RenderedRow>,
}

impl RenderedTable {
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// All cells as plain text, row by row.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(RenderedRow::texts).collect()
    }
}

pub mod change;
pub mod column;
pub mod record;
pub mod rendered;
pub mod run;

pub use change::{Change, ChangeStatus};
pub use column::{ColumnDescriptor, FieldType, TableDescriptor};
pub use record::{Record, RowKey};
pub use rendered::{Annotation, Cell, CellContent, RenderedRow, RenderedTable};
pub use run::RunRecord;

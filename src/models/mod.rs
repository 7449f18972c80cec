pub mod field;
pub mod grid;
pub mod record;
pub mod variant;

pub use field::LogicalField;
pub use grid::SheetGrid;
pub use record::{ExtractedRow, QaRecord, ScenarioSummary};
pub use variant::{HeaderMapping, HeaderMatch, HeaderVariant, HEADER_VARIANTS};

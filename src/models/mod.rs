pub mod catalog;
pub mod report;
pub mod scan;

pub use catalog::{ABILITIES, AbilityDefinition};
pub use report::{AbilitySummary, AnalysisReport, CastingTimeBreakdown, ChecklistItem};
pub use scan::{AbilityAccumulator, ScanContext};

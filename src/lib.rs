pub mod error;
pub mod models;
pub mod parsing;
pub mod utils;


// Re-exports for convenience
pub use error::AnalyzeError;
pub use models::{AbilitySummary, AnalysisReport, CastingTimeBreakdown, ChecklistItem};
pub use parsing::{analyze_file, analyze_file_or_mock, analyze_text};

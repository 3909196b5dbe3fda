pub mod analyzer;
pub mod checklist;
pub mod line_parser;
pub mod regex;

pub use analyzer::{analyze_file, analyze_file_or_mock, analyze_json, analyze_text};
pub use line_parser::{EventLine, parse_event_line};

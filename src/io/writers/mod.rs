pub mod json;
pub mod markdown;
pub mod sections;
pub mod terminal;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use sections::{report_sections, Section};
pub use terminal::TerminalWriter;

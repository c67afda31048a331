pub mod assembler;
pub mod console;
pub mod formatter;
pub mod mermaid;

pub use assembler::{build_json_report, build_markdown_report, write_reports, ReportMeta, ReportPaths};
pub use mermaid::MermaidExporter;

//! Output configuration types

/// How matched rows are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line (pipe-friendly)
    #[default]
    Lines,
    Table,
    Csv,
    Json,
    /// Only the number of rows
    Count,
}

impl OutputFormat {
    /// Machine-readable formats keep the summary off stdout.
    pub fn summary_to_stderr(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Json)
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub use_color: bool,
}

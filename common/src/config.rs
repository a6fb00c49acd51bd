use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Colored terminal report.
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("unknown format '{s}', expected text, json or csv")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// 0 prints the full report, 1 drops banner and headers, 2 keeps only result lines.
    pub quiet: u8,
    pub no_banner: bool,
    /// Rejects CIDR input with host bits set instead of normalizing it.
    pub strict: bool,
    pub format: OutputFormat,
    /// Field delimiter for CSV output.
    pub delimiter: char,
    /// Writes the rendered export here instead of stdout.
    pub output: Option<PathBuf>,
}

impl Config {
    /// True when results are shown as the colored terminal report rather than exported.
    pub fn renders_to_terminal(&self) -> bool {
        self.format == OutputFormat::Text && self.output.is_none()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            strict: false,
            format: OutputFormat::Text,
            delimiter: ',',
            output: None,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use clap::ValueEnum;
use tracegraph_core::format::OutputFormat;

/// Command-line spelling of [`OutputFormat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
    Records,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Records => OutputFormat::Records,
        }
    }
}

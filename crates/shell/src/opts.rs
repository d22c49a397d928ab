use clap::{Parser, ValueEnum};

use benchstock_observability::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "benchstock")]
#[command(bin_name = "benchstock")]
#[command(version, about = "Interactive parts inventory for the electronics workbench", long_about = None)]
pub(crate) struct Opts {
    /// Log record format. Records go to stderr; filter them with RUST_LOG
    #[arg(long, value_enum, env = "BENCHSTOCK_LOG_FORMAT", default_value_t = LogFormatArg::Pretty)]
    pub(crate) log_format: LogFormatArg,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

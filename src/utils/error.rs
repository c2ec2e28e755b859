use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeCheckError {
    #[error("The '{program}' command was not found")]
    ToolNotFound { program: String },

    #[error("Failed to launch '{program}': {source}")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` exited with {}: {stderr}", describe_status(.status))]
    NonZeroExit {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Failed to decode JSON output: {source}")]
    MalformedJson {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response format: {document}")]
    UnexpectedSchema { document: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// datasets 不在 PATH 或無法啟動
    Environment,
    /// datasets 執行失敗
    Tool,
    /// 輸出無法解讀
    Response,
    Configuration,
}

pub(crate) fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("return code {}", code),
        None => "no return code (terminated by signal)".to_string(),
    }
}

impl GenomeCheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolNotFound { .. } | Self::LaunchFailed { .. } => ErrorCategory::Environment,
            Self::NonZeroExit { .. } => ErrorCategory::Tool,
            Self::MalformedJson { .. } | Self::UnexpectedSchema { .. } => ErrorCategory::Response,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ToolNotFound { .. } => {
                "Please ensure the NCBI Datasets command line tool is installed and in your PATH \
                 (it is included in the conda package 'ncbi-datasets-cli')"
            }
            Self::LaunchFailed { .. } => "Check that the datasets executable is readable and executable",
            Self::NonZeroExit { .. } => {
                "Check the species name and your network connection, then try again"
            }
            Self::MalformedJson { .. } | Self::UnexpectedSchema { .. } => {
                "The datasets output format may have changed; try updating the NCBI Datasets tool"
            }
            Self::ConfigError { .. } => "Fix the query configuration values",
        }
    }

    /// Multi-line diagnostic intended for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ToolNotFound { program } => {
                format!("Error: The '{}' command was not found.", program)
            }
            Self::LaunchFailed { source, .. } => {
                format!("An unexpected error occurred: {}", source)
            }
            Self::NonZeroExit {
                command,
                status,
                stderr,
            } => format!(
                "Error running NCBI datasets command:\nCommand: {}\nReturn Code: {}\nStderr: {}",
                command,
                status.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string()),
                stderr
            ),
            Self::MalformedJson { raw, source } => format!(
                "Error: Failed to decode JSON output from NCBI datasets ({}).\nReceived output:\n{}",
                source, raw
            ),
            Self::UnexpectedSchema { document } => format!(
                "Error: 'total_count' key not found in NCBI datasets output.\nReceived JSON data:\n{}",
                document
            ),
            Self::ConfigError { message } => format!("Error: invalid configuration: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenomeCheckError>;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::QueryConfig;
pub use crate::core::{check::GenomeChecker, executor::DatasetsExecutor};
pub use domain::model::{Advisory, CommandInvocation, ExecutionOutcome, GenomeCount};
pub use utils::error::{GenomeCheckError, Result};

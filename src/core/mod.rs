pub mod check;
pub mod executor;
pub mod interpreter;

pub use crate::domain::model::{Advisory, CommandInvocation, ExecutionOutcome, GenomeCount};
pub use crate::domain::ports::QueryRunner;
pub use crate::utils::error::Result;

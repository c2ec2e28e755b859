use crate::domain::model::{CommandInvocation, ExecutionOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Runs a command invocation to completion.
///
/// A non-zero exit is a normal outcome, not an error. Implementations only
/// return `Err` when the program could not be started at all.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    async fn run(&self, invocation: &CommandInvocation) -> Result<ExecutionOutcome>;
}

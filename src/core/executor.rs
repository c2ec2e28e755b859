use crate::core::{CommandInvocation, ExecutionOutcome, QueryRunner};
use crate::utils::error::{GenomeCheckError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;

/// Runs `datasets` (or whatever program the invocation names) as a child
/// process and captures its output. Waits for as long as the child runs.
#[derive(Debug, Clone, Default)]
pub struct DatasetsExecutor;

impl DatasetsExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryRunner for DatasetsExecutor {
    async fn run(&self, invocation: &CommandInvocation) -> Result<ExecutionOutcome> {
        tracing::debug!("Running command: {}", invocation);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => GenomeCheckError::ToolNotFound {
                    program: invocation.program.clone(),
                },
                _ => GenomeCheckError::LaunchFailed {
                    program: invocation.program.clone(),
                    source: e,
                },
            })?;

        let outcome = ExecutionOutcome {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(
            "Command finished with status {:?} ({} bytes stdout, {} bytes stderr)",
            outcome.status,
            outcome.stdout.len(),
            outcome.stderr.len()
        );

        Ok(outcome)
    }
}

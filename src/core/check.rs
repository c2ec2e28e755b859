use crate::config::QueryConfig;
use crate::core::{interpreter, GenomeCount, QueryRunner};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs one `datasets` query for a species and interprets the result.
pub struct GenomeChecker<R: QueryRunner> {
    runner: R,
    query: QueryConfig,
}

impl<R: QueryRunner> GenomeChecker<R> {
    pub fn new(runner: R, query: QueryConfig) -> Self {
        Self { runner, query }
    }

    pub async fn check(&self, species_name: &str) -> Result<GenomeCount> {
        self.query.validate()?;

        let invocation = self.query.invocation(species_name);
        tracing::debug!("🔍 Querying RefSeq for '{}'", species_name);

        // 找不到執行檔或無法啟動時直接回傳
        let outcome = self.runner.run(&invocation).await?;

        let count = interpreter::interpret(species_name, &invocation, outcome)?;
        if let Some(advisory) = &count.advisory {
            tracing::debug!("⚠️ {}", advisory);
        }
        tracing::debug!("✅ {} complete genome(s) for '{}'", count.total, species_name);

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Advisory, CommandInvocation, ExecutionOutcome};
    use crate::utils::error::GenomeCheckError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replays a canned response and records every invocation it receives.
    #[derive(Clone)]
    struct MockRunner {
        response: Arc<dyn Fn() -> Result<ExecutionOutcome> + Send + Sync>,
        calls: Arc<Mutex<Vec<CommandInvocation>>>,
    }

    impl MockRunner {
        fn replying(status: i32, stdout: &str, stderr: &str) -> Self {
            let outcome = ExecutionOutcome {
                status: Some(status),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            };
            Self {
                response: Arc::new(move || Ok(outcome.clone())),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn missing_tool() -> Self {
            Self {
                response: Arc::new(|| {
                    Err(GenomeCheckError::ToolNotFound {
                        program: "datasets".to_string(),
                    })
                }),
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<CommandInvocation> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueryRunner for MockRunner {
        async fn run(&self, invocation: &CommandInvocation) -> Result<ExecutionOutcome> {
            self.calls.lock().unwrap().push(invocation.clone());
            (self.response)()
        }
    }

    #[tokio::test]
    async fn test_check_reports_total_count() {
        let runner = MockRunner::replying(0, r#"{"total_count": 1523}"#, "");
        let checker = GenomeChecker::new(runner.clone(), QueryConfig::default());

        let count = checker.check("Escherichia coli").await.unwrap();

        assert_eq!(count.total, 1523);
        assert!(count.advisory.is_none());

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "datasets");
        assert_eq!(calls[0].args[3], "Escherichia coli");
    }

    #[tokio::test]
    async fn test_check_empty_output_is_zero() {
        let runner = MockRunner::replying(0, "", "");
        let checker = GenomeChecker::new(runner, QueryConfig::default());

        let count = checker.check("Nonexistent species").await.unwrap();

        assert_eq!(count.total, 0);
        assert!(matches!(count.advisory, Some(Advisory::EmptyOutput { .. })));
    }

    #[tokio::test]
    async fn test_check_propagates_missing_tool() {
        let checker = GenomeChecker::new(MockRunner::missing_tool(), QueryConfig::default());

        let err = checker.check("Escherichia coli").await.unwrap_err();
        assert!(matches!(err, GenomeCheckError::ToolNotFound { .. }));
    }

    #[tokio::test]
    async fn test_check_non_zero_exit() {
        let runner = MockRunner::replying(1, "", "Error: taxon not found");
        let checker = GenomeChecker::new(runner, QueryConfig::default());

        let err = checker.check("Nonexistent species").await.unwrap_err();
        match err {
            GenomeCheckError::NonZeroExit { status, stderr, .. } => {
                assert_eq!(status, Some(1));
                assert_eq!(stderr, "Error: taxon not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_config_never_runs() {
        let runner = MockRunner::replying(0, r#"{"total_count": 1}"#, "");
        let checker = GenomeChecker::new(runner.clone(), QueryConfig::with_program("  "));

        let err = checker.check("Escherichia coli").await.unwrap_err();

        assert!(matches!(err, GenomeCheckError::ConfigError { .. }));
        assert!(runner.calls().is_empty());
    }
}

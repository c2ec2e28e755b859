use std::fmt;

/// A fully resolved `datasets` command line, kept as an argument vector so the
/// species name is never re-split or interpreted by a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(self.args.iter());
        f.write_str(&shell_words::join(words))
    }
}

/// Captured result of one child process run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// `None` when the child was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Reasons a successful lookup still deserves a note on stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    EmptyOutput { species: String },
    NonIntegerCount { value: String },
    MissingTotalCount { document: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::EmptyOutput { species } => write!(
                f,
                "No output received from NCBI datasets for '{}'. \
                 Perhaps the species name is misspelled or has no matching assemblies?",
                species
            ),
            Advisory::NonIntegerCount { value } => write!(
                f,
                "Warning: 'total_count' field was not an integer. Value: {}. Treating it as 0.",
                value
            ),
            Advisory::MissingTotalCount { document } => write!(
                f,
                "'total_count' key not found in NCBI datasets output:\n{}\n\
                 Interpreting lack of 'total_count' as 0 assemblies found.",
                document
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeCount {
    pub total: u64,
    pub advisory: Option<Advisory>,
}

impl GenomeCount {
    pub fn exact(total: u64) -> Self {
        Self {
            total,
            advisory: None,
        }
    }

    pub fn zero_with(advisory: Advisory) -> Self {
        Self {
            total: 0,
            advisory: Some(advisory),
        }
    }
}

use crate::domain::model::CommandInvocation;
use crate::utils::error::Result;
use crate::utils::validation::{validate_argument, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DATASETS_PROGRAM: &str = "datasets";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "refseq-check")]
#[command(about = "Check NCBI RefSeq for the number of complete genomes for a given species.")]
pub struct CliConfig {
    /// The scientific name of the species (e.g., "Escherichia coli"). Please enclose in quotes if it contains spaces.
    pub species_name: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// The fixed parts of the `datasets` query. The CLI always uses `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    pub program: String,
    pub report: String,
    pub assembly_level: String,
    pub assembly_source: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            program: DATASETS_PROGRAM.to_string(),
            report: "counts".to_string(),
            assembly_level: "complete".to_string(),
            assembly_source: "RefSeq".to_string(),
        }
    }
}

impl QueryConfig {
    /// Same query, different executable. Used to point at a specific binary.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// `<program> summary genome taxon <species> --report .. --assembly-level .. --assembly-source ..`
    pub fn invocation(&self, species_name: &str) -> CommandInvocation {
        let args = vec![
            "summary".to_string(),
            "genome".to_string(),
            "taxon".to_string(),
            species_name.to_string(),
            "--report".to_string(),
            self.report.clone(),
            "--assembly-level".to_string(),
            self.assembly_level.clone(),
            "--assembly-source".to_string(),
            self.assembly_source.clone(),
        ];
        CommandInvocation::new(self.program.clone(), args)
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> Result<()> {
        validate_argument("program", &self.program)?;
        validate_argument("report", &self.report)?;
        validate_argument("assembly_level", &self.assembly_level)?;
        validate_argument("assembly_source", &self.assembly_source)?;
        Ok(())
    }
}

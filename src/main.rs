use clap::Parser;
use refseq_check::utils::logger;
use refseq_check::{CliConfig, DatasetsExecutor, GenomeChecker, QueryConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌 (stderr)
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let species = &config.species_name;
    println!("Checking RefSeq for complete genomes of: '{}'", species);

    let checker = GenomeChecker::new(DatasetsExecutor::new(), QueryConfig::default());

    match checker.check(species).await {
        Ok(count) => {
            if let Some(advisory) = &count.advisory {
                eprintln!("{}", advisory);
            }
            println!(
                "Found {} complete RefSeq genome(s) for '{}'.",
                count.total, species
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Genome count lookup failed (Category: {:?})", e.category());
            tracing::debug!("Error detail: {:?}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            println!("Failed to retrieve genome count for '{}'.", species);
            std::process::exit(1);
        }
    }
}

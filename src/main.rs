use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use sbt_package_resolver::config::{self, ResolverConfig};
use sbt_package_resolver::logging::init_logging;
use sbt_package_resolver::version::lookup::ReleaseLookup;

#[derive(Parser)]
#[command(name = "sbt-package-resolver")]
#[command(version, about = "Find published versions of sbt packages")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write logs to the data directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up releases of a package
    Lookup {
        /// Package coordinates, e.g. org.typelevel:cats-core_2.13
        package: String,

        /// Registry to search; repeat to hunt several in order
        #[arg(long = "registry-url")]
        registry_urls: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.then(config::log_path);
    let _guard = init_logging(cli.verbose, log_path.as_deref());

    let base_config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };

    match cli.command {
        Command::Lookup {
            package,
            registry_urls,
        } => {
            let config = base_config.with_registry_urls(registry_urls);
            debug!("Registries: {:?}", config.registry_urls);

            let lookup = ReleaseLookup::from_config(&config)?;
            let result = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(lookup.get_releases(&package))?;

            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

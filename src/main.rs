use clap::Parser;
use documenter_index::cli::{Cli, Commands};
use documenter_index::commands::{
    ListFilter, execute_check, execute_emit, execute_list, execute_stats,
};
use documenter_index::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    documenter_index::tracing::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Check { path } => execute_check(&config.index_path(path)?),
        Commands::Stats { path } => execute_stats(&config.index_path(path)?),
        Commands::List {
            path,
            category,
            page,
            limit,
        } => {
            let filter = ListFilter {
                category,
                page,
                limit,
            };
            execute_list(&config.index_path(path)?, &filter, &config)
        }
        Commands::Emit {
            path,
            format,
            variable,
        } => execute_emit(
            &config.index_path(path)?,
            format,
            variable.as_deref(),
            &config,
        ),
    }
    .inspect_err(|e| tracing::error!("{:#}", e))?;

    print!("{}", output);
    Ok(())
}

use anyhow::Result;
use citadash::cli::{Cli, Commands};
use citadash::commands;
use citadash::config;
use citadash::formatting::FormattingConfig;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    formatting.apply();

    let base_url = config::base_url(cli.url.as_deref());

    match cli.command {
        Commands::Dashboard { period } => commands::dashboard::run(period.into(), &base_url),
        Commands::List {
            phone,
            status,
            search,
            from,
            to,
            doctor,
            sort,
            facets,
        } => commands::list::run(
            commands::list::ListConfig {
                phone,
                status,
                search,
                from,
                to,
                doctor,
                sort,
                facets,
            },
            &base_url,
        ),
        Commands::Book {
            name,
            phone,
            email,
            datetime,
            doctor,
        } => commands::book::run(
            commands::book::BookConfig {
                name,
                phone,
                email,
                datetime,
                doctor,
            },
            &base_url,
        ),
        Commands::Cancel { id, yes } => commands::cancel::run(id, yes, &base_url),
        Commands::Doctors { command } => commands::doctors::run(command, &base_url),
        Commands::Status => commands::status::run(&base_url),
    }
}

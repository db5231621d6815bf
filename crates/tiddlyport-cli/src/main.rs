use anyhow::Result;
use clap::Parser;
use tiddlyport_parser::Dialect;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tiddlyport_cli::{
    cli::{Cli, Commands},
    commands,
    config::CliConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())?;

    // RUST_LOG wins over flags and config
    let level = config.log_filter(cli.log_level, cli.verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    debug!(%level, "logging initialised");

    match cli.command {
        Commands::ToMarkdown { file } => commands::convert::execute(file, Dialect::Wikitext),
        Commands::ToWikitext { file } => commands::convert::execute(file, Dialect::Markdown),
        Commands::Parse { dialect, file } => commands::parse::execute(file, dialect.into()),
        Commands::Export {
            input,
            toc,
            output,
            no_front_matter,
        } => commands::export::execute(&config, input, toc, output, no_front_matter),
        Commands::Import { dir, output } => commands::import::execute(&config, dir, output),
        Commands::Tree { input, toc } => commands::tree::execute(&config, input, toc),
    }
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tiddlyport_parser::Dialect;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Source dialect for the `parse` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DialectArg {
    /// TiddlyWiki wikitext
    Wikitext,
    /// Obsidian Markdown
    Markdown,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Wikitext => Dialect::Wikitext,
            DialectArg::Markdown => Dialect::Markdown,
        }
    }
}

#[derive(Parser)]
#[command(name = "tiddlyport")]
#[command(about = "tiddlyport - Convert notes between TiddlyWiki and Markdown vaults")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/tiddlyport/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert one wikitext body to Markdown (stdin when FILE is omitted)
    #[command(name = "to-markdown")]
    ToMarkdown {
        /// Wikitext file to read
        file: Option<PathBuf>,
    },

    /// Convert one Markdown body to wikitext (stdin when FILE is omitted)
    #[command(name = "to-wikitext")]
    ToWikitext {
        /// Markdown file to read
        file: Option<PathBuf>,
    },

    /// Print the parse tree of a body as JSON
    Parse {
        /// Dialect of the input
        #[arg(value_enum)]
        dialect: DialectArg,

        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Write a TiddlyWiki JSON export out as a Markdown vault
    Export {
        /// TiddlyWiki JSON export (array of tiddlers)
        input: PathBuf,

        /// Title of the table of contents tiddler that roots the folder tree
        #[arg(long)]
        toc: Option<String>,

        /// Vault directory to write into (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not open notes with a tags front matter block
        #[arg(long)]
        no_front_matter: bool,
    },

    /// Read a Markdown vault into TiddlyWiki JSON
    Import {
        /// Vault directory to read
        dir: PathBuf,

        /// JSON file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show where each tiddler would land, without writing anything
    Tree {
        /// TiddlyWiki JSON export (array of tiddlers)
        input: PathBuf,

        /// Title of the table of contents tiddler that roots the folder tree
        #[arg(long)]
        toc: Option<String>,
    },
}

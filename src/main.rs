use std::path::PathBuf;

use cfind::Search;
use cfind_core::config::Config;
use cfind_core::{Highlighter, Matcher, MatcherKind};
use cfind_walk::Walker;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cfind", about = "Search for files and directories by name")]
struct Cli {
    /// Terms you are searching for; a name must contain all of them.
    #[arg(value_name = "SEARCH_TERM", required = true)]
    search_terms: Vec<String>,

    /// Ignore case distinctions, so that characters that differ only in case
    /// match each other.
    #[arg(short, long)]
    ignore_case: bool,

    /// Treat each term as a regular expression.
    #[arg(short, long)]
    regex: bool,

    /// Restrict regular expressions to the basic dialect.
    #[arg(long)]
    basic_regex: bool,

    /// Directory to search from.
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Print names without highlight markers.
    #[arg(long)]
    no_color: bool,

    /// Skip hidden files and directories.
    #[arg(long)]
    skip_hidden: bool,

    /// Follow symbolic links.
    #[arg(short = 'L', long)]
    follow: bool,

    /// Honour .gitignore and .ignore files.
    #[arg(long)]
    respect_ignore: bool,

    /// Descend at most this many levels below the root.
    #[arg(short = 'd', long, value_name = "N")]
    max_depth: Option<usize>,

    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Apply command-line flags on top of the loaded configuration.
    fn apply(&self, config: &mut Config) {
        config.search.ignore_case |= self.ignore_case;
        if self.regex {
            config.search.mode = MatcherKind::Regex;
        }
        if self.basic_regex {
            config.search.advanced_syntax = false;
        }
        if self.no_color {
            config.highlight.color = false;
        }
        if self.skip_hidden {
            config.walk.hidden = false;
        }
        config.walk.follow_links |= self.follow;
        config.walk.respect_ignore_files |= self.respect_ignore;
        if self.max_depth.is_some() {
            config.walk.max_depth = self.max_depth;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("cfind debug log started");
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config unreadable, using defaults");
        Config::defaults()
    });
    cli.apply(&mut config);
    tracing::debug!(?config, "effective configuration");

    let search = Search::new(
        Matcher::from_config(&config.search),
        Highlighter::new(config.highlight.markers()),
        cli.search_terms,
    );
    let walker = Walker::new(cli.root, &config.walk);

    let stdout = std::io::stdout();
    search.run(walker.walk(), stdout.lock())?;
    Ok(())
}

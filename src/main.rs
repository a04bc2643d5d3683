use std::path::PathBuf;

use clap::{Parser, Subcommand};

use gopkg_page::commands;
use gopkg_page::config::{PageConfig, log_path};

#[derive(Parser)]
#[command(name = "gopkg-page")]
#[command(version, about = "Landing page renderer for versioned Go package paths")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/gopkg-page/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Also write logs to a file (defaults to the data directory)
    #[arg(long, global = true, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the landing page of an import path
    Render {
        /// Import path, e.g. gopkg.in/yaml.v2
        import_path: String,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Known versions; skips the GitHub lookup when given
        #[arg(long = "version", value_name = "VERSION")]
        versions: Vec<String>,
    },
    /// Print the latest version of each major line
    Versions {
        import_path: String,
        #[arg(long = "version", value_name = "VERSION")]
        versions: Vec<String>,
    },
    /// Print the identifier-safe alias of a package name
    CleanName { name: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    let _guard = gopkg_page::logging::init(cli.log_json, log_file.as_deref())?;

    let config = PageConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            import_path,
            output,
            versions,
        } => {
            let repo = runtime()?.block_on(commands::load_repo(&config, &import_path, &versions))?;
            commands::render(&config, &repo, output.as_deref())
        }
        Command::Versions {
            import_path,
            versions,
        } => {
            let repo = runtime()?.block_on(commands::load_repo(&config, &import_path, &versions))?;
            commands::print_versions(&repo, &mut std::io::stdout().lock())
        }
        Command::CleanName { name } => {
            commands::print_clean_name(&name, &mut std::io::stdout().lock())
        }
    }
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
}

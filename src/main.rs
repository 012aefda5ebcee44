//! CLI entry point for notebrowse

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use notebrowse::config::{self, Settings, resolve_path};
use notebrowse::server::{NotesServer, ServerOptions, shutdown_signal};
use notebrowse::{TreeWalker, build_snapshot, logging, output_folder, write_snapshot};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "notebrowse")]
#[command(about = "Browse a folder of markdown notes over HTTP or as a static JSON snapshot")]
#[command(version)]
struct Args {
    /// Notes root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Settings file (default: <root>/notebrowse.toml, optional)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the whole note tree, with content, to one JSON file
    Generate {
        /// Output file (default: client/data.json under the root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the notes API and the static client
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served at the site root (default: client under the root)
        #[arg(long = "static-dir")]
        static_dir: Option<PathBuf>,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(args) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> CliResult {
    let root = args
        .root
        .canonicalize()
        .map_err(|e| format!("cannot access '{}': {}", args.root.display(), e))?;
    let settings = match &args.config {
        Some(path) => config::load_settings_file(path)?,
        None => config::load_settings(&root)?,
    };

    match args.command {
        Command::Generate { output } => generate(&root, &settings, output),
        Command::Serve {
            host,
            port,
            static_dir,
        } => {
            let options = ServerOptions {
                static_dir: resolve_path(&root, static_dir.as_ref().unwrap_or(&settings.static_dir)),
                host: host.unwrap_or_else(|| settings.server.host.clone()),
                port: port.unwrap_or(settings.server.port),
                walker: settings.server_walker(),
                root,
            };
            serve(options)
        }
    }
}

fn generate(root: &Path, settings: &Settings, output: Option<PathBuf>) -> CliResult {
    let output = resolve_path(root, output.as_ref().unwrap_or(&settings.generator.output));

    info!("Generating static data from {}", root.display());
    let mut config = settings.generator_walker();
    if let Some(folder) = output_folder(root, &output) {
        config = config.with_excluded_name(folder);
    }
    let walker = TreeWalker::new(config);
    let snapshot = build_snapshot(root, &walker);
    write_snapshot(&output, &snapshot)?;
    info!(
        folders = snapshot.folders.len(),
        "Static data generated at: {}",
        output.display()
    );
    Ok(())
}

fn serve(options: ServerOptions) -> CliResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = NotesServer::bind(options).await?;
        server.run(shutdown_signal()).await
    })?;
    Ok(())
}

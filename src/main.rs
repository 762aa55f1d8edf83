//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Render a directory of markdown posts into blog records", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or tags
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Fail if any post could not be loaded
        #[arg(long)]
        strict: bool,
    },

    /// Show a single post
    Show {
        /// Slug of the post (file name without extension)
        slug: String,

        /// Print the whole post as JSON instead of its HTML
        #[arg(long)]
        json: bool,
    },

    /// Render a markdown file to HTML
    Render {
        /// Markdown file to render
        file: PathBuf,
    },

    /// Start the HTTP server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List { r#type, strict } => {
            let blog = folio::Blog::new(&base_dir)?;
            folio::commands::list::run(&blog, &r#type, strict)?;
        }

        Commands::Show { slug, json } => {
            let blog = folio::Blog::new(&base_dir)?;
            folio::commands::show::run(&blog, &slug, json)?;
        }

        Commands::Render { file } => {
            let file = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            folio::commands::render::run(&file)?;
        }

        Commands::Server { port, ip } => {
            let blog = folio::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

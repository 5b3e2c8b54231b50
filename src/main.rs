use anyhow::Result;
use clap::{Parser, Subcommand};

/// mysite - polls
#[derive(Parser)]
#[command(name = "mysite")]
#[command(about = "Polls web application", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Create a back-office account
    CreateAdmin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },
    /// Add a question with its choices
    AddQuestion {
        #[arg(long)]
        text: String,

        /// May be repeated
        #[arg(long = "choice")]
        choices: Vec<String>,

        /// YYYY-MM-DDTHH:MM in UTC, defaults to now
        #[arg(long)]
        pub_date: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mysite::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mysite::observability::init_observability(
        "mysite",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mysite::cli::serve(config, host, port).await,
        Commands::Migrate => mysite::cli::migrate(config).await,
        Commands::Reset => mysite::cli::reset(config).await,
        Commands::CreateAdmin { username, password } => {
            mysite::cli::create_admin(config, username, password).await
        }
        Commands::AddQuestion {
            text,
            choices,
            pub_date,
        } => mysite::cli::add_question(config, text, choices, pub_date).await,
    }
}

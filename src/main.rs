//! Borealis DB CLI
//!
//! A command-line tool for inspecting and editing the constellation catalog.
//! Connection parameters come from `DATABASE_*` environment variables (a
//! `.env` file is honored).

use anyhow::Result;
use borealis_db::db::{connection, constellations, ensure_schema};
use borealis_db::{logging, ConnectionConfig, NewConstellation};
use clap::{Parser, Subcommand};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "borealis-db")]
#[command(about = "Manage constellation records in PostgreSQL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the constellation table if it is missing
    InitSchema,

    /// Check database connectivity
    Ping,

    /// Insert a new constellation
    Create {
        /// Constellation name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List all constellations
    List,

    /// Show a single constellation
    Get {
        /// Constellation id
        id: Uuid,
    },

    /// Delete a constellation
    Delete {
        /// Constellation id
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    if cli.verbose {
        logging::init_with_level("debug")?;
    } else {
        logging::init()?;
    }

    let config = ConnectionConfig::from_env();

    match cli.command {
        Commands::InitSchema => {
            let pool = connection::create_pool(&config).await?;
            ensure_schema(&pool).await?;
            println!("Schema ready");
            pool.close().await;
        }

        Commands::Ping => {
            let pool = connection::create_pool(&config).await?;
            sqlx::query("SELECT 1").execute(&pool).await?;
            println!("Database connection OK ({}:{})", config.host, config.port);
            pool.close().await;
        }

        Commands::Create { name } => {
            // Session path: the record stays readable after commit
            let factory = connection::session_factory_from_env()?;
            let mut session = factory.session();
            let created = session.add(&NewConstellation { name }).await?;
            session.commit().await?;

            info!("Created constellation {}", created.id);
            println!("{}", serde_json::to_string_pretty(&created)?);
            factory.pool().close().await;
        }

        Commands::List => {
            let pool = connection::create_pool(&config).await?;
            let constellations = constellations::list_constellations(&pool).await?;

            if constellations.is_empty() {
                println!("No constellations found");
            } else {
                for constellation in &constellations {
                    println!(
                        "{}  {}",
                        constellation.id,
                        constellation.name.as_deref().unwrap_or("-")
                    );
                }
                println!("\n{} total", constellations.len());
            }
            pool.close().await;
        }

        Commands::Get { id } => {
            let pool = connection::create_pool(&config).await?;
            match constellations::get_constellation_by_id(&pool, id).await? {
                Some(constellation) => {
                    println!("{}", serde_json::to_string_pretty(&constellation)?)
                }
                None => println!("Not found: {}", id),
            }
            pool.close().await;
        }

        Commands::Delete { id } => {
            let pool = connection::create_pool(&config).await?;
            if constellations::delete_constellation(&pool, id).await? {
                println!("Deleted {}", id);
            } else {
                println!("Not found: {}", id);
            }
            pool.close().await;
        }
    }

    Ok(())
}

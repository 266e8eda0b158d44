//! recordstore CLI - album catalog data access over MySQL
//!
//! This is the entry point for the recordstore command-line tool, which
//! provides:
//! - The fixed demonstration sequence (`demo` subcommand)
//! - Listing albums by exact artist match (`list` subcommand)
//! - Fetching a single album by id (`get` subcommand)
//! - Inserting a new album (`add` subcommand)
//!
//! Credentials come from DBUSER / DBPASS (a `.env` file is honored); any
//! failure terminates the process with a non-zero exit status.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use recordstore_core::{load_dotenv, Album, NewAlbum, RecordStore, StoreConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "recordstore",
    author,
    version,
    about = "Minimal data-access layer for an album catalog in MySQL"
)]
struct Cli {
    /// Emit JSON instead of human-readable lines
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the fixed demonstration sequence against the seeded catalog
    Demo,
    /// List albums whose artist matches exactly
    List {
        /// Artist name to match (equality, not a pattern)
        artist: String,
    },
    /// Fetch a single album by id
    Get {
        /// Album id
        id: i64,
    },
    /// Insert a new album, printing the generated id
    Add {
        /// Album title
        title: String,
        /// Artist name
        artist: String,
        /// Price in dollars
        price: f64,
    },
}

/// Initialize tracing with console output
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn print_album(album: &Album, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(album)?);
    } else {
        println!(
            "[{}] {} by {} (${:.2})",
            album.id, album.title, album.artist, album.price
        );
    }
    Ok(())
}

fn print_albums(albums: &[Album], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(albums)?);
    } else {
        for album in albums {
            print_album(album, false)?;
        }
    }
    Ok(())
}

async fn run(cli: &Cli, store: &RecordStore) -> Result<()> {
    match &cli.command {
        Commands::Demo => {
            let albums = store.list_by_artist("John Coltrane").await?;
            println!("Albums found:");
            print_albums(&albums, cli.json)?;

            let album = store.get_by_id(2).await?;
            println!("Album found:");
            print_album(&album, cli.json)?;

            let id = store
                .insert(&NewAlbum::new(
                    "The Modern Sound of Betty Carter",
                    "Betty Carter",
                    49.99,
                ))
                .await?;
            println!("ID of added album: {id}");
        }
        Commands::List { artist } => {
            let albums = store.list_by_artist(artist).await?;
            print_albums(&albums, cli.json)?;
        }
        Commands::Get { id } => {
            let album = store.get_by_id(*id).await?;
            print_album(&album, cli.json)?;
        }
        Commands::Add {
            title,
            artist,
            price,
        } => {
            let id = store
                .insert(&NewAlbum::new(title.clone(), artist.clone(), *price))
                .await?;
            println!("{id}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;
    load_dotenv();

    let config = StoreConfig::from_env()?;
    let store = RecordStore::connect(&config).await?;

    let result = run(&cli, &store).await;
    store.close().await;
    result
}

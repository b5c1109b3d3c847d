// src/bin/pokedex.rs
//! Command-line driver for the catalog and the login gate

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pokedex_vault::config::Config;
use pokedex_vault::db::{open_data_db, open_secure_db, SqliteKvStore, SqliteSecretStore};
use pokedex_vault::{
    check_password, load_config, CatalogEntry, CredentialVault, HttpCatalogSource, Password,
    RecordStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// pokedex — browse, favorite and edit a local creature catalog.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set the login password (prompted, never echoed).
    Login,

    /// Check a prompted password against the stored one.
    Check,

    /// Forget the stored password.
    Logout,

    #[command(flatten)]
    Catalog(CatalogCommand),
}

/// Commands that require a stored password
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Download the catalog and replace the local copy.
    Fetch {
        /// Override the configured timeout, in milliseconds.
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// List catalog entries, optionally filtered by name.
    List {
        /// Case-insensitive name fragment.
        #[arg(long)]
        query: Option<String>,
    },

    /// Show every field of one entry.
    Show { id: u64 },

    /// List favorite entries.
    Favorites,

    /// Add or remove an entry from favorites.
    Favorite { id: u64 },

    /// Create a new entry.
    Create {
        #[arg(long)]
        name: String,

        /// Repeat for several types (e.g. --type Grass --type Poison).
        #[arg(long = "type", required = true)]
        types: Vec<String>,
    },

    /// Rename an entry.
    Rename { id: u64, name: String },

    /// Delete an entry.
    Remove { id: u64 },

    /// Show the selectable types, or replace them with --set.
    Types {
        #[arg(long, num_args = 1..)]
        set: Option<Vec<String>>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config();

    let secure_conn =
        open_secure_db().context("Failed to open secure database — is PDV_SECURE_KEY set?")?;
    let mut vault = CredentialVault::new(SqliteSecretStore::new(secure_conn));

    match cli.command {
        Commands::Login => {
            let password = prompt("Password: ")?;
            let status = check_password(password.expose_secret());
            if !status.is_valid() {
                bail!("{}", status.message());
            }
            vault.store(&password).context("Error storing password")?;
            println!("{}", status.message());
        }
        Commands::Check => {
            let password = prompt("Password: ")?;
            if !vault.verify(&password)? {
                bail!("Password does not match");
            }
            println!("Password matches");
        }
        Commands::Logout => {
            vault.clear()?;
            println!("Logged out");
        }
        Commands::Catalog(command) => {
            if !vault.is_set()? {
                bail!("No password stored — run `pokedex login` first");
            }
            run_catalog(command, config)?;
        }
    }

    Ok(())
}

fn run_catalog(command: CatalogCommand, config: &Config) -> Result<()> {
    let data_conn = open_data_db().context("Failed to open catalog database")?;
    let mut store = RecordStore::open(SqliteKvStore::new(data_conn))
        .with_policy(config.features.favorite_policy);

    match command {
        CatalogCommand::Fetch { timeout_ms } => {
            let timeout = timeout_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.fetch_timeout());
            let source = HttpCatalogSource::from_config()?;
            info!(endpoint = source.endpoint(), "fetching catalog");
            let count = store
                .refresh(Arc::new(source), timeout)
                .context("Failed to fetch or save catalog")?;
            println!("Saved {count} entries");
        }
        CatalogCommand::List { query } => {
            let query = query.unwrap_or_default();
            for entry in store.filter_by_name(&query) {
                print_summary(entry, store.is_favorite(entry.id));
            }
        }
        CatalogCommand::Show { id } => {
            let entry = store.get(id).with_context(|| format!("No entry with id {id}"))?;
            print_details(entry);
        }
        CatalogCommand::Favorites => {
            let favorites = store.favorites_view();
            if favorites.is_empty() {
                println!("No favorites yet!");
            }
            for entry in favorites {
                print_summary(entry, true);
            }
        }
        CatalogCommand::Favorite { id } => {
            let now = store.toggle_favorite(id)?;
            println!("{}", if now { "Added to favorites" } else { "Removed from favorites" });
        }
        CatalogCommand::Create { name, types } => {
            let entry = store.create(&name, types)?;
            println!("Created #{} {}", entry.id, entry.display_name);
        }
        CatalogCommand::Rename { id, name } => {
            store.rename(id, &name)?;
            println!("Renamed #{id}");
        }
        CatalogCommand::Remove { id } => {
            if store.remove(id)? {
                println!("Removed #{id}");
            } else {
                println!("Nothing to remove");
            }
        }
        CatalogCommand::Types { set } => {
            if let Some(types) = set {
                store.set_available_types(&types)?;
            }
            println!("{}", store.available_types().join(", "));
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<Password> {
    let raw = rpassword::prompt_password(label).context("Failed to read password")?;
    Ok(Password::new(raw))
}

fn print_summary(entry: &CatalogEntry, favorite: bool) {
    let star = if favorite { "★" } else { " " };
    println!(
        "{star} #{:<4} {:<16} {}",
        entry.id,
        entry.display_name,
        entry.types.join(", ")
    );
}

fn print_details(entry: &CatalogEntry) {
    println!("{}", entry.display_name);
    println!("ID: {}", entry.id);
    println!("Types: {}", entry.types.join(", "));
    println!("Image: {}", entry.image_ref);
    if let Some(description) = &entry.description {
        println!("Description: {description}");
    }
    if let Some(height) = entry.height {
        println!("Height: {height} m");
    }
    if let Some(weight) = entry.weight {
        println!("Weight: {weight} kg");
    }
}

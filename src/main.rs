use anyhow::Context;
use clap::Parser;
use room_finder::query::{self, SearchParams};
use room_finder::sources::{load_catalog, CatalogSource, JsonFileSource, SampleSource};
use room_finder::Room;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search rooms by name, price and tag
#[derive(Debug, Parser)]
#[command(name = "room-finder", version)]
struct Args {
    /// JSON catalog file (built-in sample rooms when omitted)
    #[arg(long, env = "ROOM_CATALOG")]
    catalog: Option<PathBuf>,

    /// Show the room with exactly this name
    #[arg(long)]
    name: Option<String>,

    /// Print name and tag suggestions for partial text
    #[arg(long)]
    suggest: Option<String>,

    /// Minimum price (blank or invalid means no lower bound)
    #[arg(long, default_value = "")]
    min_price: String,

    /// Maximum price (blank or invalid means no upper bound)
    #[arg(long, default_value = "")]
    max_price: String,

    /// Tag text, matched as a substring
    #[arg(long, default_value = "")]
    tag: String,

    /// Also write the listed rooms to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    info!("🏠 Room Finder");

    let source: Box<dyn CatalogSource> = match &args.catalog {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource::new()),
    };
    let catalog = load_catalog(source.as_ref()).await?;

    if let Some(partial) = &args.suggest {
        println!("Names: {}", query::suggest(&catalog, partial).join(", "));
        println!("Tags: {}", query::suggest_tags(&catalog, partial).join(", "));
        println!();
    }

    let listed: Vec<&Room> = match &args.name {
        Some(name) => match query::find_by_name(&catalog, name) {
            Some(room) => {
                print_details(room);
                vec![room]
            }
            None => {
                println!("No room named {:?}", name);
                Vec::new()
            }
        },
        None => {
            let params = SearchParams::from_inputs(&args.min_price, &args.max_price, &args.tag);
            let filtered = query::filter::filter_with(&catalog, &params);
            let sorted = query::sort_for_display(&filtered);

            println!("Rooms ({} of {})", sorted.len(), catalog.len());
            for (i, room) in sorted.iter().enumerate() {
                println!("{}. {} - {}", i + 1, room.name, room.price);
                if !room.tags.is_empty() {
                    println!("   Tags: {}", room.tags.join(", "));
                }
                println!("   ID: {}", room.id);
            }
            sorted
        }
    };

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&listed)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} rooms to {}", listed.len(), path.display());
    }

    Ok(())
}

fn print_details(room: &Room) {
    println!("{}", room.name);
    println!("   Address: {}", room.address);
    println!("   Description: {}", room.description);
    println!("   Area: {} m²", room.area);
    println!("   Price: {}", room.price);
    println!("   Max occupancy: {}", room.max_occupancy);
    println!("   Status: {}", room.status);
    if !room.picture_urls.is_empty() {
        println!("   Pictures: {}", room.picture_urls.join(", "));
    }
    if !room.tags.is_empty() {
        println!("   Tags: {}", room.tags.join(", "));
    }
}

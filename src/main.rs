use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearlog::api::routes::CatalogSnapshot;
use gearlog::api::{build_router, state::AppState};
use gearlog::calculate::{aggregate_list, compare_lists, weight_distribution};
use gearlog::config::AppConfig;
use gearlog::models::{Category, GearItem, PackList, PackListItem, WeightGoal};
use gearlog::storage::{write_weight_goal, EntityType, JsonlReader, JsonlWriter, StorageConfig};

#[derive(Parser)]
#[command(name = "gearlog")]
#[command(about = "Local backpacking gear tracker with pack weight analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print weight stats for one or all pack lists
    Stats {
        /// List name or ID (default: all lists)
        #[arg(long)]
        list: Option<String>,
    },

    /// Print the library-wide weight distribution
    Distribution,

    /// Rank and compare all pack lists
    Compare,

    /// Write a small demo catalog for trying the tool out
    Seed {
        /// Overwrite existing data
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Config file is optional; CLI flags win over it.
    let config_path = PathBuf::from(&cli.config);
    let config = if config_path.exists() {
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState::new(storage);
            let app = build_router(state);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("gearlog v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);
            axum::serve(listener, app).await?;
        }

        Commands::Stats { list } => {
            let snapshot = CatalogSnapshot::load(&storage)?;
            let index = snapshot.gear_index();

            let selected: Vec<&PackList> = match list.as_deref() {
                Some(wanted) => snapshot
                    .lists
                    .iter()
                    .filter(|l| l.id.as_str() == wanted || l.name.eq_ignore_ascii_case(wanted))
                    .collect(),
                None => snapshot.lists.iter().collect(),
            };

            if selected.is_empty() {
                println!("No matching pack lists found.");
                return Ok(());
            }

            for pack_list in selected {
                let stats = aggregate_list(pack_list, &index)?;
                println!("\n=== {} ===", pack_list.name);
                println!("Items:       {}", stats.item_count);
                println!("Total:       {:.0} g", stats.total_weight);
                println!("Base:        {:.0} g", stats.base_weight);
                println!("Worn:        {:.0} g", stats.worn_weight);
                println!("Consumable:  {:.0} g", stats.consumable_weight);
            }
        }

        Commands::Distribution => {
            let snapshot = CatalogSnapshot::load(&storage)?;
            let buckets = weight_distribution(&snapshot.gear);

            println!("\n=== Weight Distribution ({} items) ===", snapshot.gear.len());
            for bucket in buckets {
                println!("{:>10}  {:>4}  {}", bucket.label, bucket.count, "#".repeat(bucket.count as usize));
            }
        }

        Commands::Compare => {
            let snapshot = CatalogSnapshot::load(&storage)?;
            let comparison = compare_lists(snapshot.ranked_entries()?);

            if comparison.ranking.is_empty() {
                println!("No pack lists yet.");
                return Ok(());
            }

            println!("\n=== Pack Lists (lightest base weight first) ===");
            for entry in &comparison.ranking {
                println!(
                    "{:>8.0} g  {} ({} items)",
                    entry.stats.base_weight, entry.name, entry.stats.item_count
                );
            }
            if let (Some(light), Some(heavy)) = (&comparison.lightest, &comparison.heaviest) {
                println!("\nLightest: {} ({:.0} g)", light.name, light.stats.base_weight);
                println!("Heaviest: {} ({:.0} g)", heavy.name, heavy.stats.base_weight);
            }
            if let Some(avg) = comparison.average_base_weight {
                println!("Average:  {:.0} g", avg);
            }
            if let Some(spread) = comparison.spread {
                println!("Spread:   {:.0} g", spread);
            }
        }

        Commands::Seed { force } => {
            let gear_reader = JsonlReader::<GearItem>::for_entity(&storage, EntityType::GearItem);
            if gear_reader.exists() && !force {
                eprintln!("Data directory already has a catalog; use --force to overwrite.");
                return Ok(());
            }

            let counts = seed_demo_catalog(&storage)?;
            println!("Seeded {} categories, {} items, {} lists.", counts.0, counts.1, counts.2);
        }
    }

    Ok(())
}

/// Write a small demo catalog so the API has something to serve.
fn seed_demo_catalog(storage: &StorageConfig) -> Result<(usize, usize, usize)> {
    let shelter = Category::new("Shelter".to_string(), "#4f8a5b".to_string());
    let sleep = Category::new("Sleep".to_string(), "#3a6ea5".to_string());
    let cooking = Category::new("Cooking".to_string(), "#b3552e".to_string());
    let clothing = Category::new("Clothing".to_string(), "#8a4f7d".to_string());
    let food = Category::new("Food".to_string(), "#c2a14d".to_string());

    let tent = GearItem::new("Trekking pole tent".to_string(), 620.0, shelter.id.clone());
    let quilt = GearItem::new("Down quilt".to_string(), 540.0, sleep.id.clone());
    let pad = GearItem::new("Foam pad".to_string(), 390.0, sleep.id.clone());
    let stove = GearItem::new("Canister stove".to_string(), 85.0, cooking.id.clone());
    let pot = GearItem::new("Titanium pot".to_string(), 115.0, cooking.id.clone());
    let shell = GearItem::new("Rain shell".to_string(), 240.0, clothing.id.clone()).worn();
    let shoes = GearItem::new("Trail runners".to_string(), 620.0, clothing.id.clone()).worn();
    let dinners = GearItem::new("Dehydrated dinner".to_string(), 140.0, food.id.clone())
        .consumable()
        .with_quantity(3);
    let maps = GearItem::new("Offline maps".to_string(), 0.0, shelter.id.clone());

    let overnighter = PackList::new("Overnighter".to_string()).with_items(vec![
        PackListItem::new(tent.id.clone()),
        PackListItem::new(quilt.id.clone()),
        PackListItem::new(stove.id.clone()),
        PackListItem::new(shell.id.clone()),
        PackListItem::new(dinners.id.clone()).with_quantity(2),
        PackListItem::new(maps.id.clone()),
    ]);
    let week = PackList::new("Week on the trail".to_string()).with_items(vec![
        PackListItem::new(tent.id.clone()),
        PackListItem::new(quilt.id.clone()),
        PackListItem::new(pad.id.clone()),
        PackListItem::new(stove.id.clone()),
        PackListItem::new(pot.id.clone()),
        PackListItem::new(shell.id.clone()),
        PackListItem::new(shoes.id.clone()),
        PackListItem::new(dinners.id.clone()).with_quantity(6),
        PackListItem::new(maps.id.clone()).excluded(),
    ]);

    let categories = vec![shelter, sleep, cooking, clothing, food];
    let gear = vec![tent, quilt, pad, stove, pot, shell, shoes, dinners, maps];
    let lists = vec![overnighter, week];

    JsonlWriter::<Category>::for_entity(storage, EntityType::Category).write_all(&categories)?;
    JsonlWriter::<GearItem>::for_entity(storage, EntityType::GearItem).write_all(&gear)?;
    JsonlWriter::<PackList>::for_entity(storage, EntityType::PackList).write_all(&lists)?;
    write_weight_goal(storage, &WeightGoal::new(Some(4500.0), Some(9000.0)))?;

    Ok((categories.len(), gear.len(), lists.len()))
}

//! Ore Compass probe
//!
//! This binary:
//! 1. Loads every tune recipe in `RECIPES_DIR` and checks its network round trip
//! 2. Loads the world in `WORLD_FILE`, if set
//! 3. Logs a compass reading at `ORIGIN` for a compass tuned to each ore type,
//!    then for an untuned one

mod config;
mod recipes;

use eyre::WrapErr;
use ore_compass::{BASIC_ORE_COMPASS, BuiltinOres, CompassReading, ItemStack, OreType, SparseWorld};
use tracing::info;

use crate::config::ProbeConfig;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ore_compass_probe=info".parse()?)
                .add_directive("ore_compass=info".parse()?),
        )
        .init();

    let config = ProbeConfig::from_env()?;
    info!("Recipes directory: {}", config.recipes_dir.display());

    let recipes = recipes::load_dir(&config.recipes_dir)?;
    for recipe in &recipes {
        let size = recipes::verify_network(recipe)?;
        let preview = recipe.result_item(&BuiltinOres);
        info!(
            "{}: {} + {} ore -> {:?} ({} bytes on the wire)",
            recipe.id(),
            BASIC_ORE_COMPASS,
            recipe.ore_count(),
            preview.tuned_ore(),
            size
        );
    }

    let Some(world_file) = &config.world_file else {
        info!("No WORLD_FILE set, skipping scan");
        return Ok(());
    };

    let json = std::fs::read_to_string(world_file)
        .wrap_err_with(|| format!("reading {}", world_file.display()))?;
    let world = SparseWorld::from_json(&json)
        .wrap_err_with(|| format!("parsing {}", world_file.display()))?;
    info!("Loaded {} blocks from {}", world.len(), world_file.display());

    info!(
        "Scanning around {:?} with range {}",
        config.origin,
        config.compass.effective_range()
    );
    for ore in OreType::ALL {
        let compass = ItemStack::one(BASIC_ORE_COMPASS.clone()).tuned_to(ore);
        report(&config, &world, ore.name(), &compass);
    }
    let untuned = ItemStack::one(BASIC_ORE_COMPASS.clone());
    report(&config, &world, "untuned", &untuned);

    Ok(())
}

fn report(config: &ProbeConfig, world: &SparseWorld, label: &str, compass: &ItemStack) {
    let reading = CompassReading::take(&config.compass, world, config.origin, compass);
    match (reading.target, reading.bearing) {
        (Some(target), Some(bearing)) => info!(
            "{label}: nearest at {:?}, bearing {:.1}°, {} in range",
            target, bearing, reading.count
        ),
        _ => info!("{label}: nothing in range"),
    }
}

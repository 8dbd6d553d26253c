//! End to end: load a recipe, craft a tuned compass, then read it in a world.

use ore_compass::{
    BASIC_ORE_COMPASS, BlockPos, BuiltinOres, CompassConfig, CompassReading, CraftingContainer,
    CraftingGrid, Identifier, ItemStack, OreType, SparseWorld, TuneCompassRecipe,
};
use pretty_assertions::assert_eq;

const TUNE_GOLD: &str = r#"{
    "type": "orecompass:tune_compass",
    "compass": {"item": "orecompass:basic_ore_compass"},
    "ore": [
        {"item": "minecraft:gold_ore"},
        {"item": "minecraft:deepslate_gold_ore"},
        {"item": "minecraft:nether_gold_ore"}
    ],
    "ore_type": "gold"
}"#;

fn recipe() -> TuneCompassRecipe {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    TuneCompassRecipe::from_json(Identifier::from_static("orecompass", "tune_gold"), TUNE_GOLD)
        .expect("recipe parses")
}

fn gold(path: &'static str) -> ItemStack {
    ItemStack::one(Identifier::vanilla(path))
}

#[test]
fn craft_then_track() {
    let recipe = recipe();

    let mut grid = CraftingGrid::table();
    grid.set(4, ItemStack::one(BASIC_ORE_COMPASS.clone()));
    grid.set(1, gold("gold_ore"));
    grid.set(3, gold("deepslate_gold_ore"));
    grid.set(5, gold("nether_gold_ore"));
    grid.set(7, gold("gold_ore"));

    assert!(recipe.can_craft_in_dimensions(grid.width(), grid.height()));
    assert!(recipe.matches(&grid));
    let tuned = recipe.assemble(&grid, &BuiltinOres);
    assert_eq!(tuned.tuned_ore(), Some(OreType::Gold));

    let mut world = SparseWorld::new();
    world.set_block(BlockPos::new(-6, 12, 0), Identifier::vanilla("gold_ore"));
    world.set_block(BlockPos::new(2, 2, 2), Identifier::vanilla("iron_ore"));

    let observer = BlockPos::new(0, 10, 0);
    let reading = CompassReading::take(&CompassConfig::default(), &world, observer, &tuned);
    assert_eq!(reading.target, Some(BlockPos::new(-6, 12, 0)));
    assert_eq!(reading.count, 1);
    let bearing = reading.bearing.expect("target has a bearing");
    assert!((bearing - 270.0).abs() < 1e-9, "{bearing}");
}

#[test]
fn two_by_two_grid_is_too_small() {
    let recipe = recipe();
    assert!(!recipe.can_craft_in_dimensions(2, 2));

    // Even if a host skipped the size gate, four slots cannot hold five items.
    let grid = CraftingGrid::with_items(
        2,
        2,
        [
            ItemStack::one(BASIC_ORE_COMPASS.clone()),
            gold("gold_ore"),
            gold("gold_ore"),
            gold("gold_ore"),
        ],
    );
    assert!(!recipe.matches(&grid));
}

#[test]
fn network_copy_behaves_identically() {
    let recipe = recipe();
    let mut bytes = Vec::new();
    recipe.to_network(&mut bytes).expect("encodes");
    let synced = TuneCompassRecipe::from_network(recipe.id().clone(), &mut bytes.as_slice())
        .expect("decodes");
    assert_eq!(synced, recipe);

    let grid = CraftingGrid::with_items(
        3,
        3,
        [
            gold("gold_ore"),
            ItemStack::one(BASIC_ORE_COMPASS.clone()),
            gold("gold_ore"),
            gold("gold_ore"),
            gold("gold_ore"),
        ],
    );
    assert_eq!(synced.matches(&grid), recipe.matches(&grid));
    assert_eq!(
        synced.assemble(&grid, &BuiltinOres),
        recipe.assemble(&grid, &BuiltinOres)
    );
}

//! Loading a data-pack style directory of tune recipes.

use std::path::Path;

use eyre::{WrapErr, ensure};
use ore_compass::{Identifier, TuneCompassRecipe};
use tracing::{debug, info};

/// Namespace given to recipes loaded from a directory.
const RECIPE_NAMESPACE: &str = "orecompass";

/// Load every `*.json` file in `dir`, sorted by file name. Each recipe's id
/// is `orecompass:<file stem>`.
pub fn load_dir(dir: &Path) -> eyre::Result<Vec<TuneCompassRecipe>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).wrap_err_with(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut recipes = Vec::with_capacity(paths.len());
    for path in paths {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| eyre::eyre!("{} has no usable file name", path.display()))?;
        let id = Identifier::parse(&format!("{RECIPE_NAMESPACE}:{stem}"))
            .wrap_err_with(|| format!("{} is not a valid recipe name", path.display()))?;

        let json = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        let recipe = TuneCompassRecipe::from_json(id, &json)?;
        debug!("Loaded {} from {}", recipe.id(), path.display());
        recipes.push(recipe);
    }

    info!("Loaded {} tune recipes from {}", recipes.len(), dir.display());
    Ok(recipes)
}

/// Encode and decode `recipe`, checking the synced copy is identical.
/// Returns the encoded size in bytes.
pub fn verify_network(recipe: &TuneCompassRecipe) -> eyre::Result<usize> {
    let mut bytes = Vec::new();
    recipe.to_network(&mut bytes)?;
    let decoded = TuneCompassRecipe::from_network(recipe.id().clone(), &mut bytes.as_slice())?;
    ensure!(
        &decoded == recipe,
        "recipe {} changed across the network encoding",
        recipe.id()
    );
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TUNE_COAL: &str = r#"{
        "compass": {"item": "orecompass:basic_ore_compass"},
        "ore": {"item": "minecraft:coal_ore"},
        "ore_type": "coal",
        "ore_count": 3
    }"#;

    #[test]
    fn loads_json_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tune_coal.json"), TUNE_COAL).unwrap();
        std::fs::write(
            dir.path().join("a_tune_iron.json"),
            TUNE_COAL.replace("coal", "iron"),
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "not a recipe").unwrap();

        let recipes = load_dir(dir.path()).unwrap();
        let ids: Vec<_> = recipes.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(ids, ["orecompass:a_tune_iron", "orecompass:tune_coal"]);
        assert_eq!(recipes[0].ore_type(), "iron");
        assert_eq!(recipes[1].ore_count(), 3);
    }

    #[test]
    fn bad_recipe_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{\"ore_type\": 5}").unwrap();
        assert!(load_dir(dir.path()).is_err());
    }

    #[test]
    fn invalid_file_name_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Tune Coal.json"), TUNE_COAL).unwrap();
        assert!(load_dir(dir.path()).is_err());
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dir(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn network_round_trip_is_verified() {
        let id = Identifier::from_static("orecompass", "tune_coal");
        let recipe = TuneCompassRecipe::from_json(id, TUNE_COAL).unwrap();
        let size = verify_network(&recipe).unwrap();
        let compass = "orecompass:basic_ore_compass".len();
        let ore = "minecraft:coal_ore".len();
        // Each ingredient: count, id length, id. Then "coal" and a four-byte int.
        let expected = (2 + compass) + (2 + ore) + (1 + 4) + 4;
        assert_eq!(size, expected);
    }
}

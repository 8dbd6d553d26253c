//! Probe settings, read from the environment.

use std::path::PathBuf;

use eyre::{WrapErr, eyre};
use ore_compass::{BlockPos, CompassConfig};

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Directory of `*.json` tune recipe definitions.
    pub recipes_dir: PathBuf,
    /// World file to scan; no scan without one.
    pub world_file: Option<PathBuf>,
    /// Observer position.
    pub origin: BlockPos,
    pub compass: CompassConfig,
}

impl ProbeConfig {
    /// Build from `RECIPES_DIR`, `WORLD_FILE`, `ORIGIN`, `COMPASS_CONFIG` and `SCAN_RANGE`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let recipes_dir = lookup("RECIPES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("recipes"));

        let world_file = lookup("WORLD_FILE").map(PathBuf::from);

        let origin = match lookup("ORIGIN") {
            Some(raw) => parse_origin(&raw)?,
            None => BlockPos::ORIGIN,
        };

        let mut compass = match lookup("COMPASS_CONFIG") {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("reading compass config {path}"))?;
                serde_json::from_str::<CompassConfig>(&json)
                    .wrap_err_with(|| format!("parsing compass config {path}"))?
            }
            None => CompassConfig::default(),
        };

        if let Some(raw) = lookup("SCAN_RANGE") {
            compass.range = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("SCAN_RANGE {raw:?} is not a block count"))?;
        }

        Ok(Self {
            recipes_dir,
            world_file,
            origin,
            compass,
        })
    }
}

/// Parse `x,y,z`.
fn parse_origin(raw: &str) -> eyre::Result<BlockPos> {
    let parts = raw
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err_with(|| format!("ORIGIN {raw:?} is not x,y,z"))?;

    match parts[..] {
        [x, y, z] => Ok(BlockPos::new(x, y, z)),
        _ => Err(eyre!("ORIGIN {raw:?} needs exactly three coordinates")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> eyre::Result<ProbeConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        ProbeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.recipes_dir, PathBuf::from("recipes"));
        assert_eq!(config.world_file, None);
        assert_eq!(config.origin, BlockPos::ORIGIN);
        assert_eq!(config.compass, CompassConfig::default());
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("RECIPES_DIR", "data/orecompass/recipes"),
            ("WORLD_FILE", "world.json"),
            ("ORIGIN", "10, -59, 3"),
            ("SCAN_RANGE", "24"),
        ])
        .unwrap();
        assert_eq!(config.recipes_dir, PathBuf::from("data/orecompass/recipes"));
        assert_eq!(config.world_file, Some(PathBuf::from("world.json")));
        assert_eq!(config.origin, BlockPos::new(10, -59, 3));
        assert_eq!(config.compass.range, 24);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(config(&[("ORIGIN", "1,2")]).is_err());
        assert!(config(&[("ORIGIN", "a,b,c")]).is_err());
        assert!(config(&[("SCAN_RANGE", "-5")]).is_err());
        assert!(config(&[("COMPASS_CONFIG", "/nonexistent/compass.json")]).is_err());
    }

    #[test]
    fn compass_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compass.json");
        std::fs::write(&path, r#"{"max_range": 8, "default_targets": ["diamond"]}"#).unwrap();

        let config = config(&[("COMPASS_CONFIG", path.to_str().unwrap())]).unwrap();
        assert_eq!(config.compass.max_range, 8);
        assert_eq!(config.compass.default_targets, [ore_compass::OreType::Diamond]);
    }
}

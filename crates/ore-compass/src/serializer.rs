//! JSON definitions and the binary form used to sync recipes to clients.
//!
//! JSON:
//! ```json
//! {
//!   "type": "orecompass:tune_compass",
//!   "compass": {"item": "orecompass:basic_ore_compass"},
//!   "ore": [{"item": "minecraft:iron_ore"}, {"item": "minecraft:deepslate_iron_ore"}],
//!   "ore_type": "iron",
//!   "ore_count": 4
//! }
//! ```
//!
//! Binary, in order: compass ingredient, ore ingredient, `ore_type` as a
//! VarInt-prefixed string, `ore_count` as a big-endian `i32`. The recipe id
//! travels separately.

use std::io::{Read, Write};

use mc_protocol::{Decode, Encode};
use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::debug;

use crate::{
    DEFAULT_ORE_COUNT, Identifier, Ingredient, RecipeError, RecipeResult, TuneCompassRecipe,
};

/// Serializer id written in the `type` field of tune recipes.
pub static TUNE_COMPASS_SERIALIZER: Identifier =
    Identifier::from_static("orecompass", "tune_compass");

#[derive(Serialize, Deserialize)]
struct RecipeJson {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<Identifier>,
    compass: Ingredient,
    ore: Ingredient,
    ore_type: String,
    #[serde(default = "default_ore_count", deserialize_with = "integral")]
    ore_count: i64,
}

fn default_ore_count() -> i64 {
    i64::from(DEFAULT_ORE_COUNT)
}

/// Integers, or floats with no fractional part (`4.0`).
fn integral<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value)
            if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 =>
        {
            Ok(value as i64)
        }
        _ => Err(de::Error::custom(format_args!("ore_count {number} is not an integer"))),
    }
}

fn checked_ore_count(id: &Identifier, count: i64) -> RecipeResult<u32> {
    i32::try_from(count)
        .ok()
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| RecipeError::InvalidOreCount {
            id: id.clone(),
            count,
        })
}

impl TuneCompassRecipe {
    /// Parse a JSON definition for the recipe `id`.
    pub fn from_json(id: Identifier, json: &str) -> RecipeResult<Self> {
        let parsed: RecipeJson = serde_json::from_str(json).map_err(|source| RecipeError::Json {
            id: id.clone(),
            source,
        })?;

        if let Some(found) = parsed.kind {
            if found != TUNE_COMPASS_SERIALIZER {
                return Err(RecipeError::WrongType {
                    id,
                    found,
                    expected: TUNE_COMPASS_SERIALIZER.clone(),
                });
            }
        }

        let ore_count = checked_ore_count(&id, parsed.ore_count)?;
        debug!(recipe = %id, ore_type = %parsed.ore_type, ore_count, "loaded tune recipe");
        Ok(Self::new(id, parsed.compass, parsed.ore, parsed.ore_type, ore_count))
    }

    /// Render the definition as pretty-printed JSON, `type` included.
    pub fn to_json(&self) -> RecipeResult<String> {
        let json = RecipeJson {
            kind: Some(TUNE_COMPASS_SERIALIZER.clone()),
            compass: self.compass.clone(),
            ore: self.ore.clone(),
            ore_type: self.ore_type.clone(),
            ore_count: i64::from(self.ore_count),
        };
        serde_json::to_string_pretty(&json).map_err(|source| RecipeError::Json {
            id: self.id.clone(),
            source,
        })
    }

    /// Write the binary form.
    pub fn to_network<W: Write>(&self, writer: &mut W) -> RecipeResult<()> {
        let ore_count = i32::try_from(self.ore_count).map_err(|_| RecipeError::InvalidOreCount {
            id: self.id.clone(),
            count: i64::from(self.ore_count),
        })?;
        self.compass.encode(writer)?;
        self.ore.encode(writer)?;
        self.ore_type.encode(writer)?;
        ore_count.encode(writer)?;
        Ok(())
    }

    /// Read the binary form for the recipe `id`.
    pub fn from_network<R: Read>(id: Identifier, reader: &mut R) -> RecipeResult<Self> {
        let compass = Ingredient::decode(reader)?;
        let ore = Ingredient::decode(reader)?;
        let ore_type = String::decode(reader)?;
        let ore_count = checked_ore_count(&id, i64::from(i32::decode(reader)?))?;
        Ok(Self::new(id, compass, ore, ore_type, ore_count))
    }
}

//! Item predicates used by recipe slots.

use std::io::{Read, Write};

use mc_protocol::{Decode, Encode, ProtocolError};
use serde::{Deserialize, Serialize};

use crate::{Identifier, ItemStack};

/// Accepts a stack whose item is one of a fixed set of ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    items: Vec<Identifier>,
}

/// JSON shape of one accepted item.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ItemValue {
    item: Identifier,
}

/// JSON accepts a single `{"item": id}` object or an array of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum IngredientJson {
    Single(ItemValue),
    List(Vec<ItemValue>),
}

impl Ingredient {
    /// An ingredient accepting any of `items`.
    #[must_use]
    pub fn of(items: impl IntoIterator<Item = Identifier>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Identifier] {
        &self.items
    }

    /// An ingredient with no accepted items never matches anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `stack` satisfies this ingredient. Empty stacks never do.
    #[must_use]
    pub fn test(&self, stack: &ItemStack) -> bool {
        !stack.is_empty() && self.items.contains(&stack.item)
    }
}

impl Serialize for Ingredient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut values: Vec<_> = self
            .items
            .iter()
            .map(|item| ItemValue { item: item.clone() })
            .collect();
        let json = if values.len() == 1 {
            IngredientJson::Single(values.remove(0))
        } else {
            IngredientJson::List(values)
        };
        json.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ingredient {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = match IngredientJson::deserialize(deserializer)? {
            IngredientJson::Single(value) => vec![value],
            IngredientJson::List(values) => values,
        };
        if values.is_empty() {
            return Err(serde::de::Error::custom(
                "item array cannot be empty, at least one item must be defined",
            ));
        }
        Ok(Self::of(values.into_iter().map(|value| value.item)))
    }
}

// Network form: VarInt count followed by each item id as a string.
impl Encode for Ingredient {
    fn encode<W: Write>(&self, writer: &mut W) -> mc_protocol::Result<()> {
        mc_protocol::write_length(writer, self.items.len())?;
        for item in &self.items {
            item.to_string().encode(writer)?;
        }
        Ok(())
    }
}

impl Decode for Ingredient {
    fn decode<R: Read>(reader: &mut R) -> mc_protocol::Result<Self> {
        let ids = Vec::<String>::decode(reader)?;
        if ids.is_empty() {
            return Err(ProtocolError::InvalidData("empty ingredient".to_owned()));
        }
        let items = ids
            .iter()
            .map(|id| Identifier::parse(id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| ProtocolError::InvalidData(err.to_string()))?;
        Ok(Self { items })
    }
}

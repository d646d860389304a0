//! Serde data file structs for recipe definitions and materials.
//!
//! These structs define the on-disk format. They are deserialized from RON,
//! JSON, or TOML and then resolved into `alembic-core` types by the parser.
//! Element names are singular (`recipe`, `group`, `item`, `row`) with plural
//! aliases accepted.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

// ===========================================================================
// Lenient numbers
// ===========================================================================

/// A numeric attribute that never fails to deserialize.
///
/// Integers and numeric strings are kept; anything else (absent, text,
/// fractions, tables) reads as "no value" so the caller's default applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lenient(Option<i64>);

impl Lenient {
    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<i64> {
        self.0
    }

    /// The value as `u32`, or `default` when absent or out of range.
    pub fn or_u32(&self, default: u32) -> u32 {
        self.0
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(default)
    }
}

impl<'de> Deserialize<'de> for Lenient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Lenient(Some(v)),
            Raw::Text(s) => Lenient(s.parse().ok()),
            Raw::Other(_) => Lenient(None),
        })
    }
}

// ===========================================================================
// Items
// ===========================================================================

/// An item reference: the identifier plus optional attributes.
///
/// Accepts either a bare string (`"iron_ingot"`) or the full table form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ItemRepr")]
pub struct ItemData {
    pub id: String,
    pub meta: Lenient,
    pub quantity: Lenient,
    /// Single-character pattern key (combiner inputs only).
    pub key: Option<String>,
}

impl ItemData {
    pub fn named(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemRepr {
    Short(String),
    Full {
        #[serde(default)]
        id: String,
        #[serde(default)]
        meta: Lenient,
        #[serde(default)]
        quantity: Lenient,
        #[serde(default)]
        key: Option<String>,
    },
}

impl From<ItemRepr> for ItemData {
    fn from(repr: ItemRepr) -> Self {
        match repr {
            ItemRepr::Short(id) => ItemData::named(&id),
            ItemRepr::Full {
                id,
                meta,
                quantity,
                key,
            } => ItemData {
                id,
                meta,
                quantity,
                key,
            },
        }
    }
}

// ===========================================================================
// Recipe elements
// ===========================================================================

/// The `input` element. Which fields matter depends on the recipe kind:
/// dissolvers read `id` + `meta`, fluid machines read `id` + `quantity`,
/// combiners read `item` (keyed) + `row`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub meta: Lenient,
    #[serde(default)]
    pub quantity: Lenient,
    #[serde(default, alias = "items")]
    pub item: Vec<ItemData>,
    #[serde(default, alias = "rows")]
    pub row: Vec<String>,
}

/// The `electrolyte` element of an electrolyzer recipe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElectrolyteData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub meta: Lenient,
    #[serde(default)]
    pub quantity: Lenient,
    /// Percent chance that a craft consumes the electrolyte.
    #[serde(default)]
    pub probability: Lenient,
}

/// One weighted output group of a dissolver recipe.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupData {
    #[serde(default)]
    pub probability: Lenient,
    #[serde(default, alias = "items")]
    pub item: Vec<ItemData>,
}

/// The `output` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputData {
    /// `"absolute"` switches a dissolver to independent per-group rolls.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rolls: Lenient,
    #[serde(default, alias = "groups")]
    pub group: Vec<GroupData>,
    #[serde(default, alias = "items")]
    pub item: Vec<ItemData>,
}

/// One recipe definition element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeData {
    /// Machine name: dissolver, combiner, evaporator, or electrolyzer.
    #[serde(rename = "type", default)]
    pub machine: String,
    /// `"remove"` removes matching recipes; anything else adds.
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub input: InputData,
    #[serde(default)]
    pub output: OutputData,
    #[serde(default)]
    pub electrolyte: ElectrolyteData,
}

/// A whole recipe definition document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeFile {
    #[serde(default, alias = "recipes")]
    pub recipe: Vec<RecipeData>,
}

// ===========================================================================
// Materials
// ===========================================================================

/// A named group of interchangeable items.
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialGroupData {
    pub name: String,
    #[serde(default)]
    pub members: Vec<ItemData>,
}

/// The materials file: every item, fluid, and group a pack may reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialsData {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub fluids: Vec<String>,
    #[serde(default)]
    pub groups: Vec<MaterialGroupData>,
}

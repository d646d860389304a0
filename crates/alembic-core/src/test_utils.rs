//! Shared test helpers for integration tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests and, via the `test-utils` feature, in other
//! crates' tests.

use crate::id::*;
use crate::item::{FluidInput, Stack};
use crate::probability::{ProbabilityGroup, ProbabilitySet};
use crate::recipe::*;
use crate::resolver::{GroupMember, MaterialTable};

// ===========================================================================
// Material fixture
// ===========================================================================

pub const ITEMS: [&str; 10] = [
    "iron_ingot",
    "copper_ingot",
    "gold_ingot",
    "iron_dust",
    "nickel_dust",
    "salt",
    "sodium",
    "chlorine",
    "hydrogen",
    "oxygen",
];

pub const FLUIDS: [&str; 3] = ["water", "brine", "lava"];

/// A material table with [`ITEMS`], [`FLUIDS`], and two groups:
/// `ingotIron` (iron_ingot) and `dustSalt` (salt).
pub fn sample_materials() -> MaterialTable {
    let mut table = MaterialTable::new();
    for name in ITEMS {
        table.register_item(name);
    }
    for name in FLUIDS {
        table.register_fluid(name);
    }
    let iron = item(&table, "iron_ingot");
    let salt = item(&table, "salt");
    table.register_group("ingotIron", [GroupMember { item: iron, meta: 0 }]);
    table.register_group("dustSalt", [GroupMember { item: salt, meta: 0 }]);
    table
}

// ===========================================================================
// Lookup helpers
// ===========================================================================

/// Item ID by name. Panics on unknown names.
pub fn item(table: &MaterialTable, name: &str) -> ItemTypeId {
    table
        .item_id(name)
        .unwrap_or_else(|| panic!("unknown test item '{name}'"))
}

/// Fluid ID by name. Panics on unknown names.
pub fn fluid(table: &MaterialTable, name: &str) -> FluidId {
    table
        .fluid_id(name)
        .unwrap_or_else(|| panic!("unknown test fluid '{name}'"))
}

/// A quantity-1, meta-0 stack of the named item.
pub fn one(table: &MaterialTable, name: &str) -> Stack {
    Stack::new(item(table, name), 1)
}

// ===========================================================================
// Recipe constructors
// ===========================================================================

/// A single-group relative set that always yields `outputs`.
pub fn certain(outputs: Vec<Stack>) -> ProbabilitySet {
    ProbabilitySet::relative(vec![ProbabilityGroup::new(outputs, 100)])
}

pub fn grid_with(slot: usize, stack: Stack) -> Grid {
    let mut grid: Grid = [None; GRID_SLOTS];
    grid[slot] = Some(stack);
    grid
}

pub fn make_evaporation(fluid: FluidId, amount: u32, output: Stack) -> EvaporationRecipe {
    EvaporationRecipe::new(FluidInput::new(fluid, amount), output)
}

pub fn make_electrolysis(
    fluid: FluidId,
    amount: u32,
    electrolyte: Ingredient,
    outputs: [Stack; 2],
) -> ElectrolysisRecipe {
    ElectrolysisRecipe {
        input: FluidInput::new(fluid, amount),
        electrolyte,
        consumption_chance: 50,
        output_one: outputs[0],
        output_two: outputs[1],
    }
}

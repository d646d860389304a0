//! The four recipe records and their match predicates.

use crate::id::FluidId;
use crate::item::{FluidInput, Stack};
use crate::probability::ProbabilitySet;
use crate::resolver::Resolver;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of slots in a combination grid (3 rows x 3 columns).
pub const GRID_SLOTS: usize = 9;

/// A 3x3 combination grid in row-major order. `None` is an empty slot.
pub type Grid = [Option<Stack>; GRID_SLOTS];

/// The recipe kinds a definition element can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    Decomposition,
    Combination,
    Evaporation,
    Electrolysis,
}

impl RecipeKind {
    pub const ALL: [RecipeKind; 4] = [
        RecipeKind::Decomposition,
        RecipeKind::Combination,
        RecipeKind::Evaporation,
        RecipeKind::Electrolysis,
    ];

    /// Machine name used in definition files (`dissolver`, `combiner`, ...).
    pub fn machine(&self) -> &'static str {
        match self {
            RecipeKind::Decomposition => "dissolver",
            RecipeKind::Combination => "combiner",
            RecipeKind::Evaporation => "evaporator",
            RecipeKind::Electrolysis => "electrolyzer",
        }
    }

    /// Case-insensitive lookup by machine name.
    pub fn from_machine(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.machine().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecipeKind::Decomposition => "Decomposition",
            RecipeKind::Combination => "Combination",
            RecipeKind::Evaporation => "Evaporation",
            RecipeKind::Electrolysis => "Electrolysis",
        };
        f.write_str(label)
    }
}

// ===========================================================================
// Ingredient
// ===========================================================================

/// Either a concrete stack or a named group of interchangeable materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ingredient {
    Stack(Stack),
    Group(String),
}

impl Ingredient {
    pub fn stack(&self) -> Option<&Stack> {
        match self {
            Ingredient::Stack(s) => Some(s),
            Ingredient::Group(_) => None,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            Ingredient::Stack(_) => None,
            Ingredient::Group(name) => Some(name),
        }
    }

    /// Exact match used when removing definitions.
    pub fn matches_stack<R: Resolver + ?Sized>(&self, stack: &Stack, resolver: &R) -> bool {
        self.stack().is_some_and(|s| resolver.stacks_equal(s, stack))
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.group() == Some(name)
    }

    /// Whether an item presented to a machine satisfies this ingredient.
    pub fn accepts<R: Resolver + ?Sized>(&self, offered: &Stack, resolver: &R) -> bool {
        match self {
            Ingredient::Stack(s) => s.same_variant(offered) && offered.quantity >= s.quantity,
            Ingredient::Group(name) => resolver.group_contains(name, offered),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ingredient::Stack(s) => write!(f, "{s}"),
            Ingredient::Group(name) => write!(f, "<{name}>"),
        }
    }
}

// ===========================================================================
// Recipe records
// ===========================================================================

/// Breaks one input into randomly rolled outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecompositionRecipe {
    pub input: Ingredient,
    pub output: ProbabilitySet,
}

impl DecompositionRecipe {
    pub fn from_stack(stack: Stack, output: ProbabilitySet) -> Self {
        Self {
            input: Ingredient::Stack(stack),
            output,
        }
    }

    pub fn from_group(name: impl Into<String>, output: ProbabilitySet) -> Self {
        Self {
            input: Ingredient::Group(name.into()),
            output,
        }
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.input.stack()
    }

    pub fn dict_name(&self) -> Option<&str> {
        self.input.group()
    }
}

impl fmt::Display for DecompositionRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input={}, groups={}, rolls={}, {}",
            self.input,
            self.output.groups.len(),
            self.output.rolls(),
            if self.output.relative { "relative" } else { "absolute" }
        )
    }
}

/// Shapes a 3x3 grid of inputs into one output.
///
/// A definition whose output does not resolve still registers, with
/// `output: None`. Such an entry occupies its pattern for later removes but
/// never crafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationRecipe {
    pub inputs: Grid,
    pub output: Option<Stack>,
}

impl CombinationRecipe {
    pub fn new(inputs: Grid, output: impl Into<Option<Stack>>) -> Self {
        Self {
            inputs,
            output: output.into(),
        }
    }

    /// Slot-by-slot equality; empty matches only empty.
    pub fn matches_grid<R: Resolver + ?Sized>(&self, grid: &Grid, resolver: &R) -> bool {
        self.inputs
            .iter()
            .zip(grid.iter())
            .all(|(mine, theirs)| match (mine, theirs) {
                (None, None) => true,
                (Some(a), Some(b)) => resolver.stacks_equal(a, b),
                _ => false,
            })
    }

    /// Whether a grid of offered items can craft this recipe: same pattern,
    /// enough quantity in each slot, and an output to produce.
    pub fn accepts(&self, grid: &Grid) -> bool {
        self.output.is_some()
            && self
                .inputs
                .iter()
                .zip(grid.iter())
                .all(|(need, have)| match (need, have) {
                    (None, None) => true,
                    (Some(n), Some(h)) => n.same_variant(h) && h.quantity >= n.quantity,
                    _ => false,
                })
    }
}

impl fmt::Display for CombinationRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(if i % 3 == 0 { " | " } else { ", " })?;
            }
            match slot {
                Some(s) => write!(f, "{s}")?,
                None => f.write_str("-")?,
            }
        }
        match &self.output {
            Some(out) => write!(f, "] -> {out}"),
            None => f.write_str("] -> nothing"),
        }
    }
}

/// Boils a fluid down into one solid output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaporationRecipe {
    pub input: FluidInput,
    pub output: Stack,
}

impl EvaporationRecipe {
    pub fn new(input: FluidInput, output: Stack) -> Self {
        Self { input, output }
    }
}

impl fmt::Display for EvaporationRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.input, self.output)
    }
}

/// Splits a fluid into two outputs with the help of an electrolyte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectrolysisRecipe {
    pub input: FluidInput,
    pub electrolyte: Ingredient,
    /// Percent chance (0..=100) that a craft consumes the electrolyte.
    pub consumption_chance: u32,
    pub output_one: Stack,
    pub output_two: Stack,
}

impl ElectrolysisRecipe {
    pub fn matches_fluid(&self, fluid: FluidId, amount: u32) -> bool {
        self.input.fluid == fluid && self.input.amount == amount
    }

    pub fn matches_electrolyte_stack<R: Resolver + ?Sized>(
        &self,
        stack: &Stack,
        resolver: &R,
    ) -> bool {
        self.electrolyte.matches_stack(stack, resolver)
    }

    pub fn matches_electrolyte_name(&self, name: &str) -> bool {
        self.electrolyte.matches_name(name)
    }

    pub fn outputs(&self) -> [Stack; 2] {
        [self.output_one, self.output_two]
    }
}

impl fmt::Display for ElectrolysisRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} ({}% consumed) -> {}, {}",
            self.input, self.electrolyte, self.consumption_chance, self.output_one, self.output_two
        )
    }
}

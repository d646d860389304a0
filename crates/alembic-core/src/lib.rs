//! Alembic Core -- recipe records and registry for alchemy machines.
//!
//! This crate holds everything a crafting engine needs at run time: the four
//! recipe kinds, the registry they live in, the probability model used by
//! decomposition outputs, and the [`resolver::Resolver`] seam through which
//! the host maps material names to handles.
//!
//! # Recipe Kinds
//!
//! | kind          | machine        | input                     | output          |
//! |---------------|----------------|---------------------------|-----------------|
//! | Decomposition | `dissolver`    | stack or named group      | probability set |
//! | Combination   | `combiner`     | 3x3 grid                  | one stack       |
//! | Evaporation   | `evaporator`   | fluid                     | one stack       |
//! | Electrolysis  | `electrolyzer` | fluid + electrolyte       | two stacks      |
//!
//! # Lifecycle
//!
//! The host builds a [`registry::RecipeRegistry`] during initialization
//! (usually through `alembic-data`), then hands shared references to its
//! machines:
//!
//! ```rust,ignore
//! let mut registry = RecipeRegistry::new();
//! alembic_data::load_recipes(path, &materials, &mut registry)?;
//! let recipe = registry.find_decomposition(&offered, &materials);
//! let outputs = recipe.map(|r| r.output.resolve(&mut rng));
//! ```
//!
//! # Key Types
//!
//! - [`item::Stack`] -- quantity of one item variant.
//! - [`resolver::Resolver`] -- host lookups; [`resolver::MaterialTable`] is a
//!   table-backed implementation.
//! - [`probability::ProbabilitySet`] -- weighted groups with relative or
//!   absolute rolls.
//! - [`rng::SimRng`] -- deterministic SplitMix64 generator.
//! - [`registry::RecipeRegistry`] -- the four recipe lists.

pub mod id;
pub mod item;
pub mod probability;
pub mod recipe;
pub mod registry;
pub mod resolver;
pub mod rng;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

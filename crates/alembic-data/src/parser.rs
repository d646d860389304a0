//! Applies recipe definition documents to a [`RecipeRegistry`].
//!
//! Each `recipe` element names a machine (`type`) and an `action`. The pair
//! is parsed into a [`Directive`] and dispatched to the builder for that
//! recipe kind, which resolves names through the host [`Resolver`] and then
//! appends to or removes from the registry.
//!
//! Failures are contained per element: unresolvable names skip that element,
//! malformed numeric attributes fall back to defaults, and removes that match
//! nothing are silent. Only a document that fails to parse as a whole aborts
//! the load, before any element is applied.

use std::collections::HashMap;
use std::ops::AddAssign;
use std::path::Path;

use alembic_core::item::{FluidInput, Stack};
use alembic_core::probability::{DEFAULT_PROBABILITY, ProbabilityGroup, ProbabilitySet};
use alembic_core::recipe::*;
use alembic_core::registry::RecipeRegistry;
use alembic_core::resolver::Resolver;
use tracing::{debug, error, info, warn};

use crate::loader::{DataLoadError, Format, deserialize_file, parse_str};
use crate::schema::*;

/// Fluid amount used when an evaporator or electrolyzer input omits `quantity`.
pub const DEFAULT_FLUID_AMOUNT: u32 = 100;

/// Electrolyte consumption chance used when `probability` is omitted.
pub const DEFAULT_CONSUMPTION_CHANCE: u32 = 50;

// ===========================================================================
// Directives
// ===========================================================================

/// What a definition element asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

impl Action {
    /// Only the exact string `"remove"` removes; anything else adds.
    pub fn from_attr(action: Option<&str>) -> Self {
        match action {
            Some("remove") => Action::Remove,
            _ => Action::Add,
        }
    }
}

/// A parsed `type` + `action` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub kind: RecipeKind,
    pub action: Action,
}

impl Directive {
    /// `None` when the element's machine name is not recognized.
    pub fn of(recipe: &RecipeData) -> Option<Self> {
        let kind = RecipeKind::from_machine(&recipe.machine)?;
        Some(Self {
            kind,
            action: Action::from_attr(recipe.action.as_deref()),
        })
    }
}

// ===========================================================================
// Load summary
// ===========================================================================

/// What one load pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Recipes appended.
    pub added: usize,
    /// Recipes removed.
    pub removed: usize,
    /// Elements that changed nothing: unknown machines and rejected adds.
    pub skipped: usize,
}

impl AddAssign for LoadSummary {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.removed += other.removed;
        self.skipped += other.skipped;
    }
}

/// Result of applying one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Added,
    Removed(usize),
    Skipped,
}

impl LoadSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::Removed(n) => self.removed += n,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

// ===========================================================================
// Entry points
// ===========================================================================

/// Load one recipe document from disk and apply it to `registry`.
///
/// A document that cannot be read or parsed is logged and returned as an
/// error; the registry is untouched in that case.
pub fn load_recipes<R: Resolver + ?Sized>(
    path: &Path,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Result<LoadSummary, DataLoadError> {
    let doc: RecipeFile = deserialize_file(path).inspect_err(|e| {
        error!(file = %path.display(), "recipe document rejected: {e}");
    })?;
    let summary = apply_document(&doc, resolver, registry);
    info!(
        file = %path.display(),
        added = summary.added,
        removed = summary.removed,
        skipped = summary.skipped,
        "applied recipe document"
    );
    Ok(summary)
}

/// Parse an in-memory recipe document and apply it to `registry`.
pub fn apply_str<R: Resolver + ?Sized>(
    content: &str,
    format: Format,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Result<LoadSummary, DataLoadError> {
    let doc: RecipeFile = parse_str(content, format, Path::new("<memory>")).inspect_err(|e| {
        error!("recipe document rejected: {e}");
    })?;
    Ok(apply_document(&doc, resolver, registry))
}

/// Apply every element of a parsed document, in order.
pub fn apply_document<R: Resolver + ?Sized>(
    doc: &RecipeFile,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> LoadSummary {
    let mut summary = LoadSummary::default();
    for recipe in &doc.recipe {
        summary.record(apply_recipe(recipe, resolver, registry));
    }
    summary
}

fn apply_recipe<R: Resolver + ?Sized>(
    recipe: &RecipeData,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Outcome {
    let Some(directive) = Directive::of(recipe) else {
        debug!(machine = %recipe.machine, "skipping recipe for unknown machine");
        return Outcome::Skipped;
    };
    match directive.kind {
        RecipeKind::Decomposition => dissolver(recipe, directive.action, resolver, registry),
        RecipeKind::Combination => combiner(recipe, directive.action, resolver, registry),
        RecipeKind::Evaporation => evaporator(recipe, directive.action, resolver, registry),
        RecipeKind::Electrolysis => electrolyzer(recipe, directive.action, resolver, registry),
    }
}

// ===========================================================================
// Shared field extraction
// ===========================================================================

/// Resolve an item element. Quantity defaults to 1, meta to 0.
fn resolve_item<R: Resolver + ?Sized>(resolver: &R, item: &ItemData) -> Option<Stack> {
    resolver.resolve_item(&item.id, item.quantity.or_u32(1), item.meta.or_u32(0))
}

/// Resolve every item element, dropping the ones that do not resolve.
fn resolve_items<R: Resolver + ?Sized>(resolver: &R, items: &[ItemData]) -> Vec<Stack> {
    items
        .iter()
        .filter_map(|item| {
            let stack = resolve_item(resolver, item);
            if stack.is_none() {
                debug!(id = %item.id, "dropping unresolved output item");
            }
            stack
        })
        .collect()
}

fn log_removed<T: std::fmt::Display>(kind: RecipeKind, removed: &[T]) -> Outcome {
    for recipe in removed {
        info!("Removed {kind} recipe: {recipe}");
    }
    Outcome::Removed(removed.len())
}

// ===========================================================================
// Dissolver
// ===========================================================================

fn dissolver<R: Resolver + ?Sized>(
    recipe: &RecipeData,
    action: Action,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Outcome {
    let kind = RecipeKind::Decomposition;
    let input_name = recipe.input.id.as_str();
    let input_stack = resolver.resolve_item(input_name, 1, recipe.input.meta.or_u32(0));

    match action {
        Action::Add => {
            let output = probability_set(&recipe.output, resolver);
            let built = match input_stack {
                Some(stack) => DecompositionRecipe::from_stack(stack, output),
                None if resolver.group_exists(input_name) => {
                    DecompositionRecipe::from_group(input_name, output)
                }
                None => {
                    warn!("Failed to add {kind} recipe for '{input_name}'");
                    return Outcome::Skipped;
                }
            };
            info!("Added {kind} recipe: {built}");
            registry.add_decomposition(built);
            Outcome::Added
        }
        Action::Remove => {
            let removed = match input_stack {
                Some(stack) => registry
                    .remove_decomposition_where(|r| r.input.matches_stack(&stack, resolver)),
                None if resolver.group_exists(input_name) => {
                    registry.remove_decomposition_where(|r| r.input.matches_name(input_name))
                }
                None => Vec::new(),
            };
            log_removed(kind, &removed)
        }
    }
}

fn probability_set<R: Resolver + ?Sized>(output: &OutputData, resolver: &R) -> ProbabilitySet {
    let groups = output
        .group
        .iter()
        .map(|group| {
            ProbabilityGroup::new(
                resolve_items(resolver, &group.item),
                group.probability.or_u32(DEFAULT_PROBABILITY),
            )
        })
        .collect();
    let relative = output.kind.as_deref() != Some("absolute");
    ProbabilitySet::new(groups, relative, output.rolls.or_u32(1))
}

// ===========================================================================
// Combiner
// ===========================================================================

fn combiner<R: Resolver + ?Sized>(
    recipe: &RecipeData,
    action: Action,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Outcome {
    let kind = RecipeKind::Combination;
    let grid = build_grid(&recipe.input, resolver);

    match action {
        Action::Add => {
            let output = recipe.output.item.first().and_then(|i| resolve_item(resolver, i));
            if output.is_none() {
                debug!("{kind} recipe registered without an output");
            }
            let built = CombinationRecipe::new(grid, output);
            info!("Added {kind} recipe: {built}");
            registry.add_combination(built);
            Outcome::Added
        }
        Action::Remove => {
            let removed = registry.remove_first_combination_where(|r| r.matches_grid(&grid, resolver));
            log_removed(kind, removed.as_slice())
        }
    }
}

/// Lay the keyed items out over three rows of three characters.
///
/// Keys must be exactly one character. Missing rows are blank, short rows are
/// padded with spaces, and characters past the third are ignored.
pub fn build_grid<R: Resolver + ?Sized>(input: &InputData, resolver: &R) -> Grid {
    let keys: HashMap<char, Option<Stack>> = input
        .item
        .iter()
        .filter_map(|item| {
            let key = item.key.as_deref()?;
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some((c, resolve_item(resolver, item))),
                _ => None,
            }
        })
        .collect();

    let mut grid: Grid = [None; GRID_SLOTS];
    for row in 0..3 {
        let text = input.row.get(row).map(String::as_str).unwrap_or("");
        let mut chars = text.chars();
        for col in 0..3 {
            let c = chars.next().unwrap_or(' ');
            grid[row * 3 + col] = keys.get(&c).copied().flatten();
        }
    }
    grid
}

// ===========================================================================
// Evaporator
// ===========================================================================

fn evaporator<R: Resolver + ?Sized>(
    recipe: &RecipeData,
    action: Action,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Outcome {
    let kind = RecipeKind::Evaporation;
    let fluid = resolver.resolve_fluid(&recipe.input.id);

    match action {
        Action::Add => {
            let amount = recipe.input.quantity.or_u32(DEFAULT_FLUID_AMOUNT);
            let output = recipe.output.item.first().and_then(|i| resolve_item(resolver, i));
            let (Some(fluid), Some(output)) = (fluid, output) else {
                debug!(fluid = %recipe.input.id, "evaporator recipe does not resolve");
                return Outcome::Skipped;
            };
            let built = EvaporationRecipe::new(FluidInput::new(fluid, amount), output);
            info!("Added {kind} recipe: {built}");
            registry.add_evaporation(built);
            Outcome::Added
        }
        Action::Remove => {
            // Amount is not part of the match.
            let removed = match fluid {
                Some(fluid) => registry.remove_evaporation_where(|r| r.input.fluid == fluid),
                None => Vec::new(),
            };
            log_removed(kind, &removed)
        }
    }
}

// ===========================================================================
// Electrolyzer
// ===========================================================================

fn electrolyzer<R: Resolver + ?Sized>(
    recipe: &RecipeData,
    action: Action,
    resolver: &R,
    registry: &mut RecipeRegistry,
) -> Outcome {
    let kind = RecipeKind::Electrolysis;
    let fluid = resolver.resolve_fluid(&recipe.input.id);
    let amount = recipe.input.quantity.or_u32(DEFAULT_FLUID_AMOUNT);
    let electrolyte = &recipe.electrolyte;
    let electrolyte_name = electrolyte.id.as_str();
    let electrolyte_stack = resolver.resolve_item(
        electrolyte_name,
        electrolyte.quantity.or_u32(1),
        electrolyte.meta.or_u32(0),
    );

    match action {
        Action::Add => {
            let consumption_chance = electrolyte
                .probability
                .or_u32(DEFAULT_CONSUMPTION_CHANCE)
                .min(100);
            let listed = &recipe.output.item;
            let outputs = resolve_items(resolver, &listed[..listed.len().min(2)]);
            let (Some(fluid), [output_one, output_two]) = (fluid, outputs.as_slice()) else {
                return Outcome::Skipped;
            };
            let electrolyte = if resolver.group_exists(electrolyte_name) {
                Ingredient::Group(electrolyte_name.to_string())
            } else if let Some(stack) = electrolyte_stack {
                Ingredient::Stack(stack)
            } else {
                return Outcome::Skipped;
            };
            let built = ElectrolysisRecipe {
                input: FluidInput::new(fluid, amount),
                electrolyte,
                consumption_chance,
                output_one: *output_one,
                output_two: *output_two,
            };
            info!("Added {kind} recipe: {built}");
            registry.add_electrolysis(built);
            Outcome::Added
        }
        Action::Remove => {
            let Some(fluid) = fluid else {
                return Outcome::Removed(0);
            };
            let removed = registry.remove_electrolysis_where(|r| {
                r.matches_fluid(fluid, amount)
                    && (electrolyte_stack
                        .is_some_and(|s| r.matches_electrolyte_stack(&s, resolver))
                        || r.matches_electrolyte_name(electrolyte_name))
            });
            log_removed(kind, &removed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alembic_core::test_utils::*;

    fn apply(toml_str: &str, registry: &mut RecipeRegistry) -> LoadSummary {
        let table = sample_materials();
        apply_str(toml_str, Format::Toml, &table, registry).unwrap()
    }

    // -----------------------------------------------------------------------
    // Directives
    // -----------------------------------------------------------------------

    #[test]
    fn action_only_exact_remove_removes() {
        assert_eq!(Action::from_attr(None), Action::Add);
        assert_eq!(Action::from_attr(Some("add")), Action::Add);
        assert_eq!(Action::from_attr(Some("REMOVE")), Action::Add);
        assert_eq!(Action::from_attr(Some("remove")), Action::Remove);
    }

    #[test]
    fn unknown_machine_is_skipped() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "atomizer"
            [recipe.input]
            id = "salt"
            "#,
            &mut reg,
        );
        assert_eq!(summary, LoadSummary { added: 0, removed: 0, skipped: 1 });
        assert!(reg.is_empty());
    }

    #[test]
    fn machine_name_is_case_insensitive() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "EVAPORATOR"
            input = { id = "brine" }
            output = { item = ["salt"] }
            "#,
            &mut reg,
        );
        assert_eq!(reg.evaporation().len(), 1);
    }

    #[test]
    fn malformed_document_changes_nothing() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        let result = apply_str(
            "[[recipe]]\ntype = \"evaporator\"\n[[recipe\n",
            Format::Toml,
            &table,
            &mut reg,
        );
        assert!(matches!(result, Err(DataLoadError::Parse { .. })));
        assert!(reg.is_empty());
    }

    // -----------------------------------------------------------------------
    // Dissolver
    // -----------------------------------------------------------------------

    #[test]
    fn dissolver_add_by_stack() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "dissolver"
            input = { id = "iron_ingot", meta = 0 }
            [recipe.output]
            rolls = 2
            [[recipe.output.group]]
            probability = 25
            item = ["iron_dust"]
            [[recipe.output.group]]
            item = [{ id = "nickel_dust", quantity = 3 }]
            "#,
            &mut reg,
        );
        let r = &reg.decomposition()[0];
        assert_eq!(r.stack(), Some(&one(&table, "iron_ingot")));
        assert!(r.dict_name().is_none());
        assert!(r.output.relative);
        assert_eq!(r.output.rolls(), 2);
        assert_eq!(r.output.groups[0].probability, 25);
        assert_eq!(r.output.groups[1].probability, 100);
        assert_eq!(
            r.output.groups[1].outputs,
            vec![Stack::new(item(&table, "nickel_dust"), 3)]
        );
    }

    #[test]
    fn dissolver_add_by_group_and_absolute_output() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "dissolver"
            input = { id = "dustSalt" }
            [recipe.output]
            type = "absolute"
            rolls = "many"
            [[recipe.output.group]]
            probability = "x"
            item = ["sodium", "unobtainium"]
            "#,
            &mut reg,
        );
        let r = &reg.decomposition()[0];
        assert_eq!(r.dict_name(), Some("dustSalt"));
        assert!(!r.output.relative);
        assert_eq!(r.output.rolls(), 1);
        assert_eq!(r.output.groups[0].probability, 100);
        assert_eq!(r.output.groups[0].outputs.len(), 1);
    }

    #[test]
    fn dissolver_add_unresolvable_is_skipped() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "dissolver"
            input = { id = "unobtainium" }
            "#,
            &mut reg,
        );
        assert_eq!(summary.skipped, 1);
        assert!(reg.decomposition().is_empty());
    }

    #[test]
    fn dissolver_meta_distinguishes_stacks() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "dissolver"
            input = { id = "iron_ingot", meta = 1 }
            [[recipe]]
            type = "dissolver"
            input = { id = "iron_ingot" }
            [[recipe]]
            type = "dissolver"
            action = "remove"
            input = { id = "iron_ingot", meta = 1 }
            "#,
            &mut reg,
        );
        assert_eq!(reg.decomposition().len(), 1);
        assert_eq!(reg.decomposition()[0].stack().map(|s| s.meta), Some(0));
    }

    #[test]
    fn dissolver_remove_by_group_only_hits_group_entries() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "dissolver"
            input = { id = "ingotIron" }
            [[recipe]]
            type = "dissolver"
            input = { id = "ingotIron" }
            [[recipe]]
            type = "dissolver"
            input = { id = "iron_ingot" }
            [[recipe]]
            type = "dissolver"
            action = "remove"
            input = { id = "ingotIron" }
            "#,
            &mut reg,
        );
        assert_eq!(summary.added, 3);
        assert_eq!(summary.removed, 2);
        assert_eq!(reg.decomposition().len(), 1);
        assert!(reg.decomposition()[0].stack().is_some());
    }

    // -----------------------------------------------------------------------
    // Combiner
    // -----------------------------------------------------------------------

    #[test]
    fn combiner_grid_layout() {
        let table = sample_materials();
        let input = InputData {
            item: vec![
                ItemData {
                    key: Some("A".into()),
                    ..ItemData::named("iron_ingot")
                },
                ItemData {
                    key: Some("BB".into()),
                    ..ItemData::named("salt")
                },
            ],
            row: vec!["A".into(), " AB".into(), "AAAA".into()],
            ..InputData::default()
        };
        let grid = build_grid(&input, &table);
        let a = Some(one(&table, "iron_ingot"));
        assert_eq!(grid, [a, None, None, None, a, None, a, a, a]);
    }

    #[test]
    fn combiner_missing_rows_are_blank() {
        let table = sample_materials();
        let input = InputData {
            item: vec![ItemData {
                key: Some("A".into()),
                ..ItemData::named("salt")
            }],
            row: vec!["A  ".into(), "   ".into(), "   ".into()],
            ..InputData::default()
        };
        let grid = build_grid(&input, &table);
        assert_eq!(grid[0], Some(one(&table, "salt")));
        assert!(grid[1..].iter().all(Option::is_none));

        let no_rows = InputData::default();
        assert!(build_grid(&no_rows, &table).iter().all(Option::is_none));
    }

    #[test]
    fn combiner_add_without_output_still_registers() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            output = { item = ["unobtainium"] }
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            "#,
            &mut reg,
        );
        assert_eq!(summary, LoadSummary { added: 2, removed: 0, skipped: 0 });
        assert_eq!(reg.combination().len(), 2);
        assert!(reg.combination().iter().all(|r| r.output.is_none()));
        assert_eq!(reg.combination()[0].inputs, grid_with(0, one(&table, "salt")));
    }

    #[test]
    fn combiner_remove_hits_outputless_entry_first() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            output = { item = ["unobtainium"] }
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            output = { item = ["sodium"] }
            [[recipe]]
            type = "combiner"
            action = "remove"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            "#,
            &mut reg,
        );
        assert_eq!(summary, LoadSummary { added: 2, removed: 1, skipped: 0 });
        assert_eq!(reg.combination().len(), 1);
        assert_eq!(reg.combination()[0].output, Some(one(&table, "sodium")));
    }

    #[test]
    fn combiner_remove_only_first_match() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            output = { item = ["sodium"] }
            [[recipe]]
            type = "combiner"
            input = { item = [{ id = "salt", key = "S" }], row = ["S"] }
            output = { item = ["chlorine"] }
            [[recipe]]
            type = "combiner"
            action = "remove"
            input = { item = [{ id = "salt", key = "X" }], row = ["X"] }
            "#,
            &mut reg,
        );
        assert_eq!(summary.removed, 1);
        assert_eq!(reg.combination().len(), 1);
        let table = sample_materials();
        assert_eq!(reg.combination()[0].output, Some(one(&table, "chlorine")));
    }

    // -----------------------------------------------------------------------
    // Evaporator
    // -----------------------------------------------------------------------

    #[test]
    fn evaporator_default_amount_and_rejects() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "evaporator"
            input = { id = "brine" }
            output = { item = [{ id = "salt", quantity = 4 }] }
            [[recipe]]
            type = "evaporator"
            input = { id = "mercury" }
            output = { item = ["salt"] }
            [[recipe]]
            type = "evaporator"
            input = { id = "water" }
            "#,
            &mut reg,
        );
        assert_eq!(summary, LoadSummary { added: 1, removed: 0, skipped: 2 });
        let r = &reg.evaporation()[0];
        assert_eq!(r.input, FluidInput::new(fluid(&table, "brine"), DEFAULT_FLUID_AMOUNT));
        assert_eq!(r.output, Stack::new(item(&table, "salt"), 4));
    }

    #[test]
    fn evaporator_remove_ignores_amount() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "evaporator"
            input = { id = "brine", quantity = 100 }
            output = { item = ["salt"] }
            [[recipe]]
            type = "evaporator"
            input = { id = "brine", quantity = 500 }
            output = { item = ["sodium"] }
            [[recipe]]
            type = "evaporator"
            action = "remove"
            input = { id = "brine", quantity = 7 }
            "#,
            &mut reg,
        );
        assert!(reg.evaporation().is_empty());
    }

    // -----------------------------------------------------------------------
    // Electrolyzer
    // -----------------------------------------------------------------------

    #[test]
    fn electrolyzer_prefers_group_electrolyte() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water", quantity = 250 }
            electrolyte = { id = "dustSalt", probability = 20 }
            output = { item = ["hydrogen", "oxygen", "salt"] }
            "#,
            &mut reg,
        );
        let table = sample_materials();
        let r = &reg.electrolysis()[0];
        assert_eq!(r.electrolyte, Ingredient::Group("dustSalt".into()));
        assert_eq!(r.consumption_chance, 20);
        assert_eq!(r.input.amount, 250);
        assert_eq!(r.outputs(), [one(&table, "hydrogen"), one(&table, "oxygen")]);
    }

    #[test]
    fn electrolyzer_stack_electrolyte_and_default_chance() {
        let table = sample_materials();
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "brine" }
            electrolyte = { id = "salt", quantity = 2 }
            output = { item = ["sodium", "chlorine"] }
            "#,
            &mut reg,
        );
        let r = &reg.electrolysis()[0];
        assert_eq!(r.electrolyte, Ingredient::Stack(Stack::new(item(&table, "salt"), 2)));
        assert_eq!(r.consumption_chance, DEFAULT_CONSUMPTION_CHANCE);
        assert_eq!(r.input.amount, DEFAULT_FLUID_AMOUNT);
    }

    #[test]
    fn electrolyzer_consumption_chance_is_capped_at_certain() {
        let mut reg = RecipeRegistry::new();
        apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water" }
            electrolyte = { id = "salt", probability = 250 }
            output = { item = ["hydrogen", "oxygen"] }
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water" }
            electrolyte = { id = "salt", probability = 100 }
            output = { item = ["hydrogen", "oxygen"] }
            "#,
            &mut reg,
        );
        assert_eq!(reg.electrolysis()[0].consumption_chance, 100);
        assert_eq!(reg.electrolysis()[1].consumption_chance, 100);
    }

    #[test]
    fn electrolyzer_needs_two_resolved_outputs_within_first_two() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water" }
            electrolyte = { id = "salt" }
            output = { item = ["hydrogen", "unobtainium", "oxygen"] }
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water" }
            electrolyte = { id = "salt" }
            output = { item = [] }
            "#,
            &mut reg,
        );
        assert_eq!(summary.skipped, 2);
        assert!(reg.electrolysis().is_empty());
    }

    #[test]
    fn electrolyzer_unresolvable_electrolyte_is_silently_skipped() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water" }
            electrolyte = { id = "philosopher_stone" }
            output = { item = ["hydrogen", "oxygen"] }
            "#,
            &mut reg,
        );
        assert_eq!(summary.skipped, 1);
        assert!(reg.electrolysis().is_empty());
    }

    #[test]
    fn electrolyzer_remove_checks_amount_and_electrolyte() {
        let mut reg = RecipeRegistry::new();
        let summary = apply(
            r#"
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water", quantity = 100 }
            electrolyte = { id = "salt" }
            output = { item = ["hydrogen", "oxygen"] }
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water", quantity = 200 }
            electrolyte = { id = "salt" }
            output = { item = ["hydrogen", "oxygen"] }
            [[recipe]]
            type = "electrolyzer"
            input = { id = "water", quantity = 100 }
            electrolyte = { id = "dustSalt" }
            output = { item = ["hydrogen", "oxygen"] }
            [[recipe]]
            type = "electrolyzer"
            action = "remove"
            input = { id = "water", quantity = 100 }
            electrolyte = { id = "salt" }
            "#,
            &mut reg,
        );
        assert_eq!(summary.added, 3);
        assert_eq!(summary.removed, 1);
        assert_eq!(reg.electrolysis().len(), 2);
        assert_eq!(reg.electrolysis()[0].input.amount, 200);
        assert!(reg.electrolysis()[1].matches_electrolyte_name("dustSalt"));
    }
}

//! The recipe registry: four ordered recipe lists, appended and pruned by
//! definition loading and read by the crafting machines.

use crate::id::FluidId;
use crate::item::Stack;
use crate::recipe::*;
use crate::resolver::Resolver;

/// The recipe collections read by the crafting machines.
///
/// Four independent ordered lists, one per [`RecipeKind`]. Duplicates are
/// allowed; entries only change through append and remove-by-predicate.
/// Hosts build one registry during initialization and share it read-only
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct RecipeRegistry {
    decomposition: Vec<DecompositionRecipe>,
    combination: Vec<CombinationRecipe>,
    evaporation: Vec<EvaporationRecipe>,
    electrolysis: Vec<ElectrolysisRecipe>,
}

/// Remove every element matching `pred`, preserving the order of the rest.
fn drain_matching<T>(list: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let (removed, kept): (Vec<T>, Vec<T>) = std::mem::take(list).into_iter().partition(|r| pred(r));
    *list = kept;
    removed
}

impl RecipeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    pub fn add_decomposition(&mut self, recipe: DecompositionRecipe) {
        self.decomposition.push(recipe);
    }

    pub fn add_combination(&mut self, recipe: CombinationRecipe) {
        self.combination.push(recipe);
    }

    pub fn add_evaporation(&mut self, recipe: EvaporationRecipe) {
        self.evaporation.push(recipe);
    }

    pub fn add_electrolysis(&mut self, recipe: ElectrolysisRecipe) {
        self.electrolysis.push(recipe);
    }

    /// Remove every decomposition recipe matching `pred`.
    pub fn remove_decomposition_where(
        &mut self,
        pred: impl FnMut(&DecompositionRecipe) -> bool,
    ) -> Vec<DecompositionRecipe> {
        drain_matching(&mut self.decomposition, pred)
    }

    /// Remove the first combination recipe matching `pred`.
    pub fn remove_first_combination_where(
        &mut self,
        pred: impl FnMut(&CombinationRecipe) -> bool,
    ) -> Option<CombinationRecipe> {
        let index = self.combination.iter().position(pred)?;
        Some(self.combination.remove(index))
    }

    /// Remove every evaporation recipe matching `pred`.
    pub fn remove_evaporation_where(
        &mut self,
        pred: impl FnMut(&EvaporationRecipe) -> bool,
    ) -> Vec<EvaporationRecipe> {
        drain_matching(&mut self.evaporation, pred)
    }

    /// Remove every electrolysis recipe matching `pred`.
    pub fn remove_electrolysis_where(
        &mut self,
        pred: impl FnMut(&ElectrolysisRecipe) -> bool,
    ) -> Vec<ElectrolysisRecipe> {
        drain_matching(&mut self.electrolysis, pred)
    }

    /// Drop every recipe, ahead of a full reload.
    pub fn clear(&mut self) {
        self.decomposition.clear();
        self.combination.clear();
        self.evaporation.clear();
        self.electrolysis.clear();
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    pub fn decomposition(&self) -> &[DecompositionRecipe] {
        &self.decomposition
    }

    pub fn combination(&self) -> &[CombinationRecipe] {
        &self.combination
    }

    pub fn evaporation(&self) -> &[EvaporationRecipe] {
        &self.evaporation
    }

    pub fn electrolysis(&self) -> &[ElectrolysisRecipe] {
        &self.electrolysis
    }

    /// Number of recipes of one kind.
    pub fn count(&self, kind: RecipeKind) -> usize {
        match kind {
            RecipeKind::Decomposition => self.decomposition.len(),
            RecipeKind::Combination => self.combination.len(),
            RecipeKind::Evaporation => self.evaporation.len(),
            RecipeKind::Electrolysis => self.electrolysis.len(),
        }
    }

    /// Total number of recipes across all kinds.
    pub fn len(&self) -> usize {
        RecipeKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -----------------------------------------------------------------------
    // Machine lookups
    // -----------------------------------------------------------------------

    /// First decomposition recipe that accepts `offered`.
    ///
    /// Stack inputs match on item and variant with enough quantity; group
    /// inputs ask the resolver for membership.
    pub fn find_decomposition<R: Resolver + ?Sized>(
        &self,
        offered: &Stack,
        resolver: &R,
    ) -> Option<&DecompositionRecipe> {
        self.decomposition
            .iter()
            .find(|r| r.input.accepts(offered, resolver))
    }

    /// First combination recipe with the same pattern as `grid`, enough
    /// quantity in each slot, and an output. Entries registered without an
    /// output are passed over.
    pub fn find_combination(&self, grid: &Grid) -> Option<&CombinationRecipe> {
        self.combination.iter().find(|r| r.accepts(grid))
    }

    /// First evaporation recipe for `fluid` that `available` can pay for.
    pub fn find_evaporation(&self, fluid: FluidId, available: u32) -> Option<&EvaporationRecipe> {
        self.evaporation
            .iter()
            .find(|r| r.input.fluid == fluid && available >= r.input.amount)
    }

    /// First electrolysis recipe for `fluid` with `electrolyte` loaded.
    pub fn find_electrolysis<R: Resolver + ?Sized>(
        &self,
        fluid: FluidId,
        available: u32,
        electrolyte: &Stack,
        resolver: &R,
    ) -> Option<&ElectrolysisRecipe> {
        self.electrolysis.iter().find(|r| {
            r.input.fluid == fluid
                && available >= r.input.amount
                && r.electrolyte.accepts(electrolyte, resolver)
        })
    }
}

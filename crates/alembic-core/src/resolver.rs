//! Identity resolution for items, fluids, and named groups.
//!
//! Recipe definitions refer to materials by string. The host owns the
//! mapping from those strings to concrete handles and exposes it through
//! [`Resolver`]. [`MaterialTable`] is a name-table implementation for hosts
//! that keep their materials in data files, and for tests.

use crate::id::*;
use crate::item::Stack;
use std::collections::HashMap;

/// Host-side lookups needed while building and matching recipes.
pub trait Resolver {
    /// Resolve an item identifier to a stack. `None` is the empty stack.
    fn resolve_item(&self, id: &str, quantity: u32, meta: u32) -> Option<Stack>;

    /// Resolve a fluid identifier.
    fn resolve_fluid(&self, id: &str) -> Option<FluidId>;

    /// Whether `name` is a known group of interchangeable materials.
    fn group_exists(&self, name: &str) -> bool;

    /// Whether `stack` is a member of the group `name`.
    fn group_contains(&self, _name: &str, _stack: &Stack) -> bool {
        false
    }

    /// Host equality for stacks.
    fn stacks_equal(&self, a: &Stack, b: &Stack) -> bool {
        a == b
    }
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve_item(&self, id: &str, quantity: u32, meta: u32) -> Option<Stack> {
        (**self).resolve_item(id, quantity, meta)
    }

    fn resolve_fluid(&self, id: &str) -> Option<FluidId> {
        (**self).resolve_fluid(id)
    }

    fn group_exists(&self, name: &str) -> bool {
        (**self).group_exists(name)
    }

    fn group_contains(&self, name: &str, stack: &Stack) -> bool {
        (**self).group_contains(name, stack)
    }

    fn stacks_equal(&self, a: &Stack, b: &Stack) -> bool {
        (**self).stacks_equal(a, b)
    }
}

/// One member of a material group: an item variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupMember {
    pub item: ItemTypeId,
    pub meta: u32,
}

/// Name tables for items, fluids, and groups.
#[derive(Debug, Default)]
pub struct MaterialTable {
    items: Vec<String>,
    item_name_to_id: HashMap<String, ItemTypeId>,
    fluids: Vec<String>,
    fluid_name_to_id: HashMap<String, FluidId>,
    groups: HashMap<String, Vec<GroupMember>>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item type. Re-registering a name returns the existing ID.
    pub fn register_item(&mut self, name: &str) -> ItemTypeId {
        if let Some(id) = self.item_name_to_id.get(name) {
            return *id;
        }
        let id = ItemTypeId(self.items.len() as u32);
        self.items.push(name.to_string());
        self.item_name_to_id.insert(name.to_string(), id);
        id
    }

    /// Register a fluid. Re-registering a name returns the existing ID.
    pub fn register_fluid(&mut self, name: &str) -> FluidId {
        if let Some(id) = self.fluid_name_to_id.get(name) {
            return *id;
        }
        let id = FluidId(self.fluids.len() as u32);
        self.fluids.push(name.to_string());
        self.fluid_name_to_id.insert(name.to_string(), id);
        id
    }

    /// Register (or extend) a named group.
    pub fn register_group(&mut self, name: &str, members: impl IntoIterator<Item = GroupMember>) {
        self.groups
            .entry(name.to_string())
            .or_default()
            .extend(members);
    }

    pub fn item_id(&self, name: &str) -> Option<ItemTypeId> {
        self.item_name_to_id.get(name).copied()
    }

    pub fn fluid_id(&self, name: &str) -> Option<FluidId> {
        self.fluid_name_to_id.get(name).copied()
    }

    pub fn item_name(&self, id: ItemTypeId) -> Option<&str> {
        self.items.get(id.0 as usize).map(String::as_str)
    }

    pub fn fluid_name(&self, id: FluidId) -> Option<&str> {
        self.fluids.get(id.0 as usize).map(String::as_str)
    }

    pub fn group_members(&self, name: &str) -> &[GroupMember] {
        self.groups.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn fluid_count(&self) -> usize {
        self.fluids.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Resolver for MaterialTable {
    fn resolve_item(&self, id: &str, quantity: u32, meta: u32) -> Option<Stack> {
        if quantity == 0 {
            return None;
        }
        self.item_id(id)
            .map(|item| Stack::with_meta(item, quantity, meta))
    }

    fn resolve_fluid(&self, id: &str) -> Option<FluidId> {
        self.fluid_id(id)
    }

    fn group_exists(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    fn group_contains(&self, name: &str, stack: &Stack) -> bool {
        self.group_members(name)
            .iter()
            .any(|m| m.item == stack.item && m.meta == stack.meta)
    }
}

use crate::id::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quantity of one item variant.
///
/// The host's "empty stack" is modelled as `Option<Stack>::None` wherever a
/// slot may be vacant, so a `Stack` value always refers to a real item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stack {
    pub item: ItemTypeId,
    pub quantity: u32,
    /// Host variant tag (damage value, colour, ...). Zero when unused.
    #[serde(default)]
    pub meta: u32,
}

impl Stack {
    pub fn new(item: ItemTypeId, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            meta: 0,
        }
    }

    pub fn with_meta(item: ItemTypeId, quantity: u32, meta: u32) -> Self {
        Self {
            item,
            quantity,
            meta,
        }
    }

    /// Same item and variant, regardless of quantity.
    pub fn same_variant(&self, other: &Stack) -> bool {
        self.item == other.item && self.meta == other.meta
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x#{}@{}", self.quantity, self.item.0, self.meta)
    }
}

/// A fluid amount, as consumed by evaporation and electrolysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FluidInput {
    pub fluid: FluidId,
    pub amount: u32,
}

impl FluidInput {
    pub fn new(fluid: FluidId, amount: u32) -> Self {
        Self { fluid, amount }
    }
}

impl fmt::Display for FluidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mB of fluid#{}", self.amount, self.fluid.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_has_zero_meta() {
        let s = Stack::new(ItemTypeId(3), 4);
        assert_eq!(s.meta, 0);
        assert_eq!(s.quantity, 4);
    }

    #[test]
    fn same_variant_ignores_quantity() {
        let a = Stack::with_meta(ItemTypeId(1), 1, 2);
        let b = Stack::with_meta(ItemTypeId(1), 64, 2);
        let c = Stack::with_meta(ItemTypeId(1), 1, 3);
        assert!(a.same_variant(&b));
        assert!(!a.same_variant(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn stack_meta_defaults_when_deserializing() {
        let s: Stack = serde_json::from_str(r#"{"item": 7, "quantity": 2}"#).unwrap();
        assert_eq!(s, Stack::new(ItemTypeId(7), 2));
    }
}

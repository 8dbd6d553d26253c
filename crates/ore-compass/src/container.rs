//! Crafting grid access.

use crate::ItemStack;

/// Read-only view of a crafting grid, slots in row-major order.
pub trait CraftingContainer {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// The stack in `slot`; out-of-range slots read as empty.
    fn item(&self, slot: usize) -> &ItemStack;

    fn container_size(&self) -> usize {
        self.width() * self.height()
    }

    /// Every slot, empty ones included.
    fn slots(&self) -> impl Iterator<Item = &ItemStack> {
        (0..self.container_size()).map(|slot| self.item(slot))
    }
}

/// An owned `width × height` crafting grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftingGrid {
    width: usize,
    height: usize,
    slots: Vec<ItemStack>,
    empty: ItemStack,
}

impl CraftingGrid {
    /// An empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            slots: vec![ItemStack::empty(); width * height],
            empty: ItemStack::empty(),
        }
    }

    /// The player's 3×3 crafting table.
    #[must_use]
    pub fn table() -> Self {
        Self::new(3, 3)
    }

    /// Fill slots in order from `stacks`; the rest stay empty.
    #[must_use]
    pub fn with_items(
        width: usize,
        height: usize,
        stacks: impl IntoIterator<Item = ItemStack>,
    ) -> Self {
        let mut grid = Self::new(width, height);
        for (slot, stack) in grid.slots.iter_mut().zip(stacks) {
            *slot = stack;
        }
        grid
    }

    /// Put `stack` into `slot`, returning what was there. Out-of-range slots
    /// hand the stack straight back.
    pub fn set(&mut self, slot: usize, stack: ItemStack) -> ItemStack {
        match self.slots.get_mut(slot) {
            Some(existing) => std::mem::replace(existing, stack),
            None => stack,
        }
    }
}

impl CraftingContainer for CraftingGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn item(&self, slot: usize) -> &ItemStack {
        self.slots.get(slot).unwrap_or(&self.empty)
    }
}

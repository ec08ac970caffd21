#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Cost accounting for a single site clearing session.

use serde::Serialize;
use site_clearing_core::{CostItem, Terrain};

/// Running quantities for every cost item of a clearing session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostLedger {
    communication: u64,
    fuel: u64,
    uncleared: u64,
    protected_trees: u64,
    paint_damage: u64,
}

impl CostLedger {
    /// Creates a ledger that starts with the provided number of uncleared squares.
    #[must_use]
    pub const fn new(uncleared: u64) -> Self {
        Self {
            communication: 0,
            fuel: 0,
            uncleared,
            protected_trees: 0,
            paint_damage: 0,
        }
    }

    /// Charges one unit of communication overhead.
    pub fn add_communication(&mut self) {
        self.communication += 1;
    }

    /// Charges the fuel burned while clearing a square of the provided terrain.
    pub fn add_fuel(&mut self, terrain: Terrain) {
        self.fuel += terrain.fuel_cost();
    }

    /// Records that one more clearable square has been cleared.
    ///
    /// The count never drops below zero. Reaching that floor means a square
    /// was cleared twice, which is logged rather than charged as a credit.
    pub fn remove_uncleared_square(&mut self) {
        match self.uncleared.checked_sub(1) {
            Some(remaining) => self.uncleared = remaining,
            None => log::warn!("uncleared square count is already zero; ignoring removal"),
        }
    }

    /// Charges one protected tree destruction.
    pub fn add_protected_tree_destruction(&mut self) {
        self.protected_trees += 1;
    }

    /// Charges one unit of paint damage.
    pub fn add_paint_damage(&mut self) {
        self.paint_damage += 1;
    }

    /// Quantity accumulated for the provided item.
    #[must_use]
    pub const fn quantity(&self, item: CostItem) -> u64 {
        match item {
            CostItem::Communication => self.communication,
            CostItem::Fuel => self.fuel,
            CostItem::UnclearedSquare => self.uncleared,
            CostItem::ProtectedTreeDestruction => self.protected_trees,
            CostItem::PaintDamage => self.paint_damage,
        }
    }

    /// Credits owed for the provided item.
    #[must_use]
    pub const fn cost(&self, item: CostItem) -> u64 {
        self.quantity(item) * item.unit_price()
    }

    /// Credits owed across every item.
    #[must_use]
    pub fn total(&self) -> u64 {
        CostItem::ALL.iter().map(|item| self.cost(*item)).sum()
    }

    /// Itemised report of the ledger in canonical order.
    #[must_use]
    pub fn report(&self) -> CostReport {
        let lines = CostItem::ALL
            .iter()
            .map(|item| CostLine {
                item: *item,
                quantity: self.quantity(*item),
                cost: self.cost(*item),
            })
            .collect();
        CostReport {
            lines,
            total: self.total(),
        }
    }
}

/// Single row of a [`CostReport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CostLine {
    /// Item the row describes.
    pub item: CostItem,
    /// Units accumulated for the item.
    pub quantity: u64,
    /// Credits owed for the item.
    pub cost: u64,
}

/// Itemised costs of a clearing session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostReport {
    lines: Vec<CostLine>,
    total: u64,
}

impl CostReport {
    /// Rows of the report in canonical order.
    #[must_use]
    pub fn lines(&self) -> &[CostLine] {
        &self.lines
    }

    /// Sum of the costs of every row.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }
}

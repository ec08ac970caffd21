#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Bulldozer system that interprets operator commands and clears the site.
//!
//! The bulldozer exclusively owns the [`Site`] for the duration of a
//! session. Every command is applied to completion before the next one is
//! accepted, and the session ends the first time [`Bulldozer::apply`]
//! returns a [`Termination`].

use site_clearing_core::{Command, Direction, Event, Position, Terrain, Termination};
use site_clearing_system_accounting::{CostLedger, CostReport};
use site_clearing_world::Site;

/// Square the bulldozer occupies before the first command: just west of the
/// north-west corner of the site.
pub const START_POSITION: Position = Position::new(0, -1);

/// Direction the bulldozer faces before the first command.
pub const START_FACING: Direction = Direction::East;

/// Bulldozer clearing a site under operator commands.
#[derive(Debug)]
pub struct Bulldozer {
    site: Site,
    position: Position,
    facing: Direction,
    ledger: CostLedger,
    history: Vec<String>,
    termination: Option<Termination>,
}

impl Bulldozer {
    /// Places a bulldozer at the starting edge of the provided site.
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self::placed(site, START_POSITION, START_FACING)
    }

    /// Places a bulldozer at an explicit position and facing.
    ///
    /// The ledger is seeded from the site's clearable squares exactly as for
    /// [`Bulldozer::new`].
    #[must_use]
    pub fn placed(site: Site, position: Position, facing: Direction) -> Self {
        let ledger = CostLedger::new(site.clearable_squares());
        Self {
            site,
            position,
            facing,
            ledger,
            history: Vec::new(),
            termination: None,
        }
    }

    /// Applies a command, reporting what happened through `out_events`.
    ///
    /// Returns the reason the session ended once a command terminates it.
    /// After termination every further call returns the same reason without
    /// touching any state.
    pub fn apply(
        &mut self,
        command: Command,
        out_events: &mut Vec<Event>,
    ) -> Result<(), Termination> {
        if let Some(reason) = self.termination {
            return Err(reason);
        }

        self.history.push(command.description());
        let outcome = self.execute(command, out_events);
        if let Err(reason) = outcome {
            log::debug!("session terminated at {}: {reason}", self.position);
            self.termination = Some(reason);
            out_events.push(Event::Terminated { reason });
        }
        outcome
    }

    /// Site as currently cleared by the bulldozer.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Square currently occupied by the bulldozer.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Direction the bulldozer currently faces.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Costs accumulated so far.
    #[must_use]
    pub const fn ledger(&self) -> &CostLedger {
        &self.ledger
    }

    /// Descriptions of every accepted command in the order they were issued.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Reason the session ended, if it has.
    #[must_use]
    pub const fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Itemised cost report for the session so far.
    #[must_use]
    pub fn cost_report(&self) -> CostReport {
        self.ledger.report()
    }

    fn execute(&mut self, command: Command, out_events: &mut Vec<Event>) -> Result<(), Termination> {
        match command {
            Command::Quit => Err(Termination::UserQuit),
            Command::TurnLeft => {
                self.ledger.add_communication();
                self.turn(self.facing.turned_left(), out_events);
                Ok(())
            }
            Command::TurnRight => {
                self.ledger.add_communication();
                self.turn(self.facing.turned_right(), out_events);
                Ok(())
            }
            Command::Advance { squares } => {
                self.ledger.add_communication();
                self.advance(squares.get(), out_events)
            }
        }
    }

    fn turn(&mut self, facing: Direction, out_events: &mut Vec<Event>) {
        self.facing = facing;
        out_events.push(Event::Turned { facing });
    }

    fn advance(&mut self, squares: u32, out_events: &mut Vec<Event>) -> Result<(), Termination> {
        for step in 1..=squares {
            let Some(next) = self
                .position
                .step(self.facing)
                .filter(|next| self.site.in_bounds(*next))
            else {
                return Err(Termination::OutOfBounds);
            };

            out_events.push(Event::Advanced {
                from: self.position,
                to: next,
            });
            self.position = next;

            // Scraping only happens when the bulldozer keeps going past the tree.
            if step < squares && self.site.terrain_at(next) == Some(Terrain::RemovableTree) {
                self.ledger.add_paint_damage();
                out_events.push(Event::PaintScraped { position: next });
            }

            self.visit(next, out_events)?;
        }
        Ok(())
    }

    fn visit(&mut self, position: Position, out_events: &mut Vec<Event>) -> Result<(), Termination> {
        let Some(terrain) = self.site.terrain_at(position) else {
            return Err(Termination::OutOfBounds);
        };

        if terrain == Terrain::NonRemovableTree {
            self.ledger.add_protected_tree_destruction();
            out_events.push(Event::ProtectedTreeDestroyed { position });
            return Err(Termination::ProtectedTree);
        }

        if terrain != Terrain::Clear {
            self.ledger.remove_uncleared_square();
            out_events.push(Event::SquareCleared { position, terrain });
        }
        self.ledger.add_fuel(terrain);
        let _ = self.site.clear(position);
        Ok(())
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the site clearing simulator.
//!
//! This crate defines the vocabulary that connects the site map, the
//! bulldozer, the cost accounting and the adapters. Adapters parse operator
//! input into [`Command`] values, the bulldozer applies those commands to the
//! site and reports what happened as [`Event`] values, and a session ends
//! when the bulldozer raises a [`Termination`].

use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Canonical banner emitted when the simulator boots.
pub const WELCOME_BANNER: &str =
    "Welcome to the site clearing simulator. This is a map of the site:";

/// Describes where the bulldozer waits before the first command.
pub const STARTING_NOTICE: &str = "The bulldozer is currently located at the Northern edge of the site, immediately to the West of the site, and facing East.";

/// Prompt shown before every command is read.
pub const COMMAND_PROMPT: &str = "(l)eft, (r)ight, (a)dvance <n>, (q)uit: ";

/// Farewell printed once the session has ended.
pub const FAREWELL: &str = "Thank you for using the site clearing simulator.";

/// Terrain occupying a single square of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Plain land, cheap to clear.
    Plain,
    /// Rocky land.
    Rock,
    /// A tree the bulldozer is allowed to remove.
    RemovableTree,
    /// A protected tree that must never be touched.
    NonRemovableTree,
    /// Land that has already been cleared.
    Clear,
}

impl Terrain {
    /// Parses the single-character site map symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'o' => Some(Self::Plain),
            'r' => Some(Self::Rock),
            't' => Some(Self::RemovableTree),
            'T' => Some(Self::NonRemovableTree),
            '*' => Some(Self::Clear),
            _ => None,
        }
    }

    /// Symbol used for the terrain in site map files and views.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plain => 'o',
            Self::Rock => 'r',
            Self::RemovableTree => 't',
            Self::NonRemovableTree => 'T',
            Self::Clear => '*',
        }
    }

    /// Fuel units burned when the bulldozer clears a square of this terrain.
    ///
    /// Protected trees cost nothing because visiting one always ends the
    /// session before fuel is charged.
    #[must_use]
    pub const fn fuel_cost(self) -> u64 {
        match self {
            Self::Clear | Self::Plain => 1,
            Self::Rock | Self::RemovableTree => 2,
            Self::NonRemovableTree => 0,
        }
    }

    /// Reports whether the square still counts toward the uncleared total.
    #[must_use]
    pub const fn is_clearable(self) -> bool {
        matches!(self, Self::Plain | Self::Rock | Self::RemovableTree)
    }
}

/// Compass directions the bulldozer can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Direction reached after a quarter turn clockwise.
    #[must_use]
    pub const fn turned_right(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    /// Direction reached after a quarter turn counter-clockwise.
    #[must_use]
    pub const fn turned_left(self) -> Self {
        match self {
            Self::East => Self::North,
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
        }
    }

    /// Row and column delta of a single step in this direction.
    #[must_use]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}

/// Location of the bulldozer expressed as signed row and column indices.
///
/// Positions are signed because the bulldozer starts just west of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    row: i64,
    column: i64,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(row: i64, column: i64) -> Self {
        Self { row, column }
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn row(&self) -> i64 {
        self.row
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn column(&self) -> i64 {
        self.column
    }

    /// Position one square away in the provided direction, or `None` when
    /// the coordinates would overflow.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (rows, columns) = direction.offset();
        let Some(row) = self.row.checked_add(rows) else {
            return None;
        };
        let Some(column) = self.column.checked_add(columns) else {
            return None;
        };
        Some(Self { row, column })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Operator commands accepted by the bulldozer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rotates the bulldozer a quarter turn counter-clockwise.
    TurnLeft,
    /// Rotates the bulldozer a quarter turn clockwise.
    TurnRight,
    /// Drives forward the given number of squares.
    Advance {
        /// Number of squares to cross.
        squares: NonZeroU32,
    },
    /// Ends the session at the operator's request.
    Quit,
}

impl Command {
    /// Human-readable description recorded in the command history.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::TurnLeft => "Turn left".to_owned(),
            Self::TurnRight => "Turn right".to_owned(),
            Self::Advance { squares } => format!("Advance {squares}"),
            Self::Quit => "Quit".to_owned(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Reasons operator input could not be turned into a [`Command`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    /// The input did not contain anything but whitespace.
    #[error("no command was entered")]
    Empty,
    /// The leading word is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),
    /// An advance command was missing its square count.
    #[error("advance requires the number of squares to cross")]
    MissingSquares,
    /// The square count was not a positive integer.
    #[error("`{0}` is not a positive number of squares")]
    InvalidSquares(String),
    /// Extra words followed an otherwise valid command.
    #[error("unexpected input after command: `{0}`")]
    TrailingInput(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_lowercase();
        let mut words = lowered.split_whitespace();
        let keyword = words.next().ok_or(ParseCommandError::Empty)?;

        let command = match keyword {
            "left" | "l" => Self::TurnLeft,
            "right" | "r" => Self::TurnRight,
            "quit" | "q" => Self::Quit,
            "advance" | "a" => {
                let count = words.next().ok_or(ParseCommandError::MissingSquares)?;
                let squares = count
                    .parse::<NonZeroU32>()
                    .map_err(|_| ParseCommandError::InvalidSquares(count.to_owned()))?;
                Self::Advance { squares }
            }
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };

        let rest: Vec<&str> = words.collect();
        if !rest.is_empty() {
            return Err(ParseCommandError::TrailingInput(rest.join(" ")));
        }

        Ok(command)
    }
}

/// Fatal outcomes that end a clearing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize)]
pub enum Termination {
    /// The operator issued a quit command.
    #[error("The simulation has ended at your request.")]
    UserQuit,
    /// The bulldozer tried to drive off the site.
    #[error("Bulldozer moved out of site!")]
    OutOfBounds,
    /// The bulldozer drove onto a protected tree.
    #[error("Simulation ended by attempting to move to a protected tree!")]
    ProtectedTree,
}

/// Events emitted by the bulldozer while applying commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The bulldozer rotated in place.
    Turned {
        /// Direction faced after the turn.
        facing: Direction,
    },
    /// The bulldozer moved onto an adjacent square.
    Advanced {
        /// Square vacated by the move.
        from: Position,
        /// Square entered by the move.
        to: Position,
    },
    /// A removable tree scraped the paint while the bulldozer passed through.
    PaintScraped {
        /// Square holding the tree.
        position: Position,
    },
    /// A square was cleared by the bulldozer.
    SquareCleared {
        /// Square that was cleared.
        position: Position,
        /// Terrain the square held before it was cleared.
        terrain: Terrain,
    },
    /// The bulldozer destroyed a protected tree.
    ProtectedTreeDestroyed {
        /// Square holding the protected tree.
        position: Position,
    },
    /// The session ended.
    Terminated {
        /// Reason the session ended.
        reason: Termination,
    },
}

/// Categories that contribute to the cost of a clearing operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CostItem {
    /// One unit per command other than quit.
    Communication,
    /// Fuel burned while clearing squares.
    Fuel,
    /// Clearable squares left untouched at the end of the session.
    UnclearedSquare,
    /// Protected trees destroyed by the bulldozer.
    ProtectedTreeDestruction,
    /// Paint damage from passing through removable trees.
    PaintDamage,
}

impl CostItem {
    /// All cost items in report order.
    pub const ALL: [Self; 5] = [
        Self::Communication,
        Self::Fuel,
        Self::UnclearedSquare,
        Self::ProtectedTreeDestruction,
        Self::PaintDamage,
    ];

    /// Credits charged for a single unit of the item.
    #[must_use]
    pub const fn unit_price(self) -> u64 {
        match self {
            Self::Communication | Self::Fuel => 1,
            Self::UnclearedSquare => 3,
            Self::ProtectedTreeDestruction => 10,
            Self::PaintDamage => 2,
        }
    }

    /// Label used for the item in cost reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Communication => "communication overhead",
            Self::Fuel => "fuel usage",
            Self::UnclearedSquare => "uncleared squares",
            Self::ProtectedTreeDestruction => "destruction of protected tree",
            Self::PaintDamage => "paint damage to bulldozer",
        }
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative site map state for the site clearing simulator.

use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use site_clearing_core::{Position, Terrain};
use thiserror::Error;

/// Failures raised while loading a site map.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file exists at the provided path.
    #[error("{} does not exist!", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read as text.
    #[error("Read access to {} is not provided", .path.display())]
    Unreadable {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The site map does not contain any squares.
    #[error("Site map file is empty")]
    Empty,
    /// Rows of the site map differ in length.
    #[error("Site map is not a grid with equal number of columns in each row")]
    NotAGrid,
    /// The site map contains a symbol that does not describe any terrain.
    #[error("Site map contains unacceptable characters: {0}")]
    UnacceptableSquare(char),
}

/// Rectangular site made of terrain squares stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Site {
    rows: usize,
    columns: usize,
    squares: Vec<Terrain>,
    clearable: u64,
}

impl Site {
    /// Loads a site map from the text file at the provided path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let site = contents.parse::<Self>()?;
        log::debug!(
            "loaded {}x{} site from {} with {} clearable squares",
            site.rows,
            site.columns,
            path.display(),
            site.clearable
        );
        Ok(site)
    }

    /// Number of rows in the site.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the site.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Reports whether the position lies on the site.
    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        self.index(position).is_some()
    }

    /// Terrain at the provided position, or `None` when it lies off the site.
    #[must_use]
    pub fn terrain_at(&self, position: Position) -> Option<Terrain> {
        self.index(position)
            .and_then(|index| self.squares.get(index).copied())
    }

    /// Clears the square at the provided position.
    ///
    /// Returns the terrain the square held before the call, or `None` when
    /// the position lies off the site. Clearing a cleared square is a no-op.
    pub fn clear(&mut self, position: Position) -> Option<Terrain> {
        let index = self.index(position)?;
        let square = self.squares.get_mut(index)?;
        Some(std::mem::replace(square, Terrain::Clear))
    }

    /// Number of clearable squares the site held when it was constructed.
    #[must_use]
    pub const fn clearable_squares(&self) -> u64 {
        self.clearable
    }

    /// Iterator over the rows of the site from north to south.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Terrain]> {
        self.squares.chunks(self.columns)
    }

    fn index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}

impl FromStr for Site {
    type Err = LoadError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = contents.lines().collect();
        let Some(first) = lines.first() else {
            return Err(LoadError::Empty);
        };

        let columns = first.chars().count();
        if lines.iter().any(|line| line.chars().count() != columns) {
            return Err(LoadError::NotAGrid);
        }
        if columns == 0 {
            return Err(LoadError::Empty);
        }

        let squares = lines
            .iter()
            .flat_map(|line| line.chars())
            .map(|symbol| Terrain::from_symbol(symbol).ok_or(LoadError::UnacceptableSquare(symbol)))
            .collect::<Result<Vec<_>, _>>()?;
        let clearable = squares
            .iter()
            .filter(|terrain| terrain.is_clearable())
            .count() as u64;

        Ok(Self {
            rows: lines.len(),
            columns,
            squares,
            clearable,
        })
    }
}

/// Query functions that provide read-only access to the site state.
pub mod query {
    use super::Site;

    /// Counts the clearable squares that are still untouched.
    #[must_use]
    pub fn remaining_clearable(site: &Site) -> u64 {
        site.squares
            .iter()
            .filter(|terrain| terrain.is_clearable())
            .count() as u64
    }
}

#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use cell_set::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell_set;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
    pub answers: CellCount,
}

impl GridConfig {
    pub const STANDARD: Self = Self::new_unchecked((14, 8), 50);

    pub const fn new_unchecked(size: Coord2, answers: CellCount) -> Self {
        Self { size, answers }
    }

    pub fn new((cols, rows): Coord2, answers: CellCount) -> Self {
        let cols = cols.clamp(1, Coord::MAX);
        let rows = rows.clamp(1, Coord::MAX);
        let answers = answers.clamp(1, mult(cols, rows));
        Self::new_unchecked((cols, rows), answers)
    }

    /// Like [`GridConfig::new`] but rejects values that would need clamping.
    pub fn validated((cols, rows): Coord2, answers: CellCount) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(GridError::EmptyGrid);
        }
        if answers == 0 {
            return Err(GridError::NoAnswers);
        }
        if answers > mult(cols, rows) {
            return Err(GridError::TooManyAnswers);
        }
        Ok(Self::new_unchecked((cols, rows), answers))
    }

    pub const fn cols(&self) -> Coord {
        self.size.0
    }

    pub const fn rows(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GridError::InvalidIndex)
        }
    }

    pub fn index_of(&self, (col, row): Coord2) -> Result<CellIndex> {
        if col < self.cols() && row < self.rows() {
            Ok(CellIndex::from(row) * CellIndex::from(self.cols()) + CellIndex::from(col))
        } else {
            Err(GridError::InvalidCoords)
        }
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        let cols = CellIndex::from(self.cols());
        // both parts are bounded by the grid size, which fits in `Coord`
        Ok(((index % cols) as Coord, (index / cols) as Coord))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Overlap between the answer and selection sets, out of the configured answer count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub matched: CellCount,
    pub total: CellCount,
}

impl Score {
    pub const fn zero(total: CellCount) -> Self {
        Self { matched: 0, total }
    }

    pub fn compute(answer: &CellSet, selection: &CellSet, total: CellCount) -> Self {
        Self {
            matched: answer.overlap(selection),
            total,
        }
    }

    pub const fn is_perfect(&self) -> bool {
        self.matched == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.matched, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn standard_config_is_fourteen_by_eight_with_fifty_answers() {
        let config = GridConfig::default();
        assert_eq!(config.size, (14, 8));
        assert_eq!(config.answers, 50);
        assert_eq!(config.total_cells(), 112);
    }

    #[test]
    fn new_clamps_instead_of_failing() {
        let config = GridConfig::new((0, 3), 10);
        assert_eq!(config.size, (1, 3));
        assert_eq!(config.answers, 3);

        let config = GridConfig::new((4, 4), 0);
        assert_eq!(config.answers, 1);
    }

    #[test]
    fn validated_reports_each_problem() {
        assert_eq!(GridConfig::validated((0, 8), 5), Err(GridError::EmptyGrid));
        assert_eq!(GridConfig::validated((14, 8), 0), Err(GridError::NoAnswers));
        assert_eq!(
            GridConfig::validated((2, 2), 5),
            Err(GridError::TooManyAnswers)
        );
        assert_eq!(
            GridConfig::validated((14, 8), 50),
            Ok(GridConfig::STANDARD)
        );
    }

    #[test]
    fn index_and_coords_are_row_major() {
        let config = GridConfig::STANDARD;
        assert_eq!(config.index_of((0, 0)), Ok(0));
        assert_eq!(config.index_of((13, 0)), Ok(13));
        assert_eq!(config.index_of((0, 1)), Ok(14));
        assert_eq!(config.index_of((13, 7)), Ok(111));
        assert_eq!(config.coords_of(111), Ok((13, 7)));
        assert_eq!(config.coords_of(15), Ok((1, 1)));
        assert_eq!(config.index_of((14, 0)), Err(GridError::InvalidCoords));
        assert_eq!(config.coords_of(112), Err(GridError::InvalidIndex));
    }

    #[test]
    fn score_formats_as_fraction() {
        assert_eq!(Score::zero(50).to_string(), "0 / 50");
        let score = Score {
            matched: 12,
            total: 50,
        };
        assert_eq!(score.to_string(), "12 / 50");
        assert!(!score.is_perfect());
    }
}

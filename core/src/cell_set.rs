use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Set of cell indices bounded by a grid size.
///
/// Backed by a boolean mask stored as `[row, col]`, so iterating the mask visits cells in
/// [`CellIndex`] order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSet {
    size: Coord2,
    mask: Array2<bool>,
    count: CellCount,
}

impl CellSet {
    pub fn empty(size: Coord2) -> Self {
        Self {
            size,
            mask: Array2::default(size.to_nd_index()),
            count: 0,
        }
    }

    pub fn full(size: Coord2) -> Self {
        Self {
            size,
            mask: Array2::from_elem(size.to_nd_index(), true),
            count: mult(size.0, size.1),
        }
    }

    /// Wraps a mask of shape `[rows, cols]`.
    pub fn from_mask(mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mask.dim();
        let rows = Coord::try_from(rows).map_err(|_| GridError::InvalidBoardShape)?;
        let cols = Coord::try_from(cols).map_err(|_| GridError::InvalidBoardShape)?;
        Ok(Self::from_mask_unchecked((cols, rows), mask))
    }

    pub(crate) fn from_mask_unchecked(size: Coord2, mask: Array2<bool>) -> Self {
        let count = mask.iter().filter(|&&member| member).count() as CellCount;
        Self { size, mask, count }
    }

    pub fn from_indices(size: Coord2, indices: &[CellIndex]) -> Result<Self> {
        let mut set = Self::empty(size);
        for &index in indices {
            set.insert(index)?;
        }
        Ok(set)
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn len(&self) -> CellCount {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Out-of-range indices are never members.
    pub fn contains(&self, index: CellIndex) -> bool {
        self.nd_index(index)
            .is_some_and(|nd_index| self.mask[nd_index])
    }

    pub fn set(&mut self, index: CellIndex, member: bool) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let nd_index = self.nd_index(index).ok_or(GridError::InvalidIndex)?;
        let slot = &mut self.mask[nd_index];
        if *slot == member {
            return Ok(NoChange);
        }

        *slot = member;
        if member {
            self.count += 1;
        } else {
            self.count -= 1;
        }
        Ok(Changed)
    }

    pub fn insert(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.set(index, true)
    }

    pub fn remove(&mut self, index: CellIndex) -> Result<MarkOutcome> {
        self.set(index, false)
    }

    /// Flips membership of `index` and returns the new membership.
    pub fn toggle(&mut self, index: CellIndex) -> Result<bool> {
        let member = !self.contains(index);
        self.set(index, member)?;
        Ok(member)
    }

    pub fn clear(&mut self) {
        self.mask.fill(false);
        self.count = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter(|&(_, &member)| member)
            .map(|(index, _)| index as CellIndex)
    }

    /// Number of indices present in both sets.
    pub fn overlap(&self, other: &CellSet) -> CellCount {
        self.iter().filter(|&index| other.contains(index)).count() as CellCount
    }

    fn nd_index(&self, index: CellIndex) -> Option<[usize; 2]> {
        let cols = CellIndex::from(self.size.0);
        if index >= self.total_cells() {
            return None;
        }
        Some([usize::from(index / cols), usize::from(index % cols)])
    }
}

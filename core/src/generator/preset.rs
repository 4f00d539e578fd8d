use alloc::vec::Vec;

use super::*;

/// Answer set taken from fixed indices, used to replay a known grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetAnswerGenerator {
    indices: Vec<CellIndex>,
}

impl PresetAnswerGenerator {
    pub fn new(indices: impl IntoIterator<Item = CellIndex>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }
}

impl AnswerGenerator for PresetAnswerGenerator {
    fn generate(self, config: GridConfig) -> CellSet {
        let mut answer = CellSet::empty(config.size);
        for index in self.indices {
            if answer.insert(index).is_err() {
                log::warn!("Preset answer {} is outside the grid, dropped", index);
            }
        }
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn keeps_in_range_indices_and_drops_the_rest() {
        let answer = PresetAnswerGenerator::new(vec![0, 1, 2, 2, 112, 300])
            .generate(GridConfig::STANDARD);

        assert_eq!(answer.len(), 3);
        assert!(answer.contains(0) && answer.contains(1) && answer.contains(2));
    }
}

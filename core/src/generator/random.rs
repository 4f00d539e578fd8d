use ndarray::Array2;

use super::*;

/// Uniformly samples the configured number of answer cells without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomAnswerGenerator {
    seed: u64,
}

impl RandomAnswerGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl AnswerGenerator for RandomAnswerGenerator {
    fn generate(self, config: GridConfig) -> CellSet {
        use rand::prelude::*;

        let total_cells = config.total_cells();

        // optimize for full grids
        if config.answers >= total_cells {
            if config.answers > total_cells {
                log::warn!(
                    "Grid already full, generated anyway, requested {} but only fits {}",
                    config.answers,
                    total_cells
                );
            }
            return CellSet::full(config.size);
        }

        let mut mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut free_cells = total_cells;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.answers {
            // pick the n-th cell that is still free
            let mut place: CellCount = rng.random_range(0..free_cells);
            for cell in mask.iter_mut() {
                if *cell {
                    continue;
                }
                if place == 0 {
                    *cell = true;
                    break;
                }
                place -= 1;
            }
            free_cells -= 1;
        }

        let answer = CellSet::from_mask_unchecked(config.size, mask);

        // double check answer count
        if answer.len() != config.answers {
            log::warn!(
                "Generated answer count mismatch, actual: {}, requested: {}",
                answer.len(),
                config.answers
            );
        }
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_grid_always_gets_fifty_distinct_answers_in_range() {
        let config = GridConfig::STANDARD;

        for seed in 0..500 {
            let answer = RandomAnswerGenerator::new(seed).generate(config);

            assert_eq!(answer.len(), 50, "seed {seed}");
            assert_eq!(answer.iter().count(), 50, "seed {seed}");
            assert!(answer.iter().all(|index| index <= 111), "seed {seed}");
        }
    }

    #[test]
    fn same_seed_same_answers() {
        let config = GridConfig::STANDARD;
        let first = RandomAnswerGenerator::new(42).generate(config);
        let second = RandomAnswerGenerator::new(42).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_spread_answers_over_the_whole_grid() {
        let config = GridConfig::STANDARD;
        let mut hits = CellSet::empty(config.size);

        for seed in 0..200 {
            for index in RandomAnswerGenerator::new(seed).generate(config).iter() {
                hits.insert(index).unwrap();
            }
        }

        assert_eq!(hits.len(), config.total_cells());
    }

    #[test]
    fn full_grid_shortcut() {
        let config = GridConfig::new_unchecked((3, 3), 9);
        let answer = RandomAnswerGenerator::new(7).generate(config);
        assert_eq!(answer, CellSet::full((3, 3)));

        let overfull = GridConfig::new_unchecked((3, 3), 20);
        let answer = RandomAnswerGenerator::new(7).generate(overfull);
        assert_eq!(answer.len(), 9);
    }

    #[test]
    fn all_but_one_cell() {
        let config = GridConfig::new_unchecked((4, 2), 7);
        let answer = RandomAnswerGenerator::new(3).generate(config);
        assert_eq!(answer.len(), 7);
        assert_eq!(answer.size(), (4, 2));
    }
}

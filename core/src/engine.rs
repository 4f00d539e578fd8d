use serde::{Deserialize, Serialize};

use crate::*;

/// In-memory state of one memory game: the hidden answer, the player's selection, the last
/// computed score and whether the answer grid is shown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryEngine {
    config: GridConfig,
    answer: CellSet,
    selection: CellSet,
    score: Score,
    answer_visible: bool,
    generation: u32,
}

impl MemoryEngine {
    /// Starts without an answer; call [`MemoryEngine::regenerate`] to deal the first grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            answer: CellSet::empty(config.size),
            selection: CellSet::empty(config.size),
            score: Score::zero(config.answers),
            answer_visible: true,
            generation: 0,
        }
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn answer(&self) -> &CellSet {
        &self.answer
    }

    pub fn selection(&self) -> &CellSet {
        &self.selection
    }

    /// Last computed score, only updated by [`MemoryEngine::compute_score`].
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn chosen_count(&self) -> CellCount {
        self.selection.len()
    }

    pub fn is_answer_visible(&self) -> bool {
        self.answer_visible
    }

    /// How many grids were generated so far, zero before the first one.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn has_answer(&self) -> bool {
        self.generation > 0
    }

    pub fn is_selected(&self, index: CellIndex) -> bool {
        self.selection.contains(index)
    }

    /// Deals a new answer set, clearing the selection and the score. Visibility is left as is.
    pub fn regenerate(&mut self, generator: impl AnswerGenerator) -> Result<&CellSet> {
        let answer = generator.generate(self.config);
        if answer.size() != self.config.size {
            return Err(GridError::InvalidBoardShape);
        }

        self.answer = answer;
        self.selection.clear();
        self.score = Score::zero(self.config.answers);
        self.generation = self.generation.saturating_add(1);
        log::debug!(
            "generated grid #{} with {} answers",
            self.generation,
            self.answer.len()
        );
        Ok(&self.answer)
    }

    pub fn set_selected(&mut self, index: CellIndex, selected: bool) -> Result<MarkOutcome> {
        let index = self.config.validate_index(index)?;
        self.selection.set(index, selected)
    }

    /// Returns whether the cell is selected afterwards.
    pub fn toggle_selected(&mut self, index: CellIndex) -> Result<bool> {
        let index = self.config.validate_index(index)?;
        self.selection.toggle(index)
    }

    pub fn hide_answer(&mut self) -> MarkOutcome {
        self.set_answer_visible(false)
    }

    pub fn show_answer(&mut self) -> MarkOutcome {
        self.set_answer_visible(true)
    }

    pub fn toggle_answer_visible(&mut self) -> bool {
        self.answer_visible = !self.answer_visible;
        self.answer_visible
    }

    pub fn compute_score(&mut self) -> Score {
        self.score = Score::compute(&self.answer, &self.selection, self.config.answers);
        self.score
    }

    /// Shows the answer grid and scores the current selection against it.
    pub fn reveal_and_score(&mut self) -> Score {
        self.show_answer();
        self.compute_score()
    }

    fn set_answer_visible(&mut self, visible: bool) -> MarkOutcome {
        if self.answer_visible == visible {
            MarkOutcome::NoChange
        } else {
            self.answer_visible = visible;
            MarkOutcome::Changed
        }
    }
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

pub trait AnswerGenerator {
    fn generate(self, config: GridConfig) -> CellSet;
}

//! Parsing stage
//!
//! Hands text to a [GrammarEngine]. Grammar failures become
//! [TransformError::StageFailed] with the stage name `Parsing`.

use crate::cobol::parsing::{DivisionGrammar, GrammarEngine, ParseTree};
use crate::cobol::transforms::{Runnable, TransformError};

pub struct Parsing<E = DivisionGrammar> {
    engine: E,
}

impl Parsing<DivisionGrammar> {
    pub fn new() -> Self {
        Parsing {
            engine: DivisionGrammar::new(),
        }
    }
}

impl Default for Parsing<DivisionGrammar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GrammarEngine> Parsing<E> {
    pub fn with_engine(engine: E) -> Self {
        Parsing { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: GrammarEngine> Runnable<String, ParseTree> for Parsing<E> {
    fn run(&self, input: String) -> Result<ParseTree, TransformError> {
        tracing::debug!(engine = self.engine.name(), bytes = input.len(), "parsing");
        self.engine
            .parse(&input)
            .map_err(|err| TransformError::StageFailed {
                stage: "Parsing".to_string(),
                message: err.to_string(),
            })
    }
}

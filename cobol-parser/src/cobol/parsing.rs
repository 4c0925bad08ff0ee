//! Parsing
//!
//!     The grammar engine turns (normalized) text into a [ParseTree]. The rest of the crate
//!     only talks to it through the [GrammarEngine] trait: hand over text, get back a tree
//!     that can render itself. Nothing about rule internals leaks into the preprocessor.
//!
//! The Default Engine
//!
//!     [DivisionGrammar] is a structural grammar: program units, the four divisions,
//!     sections, paragraphs, sentences and (in the PROCEDURE DIVISION) one statement node
//!     per COBOL verb. It is deliberately shallow. Clauses inside a statement are kept as
//!     flat terminal leaves.
//!
//!     The tree renders in the familiar LISP-like form:
//!
//!         (startRule (compilationUnit (programUnit (identificationDivision ...))) <EOF>)

pub mod engine;
pub mod grammar;
pub mod tree;
pub mod vocabulary;

pub use engine::{line_column, GrammarEngine, GrammarError};
pub use grammar::DivisionGrammar;
pub use tree::{ParseNode, ParseTree, Rule};
pub use vocabulary::DivisionKind;

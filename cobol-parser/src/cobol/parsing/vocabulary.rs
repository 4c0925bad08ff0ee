//! Reserved words the structural grammar keys on.

use super::tree::Rule;

/// Verbs that open a statement inside a PROCEDURE DIVISION sentence.
pub const VERBS: &[&str] = &[
    "ACCEPT", "ADD", "ALTER", "CALL", "CANCEL", "CLOSE", "COMPUTE", "CONTINUE", "DELETE",
    "DISPLAY", "DIVIDE", "EVALUATE", "EXIT", "GENERATE", "GO", "GOBACK", "IF", "INITIALIZE",
    "INITIATE", "INSPECT", "MERGE", "MOVE", "MULTIPLY", "OPEN", "PERFORM", "PURGE", "READ",
    "RECEIVE", "RELEASE", "RETURN", "REWRITE", "SEARCH", "SEND", "SET", "SORT", "START", "STOP",
    "STRING", "SUBTRACT", "TERMINATE", "UNSTRING", "WRITE",
];

/// Paragraph names of the IDENTIFICATION DIVISION.
pub const IDENTIFICATION_PARAGRAPHS: &[&str] = &[
    "PROGRAM-ID",
    "AUTHOR",
    "INSTALLATION",
    "DATE-WRITTEN",
    "DATE-COMPILED",
    "SECURITY",
    "REMARKS",
];

/// Paragraph names of the ENVIRONMENT DIVISION.
pub const ENVIRONMENT_PARAGRAPHS: &[&str] = &[
    "SOURCE-COMPUTER",
    "OBJECT-COMPUTER",
    "SPECIAL-NAMES",
    "FILE-CONTROL",
    "I-O-CONTROL",
];

/// Canonical (upper case) verb for a word, if it is one.
pub fn verb(word: &str) -> Option<&'static str> {
    VERBS
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(word))
}

/// The four divisions, in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DivisionKind {
    Identification,
    Environment,
    Data,
    Procedure,
}

impl DivisionKind {
    /// Division for the word in front of `DIVISION`. `ID` is accepted for IDENTIFICATION.
    pub fn from_keyword(word: &str) -> Option<Self> {
        let upper = word.to_ascii_uppercase();
        match upper.as_str() {
            "IDENTIFICATION" | "ID" => Some(DivisionKind::Identification),
            "ENVIRONMENT" => Some(DivisionKind::Environment),
            "DATA" => Some(DivisionKind::Data),
            "PROCEDURE" => Some(DivisionKind::Procedure),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            DivisionKind::Identification => "IDENTIFICATION",
            DivisionKind::Environment => "ENVIRONMENT",
            DivisionKind::Data => "DATA",
            DivisionKind::Procedure => "PROCEDURE",
        }
    }

    pub fn rule(self) -> Rule {
        match self {
            DivisionKind::Identification => Rule::IdentificationDivision,
            DivisionKind::Environment => Rule::EnvironmentDivision,
            DivisionKind::Data => Rule::DataDivision,
            DivisionKind::Procedure => Rule::ProcedureDivision,
        }
    }

    /// Whether `word` followed by a period opens a paragraph in this division.
    pub fn is_paragraph_name(self, word: &str) -> bool {
        let fixed = |names: &[&str]| names.iter().any(|name| name.eq_ignore_ascii_case(word));
        match self {
            DivisionKind::Identification => fixed(IDENTIFICATION_PARAGRAPHS),
            DivisionKind::Environment => fixed(ENVIRONMENT_PARAGRAPHS),
            DivisionKind::Data => false,
            DivisionKind::Procedure => verb(word).is_none(),
        }
    }

    /// Whether sentences are split into statements.
    pub fn has_statements(self) -> bool {
        matches!(self, DivisionKind::Procedure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_lookup() {
        assert_eq!(verb("move"), Some("MOVE"));
        assert_eq!(verb("GOBACK"), Some("GOBACK"));
        assert_eq!(verb("WS-MOVE"), None);
    }

    #[test]
    fn test_division_keywords() {
        assert_eq!(
            DivisionKind::from_keyword("id"),
            Some(DivisionKind::Identification)
        );
        assert_eq!(
            DivisionKind::from_keyword("Procedure"),
            Some(DivisionKind::Procedure)
        );
        assert_eq!(DivisionKind::from_keyword("WORKING-STORAGE"), None);
        assert!(DivisionKind::Identification < DivisionKind::Procedure);
    }

    #[test]
    fn test_paragraph_names() {
        assert!(DivisionKind::Identification.is_paragraph_name("program-id"));
        assert!(!DivisionKind::Identification.is_paragraph_name("HELLO"));
        assert!(DivisionKind::Environment.is_paragraph_name("FILE-CONTROL"));
        assert!(!DivisionKind::Data.is_paragraph_name("FILLER"));
        assert!(DivisionKind::Procedure.is_paragraph_name("MAIN-PARA"));
        assert!(!DivisionKind::Procedure.is_paragraph_name("EXIT"));
    }
}

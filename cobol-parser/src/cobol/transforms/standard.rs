//! Standard transform definitions
//!
//! Pre-built pipelines as `once_cell::sync::Lazy` statics, plus [tree_pipeline] which
//! picks one of them from a [CommentHandling] setting.

use crate::cobol::parsing::ParseTree;
use crate::cobol::preprocessing::CommentHandling;
use crate::cobol::token::TokenLocation;
use crate::cobol::transforms::stages::{CommentNormalization, CoreTokenization, Parsing};
use crate::cobol::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for token stream
pub type TokenStream = Vec<TokenLocation>;

/// Type alias for tree transforms
pub type TreeTransform = Transform<String, ParseTree>;

/// Normalization with metadata stripping: String → String
pub static NORMALIZATION: Lazy<Transform<String, String>> =
    Lazy::new(|| Transform::from_fn(Ok).then(CommentNormalization::new(true)));

/// Normalization that keeps metadata lines: String → String
pub static NORMALIZATION_KEEP_METADATA: Lazy<Transform<String, String>> =
    Lazy::new(|| Transform::from_fn(Ok).then(CommentNormalization::new(false)));

/// Core tokenization: String → Vec<(Token, Range<usize>)>
pub static CORE_TOKENIZATION: Lazy<Transform<String, TokenStream>> =
    Lazy::new(|| Transform::from_fn(Ok).then(CoreTokenization::new()));

/// Raw text straight into the grammar: String → ParseTree
pub static STRING_TO_TREE: Lazy<TreeTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Parsing::new()));

/// Normalize (stripping metadata), then parse: String → ParseTree
pub static NORMALIZED_STRING_TO_TREE: Lazy<TreeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&NORMALIZATION)
        .then_transform(&STRING_TO_TREE)
});

/// Normalize (keeping metadata), then parse: String → ParseTree
pub static NORMALIZED_KEEP_METADATA_TO_TREE: Lazy<TreeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&NORMALIZATION_KEEP_METADATA)
        .then_transform(&STRING_TO_TREE)
});

/// The tree pipeline for a comment setting.
///
/// `Disable` hands the source to the grammar untouched, so `strip_metadata` only matters
/// with `Enable`.
pub fn tree_pipeline(handling: CommentHandling, strip_metadata: bool) -> &'static TreeTransform {
    match (handling, strip_metadata) {
        (CommentHandling::Disable, _) => &STRING_TO_TREE,
        (CommentHandling::Enable, true) => &NORMALIZED_STRING_TO_TREE,
        (CommentHandling::Enable, false) => &NORMALIZED_KEEP_METADATA_TO_TREE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cobol::token::Token;

    const SOURCE: &str = "       IDENTIFICATION DIVISION.\n      * banner\n       PROGRAM-ID. DEMO. *> name\n";

    #[test]
    fn test_normalization() {
        let result = NORMALIZATION.run(SOURCE.to_string()).unwrap();
        assert_eq!(
            result,
            "       IDENTIFICATION DIVISION.\n       PROGRAM-ID. DEMO."
        );
    }

    #[test]
    fn test_core_tokenization() {
        let result = CORE_TOKENIZATION.run("STOP RUN.".to_string()).unwrap();
        assert_eq!(result.len(), 3);
        assert!(matches!(&result[0].0, Token::Word(word) if word == "STOP"));
    }

    #[test]
    fn test_normalized_string_to_tree() {
        let tree = NORMALIZED_STRING_TO_TREE.run(SOURCE.to_string()).unwrap();
        assert_eq!(
            tree.to_string_tree(),
            "(startRule (compilationUnit (programUnit (identificationDivision IDENTIFICATION DIVISION . (paragraph PROGRAM-ID . (sentence DEMO .))))) <EOF>)"
        );
    }

    #[test]
    fn test_pipeline_selection() {
        let raw = "       IDENTIFICATION DIVISION.\n      * banner text\n       PROGRAM-ID. DEMO.\n";
        let enabled = tree_pipeline(CommentHandling::Enable, true)
            .run(raw.to_string())
            .unwrap();
        let disabled = tree_pipeline(CommentHandling::Disable, true)
            .run(raw.to_string())
            .unwrap();
        assert!(!enabled.root().terminal_texts().contains(&"banner"));
        // Untouched source: the banner line reaches the grammar as ordinary words.
        assert!(disabled.root().terminal_texts().contains(&"banner"));
    }

    #[test]
    fn test_keep_metadata_pipeline() {
        let raw = "       IDENTIFICATION DIVISION.\nAB12* meta *\n       PROGRAM-ID. DEMO.\n";
        let stripped = tree_pipeline(CommentHandling::Enable, true)
            .run(raw.to_string())
            .unwrap();
        let kept = tree_pipeline(CommentHandling::Enable, false)
            .run(raw.to_string())
            .unwrap();
        assert!(!stripped.root().terminal_texts().contains(&"AB12"));
        assert!(kept.root().terminal_texts().contains(&"AB12"));
    }
}

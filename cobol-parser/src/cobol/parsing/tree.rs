//! Parse tree
//!
//! Rule nodes and terminal leaves. The tree is immutable once built; the only thing
//! callers do with it is render it or walk it.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;

/// Leaf text used for the end of input.
pub const EOF_TEXT: &str = "<EOF>";

/// Leaf text inserted where a sentence ran out of input before its period.
pub const MISSING_PERIOD_TEXT: &str = "<missing '.'>";

/// Grammar rules of the structural COBOL grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Rule {
    StartRule,
    CompilationUnit,
    ProgramUnit,
    IdentificationDivision,
    EnvironmentDivision,
    DataDivision,
    ProcedureDivision,
    Section,
    Paragraph,
    Sentence,
    /// A statement opened by the given (upper case) verb
    Statement(String),
    EndProgramStatement,
}

impl Rule {
    /// Rule name as it appears in the rendered tree.
    pub fn name(&self) -> Cow<'static, str> {
        let name = match self {
            Rule::StartRule => "startRule",
            Rule::CompilationUnit => "compilationUnit",
            Rule::ProgramUnit => "programUnit",
            Rule::IdentificationDivision => "identificationDivision",
            Rule::EnvironmentDivision => "environmentDivision",
            Rule::DataDivision => "dataDivision",
            Rule::ProcedureDivision => "procedureDivision",
            Rule::Section => "section",
            Rule::Paragraph => "paragraph",
            Rule::Sentence => "sentence",
            Rule::Statement(verb) => {
                return Cow::Owned(format!("{}Statement", verb.to_ascii_lowercase()))
            }
            Rule::EndProgramStatement => "endProgramStatement",
        };
        Cow::Borrowed(name)
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParseNode {
    Rule {
        rule: Rule,
        children: Vec<ParseNode>,
    },
    Terminal {
        text: String,
        span: Range<usize>,
    },
}

impl ParseNode {
    pub fn rule(rule: Rule, children: Vec<ParseNode>) -> Self {
        ParseNode::Rule { rule, children }
    }

    pub fn terminal(text: impl Into<String>, span: Range<usize>) -> Self {
        ParseNode::Terminal {
            text: text.into(),
            span,
        }
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Rule { children, .. } => children,
            ParseNode::Terminal { .. } => &[],
        }
    }

    pub fn rule_name(&self) -> Option<Cow<'static, str>> {
        match self {
            ParseNode::Rule { rule, .. } => Some(rule.name()),
            ParseNode::Terminal { .. } => None,
        }
    }

    /// Terminal texts under this node, left to right.
    pub fn terminal_texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.collect_terminals(&mut texts);
        texts
    }

    fn collect_terminals<'a>(&'a self, texts: &mut Vec<&'a str>) {
        match self {
            ParseNode::Terminal { text, .. } => texts.push(text),
            ParseNode::Rule { children, .. } => {
                for child in children {
                    child.collect_terminals(texts);
                }
            }
        }
    }

    fn write_string_tree(&self, out: &mut String) {
        match self {
            ParseNode::Terminal { text, .. } => out.push_str(&escape_whitespace(text)),
            ParseNode::Rule { rule, children } if children.is_empty() => {
                out.push_str(&rule.name())
            }
            ParseNode::Rule { rule, children } => {
                out.push('(');
                out.push_str(&rule.name());
                for child in children {
                    out.push(' ');
                    child.write_string_tree(out);
                }
                out.push(')');
            }
        }
    }
}

/// The result of a grammar engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTree {
    root: ParseNode,
}

impl ParseTree {
    pub fn new(root: ParseNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ParseNode {
        &self.root
    }

    /// Render as `(rule child child ...)`, terminals as their text.
    pub fn to_string_tree(&self) -> String {
        let mut out = String::new();
        self.root.write_string_tree(&mut out);
        out
    }

    /// All rule nodes with the given rendered name, in document order.
    pub fn find_rules(&self, name: &str) -> Vec<&ParseNode> {
        let mut found = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.rule_name().is_some_and(|rule| rule == name) {
                found.push(node);
            }
            stack.extend(node.children().iter().rev());
        }
        found
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_tree())
    }
}

fn escape_whitespace(text: &str) -> Cow<'_, str> {
    if !text.contains(['\t', '\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace('\t', "\\t")
            .replace('\n', "\\n")
            .replace('\r', "\\r"),
    )
}

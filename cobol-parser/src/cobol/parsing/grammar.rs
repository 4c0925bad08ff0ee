//! Structural COBOL grammar
//!
//! A recursive descent over the visible token stream:
//!
//!     startRule           := compilationUnit <EOF>
//!     compilationUnit     := programUnit+
//!     programUnit         := identificationDivision environmentDivision? dataDivision?
//!                            procedureDivision? endProgramStatement?
//!     division            := KEYWORD DIVISION ... '.' (section | paragraph | sentence)*
//!     section             := NAME SECTION ... '.' (paragraph | sentence)*
//!     paragraph           := NAME '.' sentence*
//!     sentence            := (statement | token)* '.'
//!     endProgramStatement := END PROGRAM NAME? '.'
//!
//! Statements only exist in the PROCEDURE DIVISION, where every verb opens a new one.
//! A sentence that hits end of input (or a division boundary) before its period gets a
//! `<missing '.'>` leaf instead of failing.

use super::engine::{line_column, GrammarEngine, GrammarError};
use super::tree::{ParseNode, ParseTree, Rule, EOF_TEXT, MISSING_PERIOD_TEXT};
use super::vocabulary::{verb, DivisionKind};
use crate::cobol::lexing::tokenize_visible;
use crate::cobol::token::{Token, TokenLocation};

/// The default grammar engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivisionGrammar;

impl DivisionGrammar {
    pub fn new() -> Self {
        DivisionGrammar
    }
}

impl GrammarEngine for DivisionGrammar {
    fn name(&self) -> &'static str {
        "division-grammar"
    }

    fn parse(&self, source: &str) -> Result<ParseTree, GrammarError> {
        let tokens = tokenize_visible(source);
        Parser::new(source, tokens).start_rule().map(ParseTree::new)
    }
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<TokenLocation>,
    pos: usize,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str, tokens: Vec<TokenLocation>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
        }
    }

    // Cursor helpers

    fn peek(&self) -> Option<&Token> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(token, _)| token)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn end_offset(&self) -> usize {
        self.tokens.last().map_or(0, |(_, span)| span.end)
    }

    /// Consume the current token as a terminal leaf.
    fn bump(&mut self) -> ParseNode {
        let (_, span) = self.tokens[self.pos].clone();
        self.pos += 1;
        ParseNode::terminal(&self.source[span.clone()], span)
    }

    fn missing_period(&self) -> ParseNode {
        let offset = self.end_offset();
        let offset = self
            .tokens
            .get(self.pos)
            .map_or(offset, |(_, span)| span.start);
        ParseNode::terminal(MISSING_PERIOD_TEXT, offset..offset)
    }

    fn unexpected(&self, expected: &str) -> GrammarError {
        let (found, offset) = match self.tokens.get(self.pos) {
            Some((_, span)) => (self.source[span.clone()].to_string(), span.start),
            None => (EOF_TEXT.to_string(), self.end_offset()),
        };
        let (line, column) = line_column(self.source, offset);
        GrammarError::UnexpectedToken {
            expected: expected.to_string(),
            found,
            line,
            column,
        }
    }

    // Lookahead predicates

    fn at_division_header(&self) -> Option<DivisionKind> {
        let kind = self.peek()?.as_word().and_then(DivisionKind::from_keyword)?;
        self.peek_at(1)
            .is_some_and(|token| token.is_keyword("DIVISION"))
            .then_some(kind)
    }

    fn at_section_header(&self) -> bool {
        matches!(self.peek(), Some(Token::Word(_)))
            && self
                .peek_at(1)
                .is_some_and(|token| token.is_keyword("SECTION"))
    }

    fn at_end_program(&self) -> bool {
        self.peek().is_some_and(|token| token.is_keyword("END"))
            && self
                .peek_at(1)
                .is_some_and(|token| token.is_keyword("PROGRAM"))
    }

    fn at_paragraph_header(&self, division: DivisionKind) -> bool {
        let name = match self.peek().and_then(Token::as_word) {
            Some(name) => name,
            None => return false,
        };
        matches!(self.peek_at(1), Some(Token::Period)) && division.is_paragraph_name(name)
    }

    /// End of input, a new division or END PROGRAM.
    fn at_boundary(&self) -> bool {
        self.at_end() || self.at_division_header().is_some() || self.at_end_program()
    }

    // Rules

    fn start_rule(mut self) -> Result<ParseNode, GrammarError> {
        if self.tokens.is_empty() {
            return Err(GrammarError::EmptySource);
        }
        let unit = self.compilation_unit()?;
        let end = self.end_offset();
        Ok(ParseNode::rule(
            Rule::StartRule,
            vec![unit, ParseNode::terminal(EOF_TEXT, end..end)],
        ))
    }

    fn compilation_unit(&mut self) -> Result<ParseNode, GrammarError> {
        let mut units = Vec::new();
        while !self.at_end() {
            units.push(self.program_unit()?);
        }
        Ok(ParseNode::rule(Rule::CompilationUnit, units))
    }

    fn program_unit(&mut self) -> Result<ParseNode, GrammarError> {
        if self.at_division_header() != Some(DivisionKind::Identification) {
            return Err(self.unexpected("IDENTIFICATION DIVISION"));
        }
        let mut children = vec![self.division(DivisionKind::Identification)];
        let mut last = DivisionKind::Identification;

        loop {
            if self.at_end() {
                break;
            }
            if self.at_end_program() {
                children.push(self.end_program());
                break;
            }
            match self.at_division_header() {
                Some(DivisionKind::Identification) => break,
                Some(kind) if kind > last => {
                    children.push(self.division(kind));
                    last = kind;
                }
                Some(_) => {
                    let expected = format!("a division after the {} DIVISION", last.keyword());
                    return Err(self.unexpected(&expected));
                }
                None => return Err(self.unexpected("a DIVISION header or END PROGRAM")),
            }
        }

        Ok(ParseNode::rule(Rule::ProgramUnit, children))
    }

    fn division(&mut self, kind: DivisionKind) -> ParseNode {
        // KEYWORD DIVISION [USING ...] .
        let mut children = vec![self.bump(), self.bump()];
        self.header_tail(&mut children);

        while !self.at_boundary() {
            if self.at_section_header() {
                children.push(self.section(kind));
            } else if self.at_paragraph_header(kind) {
                children.push(self.paragraph(kind));
            } else {
                children.push(self.sentence(kind));
            }
        }

        ParseNode::rule(kind.rule(), children)
    }

    fn section(&mut self, kind: DivisionKind) -> ParseNode {
        // NAME SECTION [priority] .
        let mut children = vec![self.bump(), self.bump()];
        self.header_tail(&mut children);

        while !self.at_boundary() && !self.at_section_header() {
            if self.at_paragraph_header(kind) {
                children.push(self.paragraph(kind));
            } else {
                children.push(self.sentence(kind));
            }
        }

        ParseNode::rule(Rule::Section, children)
    }

    fn paragraph(&mut self, kind: DivisionKind) -> ParseNode {
        // NAME .
        let mut children = vec![self.bump(), self.bump()];

        while !self.at_boundary() && !self.at_section_header() && !self.at_paragraph_header(kind)
        {
            children.push(self.sentence(kind));
        }

        ParseNode::rule(Rule::Paragraph, children)
    }

    /// Consume header tokens through the closing period.
    fn header_tail(&mut self, children: &mut Vec<ParseNode>) {
        loop {
            if self.at_boundary() {
                children.push(self.missing_period());
                return;
            }
            let is_period = matches!(self.peek(), Some(Token::Period));
            children.push(self.bump());
            if is_period {
                return;
            }
        }
    }

    fn sentence(&mut self, kind: DivisionKind) -> ParseNode {
        let mut children = Vec::new();
        let mut statement: Option<(&'static str, Vec<ParseNode>)> = None;

        loop {
            if self.at_boundary() {
                flush_statement(&mut statement, &mut children);
                children.push(self.missing_period());
                break;
            }
            if matches!(self.peek(), Some(Token::Period)) {
                flush_statement(&mut statement, &mut children);
                children.push(self.bump());
                break;
            }

            let opens = if kind.has_statements() {
                self.peek().and_then(Token::as_word).and_then(verb)
            } else {
                None
            };
            let leaf = self.bump();
            if let Some(opened) = opens {
                flush_statement(&mut statement, &mut children);
                statement = Some((opened, vec![leaf]));
            } else if let Some((_, leaves)) = statement.as_mut() {
                leaves.push(leaf);
            } else {
                children.push(leaf);
            }
        }

        ParseNode::rule(Rule::Sentence, children)
    }

    fn end_program(&mut self) -> ParseNode {
        // END PROGRAM [NAME] .
        let mut children = vec![self.bump(), self.bump()];
        while let Some(token) = self.peek() {
            let is_period = matches!(token, Token::Period);
            if !is_period && (self.at_division_header().is_some() || self.at_end_program()) {
                break;
            }
            children.push(self.bump());
            if is_period {
                return ParseNode::rule(Rule::EndProgramStatement, children);
            }
        }
        children.push(self.missing_period());
        ParseNode::rule(Rule::EndProgramStatement, children)
    }
}

fn flush_statement(
    statement: &mut Option<(&'static str, Vec<ParseNode>)>,
    children: &mut Vec<ParseNode>,
) {
    if let Some((verb, leaves)) = statement.take() {
        children.push(ParseNode::rule(Rule::Statement(verb.to_string()), leaves));
    }
}

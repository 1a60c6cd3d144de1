//! Single-pass scanner over expression text.
//!
//! One left-to-right scan with an explicit operand/operator state and a
//! stack of open delimiter frames. The scanner never aborts: every finding
//! is collected and reported, so malformed text yields as complete a
//! picture as one pass allows.

use crate::types::FunctionRegistry;

use super::diagnostic::{Diagnostic, DiagnosticKind, Validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectOperand,
    ExpectOperator,
}

/// An open `(` belonging to a function call's argument list.
#[derive(Debug)]
struct CallFrame {
    name: String,
    /// Arity from the registry; `None` for unknown functions.
    expected: Option<usize>,
    commas: usize,
}

/// An open `(`; plain group or function argument list.
#[derive(Debug)]
struct Frame {
    opened_at: usize,
    call: Option<CallFrame>,
    /// Whether any token has been consumed inside this frame.
    content: bool,
}

pub(crate) fn scan(text: &str, registry: &FunctionRegistry) -> Validation {
    Scanner::new(text, registry).run()
}

struct Scanner<'a> {
    src: &'a str,
    chars: Vec<(usize, char)>,
    i: usize,
    registry: &'a FunctionRegistry,
    state: State,
    frames: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
    saw_token: bool,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, registry: &'a FunctionRegistry) -> Self {
        Self {
            src,
            chars: src.char_indices().collect(),
            i: 0,
            registry,
            state: State::ExpectOperand,
            frames: Vec::new(),
            diagnostics: Vec::new(),
            saw_token: false,
        }
    }

    fn run(mut self) -> Validation {
        loop {
            self.skip_ws();
            let Some((pos, c)) = self.peek() else { break };
            match c {
                '(' => self.open_paren(pos),
                ')' => self.close_paren(pos),
                ',' => self.comma(pos),
                '&' | '|' => self.logical(pos, c),
                '<' | '>' | '=' => self.comparator(pos, c),
                '!' => self.bang(pos),
                '@' => self.function_call(pos),
                '{' => self.rule_ref(pos, '{', '}'),
                '}' => {
                    self.bump();
                    self.report(pos, DiagnosticKind::UnbalancedCloser('}'));
                }
                '"' => self.string_literal(pos),
                '-' => self.minus(pos),
                c if c.is_ascii_digit() => self.number(pos),
                c if c.is_ascii_alphabetic() || c == '_' => self.word(pos),
                other => {
                    self.bump();
                    self.report(pos, DiagnosticKind::UnexpectedCharacter(other));
                }
            }
        }
        self.finish()
    }

    // -- Cursor helpers -----------------------------------------------------

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.i).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.peek().map(|(_, c)| c)
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let item = self.peek();
        if item.is_some() {
            self.i += 1;
        }
        item
    }

    fn skip_ws(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.i += 1;
        }
    }

    /// Byte offset just past the last consumed character.
    fn end_offset(&self) -> usize {
        self.src.len()
    }

    fn report(&mut self, position: usize, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic::new(position, kind));
    }

    /// Mark the innermost open frame as non-empty.
    fn mark_content(&mut self) {
        self.saw_token = true;
        if let Some(frame) = self.frames.last_mut() {
            frame.content = true;
        }
    }

    /// Called at the start of every operand token. Two operands in a row
    /// means a missing connective.
    fn operand_start(&mut self, pos: usize) {
        if self.state == State::ExpectOperator {
            self.report(pos, DiagnosticKind::MissingOperator);
        }
        self.mark_content();
    }

    fn read_ident(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                name.push(c);
                self.i += 1;
            } else {
                break;
            }
        }
        name
    }

    /// Lookahead: does a `Rule ` keyword follow (after whitespace)?
    fn rule_keyword_ahead(&self) -> bool {
        let mut j = self.i;
        while self.chars.get(j).is_some_and(|&(_, c)| c.is_whitespace()) {
            j += 1;
        }
        for expected in "Rule".chars() {
            match self.chars.get(j) {
                Some(&(_, c)) if c == expected => j += 1,
                _ => return false,
            }
        }
        self.chars.get(j).is_some_and(|&(_, c)| c.is_whitespace())
    }

    // -- Token handlers -----------------------------------------------------

    fn open_paren(&mut self, pos: usize) {
        self.bump();
        if self.state == State::ExpectOperand && self.rule_keyword_ahead() {
            // Paren-form rule reference, "(Rule X evaluates to true)".
            self.rule_ref_body(pos, '(', ')');
            return;
        }
        self.operand_start(pos);
        self.frames.push(Frame {
            opened_at: pos,
            call: None,
            content: false,
        });
        self.state = State::ExpectOperand;
    }

    fn close_paren(&mut self, pos: usize) {
        self.bump();
        match self.frames.pop() {
            None => self.report(pos, DiagnosticKind::UnbalancedCloser(')')),
            Some(frame) => {
                let empty = !frame.content && self.state == State::ExpectOperand;
                if self.state == State::ExpectOperand && frame.content {
                    self.report(pos, DiagnosticKind::MissingOperand);
                }
                match frame.call {
                    None => {
                        if empty {
                            self.report(pos, DiagnosticKind::EmptyGroup);
                        }
                    }
                    Some(call) => {
                        let found = if empty { 0 } else { call.commas + 1 };
                        if let Some(expected) = call.expected {
                            if found != expected {
                                self.report(
                                    pos,
                                    DiagnosticKind::ArityMismatch {
                                        function: call.name,
                                        expected,
                                        found,
                                    },
                                );
                            }
                        }
                    }
                }
            }
        }
        self.state = State::ExpectOperator;
    }

    fn comma(&mut self, pos: usize) {
        self.bump();
        let in_call = self.frames.last().is_some_and(|f| f.call.is_some());
        if !in_call {
            self.report(pos, DiagnosticKind::MisplacedComma);
            return;
        }
        if self.state == State::ExpectOperand {
            self.report(pos, DiagnosticKind::MissingOperand);
        }
        if let Some(frame) = self.frames.last_mut() {
            if let Some(call) = frame.call.as_mut() {
                call.commas += 1;
            }
            frame.content = true;
        }
        self.state = State::ExpectOperand;
    }

    fn logical(&mut self, pos: usize, c: char) {
        self.bump();
        if self.peek_char() == Some(c) {
            self.bump();
            let token = if c == '&' { "&&" } else { "||" };
            self.operator_token(pos, token);
        } else {
            self.report(pos, DiagnosticKind::InvalidOperator(c.to_string()));
        }
    }

    fn comparator(&mut self, pos: usize, c: char) {
        self.bump();
        let eq_follows = self.peek_char() == Some('=');
        let token = match (c, eq_follows) {
            ('<', true) => "<=",
            ('<', false) => "<",
            ('>', true) => ">=",
            ('>', false) => ">",
            ('=', true) => "==",
            _ => {
                self.report(pos, DiagnosticKind::InvalidOperator("=".to_owned()));
                return;
            }
        };
        if eq_follows {
            self.bump();
        }
        self.operator_token(pos, token);
    }

    fn bang(&mut self, pos: usize) {
        self.bump();
        if self.peek_char() == Some('=') {
            self.bump();
            self.operator_token(pos, "!=");
        } else if self.state == State::ExpectOperator {
            self.report(pos, DiagnosticKind::MisplacedOperator("!".to_owned()));
        }
        // A bare '!' while expecting an operand is the negation marker.
    }

    fn operator_token(&mut self, pos: usize, token: &str) {
        if self.state == State::ExpectOperator {
            self.mark_content();
            self.state = State::ExpectOperand;
        } else {
            self.report(pos, DiagnosticKind::MisplacedOperator(token.to_owned()));
        }
    }

    fn function_call(&mut self, pos: usize) {
        self.bump();
        let name = self.read_ident();
        if name.is_empty() {
            self.report(pos, DiagnosticKind::UnexpectedCharacter('@'));
            return;
        }
        self.operand_start(pos);
        let expected = self.registry.get(&name).map(crate::types::Signature::arity);
        if expected.is_none() {
            self.report(pos, DiagnosticKind::UnknownFunction(name.clone()));
        }
        self.skip_ws();
        if let Some((paren_pos, '(')) = self.peek() {
            self.bump();
            self.frames.push(Frame {
                opened_at: paren_pos,
                call: Some(CallFrame {
                    name,
                    expected,
                    commas: 0,
                }),
                content: false,
            });
            self.state = State::ExpectOperand;
        } else {
            self.report(pos, DiagnosticKind::MalformedFunctionCall);
            self.state = State::ExpectOperator;
        }
    }

    fn rule_ref(&mut self, pos: usize, opener: char, closer: char) {
        self.bump();
        self.rule_ref_body(pos, opener, closer);
    }

    /// Scan a rule-reference phrase after its opener has been consumed.
    fn rule_ref_body(&mut self, open_pos: usize, opener: char, closer: char) {
        self.operand_start(open_pos);
        let body_start = self
            .peek()
            .map_or_else(|| self.end_offset(), |(pos, _)| pos);
        let mut body_end = None;
        while let Some((pos, c)) = self.peek() {
            if c == closer {
                self.bump();
                body_end = Some(pos);
                break;
            }
            self.bump();
        }
        let Some(body_end) = body_end else {
            self.report(open_pos, DiagnosticKind::UnterminatedGroup(opener));
            self.state = State::ExpectOperator;
            return;
        };
        self.check_rule_phrase(&self.src[body_start..body_end].to_owned(), body_start);
        self.state = State::ExpectOperator;
    }

    /// Check the fixed `Rule <Name> evaluates to true|false` token shape.
    fn check_rule_phrase(&mut self, body: &str, offset: usize) {
        let mut tokens = body.split_whitespace();
        if tokens.next() != Some("Rule") {
            self.report(
                offset,
                DiagnosticKind::MalformedRuleRef("expected keyword 'Rule'".to_owned()),
            );
            return;
        }
        let Some(name) = tokens.next() else {
            self.report(
                offset,
                DiagnosticKind::MalformedRuleRef("missing rule name".to_owned()),
            );
            return;
        };
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.report(
                offset,
                DiagnosticKind::MalformedRuleRef(format!("'{name}' is not a rule name")),
            );
            return;
        }
        let tail = (tokens.next(), tokens.next(), tokens.next());
        match tail {
            (Some("evaluates"), Some("to"), Some("true" | "false")) => {}
            _ => {
                self.report(
                    offset,
                    DiagnosticKind::MalformedRuleRef(
                        "expected 'evaluates to true' or 'evaluates to false'".to_owned(),
                    ),
                );
                return;
            }
        }
        if tokens.next().is_some() {
            self.report(
                offset,
                DiagnosticKind::MalformedRuleRef("unexpected trailing tokens".to_owned()),
            );
        }
    }

    fn string_literal(&mut self, pos: usize) {
        self.bump();
        self.operand_start(pos);
        loop {
            match self.bump() {
                None => {
                    self.report(pos, DiagnosticKind::UnterminatedString);
                    break;
                }
                Some((_, '"')) => break,
                Some((_, '\n')) => {
                    self.report(pos, DiagnosticKind::UnterminatedString);
                    break;
                }
                Some((_, '\\')) => {
                    self.bump();
                }
                Some(_) => {}
            }
        }
        self.state = State::ExpectOperator;
    }

    fn number(&mut self, pos: usize) {
        self.operand_start(pos);
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
        {
            self.i += 1;
        }
        self.state = State::ExpectOperator;
    }

    fn minus(&mut self, pos: usize) {
        self.bump();
        if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.number(pos);
        } else {
            self.report(pos, DiagnosticKind::UnexpectedCharacter('-'));
        }
    }

    fn word(&mut self, pos: usize) {
        let name = self.read_ident();
        if name == "If" && self.state == State::ExpectOperand {
            // In-the-wild "If (...)" prefix before a condition or a
            // paren-form rule reference.
            let mut j = self.i;
            while self.chars.get(j).is_some_and(|&(_, c)| c.is_whitespace()) {
                j += 1;
            }
            if self.chars.get(j).is_some_and(|&(_, c)| c == '(') {
                return;
            }
        }
        self.operand_start(pos);
        self.state = State::ExpectOperator;
    }

    fn finish(mut self) -> Validation {
        while let Some(frame) = self.frames.pop() {
            self.diagnostics.push(Diagnostic::new(
                frame.opened_at,
                DiagnosticKind::UnterminatedGroup('('),
            ));
        }
        if !self.saw_token {
            self.diagnostics
                .push(Diagnostic::new(0, DiagnosticKind::EmptyExpression));
        } else if self.state == State::ExpectOperand {
            self.diagnostics.push(Diagnostic::new(
                self.end_offset(),
                DiagnosticKind::MissingOperand,
            ));
        }
        self.diagnostics.sort_by_key(|d| d.position);
        Validation::new(self.diagnostics)
    }
}

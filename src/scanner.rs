use std::collections::HashMap;
use std::iter::Peekable;
use std::mem;
use std::str::CharIndices;

use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::*;
use crate::source_loc::*;
use crate::token::*;
use crate::util::{is_alphabetic, is_alphanumeric, is_digit};

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, TokenType> = {
        let mut m = HashMap::new();
        use crate::token::TokenType::*;
        m.insert("and", And);
        m.insert("class", Class);
        m.insert("else", Else);
        m.insert("false", False);
        m.insert("for", For);
        m.insert("fun", Fun);
        m.insert("if", If);
        m.insert("nil", Nil);
        m.insert("or", Or);
        m.insert("print", Print);
        m.insert("return", Return);
        m.insert("super", Super);
        m.insert("this", This);
        m.insert("true", True);
        m.insert("var", Var);
        m.insert("while", While);

        m
    };
}

// Scans the whole source, collecting every lexical error.  Fails if there was
// at least one.
pub fn scan(source: &str) -> Result<Vec<Token>, ScanError> {
    let mut scanner = Scanner::new(source);
    let mut diagnostics = Diagnostics::new();
    let tokens = scanner.scan_tokens(&mut diagnostics);

    diagnostics.into_result(tokens)
}

#[derive(Clone)]
pub struct Scanner<'source> {
    source: &'source str,
    tokens: Vec<Token<'source>>,
    chars: Peekable<CharIndices<'source>>,
    // Byte offsets into source.
    start: usize,
    current: usize,
    line: u32,
    // Grapheme column at the byte offset column_mark.  Columns are counted
    // forward from the mark so a line is only segmented once.
    column_mark: usize,
    column: u16,
    start_column: u16,
    error_count: usize,
}

impl<'source> Scanner<'source> {
    pub fn new(source: &'source str) -> Scanner<'source> {
        Scanner {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column_mark: 0,
            column: 1,
            start_column: 1,
            error_count: 0,
        }
    }

    // Runs to the end of the source.  Errors go to the reporter as they're
    // found and never stop the scan.  Calling this again only produces the
    // Eof token.
    pub fn scan_tokens(&mut self, reporter: &mut dyn Reporter) -> Vec<Token<'source>> {
        while ! self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.current;
            self.start_column = self.column_at(self.start);
            self.scan_token(reporter);
        }

        self.start = self.current;
        self.start_column = self.column_at(self.current);
        self.add_token(TokenType::Eof);

        debug!(tokens = self.tokens.len(), errors = self.error_count, "scanned source");

        mem::take(&mut self.tokens)
    }

    // Dispatch looks at single chars so a quote or operator followed by a
    // combining mark is still a quote or operator.
    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = match self.advance() {
            None => return,
            Some(c) => c,
        };

        use crate::token::TokenType::*;
        match c {
            '(' => self.add_token(LeftParen),
            ')' => self.add_token(RightParen),
            '{' => self.add_token(LeftBrace),
            '}' => self.add_token(RightBrace),
            ',' => self.add_token(Comma),
            '.' => self.add_token(Dot),
            '-' => self.add_token(Minus),
            '+' => self.add_token(Plus),
            ';' => self.add_token(Semicolon),
            '*' => self.add_token(Star),
            '!' => {
                if self.matches('=') {
                    self.add_token(BangEqual);
                } else {
                    self.add_token(Bang);
                }
            }
            '=' => {
                if self.matches('=') {
                    self.add_token(EqualEqual);
                } else {
                    self.add_token(Equal);
                }
            }
            '<' => {
                if self.matches('=') {
                    self.add_token(LessEqual);
                } else {
                    self.add_token(Less);
                }
            }
            '>' => {
                if self.matches('=') {
                    self.add_token(GreaterEqual);
                } else {
                    self.add_token(Greater);
                }
            }
            '/' => {
                if self.matches('/') {
                    // A comment until the end of the line.
                    self.advance_while(|c| c != '\n');
                } else {
                    self.add_token(Slash);
                }
            }
            ' ' | '\r' | '\t' => (), // Ignore whitespace.
            '\n' => self.newline(),
            '"' => self.scan_string(reporter),
            _ => {
                if is_digit(c) {
                    self.scan_number();
                }
                else if is_alphabetic(c) {
                    self.scan_identifier();
                }
                else {
                    let loc = SourceLoc::new(self.line, self.start_column);
                    self.error(reporter, loc, ScanErrorKind::UnexpectedCharacter(c.to_string()));
                }
            }
        };
    }

    // Conditionally advance if the next char matches.  Returns true if we
    // matched.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        // Consume this char when it's expected.
        self.advance();

        true
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    // This is looking ahead 2 chars.
    fn peek_next(&self) -> Option<char> {
        let mut cloned = self.chars.clone();
        cloned.next();

        cloned.next().map(|(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.current = i + c.len_utf8();

        Some(c)
    }

    fn advance_while(&mut self, predicate: fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if ! predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column_mark = self.current;
        self.column = 1;
    }

    // Grapheme column of a byte offset on the current line.  Offsets must not
    // go backwards.
    fn column_at(&mut self, offset: usize) -> u16 {
        let counted = self.source[self.column_mark..offset].graphemes(true).count();
        self.column = self.column.saturating_add(u16::try_from(counted).unwrap_or(u16::MAX));
        self.column_mark = offset;

        self.column
    }

    fn scan_string(&mut self, reporter: &mut dyn Reporter) {
        let start_line = self.line;

        loop {
            match self.peek() {
                None => {
                    let loc = SourceLoc::new(self.line, self.column_at(self.current));
                    self.error(reporter, loc, ScanErrorKind::UnterminatedString);
                    return;
                }
                Some('"') => break,
                Some(c) => {
                    self.advance();
                    if c == '\n' {
                        self.newline();
                    }
                }
            };
        }

        // The closing quote.
        self.advance();

        // Trim the surrounding quotes.
        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenType::String, Literal::String(value), start_line);
    }

    fn scan_number(&mut self) {
        self.advance_while(is_digit);

        // Look for a fractional part.  A trailing dot is left for the next
        // token.
        if self.peek() == Some('.') && self.peek_next().map_or(false, is_digit) {
            // Consume the dot.
            self.advance();
            self.advance_while(is_digit);
        }

        let text = &self.source[self.start..self.current];
        // ASCII digits with an optional fraction always parse.
        let number: f64 = text.parse().unwrap_or(f64::NAN);
        self.add_literal_token(TokenType::Number, Literal::Number(number), self.line);
    }

    // Identifiers are made of whole grapheme clusters, so combining marks stay
    // attached to their letter.
    fn scan_identifier(&mut self) {
        let mut end = self.start;
        for grapheme_cluster in self.source[self.start..].graphemes(true) {
            if ! is_alphanumeric(grapheme_cluster) {
                break;
            }
            end += grapheme_cluster.len();
        }
        while self.current < end {
            self.advance();
        }

        let text = &self.source[self.start..self.current];

        // See if the identifier is a reserved word.
        let token_type = match KEYWORDS.get(text) {
            None => TokenType::Identifier,
            Some(token_type) => *token_type,
        };

        self.add_token(token_type);
    }

    fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    fn error(&mut self, reporter: &mut dyn Reporter, source_loc: SourceLoc, kind: ScanErrorKind) {
        let cause = ScanErrorCause::new(source_loc, kind);
        trace!(line = source_loc.line, column = source_loc.column, "{}", cause.kind);

        self.error_count += 1;
        reporter.report_cause(cause);
    }

    // Add a token to the output.
    fn add_token(&mut self, token_type: TokenType) {
        self.add_literal_token(token_type, Literal::Nil, self.line);
    }

    fn add_literal_token(&mut self, token_type: TokenType, literal: Literal<'source>, line: u32) {
        let text = &self.source[self.start..self.current];
        let token = Token::new(token_type, text, literal, line, self.start_column);
        self.tokens.push(token);
    }
}

use thiserror::Error;

use crate::source_loc::*;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ScanErrorKind {
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(String),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("[line {}] Error: {kind}", .source_loc.line)]
pub struct ScanErrorCause {
    pub source_loc: SourceLoc,
    pub kind: ScanErrorKind,
}

impl ScanErrorCause {
    pub fn new(source_loc: SourceLoc, kind: ScanErrorKind) -> ScanErrorCause {
        ScanErrorCause {
            source_loc,
            kind,
        }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

// Every lexical error of a single scan, in source order.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{}", first_message(.causes))]
pub struct ScanError {
    pub causes: Vec<ScanErrorCause>,
}

impl ScanError {
    pub fn new(causes: Vec<ScanErrorCause>) -> ScanError {
        ScanError {
            causes,
        }
    }

    pub fn message(&self) -> String {
        first_message(&self.causes)
    }

    pub fn source_loc(&self) -> SourceLoc {
        match self.causes.first() {
            None => SourceLoc::default(),
            Some(err) => err.source_loc,
        }
    }
}

fn first_message(causes: &[ScanErrorCause]) -> String {
    match causes.first() {
        None => "unknown cause".to_string(),
        Some(err) => err.message(),
    }
}

// Sink for lexical diagnostics.  The scanner calls it once per error and then
// keeps going regardless of what the reporter does.
pub trait Reporter {
    fn report(&mut self, line: u32, message: &str);

    fn report_cause(&mut self, cause: ScanErrorCause) {
        self.report(cause.source_loc.line, &cause.message());
    }
}

impl<F> Reporter for F where F: FnMut(u32, &str) {
    fn report(&mut self, line: u32, message: &str) {
        self(line, message)
    }
}

// Keeps every cause it's given, with its column and kind.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Diagnostics {
    causes: Vec<ScanErrorCause>,
}

impl Diagnostics {
    pub fn new() -> Diagnostics {
        Diagnostics::default()
    }

    pub fn causes(&self) -> &[ScanErrorCause] {
        &self.causes
    }

    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    // Hands back the value when nothing was reported.
    pub fn into_result<T>(self, value: T) -> Result<T, ScanError> {
        if self.causes.is_empty() {
            Ok(value)
        } else {
            Err(ScanError::new(self.causes))
        }
    }
}

impl Reporter for Diagnostics {
    // A bare line and message has no kind to keep; the scanner always goes
    // through report_cause.
    fn report(&mut self, _line: u32, _message: &str) {}

    fn report_cause(&mut self, cause: ScanErrorCause) {
        self.causes.push(cause);
    }
}

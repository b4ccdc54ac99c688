//! Diagnostic reporting.
//!
//! The lexer and parser are fatal stages (the first error halts the
//! pipeline), while the analyser accumulates every diagnostic it can find.
//! This module's [`Diagnostic`] and [`Handler`] serve both usages: a fatal
//! stage builds one `Diagnostic` and turns it directly into an `Err`, while
//! the analyser pushes every `Diagnostic` it produces into a `Handler` and
//! keeps going.

use std::fmt;

use crate::Position;

/// Diagnostic severity.
///
/// MASClang has no severity distinction today (every diagnostic it emits
/// is an error), but the enum stays open (`Warning`/`Note`) so a future
/// warning pass (e.g. unused variables) has somewhere to report to without
/// a breaking change to this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A single diagnostic message anchored to a source position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub pos: Position,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, pos: Position) -> Self {
        Self {
            level,
            message: message.into(),
            pos,
        }
    }

    pub fn error(message: impl Into<String>, pos: Position) -> Self {
        Self::new(Level::Error, message, pos)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.level, self.message, self.pos)
    }
}

/// Accumulates diagnostics over the course of one semantic analysis pass.
///
/// Not wrapped in `RefCell`: the analyser owns it uniquely and mutates it
/// through `&mut self`. No two components ever need to hold a shared
/// reference to the same handler at once.
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, pos: Position) {
        self.report(Diagnostic::error(message, pos));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

//! `masc-drv`, the reference driver: a thin binary that reads a source
//! file and runs it through the lex/parse/analyse pipeline, printing
//! whatever diagnostics come out.
//!
//! Library crates upstream of this one (`masc-lex`, `masc-par`,
//! `masc-sem`) stay log-free: they are pure functions of their input
//! returning data plus diagnostics. Logging phase transitions is purely a
//! driver-level concern, layered on here via `log`/`env_logger`.

mod error;

pub use error::DriverError;

use std::path::PathBuf;

use masc_par::Parser;
use masc_sem::analyse;
use masc_util::{Diagnostic, Interner};

/// The driver's only configurable surface: which file to read, and
/// whether to narrate phase transitions.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub verbose: bool,
}

impl Default for Config {
    /// A reference driver reads a fixed path by default (`input.test`).
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input.test"),
            verbose: false,
        }
    }
}

/// One compilation's state: just the config, since `masc-drv` doesn't
/// accumulate anything across runs.
pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over `self.config.input_path`: lex+parse,
    /// then (if that succeeded) analyse, printing every diagnostic line by
    /// line and returning `Err` if any were produced.
    pub fn compile(&mut self) -> Result<(), DriverError> {
        let source = self.read_source()?;

        if self.config.verbose {
            log::info!("parsing {}", self.config.input_path.display());
        }
        let mut interner = Interner::new();
        let program = match parse(&source, &mut interner) {
            Ok(program) => program,
            Err(diagnostic) => {
                println!("{diagnostic}");
                return Err(DriverError::CompilationFailed);
            }
        };

        if self.config.verbose {
            log::info!("analysing {}", self.config.input_path.display());
        }
        let diagnostics = analyse(&program, &interner);
        for diagnostic in &diagnostics {
            println!("{diagnostic}");
        }

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(DriverError::CompilationFailed)
        }
    }

    fn read_source(&self) -> Result<String, DriverError> {
        if self.config.verbose {
            log::info!("reading {}", self.config.input_path.display());
        }
        std::fs::read_to_string(&self.config.input_path).map_err(|source| DriverError::Io {
            path: self.config.input_path.clone(),
            source,
        })
    }
}

/// Lexes and parses `source` in one shot, converting the first fatal error
/// (scan and syntax errors are both fatal) into a single [`Diagnostic`]
/// rather than a crate-specific error type, since the driver's output
/// contract doesn't care which stage produced it.
fn parse(source: &str, interner: &mut Interner) -> Result<masc_par::ast::Program, Diagnostic> {
    let mut parser = Parser::new(source, interner).map_err(Diagnostic::from)?;
    parser.parse_program().map_err(Diagnostic::from)
}

/// Entry point used by `src/main.rs`. Reads the input path from the first
/// CLI argument if present, else falls back to [`Config::default`], so the
/// binary remains testable against arbitrary fixtures without requiring
/// `input.test` to exist in the test's working directory.
pub fn main() -> Result<(), DriverError> {
    env_logger::try_init().ok();

    let mut config = Config::default();
    if let Some(path) = std::env::args().nth(1) {
        config.input_path = PathBuf::from(path);
    }
    config.verbose = std::env::var_os("MASC_VERBOSE").is_some();

    Session::new(config).compile()
}

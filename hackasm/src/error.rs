use color_print::cprintln;
use thiserror::Error;

use crate::parser::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Instruction mixes assignment and jump forms: `{0}`")]
    ConflictingInstructionForm(String),

    #[error("Unknown mnemonic: `{0}`")]
    UnknownMnemonic(String),

    #[error("Symbol address out of range (max 32766): {0}")]
    AddressOutOfRange(usize),

    #[error("Value does not fit in 15 bits: `{0}`")]
    ValueOutOfRange(String),

    #[error("Re-defined label: `{0}`")]
    DuplicateLabel(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error tied to the source line that raised it. The core only builds
/// these; printing happens at the top level.
#[derive(Debug)]
pub struct Diagnostic {
    pub error: Error,
    pub location: Option<(String, usize, String)>,
}

impl Diagnostic {
    pub fn new(error: Error, line: &Line) -> Self {
        Diagnostic {
            error,
            location: Some((line.path().to_string(), line.no(), line.raw().to_string())),
        }
    }

    /// For errors with no source position, like file I/O.
    pub fn bare(error: Error) -> Self {
        Diagnostic {
            error,
            location: None,
        }
    }

    /// Print with file location and line excerpt, rustc style.
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self.error);
        if let Some((path, no, raw)) = &self.location {
            cprintln!("     <blue>--></> <underline>{}:{}</>", path, no);
            cprintln!("      <blue>|</>");
            cprintln!(" <blue>{:>4} |</> {}", no, raw);
            cprintln!("      <blue>|</>");
        }
    }
}

use color_print::cformat;

use crate::error::{Diagnostic, Error};

// ----------------------------------------------------------------------------
// Line

/// One raw source line with its `//` comment split off and all
/// whitespace dropped from the code part. Blank and comment-only lines
/// carry no statement but are kept for the dump listing.
#[derive(Debug, Clone)]
pub struct Line {
    path: String,
    idx: usize,
    raw: String,
    comment: Option<String>,
    stmt: Option<Stmt>,
}

impl Line {
    pub fn parse(path: &str, idx: usize, raw: &str) -> Result<Line, Diagnostic> {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        // Whitespace is never significant inside an instruction, so the
        // code part is compacted, not just trimmed: `D = A` and
        // `( LOOP )` read as `D=A` and `(LOOP)`.
        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();
        let mut line = Line {
            path: path.to_string(),
            idx,
            raw: raw.to_string(),
            comment,
            stmt: None,
        };
        if !code.is_empty() {
            let stmt = Stmt::parse(&code).map_err(|err| Diagnostic::new(err, &line))?;
            line.stmt = Some(stmt);
        }
        Ok(line)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 1-based line number.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn stmt(&self) -> Option<&Stmt> {
        self.stmt.as_ref()
    }

    /// One row of the dump listing. `resolved` is `(pc, word)` for lines
    /// that produced an instruction.
    pub fn cformat(&self, resolved: Option<(u16, u16)>) -> String {
        let pc = match resolved {
            Some((pc, _)) => cformat!("<green>{:0>4X}</>", pc),
            None => " ".repeat(4),
        };
        let bin = match resolved {
            Some((_, word)) => format!("{:016b}", word),
            None => " ".repeat(16),
        };
        let stmt = match &self.stmt {
            Some(stmt) => stmt.cformat(),
            None => String::new(),
        };
        let comment = match &self.comment {
            Some(c) => format!(" //{}", c),
            None => String::new(),
        };
        format!("| {:>4} | {} | {} | {}{}", self.no(), pc, bin, stmt, comment)
    }
}

// ----------------------------------------------------------------------------
// Statement

/// One classified instruction. Computation, destination and jump fields
/// stay as raw text here; mnemonic legality is checked when the fields
/// are encoded, not when the line is classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `@target`
    A(Target),
    /// `dest=comp` or `comp;jump`
    C {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
    /// `(NAME)` — binds NAME to the next instruction address.
    Label(String),
}

impl Stmt {
    /// Classify one trimmed, non-empty line. First match wins:
    /// `@...`, then `(...)`, then the two C-instruction shapes.
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        if let Some(target) = code.strip_prefix('@') {
            if target.is_empty() {
                return Err(Error::MalformedInstruction(code.to_string()));
            }
            return Ok(Stmt::A(Target::parse(target)?));
        }

        if code.starts_with('(') {
            if let Some(close) = code.find(')') {
                let name = &code[1..close];
                if name.is_empty() {
                    return Err(Error::MalformedInstruction(code.to_string()));
                }
                return Ok(Stmt::Label(name.to_string()));
            }
        }

        if code.contains('=') || code.contains(';') {
            // A split counts only when both sides of the separator are
            // non-empty. A line where both splits hold would carry a
            // destination and a jump at once, which the instruction
            // format cannot express.
            let assign = code.split_once('=').filter(|(d, c)| !d.is_empty() && !c.is_empty());
            let branch = code.split_once(';').filter(|(c, j)| !c.is_empty() && !j.is_empty());
            return match (assign, branch) {
                (Some(_), Some(_)) => Err(Error::ConflictingInstructionForm(code.to_string())),
                (Some((dest, comp)), None) => Ok(Stmt::C {
                    dest: Some(dest.to_string()),
                    comp: comp.to_string(),
                    jump: None,
                }),
                (None, Some((comp, jump))) => Ok(Stmt::C {
                    dest: None,
                    comp: comp.to_string(),
                    jump: Some(jump.to_string()),
                }),
                (None, None) => Err(Error::MalformedInstruction(code.to_string())),
            };
        }

        Err(Error::MalformedInstruction(code.to_string()))
    }

    pub fn cformat(&self) -> String {
        match self {
            Stmt::A(Target::Literal(v)) => cformat!("<red>@</><yellow>{}</>", v),
            Stmt::A(Target::Symbol(s)) => cformat!("<red>@</><green>{}</>", s),
            Stmt::C { dest, comp, jump } => {
                let dest = match dest {
                    Some(d) => format!("{}=", d),
                    None => String::new(),
                };
                let jump = match jump {
                    Some(j) => format!(";{}", j),
                    None => String::new(),
                };
                cformat!("<blue>{}</><red>{}</><blue>{}</>", dest, comp, jump)
            }
            Stmt::Label(name) => cformat!("<green>({})</>", name),
        }
    }
}

// ----------------------------------------------------------------------------
// A-instruction target

/// Target of an A-instruction. Digit-only text is a decimal literal and
/// bypasses the symbol table; anything else is a symbol to resolve.
/// Negative numbers are not literals, so `@-1` classifies as a symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Literal(u16),
    Symbol(String),
}

impl Target {
    fn parse(s: &str) -> Result<Target, Error> {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return match s.parse::<u32>() {
                Ok(v) if v <= arch::inst::ADDR_MAX as u32 => Ok(Target::Literal(v as u16)),
                _ => Err(Error::ValueOutOfRange(s.to_string())),
            };
        }
        Ok(Target::Symbol(s.to_string()))
    }
}

// ----------------------------------------------------------------------------

use arch::comp::Comp;
use arch::dest::Dest;
use arch::inst::Inst;
use arch::jump::Jump;

use crate::error::{Diagnostic, Error};
use crate::parser::{Line, Stmt, Target};
use crate::symbol::{self, SymbolTable};

/// First free address for variables.
const VAR_BASE: u16 = 16;

/// Two-pass translation: collect label bindings, then resolve symbols
/// and encode every instruction in input order. The first error aborts
/// the run.
pub fn assemble(lines: &[Line]) -> Result<Vec<u16>, Diagnostic> {
    let mut symbols = collect_labels(lines)?;

    let mut words = Vec::with_capacity(lines.len());
    let mut next_var = VAR_BASE;
    for line in lines {
        let inst = match line.stmt() {
            Some(Stmt::A(target)) => encode_a(target, &mut symbols, &mut next_var),
            Some(Stmt::C { dest, comp, jump }) => {
                encode_c(dest.as_deref(), comp, jump.as_deref())
            }
            Some(Stmt::Label(_)) | None => continue,
        }
        .map_err(|err| Diagnostic::new(err, line))?;
        words.push(inst.to_bin());
    }
    Ok(words)
}

/// Pass 1. Labels bind to the address of the next instruction and take
/// no slot themselves; any rebinding is an error, so a label can neither
/// repeat nor shadow a predefined name.
fn collect_labels(lines: &[Line]) -> Result<SymbolTable, Diagnostic> {
    let mut symbols = SymbolTable::new();
    let mut pc: usize = 0;
    for line in lines {
        match line.stmt() {
            Some(Stmt::Label(name)) => {
                if symbols.contains(name) {
                    return Err(Diagnostic::new(Error::DuplicateLabel(name.clone()), line));
                }
                if pc > symbol::ADDR_MAX as usize {
                    return Err(Diagnostic::new(Error::AddressOutOfRange(pc), line));
                }
                symbols
                    .insert(name, pc as u16)
                    .map_err(|err| Diagnostic::new(err, line))?;
            }
            Some(_) => pc += 1,
            None => {}
        }
    }
    Ok(symbols)
}

/// Pass 2, A-instruction. Literals were resolved at classification; a
/// symbol either hits the table or becomes the next variable. Mnemonic
/// text is reserved and cannot name a variable.
fn encode_a(target: &Target, symbols: &mut SymbolTable, next_var: &mut u16) -> Result<Inst, Error> {
    match target {
        Target::Literal(value) => Ok(Inst::A(*value)),
        Target::Symbol(name) => {
            if arch::is_known_mnemonic(name) {
                return Err(Error::MalformedInstruction(format!("@{name}")));
            }
            let addr = match symbols.get(name) {
                Some(addr) => addr,
                None => {
                    let addr = *next_var;
                    symbols.insert(name, addr)?;
                    *next_var += 1;
                    addr
                }
            };
            Ok(Inst::A(addr))
        }
    }
}

/// Pass 2, C-instruction. Field text meets the encoding tables here;
/// absent dest/jump fields encode as the all-zero codes.
fn encode_c(dest: Option<&str>, comp: &str, jump: Option<&str>) -> Result<Inst, Error> {
    let dest = dest
        .map(|s| s.parse::<Dest>().map_err(|_| Error::UnknownMnemonic(s.to_string())))
        .transpose()?;
    let comp = comp
        .parse::<Comp>()
        .map_err(|_| Error::UnknownMnemonic(comp.to_string()))?;
    let jump = jump
        .map(|s| s.parse::<Jump>().map_err(|_| Error::UnknownMnemonic(s.to_string())))
        .transpose()?;
    Ok(Inst::C { dest, comp, jump })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &[&str]) -> Vec<Line> {
        src.iter()
            .enumerate()
            .map(|(idx, raw)| Line::parse("test.asm", idx, raw).unwrap())
            .collect()
    }

    #[test]
    fn labels_take_no_slot() {
        let lines = parse(&["(LOOP)", "@LOOP", "0;JMP"]);
        let symbols = collect_labels(&lines).unwrap();
        assert_eq!(symbols.get("LOOP"), Some(0));
    }

    #[test]
    fn duplicate_label() {
        let lines = parse(&["(END)", "@0", "(END)"]);
        let err = collect_labels(&lines).unwrap_err();
        assert!(matches!(err.error, Error::DuplicateLabel(name) if name == "END"));
    }

    #[test]
    fn label_cannot_shadow_predefined() {
        let lines = parse(&["(R3)"]);
        let err = collect_labels(&lines).unwrap_err();
        assert!(matches!(err.error, Error::DuplicateLabel(name) if name == "R3"));
    }

    #[test]
    fn label_past_addressable_range() {
        let mut src: Vec<String> = vec!["@0".to_string(); 32767];
        src.push("(OVER)".to_string());
        let lines: Vec<Line> = src
            .iter()
            .enumerate()
            .map(|(idx, raw)| Line::parse("test.asm", idx, raw).unwrap())
            .collect();
        let err = collect_labels(&lines).unwrap_err();
        assert!(matches!(err.error, Error::AddressOutOfRange(32767)));
    }

    #[test]
    fn variables_allocate_from_16() {
        let mut symbols = SymbolTable::new();
        let mut next_var = VAR_BASE;
        let foo = Target::Symbol("foo".to_string());
        let bar = Target::Symbol("bar".to_string());

        assert_eq!(encode_a(&foo, &mut symbols, &mut next_var).unwrap(), Inst::A(16));
        assert_eq!(encode_a(&bar, &mut symbols, &mut next_var).unwrap(), Inst::A(17));
        // re-use resolves, does not allocate
        assert_eq!(encode_a(&foo, &mut symbols, &mut next_var).unwrap(), Inst::A(16));
        assert_eq!(next_var, 18);
    }

    #[test]
    fn mnemonic_is_not_a_variable() {
        let mut symbols = SymbolTable::new();
        let mut next_var = VAR_BASE;
        let target = Target::Symbol("D+1".to_string());
        let err = encode_a(&target, &mut symbols, &mut next_var).unwrap_err();
        assert!(matches!(err, Error::MalformedInstruction(_)));
        assert!(!symbols.contains("D+1"));
        assert_eq!(next_var, VAR_BASE);
    }

    #[test]
    fn unknown_mnemonics() {
        assert!(matches!(
            encode_c(Some("MD"), "D+2", None),
            Err(Error::UnknownMnemonic(s)) if s == "D+2"
        ));
        assert!(matches!(
            encode_c(Some("X"), "D", None),
            Err(Error::UnknownMnemonic(s)) if s == "X"
        ));
        assert!(matches!(
            encode_c(None, "0", Some("jmp")),
            Err(Error::UnknownMnemonic(s)) if s == "jmp"
        ));
    }
}

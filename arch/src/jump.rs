use strum::{Display, EnumIter, EnumString};

/// Jump field of a C-instruction. An absent field encodes as `000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    /// 3-bit `jjj` field code.
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[test]
fn test() {
    assert_eq!("JGT".parse::<Jump>().unwrap().code(), 0b001);
    assert_eq!("JMP".parse::<Jump>().unwrap().code(), 0b111);
    assert_eq!(Jump::JNE.to_string(), "JNE");
    assert!("JGZ".parse::<Jump>().is_err());
}

#[test]
fn codes_distinct() {
    use strum::IntoEnumIterator;
    let codes: std::collections::HashSet<u16> = Jump::iter().map(Jump::code).collect();
    assert_eq!(codes.len(), 7);
    assert!(codes.iter().all(|c| (1..8).contains(c)));
}

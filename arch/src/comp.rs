use strum::{Display, EnumIter, EnumString};

/// Computation field of a C-instruction.
///
/// The 28 forms split into three groups: constants and D-only forms,
/// forms reading the A register, and forms reading the memory cell M.
/// The mnemonic spelling is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
pub enum Comp {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "-1")]
    NegOne,
    #[strum(serialize = "D")]
    D,
    #[strum(serialize = "!D")]
    NotD,
    #[strum(serialize = "-D")]
    NegD,
    #[strum(serialize = "D+1")]
    DPlusOne,
    #[strum(serialize = "D-1")]
    DMinusOne,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "!A")]
    NotA,
    #[strum(serialize = "-A")]
    NegA,
    #[strum(serialize = "A+1")]
    APlusOne,
    #[strum(serialize = "A-1")]
    AMinusOne,
    #[strum(serialize = "D+A")]
    DPlusA,
    #[strum(serialize = "D-A")]
    DMinusA,
    #[strum(serialize = "A-D")]
    AMinusD,
    #[strum(serialize = "D&A")]
    DAndA,
    #[strum(serialize = "D|A")]
    DOrA,
    #[strum(serialize = "M")]
    M,
    #[strum(serialize = "!M")]
    NotM,
    #[strum(serialize = "-M")]
    NegM,
    #[strum(serialize = "M+1")]
    MPlusOne,
    #[strum(serialize = "M-1")]
    MMinusOne,
    #[strum(serialize = "D+M")]
    DPlusM,
    #[strum(serialize = "D-M")]
    DMinusM,
    #[strum(serialize = "M-D")]
    MMinusD,
    #[strum(serialize = "D&M")]
    DAndM,
    #[strum(serialize = "D|M")]
    DOrM,
}

impl Comp {
    /// 7-bit `a cccccc` field code.
    pub fn code(self) -> u16 {
        use Comp::*;
        match self {
            Zero => 0b0101010,
            One => 0b0111111,
            NegOne => 0b0111010,
            D => 0b0001100,
            NotD => 0b0001101,
            NegD => 0b0001111,
            DPlusOne => 0b0011111,
            DMinusOne => 0b0001110,
            A => 0b0110000,
            NotA => 0b0110001,
            NegA => 0b0110011,
            APlusOne => 0b0110111,
            AMinusOne => 0b0110010,
            DPlusA => 0b0000010,
            DMinusA => 0b0010011,
            AMinusD => 0b0000111,
            DAndA => 0b0000000,
            DOrA => 0b0010101,
            M => 0b1110000,
            NotM => 0b1110001,
            NegM => 0b1110011,
            MPlusOne => 0b1110111,
            MMinusOne => 0b1110010,
            DPlusM => 0b1000010,
            DMinusM => 0b1010011,
            MMinusD => 0b1000111,
            DAndM => 0b1000000,
            DOrM => 0b1010101,
        }
    }
}

#[test]
fn test() {
    assert_eq!("D".parse::<Comp>().unwrap().code(), 0b0001100);
    assert_eq!("M+1".parse::<Comp>().unwrap().code(), 0b1110111);
    assert_eq!("D|A".parse::<Comp>().unwrap().code(), 0b0010101);
    assert_eq!(Comp::DAndM.to_string(), "D&M");
    assert!("d".parse::<Comp>().is_err());
    assert!("D+2".parse::<Comp>().is_err());
}

#[test]
fn codes_distinct() {
    use strum::IntoEnumIterator;
    let codes: std::collections::HashSet<u16> = Comp::iter().map(Comp::code).collect();
    assert_eq!(codes.len(), 28);
    assert!(codes.iter().all(|c| *c < 1 << 7));
}

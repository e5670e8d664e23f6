use strum::{Display, EnumIter, EnumString};

/// Destination field of a C-instruction. An absent field encodes as `000`,
/// so only the seven storing combinations are variants here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[repr(u8)]
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    /// 3-bit `ddd` field code.
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[test]
fn test() {
    assert_eq!("M".parse::<Dest>().unwrap().code(), 0b001);
    assert_eq!("AMD".parse::<Dest>().unwrap().code(), 0b111);
    assert_eq!(Dest::MD.to_string(), "MD");
    assert!("DM".parse::<Dest>().is_err());
    assert!("md".parse::<Dest>().is_err());
}

#[test]
fn codes_distinct() {
    use strum::IntoEnumIterator;
    let codes: std::collections::HashSet<u16> = Dest::iter().map(Dest::code).collect();
    assert_eq!(codes.len(), 7);
    assert!(codes.iter().all(|c| (1..8).contains(c)));
}

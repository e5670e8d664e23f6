use crate::{comp::Comp, dest::Dest, jump::Jump};

/// Largest value an A-instruction can load: 2^15 - 1.
pub const ADDR_MAX: u16 = 0x7FFF;

/// One resolved Hack instruction. All symbols are already bound, so
/// conversion to the 16-bit word is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value` — load a 15-bit value into the address register.
    A(u16),
    /// `dest=comp` / `comp;jump` — ALU computation with optional store
    /// and conditional jump.
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

impl Inst {
    /// Pack into the 16-bit instruction word:
    /// `0vvvvvvvvvvvvvvv` for A, `111accccccdddjjj` for C.
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(value) => value & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                0b111 << 13
                    | comp.code() << 6
                    | dest.map_or(0, Dest::code) << 3
                    | jump.map_or(0, Jump::code)
            }
        }
    }
}

#[test]
fn test() {
    assert_eq!(Inst::A(2).to_bin(), 0b0000000000000010);
    assert_eq!(Inst::A(ADDR_MAX).to_bin(), 0b0111111111111111);
    assert_eq!(
        Inst::C {
            dest: Some(Dest::D),
            comp: Comp::A,
            jump: None,
        }
        .to_bin(),
        0b1110110000010000
    );
    assert_eq!(
        Inst::C {
            dest: None,
            comp: Comp::Zero,
            jump: Some(Jump::JMP),
        }
        .to_bin(),
        0b1110101010000111
    );
}

#[test]
fn a_inst_is_value_in_low_bits() {
    for value in [0u16, 1, 5, 16, 16384, 24576, ADDR_MAX] {
        let bin = Inst::A(value).to_bin();
        assert_eq!(bin >> 15, 0);
        assert_eq!(bin & ADDR_MAX, value);
    }
}

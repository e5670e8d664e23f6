pub mod comp;
pub mod dest;
pub mod inst;
pub mod jump;

/// True if `text` exactly matches any computation, destination or jump
/// mnemonic. The empty string counts: it is the "none" form of the
/// destination and jump fields.
pub fn is_known_mnemonic(text: &str) -> bool {
    text.is_empty()
        || text.parse::<comp::Comp>().is_ok()
        || text.parse::<dest::Dest>().is_ok()
        || text.parse::<jump::Jump>().is_ok()
}

#[test]
fn test() {
    assert!(is_known_mnemonic("D+1"));
    assert!(is_known_mnemonic("AMD"));
    assert!(is_known_mnemonic("JMP"));
    assert!(is_known_mnemonic(""));
    assert!(!is_known_mnemonic("hoge"));
    assert!(!is_known_mnemonic("jmp"));
}

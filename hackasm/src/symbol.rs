use indexmap::IndexMap;

use crate::error::Error;

/// Highest address a symbol may be bound to.
pub const ADDR_MAX: u16 = 32766;

/// Architecture-fixed names, bound before translation begins.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SCREEN", 16384),
    ("KBD", 24576),
];

/// Name → address map, seeded with the predefined symbols. Insertion
/// order is kept so the dump can list labels and variables in the order
/// they appeared.
#[derive(Debug)]
pub struct SymbolTable(IndexMap<String, u16>);

impl SymbolTable {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// `capacity` is a preallocation hint on top of the predefined set,
    /// not a bound.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut map = IndexMap::with_capacity(PREDEFINED.len() + capacity);
        for (name, addr) in PREDEFINED {
            map.insert(name.to_string(), addr);
        }
        SymbolTable(map)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Absence is not an error; pass 2 turns a miss into a fresh variable.
    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    /// Insert or overwrite. The table is untouched when the address is
    /// out of range.
    pub fn insert(&mut self, name: &str, addr: u16) -> Result<(), Error> {
        if addr > ADDR_MAX {
            return Err(Error::AddressOutOfRange(addr as usize));
        }
        self.0.insert(name.to_string(), addr);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined() {
        let table = SymbolTable::new();
        assert_eq!(table.get("SP"), Some(0));
        assert_eq!(table.get("R0"), Some(0));
        assert_eq!(table.get("R15"), Some(15));
        assert_eq!(table.get("SCREEN"), Some(16384));
        assert_eq!(table.get("KBD"), Some(24576));
        assert_eq!(table.len(), PREDEFINED.len());
        assert!(!table.contains("LOOP"));
        assert_eq!(table.get("LOOP"), None);
    }

    #[test]
    fn insert_overwrites() {
        let mut table = SymbolTable::new();
        table.insert("x", 16).unwrap();
        assert_eq!(table.get("x"), Some(16));
        table.insert("x", 42).unwrap();
        assert_eq!(table.get("x"), Some(42));
        assert_eq!(table.len(), PREDEFINED.len() + 1);
    }

    #[test]
    fn debug_format() {
        let table = SymbolTable::new();
        assert!(format!("{:?}", table).contains("SCREEN"));
    }

    #[test]
    fn insert_range() {
        let mut table = SymbolTable::new();
        table.insert("edge", ADDR_MAX).unwrap();
        assert!(matches!(
            table.insert("over", ADDR_MAX + 1),
            Err(Error::AddressOutOfRange(32767))
        ));
        assert!(!table.contains("over"));
    }
}

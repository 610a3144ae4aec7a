//! A type that can represent symbols in a context-free grammar. Symbols are distinguished by their
//! IDs. Labels given by the caller are interned by a `SymbolSource`.

mod repr;
pub mod set;
pub mod source;

pub use self::repr::{Symbol, SymbolRepr};
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

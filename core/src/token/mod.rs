mod chain;


pub use chain::{Chain, ChainKind, Sigil};

//! Parsers for the value grammars that need one.

mod clock;

pub use clock::parse_clock_value;

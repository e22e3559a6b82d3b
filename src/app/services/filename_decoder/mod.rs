//! Filename decoder for equipment-generated measurement files
//!
//! Test equipment encodes the commanded test value, unit, channel and
//! instrument range setting into file names like
//! `VT2816A_m2V5_R10V_CH3.csv` (-2.5 V, range 10V, channel 3) or
//! `VIO2004_3mA_R10mA_CH1.txt` (3 mA, range 10mA, channel 1). There is
//! no declared schema, so recovery is heuristic: an ordered table of
//! pattern families is tried until one matches and parses.
//!
//! The decoder never fails - fields it cannot determine are simply
//! absent, and the caller decides whether the file is usable.
//!
//! ## Components
//!
//! - [`patterns`] - the ordered (pattern, parser, unit-label) value table
//! - [`decoder`] - channel/range extraction, [`decoder::decode`] and the
//!   directory-level unit helper

pub mod decoder;
pub mod patterns;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use decoder::{decode, unit_from_directory};

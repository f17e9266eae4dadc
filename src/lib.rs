//! PBN to LIN deal conversion.
//!
//! Converts a PBN deal string (dealer-prefixed, dot-separated suits per hand)
//! into a BBO LIN hand record with the hands in South, West, North, East
//! order and the board number and vulnerability filled in.
//!
//! - [`pbn`] - deal string tokenizer and PBN file reader
//! - [`lin`] - hand re-encoding, lookup tables and the [`lin::LinRecord`] writer
//! - [`convert`] - the deal orchestrator and batch conversion
//!
//! # Example
//!
//! ```
//! use pbn_to_lin::{lin, pbn_to_lin};
//!
//! let vul = lin::vulnerability_from_index(1).unwrap();
//! let record = pbn_to_lin(
//!     "N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963",
//!     2,
//!     vul,
//! )
//! .unwrap();
//! assert!(record.starts_with("qx|o2|md|1SQJ9875HK74D96C74,"));
//! assert!(record.ends_with("|rh||ah|Board 2|sv|N|pg||"));
//! ```

pub mod convert;
mod error;
pub mod lin;
pub mod pbn;

pub use convert::{
    build_record, convert_boards, pbn_to_lin, pbn_to_lin_with, ConvertOptions, DealerMode,
};
pub use error::{ConvertError, Result};
pub use lin::{convert_hand, LinRecord, INVALID_HAND};
pub use pbn::{split, BoardSpec, PbnDeal};

// Re-export bridge-types for convenience
pub use bridge_types::{Direction, Vulnerability};

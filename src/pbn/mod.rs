//! PBN (Portable Bridge Notation) input.
//!
//! Two levels are supported: a bare deal string such as
//! `N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963`,
//! and whole PBN files whose `[Board]`, `[Dealer]`, `[Vulnerable]` and
//! `[Deal]` tags describe one board each.

mod deal;
mod reader;

pub use deal::{split, PbnDeal};
pub use reader::{read_boards, read_boards_file, BoardSpec, TagPair};

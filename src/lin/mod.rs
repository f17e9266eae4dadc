//! LIN (Linear) hand record output.
//!
//! LIN is the pipe-delimited format used by Bridge Base Online. The records
//! written here carry only the deal and its board metadata:
//!
//! ```text
//! qx|o2|md|1SQJ9875HK74D96C74,S62HJT92DAJ43CAT5,SAKTHAQ63DT7CKJ82,S43H85DKQ852CQ963|rh||ah|Board 2|sv|N|pg||
//! ```

use crate::error::{ConvertError, Result};
use crate::pbn::split;
use bridge_types::{Direction, Vulnerability};
use std::fmt;

/// Written in place of a hand that does not have exactly four suits.
pub const INVALID_HAND: &str = "InvalidHand";

/// `sv` letters indexed by vulnerability: none, N-S, E-W, both.
pub const VULNERABILITY_LETTERS: [&str; 4] = ["0", "N", "E", "B"];

/// Suit prefixes in the order holdings appear in both formats.
const SUIT_LETTERS: [char; 4] = ['S', 'H', 'D', 'C'];

/// Convert one PBN hand (`Spades.Hearts.Diamonds.Clubs`) to LIN (`S..H..D..C..`).
///
/// Holdings are copied verbatim, so a void stays an empty holding:
/// `"AKQ..JT9.8765432"` becomes `"SAKQHDJT9C8765432"`. Anything that does
/// not split into exactly four suits yields [`INVALID_HAND`].
pub fn convert_hand(pbn_hand: &str) -> String {
    let suits = split(pbn_hand, '.');
    if suits.len() != SUIT_LETTERS.len() {
        log::warn!(
            "Hand {:?} has {} suits, expected 4; writing {}",
            pbn_hand,
            suits.len(),
            INVALID_HAND
        );
        return INVALID_HAND.to_string();
    }

    let mut lin = String::with_capacity(pbn_hand.len() + SUIT_LETTERS.len());
    for (letter, holding) in SUIT_LETTERS.iter().zip(suits) {
        lin.push(*letter);
        lin.push_str(holding);
    }
    lin
}

/// Split a LIN hand back into its spade, heart, diamond and club holdings.
///
/// Returns None unless the suit letters S, H, D, C each appear once, in
/// that order, with S first.
pub fn lin_hand_fields(lin_hand: &str) -> Option<[&str; 4]> {
    let mut fields = [""; 4];
    let mut rest = lin_hand.strip_prefix(SUIT_LETTERS[0])?;

    for (i, next) in SUIT_LETTERS.iter().skip(1).enumerate() {
        let (holding, tail) = rest.split_once(*next)?;
        fields[i] = holding;
        rest = tail;
    }
    fields[3] = rest;

    if fields
        .iter()
        .any(|holding| holding.contains(|c: char| SUIT_LETTERS.contains(&c)))
    {
        return None;
    }
    Some(fields)
}

/// LIN dealer digit for a PBN dealer letter (1=S, 2=W, 3=N, 4=E).
///
/// Unrecognized letters fall back to South.
pub fn lin_dealer_code(dealer: char) -> char {
    match dealer {
        'S' => '1',
        'W' => '2',
        'N' => '3',
        'E' => '4',
        _ => '1',
    }
}

/// LIN dealer digit for a seat.
pub fn direction_dealer_code(dealer: Direction) -> char {
    lin_dealer_code(dealer.to_char())
}

/// Vulnerability for a position in [`VULNERABILITY_LETTERS`].
pub fn vulnerability_from_index(index: usize) -> Result<Vulnerability> {
    match index {
        0 => Ok(Vulnerability::None),
        1 => Ok(Vulnerability::NorthSouth),
        2 => Ok(Vulnerability::EastWest),
        3 => Ok(Vulnerability::Both),
        _ => Err(ConvertError::InvalidVulnerability(index)),
    }
}

/// The `sv` letter for a vulnerability.
pub fn vulnerability_letter(vulnerability: &Vulnerability) -> &'static str {
    let index = match vulnerability {
        Vulnerability::None => 0,
        Vulnerability::NorthSouth => 1,
        Vulnerability::EastWest => 2,
        Vulnerability::Both => 3,
    };
    VULNERABILITY_LETTERS[index]
}

/// A LIN deal record ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinRecord {
    /// Board number, written both as `o<n>` and `Board <n>`
    pub board: u32,
    /// Dealer digit from [`lin_dealer_code`]
    pub dealer_code: char,
    /// Encoded hands in S, W, N, E order (BBO convention)
    pub hands: [String; 4],
    /// `sv` letter from [`VULNERABILITY_LETTERS`]
    pub vulnerability: &'static str,
}

impl fmt::Display for LinRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qx|o{board}|md|{dealer}{hands}|rh||ah|Board {board}|sv|{vul}|pg||",
            board = self.board,
            dealer = self.dealer_code,
            hands = self.hands.join(","),
            vul = self.vulnerability,
        )
    }
}

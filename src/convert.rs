//! PBN deal to LIN record conversion.

use crate::error::{ConvertError, Result};
use crate::lin::{convert_hand, direction_dealer_code, vulnerability_letter, LinRecord};
use crate::pbn::{BoardSpec, PbnDeal};
use bridge_types::{Direction, Vulnerability};

/// LIN lists hands South, West, North, East.
const LIN_SEAT_ORDER: [Direction; 4] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
];

/// How the dealer of a deal string is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DealerMode {
    /// Ignore the designator and treat South as dealer: the listed hands
    /// go to South, West, North, East and the record carries dealer code 1.
    #[default]
    FixedSouth,
    /// Ignore the designator, seat the listed hands North, East, South,
    /// West and still write dealer code 1.
    NorthFirst,
    /// Read the designator before the colon, seat hands clockwise from it
    /// and name it as dealer.
    FromDeal,
}

/// Conversion settings
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub dealer_mode: DealerMode,
}

/// Convert a PBN deal string into a LIN record with default options.
///
/// ```
/// use pbn_to_lin::Vulnerability;
///
/// let lin = pbn_to_lin::pbn_to_lin(
///     "N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963",
///     2,
///     Vulnerability::NorthSouth,
/// )
/// .unwrap();
/// assert_eq!(
///     lin,
///     "qx|o2|md|1SQJ9875HK74D96C74,S62HJT92DAJ43CAT5,SAKTHAQ63DT7CKJ82,S43H85DKQ852CQ963|rh||ah|Board 2|sv|N|pg||"
/// );
/// ```
pub fn pbn_to_lin(pbn: &str, board: u32, vulnerability: Vulnerability) -> Result<String> {
    pbn_to_lin_with(pbn, board, vulnerability, &ConvertOptions::default())
}

/// Convert a PBN deal string into a LIN record.
pub fn pbn_to_lin_with(
    pbn: &str,
    board: u32,
    vulnerability: Vulnerability,
    options: &ConvertOptions,
) -> Result<String> {
    Ok(build_record(pbn, board, &vulnerability, options)?.to_string())
}

/// Parse a PBN deal string and assemble its LIN record.
pub fn build_record(
    pbn: &str,
    board: u32,
    vulnerability: &Vulnerability,
    options: &ConvertOptions,
) -> Result<LinRecord> {
    if board == 0 {
        return Err(ConvertError::InvalidBoard);
    }
    let deal = PbnDeal::parse(pbn)?;

    // `first` holds the first listed hand
    let (first, dealer) = match options.dealer_mode {
        DealerMode::FixedSouth => (Direction::South, Direction::South),
        DealerMode::NorthFirst => (Direction::North, Direction::South),
        DealerMode::FromDeal => {
            let dealer = deal.dealer().ok_or_else(|| {
                ConvertError::MalformedDeal(format!(
                    "Unknown dealer designator {:?}",
                    deal.designator
                ))
            })?;
            (dealer, dealer)
        }
    };

    let hands = LIN_SEAT_ORDER.map(|seat| convert_hand(deal.hand(first, seat)));

    let record = LinRecord {
        board,
        dealer_code: direction_dealer_code(dealer),
        hands,
        vulnerability: vulnerability_letter(vulnerability),
    };
    log::debug!("Board {}: {} -> {}", board, pbn, record);
    Ok(record)
}

/// Convert every board read from a PBN file.
///
/// Each board gets its own result so a malformed deal does not stop the
/// rest. Boards without a `[Board]` tag are numbered by position (from 1).
pub fn convert_boards(boards: &[BoardSpec], options: &ConvertOptions) -> Vec<Result<String>> {
    boards
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let number = spec.number.unwrap_or(i as u32 + 1);
            let result = match spec.deal.as_deref() {
                Some(pbn) => pbn_to_lin_with(pbn, number, spec.vulnerability.clone(), options),
                None => Err(ConvertError::MalformedDeal(format!(
                    "Board {} has no Deal tag",
                    number
                ))),
            };
            if let Err(e) = &result {
                log::warn!("Skipping board {}: {}", number, e);
            }
            result
        })
        .collect()
}

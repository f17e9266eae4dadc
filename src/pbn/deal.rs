//! Tokenizer for PBN deal strings.

use crate::error::{ConvertError, Result};
use bridge_types::Direction;

/// Split `s` on every occurrence of `delimiter`.
///
/// Empty pieces from adjacent, leading or trailing delimiters are kept, so
/// `".K74.96."` gives four fields. Callers drop them where they carry no
/// meaning (between hands) and keep them where they do (a void suit).
pub fn split(s: &str, delimiter: char) -> Vec<&str> {
    s.split(delimiter).collect()
}

/// A PBN deal string broken into its dealer designator and four hand tokens.
///
/// Hand tokens are not validated here; see [`crate::lin::convert_hand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PbnDeal<'a> {
    /// Text before the colon (normally a single letter: N, E, S or W)
    pub designator: &'a str,
    /// Hand tokens in listing order
    pub hands: [&'a str; 4],
}

impl<'a> PbnDeal<'a> {
    /// Parse a deal string of the form `<Dealer>:<Hand> <Hand> <Hand> <Hand>`.
    pub fn parse(pbn: &'a str) -> Result<Self> {
        let colon = match pbn.find(':') {
            Some(pos) if pos > 0 => pos,
            _ => {
                return Err(ConvertError::MalformedDeal(
                    "Missing or misplaced dealer info.".to_string(),
                ))
            }
        };

        let designator = &pbn[..colon];
        let tokens: Vec<&str> = split(&pbn[colon + 1..], ' ')
            .into_iter()
            .filter(|token| !token.is_empty())
            .collect();

        let hands: [&str; 4] = tokens.try_into().map_err(|tokens: Vec<&str>| {
            ConvertError::MalformedDeal(format!(
                "Must contain exactly four hands, got {}",
                tokens.len()
            ))
        })?;

        Ok(Self { designator, hands })
    }

    /// The dealer named by the designator, if it is one of N, E, S, W.
    pub fn dealer(&self) -> Option<Direction> {
        let mut chars = self.designator.trim().chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Direction::from_char(c.to_ascii_uppercase())
    }

    /// Hand token held by `seat` when the listing starts at `first`.
    pub fn hand(&self, first: Direction, seat: Direction) -> &'a str {
        let offset = (seat_index(seat) + 4 - seat_index(first)) % 4;
        self.hands[offset]
    }
}

/// Clockwise position of a seat, counting from North.
fn seat_index(dir: Direction) -> usize {
    match dir {
        Direction::North => 0,
        Direction::East => 1,
        Direction::South => 2,
        Direction::West => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEAL: &str = "N:QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963";

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split("AK..QJ.", '.'), vec!["AK", "", "QJ", ""]);
        assert_eq!(split("a  b", ' '), vec!["a", "", "b"]);
        assert_eq!(split("", '.'), vec![""]);
        assert_eq!(split("...", '.'), vec!["", "", "", ""]);
    }

    #[test]
    fn test_parse_deal() {
        let deal = PbnDeal::parse(DEAL).unwrap();
        assert_eq!(deal.designator, "N");
        assert_eq!(deal.hands[0], "QJ9875.K74.96.74");
        assert_eq!(deal.hands[3], "43.85.KQ852.Q963");
        assert_eq!(deal.dealer(), Some(Direction::North));
    }

    #[test]
    fn test_parse_ignores_repeated_spaces() {
        let deal = PbnDeal::parse("E:  A.B.C.D   E.F.G.H I.J.K.L  M.N.O.P ").unwrap();
        assert_eq!(deal.hands, ["A.B.C.D", "E.F.G.H", "I.J.K.L", "M.N.O.P"]);
        assert_eq!(deal.dealer(), Some(Direction::East));
    }

    #[test]
    fn test_missing_or_leading_colon() {
        assert!(matches!(
            PbnDeal::parse("QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963"),
            Err(ConvertError::MalformedDeal(_))
        ));
        assert!(matches!(
            PbnDeal::parse(":QJ9875.K74.96.74 62.JT92.AJ43.AT5 AKT.AQ63.T7.KJ82 43.85.KQ852.Q963"),
            Err(ConvertError::MalformedDeal(_))
        ));
    }

    #[test]
    fn test_wrong_hand_count() {
        for pbn in [
            "N:A.B.C.D E.F.G.H I.J.K.L",
            "N:A.B.C.D E.F.G.H I.J.K.L M.N.O.P Q.R.S.T",
            "N:    ",
            "N:",
        ] {
            assert!(
                matches!(PbnDeal::parse(pbn), Err(ConvertError::MalformedDeal(_))),
                "{pbn}"
            );
        }
    }

    #[test]
    fn test_dealer_designator() {
        let mut deal = PbnDeal::parse(DEAL).unwrap();
        deal.designator = "w";
        assert_eq!(deal.dealer(), Some(Direction::West));
        deal.designator = "X";
        assert_eq!(deal.dealer(), None);
        deal.designator = "NS";
        assert_eq!(deal.dealer(), None);
    }

    #[test]
    fn test_hand_rotation() {
        let deal = PbnDeal::parse("S:s.s.s.s w.w.w.w n.n.n.n e.e.e.e").unwrap();
        assert_eq!(deal.hand(Direction::South, Direction::South), "s.s.s.s");
        assert_eq!(deal.hand(Direction::South, Direction::West), "w.w.w.w");
        assert_eq!(deal.hand(Direction::South, Direction::North), "n.n.n.n");
        assert_eq!(deal.hand(Direction::South, Direction::East), "e.e.e.e");
        // Seated from North the same tokens belong to other players
        assert_eq!(deal.hand(Direction::North, Direction::South), "n.n.n.n");
        assert_eq!(deal.hand(Direction::North, Direction::North), "s.s.s.s");
    }
}

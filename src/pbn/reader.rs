//! PBN file reader for batch conversion.

use crate::error::Result;
use bridge_types::Vulnerability;

/// A parsed PBN tag pair
#[derive(Debug, Clone)]
pub struct TagPair {
    pub name: String,
    pub value: String,
}

/// The tags of one PBN board that a LIN record needs.
///
/// The dealer comes from the `[Deal]` designator, so `[Dealer]` is not kept.
#[derive(Debug, Clone, Default)]
pub struct BoardSpec {
    /// Value of the `[Board]` tag
    pub number: Option<u32>,
    /// Value of the `[Vulnerable]` tag (None when absent or unrecognized)
    pub vulnerability: Vulnerability,
    /// Raw `[Deal]` string, left unparsed so a bad deal only fails its own board
    pub deal: Option<String>,
}

/// Parse a tag pair from a line: [TagName "value"]
fn parse_tag_pair(line: &str) -> Option<TagPair> {
    let inner = line.trim().strip_prefix('[')?.strip_suffix(']')?;

    let (name, rest) = inner.split_once(' ')?;
    let value = rest.trim().strip_prefix('"')?.strip_suffix('"')?;

    Some(TagPair {
        name: name.trim().to_string(),
        value: value.to_string(),
    })
}

/// Read the boards in PBN content.
///
/// Boards are separated by blank lines. `%` directives, `;` comments and
/// `{...}` commentary blocks are skipped, as are tags not used for LIN output.
pub fn read_boards(content: &str) -> Result<Vec<BoardSpec>> {
    let mut boards = Vec::new();
    let mut current = BoardSpec::default();
    let mut has_content = false;
    let mut in_commentary = false;

    for line in content.lines() {
        let line = line.trim();

        if in_commentary {
            if line.contains('}') {
                in_commentary = false;
            }
            continue;
        }

        if line.starts_with('{') {
            if !line.contains('}') {
                in_commentary = true;
            }
            continue;
        }

        if line.is_empty() {
            if has_content {
                boards.push(std::mem::take(&mut current));
                has_content = false;
            }
            continue;
        }

        if line.starts_with(';') || line.starts_with('%') {
            continue;
        }

        if let Some(tag) = parse_tag_pair(line) {
            has_content |= apply_tag(&mut current, &tag);
        }
    }

    if has_content {
        boards.push(current);
    }

    Ok(boards)
}

/// Apply a tag to the board. Returns true if the tag was one we keep.
fn apply_tag(board: &mut BoardSpec, tag: &TagPair) -> bool {
    match tag.name.as_str() {
        "Board" => {
            board.number = tag.value.trim().parse().ok();
        }
        "Vulnerable" => {
            board.vulnerability = Vulnerability::from_pbn(&tag.value).unwrap_or_default();
        }
        "Deal" => {
            board.deal = Some(tag.value.clone());
        }
        _ => return false,
    }
    true
}

/// Read the boards in a PBN file
pub fn read_boards_file(path: &std::path::Path) -> Result<Vec<BoardSpec>> {
    let content = std::fs::read_to_string(path)?;
    read_boards(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_pair() {
        let tag = parse_tag_pair("[Board \"1\"]").unwrap();
        assert_eq!(tag.name, "Board");
        assert_eq!(tag.value, "1");

        let tag = parse_tag_pair("[Deal \"N:A.B.C.D E.F.G.H I.J.K.L M.N.O.P\"]").unwrap();
        assert_eq!(tag.name, "Deal");
        assert_eq!(tag.value, "N:A.B.C.D E.F.G.H I.J.K.L M.N.O.P");

        assert!(parse_tag_pair("Board 1").is_none());
        assert!(parse_tag_pair("[Board 1]").is_none());
    }

    #[test]
    fn test_read_single_board() {
        let pbn = r#"
[Board "7"]
[Dealer "S"]
[Vulnerable "NS"]
[Deal "S:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ"]
"#;
        let boards = read_boards(pbn).unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].number, Some(7));
        assert_eq!(boards[0].vulnerability, Vulnerability::NorthSouth);
        assert_eq!(
            boards[0].deal.as_deref(),
            Some("S:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ")
        );
    }

    #[test]
    fn test_read_skips_metadata_and_commentary() {
        let pbn = r#"% PBN 2.1
% EXPORT

[Event "Club game"]
[Board "1"]
[Dealer "N"]
[Vulnerable "None"]
[Deal "N:K843.T542.J6.863 AQJ7.K.Q75.AT942 962.AJ7.KT82.J75 T5.Q9863.A943.KQ"]
{Opening lead
was the club king.}
; scored elsewhere

[Event "Club game"]

[Board "2"]
[Vulnerable "Both"]
[Deal "E:Q7.AKT9.JT3.JT96 J653.QJ8.A.AQ732 K92.654.K954.K84 AT84.732.Q8762.5"]
"#;
        let boards = read_boards(pbn).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].number, Some(1));
        assert_eq!(boards[0].vulnerability, Vulnerability::None);
        assert_eq!(boards[1].number, Some(2));
        assert_eq!(boards[1].vulnerability, Vulnerability::Both);
    }

    #[test]
    fn test_read_board_without_deal() {
        let pbn = "[Board \"3\"]\n[Vulnerable \"EW\"]\n";
        let boards = read_boards(pbn).unwrap();
        assert_eq!(boards.len(), 1);
        assert!(boards[0].deal.is_none());
        assert_eq!(boards[0].vulnerability, Vulnerability::EastWest);
    }

    #[test]
    fn test_read_empty() {
        assert!(read_boards("").unwrap().is_empty());
        assert!(read_boards("% PBN 2.1\n\n\n").unwrap().is_empty());
    }
}

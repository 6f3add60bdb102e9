//! Split-point selection for sentence-order pairs

use crate::normalize::char_len;

/// Chooses where a segment list is cut into a leading and a trailing group.
///
/// The returned index is the last segment of the leading group, so
/// `segments[..=idx]` leads and `segments[idx + 1..]` trails.
pub trait SplitSelector: Send + Sync {
    fn select(&self, segments: &[&str]) -> Option<usize>;
}

/// Prefers a single long opening segment, then a two-segment opening.
///
/// - segment 0 has at least `lead_min_len` code points: split at 0
/// - segments 0 and 1 together exceed `group_min_len`, and either segment 2
///   alone or segments 2 and 3 together exceed it: split at 1
/// - otherwise no split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadingClauseSplit {
    pub lead_min_len: usize,
    pub group_min_len: usize,
}

impl SplitSelector for LeadingClauseSplit {
    fn select(&self, segments: &[&str]) -> Option<usize> {
        let lens: Vec<usize> = segments.iter().map(|s| char_len(s)).collect();

        match lens.as_slice() {
            [first, ..] if *first >= self.lead_min_len => Some(0),
            [first, second, rest @ ..] if first + second > self.group_min_len => {
                let third_alone = rest.first().is_some_and(|&n| n > self.group_min_len);
                let third_and_fourth =
                    matches!(rest, [third, fourth, ..] if third + fourth > self.group_min_len);
                (third_alone || third_and_fourth).then_some(1)
            }
            _ => None,
        }
    }
}

/// A segment list cut into two space-joined groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPair {
    pub leading: String,
    pub trailing: String,
}

impl SegmentPair {
    pub fn from_split(segments: &[&str], idx: usize) -> Self {
        Self {
            leading: segments[..=idx].join(" "),
            trailing: segments[idx + 1..].join(" "),
        }
    }

    /// Forward line: the leading group precedes the trailing group
    pub fn forward_line(&self, label: &str) -> String {
        format!("{label}\t{}\t{}", self.leading, self.trailing)
    }

    /// Reversed line: groups swapped
    pub fn reversed_line(&self, label: &str) -> String {
        format!("{label}\t{}\t{}", self.trailing, self.leading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTOR: LeadingClauseSplit = LeadingClauseSplit {
        lead_min_len: 15,
        group_min_len: 15,
    };

    fn select_lengths(lengths: &[usize]) -> Option<usize> {
        let owned: Vec<String> = lengths.iter().map(|&n| "句".repeat(n)).collect();
        let segments: Vec<&str> = owned.iter().map(String::as_str).collect();
        SELECTOR.select(&segments)
    }

    #[test]
    fn test_long_first_segment_splits_at_zero() {
        assert_eq!(select_lengths(&[16, 5]), Some(0));
        assert_eq!(select_lengths(&[15, 1, 1]), Some(0));
    }

    #[test]
    fn test_long_third_segment_splits_at_one() {
        assert_eq!(select_lengths(&[8, 10, 16]), Some(1));
    }

    #[test]
    fn test_third_and_fourth_combined_split_at_one() {
        assert_eq!(select_lengths(&[8, 8, 8, 8]), Some(1));
        assert_eq!(select_lengths(&[8, 8, 8, 7]), None);
    }

    #[test]
    fn test_short_segments_have_no_split() {
        assert_eq!(select_lengths(&[8, 8, 8]), None);
        assert_eq!(select_lengths(&[8, 10]), None);
    }

    #[test]
    fn test_thresholds_are_strict_for_groups() {
        // 7 + 8 == 15 is not above the threshold
        assert_eq!(select_lengths(&[7, 8, 20]), None);
        // third segment of exactly 15 does not qualify
        assert_eq!(select_lengths(&[8, 8, 15]), None);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(select_lengths(&[]), None);
        assert_eq!(select_lengths(&[3]), None);
        assert_eq!(select_lengths(&[20]), Some(0));
    }

    #[test]
    fn test_pair_lines_are_mirrored() {
        let segments = ["第一句。", "第二句。", "第三句。"];
        let pair = SegmentPair::from_split(&segments, 0);
        assert_eq!(pair.leading, "第一句。");
        assert_eq!(pair.trailing, "第二句。 第三句。");
        assert_eq!(pair.forward_line("1"), "1\t第一句。\t第二句。 第三句。");
        assert_eq!(pair.reversed_line("0"), "0\t第二句。 第三句。\t第一句。");
    }

    #[test]
    fn test_pair_split_at_one() {
        let segments = ["a", "b", "c", "d"];
        let pair = SegmentPair::from_split(&segments, 1);
        assert_eq!(pair.leading, "a b");
        assert_eq!(pair.trailing, "c d");
    }
}

//! # Item Selection
//!
//! Parses item position lists such as `1,3,5-7`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::error::{NotesError, Result};

/// Parses comma-separated 1-based positions and inclusive ranges.
///
/// Ranges may be written in either direction. Zero, negative and unparsable
/// tokens are ignored. The result is sorted and free of duplicates; an empty
/// result is an error.
pub fn parse_selection(input: &str) -> Result<Vec<usize>> {
    let mut positions = Vec::new();

    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some((start, end)) = token.split_once('-') {
            let (Some(a), Some(b)) = (parse_position(start), parse_position(end)) else {
                continue;
            };
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            positions.extend(low..=high);
        } else if let Some(p) = parse_position(token) {
            positions.push(p);
        }
    }

    positions.sort_unstable();
    positions.dedup();

    if positions.is_empty() {
        return Err(NotesError::InvalidSelection(input.to_string()));
    }
    Ok(positions)
}

fn parse_position(s: &str) -> Option<usize> {
    s.trim().parse::<usize>().ok().filter(|&p| p > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        assert_eq!(parse_selection("2").unwrap(), [2]);
    }

    #[test]
    fn test_list_and_ranges() {
        assert_eq!(parse_selection("1,3,5-7").unwrap(), [1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(parse_selection("4-2").unwrap(), [2, 3, 4]);
    }

    #[test]
    fn test_dedup_and_spaces() {
        assert_eq!(parse_selection(" 3, 1 ,3,2-3").unwrap(), [1, 2, 3]);
    }

    #[test]
    fn test_ignores_garbage() {
        assert_eq!(parse_selection("0,x,2,-1").unwrap(), [2]);
    }

    #[test]
    fn test_nothing_valid() {
        let err = parse_selection("0,abc").unwrap_err();
        assert!(matches!(err, NotesError::InvalidSelection(s) if s == "0,abc"));
    }
}

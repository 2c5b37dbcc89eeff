//! Validation of raw user input into a [`CardRequest`].
//!
//! Every check here runs before generation starts and before any file is
//! touched.

use std::collections::HashSet;

use thiserror::Error;

use crate::layout::CELLS;

/// Highest round selector accepted when the settings don't say otherwise.
pub const DEFAULT_ROUNDS: u8 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    #[error("copy count '{0}' is not a whole number")]
    CopiesNotANumber(String),
    #[error("copy count must be positive, got {0}")]
    CopiesNotPositive(i64),
    #[error("round '{0}' is not a whole number")]
    RoundNotANumber(String),
    #[error("round {round} is out of range (1-{max})")]
    RoundOutOfRange { round: i64, max: u8 },
    #[error("need at least {required} phrases, got {found}")]
    TooFewPhrases { required: usize, found: usize },
    #[error("phrase '{0}' appears more than once")]
    DuplicatePhrase(String),
}

/// Splits phrase text into one phrase per line.
///
/// Lines are trimmed and blank lines are dropped.
pub fn parse_phrases(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_copies(raw: &str) -> Result<usize, RequestError> {
    let raw = raw.trim();
    let copies: i64 = raw
        .parse()
        .map_err(|_| RequestError::CopiesNotANumber(raw.to_string()))?;
    if copies <= 0 {
        return Err(RequestError::CopiesNotPositive(copies));
    }
    usize::try_from(copies).map_err(|_| RequestError::CopiesNotANumber(raw.to_string()))
}

pub fn parse_round(raw: &str, max: u8) -> Result<u8, RequestError> {
    let raw = raw.trim();
    let round: i64 = raw
        .parse()
        .map_err(|_| RequestError::RoundNotANumber(raw.to_string()))?;
    if round < 1 || round > i64::from(max) {
        return Err(RequestError::RoundOutOfRange { round, max });
    }
    u8::try_from(round).map_err(|_| RequestError::RoundOutOfRange { round, max })
}

/// Checks that the pool can fill a card and holds no repeated phrase.
pub fn validate_pool(pool: &[String]) -> Result<(), RequestError> {
    if pool.len() < CELLS {
        return Err(RequestError::TooFewPhrases {
            required: CELLS,
            found: pool.len(),
        });
    }

    let mut seen = HashSet::new();
    for phrase in pool {
        if !seen.insert(phrase.as_str()) {
            return Err(RequestError::DuplicatePhrase(phrase.clone()));
        }
    }

    Ok(())
}

/// Everything one generation run needs, decoupled from where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRequest {
    pub pool: Vec<String>,
    pub copies: usize,
    pub round: u8,
}

impl CardRequest {
    /// Validates raw form input.
    ///
    /// Checks run in the order copies, round, phrases; the first failure wins.
    pub fn parse(
        copies: &str,
        round: &str,
        phrases: &str,
        rounds: u8,
    ) -> Result<Self, RequestError> {
        let copies = parse_copies(copies)?;
        let round = parse_round(round, rounds)?;
        Self::with_phrases(copies, round, phrases)
    }

    /// Builds a request from already parsed numbers and raw phrase text.
    pub fn with_phrases(copies: usize, round: u8, phrases: &str) -> Result<Self, RequestError> {
        let pool = parse_phrases(phrases);
        validate_pool(&pool)?;

        Ok(Self {
            pool,
            copies,
            round,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase_text(n: usize) -> String {
        (1..=n)
            .map(|i| format!("P{}", i))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_parse_valid_request() {
        let req = CardRequest::parse("3", "1", &phrase_text(25), DEFAULT_ROUNDS).unwrap();
        assert_eq!(req.copies, 3);
        assert_eq!(req.round, 1);
        assert_eq!(req.pool.len(), 25);
        assert_eq!(req.pool[0], "P1");
    }

    #[test]
    fn test_copies_not_a_number() {
        let err = CardRequest::parse("three", "1", &phrase_text(25), DEFAULT_ROUNDS).unwrap_err();
        assert_eq!(err, RequestError::CopiesNotANumber("three".to_string()));

        let err = parse_copies("2.5").unwrap_err();
        assert!(matches!(err, RequestError::CopiesNotANumber(_)));
    }

    #[test]
    fn test_copies_not_positive() {
        assert_eq!(parse_copies("0").unwrap_err(), RequestError::CopiesNotPositive(0));
        assert_eq!(parse_copies("-4").unwrap_err(), RequestError::CopiesNotPositive(-4));
    }

    #[test]
    fn test_copies_trimmed() {
        assert_eq!(parse_copies(" 12 \n").unwrap(), 12);
    }

    #[test]
    fn test_round_range() {
        assert_eq!(parse_round("3", 3).unwrap(), 3);
        assert_eq!(
            parse_round("4", 3).unwrap_err(),
            RequestError::RoundOutOfRange { round: 4, max: 3 }
        );
        assert_eq!(
            parse_round("0", 3).unwrap_err(),
            RequestError::RoundOutOfRange { round: 0, max: 3 }
        );
        assert!(matches!(parse_round("x", 3).unwrap_err(), RequestError::RoundNotANumber(_)));
    }

    #[test]
    fn test_too_few_phrases_cites_count() {
        let err = CardRequest::parse("1", "1", &phrase_text(24), DEFAULT_ROUNDS).unwrap_err();
        assert_eq!(err, RequestError::TooFewPhrases { required: 25, found: 24 });
        assert!(err.to_string().contains("got 24"));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = format!("\n\n{}\n   \n", phrase_text(25).replace('\n', "\n\n"));
        let pool = parse_phrases(&text);
        assert_eq!(pool.len(), 25);
        assert!(pool.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_phrases_trimmed() {
        let pool = parse_phrases("  free space  \r\nsecond\t");
        assert_eq!(pool, vec!["free space", "second"]);
    }

    #[test]
    fn test_duplicate_phrase_rejected() {
        let text = format!("{}\nP3", phrase_text(25));
        let err = CardRequest::parse("1", "1", &text, DEFAULT_ROUNDS).unwrap_err();
        assert_eq!(err, RequestError::DuplicatePhrase("P3".to_string()));
    }

    #[test]
    fn test_larger_pool_accepted() {
        let req = CardRequest::parse("2", "2", &phrase_text(40), DEFAULT_ROUNDS).unwrap();
        assert_eq!(req.pool.len(), 40);
    }

    #[test]
    fn test_copies_checked_before_phrases() {
        let err = CardRequest::parse("0", "1", "", DEFAULT_ROUNDS).unwrap_err();
        assert_eq!(err, RequestError::CopiesNotPositive(0));
    }
}

//! Tile scores and the board-type bingo bonus.
//!
//! Grounded on `original_source/scrabbler/scrabbler.py::Game.__load_tile_set_from_file`
//! (a `tile_list.txt` of `"<LETTER> <score>"` lines) and `src/tilesets.rs::TileSet`
//! (per-`Language` table lookup), simplified to a flat score table since
//! `Letter` already fixes the alphabet to A-Z (no language-specific
//! extended letters to encode).
use crate::error::Error;
use crate::letter::{label_of, Label};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which board/tile-bonus ruleset a game uses. Only affects the bingo
/// bonus: `Scrabble` awards 50 points for using all 7 rack tiles in one
/// play, `WordsWithFriends` awards 35.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Scrabble,
    WordsWithFriends,
}

impl Language {
    fn bingo_bonus(self) -> i32 {
        match self {
            Language::Scrabble => 50,
            Language::WordsWithFriends => 35,
        }
    }
}

/// A per-letter point table, plus the bingo bonus for the board type it
/// was loaded for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileScores {
    scores: [u32; 26],
    bingo_bonus: i32,
}

impl TileScores {
    /// Build a `TileScores` directly from `(letter, score)` pairs.
    /// ## Errors
    /// If a letter is not an uppercase `A`-`Z` character.
    pub fn new(language: Language, scores: &[(char, u32)]) -> Result<TileScores, Error> {
        let mut table = [0u32; 26];
        for &(ch, score) in scores {
            let label = label_of(ch)?;
            table[(label - 1) as usize] = score;
        }
        Ok(TileScores {
            scores: table,
            bingo_bonus: language.bingo_bonus(),
        })
    }

    /// Load a tile list file: one `"<LETTER> <score>"` pair per line.
    /// ## Errors
    /// If `path` cannot be read or a line is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P, language: Language) -> Result<TileScores, Error> {
        let path = path.as_ref();
        log::info!("loading tile scores from {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let mut pairs = Vec::new();
        for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut parts = line.split_whitespace();
            let letter = parts.next().and_then(|s| s.chars().next()).ok_or_else(|| {
                Error::invalid_input(format!("malformed tile list line: {:?}", line))
            })?;
            let score: u32 = parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| Error::invalid_input(format!("malformed tile list line: {:?}", line)))?;
            pairs.push((letter, score));
        }
        TileScores::new(language, &pairs)
    }

    /// The point value of `label`, or 0 if never assigned one.
    pub fn score(&self, label: Label) -> u32 {
        self.scores[(label - 1) as usize]
    }

    /// The bonus added when a play uses every tile on a 7-tile rack.
    pub fn bingo_bonus(&self) -> i32 {
        self.bingo_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_score() {
        let scores = TileScores::new(Language::Scrabble, &[('A', 1), ('Q', 10)]).unwrap();
        assert_eq!(scores.score(label_of('A').unwrap()), 1);
        assert_eq!(scores.score(label_of('Q').unwrap()), 10);
        assert_eq!(scores.score(label_of('Z').unwrap()), 0);
        assert_eq!(scores.bingo_bonus(), 50);
    }

    #[test]
    fn test_words_with_friends_bonus() {
        let scores = TileScores::new(Language::WordsWithFriends, &[]).unwrap();
        assert_eq!(scores.bingo_bonus(), 35);
    }
}

//! The lexicon: a GADDAG over the legal word set.
//!
//! A GADDAG is a directed acyclic graph, rooted at a single [`State`], that
//! supports recognizing a word starting from any interior letter: read
//! letters leftward (reversed) from the chosen letter, cross a delimiter
//! arc (`⊣`), then read the remaining letters rightward. This lets the
//! move generator pivot a candidate word around any board anchor instead
//! of only ever starting at a word's first letter.
//!
//! Arena-allocated (`Vec<Node>` indexed by `u32`) rather than built from
//! boxed/`Rc` nodes, following the arena-of-indices style of
//! `lib/src/wordlist.rs::Wordlist` (`nodes: Vec<(u32, LabelSet)>`) —
//! generalized here to support the GADDAG's incremental, non-contiguous
//! insertion instead of that structure's from-trie bulk construction.
mod build;

use crate::error::Error;
use crate::letter::{Label, LetterSet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

pub(crate) type StateId = u32;
pub(crate) const ROOT: StateId = 0;

/// A node in the GADDAG. Besides its outgoing arcs, a node carries the
/// `completes` letter-set: the set of letters which, if read next
/// (continuing in whichever direction the generator is currently
/// traversing), complete a legal word ending exactly at this point. This
/// is the "destination's letter-set" an `ArcRef::letter_set` exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Node {
    /// `letters[label - 1]` is the destination state of the arc labeled
    /// `label`, if present.
    letters: [Option<StateId>; 26],
    /// The destination of the `⊣` (direction-flip) arc, if present.
    delimiter: Option<StateId>,
    completes: LetterSet,
}

impl Node {
    fn empty() -> Node {
        Node {
            letters: [None; 26],
            delimiter: None,
            completes: LetterSet::new(),
        }
    }
}

/// Which kind of arc an [`ArcRef`] was reached through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcLabel {
    Letter(Label),
    /// `⊣`, the internal marker separating the reversed left part of a
    /// word from its right part.
    Delimiter,
}

/// A read-only view of a lexicon state (node), borrowed from its
/// [`Lexicon`].
#[derive(Clone, Copy)]
pub struct StateRef<'a> {
    lexicon: &'a Lexicon,
    id: StateId,
}

impl<'a> StateRef<'a> {
    /// The arc labeled `label` outgoing from this state, if any.
    pub fn arc(&self, label: Label) -> Option<ArcRef<'a>> {
        let node = &self.lexicon.nodes[self.id as usize];
        node.letters[(label - 1) as usize].map(|dest| ArcRef {
            lexicon: self.lexicon,
            label: ArcLabel::Letter(label),
            dest,
        })
    }

    /// The `⊣` arc outgoing from this state, if any.
    pub fn delimiter_arc(&self) -> Option<ArcRef<'a>> {
        let node = &self.lexicon.nodes[self.id as usize];
        node.delimiter.map(|dest| ArcRef {
            lexicon: self.lexicon,
            label: ArcLabel::Delimiter,
            dest,
        })
    }

    /// Iterate over every letter arc outgoing from this state (never
    /// includes the delimiter arc: the generator only enumerates letter
    /// choices when scanning the lexicon, and crosses `⊣` explicitly).
    pub fn arcs(&self) -> impl Iterator<Item = ArcRef<'a>> + 'a {
        let lexicon = self.lexicon;
        let node = &lexicon.nodes[self.id as usize];
        node.letters
            .iter()
            .enumerate()
            .filter_map(move |(i, dest)| {
                dest.map(|dest| ArcRef {
                    lexicon,
                    label: ArcLabel::Letter(i as Label + 1),
                    dest,
                })
            })
    }

    /// The set of letters that complete a valid word at this state (i.e.
    /// the set a caller should test the next character it reads against).
    pub fn letter_set(&self) -> LetterSet {
        self.lexicon.nodes[self.id as usize].completes
    }

    pub(crate) fn id(&self) -> StateId {
        self.id
    }
}

/// A read-only view of a lexicon arc, borrowed from its [`Lexicon`].
#[derive(Clone, Copy)]
pub struct ArcRef<'a> {
    lexicon: &'a Lexicon,
    label: ArcLabel,
    dest: StateId,
}

impl<'a> ArcRef<'a> {
    pub fn dest(&self) -> StateRef<'a> {
        StateRef {
            lexicon: self.lexicon,
            id: self.dest,
        }
    }

    /// The set of letters that complete a word if read next, continuing
    /// past this arc. Forwards the destination state's own `letter_set`
    /// (an arc exposes its destination's letter-set, not one of its own).
    pub fn letter_set(&self) -> LetterSet {
        self.dest().letter_set()
    }

    pub fn char(&self) -> ArcLabel {
        self.label
    }
}

/// A GADDAG-encoded lexicon: the legal word set for one game, immutable
/// after construction and safe to share by read across any number of
/// boards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    nodes: Vec<Node>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon { nodes: vec![Node::empty()] }
    }
}

impl Lexicon {
    /// An empty lexicon (just the root, no words). Never fails.
    pub fn empty() -> Lexicon {
        Lexicon::default()
    }

    /// Build a lexicon from a slice of words. Each word must be uppercase
    /// ASCII, length >= 2.
    /// ## Errors
    /// If a word is shorter than 2 letters or contains a non-alphabetic
    /// character.
    pub fn from_words(words: &[&str]) -> Result<Lexicon, Error> {
        let mut lexicon = Lexicon::default();
        for &word in words {
            lexicon.insert(word)?;
        }
        log::info!("lexicon built from {} words, {} states", words.len(), lexicon.nodes.len());
        Ok(lexicon)
    }

    /// Read a word list file (one uppercase word per line) and build a
    /// lexicon from it.
    /// ## Errors
    /// If the file cannot be read, or a line is not a valid word.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon, Error> {
        let path = path.as_ref();
        log::info!("constructing lexicon from word list {:?}", path);
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let words: Vec<&str> = contents.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        Lexicon::from_words(&words)
    }

    /// The immutable root state.
    pub fn root(&self) -> StateRef {
        StateRef {
            lexicon: self,
            id: ROOT,
        }
    }

    /// Serialize this lexicon to `path` as gzip-compressed bincode.
    /// ## Errors
    /// If `path` cannot be written, or the lexicon cannot be encoded.
    pub fn store<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        log::info!("storing lexicon ({} states) to {:?}", self.nodes.len(), path);
        let file = File::create(path).map_err(|source| Error::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        let encoder = flate2::write::GzEncoder::new(BufWriter::new(file), flate2::Compression::default());
        bincode::serialize_into(encoder, self).map_err(|source| Error::SerializeError {
            path: path.display().to_string(),
            source,
        })
    }

    /// Deserialize a lexicon previously written by [`Lexicon::store`].
    /// ## Errors
    /// If `path` does not exist or cannot be decoded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Lexicon, Error> {
        let path = path.as_ref();
        log::info!("loading lexicon from {:?}", path);
        let file = File::open(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.display().to_string())
            } else {
                Error::ReadError {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;
        let mut decoder = flate2::read::GzDecoder::new(BufReader::new(file));
        let mut bytes = Vec::new();
        decoder
            .read_to_end(&mut bytes)
            .map_err(|source| Error::ReadError {
                path: path.display().to_string(),
                source,
            })?;
        let lexicon: Lexicon =
            bincode::deserialize(&bytes).map_err(|source| Error::SerializeError {
                path: path.display().to_string(),
                source,
            })?;
        log::info!("lexicon loaded: {} states", lexicon.nodes.len());
        Ok(lexicon)
    }

    /// Returns true if `word` (uppercase) is a member of this lexicon.
    /// Used only by tests: move generation never needs a forward-trie
    /// membership test, since every recordable play is validated by
    /// construction.
    #[cfg(test)]
    fn is_word(&self, word: &str) -> bool {
        let labels: Vec<Label> = match word.chars().map(crate::letter::label_of).collect() {
            Ok(labels) => labels,
            Err(_) => return false,
        };
        if labels.len() < 2 {
            return false;
        }
        // Walk the left-reading path for the full word (split m=n) and
        // check the final arc's completion set, exactly the construction
        // used for the full-left-read pattern.
        let n = labels.len();
        let mut state = ROOT;
        for &label in labels[2..n].iter().rev() {
            match self.nodes[state as usize].letters[(label - 1) as usize] {
                Some(dest) => state = dest,
                None => return false,
            }
        }
        match self.nodes[state as usize].letters[(labels[1] - 1) as usize] {
            Some(dest) => self.nodes[dest as usize].completes.contains(labels[0]),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_letter_word() {
        let lex = Lexicon::from_words(&["AT"]).unwrap();
        assert!(lex.is_word("AT"));
        assert!(!lex.is_word("TA"));
        assert!(!lex.is_word("AB"));
    }

    #[test]
    fn test_several_words() {
        let lex = Lexicon::from_words(&["CAT", "CAR", "CARE", "CARS", "BAR"]).unwrap();
        for w in ["CAT", "CAR", "CARE", "CARS", "BAR"] {
            assert!(lex.is_word(w), "{} should be a word", w);
        }
        for w in ["DOG", "CA", "CARED", "TAR"] {
            assert!(!lex.is_word(w), "{} should not be a word", w);
        }
    }

    #[test]
    fn test_empty_word_rejected() {
        assert!(Lexicon::from_words(&[""]).is_err());
        assert!(Lexicon::from_words(&["A"]).is_err());
    }

    #[test]
    fn test_store_load_roundtrip() {
        let lex = Lexicon::from_words(&["CAT", "CARE", "CARES", "BAR", "BARN"]).unwrap();
        let dir = std::env::temp_dir().join("crossword-gaddag-test-lexicon.bin.gz");
        lex.store(&dir).unwrap();
        let loaded = Lexicon::load(&dir).unwrap();
        for w in ["CAT", "CARE", "CARES", "BAR", "BARN"] {
            assert_eq!(lex.is_word(w), loaded.is_word(w));
        }
        std::fs::remove_file(&dir).ok();
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = Lexicon::load("/nonexistent/path/to/lexicon.bin.gz").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}

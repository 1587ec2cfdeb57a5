//! GADDAG word insertion.
//!
//! Ported from `Dictionary._add_word` in the original Python
//! (`astralcai/scrabbler`), which inserts a word as three passes building
//! one path per split point, reusing the previous pass's tail so that
//! every split point after the first costs one new state plus one new
//! delimiter state instead of a full second copy of the word.
use super::{Node, StateId, ROOT};
use crate::error::Error;
use crate::letter::{label_of, Label};

impl super::Lexicon {
    /// Insert `word` (an uppercase string, length >= 2) into the lexicon.
    pub(crate) fn insert(&mut self, word: &str) -> Result<(), Error> {
        let labels: Vec<Label> = word.chars().map(label_of).collect::<Result<_, _>>()?;
        let n = labels.len();
        if n < 2 {
            return Err(Error::invalid_input(format!(
                "word \"{}\" is shorter than the minimum length of 2",
                word
            )));
        }
        self.insert_labels(&labels);
        Ok(())
    }

    fn insert_labels(&mut self, word: &[Label]) {
        let n = word.len();

        // Pass 1 (split at m = n, empty right part): walk the reversed
        // path W[n-1..2], take one more letter arc labeled W[1], and mark
        // its destination as completed by W[0].
        let mut state = ROOT;
        for &ch in word[2..n].iter().rev() {
            state = self.letter_child(state, ch);
        }
        let last = self.letter_child(state, word[1]);
        self.nodes[last as usize].completes.insert(word[0]);

        // Pass 2 (split at m = n-1, right part is just W[n-1]): walk the
        // reversed path W[n-2..0], cross the delimiter, and mark that
        // state as completed by W[n-1].
        let mut state = ROOT;
        for &ch in word[0..n - 1].iter().rev() {
            state = self.letter_child(state, ch);
        }
        let mut tail = self.delimiter_child(state);
        self.nodes[tail as usize].completes.insert(word[n - 1]);

        // Pass 3 (split at m = n-2 down to 1, right part length >= 2):
        // walk the reversed prefix W[m-1..0], cross the delimiter into a
        // fresh state, then link a letter arc labeled W[m] into the tail
        // built by the previous (m+1) iteration. No completion marking
        // here: the tail already carries it, or will once a shorter split
        // point's pass links into it.
        for m in (1..=n.saturating_sub(2)).rev() {
            let mut state = ROOT;
            for &ch in word[0..m].iter().rev() {
                state = self.letter_child(state, ch);
            }
            let delim = self.delimiter_child(state);
            self.link_letter(delim, word[m], tail);
            tail = delim;
        }
    }

    /// The child of `state` via the letter arc `label`, creating a fresh
    /// state if the arc doesn't exist yet.
    fn letter_child(&mut self, state: StateId, label: Label) -> StateId {
        let slot = self.nodes[state as usize].letters[(label - 1) as usize];
        match slot {
            Some(dest) => dest,
            None => {
                let dest = self.push_node();
                self.nodes[state as usize].letters[(label - 1) as usize] = Some(dest);
                dest
            }
        }
    }

    /// The child of `state` via the delimiter arc, creating a fresh state
    /// if it doesn't exist yet.
    fn delimiter_child(&mut self, state: StateId) -> StateId {
        match self.nodes[state as usize].delimiter {
            Some(dest) => dest,
            None => {
                let dest = self.push_node();
                self.nodes[state as usize].delimiter = Some(dest);
                dest
            }
        }
    }

    /// Point the letter arc `label` from `state` at `dest`, overwriting
    /// only if unset (two words sharing this exact prefix+split must
    /// agree on where the arc leads, since it was reached via the same
    /// reversed-prefix path both times).
    fn link_letter(&mut self, state: StateId, label: Label, dest: StateId) {
        let slot = &mut self.nodes[state as usize].letters[(label - 1) as usize];
        match *slot {
            Some(existing) => debug_assert_eq!(existing, dest),
            None => *slot = Some(dest),
        }
    }

    fn push_node(&mut self) -> StateId {
        self.nodes.push(Node::empty());
        (self.nodes.len() - 1) as StateId
    }
}

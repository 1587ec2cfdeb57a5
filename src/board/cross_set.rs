//! Per-square cross-set maintenance.
//!
//! After a word is placed, two kinds of square need a cross-set
//! recomputed:
//!
//! - each empty square immediately beyond the word's own two ends (its
//!   same-direction cross-set, for future extension of a word through
//!   there);
//! - each empty square perpendicularly adjacent to one of the word's
//!   tiles (its perpendicular-direction cross-set, now constrained by the
//!   tile that's newly there).
//!
//! Ported from `original_source/scrabbler/scrabbler.py::Board.update_cross_set`,
//! including its two resolved ambiguities: the cross-set computed for a
//! square is written to *that* square (not a neighbor), and a missing
//! lexicon *arc* during the candidate-completion walk aborts the walk
//! (the run has no legal completion), whereas a missing *state* simply
//! means "no further candidates to intersect", not an abort.
use super::{Board, Coordinate, Direction};
use crate::lexicon::Lexicon;
use crate::letter::{Label, LetterSet};

pub(super) fn update_cross_set(board: &mut Board, start: Coordinate, direction: Direction, lexicon: &Lexicon) {
    let perpendicular = direction.perpendicular();
    let end = board.fast_forward(start, direction, 1);

    // The two squares immediately beyond the word's own ends: if empty,
    // a tile placed there would run perpendicular to this word, so their
    // `cross_set(perpendicular)` needs recomputing.
    let before_start = Board::offset(start, direction, -1);
    recompute_if_empty(board, before_start, perpendicular, lexicon);
    let after_end = Board::offset(end, direction, 1);
    recompute_if_empty(board, after_end, perpendicular, lexicon);

    // The two neighbors of every tile along the word, perpendicular to
    // it: if empty, a tile placed there would run *along* this word's
    // direction, so their `cross_set(direction)` needs recomputing.
    let mut pos = start;
    loop {
        let neighbor_before = Board::offset(pos, perpendicular, -1);
        recompute_if_empty(board, neighbor_before, direction, lexicon);
        let neighbor_after = Board::offset(pos, perpendicular, 1);
        recompute_if_empty(board, neighbor_after, direction, lexicon);
        if pos == end {
            break;
        }
        pos = Board::offset(pos, direction, 1);
    }
}

fn recompute_if_empty(board: &mut Board, coordinate: Coordinate, direction: Direction, lexicon: &Lexicon) {
    if board.square(coordinate).map_or(true, |sq| sq.tile().is_some()) {
        return;
    }
    recompute_one(board, coordinate, direction, lexicon)
}

/// Recompute `cross_set(direction)` at the (empty, in-bounds) square
/// `coordinate`, by examining the already-tiled run along
/// `direction.perpendicular()` that passes through it.
fn recompute_one(board: &mut Board, coordinate: Coordinate, direction: Direction, lexicon: &Lexicon) {
    let perpendicular = direction.perpendicular();
    let above = board.fast_forward(coordinate, perpendicular, -1);
    let below = board.fast_forward(coordinate, perpendicular, 1);

    let legal = match (above == coordinate, below == coordinate) {
        (true, true) => {
            // No perpendicular neighbor in either direction: every letter
            // is legal (placing one would form no perpendicular word).
            LetterSet::full()
        }
        (true, false) => {
            // Only a below-run: walk from `below` back up to `coordinate`
            // and take the reached state's own completion set.
            match below_run_state(board, coordinate, below, perpendicular, lexicon) {
                Some(state) => state.letter_set(),
                None => LetterSet::new(),
            }
        }
        (false, _) => {
            // An above-run exists (possibly with a below-run too). Test
            // every candidate letter by walking up from `coordinate`
            // through to `above`; if there's also a below-run, first
            // narrow to the letters that complete it.
            let candidates = if below == coordinate {
                LetterSet::full()
            } else {
                match below_run_state(board, coordinate, below, perpendicular, lexicon) {
                    Some(state) => state.letter_set(),
                    None => LetterSet::new(),
                }
            };
            let mut legal = LetterSet::new();
            for candidate in candidates.iter() {
                if completes_above(board, coordinate, above, perpendicular, lexicon, candidate) {
                    legal.insert(candidate);
                }
            }
            legal
        }
    };
    set(board, coordinate, direction, legal);
}

/// Walk from `below` back up to (not including) `coordinate`, building
/// the reversed-left GADDAG path through the tiled run below it. Returns
/// `None` if no word spells that run backward (the walk hit a missing
/// arc, not just a missing destination).
fn below_run_state<'a>(
    board: &Board,
    coordinate: Coordinate,
    below: Coordinate,
    perpendicular: Direction,
    lexicon: &'a Lexicon,
) -> Option<crate::lexicon::StateRef<'a>> {
    let mut state = lexicon.root();
    let mut pos = below;
    while pos != coordinate {
        let label = board
            .square(pos)
            .and_then(|sq| sq.tile())
            .expect("coordinate..below is fully tiled");
        state = state.arc(label)?.dest();
        pos = Board::offset(pos, perpendicular, -1);
    }
    Some(state)
}

/// Starting at `lexicon.root().arc(candidate)` (candidate placed at
/// `coordinate`), walk upward through the already-tiled run ending at
/// `above`, and report whether the final state's completion set contains
/// the letter at `above`. A missing arc anywhere along this walk means
/// the candidate cannot complete the run (not "no constraint"): the walk
/// aborts and the candidate is rejected.
fn completes_above(
    board: &Board,
    coordinate: Coordinate,
    above: Coordinate,
    perpendicular: Direction,
    lexicon: &Lexicon,
    candidate: Label,
) -> bool {
    let mut state = match lexicon.root().arc(candidate) {
        Some(arc) => arc.dest(),
        None => return false,
    };
    let mut pos = Board::offset(coordinate, perpendicular, -1);
    loop {
        let label = board
            .square(pos)
            .and_then(|sq| sq.tile())
            .expect("coordinate..above is fully tiled");
        if pos == above {
            return state.letter_set().contains(label);
        }
        state = match state.arc(label) {
            Some(arc) => arc.dest(),
            None => return false,
        };
        pos = Board::offset(pos, perpendicular, -1);
    }
}

fn set(board: &mut Board, coordinate: Coordinate, direction: Direction, letters: LetterSet) {
    if let Some(square) = board.square_mut(coordinate) {
        square.set_cross_set(direction, letters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;
    use crate::lexicon::Lexicon;

    fn layout() -> Layout {
        Layout {
            size: 9,
            double_letter: vec![],
            triple_letter: vec![],
            double_word: vec![],
            triple_word: vec![],
        }
    }

    #[test]
    fn test_endpoint_cross_set_full_with_no_perpendicular_run() {
        let mut board = Board::new(&layout());
        board.place_word((4, 4), "CAT", Direction::Across, &[]).unwrap();
        board.update_cross_set((4, 4), Direction::Across, &Lexicon::from_words(&["CAT"]).unwrap());
        // (4,3), just before the word, has no tile above or below it.
        assert_eq!(board.square((4, 3)).unwrap().cross_set(Direction::Down), LetterSet::full());
    }

    #[test]
    fn test_cross_set_restricts_to_completing_letters() {
        let lexicon = Lexicon::from_words(&["CAT", "AS"]).unwrap();
        let mut board = Board::new(&layout());
        board.place_word((4, 4), "CAT", Direction::Across, &[]).unwrap();
        board.update_cross_set((4, 4), Direction::Across, &lexicon);
        // (5,5), directly below the 'A' (row 4, col 5): a tile placed
        // there as part of an across word must complete the down-word
        // "A" + tile, so cross_set(Across) narrows to {S}.
        let cross = board.square((5, 5)).unwrap().cross_set(Direction::Across);
        assert!(cross.contains(crate::letter::label_of('S').unwrap()));
        assert!(!cross.contains(crate::letter::label_of('X').unwrap()));
    }
}

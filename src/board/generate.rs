//! The bidirectional move generator and scorer.
//!
//! Ported from `original_source/scrabbler/scrabbler.py::Board.generate_moves`
//! (`gen`/`go_on`/`record_play`/`cross_score`), with one structural change:
//! the rack is a single mutable `Rack` that each branch removes a tile
//! from before recursing and restores afterward, rather than the
//! original's per-call `deepcopy` of the rack.
use super::{Board, Coordinate, Direction};
use crate::lexicon::{Lexicon, StateRef};
use crate::letter::{Label, Letter, Rack};
use crate::tileset::TileScores;
use std::collections::{HashSet, VecDeque};

/// A legal move found by the generator: a word, where it starts, which
/// way it runs, and the score it's worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub word: String,
    pub start: Coordinate,
    pub direction: Direction,
    pub score: i32,
}

struct Context<'a> {
    board: &'a Board,
    lexicon: &'a Lexicon,
    tile_scores: &'a TileScores,
    anchor: Coordinate,
    direction: Direction,
    /// Whether the square immediately right of the anchor itself (fixed,
    /// independent of how far the left phase has grown) is empty or
    /// off-board. Checked on every left-phase record, since a tile there
    /// means this anchor is only valid as the left edge of an existing
    /// run, not as the end of a shorter word.
    right_of_anchor_open: bool,
}

pub(super) fn generate_moves(
    board: &Board,
    anchor: Coordinate,
    direction: Direction,
    rack: &Rack,
    lexicon: &Lexicon,
    tile_scores: &TileScores,
    anchors_used: &mut HashSet<Coordinate>,
) -> Vec<Move> {
    let right_of_anchor = Board::offset(anchor, direction, 1);
    let right_of_anchor_open = board.square(right_of_anchor).map_or(true, |sq| sq.tile().is_none());
    let ctx = Context {
        board,
        lexicon,
        tile_scores,
        anchor,
        direction,
        right_of_anchor_open,
    };
    let mut moves = Vec::new();
    let mut rack = rack.clone();
    let mut word = VecDeque::new();
    let mut new_tiles = Vec::new();
    let mut blanks = Vec::new();
    gen(
        &ctx,
        0,
        0,
        &mut rack,
        &mut word,
        &mut new_tiles,
        &mut blanks,
        lexicon.root(),
        anchors_used,
        &mut moves,
    );
    moves
}

/// Scan every anchor along `direction` and generate the full set of legal
/// moves, deduplicated via a running `anchors_used` set per scan line
/// (row, for `Across`; column, for `Down`) so that a word spanning
/// several anchors is only generated once, from its rightmost one.
pub(super) fn find_best_moves(
    board: &Board,
    rack: &Rack,
    direction: Direction,
    lexicon: &Lexicon,
    tile_scores: &TileScores,
) -> Vec<Move> {
    let size = board.size() as i32;
    let mut moves = Vec::new();
    for line in 0..size {
        let mut anchors_used = HashSet::new();
        for i in 0..size {
            let coordinate = match direction {
                Direction::Across => (line, i),
                Direction::Down => (i, line),
            };
            if is_anchor(board, coordinate) {
                moves.extend(generate_moves(
                    board,
                    coordinate,
                    direction,
                    rack,
                    lexicon,
                    tile_scores,
                    &mut anchors_used,
                ));
                anchors_used.insert(coordinate);
            }
        }
    }
    moves
}

fn is_anchor(board: &Board, coordinate: Coordinate) -> bool {
    if board.is_empty() {
        let center = (board.size() as i32 - 1) / 2;
        return coordinate == (center, center);
    }
    match board.square(coordinate) {
        Some(sq) if sq.tile().is_none() => [
            Board::offset(coordinate, Direction::Across, -1),
            Board::offset(coordinate, Direction::Across, 1),
            Board::offset(coordinate, Direction::Down, -1),
            Board::offset(coordinate, Direction::Down, 1),
        ]
        .iter()
        .any(|&neighbor| board.square(neighbor).map_or(false, |sq| sq.tile().is_some())),
        _ => false,
    }
}

#[allow(clippy::too_many_arguments)]
fn gen(
    ctx: &Context,
    pos: i32,
    left_most: i32,
    rack: &mut Rack,
    word: &mut VecDeque<(Label, bool)>,
    new_tiles: &mut Vec<Coordinate>,
    blanks: &mut Vec<Coordinate>,
    state: StateRef,
    anchors_used: &mut HashSet<Coordinate>,
    moves: &mut Vec<Move>,
) {
    let coordinate = Board::offset(ctx.anchor, ctx.direction, pos);
    let square = match ctx.board.square(coordinate) {
        Some(square) => square,
        None => return,
    };

    if let Some(label) = square.tile() {
        let next = state.arc(label).map(|arc| arc.dest());
        go_on(ctx, pos, left_most, label, false, rack, word, new_tiles, blanks, state, next, anchors_used, moves);
        return;
    }

    let cross = square.cross_set(ctx.direction);
    let candidates: Vec<Label> = rack.distinct_tiles().filter(|&label| cross.contains(label)).collect();
    for label in candidates {
        rack.remove(Letter::Tile(label));
        new_tiles.push(coordinate);
        let next = state.arc(label).map(|arc| arc.dest());
        go_on(ctx, pos, left_most, label, false, rack, word, new_tiles, blanks, state, next, anchors_used, moves);
        new_tiles.pop();
        rack.insert(Letter::Tile(label));
    }

    if rack.has_blank() {
        for label in cross.iter() {
            rack.remove(Letter::Blank);
            new_tiles.push(coordinate);
            blanks.push(coordinate);
            let next = state.arc(label).map(|arc| arc.dest());
            go_on(ctx, pos, left_most, label, true, rack, word, new_tiles, blanks, state, next, anchors_used, moves);
            blanks.pop();
            new_tiles.pop();
            rack.insert(Letter::Blank);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn go_on(
    ctx: &Context,
    pos: i32,
    left_most: i32,
    label: Label,
    is_blank: bool,
    rack: &mut Rack,
    word: &mut VecDeque<(Label, bool)>,
    new_tiles: &mut Vec<Coordinate>,
    blanks: &mut Vec<Coordinate>,
    old_state: StateRef,
    new_state: Option<StateRef>,
    anchors_used: &mut HashSet<Coordinate>,
    moves: &mut Vec<Move>,
) {
    if pos <= 0 {
        // Still growing leftward (or placing the anchor letter itself at
        // pos 0): `pos` is the coordinate just added, which is therefore
        // the new leftmost extent of the word so far.
        let left_most = pos;
        word.push_front((label, is_blank));
        let left_neighbor = Board::offset(ctx.anchor, ctx.direction, pos - 1);
        let left_neighbor_square = ctx.board.square(left_neighbor);
        let left_open = left_neighbor_square.map_or(true, |sq| sq.tile().is_none());
        if left_open && ctx.right_of_anchor_open && !new_tiles.is_empty() && old_state.letter_set().contains(label) {
            record_play(ctx, left_most, word, new_tiles, blanks, moves);
        }
        if let Some(state) = new_state {
            if left_neighbor_square.is_some() && !anchors_used.contains(&left_neighbor) {
                gen(ctx, pos - 1, left_most, rack, word, new_tiles, blanks, state, anchors_used, moves);
            }
            if let Some(delimiter) = state.delimiter_arc() {
                gen(ctx, 1, left_most, rack, word, new_tiles, blanks, delimiter.dest(), anchors_used, moves);
            }
        }
        word.pop_front();
    } else {
        // Growing rightward past the delimiter: the leftmost extent was
        // fixed when the left phase ended, and is threaded through
        // unchanged.
        word.push_back((label, is_blank));
        let right_neighbor = Board::offset(ctx.anchor, ctx.direction, pos + 1);
        let right_open = ctx.board.square(right_neighbor).map_or(true, |sq| sq.tile().is_none());
        if right_open && !new_tiles.is_empty() && old_state.letter_set().contains(label) {
            record_play(ctx, left_most, word, new_tiles, blanks, moves);
        }
        if let Some(state) = new_state {
            if ctx.board.square(right_neighbor).is_some() {
                gen(ctx, pos + 1, left_most, rack, word, new_tiles, blanks, state, anchors_used, moves);
            }
        }
        word.pop_back();
    }
}

fn record_play(
    ctx: &Context,
    left_most: i32,
    word: &VecDeque<(Label, bool)>,
    new_tiles: &[Coordinate],
    blanks: &[Coordinate],
    moves: &mut Vec<Move>,
) {
    let start = Board::offset(ctx.anchor, ctx.direction, left_most);

    let mut word_score = 0i32;
    let mut word_multiplier = 1u32;
    let mut cross_total = 0i32;
    let mut text = String::with_capacity(word.len());

    for (i, &(label, is_blank)) in word.iter().enumerate() {
        let coordinate = Board::offset(start, ctx.direction, i as i32);
        text.push(crate::letter::char_of(label));
        let base = if is_blank { 0 } else { ctx.tile_scores.score(label) };
        if new_tiles.contains(&coordinate) {
            let letter_score = base as i32 * ctx.board.letter_multiplier(coordinate) as i32;
            word_score += letter_score;
            word_multiplier *= ctx.board.word_multiplier(coordinate);
            cross_total += cross_score(ctx, coordinate, letter_score, is_blank);
        } else {
            word_score += base as i32;
        }
    }

    let mut total = word_score * word_multiplier as i32 + cross_total;
    if is_bingo(new_tiles) {
        total += ctx.tile_scores.bingo_bonus();
    }

    let _ = blanks; // already folded into each placed letter's zero base score above.

    moves.push(Move {
        word: text,
        start,
        direction: ctx.direction,
        score: total,
    });
}

fn is_bingo(new_tiles: &[Coordinate]) -> bool {
    new_tiles.len() >= 7
}

/// The perpendicular word formed (if any) by placing `label` at
/// `coordinate`, scored as: the sum of the already-tiled neighbor scores
/// plus this tile's own already-multiplied `letter_score`, times the word
/// multiplier of `coordinate`'s own premium (since only the newly placed
/// square's word bonus applies). Zero if no perpendicular word forms.
fn cross_score(ctx: &Context, coordinate: Coordinate, letter_score: i32, is_blank: bool) -> i32 {
    let perpendicular = match ctx.direction {
        Direction::Across => Direction::Down,
        Direction::Down => Direction::Across,
    };
    let above = ctx.board.fast_forward(coordinate, perpendicular, -1);
    let below = ctx.board.fast_forward(coordinate, perpendicular, 1);
    if above == coordinate && below == coordinate {
        return 0;
    }
    let _ = is_blank; // the new tile's own contribution is already in `letter_score`.
    let mut total = letter_score;
    let mut pos = above;
    loop {
        if pos != coordinate {
            if let Some(square) = ctx.board.square(pos) {
                if let Some(label) = square.tile() {
                    let base = if square.is_blank() { 0 } else { ctx.tile_scores.score(label) };
                    total += base as i32;
                }
            }
        }
        if pos == below {
            break;
        }
        pos = Board::offset(pos, perpendicular, 1);
    }
    total * ctx.board.word_multiplier(coordinate) as i32
}

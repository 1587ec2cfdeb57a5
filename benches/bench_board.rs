use criterion::{criterion_group, criterion_main, Criterion};
use crossword_gaddag::board::{Board, Direction, Layout};
use crossword_gaddag::letter::Rack;
use crossword_gaddag::lexicon::Lexicon;
use crossword_gaddag::tileset::{Language, TileScores};

const WORDS: &[&str] = &[
    "CAT", "CATS", "CARE", "CARES", "CARED", "CARD", "CARDS", "BAR", "BARE", "BARN", "BARNS",
    "ARE", "ARES", "EAR", "EARS", "ERA", "ERAS", "SEA", "SEAR", "SEARED", "TEA", "TEAR", "TEARS",
];

fn layout() -> Layout {
    Layout {
        size: 15,
        double_letter: vec![(0, 3), (11, 0), (2, 6), (6, 2), (6, 8), (8, 6), (8, 12), (12, 6)],
        triple_letter: vec![(1, 5), (5, 1), (5, 5), (5, 9), (9, 5), (9, 9), (13, 5)],
        double_word: vec![(1, 1), (2, 2), (3, 3), (4, 4), (7, 7), (10, 10), (11, 11), (12, 12), (13, 13)],
        triple_word: vec![(0, 0), (0, 7), (0, 14), (7, 0), (7, 14), (14, 0), (14, 7), (14, 14)],
    }
}

fn tile_scores() -> TileScores {
    TileScores::new(
        Language::Scrabble,
        &[
            ('A', 1), ('B', 3), ('C', 3), ('D', 2), ('E', 1), ('R', 1), ('S', 1), ('T', 1), ('N', 1),
        ],
    )
    .unwrap()
}

fn bench_find_best_moves(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(WORDS).unwrap();
    let mut board = Board::new(&layout());
    board.place_word((7, 7), "CARE", Direction::Across, &[]).unwrap();
    board.update_cross_set((7, 7), Direction::Across, &lexicon);
    let scores = tile_scores();
    let rack = Rack::parse("SEARNDT").unwrap();

    c.bench_function("board.find_best_moves", |b| {
        b.iter(|| board.find_best_moves(&rack, Direction::Down, &lexicon, &scores))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_find_best_moves(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

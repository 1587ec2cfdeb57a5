use criterion::{criterion_group, criterion_main, Criterion};
use crossword_gaddag::lexicon::Lexicon;

const WORDS: &[&str] = &[
    "AA", "AAH", "AAL", "AAS", "ABA", "ABACI", "ABACK", "ABACUS", "ABAFT", "ABALONE", "ABAMP",
    "ABAND", "ABASE", "ABASED", "ABASER", "ABASH", "ABATE", "ABATED", "ABATER", "ABATIS", "ABATOR",
    "ABATTOIR", "ABAXIAL", "ABBACY", "ABBE", "ABBEY", "ABBOT", "ABDOMEN", "ABDUCE", "ABDUCT",
    "ABEAM", "ABED", "ABELE", "ABET", "ABHOR", "ABIDE", "ABIDED", "ABIDER", "ABIES", "ABILITY",
];

fn bench_from_words(c: &mut Criterion) {
    c.bench_function("lexicon.from_words", |b| {
        b.iter(|| Lexicon::from_words(WORDS).unwrap())
    });
}

fn bench_arc_lookup(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(WORDS).unwrap();
    c.bench_function("lexicon.root.arc", |b| {
        b.iter(|| lexicon.root().arc(crossword_gaddag::letter::label_of('A').unwrap()))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_from_words(c);
    bench_arc_lookup(c);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tst_suggest::Trie;

fn corpus() -> Vec<String> {
    let syllables = ["sa", "lt", "ed", "in", "ra", "ndo", "m", "ly", "ar", "y"];
    let mut words = Vec::new();
    for a in syllables {
        for b in syllables {
            for c in syllables {
                words.push(format!("{a}{b}{c}"));
            }
        }
    }
    words
}

fn build(words: &[String]) -> anyhow::Result<Trie> {
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word)?;
    }
    Ok(trie)
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = corpus();

    c.bench_function("insert corpus", |b| b.iter(|| build(black_box(&words))));

    if let Ok(trie) = build(&words) {
        c.bench_function("suggest sa", |b| b.iter(|| trie.suggest(black_box("sa"))));
        c.bench_function("count salt", |b| b.iter(|| trie.count(black_box("salt"))));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use levtrie::trie::Trie;

fn generate_words(count: usize) -> Vec<String> {
    let alphabet: Vec<char> = "abcdefghijklmnopqrstuvwxyz".chars().collect();
    let mut words = Vec::with_capacity(count);
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = 3 + (state % 10) as usize;
        let word = (0..len)
            .map(|i| alphabet[((state >> (i * 5)) % 26) as usize])
            .collect();
        words.push(word);
    }
    words
}

fn bench_insert(c: &mut Criterion) {
    let words = generate_words(10_000);

    c.bench_function("insert_10k", |b| {
        b.iter(|| {
            let trie: Trie = black_box(&words).iter().collect();
            black_box(trie.len())
        })
    });
}

fn bench_suffix(c: &mut Criterion) {
    let words = generate_words(50_000);
    let trie: Trie = words.iter().collect();

    c.bench_function("suffix", |b| {
        b.iter(|| black_box(trie.suffix(black_box("ab"))))
    });
}

fn bench_search(c: &mut Criterion) {
    let words = generate_words(50_000);
    let trie: Trie = words.iter().collect();
    let queries: Vec<&str> = words.iter().step_by(5_000).map(String::as_str).collect();

    let mut group = c.benchmark_group("levenshtein_search");

    for max_distance in [1usize, 2] {
        group.bench_function(format!("distance_{max_distance}"), |b| {
            b.iter(|| {
                for query in &queries {
                    black_box(trie.search_within(black_box(query), max_distance));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_suffix, bench_search);
criterion_main!(benches);

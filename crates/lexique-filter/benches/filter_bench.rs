// Criterion benchmarks for lexique-filter.
//
// Uses a synthetic lexicon so the benchmark runs without the real Lexique
// table.
//
// Run:
//   cargo bench -p lexique-filter

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lexique_filter::{Lexicon, filter_candidates};

const ENTRY_COUNT: usize = 50_000;

fn synthetic_word(i: usize) -> String {
    let mut word = String::new();
    let mut n = i;
    loop {
        word.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
        if n == 0 {
            break;
        }
    }
    word
}

fn synthetic_table() -> String {
    let mut table = String::from("ortho\tlemme\tcgram\tnombre\tinfover\n");
    for i in 0..ENTRY_COUNT {
        let word = synthetic_word(i);
        let (cgram, nombre, infover) = match i % 5 {
            0 => ("VER", "", "ind:pre:3s;"),
            1 => ("VER", "p", "par:pas;"),
            2 => ("NOM", "p", ""),
            3 => ("ADJ", "s", ""),
            _ => ("ADV", "", ""),
        };
        table.push_str(&format!("{word}\t{word}x\t{cgram}\t{nombre}\t{infover}\n"));
    }
    table
}

fn bench_load_lexicon(c: &mut Criterion) {
    let table = synthetic_table();
    c.bench_function("load_lexicon", |b| {
        b.iter(|| Lexicon::from_reader(black_box(table.as_bytes())).unwrap())
    });
}

fn bench_filter_candidates(c: &mut Criterion) {
    let table = synthetic_table();
    let lexicon = Lexicon::from_reader(table.as_bytes()).unwrap();
    // Half known, half unknown words.
    let candidates: Vec<String> = (0..ENTRY_COUNT * 2).map(synthetic_word).collect();

    c.bench_function("filter_candidates", |b| {
        b.iter(|| filter_candidates(black_box(&lexicon), black_box(&candidates)))
    });
}

criterion_group!(benches, bench_load_lexicon, bench_filter_candidates);
criterion_main!(benches);

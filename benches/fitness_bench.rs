use criterion::{criterion_group, criterion_main, Criterion};
use quadbreak::alphabet::Alphabet;
use quadbreak::ciphertext::CipherText;
use quadbreak::fitness;
use quadbreak::model::QuadgramTable;
use quadbreak::optimizer::HillClimber;
use std::hint::black_box;

const TEXT: &str = "the fishing boats went out before the sun was up and every evening \
they came back with their nets heavy and their crews tired the people who lived there \
were careful with their money and generous with their time";

fn bench_fitness(c: &mut Criterion) {
    let alphabet = Alphabet::english();
    let table = QuadgramTable::from_words(&alphabet, TEXT.split_whitespace()).unwrap();
    let cipher = CipherText::new(&alphabet, &TEXT.repeat(8));

    c.bench_function("fitness_rolling", |b| {
        b.iter(|| fitness::score(black_box(cipher.digits()), &table))
    });
    c.bench_function("fitness_naive", |b| {
        b.iter(|| fitness::score_naive(black_box(cipher.digits()), &table))
    });
    c.bench_function("hill_climb_trial", |b| {
        let mut rng = fastrand::Rng::with_seed(1);
        b.iter(|| HillClimber::new(&cipher, &table, &mut rng).climb())
    });
}

criterion_group!(benches, bench_fitness);
criterion_main!(benches);

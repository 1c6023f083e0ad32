use criterion::{Criterion, criterion_group, criterion_main};
use pinpuzzle::{Csprng, PinPuzzle};
use std::hint::black_box;

pub fn bench_encode(c: &mut Criterion) {
    let puzzle = PinPuzzle::construct("bench-soil", 8, false).unwrap();

    for pin in ["4821", "12345678"] {
        c.bench_function(&format!("encode {} digits", pin.len()), |b| {
            let mut rng = Csprng::from_seed([9u8; 32]);
            b.iter(|| puzzle.encode_with(&mut rng, black_box(pin), None).unwrap())
        });
    }

    let mut rng = Csprng::from_seed([10u8; 32]);
    let inst = puzzle.encode_with(&mut rng, "4821", None).unwrap();

    c.bench_function("decode 4 digits", |b| b.iter(|| puzzle.decode(black_box(&inst)).unwrap()));
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);

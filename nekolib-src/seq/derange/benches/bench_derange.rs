use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use derange::Derange;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{Gen, Perm, Seq};

fn bench_derange(c: &mut Criterion) {
    let mut group = c.benchmark_group("derange");

    let mut rng = ChaCha20Rng::from_seed([
        0x1F, 0x8B, 0x5A, 0x42, 0xC9, 0x0E, 0x77, 0xD3, 0x36, 0xA1, 0x6C, 0xF0,
        0x2B, 0x94, 0xE5, 0x58, 0x0D, 0xBE, 0x73, 0x19, 0xC4, 0x8F, 0x61, 0xAA,
        0x3E, 0xD7, 0x05, 0x9C, 0x72, 0xEB, 0x40, 0x2D,
    ]);

    for len in [100, 1000, 3000] {
        // few distinct values: most elements get removed
        let dense = Seq { bound: 0_i32..4, len }.generate(&mut rng);
        let perm = Perm { len }.generate(&mut rng);
        let asc: Vec<_> = (0..len as i32).collect();

        for (name, a) in [("dense", &dense), ("perm", &perm), ("asc", &asc)] {
            group.bench_with_input(
                BenchmarkId::new(format!("incremental/{name}"), len),
                a,
                |b, a| b.iter(|| black_box(a.derange())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("naive/{name}"), len),
                a,
                |b, a| b.iter(|| black_box(naive_derange::derange(a))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_derange);
criterion_main!(benches);

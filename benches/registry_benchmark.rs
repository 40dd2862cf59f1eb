use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hotel_operations::guests::GuestRegistry;
use rand::{seq::SliceRandom, thread_rng};

// Benchmark for the guest registry sort + binary search path
pub fn registry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("guest_registry_search");

    for size in [50usize, 200, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            // Register guests in shuffled name order so every iteration
            // exercises a real sort
            let mut names: Vec<String> = (0..size).map(|i| format!("guest{i:05}")).collect();
            names.shuffle(&mut thread_rng());

            b.iter(|| {
                let mut registry = GuestRegistry::with_capacity(size);
                for name in &names {
                    registry.register(name, "000").unwrap();
                }

                registry.sort_by_name();

                let mut hits = 0;
                for i in 0..size {
                    let name = format!("guest{i:05}");
                    if registry.search_by_name(&name).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, registry_benchmark);
criterion_main!(benches);

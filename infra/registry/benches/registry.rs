use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use xmeta_registry::prelude::*;

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    let sizes = [("seed", 0usize), ("1K", 1_000), ("16K", 16_000)];

    for (label, extra) in sizes {
        let registry = Registry::builder().build().expect("Registry setup failed");
        for n in 0..extra {
            registry
                .register_namespace(&format!("http://ns.example.com/bench/{n}/"), "bench")
                .expect("register failed");
        }

        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("prefix_for", label), &registry, |b, r| {
            b.iter(|| r.prefix_for("http://ns.adobe.com/xap/1.0/"));
        });

        group.bench_with_input(BenchmarkId::new("find_alias_qname", label), &registry, |b, r| {
            b.iter(|| r.find_alias("xmp:Author"));
        });

        group.bench_with_input(BenchmarkId::new("resolve_alias", label), &registry, |b, r| {
            b.iter(|| r.resolve_alias("http://ns.adobe.com/xap/1.0/", "Author"));
        });
    }

    group.finish();
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    group.bench_function("register_namespace_fresh", |b| {
        b.iter_batched(
            Registry::default,
            |registry| {
                registry
                    .register_namespace("http://ns.example.com/fresh/", "p")
                    .expect("register failed")
            },
            criterion::BatchSize::SmallInput,
        );
    });

    let registry = Registry::builder().build().expect("Registry setup failed");
    group.bench_function("register_namespace_existing", |b| {
        b.iter(|| {
            registry
                .register_namespace("http://ns.adobe.com/xap/1.0/", "ignored")
                .expect("register failed")
        });
    });

    group.bench_function("register_alias_existing", |b| {
        b.iter(|| {
            registry
                .register_alias(
                    "http://ns.adobe.com/xap/1.0/",
                    "Author",
                    "http://purl.org/dc/elements/1.1/",
                    "creator",
                    ArrayForm::ArrayFirstItem,
                )
                .expect("register failed")
        });
    });

    group.finish();
}

criterion_group!(benches, bench_lookups, bench_registration);
criterion_main!(benches);

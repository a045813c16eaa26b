use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use valuekit_core::equality::{hash_ordered, hash_unordered};
use valuekit_core::{ValueDictionary, ValueList, ValueObject, ValueSet, value_object};

#[derive(Debug, Clone)]
struct Address {
    street: String,
    house_number: String,
    post_code: String,
    city: String,
}

value_object!(Address { street, house_number, post_code, city });

fn address(n: usize) -> Address {
    Address {
        street: format!("Street {n}"),
        house_number: n.to_string(),
        post_code: format!("{:05}", n % 100_000),
        city: "Bremen".to_string(),
    }
}

fn bench_hash_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_fold");

    for size in [8_usize, 64, 512] {
        let hashes: Vec<Option<i32>> = (0..size as i32).map(Some).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ordered", size), &hashes, |b, hashes| {
            b.iter(|| hash_ordered(black_box(17), hashes.iter().copied()));
        });
        group.bench_with_input(BenchmarkId::new("unordered", size), &hashes, |b, hashes| {
            b.iter(|| hash_unordered(black_box(17), hashes.iter().copied()));
        });
    }

    group.finish();
}

fn bench_value_object_equality(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_object");
    let a = address(1);
    let b = address(1);

    group.bench_function("equals", |bench| {
        bench.iter(|| black_box(&a).value_equals(black_box(&b)));
    });
    group.bench_function("hash", |bench| {
        bench.iter(|| black_box(&a).value_hash());
    });

    group.finish();
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    for size in [16_usize, 256] {
        let list: ValueList<Address> = (0..size).map(address).collect();
        let set: ValueSet<Address> = (0..size).map(address).collect();
        let dict: ValueDictionary<String, Address> =
            (0..size).map(|n| (n.to_string(), address(n))).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("list_hash", size), &list, |b, list| {
            b.iter(|| list.content_hash());
        });
        group.bench_with_input(BenchmarkId::new("set_hash", size), &set, |b, set| {
            b.iter(|| set.content_hash());
        });
        group.bench_with_input(BenchmarkId::new("dictionary_eq", size), &dict, |b, dict| {
            let other = dict.clone();
            b.iter(|| dict == &other);
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hash_fold,
    bench_value_object_equality,
    bench_collections
);
criterion_main!(benches);

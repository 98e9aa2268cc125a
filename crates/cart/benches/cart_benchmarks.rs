use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use luxfinds_cart::{CartStore, NullSink};
use luxfinds_core::{ProductId, Quantity};
use luxfinds_storage::MemoryStore;

fn populated_cart(rows: usize) -> CartStore<MemoryStore> {
    let cart = CartStore::new(MemoryStore::new(), NullSink);
    for n in 0..rows {
        let id = ProductId::new(format!("sku-{n}")).expect("static id");
        cart.add_item(&id, Quantity::ONE);
    }
    cart
}

/// Merge path: repeat adds of one id against carts of varying size.
fn bench_add_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_add_merge");
    for rows in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let cart = populated_cart(rows);
            let id = ProductId::new("sku-0").expect("static id");
            b.iter(|| cart.add_item(black_box(&id), Quantity::ONE));
        });
    }
    group.finish();
}

/// Full read-deserialize-fold cycle of the running total.
fn bench_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_total");
    for rows in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let cart = populated_cart(rows);
            b.iter(|| black_box(cart.total()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_merge, bench_total);
criterion_main!(benches);

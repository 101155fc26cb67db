use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use storefront_cart::{
    AddItem, Cart, CartCommand, CartId, ItemCandidate, OrderTotals, PricingConfig,
};
use storefront_catalog::ProductId;
use storefront_core::{Aggregate, AggregateId, Money};

fn candidate(i: usize) -> ItemCandidate {
    ItemCandidate {
        product_id: ProductId::new(format!("item-{i}")).unwrap(),
        name: format!("Item {i}"),
        unit_price: Money::from_cents(999 + i as u64),
        image: format!("item-{i}.jpg"),
        description: None,
    }
}

fn seeded_cart(lines: usize) -> Cart {
    let mut cart = Cart::new(CartId::new(AggregateId::new()));
    for i in 0..lines {
        let cmd = CartCommand::AddItem(AddItem {
            candidate: candidate(i),
            occurred_at: Utc::now(),
        });
        let events = cart.handle(&cmd).unwrap();
        for event in &events {
            cart.apply(event);
        }
    }
    cart
}

fn bench_merge_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("cart_merge_add");
    for lines in [1usize, 10, 100] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            b.iter(|| black_box(seeded_cart(lines)));
        });
    }
    group.finish();
}

fn bench_totals(c: &mut Criterion) {
    let pricing = PricingConfig::default();
    let mut group = c.benchmark_group("cart_totals");
    for lines in [1usize, 10, 100] {
        let cart = seeded_cart(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &cart, |b, cart| {
            b.iter(|| black_box(OrderTotals::compute(cart.lines(), &pricing).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge_add, bench_totals);
criterion_main!(benches);

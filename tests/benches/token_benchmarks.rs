//! # Tax Token Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | `compute_tax` | constant time for any 256-bit amount |
//! | `TransferEngine::transfer` | < 1µs per transfer |
//! | `TokenService::transfer` | lock + transfer, single caller |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use tax_token::prelude::*;

fn account(i: u8) -> Address {
    Address::repeat_byte(i)
}

fn engine(accounts: u8) -> TransferEngine {
    let config = TokenConfig::new("Bench", "BNC", 1_000_000_000, 18, 5, account(0));
    let mut engine = TransferEngine::new(config).unwrap();
    let share = engine.total_supply() / U256::from(u64::from(accounts) * 2);
    for i in 1..accounts {
        engine.transfer(account(0), account(i), share).unwrap();
    }
    engine.take_events();
    engine
}

fn bench_compute_tax(c: &mut Criterion) {
    let mut group = c.benchmark_group("tax-policy");
    let policy = TaxPolicy::new(5).unwrap();

    group.bench_function("compute_tax_small", |b| {
        b.iter(|| black_box(policy.compute_tax(black_box(Amount::from(200)))))
    });
    group.bench_function("compute_tax_max", |b| {
        b.iter(|| black_box(policy.compute_tax(black_box(Amount::MAX))))
    });

    group.finish();
}

fn bench_engine_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer-engine");

    for accounts in [2u8, 16, 128] {
        let mut engine = engine(accounts);
        let mut rng = rand::thread_rng();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("transfer", accounts),
            &accounts,
            |b, &accounts| {
                b.iter(|| {
                    let from = account(rng.gen_range(1..accounts.max(2)));
                    let to = account(rng.gen_range(0..accounts));
                    let result = engine.transfer(from, to, Amount::from(1_000));
                    engine.take_events();
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

fn bench_service_transfers(c: &mut Criterion) {
    let mut group = c.benchmark_group("token-service");
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let service = TokenService::from_engine(
        engine(8),
        ServiceConfig {
            check_invariants: false,
            ..ServiceConfig::default()
        },
    );

    group.bench_function("transfer", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let result = service
                    .transfer(account(1), account(2), Amount::from(1_000))
                    .await;
                service.take_events().await;
                black_box(result)
            })
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_tax,
    bench_engine_transfers,
    bench_service_transfers,
);

criterion_main!(benches);

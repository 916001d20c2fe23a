use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ferrero_env::{FerreroConfig, FerreroEnv};

fn bench_legal_moves(c: &mut Criterion) {
    let env = FerreroEnv::new(FerreroConfig::default()).unwrap();
    c.bench_function("legal_moves_6x8", |b| b.iter(|| black_box(&env).legal_moves()));
}

fn bench_rollout(c: &mut Criterion) {
    c.bench_function("first_legal_episode_6x8", |b| {
        b.iter(|| {
            let mut env = FerreroEnv::new(FerreroConfig::default()).unwrap();
            loop {
                let action = env.legal_moves()[0];
                if env.step(action).unwrap().done {
                    break;
                }
            }
            black_box(env.episodes_remaining())
        });
    });
}

criterion_group!(benches, bench_legal_moves, bench_rollout);
criterion_main!(benches);

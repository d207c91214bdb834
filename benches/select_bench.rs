use criterion::{Criterion, criterion_group, criterion_main};
use qpsbench::{
    bench::scenario::USERINFO_COUNT,
    config::BenchConfig,
    db::{mysql::MySqlSession, session::Session},
};
use tokio::runtime::Runtime;

fn bench_userinfo_count(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let config = BenchConfig::from_env().unwrap();
    let mut session = match rt.block_on(MySqlSession::connect(&config)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("skipping userinfo_count: {e:#}");
            return;
        }
    };
    c.bench_function("userinfo_count", |b| {
        b.iter(|| rt.block_on(session.query_discard(USERINFO_COUNT.sql)).unwrap());
    });
}

criterion_group!(benches, bench_userinfo_count);
criterion_main!(benches);

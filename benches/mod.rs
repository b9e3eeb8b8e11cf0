use criterion::{criterion_group, criterion_main};


criterion_group!(
    benches,
    client::bench_get,
    client::bench_post_form,
    client::bench_read_response
);
criterion_main!(benches);

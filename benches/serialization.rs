use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde::Serialize;
use tomlify::{to_string, toml};

#[derive(Serialize, Clone)]
struct Server {
    host: String,
    port: u16,
    workers: u32,
    tls: bool,
}

#[derive(Serialize, Clone)]
struct Config {
    title: String,
    debug: bool,
    tags: Vec<String>,
    server: Server,
}

fn benchmark_serialize_flat(c: &mut Criterion) {
    let server = Server {
        host: "localhost".to_string(),
        port: 8080,
        workers: 4,
        tls: false,
    };

    c.bench_function("serialize_flat_struct", |b| {
        b.iter(|| to_string(black_box(&server)))
    });
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let config = Config {
        title: "demo".to_string(),
        debug: false,
        tags: vec!["edge".to_string(), "staging".to_string()],
        server: Server {
            host: "localhost".to_string(),
            port: 8080,
            workers: 4,
            tls: true,
        },
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&config)))
    });
}

fn benchmark_serialize_arrays(c: &mut Criterion) {
    let doc = toml!({
        "points": [
            { "x": 1, "y": 2 },
            { "x": 3, "y": 4 },
            { "x": 5, "y": 6 }
        ],
        "grid": [[1, 2, 3], [4, 5, 6], [7, 8, 9]]
    });

    c.bench_function("serialize_inline_tables", |b| {
        b.iter(|| to_string(black_box(&doc)))
    });
}

criterion_group!(
    benches,
    benchmark_serialize_flat,
    benchmark_serialize_nested,
    benchmark_serialize_arrays
);
criterion_main!(benches);

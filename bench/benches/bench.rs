use adls_uri::{is_adls_uri, AbfsUri};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

criterion_group!(
    benches,
    bench_parse_client,
    bench_parse_rest,
    bench_parse_url,
    bench_is_adls_uri,
    bench_to_client_uri,
    bench_to_rest_url,
    bench_decode,
);
criterion_main!(benches);

const CLIENT_CASE: &str =
    "abfss://container@storageacct.dfs.core.windows.net/dir/sub%20dir/file.csv";
const REST_CASE: &str =
    "https://storageacct.dfs.core.windows.net/container/dir/sub%20dir/file.csv";

fn bench_parse_client(c: &mut Criterion) {
    c.bench_function("parse_client", |b| {
        b.iter(|| AbfsUri::parse(black_box(CLIENT_CASE)))
    });
}

fn bench_parse_rest(c: &mut Criterion) {
    c.bench_function("parse_rest", |b| {
        b.iter(|| AbfsUri::parse(black_box(REST_CASE)))
    });
}

fn bench_parse_url(c: &mut Criterion) {
    c.bench_function("parse_url", |b| b.iter(|| Url::parse(black_box(REST_CASE))));
}

fn bench_is_adls_uri(c: &mut Criterion) {
    c.bench_function("is_adls_uri", |b| {
        b.iter(|| is_adls_uri(black_box(Some("not an ADLS Gen2 URI"))))
    });
}

fn bench_to_client_uri(c: &mut Criterion) {
    let u = AbfsUri::parse(REST_CASE).unwrap();
    c.bench_function("to_client_uri", |b| b.iter(|| black_box(u).to_client_uri()));
}

fn bench_to_rest_url(c: &mut Criterion) {
    let u = AbfsUri::parse(CLIENT_CASE).unwrap();
    c.bench_function("to_rest_url", |b| b.iter(|| black_box(u).to_rest_url()));
}

fn bench_decode(c: &mut Criterion) {
    let u = AbfsUri::parse(CLIENT_CASE).unwrap();
    c.bench_function("decode", |b| {
        b.iter(|| black_box(u).path().decode().to_string_lossy().into_owned())
    });
}

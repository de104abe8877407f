//! Fingerprint benchmarks
//!
//! Measures the two halves of the fingerprint path: the SHA-256 digest
//! of a certificate and the hex encoding of the digest.
//!
//! Run with: cargo bench --bench fingerprint

use certfp::tls::builtin_cert::BUILTIN_CERT;
use certfp::tls::Fingerprint;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use openssl::x509::X509;

fn bench_fingerprint(c: &mut Criterion) {
    let cert = X509::from_pem(BUILTIN_CERT.as_bytes()).unwrap();
    let der = cert.to_der().unwrap();

    c.bench_function("fingerprint_from_cert", |b| {
        b.iter(|| Fingerprint::from_cert(black_box(&cert)).unwrap());
    });

    c.bench_function("fingerprint_from_der", |b| {
        b.iter(|| Fingerprint::from_der(black_box(&der)).unwrap());
    });

    let fingerprint = Fingerprint::from_der(&der).unwrap();
    c.bench_function("fingerprint_to_hex", |b| {
        b.iter(|| black_box(&fingerprint).to_hex());
    });
}

criterion_group!(benches, bench_fingerprint);
criterion_main!(benches);

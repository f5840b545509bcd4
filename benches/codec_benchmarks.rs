use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delegated_pki::{
    decode_chain_from_slice, encode_chain_to_vec, Certificate, CertificateChainRequest,
};

fn typical_request() -> CertificateChainRequest {
    // Three-link chain with DER sizes in the usual X.509 range.
    let chain = vec![
        Certificate::from_der(vec![0x30; 1200]),
        Certificate::from_der(vec![0x31; 1400]),
        Certificate::from_der(vec![0x32; 1600]),
    ];
    CertificateChainRequest::from_chain(chain)
}

fn bench_encode(c: &mut Criterion) {
    let request = typical_request();

    c.bench_function("chain_encode", |b| {
        b.iter(|| {
            let _ = encode_chain_to_vec(black_box(&request));
        });
    });
}

fn bench_decode(c: &mut Criterion) {
    let wire = encode_chain_to_vec(&typical_request()).unwrap();

    c.bench_function("chain_decode", |b| {
        b.iter(|| {
            let _ = decode_chain_from_slice(black_box(&wire));
        });
    });
}

fn bench_validate(c: &mut Criterion) {
    let request = typical_request();

    c.bench_function("chain_validate", |b| {
        b.iter(|| {
            let _ = black_box(&request).validate();
        });
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_validate);
criterion_main!(benches);

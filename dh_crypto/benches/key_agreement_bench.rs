use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dh_crypto::{GroupParameters, KeyAgreementParty, KeyExchangeAlgorithm};

fn bench_party_construction(c: &mut Criterion) {
    let params = GroupParameters::modp_768();
    let mut rng = StdRng::seed_from_u64(0xA11CE);

    c.bench_function("KeyAgreementParty::with_rng (768-bit)", |b| {
        b.iter(|| KeyAgreementParty::with_rng(black_box(&params), &mut rng).unwrap())
    });
}

fn bench_shared_secret(c: &mut Criterion) {
    let params = GroupParameters::modp_768();
    let mut rng = StdRng::seed_from_u64(0xB0B);
    let alice = KeyAgreementParty::with_rng(&params, &mut rng).unwrap();
    let bob = KeyAgreementParty::with_rng(&params, &mut rng).unwrap();
    let bob_public = bob.public_value();

    let mut group = c.benchmark_group("Shared secret");
    group.bench_with_input(
        BenchmarkId::new("compute_shared_secret", "768-bit"),
        &bob_public,
        |b, peer| b.iter(|| alice.compute_shared_secret(black_box(peer.as_bytes())).unwrap()),
    );
    group.finish();
}

criterion_group!(benches, bench_party_construction, bench_shared_secret);
criterion_main!(benches);

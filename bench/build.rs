use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dmerkle::{Content, TreeBuilder};
use sha2::{Digest, Sha256};

#[derive(Clone)]
pub struct Blob(Vec<u8>);

impl Content<32> for Blob {
    type Error = std::convert::Infallible;

    fn calculate_hash(&self) -> Result<[u8; 32], Self::Error> {
        Ok(Sha256::digest(&self.0).into())
    }

    fn equals(&self, other: &Self) -> Result<bool, Self::Error> {
        Ok(self.0 == other.0)
    }
}

pub fn generate_random_blobs(count: usize) -> Vec<Blob> {
    (0..count)
        .map(|_| Blob((0..32).map(|_| rand::random()).collect()))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("DMerkleTree Build");
    let blobs = generate_random_blobs(1000);

    for branching_factor in [2, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(branching_factor),
            &branching_factor,
            |b, &branching_factor| {
                let builder = TreeBuilder::<32, Blob, Sha256>::new(branching_factor).unwrap();
                b.iter(|| builder.build(blobs.clone()).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);

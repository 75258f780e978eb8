use criterion::{criterion_group, criterion_main, Criterion};
use dmerkle::{Content, DMerkleTree, TreeConfig};
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

pub fn generate_random_blob() -> Blob {
    Blob((0..32).map(|_| rand::random()).collect())
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("DMerkleTree Mutation");
    let initial: Vec<Blob> = (0..1000).map(|_| generate_random_blob()).collect();

    group.bench_function("Append", |b| {
        b.iter(|| {
            let tree = DMerkleTree::<32, Blob>::with_config(
                initial.clone(),
                TreeConfig::new(4).logical(),
            )
            .unwrap();
            for _ in 0..10 {
                tree.append(vec![generate_random_blob()]).unwrap();
            }
        })
    });

    group.bench_function("Update", |b| {
        let tree = DMerkleTree::<32, Blob>::new(initial.clone(), 4).unwrap();
        b.iter(|| {
            let index = rand::random::<usize>() % tree.len();
            tree.update(index, generate_random_blob()).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mutation);
criterion_main!(benches);

//! Benchmark input builders for the Padron student registry.
//!
//! Provides roster generation shared by the criterion benches: random
//! in-capacity names and document numbers, seeded for repeatable runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use padron_core::{Student, NAME_CAPACITY};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Build `n` students with random in-capacity ASCII names.
pub fn random_roster(n: usize, seed: u64) -> Vec<Student> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let first = random_name(&mut rng);
            let last = random_name(&mut rng);
            Student::new(&first, &last, rng.random())
        })
        .collect()
}

/// One random ASCII name of 1..=[`NAME_CAPACITY`] letters.
fn random_name(rng: &mut StdRng) -> String {
    let len = rng.random_range(1..=NAME_CAPACITY);
    (0..len)
        .map(|_| char::from(rng.random_range(b'a'..=b'z')))
        .collect()
}

use groupctl::contact::Contact;
use groupctl::sample::{sample, sample_with_rng, SampleRequest};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn contacts(n: usize) -> Vec<Contact> {
    (0..n)
        .map(|i| Contact::new(format!("user{}@example.com", i), "First", format!("Last{}", i), ""))
        .collect()
}

fn assert_subset_without_duplicates(picked: &[Contact], population: &[Contact]) {
    let unique: HashSet<_> = picked.iter().collect();
    assert_eq!(unique.len(), picked.len(), "sample contains duplicates");
    assert!(picked.iter().all(|c| population.contains(c)));
}

#[test]
fn test_identity_without_randomize() {
    let population = contacts(5);
    let request = SampleRequest {
        randomize: false,
        target_count: Some(2),
    };

    assert_eq!(sample(population.clone(), &request), population);
}

#[test]
fn test_length_is_min_of_count_and_population() {
    let population = contacts(10);
    let mut rng = StdRng::seed_from_u64(7);

    for count in [0, 1, 3, 10, 11, 500] {
        let request = SampleRequest {
            randomize: true,
            target_count: Some(count),
        };
        let picked = sample_with_rng(population.clone(), &request, &mut rng);

        assert_eq!(picked.len(), count.min(population.len()));
        assert_subset_without_duplicates(&picked, &population);
    }
}

#[test]
fn test_random_size_stays_within_bounds() {
    let population = contacts(8);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let request = SampleRequest {
            randomize: true,
            target_count: None,
        };
        let picked = sample_with_rng(population.clone(), &request, &mut rng);

        assert!((1..=population.len()).contains(&picked.len()));
        assert_subset_without_duplicates(&picked, &population);
    }
}

#[test]
fn test_empty_population() {
    let request = SampleRequest {
        randomize: true,
        target_count: None,
    };
    assert!(sample(Vec::<Contact>::new(), &request).is_empty());

    let request = SampleRequest {
        randomize: true,
        target_count: Some(4),
    };
    assert!(sample(Vec::<Contact>::new(), &request).is_empty());
}

#[test]
fn test_full_count_is_a_permutation() {
    let population = contacts(6);
    let mut rng = StdRng::seed_from_u64(42);
    let request = SampleRequest {
        randomize: true,
        target_count: Some(6),
    };

    let picked = sample_with_rng(population.clone(), &request, &mut rng);

    let expected: HashSet<_> = population.iter().collect();
    let actual: HashSet<_> = picked.iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_selection_varies_across_seeds() {
    let population = contacts(20);
    let request = SampleRequest {
        randomize: true,
        target_count: Some(3),
    };

    let draws: HashSet<Vec<Contact>> = (0..10)
        .map(|seed| sample_with_rng(population.clone(), &request, &mut StdRng::seed_from_u64(seed)))
        .collect();

    assert!(draws.len() > 1);
}

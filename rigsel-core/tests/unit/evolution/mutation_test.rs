use super::*;
use crate::helpers::utils::FakeRandom;

#[test]
fn can_rewrite_single_position() {
    let mutation = RandomResetMutation::new(0.1, 6);
    let gene = Gene::new(vec![0, 1, 2]);
    // the first int picks the new allele, the second one picks the position
    let random = FakeRandom::new(vec![5, 1], vec![0.]);

    let mutated = mutation.mutate(&gene, &random);

    assert_eq!(mutated, Some(Gene::new(vec![0, 5, 2])));
    assert_eq!(gene.alleles(), &[0, 1, 2]);
}

#[test]
fn can_skip_mutation_when_rate_misses() {
    let mutation = RandomResetMutation::new(0.1, 6);
    let gene = Gene::new(vec![0, 1, 2]);
    let random = FakeRandom::new(vec![], vec![1.]);

    assert_eq!(mutation.mutate(&gene, &random), None);
}

use super::*;
use crate::helpers::utils::FakeRandom;
use crate::models::Allele;

parameterized_test! {can_recombine_with_single_point_cut, (point, expected), {
    can_recombine_with_single_point_cut_impl(point, expected);
}}

can_recombine_with_single_point_cut! {
    case_01: (1, vec![0, 4, 5]),
    case_02: (2, vec![0, 1, 5]),
}

fn can_recombine_with_single_point_cut_impl(point: i32, expected: Vec<Allele>) {
    let crossover = SinglePointCrossover::new(0.7);
    let parent1 = Gene::new(vec![0, 1, 2]);
    let parent2 = Gene::new(vec![3, 4, 5]);
    let random = FakeRandom::new(vec![point], vec![0.]);

    let child = crossover.recombine(&parent1, &parent2, &random);

    assert_eq!(child.alleles(), expected.as_slice());
}

#[test]
fn can_return_first_parent_when_crossover_misses() {
    let crossover = SinglePointCrossover::new(0.7);
    let parent1 = Gene::new(vec![0, 1, 2]);
    let parent2 = Gene::new(vec![3, 4, 5]);
    let random = FakeRandom::new(vec![], vec![1.]);

    let child = crossover.recombine(&parent1, &parent2, &random);

    assert_eq!(child, parent1);
}

#[test]
fn can_return_first_parent_for_single_allele_genes() {
    let crossover = SinglePointCrossover::new(1.);
    let parent1 = Gene::new(vec![0]);
    let parent2 = Gene::new(vec![1]);
    let random = FakeRandom::new(vec![], vec![0.]);

    let child = crossover.recombine(&parent1, &parent2, &random);

    assert_eq!(child.alleles(), &[0]);
}

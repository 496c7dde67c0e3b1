use super::*;
use crate::helpers::models::create_evaluated_gene;

fn get_fitness_values(pool: &[EvaluatedGene]) -> Vec<Float> {
    pool.iter().map(|evaluated| evaluated.fitness).collect()
}

#[test]
fn can_give_more_copies_to_fitter_genes() {
    let selection = FitnessProportionateSelection::new(4);
    let population = vec![create_evaluated_gene(vec![0], 10.), create_evaluated_gene(vec![1], 100.)];

    let pool = selection.select(&population).unwrap();

    // the pool gets 1 + 4 copies, the elite cut keeps the top pair
    assert_eq!(get_fitness_values(&pool), vec![100., 100.]);
    assert!(pool.iter().all(|evaluated| evaluated.gene.alleles() == [1]));
}

#[test]
fn can_clamp_negative_share_to_zero_copies() {
    let selection = FitnessProportionateSelection::new(4);
    let population = vec![create_evaluated_gene(vec![0], -50.), create_evaluated_gene(vec![1], 100.)];

    let pool = selection.select(&population).unwrap();

    assert_eq!(get_fitness_values(&pool), vec![100., 100.]);
}

#[test]
fn can_keep_discovery_order_on_fitness_ties() {
    let selection = FitnessProportionateSelection::new(4);
    let population = vec![create_evaluated_gene(vec![0], 100.), create_evaluated_gene(vec![1], 100.)];

    let pool = selection.select(&population).unwrap();

    assert_eq!(pool.len(), 2);
    assert!(pool.iter().all(|evaluated| evaluated.gene.alleles() == [0]));
}

#[test]
fn can_detect_degenerate_population() {
    let selection = FitnessProportionateSelection::new(4);
    let population = vec![create_evaluated_gene(vec![0], 50.), create_evaluated_gene(vec![1], -50.)];

    assert_eq!(selection.select(&population).err(), Some(SolverError::DegeneratePopulation));
}

#[test]
fn can_select_first_best_gene_on_ties() {
    let population = vec![
        create_evaluated_gene(vec![0], 5.),
        create_evaluated_gene(vec![1], 9.),
        create_evaluated_gene(vec![2], 9.),
        create_evaluated_gene(vec![3], 3.),
    ];

    let best = select_best(&population).unwrap();

    assert_eq!(best.gene.alleles(), &[1]);
}

#[test]
fn cannot_select_best_gene_from_empty_population() {
    assert!(select_best(&[]).is_none());
}

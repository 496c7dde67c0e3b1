use super::*;
use rigsel_core::evolution::{TelemetryGeneration, TelemetryIndividual, TelemetryPopulation};

fn create_test_catalog() -> Catalog {
    Catalog::new(vec![CatalogItem::new("alpha", 100, 150, 24), CatalogItem::new("bravo", 70, 300, 16)])
}

#[test]
fn can_write_text_solution() {
    let catalog = create_test_catalog();
    let solution = SolverSolution { gene: Gene::new(vec![0, 1, 0]), fitness: 350. };

    let mut buffer = String::new();
    let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
    write_text_solution(writer, &solution, &catalog).unwrap();

    assert_eq!(
        buffer,
        [
            "The best solution is:",
            "alpha with performance 100, cost 150, and VRAM 24 GB",
            "bravo with performance 70, cost 300, and VRAM 16 GB",
            "alpha with performance 100, cost 150, and VRAM 24 GB",
            ""
        ]
        .join("\n")
    );
}

#[test]
fn can_write_json_solution_with_metrics() {
    let catalog = create_test_catalog();
    let solution = SolverSolution { gene: Gene::new(vec![0, 1]), fitness: 240. };
    let generation = TelemetryGeneration {
        number: 0,
        timestamp: 0.05,
        is_improvement: true,
        population: TelemetryPopulation {
            individuals: vec![
                TelemetryIndividual { difference: 0., fitness: 240. },
                TelemetryIndividual { difference: 50., fitness: 120. },
            ],
        },
    };
    let metrics = TelemetryMetrics { duration: 2, generations: 30, speed: 15., evolution: vec![generation] };

    let mut buffer = String::new();
    let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
    write_json_solution(writer, &solution, &catalog, Some(metrics)).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.as_str()).unwrap();
    assert_eq!(value["items"].as_array().unwrap().len(), 2);
    assert_eq!(value["items"][0]["name"], "alpha");
    assert_eq!(value["items"][1]["name"], "bravo");
    assert_eq!(value["totals"]["performance"], 170);
    assert_eq!(value["totals"]["cost"], 450);
    assert_eq!(value["totals"]["vram"], 40);
    assert_eq!(value["fitness"], 240.);
    assert_eq!(value["metrics"]["generations"], 30);
    assert_eq!(value["metrics"]["duration"], 2);
    assert_eq!(value["metrics"]["evolution"][0]["number"], 0);
    assert_eq!(value["metrics"]["evolution"][0]["is_improvement"], true);
    let individuals = value["metrics"]["evolution"][0]["population"]["individuals"].as_array().unwrap();
    assert_eq!(individuals.len(), 2);
    assert_eq!(individuals[0]["fitness"], 240.);
    assert_eq!(individuals[1]["difference"], 50.);
}

#[test]
fn can_skip_missing_metrics_in_json_solution() {
    let catalog = create_test_catalog();
    let solution = SolverSolution { gene: Gene::new(vec![1]), fitness: 70. };

    let mut buffer = String::new();
    let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
    write_json_solution(writer, &solution, &catalog, None).unwrap();

    let value: serde_json::Value = serde_json::from_str(buffer.as_str()).unwrap();
    assert!(value.get("metrics").is_none());
}

#[test]
fn cannot_resolve_unknown_item() {
    let catalog = create_test_catalog();
    let solution = SolverSolution { gene: Gene::new(vec![5]), fitness: 1. };

    let mut buffer = String::new();
    let writer = unsafe { BufWriter::new(buffer.as_mut_vec()) };
    let result = write_text_solution(writer, &solution, &catalog);

    assert_eq!(result, Err("unknown catalog item index: 5".to_string()));
}

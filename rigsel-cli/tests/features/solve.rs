use crate::commands::create_write_buffer;
use crate::commands::solve::{get_solve_command, run_solve};
use std::io::Write;

const CATALOG_CSV: &str = "name,performance,cost,vram
RTX 4090,100,1599,24
RTX 4080,80,1199,16
RX 7900 XTX,75,999,24
A100,180,9999,80
";

fn create_catalog_file(content: &str) -> tempfile::NamedTempFile {
    let mut catalog_file = tempfile::NamedTempFile::new().unwrap();
    catalog_file.write_all(content.as_bytes()).unwrap();
    catalog_file.flush().unwrap();

    catalog_file
}

fn run_solve_to_file(catalog_path: &str, result_path: &str, params: &[&str]) {
    let args = [&["solve", catalog_path, "--out-result", result_path], params].concat();
    let matches = get_solve_command().try_get_matches_from(args).unwrap();

    run_solve(&matches, create_write_buffer).unwrap();
}

#[test]
fn can_solve_catalog_in_text_format() {
    let catalog_file = create_catalog_file(CATALOG_CSV);
    let result_file = tempfile::NamedTempFile::new().unwrap();

    run_solve_to_file(
        catalog_file.path().to_str().unwrap(),
        result_file.path().to_str().unwrap(),
        &["--max-generations", "5", "--seed", "7"],
    );

    let content = std::fs::read_to_string(result_file.path()).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "The best solution is:");
    lines.iter().skip(1).for_each(|line| {
        assert!(line.contains("with performance"), "unexpected line: {line}");
        assert!(line.ends_with("GB"), "unexpected line: {line}");
    });
}

#[test]
fn can_solve_catalog_in_json_format() {
    let catalog_file = create_catalog_file(CATALOG_CSV);
    let result_file = tempfile::NamedTempFile::new().unwrap();

    run_solve_to_file(
        catalog_file.path().to_str().unwrap(),
        result_file.path().to_str().unwrap(),
        &["--format", "json", "--max-generations", "5", "--seed", "7"],
    );

    let content = std::fs::read_to_string(result_file.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(content.as_str()).unwrap();
    assert_eq!(value["items"].as_array().unwrap().len(), 3);
    assert_eq!(value["metrics"]["generations"], 5);
    // the initial population snapshot and the final population state
    assert_eq!(value["metrics"]["evolution"].as_array().unwrap().len(), 2);
    assert!(value["fitness"].as_f64().is_some());
}

#[test]
fn can_solve_two_item_catalog_with_small_population() {
    let catalog_file = create_catalog_file("name,performance,cost,vram\nP,100,10000,16\nQ,50,5000,8\n");
    let result_file = tempfile::NamedTempFile::new().unwrap();

    run_solve_to_file(
        catalog_file.path().to_str().unwrap(),
        result_file.path().to_str().unwrap(),
        &[
            "--gene-size",
            "2",
            "--population-size",
            "4",
            "--max-generations",
            "5",
            "--max-cost",
            "50000",
            "--min-vram",
            "10",
            "--seed",
            "11",
        ],
    );

    let content = std::fs::read_to_string(result_file.path()).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    lines.iter().skip(1).for_each(|line| {
        assert!(line.starts_with("P with") || line.starts_with("Q with"), "unexpected line: {line}");
    });
}

use approx::assert_abs_diff_eq;
use std::process::{Command, Output};

const REFERENCE_EXPECTED: [[f64; 5]; 4] = [
    [0.01105, 0.02464, 0.06799, 0.04472, 0.02465],
    [0.00715, 0.01017, 0.08696, 0.07988, 0.00935],
    [0.00739, 0.00894, 0.11272, 0.35350, 0.04065],
    [0.00910, 0.00715, 0.01434, 0.04313, 0.03642],
];

fn run_demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_localize_demo"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch localize_demo")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Parse `[[a,b],\n [c,d]]` back into rows of values
fn parse_grid(stdout: &str) -> Vec<Vec<String>> {
    stdout
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split("],")
        .map(|row| {
            row.trim()
                .trim_start_matches('[')
                .trim_end_matches(']')
                .split(',')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

#[test]
fn default_run_prints_reference_grid() {
    let output = run_demo(&[]);
    assert!(output.status.success(), "exit status {:?}", output.status);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid = parse_grid(&stdout);
    assert_eq!(grid.len(), 4);
    for (row, expected_row) in grid.iter().zip(REFERENCE_EXPECTED.iter()) {
        assert_eq!(row.len(), 5);
        for (cell, &expected) in row.iter().zip(expected_row.iter()) {
            let decimals = cell.split('.').nth(1).map_or(0, str::len);
            assert_eq!(decimals, 5, "cell {:?} is not printed with 5 decimals", cell);
            let value: f64 = cell.parse().unwrap();
            assert_abs_diff_eq!(value, expected, epsilon = 0.001);
        }
    }
}

#[test]
fn bundled_config_runs() {
    let path = format!("{}/config/second_scenario.toml", env!("CARGO_MANIFEST_DIR"));
    let output = run_demo(&["--config", &path]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "[[0.03333,0.03333,0.03333],\n [0.13333,0.13333,0.53333],\n [0.03333,0.03333,0.03333]]"
    );
}

#[test]
fn mismatched_lengths_exit_non_zero() {
    let output = run_demo(&["--config", &fixture("mismatched_lengths.toml")]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Sequence length mismatch"),
        "stderr was: {}",
        stderr
    );
    assert_eq!(stderr.matches("Sequence length mismatch").count(), 1);
}

#[test]
fn missing_config_exit_non_zero() {
    let output = run_demo(&["--config", &fixture("does_not_exist.toml")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load scenario"), "stderr was: {}", stderr);
}

#![cfg(test)]

mod helpers;

use helpers::instance;
use helpers::run_solver;

#[test]
fn knapsack_is_solved_to_optimality() {
    let output = run_solver(instance("knapsack.txt"), "selected", ["--problem", "knapsack"]);

    assert!(output.status.success());
    assert_eq!(output.line("s").as_deref(), Some("OPTIMAL"));
    assert_eq!(output.objective(), Some(8.0));
    assert_eq!(output.line("v").as_deref(), Some("4"));
}

#[test]
fn unused_value_knapsack_is_solved_to_optimality() {
    let output = run_solver(
        instance("knapsack.txt"),
        "unused",
        ["--problem", "unused-value-knapsack"],
    );

    assert!(output.status.success());
    assert_eq!(output.line("s").as_deref(), Some("OPTIMAL"));
    assert_eq!(output.objective(), Some(12.0));
    assert_eq!(output.line("b").as_deref(), Some("12"));
}

#[test]
fn petersen_graph_problems_are_solved_to_optimality() {
    let cases = [
        ("max-cut", 12.0),
        ("stable-set", 4.0),
        ("colouring", 3.0),
    ];

    for (problem, optimum) in cases {
        let output = run_solver(instance("petersen.txt"), problem, ["--problem", problem]);

        assert!(output.status.success(), "{problem}: {}", output.stdout);
        assert_eq!(output.line("s").as_deref(), Some("OPTIMAL"), "{problem}");
        assert_eq!(output.objective(), Some(optimum), "{problem}");
    }
}

#[test]
fn unbeatable_bound_yields_no_solution() {
    let output = run_solver(
        instance("petersen.txt"),
        "bounded",
        ["--problem", "stable-set", "--bound", "4"],
    );

    assert!(output.status.success());
    assert_eq!(output.line("s").as_deref(), Some("INFEASIBLE"));
    assert_eq!(output.objective(), None);
    assert_eq!(output.line("v"), None);
}

#[test]
fn too_few_colours_are_infeasible() {
    let output = run_solver(
        instance("petersen.txt"),
        "two-colours",
        ["--problem", "colouring", "--colours", "2"],
    );

    assert!(output.status.success());
    assert_eq!(output.line("s").as_deref(), Some("INFEASIBLE"));
}

#[test]
fn iteration_limit_stops_the_search_early() {
    let output = run_solver(
        instance("petersen.txt"),
        "limited",
        ["--problem", "colouring", "--max-iterations", "1"],
    );

    assert!(output.status.success());
    assert_eq!(output.line("s").as_deref(), Some("UNKNOWN"));
}

#[test]
fn statistics_are_logged_on_request() {
    let output = run_solver(
        instance("knapsack.txt"),
        "statistics",
        ["--problem", "knapsack", "--log-statistics"],
    );

    assert!(output.status.success());
    assert!(output.stdout.contains("c stat scheme_num_iterations=1"));
}

#[test]
fn invalid_instance_fails() {
    let output = run_solver(instance("invalid_edge.txt"), "invalid", ["--problem", "max-cut"]);

    assert!(!output.status.success());
}

#[test]
fn invalid_epsilon_fails() {
    let output = run_solver(
        instance("knapsack.txt"),
        "epsilon",
        ["--problem", "knapsack", "--epsilon", "1.5"],
    );

    assert!(!output.status.success());
}

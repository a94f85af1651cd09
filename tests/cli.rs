use std::process::Command;

const USAGE: &str = "plot_scores_cli -i <inputfile>";

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_plot_scores_cli"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn help_flag_prints_usage_and_exits_clean() {
    let out = run_cli(&["-h"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), USAGE);
}

#[test]
fn unknown_flag_prints_usage_and_exits_2() {
    let out = run_cli(&["-x"]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), USAGE);
}

#[test]
fn flag_without_value_prints_usage_and_exits_2() {
    let out = run_cli(&["-i"]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), USAGE);
}

#[test]
fn no_arguments_exits_clean_without_plotting() {
    let out = run_cli(&[]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

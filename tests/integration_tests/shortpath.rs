use std::process::Command;

use rstest::rstest;

use crate::common::{prompt_output, shortpath_command};

/// `shortpath` with `$HOME` set to `home`, which need not exist.
fn shortpath(home: &str) -> Command {
    let scratch = std::env::temp_dir();
    let mut cmd = shortpath_command(&scratch);
    cmd.env("HOME", home);
    cmd
}

#[test]
fn test_home_prefix_and_abbreviation() {
    let output = prompt_output(
        shortpath("/Users/tshafer").arg("/Users/tshafer/A Directory/B Directory"),
    );
    assert_eq!(output, "~/A/B Directory\n");
}

#[test]
fn test_home_directory_itself() {
    let output = prompt_output(shortpath("/Users/tshafer").arg("/Users/tshafer"));
    assert_eq!(output, "~\n");
}

#[test]
fn test_outside_home() {
    let output = prompt_output(shortpath("/Users/tshafer").arg("/var/lib/postgres/data"));
    assert_eq!(output, "/v/l/p/data\n");
}

#[rstest]
#[case::keep_two(&["-n", "2"], "~/c/promptline/src\n")]
#[case::keep_none(&["-n", "0"], "~/c/p/s\n")]
#[case::no_tilde(&["--no-tilde"], "/h/d/c/p/src\n")]
fn test_flags(#[case] flags: &[&str], #[case] expected: &str) {
    let output = prompt_output(
        shortpath("/home/dev")
            .args(flags)
            .arg("/home/dev/code/promptline/src"),
    );
    assert_eq!(output, expected);
}

#[test]
fn test_per_word() {
    let output = prompt_output(
        shortpath("/home/dev")
            .arg("--per-word")
            .arg("/home/dev/My Projects/Old Stuff/Final Name"),
    );
    assert_eq!(output, "~/MP/OS/Final Name\n");
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    let leaf = dir.path().join("leaf dir");
    std::fs::create_dir(&leaf).unwrap();

    let output = prompt_output(shortpath("/nonexistent-home").current_dir(&leaf));
    assert!(output.starts_with('/'), "output: {output}");
    assert!(output.ends_with("/leaf dir\n"), "output: {output}");
}

#[test]
fn test_config_file_sets_defaults_and_flags_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[path]\nfull-segments = 2\ntilde = false\n").unwrap();

    let output = prompt_output(
        shortpath("/home/dev")
            .arg("--config")
            .arg(&config)
            .arg("/home/dev/code/app"),
    );
    assert_eq!(output, "/h/d/code/app\n");

    let output = prompt_output(
        shortpath("/home/dev")
            .arg("--config")
            .arg(&config)
            .args(["-n", "1"])
            .arg("/home/dev/code/app"),
    );
    assert_eq!(output, "/h/d/c/app\n");
}

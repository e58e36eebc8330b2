use rstest::rstest;

use crate::common::{TestRepo, gitprompt_command, prompt_output};

/// Repo with two committed files, ready for changes.
fn repo_with_history() -> TestRepo {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "a\n");
    repo.write_file("b.txt", "b\n");
    repo.commit_all("Initial commit");
    repo
}

#[test]
fn test_clean_repository_shows_branch_only() {
    let repo = repo_with_history();
    assert_eq!(prompt_output(&mut repo.gitprompt()), "main\n");
}

#[rstest]
#[case::v1("v1")]
#[case::v2("v2")]
fn test_staged_unstaged_and_untracked(#[case] porcelain: &str) {
    let repo = repo_with_history();
    repo.write_file("a.txt", "a changed\n");
    repo.git(&["add", "a.txt"]);
    repo.write_file("b.txt", "b changed\n");
    repo.write_file("c.txt", "new\n");

    let output = prompt_output(repo.gitprompt().args(["--porcelain", porcelain]));
    assert_eq!(output, "main ● ✚ ?\n");
}

#[test]
fn test_counts_shown_above_one() {
    let repo = repo_with_history();
    repo.write_file("a.txt", "a changed\n");
    repo.write_file("b.txt", "b changed\n");
    repo.write_file("c.txt", "new\n");
    repo.write_file("d.txt", "new\n");
    repo.write_file("e.txt", "new\n");

    assert_eq!(prompt_output(&mut repo.gitprompt()), "main ✚2 ?3\n");
}

#[test]
fn test_staged_addition_and_deletion() {
    let repo = repo_with_history();
    repo.write_file("new.txt", "new\n");
    repo.git(&["add", "new.txt"]);
    repo.git(&["rm", "--quiet", "b.txt"]);

    assert_eq!(prompt_output(&mut repo.gitprompt()), "main + ✘\n");
}

#[test]
fn test_unstaged_deletion() {
    let repo = repo_with_history();
    std::fs::remove_file(repo.root_path().join("a.txt")).unwrap();

    assert_eq!(prompt_output(&mut repo.gitprompt()), "main -\n");
}

#[test]
fn test_unborn_branch() {
    let repo = TestRepo::new();
    repo.write_file("README.md", "hello\n");

    assert_eq!(prompt_output(&mut repo.gitprompt()), "main ?\n");
}

#[rstest]
#[case::v1("v1")]
#[case::v2("v2")]
fn test_ahead_and_behind_upstream(#[case] porcelain: &str) {
    let origin = repo_with_history();
    let clone = TestRepo::clone_of(&origin);

    clone.write_file("local1.txt", "1\n");
    clone.commit_all("Local one");
    clone.write_file("local2.txt", "2\n");
    clone.commit_all("Local two");

    origin.write_file("remote.txt", "r\n");
    origin.commit_all("Remote");
    clone.git(&["fetch", "--quiet"]);

    let output = prompt_output(clone.gitprompt().args(["--porcelain", porcelain]));
    assert_eq!(output, "main ↑2↓1\n");
}

#[test]
fn test_in_sync_with_upstream_has_no_arrows() {
    let origin = repo_with_history();
    let clone = TestRepo::clone_of(&origin);

    assert_eq!(prompt_output(&mut clone.gitprompt()), "main\n");
}

#[test]
fn test_detached_head_shows_short_hash() {
    let repo = repo_with_history();
    repo.git(&["checkout", "--quiet", "--detach"]);
    let sha = repo.head_sha();

    assert_eq!(
        prompt_output(&mut repo.gitprompt()),
        format!(":{}\n", &sha[..7])
    );
}

#[test]
fn test_detached_head_with_v1_shows_marker() {
    let repo = repo_with_history();
    repo.git(&["checkout", "--quiet", "--detach"]);

    let output = prompt_output(repo.gitprompt().args(["--porcelain", "v1"]));
    assert_eq!(output, "HEAD\n");
}

#[test]
fn test_merge_conflict() {
    let repo = TestRepo::new();
    repo.write_file("file.txt", "base\n");
    repo.commit_all("Base");

    repo.git(&["checkout", "--quiet", "-b", "topic"]);
    repo.write_file("file.txt", "topic\n");
    repo.commit_all("Topic change");

    repo.git(&["checkout", "--quiet", "main"]);
    repo.write_file("file.txt", "main\n");
    repo.commit_all("Main change");

    assert!(
        !repo.git_status(&["merge", "--quiet", "--no-edit", "topic"]),
        "merge should conflict"
    );

    assert_eq!(prompt_output(&mut repo.gitprompt()), "main ✖\n");
}

#[test]
fn test_outside_repository_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();

    let output = prompt_output(&mut gitprompt_command(dir.path(), home.path()));
    assert_eq!(output, "");
}

#[test]
fn test_directory_flag() {
    let repo = repo_with_history();
    repo.write_file("c.txt", "new\n");
    let elsewhere = tempfile::tempdir().unwrap();

    let mut cmd = gitprompt_command(elsewhere.path(), repo.home_path());
    cmd.arg("-C").arg(repo.root_path());
    assert_eq!(prompt_output(&mut cmd), "main ?\n");
}

#[test]
fn test_config_file_overrides_symbols() {
    let repo = repo_with_history();
    repo.write_file("c.txt", "new\n");

    let config = repo.home_path().join("promptline.toml");
    std::fs::write(
        &config,
        "[git]\nseparator = \"|\"\n\n[git.symbols]\nuntracked = \"…\"\n",
    )
    .unwrap();

    let output = prompt_output(repo.gitprompt().arg("--config").arg(&config));
    assert_eq!(output, "main|…\n");
}

#[test]
fn test_config_from_environment() {
    let repo = repo_with_history();

    let config = repo.home_path().join("env.toml");
    std::fs::write(&config, "[git.symbols]\nclean = \"✓\"\n").unwrap();

    let output = prompt_output(repo.gitprompt().env("PROMPTLINE_CONFIG_PATH", &config));
    assert_eq!(output, "main ✓\n");
}

#[test]
fn test_invalid_config_still_renders() {
    let repo = repo_with_history();

    let config = repo.home_path().join("broken.toml");
    std::fs::write(&config, "[git\nnot toml").unwrap();

    // The warning goes to the logger, which is off by default.
    let output = prompt_output(repo.gitprompt().arg("--config").arg(&config));
    assert_eq!(output, "main\n");
}

#[test]
fn test_verbose_logs_the_query_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let home = tempfile::tempdir().unwrap();

    let output = gitprompt_command(dir.path(), home.path())
        .arg("-v")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("$ git status --porcelain=v2 --branch"),
        "stderr was: {stderr}"
    );
}

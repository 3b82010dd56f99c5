//! End-to-end tests for the `git-weblink` binary against throwaway repositories.

mod common;

use common::{create_test_dir, run_weblink, setup_git_repo, stdout, write_config};

#[test]
fn test_commit_link_from_origin() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "git@gitlab.com:acme/tool.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &[]);
    assert_eq!(
        stdout(&output),
        format!("https://gitlab.com/acme/tool/-/commit/{commit}")
    );
}

#[test]
fn test_line_range_link() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "https://github.com/acme/tool.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &["src/lib.rs:1-3"]);
    assert_eq!(
        stdout(&output),
        format!("https://github.com/acme/tool/blob/{commit}/src/lib.rs#L1-L3")
    );
}

#[test]
fn test_target_relative_to_subdirectory() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "git://git.kernel.org/pub/scm/utils/b4/b4.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(&repo.path().join("src"), &config, &["lib.rs:2"]);
    assert_eq!(
        stdout(&output),
        format!("https://git.kernel.org/pub/scm/utils/b4/b4.git/tree/src/lib.rs?id={commit}#n2")
    );
}

#[test]
fn test_gerrit_line_link_falls_back_to_file() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "ssh://user@gerrit.googlesource.com:29418/plugins/lfs");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &["src/lib.rs:2"]);
    assert_eq!(
        stdout(&output),
        format!("https://gerrit.googlesource.com/plugins/lfs/+/{commit}/src/lib.rs")
    );
}

#[test]
fn test_url_flag_and_host_mapping() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "git@github.com:acme/tool.git");
    let config_dir = create_test_dir();
    let config = write_config(
        &config_dir,
        "[[hosts]]\nhost = \"ssh.forge.example\"\nkind = \"forgejo\"\nweb_host = \"forge.example\"\n",
    );

    let output = run_weblink(
        repo.path(),
        &config,
        &["--url", "git@ssh.forge.example:team/app.git", "src/lib.rs"],
    );
    assert_eq!(
        stdout(&output),
        format!("https://forge.example/team/app/src/commit/{commit}/src/lib.rs")
    );
}

#[test]
fn test_unknown_host_without_fallback_fails() {
    let repo = create_test_dir();
    setup_git_repo(&repo, "git@git.example.com:team/app.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "fallback = false\n");

    let output = run_weblink(repo.path(), &config, &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("git.example.com"));
}

#[test]
fn test_json_output() {
    let repo = create_test_dir();
    let commit = setup_git_repo(&repo, "git@codeberg.org:forgejo/forgejo.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &["--json", "src/lib.rs:2"]);
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("output should be JSON");
    assert_eq!(value["host_kind"], "forgejo");
    assert_eq!(value["repo_url"], "https://codeberg.org/forgejo/forgejo");
    assert_eq!(value["commit"], commit.as_str());
    assert_eq!(
        value["url"],
        format!("https://codeberg.org/forgejo/forgejo/src/commit/{commit}/src/lib.rs#L2").as_str()
    );
}

#[test]
fn test_missing_remote_fails() {
    let repo = create_test_dir();
    setup_git_repo(&repo, "git@github.com:acme/tool.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &["--remote", "upstream"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("upstream"));
}

#[test]
fn test_path_outside_repository_fails() {
    let repo = create_test_dir();
    setup_git_repo(&repo, "git@github.com:acme/tool.git");
    let config_dir = create_test_dir();
    let config = write_config(&config_dir, "");

    let output = run_weblink(repo.path(), &config, &["../elsewhere.txt"]);
    assert!(!output.status.success());
}

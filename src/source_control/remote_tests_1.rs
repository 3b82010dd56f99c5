use super::*;

fn repo(host: &str, owner_path: &str) -> CanonicalRepoRef {
    CanonicalRepoRef {
        host: host.to_string(),
        owner_path: owner_path.to_string(),
    }
}

#[test]
fn test_normalize_scp_like_with_git_suffix() {
    assert_eq!(
        normalize("git@github.com:git/git.git"),
        Ok(repo("github.com", "git/git"))
    );
}

#[test]
fn test_normalize_scp_like_without_git_suffix() {
    assert_eq!(
        normalize("git@github.com:torvalds/linux"),
        Ok(repo("github.com", "torvalds/linux"))
    );
}

#[test]
fn test_normalize_https_with_git_suffix() {
    assert_eq!(
        normalize("https://github.com/git/git.git"),
        Ok(repo("github.com", "git/git"))
    );
}

#[test]
fn test_normalize_deep_cgit_path() {
    assert_eq!(
        normalize("https://git.kernel.org/pub/scm/linux/kernel/git/stable/linux.git"),
        Ok(repo("git.kernel.org", "pub/scm/linux/kernel/git/stable/linux"))
    );
}

#[test]
fn test_normalize_git_protocol() {
    assert_eq!(
        normalize("git://git.kernel.org/pub/scm/linux/kernel/git/stable/linux.git"),
        Ok(repo("git.kernel.org", "pub/scm/linux/kernel/git/stable/linux"))
    );
}

#[test]
fn test_normalize_ssh_url_with_user_and_port() {
    assert_eq!(
        normalize("ssh://user@gerrit.googlesource.com:29418/plugins/lfs"),
        Ok(repo("gerrit.googlesource.com", "plugins/lfs"))
    );
}

#[test]
fn test_all_grammars_agree() {
    let remotes = [
        "git@gitlab.com:gitlab-org/gitlab.git",
        "ssh://git@gitlab.com/gitlab-org/gitlab.git",
        "ssh://git@gitlab.com:22/gitlab-org/gitlab",
        "git+ssh://git@gitlab.com/gitlab-org/gitlab.git",
        "https://gitlab.com/gitlab-org/gitlab.git",
        "http://gitlab.com/gitlab-org/gitlab",
        "git://gitlab.com/gitlab-org/gitlab.git",
    ];
    for remote in remotes {
        assert_eq!(
            normalize(remote).map(|r| r.to_string()),
            Ok("https://gitlab.com/gitlab-org/gitlab".to_string()),
            "remote {remote} should normalize to the same URL"
        );
    }
}

#[test]
fn test_canonical_url_is_idempotent() {
    let canonical = "https://codeberg.org/forgejo/forgejo";
    let once = normalize(canonical).map(|r| r.to_string());
    assert_eq!(once.as_deref(), Ok(canonical));
}

#[test]
fn test_base_url_and_display() {
    let parsed = normalize("git@codeberg.org:forgejo/forgejo.git").unwrap();
    assert_eq!(parsed.base_url(), "https://codeberg.org");
    assert_eq!(parsed.to_string(), "https://codeberg.org/forgejo/forgejo");
}

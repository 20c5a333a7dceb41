use super::*;

#[test]
fn test_builtin_profile() {
    let config = CurationConfig::builtin();
    assert_eq!(config.repo.name, "wxt-dev/wxt");
    assert_eq!(config.repo.branch, "main");
    assert_eq!(config.repo.commit, "78f8434a0691a2e1a5be80fbebad2a4cc07c73a0");
    assert_eq!(config.patterns.include.first().unwrap(), "packages/wxt/src/**");
    assert_eq!(config.patterns.exclude.last().unwrap(), "pnpm-lock.yaml");
    assert_eq!(config, CurationConfig::default());
}

#[test]
fn test_builtin_excludes_already_cover_mandatory() {
    let config = CurationConfig::builtin();
    assert_eq!(config.patterns.effective_excludes(), config.patterns.exclude);
}

#[test]
fn test_effective_excludes_appends_missing_mandatory() {
    let patterns = PatternConfig {
        include: vec!["src/**".into()],
        exclude: vec!["vendor/**".into(), "**/tests/**".into(), "vendor/**".into()],
    };
    let effective = patterns.effective_excludes();

    // Configured order first, deduplicated
    assert_eq!(effective[0], "vendor/**");
    assert_eq!(effective[1], "**/tests/**");
    // Every mandatory exclusion present exactly once
    for m in MANDATORY_EXCLUSIONS {
        assert_eq!(effective.iter().filter(|p| p == m).count(), 1, "{}", m);
    }
    assert_eq!(effective.len(), 1 + MANDATORY_EXCLUSIONS.len());
}

#[test]
fn test_effective_excludes_with_empty_list() {
    let patterns = PatternConfig {
        include: vec![],
        exclude: vec![],
    };
    let effective: Vec<String> = patterns.effective_excludes();
    let expected: Vec<String> = MANDATORY_EXCLUSIONS.iter().map(|s| s.to_string()).collect();
    assert_eq!(effective, expected);
}

#[test]
fn test_load_toml_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("curation.toml"),
        r#"
[repo]
name = "acme/widgets"
commit = "deadbeef"

[patterns]
include = ["src/**", "Cargo.toml"]
exclude = ["src/generated/**"]

[paths]
snapshot = "snapshots/tree.txt"
"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.repo.name, "acme/widgets");
    assert_eq!(config.repo.branch, "main");
    assert_eq!(config.patterns.include, vec!["src/**", "Cargo.toml"]);
    assert_eq!(config.patterns.exclude, vec!["src/generated/**"]);
    assert_eq!(
        config.paths.snapshot_in(dir.path()),
        dir.path().join("snapshots/tree.txt")
    );
    assert_eq!(config.paths.output, PathBuf::from("."));
}

#[test]
fn test_load_json_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".curationrc.json"),
        r#"{
  "repo": { "name": "acme/widgets", "branch": "dev", "commit": "cafe" },
  "patterns": { "include": ["lib/**"] }
}"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.repo.branch, "dev");
    assert_eq!(config.patterns.include, vec!["lib/**"]);
    assert!(config.patterns.exclude.is_empty());
}

#[test]
fn test_toml_preferred_over_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("curation.toml"),
        "[repo]\nname = \"from/toml\"\ncommit = \"1\"\n[patterns]\ninclude = []\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".curationrc.json"),
        r#"{"repo": {"name": "from/json", "commit": "2"}, "patterns": {"include": []}}"#,
    )
    .unwrap();

    assert_eq!(load_project_config(dir.path()).repo.name, "from/toml");
}

#[test]
fn test_missing_config_uses_builtin() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_project_config(dir.path()), CurationConfig::builtin());
}

#[test]
fn test_invalid_project_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("curation.toml"), "this is = = not toml").unwrap();
    assert_eq!(load_project_config(dir.path()), CurationConfig::builtin());
}

#[test]
fn test_invalid_explicit_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[repo]\nname = 3\n").unwrap();
    assert!(load_config_file(&path).is_err());
    assert!(load_config_file(&dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_load_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.yml");
    std::fs::write(
        &path,
        "repo:\n  name: acme/widgets\n  commit: abc\npatterns:\n  include:\n    - 'src/**'\n",
    )
    .unwrap();
    let config = load_config_file(&path).unwrap();
    assert_eq!(config.patterns.include, vec!["src/**"]);
}

#[test]
fn test_template_round_trips() {
    let config = CurationConfig::builtin();
    let rendered = config.to_toml().unwrap();
    assert!(rendered.starts_with("# Curation profile"));
    let parsed: CurationConfig = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}

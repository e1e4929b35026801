//! End-to-end runs of the `folio` binary against a temporary data directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// A temp dir with its own config file, so no user configuration leaks in.
struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("test-config.toml");
        fs::write(
            &config,
            format!(
                "[site]\ndata_dir = {:?}\noutput_dir = {:?}\n",
                dir.path().join("data").display().to_string(),
                dir.path().join("site").display().to_string(),
            ),
        )
        .unwrap();
        Self { dir, config }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn folio(&self) -> Command {
        let mut cmd = Command::cargo_bin("folio").unwrap();
        cmd.current_dir(self.path())
            .env_remove("GITHUB_TOKEN")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    /// Run with `--output-format json` and parse stdout.
    fn json(&self, args: &[&str]) -> Value {
        let output = self
            .folio()
            .args(["--output-format", "json"])
            .args(args)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "folio {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn add(&self, title: &str, category: &str, extra: &[&str]) -> String {
        let mut args = vec!["project", "add", "--title", title, "--category", category];
        args.extend_from_slice(extra);
        let project = self.json(&args);
        project["id"].as_str().unwrap().to_string()
    }

    fn projects_document(&self) -> Value {
        let text = fs::read_to_string(self.path().join("data/projects.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    Command::cargo_bin("folio")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .code(2);
}

#[test]
fn missing_config_file_is_configuration_error() {
    let ws = Workspace::new();
    Command::cargo_bin("folio")
        .unwrap()
        .args(["--config"])
        .arg(ws.path().join("missing.toml"))
        .arg("stats")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

// ── projects ──────────────────────────────────────────────────────────────────

#[test]
fn add_then_list_round_trips_through_the_document() {
    let ws = Workspace::new();
    let id = ws.add(
        "Stockholm",
        "maps",
        &["--price", "450 kr", "--available", "true"],
    );

    let listed = ws.json(&["project", "list"]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["category"], "maps");

    let document = ws.projects_document();
    assert_eq!(document[0]["title"], "Stockholm");
    assert_eq!(document[0]["price"], "450 kr");
    assert_eq!(document[0]["available"], true);

    let raw = fs::read_to_string(ws.path().join("data/projects.json")).unwrap();
    assert!(raw.starts_with("[\n  {\n"));
    assert!(raw.ends_with("}\n]"));
}

#[test]
fn hand_edited_values_survive_an_add() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.path().join("data")).unwrap();
    fs::write(
        ws.path().join("data/projects.json"),
        r#"[{"id":"old","title":"Karta","category":"maps","year":2023}]"#,
    )
    .unwrap();

    ws.add("Ny", "books", &[]);

    let document = ws.projects_document();
    assert_eq!(document.as_array().unwrap().len(), 2);
    assert_eq!(document[0]["id"], "old");
}

#[test]
fn unreadable_document_is_never_overwritten() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.path().join("data")).unwrap();
    let broken = r#"[{"id":"old","title":"Karta",}]"#;
    fs::write(ws.path().join("data/projects.json"), broken).unwrap();

    ws.folio()
        .args(["project", "add", "--title", "Ny", "--category", "books"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("could not be read"));

    assert_eq!(
        fs::read_to_string(ws.path().join("data/projects.json")).unwrap(),
        broken
    );
}

#[test]
fn list_filters_by_category_and_flags() {
    let ws = Workspace::new();
    ws.add("Karta", "maps", &["--featured", "true"]);
    ws.add("Bok", "books", &[]);

    assert_eq!(
        ws.json(&["project", "list", "--category", "books"])
            .as_array()
            .unwrap()
            .len(),
        1
    );
    let featured = ws.json(&["project", "list", "--featured"]);
    assert_eq!(featured.as_array().unwrap().len(), 1);
    assert_eq!(featured[0]["title"], "Karta");
}

#[test]
fn plain_list_shows_labels() {
    let ws = Workspace::new();
    ws.add("Stockholm", "maps", &[]);

    ws.folio()
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stockholm (Kartor)"))
        .stdout(predicate::str::contains("Kontakta för pris"));
}

#[test]
fn edit_keeps_untouched_fields() {
    let ws = Workspace::new();
    let id = ws.add(
        "Stockholm",
        "maps",
        &["--description", "Handritad", "--price", "450 kr"],
    );

    let edited = ws.json(&["project", "edit", &id, "--price", "500 kr"]);
    assert_eq!(edited["id"], id.as_str());
    assert_eq!(edited["price"], "500 kr");
    assert_eq!(edited["description"], "Handritad");
    assert_eq!(edited["title"], "Stockholm");
}

#[test]
fn blank_title_is_rejected_with_exit_2() {
    let ws = Workspace::new();
    ws.folio()
        .args(["project", "add", "--title", "   ", "--category", "art"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("title"));

    assert!(!ws.path().join("data/projects.json").exists());
}

#[test]
fn unknown_id_is_not_found() {
    let ws = Workspace::new();
    for args in [
        vec!["project", "show", "nope"],
        vec!["project", "edit", "nope", "--price", "1"],
        vec!["project", "remove", "nope", "--yes"],
    ] {
        ws.folio()
            .args(&args)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No project with id 'nope'"));
    }
}

#[test]
fn remove_deletes_exactly_one() {
    let ws = Workspace::new();
    let keep = ws.add("Behåll", "art", &[]);
    let gone = ws.add("Ta bort", "art", &[]);

    ws.folio()
        .args(["project", "remove", &gone, "--yes"])
        .assert()
        .success();

    let document = ws.projects_document();
    assert_eq!(document.as_array().unwrap().len(), 1);
    assert_eq!(document[0]["id"], keep.as_str());
}

#[test]
fn remove_without_yes_needs_a_terminal() {
    let ws = Workspace::new();
    let id = ws.add("Karta", "maps", &[]);

    ws.folio()
        .args(["project", "remove", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));

    assert_eq!(ws.projects_document().as_array().unwrap().len(), 1);
}

// ── settings, stats ───────────────────────────────────────────────────────────

#[test]
fn settings_updates_keep_the_other_section() {
    let ws = Workspace::new();
    ws.folio()
        .args(["settings", "contact", "--email", "hej@magda.se", "--phone", "070-1"])
        .assert()
        .success();
    ws.folio()
        .args(["settings", "top-bar", "--text", "Nya kartor!"])
        .assert()
        .success();

    let settings = ws.json(&["settings", "show"]);
    assert_eq!(settings["topBar"]["text"], "Nya kartor!");
    assert_eq!(settings["contact"]["email"], "hej@magda.se");
    assert_eq!(settings["contact"]["phone"], "070-1");
}

#[test]
fn stats_counts_flags() {
    let ws = Workspace::new();
    ws.add("A", "art", &["--available", "true", "--featured", "true"]);
    ws.add("B", "art", &["--available", "true"]);
    ws.add("C", "art", &[]);

    let stats = ws.json(&["stats"]);
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["available"], 2);
    assert_eq!(stats["featured"], 1);
}

#[test]
fn stats_on_empty_data_dir() {
    let ws = Workspace::new();
    let stats = ws.json(&["stats"]);
    assert_eq!(stats["total"], 0);
}

// ── build, export ─────────────────────────────────────────────────────────────

#[test]
fn build_writes_index_contact_and_project_pages() {
    let ws = Workspace::new();
    let id = ws.add("Stockholm", "maps", &["--available", "true", "--price", "450 kr"]);

    ws.folio().arg("build").assert().success();

    let site = ws.path().join("site");
    let index = fs::read_to_string(site.join("index.html")).unwrap();
    assert!(index.contains("Stockholm"));
    assert!(site.join("contact.html").exists());

    let page = fs::read_to_string(site.join(format!("projects/{id}.html"))).unwrap();
    assert!(page.contains("Köp nu - 450 kr"));
}

#[test]
fn build_output_flag_overrides_config() {
    let ws = Workspace::new();
    ws.folio()
        .args(["build", "--output", "public"])
        .assert()
        .success();

    let index = fs::read_to_string(ws.path().join("public/index.html")).unwrap();
    assert!(index.contains("Inga projekt att visa än."));
}

#[test]
fn export_writes_backup_document() {
    let ws = Workspace::new();
    ws.add("Stockholm", "maps", &[]);

    ws.folio()
        .args(["export", "--output", "backup.json"])
        .assert()
        .success();

    let backup: Value =
        serde_json::from_str(&fs::read_to_string(ws.path().join("backup.json")).unwrap()).unwrap();
    assert_eq!(backup["projects"][0]["title"], "Stockholm");
    assert!(backup["settings"].is_object());
    assert!(backup["exported"].is_string());
}

#[test]
fn export_default_file_name_carries_the_date() {
    let ws = Workspace::new();
    ws.folio().arg("export").assert().success();

    let names: Vec<String> = fs::read_dir(ws.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        names
            .iter()
            .any(|n| n.starts_with("magda-portfolio-backup-") && n.ends_with(".json")),
        "{names:?}"
    );
}

// ── publish, config, init ─────────────────────────────────────────────────────

#[test]
fn publish_without_token_is_configuration_error() {
    let ws = Workspace::new();
    ws.folio()
        .arg("publish")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("github token"));
}

#[test]
fn publish_remote_without_endpoint_is_configuration_error() {
    let ws = Workspace::new();
    ws.folio()
        .args(["publish", "--via", "remote"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("remote.endpoint"));
}

#[test]
fn config_get_reads_file_values_and_defaults() {
    let ws = Workspace::new();
    ws.folio()
        .args(["config", "get", "github.branch"])
        .assert()
        .success()
        .stdout("main\n");
    ws.folio()
        .args(["config", "get", "site.data_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ws.path().join("data").display().to_string(),
        ));
    ws.folio()
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4);
}

#[test]
fn environment_overrides_file() {
    let ws = Workspace::new();
    ws.folio()
        .env("FOLIO__GITHUB__BRANCH", "preview")
        .args(["config", "get", "github.branch"])
        .assert()
        .success()
        .stdout("preview\n");
}

#[test]
fn config_list_masks_token() {
    let ws = Workspace::new();
    ws.folio()
        .env("GITHUB_TOKEN", "ghp_secret")
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("ghp_secret").not());
}

#[test]
fn init_local_writes_config_and_seeds_documents() {
    let ws = Workspace::new();
    ws.folio()
        .args(["init", "--local", "--data-dir", "content"])
        .assert()
        .success();

    assert!(ws.path().join("folio.toml").exists());
    assert_eq!(
        fs::read_to_string(ws.path().join("content/projects.json")).unwrap(),
        "[]"
    );
    let settings: Value =
        serde_json::from_str(&fs::read_to_string(ws.path().join("content/settings.json")).unwrap())
            .unwrap();
    assert!(settings["topBar"].is_object());

    ws.folio()
        .args(["init", "--local", "--data-dir", "content"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn quiet_suppresses_success_output() {
    let ws = Workspace::new();
    ws.folio()
        .args(["-q", "project", "add", "--title", "Tyst", "--category", "art"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shell_completions() {
    Command::cargo_bin("folio")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("folio"));
}

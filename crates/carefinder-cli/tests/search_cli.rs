//! CLI behavior tests for the `search` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use carefinder_lib::ProviderStore;

/// Create a seeded provider database inside `dir` and return its URL.
async fn seed_database(dir: &TempDir) -> String {
    let path = dir.path().join("providers.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let store = ProviderStore::connect(&url, 1)
        .await
        .expect("open database file");
    store.init_schema().await.expect("create schema");
    for (name, category, city, state) in [
        ("Bayside Clinic", "Clinic", "Dallas", "TX"),
        ("Harbor Hospital", "Hospital", "Plano", "TX"),
    ] {
        sqlx::query(
            "INSERT INTO providers \
             (organization_name, category, practice_city, practice_state, practice_zip, \
              address, latitude, longitude, taxonomy_code) \
             VALUES (?1, ?2, ?3, ?4, '75201', '100 Main St', 32.78, -96.8, NULL)",
        )
        .bind(name)
        .bind(category)
        .bind(city)
        .bind(state)
        .execute(store.pool())
        .await
        .expect("insert provider");
    }
    store.pool().close().await;

    url
}

fn carefinder() -> Command {
    Command::cargo_bin("carefinder").expect("carefinder binary builds")
}

#[test]
fn test_help_lists_search_command() {
    carefinder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_search_empty_database_reports_no_matches() {
    let dir = TempDir::new().expect("create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("empty.db").display());

    carefinder()
        .args(["--database-url", &url, "search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers matched"));
}

#[tokio::test]
async fn test_search_seeded_database_prints_listing() {
    let dir = TempDir::new().expect("create temp dir");
    let url = seed_database(&dir).await;

    carefinder()
        .args(["--database-url", &url, "search", "--location", "Dallas, TX"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Bayside Clinic"))
        .stdout(predicate::str::contains("Clinic in Dallas, TX"))
        .stdout(predicate::str::contains("Harbor Hospital").not());
}

#[tokio::test]
async fn test_search_json_output_matches_feed_envelope() {
    let dir = TempDir::new().expect("create temp dir");
    let url = seed_database(&dir).await;

    let assert = carefinder()
        .args(["--database-url", &url, "search", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let body: serde_json::Value = serde_json::from_str(&stdout).expect("valid feed JSON");
    assert_eq!(body["stat"], serde_json::Value::from("ok"));
    assert!(body["next_page"].is_null());
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(!items[0]["pinIconUrl"].is_null());
}

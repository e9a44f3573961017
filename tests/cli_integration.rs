use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn recipebox(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recipebox").unwrap();
    cmd.env("RECIPEBOX_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn naked_invocation_lists_whole_catalog() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pasta"))
        .stdout(predicate::str::contains("8. Guacamole"))
        .stdout(predicate::str::contains("Showing 8 of 8 recipes"));
}

#[test]
fn filter_and_sort_order_cards() {
    let home = tempfile::tempdir().unwrap();
    let out = stdout_of(
        recipebox(home.path()).args(["list", "--filter", "easy", "--sort", "time"]),
    );

    let salad = out.find("Salad").unwrap();
    let guac = out.find("Guacamole").unwrap();
    let pancakes = out.find("Pancakes").unwrap();
    let pasta = out.find("Pasta").unwrap();
    // Salad and Guacamole tie at 10 minutes and keep catalog order
    assert!(salad < guac && guac < pancakes && pancakes < pasta);
    assert!(!out.contains("Biryani"));
    assert!(out.contains("Showing 4 of 8 recipes"));
}

#[test]
fn search_matches_ingredients_case_insensitively() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .args(["search", "SPI"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Veg Biryani"))
        .stdout(predicate::str::contains("Paneer Tikka"))
        .stdout(predicate::str::contains("Showing 2 of 8 recipes"));
}

#[test]
fn empty_result_reports_zero_shown() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .args(["list", "-q", "nothing-matches-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."))
        .stdout(predicate::str::contains("Showing 0 of 8 recipes"));
}

#[test]
fn favorites_persist_between_runs() {
    let home = tempfile::tempdir().unwrap();

    recipebox(home.path())
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites (2): Veg Biryani"));

    let data = fs::read_to_string(home.path().join("data.json")).unwrap();
    assert!(data.contains("recipeFavorites"));

    recipebox(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Veg Biryani"))
        .stdout(predicate::str::contains("Showing 1 of 8 recipes"));

    recipebox(home.path())
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites (2): Veg Biryani"));

    recipebox(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 8 recipes"));
}

#[test]
fn corrupt_favorites_are_ignored() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("data.json"),
        r#"{"recipeFavorites": "definitely not json"}"#,
    )
    .unwrap();

    recipebox(home.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 8 recipes"));
}

#[test]
fn config_sets_startup_state() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"default_filter": "hard", "default_sort": "time"}"#,
    )
    .unwrap();

    let out = stdout_of(&mut recipebox(home.path()));
    let ramen = out.find("Ramen").unwrap();
    let wellington = out.find("Beef Wellington").unwrap();
    assert!(ramen < wellington);
    assert!(out.contains("Showing 2 of 8 recipes"));
}

#[test]
fn custom_catalog_file() {
    let home = tempfile::tempdir().unwrap();
    let catalog = home.path().join("mine.json");
    fs::write(
        &catalog,
        r#"[
            {"id": 1, "title": "Toast", "difficulty": "easy", "time": 5, "description": "Bread"},
            {"id": 2, "title": "Stew", "difficulty": "hard", "time": 180, "description": "Slow"}
        ]"#,
    )
    .unwrap();

    recipebox(home.path())
        .arg("--catalog")
        .arg(&catalog)
        .args(["list", "--filter", "quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toast"))
        .stdout(predicate::str::contains("Stew").not())
        .stdout(predicate::str::contains("Showing 1 of 2 recipes"));
}

#[test]
fn config_catalog_path_is_relative_to_data_dir() {
    let home = tempfile::tempdir().unwrap();
    fs::create_dir(home.path().join("catalogs")).unwrap();
    fs::write(
        home.path().join("catalogs").join("soups.json"),
        r#"[{"id": 4, "title": "Minestrone", "difficulty": "medium", "time": 50, "description": "Vegetable soup"}]"#,
    )
    .unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"catalog_file": "catalogs/soups.json"}"#,
    )
    .unwrap();

    // Run from elsewhere so a cwd-relative lookup would miss the file
    let elsewhere = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Minestrone"))
        .stdout(predicate::str::contains("Showing 1 of 1 recipes"));
}

#[test]
fn duplicate_ids_in_catalog_fail() {
    let home = tempfile::tempdir().unwrap();
    let catalog = home.path().join("dupes.json");
    fs::write(
        &catalog,
        r#"[
            {"id": 1, "title": "A", "difficulty": "easy", "time": 5, "description": ""},
            {"id": 1, "title": "B", "difficulty": "easy", "time": 5, "description": ""}
        ]"#,
    )
    .unwrap();

    recipebox(home.path())
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate recipe id in catalog: 1"));
}

#[test]
fn view_shows_full_card() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Pasta (Italian)"))
        .stdout(predicate::str::contains("Time: 25 min"))
        .stdout(predicate::str::contains("  - cheese"));
}

#[test]
fn view_unknown_recipe_fails() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .args(["view", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 999"));
}

#[test]
fn unknown_filter_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    recipebox(home.path())
        .args(["list", "--filter", "vegan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vegan"));
}

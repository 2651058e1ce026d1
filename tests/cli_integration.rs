use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

const SEED: &str = r#"[
  {"id":1,"company":"Photosnap","position":"Senior Frontend Developer","logo":"https://example.com/photosnap.svg","new":true,"featured":true,"role":"Frontend","level":"Senior","postedAt":"1d ago","contract":"Full Time","location":"USA Only","skills":["HTML","CSS","JavaScript"],"description":"Senior frontend role."},
  {"id":2,"company":"Manage","position":"Fullstack Developer","new":true,"featured":false,"role":"Fullstack","level":"Midweight","postedAt":"1d ago","contract":"Part Time","location":"Remote","skills":["Python","React"],"description":"Fullstack role."},
  {"id":3,"company":"Account","position":"Junior Frontend Developer","new":false,"featured":false,"role":"Frontend","level":"Junior","postedAt":"2d ago","contract":"Part Time","location":"USA Only","skills":["JavaScript","Sass"],"description":"Junior role."}
]"#;

fn write_seed(dir: &Path) -> PathBuf {
    let seed = dir.join("seed.json");
    std::fs::write(&seed, SEED).unwrap();
    seed
}

fn jobz(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jobz").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn seeded_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let seed = write_seed(dir.path());
    jobz(dir.path())
        .arg("init")
        .arg("--seed")
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 3 posting(s)."));
    dir
}

#[test]
fn init_then_list_shows_the_whole_collection() {
    let dir = seeded_dir();

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Photosnap"))
        .stdout(predicate::str::contains("Manage"))
        .stdout(predicate::str::contains("Account"))
        .stdout(predicate::str::contains("3 of 3 postings match."));
}

#[test]
fn first_listing_bootstraps_from_the_configured_seed() {
    let dir = tempfile::tempdir().unwrap();
    let seed = write_seed(dir.path());

    jobz(dir.path())
        .arg("config")
        .arg("seed-file")
        .arg(seed.to_str().unwrap())
        .assert()
        .success();

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 postings match."));

    // The bootstrap was cached write-through.
    assert!(dir.path().join("jobs.json").exists());
}

#[test]
fn search_is_a_case_insensitive_substring_over_all_fields() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args(["list", "--search", "java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photosnap"))
        .stdout(predicate::str::contains("Account"))
        .stdout(predicate::str::contains("Manage").not())
        .stdout(predicate::str::contains("2 of 3 postings match."));

    jobz(dir.path())
        .args(["search", "remote"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 postings match."));
}

#[test]
fn tag_filters_conjoin_with_exact_matches() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args(["list", "--tag", "Frontend", "--tag", "Senior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photosnap"))
        .stdout(predicate::str::contains("1 of 3 postings match."));

    // Tags are exact: lowercase does not match the rendered value.
    jobz(dir.path())
        .args(["list", "--tag", "frontend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 3 postings match."));
}

#[test]
fn profile_skills_narrow_the_listing_until_removed() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args(["skill", "add", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill added: python"));

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Manage"))
        .stdout(predicate::str::contains("1 of 3 postings match."));

    jobz(dir.path())
        .args(["skill", "rm", "python"])
        .assert()
        .success();

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 postings match."));
}

#[test]
fn favorites_toggle_list_in_insertion_order_and_survive_restarts() {
    let dir = seeded_dir();

    jobz(dir.path()).args(["fav", "3"]).assert().success();
    jobz(dir.path()).args(["fav", "1"]).assert().success();

    jobz(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Account.*Photosnap").unwrap())
        .stdout(predicate::str::contains("2 favorite(s)."));
}

#[test]
fn toggling_twice_restores_the_prior_state() {
    let dir = seeded_dir();

    jobz(dir.path()).args(["fav", "2"]).assert().success();
    jobz(dir.path())
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites"));

    jobz(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 favorite(s)."));
}

#[test]
fn deleting_a_posting_drops_it_from_favorites() {
    let dir = seeded_dir();

    jobz(dir.path()).args(["fav", "1"]).assert().success();
    jobz(dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from favorites."))
        .stdout(predicate::str::contains("Job deleted (#1)"));

    jobz(dir.path())
        .arg("favorites")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 favorite(s)."));

    jobz(dir.path())
        .args(["view", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Job not found: 1"));
}

#[test]
fn add_edit_and_delete_round_trip() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args([
            "add",
            "--company",
            "Hooli",
            "--position",
            "Backend Developer",
            "--contract",
            "Full Time",
            "--location",
            "Remote",
            "--role",
            "Backend",
            "--level",
            "Junior",
            "--skills",
            "Rust, SQL",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Job created (#4)"));

    jobz(dir.path())
        .args(["view", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend Developer"))
        .stdout(predicate::str::contains("Rust"));

    jobz(dir.path())
        .args(["edit", "4", "--position", "Staff Backend Developer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Job updated (#4)"));

    jobz(dir.path())
        .args(["view", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staff Backend Developer"));

    jobz(dir.path()).args(["delete", "4"]).assert().success();

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 postings match."));
}

#[test]
fn incomplete_job_form_flags_each_missing_field() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args(["add", "--company", "Hooli"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed:"))
        .stderr(predicate::str::contains("position: is required"))
        .stderr(predicate::str::contains("contract: is required"))
        .stderr(predicate::str::contains("company").not());

    // Nothing was persisted.
    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 postings match."));
}

#[test]
fn profile_form_validates_before_saving() {
    let dir = seeded_dir();

    jobz(dir.path())
        .args([
            "profile", "set", "--name", "Ada", "--position", "Engineer", "--email", "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email: is not a valid email address"));

    jobz(dir.path())
        .args([
            "profile",
            "set",
            "--name",
            "Ada",
            "--position",
            "Engineer",
            "--email",
            "ada@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved."));

    jobz(dir.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("ada@example.com"));
}

#[test]
fn missing_data_degrades_to_an_empty_usable_state() {
    let dir = tempfile::tempdir().unwrap();

    jobz(dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No job data loaded yet"))
        .stdout(predicate::str::contains("No postings match."))
        .stdout(predicate::str::contains("0 of 0 postings match."));

    // Profile features still work against the empty collection.
    jobz(dir.path())
        .args(["skill", "add", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill added: Rust"));
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use treeqr::models::Entry;

pub fn tqr() -> Command {
    let mut cmd = cargo_bin_cmd!("treeqr");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Fresh scratch directory for one test, inside the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("treeqr_test_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Store path and config path for one test. The config keeps staging and
/// export directories inside the scratch directory.
pub fn setup_test_env(name: &str) -> (String, String, PathBuf) {
    let dir = scratch_dir(name);
    let db = dir.join("store.sqlite");
    let conf = dir.join("treeqr.conf");

    let yaml = format!(
        "staging_dir: '{}'\nexport_dir: '{}'\n",
        dir.join("staging").display(),
        dir.join("exports").display()
    );
    fs::write(&conf, yaml).expect("write test config");

    (
        db.to_string_lossy().to_string(),
        conf.to_string_lossy().to_string(),
        dir,
    )
}

/// `treeqr init` against the given store and config.
pub fn init_store(db: &str, conf: &str) {
    tqr()
        .args(["--db", db, "--config", conf, "--test", "init"])
        .assert()
        .success();
}

/// Create and initialize a store directly through the library.
pub fn init_store_lib(db: &str, sheet: &str) {
    let conn = rusqlite::Connection::open(db).expect("open db");
    treeqr::db::initialize::init_db(&conn, sheet).expect("init db");
}

pub fn entry(id: &str) -> Entry {
    Entry {
        identifier: id.to_string(),
        species: "Dyera costulata".to_string(),
        height: "3".to_string(),
        dbh: "4".to_string(),
        canopy: "50".to_string(),
        latitude: Some(1.23),
        longitude: Some(103.4),
    }
}

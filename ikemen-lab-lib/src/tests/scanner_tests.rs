use super::*;
use std::fs;

use tempfile::TempDir;

fn write(dir: &TempDir, rel: &str, contents: &str) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn finds_loose_defs() {
    let dir = TempDir::new().unwrap();
    write(&dir, "training.def", "[StageInfo]\nzoffset = 200");
    write(&dir, "readme.txt", "not content");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display_name(), "training");
}

#[test]
fn finds_package_directories() {
    let dir = TempDir::new().unwrap();
    write(&dir, "kfm/kfm.def", "[Files]\ncmd = kfm.cmd");
    write(&dir, "kfm/kfm.cmd", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    let ContentEntry::Package { name, def } = &entries[0] else {
        panic!("expected a package entry");
    };
    assert_eq!(name, "kfm");
    assert!(def.ends_with("kfm.def"));
}

#[test]
fn package_def_named_after_directory_wins() {
    let dir = TempDir::new().unwrap();
    write(&dir, "ryu/alt.def", "");
    write(&dir, "ryu/ryu.def", "");
    write(&dir, "ryu/zcolor.def", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries[0].def_path().file_name().unwrap(), "ryu.def");
}

#[test]
fn package_falls_back_to_first_def() {
    let dir = TempDir::new().unwrap();
    write(&dir, "pack/beta.def", "");
    write(&dir, "pack/alpha.def", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries[0].def_path().file_name().unwrap(), "alpha.def");
}

#[test]
fn directory_without_defs_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, "sounds/hit.snd", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn hidden_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, ".hidden.def", "");
    write(&dir, ".git/config.def", "");
    write(&dir, "stage.def", "[BGdef]\nspr = s.sff");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display_name(), "stage");
}

#[test]
fn entries_are_sorted() {
    let dir = TempDir::new().unwrap();
    write(&dir, "zz.def", "");
    write(&dir, "aa.def", "");
    write(&dir, "mid/mid.def", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.display_name()).collect();
    assert_eq!(names, vec!["aa", "mid", "zz"]);
}

#[test]
fn extension_matching_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    write(&dir, "SHOUT.DEF", "");

    let entries = scan_content_entries(dir.path()).unwrap();
    assert_eq!(entries.len(), 1);
}

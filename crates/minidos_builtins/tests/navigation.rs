mod common;

use common::Harness;
use serial_test::serial;

#[test]
#[serial]
fn cd_into_a_subdirectory_changes_the_prompt() {
    let mut h = Harness::new();
    h.mkdir("sub");
    let sub = h.path("sub").display().to_string();

    assert_eq!(h.output_of("cd sub"), format!("Current directory: {sub}\n"));
    assert_eq!(h.prompt(), format!("{sub}> "));
}

#[test]
#[serial]
fn cd_dotdot_returns_to_parent() {
    let mut h = Harness::new();
    h.mkdir("sub");
    let root = h.sandbox.root().display().to_string();

    h.run("cd sub");
    assert_eq!(h.output_of("cd .."), format!("Current directory: {root}\n"));
}

#[test]
#[serial]
fn cd_to_missing_path_keeps_the_directory() {
    let mut h = Harness::new();
    let before = h.prompt();
    assert_eq!(h.output_of("cd nowhere"), "Directory 'nowhere' not found.\n");
    assert_eq!(h.prompt(), before);
}

#[test]
#[serial]
fn cd_to_a_file_is_refused() {
    let mut h = Harness::new();
    h.write("plain.txt", b"");
    let before = h.prompt();
    assert_eq!(h.output_of("cd plain.txt"), "'plain.txt' is not a directory.\n");
    assert_eq!(h.prompt(), before);
}

#[test]
#[serial]
fn bare_cd_reports_usage_and_location() {
    let mut h = Harness::new();
    let root = h.sandbox.root().display().to_string();
    assert_eq!(
        h.output_of("cd"),
        format!("Usage: cd <directory_path>\nCurrent directory: {root}\n")
    );
}

#[test]
#[serial]
fn relative_names_follow_the_new_directory() {
    let mut h = Harness::new();
    h.run("mkdir work");
    h.run("cd work");
    h.run("create inside.txt");

    assert!(h.path("work/inside.txt").is_file());
    assert!(!h.path("inside.txt").exists());

    h.run("cd ..");
    h.write("work/inside.txt", b"payload");
    assert_eq!(h.output_of("cat work/inside.txt"), "payload");
}

mod common;

use common::Harness;
use minidos_builtins::Flow;
use minidos_core::Verb;
use serial_test::serial;
use std::collections::BTreeSet;

#[test]
#[serial]
fn help_lists_exactly_the_dispatchable_verbs() {
    let mut h = Harness::new();
    let out = h.output_of("help");
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Available commands:"));

    let listed: BTreeSet<String> = lines
        .filter_map(|l| l.strip_prefix("  "))
        .filter(|l| !l.starts_with(' '))
        .filter_map(|l| l.split_whitespace().next())
        .map(str::to_string)
        .collect();
    let known: BTreeSet<String> = Verb::ALL.iter().map(|v| v.name().to_string()).collect();
    assert_eq!(listed, known);
    assert!(out.contains("(You will be prompted for your password by the system's 'sudo')."));
}

#[test]
#[serial]
fn every_listed_verb_dispatches() {
    let mut h = Harness::new();
    for verb in Verb::ALL {
        let out = h.output_of(verb.name());
        assert!(!out.starts_with("Unknown command"), "{verb}: {out}");
    }
}

#[test]
#[serial]
fn missing_arguments_print_usage_and_change_nothing() {
    let mut h = Harness::new();
    h.write("keep", b"keep");
    h.mkdir("dir");
    let before = h.snapshot();

    let cases = [
        ("create", "Usage: create <filename>\n"),
        ("type", "Usage: type <filename>\n"),
        ("cat", "Usage: cat <file1> [file2 ...]\n"),
        ("ren", "Usage: ren <old_name> <new_name>\n"),
        ("ren keep", "Usage: ren <old_name> <new_name>\n"),
        ("del", "Usage: del <filename_or_dirname>\n"),
        ("copy", "Usage: copy <source_filename> <destination_filename>\n"),
        ("copy keep", "Usage: copy <source_filename> <destination_filename>\n"),
        ("mkdir", "Usage: mkdir <dirname>\n"),
    ];
    for (line, expected) in cases {
        assert_eq!(h.output_of(line), expected, "{line}");
    }
    assert_eq!(h.snapshot(), before);
}

#[test]
#[serial]
fn verbs_are_case_insensitive_but_names_are_not() {
    let mut h = Harness::new();
    assert_eq!(h.output_of("ECHO Hello World"), "Hello World\n");
    h.run("Create Upper.TXT");
    assert!(h.path("Upper.TXT").is_file());
}

#[test]
#[serial]
fn echo_collapses_whitespace() {
    let mut h = Harness::new();
    assert_eq!(h.output_of("echo   a    b  "), "a b\n");
    assert_eq!(h.output_of("echo"), "\n");
}

#[test]
#[serial]
fn unknown_verb_is_reported_lowercased() {
    let mut h = Harness::new();
    assert_eq!(h.output_of("FROB x"), "Unknown command: 'frob'\n");
    assert_eq!(h.run("frob"), Flow::Continue);
}

#[test]
#[serial]
fn blank_lines_do_nothing() {
    let mut h = Harness::new();
    assert_eq!(h.output_of(""), "");
    assert_eq!(h.output_of("   \t "), "");
    assert_eq!(h.run("  "), Flow::Continue);
}

#[test]
#[serial]
fn exit_in_any_case_ends_the_session() {
    let mut h = Harness::new();
    assert_eq!(h.run("exit"), Flow::Exit);
    assert_eq!(h.console.take_output(), "Exiting MiniDOS. Goodbye!\n");
    assert_eq!(h.run("EXIT now"), Flow::Exit);
}

#[test]
#[serial]
fn cls_clears_the_console() {
    let mut h = Harness::new();
    assert_eq!(h.output_of("cls"), "");
    assert_eq!(h.console.clears(), 1);
}

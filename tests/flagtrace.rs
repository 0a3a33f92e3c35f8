use serde_json::{Value, json};
use std::process::Command;

fn flagtrace(args: &[&str]) -> (Vec<Value>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_flagtrace"))
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (lines, String::from_utf8(output.stderr).unwrap())
}

#[test]
fn flagtrace_json_events() {
    let (lines, stderr) = flagtrace(&[
        "--format", "json", "--", "--verbose", "-ac", "x", "-d", "--", "rest",
    ]);
    assert_eq!(
        lines,
        [
            json!({ "event": "bool_flag_set", "variable": "verbosity", "value": 42 }),
            json!({ "event": "flag", "id": "a", "value": null }),
            json!({ "event": "flag", "id": "c", "value": "x" }),
            json!({ "event": "flag", "id": "d", "value": "--" }),
            json!({ "positionals": ["rest"] }),
        ]
    );
    assert!(stderr.is_empty());
}

#[test]
fn flagtrace_json_diagnostics() {
    let (lines, stderr) = flagtrace(&["--format=json", "--program", "demo", "--", "-q", "--file"]);
    assert_eq!(
        lines,
        [
            json!({
                "event": "unrecognized",
                "diagnostic": { "kind": "invalid_option", "flag": "q" }
            }),
            json!({
                "event": "unrecognized",
                "diagnostic": { "kind": "missing_long_argument", "name": "file" }
            }),
            json!({ "positionals": [] }),
        ]
    );
    assert_eq!(
        stderr,
        "demo: invalid option -- 'q'\ndemo: option '--file' requires an argument\n"
    );
}

#[test]
fn flagtrace_text_with_trace() {
    let output = Command::new(env!("CARGO_BIN_EXE_flagtrace"))
        .args(["--trace", "--", "-b", "pos"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Flag { id: 'b', value: None }\npositionals: [\"pos\"]\n"
    );
    assert_eq!(
        String::from_utf8(output.stderr).unwrap(),
        "longopts: trace: Flag { id: 'b', value: None }, optind=1\n\
         longopts: trace: stop at positional \"pos\", optind=1\n"
    );
}

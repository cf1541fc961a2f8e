use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("draughts-cli-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("write scratch file");
    path
}

fn exit_code(bin: &str, args: &[&str]) -> Option<i32> {
    Command::new(bin)
        .args(args)
        .output()
        .expect("run binary")
        .status
        .code()
}

#[test]
fn moves_lists_the_opening() {
    let out = Command::new(env!("CARGO_BIN_EXE_moves"))
        .args(["--json"])
        .output()
        .expect("run moves");
    assert!(out.status.success());
    let moves: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(moves.as_array().map(Vec::len), Some(9));
}

#[test]
fn moves_exits_2_on_bad_input_files() {
    let bin = env!("CARGO_BIN_EXE_moves");
    assert_eq!(
        exit_code(bin, &["--config", "/nonexistent/draughts.json"]),
        Some(2)
    );

    let config = scratch_file("bad.json", r#"{ "rows_per_side": 9223372036854775808 }"#);
    assert_eq!(exit_code(bin, &["--config", config.to_str().unwrap()]), Some(2));

    let diagram = scratch_file("bad.txt", "....\n.k..\n....\n....\n");
    assert_eq!(
        exit_code(bin, &["--diagram", diagram.to_str().unwrap()]),
        Some(2)
    );

    assert_eq!(exit_code(bin, &["--at", "40,40"]), Some(2));

    let _ = fs::remove_file(config);
    let _ = fs::remove_file(diagram);
}

#[test]
fn perft_exits_2_on_a_bad_config() {
    let bin = env!("CARGO_BIN_EXE_perft");
    assert_eq!(
        exit_code(bin, &["--config", "/nonexistent/draughts.json"]),
        Some(2)
    );

    let config = scratch_file("wide.json", r#"{ "dimension": 1000 }"#);
    assert_eq!(exit_code(bin, &["--config", config.to_str().unwrap()]), Some(2));
    let _ = fs::remove_file(config);
}

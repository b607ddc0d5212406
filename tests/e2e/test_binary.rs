//! Integration tests for the graph-viewer binary.
//!
//! These tests run the compiled binary against the sample documents in
//! `demos/` and against inline input on stdin.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Path to the binary Cargo built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_graph-viewer"))
}

/// Get the demos directory.
fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and CLI args.
fn run_binary(input: &str, args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

fn run_demo(name: &str, extra_args: &[&str]) -> Output {
    let path = demos_dir().join(name);
    let mut args = vec![path.to_str().expect("demo path is UTF-8")];
    args.extend_from_slice(extra_args);
    run_binary("", &args)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Non-UTF8 output")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_maze_demo_svg() {
    let output = run_demo("maze.txt", &[]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let svg = stdout_of(&output);
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="800" height="600""#));
    assert_eq!(svg.matches("<circle ").count(), 10);
    assert_eq!(svg.matches("<line ").count(), 8);
    assert!(stderr_of(&output).contains("Loaded: 10 vertices, 8 edges."));
}

#[test]
fn test_friends_demo_text() {
    let output = run_demo("friends.txt", &["--format", "text", "-W", "400", "-H", "300"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let text = stdout_of(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "viewport 400x300");
    assert_eq!(lines.iter().filter(|l| l.starts_with("edge ")).count(), 5);
    assert_eq!(lines.iter().filter(|l| l.starts_with("node ")).count(), 5);
    // circle of radius 100 around (200, 150)
    assert_eq!(lines[6], "node 0 at (300, 150) r=10 fill=#ff0000");
    assert!(lines[8].starts_with("node 2 ") && lines[8].ends_with("fill=#00b200"));
    assert!(lines[10].ends_with("fill=#0000ff"));
}

#[test]
fn test_dot_format() {
    let output = run_demo("friends.txt", &["-f", "dot"]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let dot = stdout_of(&output);
    assert!(dot.starts_with("graph {"));
    assert!(dot.contains("2 -- 3"));
}

#[test]
fn test_stdin_input() {
    let output = run_binary(
        "Macierz\n[1 0]\n[0 1]\nLista polaczen\n0 - 1\n",
        &["--format", "text", "--width", "300", "--height", "300"],
    );
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "viewport 300x300\n\
         edge (100, 100) -> (200, 200)\n\
         node 0 at (100, 100) r=10 fill=#ff0000\n\
         node 1 at (200, 200) r=10 fill=#ff0000\n"
    );
}

#[test]
fn test_output_file() {
    let out = std::env::temp_dir().join(format!("graph-viewer-e2e-{}.svg", std::process::id()));
    let output = run_demo("maze.txt", &["-o", out.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).is_empty());
    let written = std::fs::read_to_string(&out).unwrap();
    std::fs::remove_file(&out).ok();
    assert!(written.starts_with("<svg"));
}

#[test]
fn test_format_error_exits_nonzero() {
    let output = run_demo("broken_nonsquare.txt", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr_of(&output).contains("error: matrix row 1"),
        "stderr: {}",
        stderr_of(&output)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_matrix_exits_nonzero() {
    let output = run_binary("Lista polaczen\n0 - 1\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("error: missing matrix section"));
}

#[test]
fn test_missing_input_file() {
    let output = run_binary("", &["/no/such/graph.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("error: cannot read"));
}

#[test]
fn test_empty_graph_warns() {
    let output = run_binary("Macierz\nGrupa 0:\nGrupa 1:\nGrupa 2:\n", &[]);
    assert!(output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Loaded: 0 vertices, 0 edges."));
    assert!(stderr.contains("warning: graph has no vertices"));
}

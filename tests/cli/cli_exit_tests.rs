use std::fs::{self, File};
use std::process::{Command, Output, Stdio};

fn run_ereport(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ereport"))
        .args(args)
        .env_remove("NO_COLOR")
        .output()
        .unwrap_or_else(|e| panic!("failed to run ereport with args {:?}: {e}", args))
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn error_exits_with_status_two() {
    let output = run_ereport(&["--program", "cc", "error", "bad input"]);

    assert_eq!(output.status.code(), Some(2), "stderr:\n{}", stderr(&output));
    assert_eq!(stderr(&output), "cc: Error: bad input\n");
}

#[test]
fn error_at_includes_source_and_position() {
    let output = run_ereport(&[
        "--program",
        "cc",
        "--source",
        "/tmp/project/prog.alan",
        "--at",
        "12:5",
        "error-at",
        "expected `;`",
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "cc: prog.alan:12:5: Error: expected `;`\n");
}

#[test]
fn tagged_exits_with_status_three() {
    let output = run_ereport(&[
        "--program",
        "cc",
        "--at",
        "7:1",
        "tag",
        "Internal:",
        "symbol table corrupt",
    ]);

    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr(&output), "cc:7:1: Internal: symbol table corrupt\n");
}

#[test]
fn warning_returns_control() {
    let output = run_ereport(&["--program", "cc", "warn", "shadowed name"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert_eq!(stderr(&output), "cc: Warning: shadowed name\n");
}

#[test]
fn piped_stderr_has_no_escape_sequences() {
    let output = run_ereport(&["--source", "a.alan", "--at", "1:1", "error-at", "x"]);

    assert!(!stderr(&output).contains('\u{1b}'));
}

#[test]
fn forced_color_wraps_the_prefix() {
    let output = run_ereport(&["--program", "cc", "--color", "always", "error", "boom"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "cc: \u{1b}[1;31mError:\u{1b}[m boom\n");
}

#[test]
fn default_program_name_is_the_executable() {
    let output = run_ereport(&["warn", "who am i"]);

    let text = stderr(&output);
    assert!(text.starts_with("ereport"), "stderr:\n{}", text);
    assert!(text.ends_with(": Warning: who am i\n"), "stderr:\n{}", text);
}

#[cfg(target_os = "linux")]
#[test]
fn failed_open_reports_os_error() {
    let output = run_ereport(&["--program", "cc", "open", "/no/such/dir/file.alan"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "cc: Error: open of /no/such/dir/file.alan failed: No such file or directory\n"
    );
}

#[test]
fn alloc_succeeds_for_small_sizes() {
    let output = run_ereport(&["alloc", "4096"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "allocated 4096 bytes\n");
}

#[test]
fn alloc_failure_is_fatal() {
    let size = usize::MAX.to_string();
    let output = run_ereport(&["--program", "cc", "alloc", &size]);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).starts_with(&format!("cc: Error: malloc of {size} bytes failed: ")),
        "stderr:\n{}",
        stderr(&output)
    );
    assert!(stdout(&output).is_empty());
}

#[test]
fn alloc_warn_failure_continues() {
    let size = usize::MAX.to_string();
    let output = run_ereport(&["--program", "cc", "alloc-warn", &size]);

    assert!(output.status.success());
    assert_eq!(stderr(&output).lines().count(), 1);
    assert_eq!(stdout(&output), "allocation skipped\n");
}

#[test]
fn realloc_failure_is_fatal() {
    let size = usize::MAX.to_string();
    let output = run_ereport(&["--program", "cc", "realloc", &size]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("realloc of"));
}

#[test]
fn strdup_echoes_its_input() {
    let output = run_ereport(&["strdup", "copied text"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "copied text\n");
}

#[test]
fn pending_stdout_precedes_the_diagnostic() {
    let path = std::env::temp_dir().join(format!(
        "ereport-interleave-{}.log",
        std::process::id()
    ));
    let log = File::create(&path).expect("create shared log");
    let status = Command::new(env!("CARGO_BIN_EXE_ereport"))
        .args(["--program", "cc", "--echo", "partial line ", "error", "boom"])
        .env_remove("NO_COLOR")
        .stdout(Stdio::from(log.try_clone().expect("clone log handle")))
        .stderr(Stdio::from(log))
        .status()
        .expect("run ereport");

    let combined = fs::read_to_string(&path).expect("read shared log");
    let _ = fs::remove_file(&path);

    assert_eq!(status.code(), Some(2));
    assert_eq!(combined, "partial line cc: Error: boom\n");
}

#[test]
fn echo_without_diagnostic_reaches_stdout() {
    let output = run_ereport(&["--echo", "no newline", "alloc", "8"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "no newlineallocated 8 bytes\n");
}

#[cfg(target_os = "linux")]
#[test]
fn auto_color_on_a_terminal_wraps_the_prefix() {
    let has_script = Command::new("script")
        .arg("--version")
        .output()
        .is_ok_and(|out| out.status.success());
    if !has_script {
        eprintln!("skipping: `script` is not available");
        return;
    }

    let command = format!(
        "'{}' --program cc --source p.alan --at 3:4 error-at boom",
        env!("CARGO_BIN_EXE_ereport")
    );
    let output = Command::new("script")
        .args(["-qec", &command, "/dev/null"])
        .env_remove("NO_COLOR")
        .stdin(Stdio::null())
        .output()
        .unwrap_or_else(|e| panic!("failed to run script: {e}"));

    let text = stdout(&output);
    assert!(
        text.contains(
            "cc: \u{1b}[1;37mp.alan:\u{1b}[m\u{1b}[1;37m3:4\u{1b}[m: \u{1b}[1;31mError:\u{1b}[m boom"
        ),
        "terminal output:\n{:?}",
        text
    );
    assert_eq!(output.status.code(), Some(2));
}

#[path = "../common/mod.rs"]
mod common;

use ereport::diagnostics::{ManagedProgramName, PlatformProgramName, ProgramName, Reporter};
use ereport::report_warning;

use common::{SharedBuf, capture};

#[test]
fn source_name_strips_directories() {
    let (reporter, _buf) = capture();
    reporter.set_source_name("/a/b/c.src");
    assert_eq!(reporter.source_name().as_deref(), Some("c.src"));
}

#[test]
fn source_name_without_separator_is_unchanged() {
    let (reporter, _buf) = capture();
    reporter.set_source_name("c.src");
    assert_eq!(reporter.source_name().as_deref(), Some("c.src"));
}

#[test]
fn names_are_unset_by_default() {
    let (reporter, _buf) = capture();
    assert_eq!(reporter.program_name(), None);
    assert_eq!(reporter.source_name(), None);
}

#[test]
fn setting_again_replaces_the_name() {
    let (reporter, _buf) = capture();
    reporter.set_source_name("one.alan");
    reporter.set_source_name("dir/two.alan");
    assert_eq!(reporter.source_name().as_deref(), Some("two.alan"));
}

#[test]
fn stored_name_is_an_independent_copy() {
    let (reporter, _buf) = capture();
    let mut path = String::from("/src/main.alan");
    reporter.set_source_name(&path);
    path.clear();
    assert_eq!(reporter.source_name().as_deref(), Some("main.alan"));
}

#[test]
fn managed_program_name_is_released() {
    let (reporter, _buf) = capture();
    reporter.set_program_name("./target/debug/alanc");
    assert_eq!(reporter.program_name().as_deref(), Some("alanc"));
    reporter.release_program_name();
    assert_eq!(reporter.program_name(), None);
}

#[test]
fn platform_program_name_comes_from_the_process() {
    let buf = SharedBuf::default();
    let reporter = Reporter::builder()
        .sink(buf.clone())
        .platform_program_name()
        .build();

    let expected = PlatformProgramName::new().name().map(str::to_string);
    assert!(expected.is_some());
    assert_eq!(reporter.program_name(), expected);

    reporter.release_program_name();
    assert_eq!(reporter.program_name(), expected);
}

#[test]
fn custom_program_name_source_is_used() {
    let mut managed = ManagedProgramName::new();
    managed.set("bin/driver");
    let buf = SharedBuf::default();
    let reporter = Reporter::builder()
        .sink(buf.clone())
        .program_name_source(managed)
        .build();

    report_warning!(reporter, "hi");

    assert_eq!(buf.text(), "driver: Warning: hi\n");
}

#[test]
fn builder_installs_names() {
    let buf = SharedBuf::default();
    let reporter = Reporter::builder()
        .sink(buf.clone())
        .program_name("/opt/cc")
        .source_name("src/lib.alan")
        .build();

    report_warning!(reporter, "ok");

    assert_eq!(buf.text(), "cc: lib.alan: Warning: ok\n");
}

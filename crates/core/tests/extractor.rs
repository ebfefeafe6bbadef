mod common;

use std::path::Path;

use ctestgen_core::extract::Extractor;
use ctestgen_core::project::EngineConfig;

use common::{sample_project, write_file};

fn names(records: &[ctestgen_core::model::FunctionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn extracts_records_with_captured_fields() {
    let extractor = Extractor::default();
    let source = "\
#include <stdint.h>
int add(int a, int b) {
    return a + b;
}
static inline const char* label_for(int code);
uint32_t crc32(const uint8_t* buf, size_t len);
";
    let records = extractor.extract_from_source(Path::new("main/math.c"), source);
    assert_eq!(names(&records), vec!["add", "label_for", "crc32"]);

    assert_eq!(records[0].return_type, "int");
    assert_eq!(records[0].line_number, 2);
    assert!(!records[0].is_static);

    assert_eq!(records[1].return_type, "char*");
    assert!(records[1].is_static);

    assert_eq!(records[2].return_type, "uint32_t");
    assert_eq!(records[2].line_number, 6);
}

#[test]
fn static_flag_is_a_substring_check_on_the_line() {
    let extractor = Extractor::default();
    let records = extractor
        .extract_from_source(Path::new("main/a.c"), "int get_static_value(void) {\n}\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].is_static);
}

#[test]
fn skips_comments_directives_excluded_names_and_type_aliases() {
    let extractor = Extractor::default();
    let source = "\
// int commented(int a) {
  #define WRAP(x) int wrapped(x) {
int main(void) {
void setUp(void) {
Config_t Handle_t(void);
int kept(void) {
";
    let records = extractor.extract_from_source(Path::new("main/a.c"), source);
    assert_eq!(names(&records), vec!["kept"]);
}

#[test]
fn exclusion_policy_is_injectable() {
    let config = EngineConfig::default().with_excluded_functions(["kept"]);
    let extractor = Extractor::new(config);
    let records = extractor
        .extract_from_source(Path::new("main/a.c"), "int main(void) {\nint kept(void) {\n");
    assert_eq!(names(&records), vec!["main"]);
}

#[test]
fn return_type_alone_on_previous_line_is_not_detected() {
    let extractor = Extractor::default();
    let records = extractor
        .extract_from_source(Path::new("main/a.c"), "static int\ncompute(int a) {\n}\n");
    assert!(records.is_empty());
}

#[test]
fn scan_walks_sources_in_sorted_order() {
    let project = sample_project();
    let extractor = Extractor::default();
    let records = extractor.scan(&project.path().join("main"));

    // main.c only holds excluded entry points.
    assert_eq!(names(&records), vec!["log_event", "double_sha256", "helper"]);
    assert!(records.iter().all(|r| r.source_file.ends_with("crypto.c")));
    assert_eq!(records[0].line_number, 4);
}

#[test]
fn scan_skips_test_like_paths_below_source_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "src/real.c", "int real(void) {\n");
    write_file(dir.path(), "src/Testing/fake.c", "int fake(void) {\n");
    write_file(dir.path(), "src/mock_test.c", "int mocked(void) {\n");
    write_file(dir.path(), "src/notes.h", "int header_only(void);\n");

    let records = Extractor::default().scan(&dir.path().join("src"));
    assert_eq!(names(&records), vec!["real"]);
}

#[test]
fn scan_tolerates_non_utf8_content() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("latin1.c"), b"// caf\xe9\nint ok(void) {\n").unwrap();

    let records = Extractor::default().scan(&src);
    assert_eq!(names(&records), vec!["ok"]);
    assert_eq!(records[0].line_number, 2);
}

#[test]
fn missing_source_dir_scans_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Extractor::default().scan(&dir.path().join("main")).is_empty());
}

#[test]
fn signature_pass_reads_parameters_from_disk() {
    let project = sample_project();
    let extractor = Extractor::default();
    let records = extractor.scan(&project.path().join("main"));
    let sha = records.iter().find(|r| r.name == "double_sha256").unwrap();

    let signature = extractor.signature(sha);
    assert_eq!(signature.parameters, vec!["const uint8_t* data", "size_t len", "uint8_t* out"]);
    assert!(signature.has_pointer_parameter());
}

#[test]
fn signature_pass_degrades_to_empty_on_missing_file() {
    let extractor = Extractor::default();
    let record = ctestgen_core::model::FunctionRecord::new("gone", "int", "/nonexistent/x.c", 1);
    let signature = extractor.signature(&record);
    assert!(signature.text.is_empty());
    assert!(signature.parameters.is_empty());
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped_and_scan_continues() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "src/a_open.c", "int opened(void) {\n");
    write_file(dir.path(), "src/b_locked.c", "int locked(void) {\n");
    write_file(dir.path(), "src/c_open.c", "int after(void) {\n");
    let locked = dir.path().join("src/b_locked.c");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user.
    if std::fs::read(&locked).is_ok() {
        return;
    }

    let records = Extractor::default().scan(&dir.path().join("src"));
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o644)).unwrap();
    assert_eq!(names(&records), vec!["opened", "after"]);
}

#[test]
fn test_named_parent_of_source_dir_does_not_skip_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "attest_fw/main/a.c", "int measure(void) {\n");

    let records = Extractor::default().scan(&dir.path().join("attest_fw/main"));
    assert_eq!(names(&records), vec!["measure"]);
}

#[test]
fn indented_signature_is_not_detected() {
    let extractor = Extractor::default();
    let source = "    int indented(int a) {\n    return foo(a);\nint flush(int a) {\n";
    let records = extractor.extract_from_source(Path::new("main/a.c"), source);
    assert_eq!(names(&records), vec!["flush"]);
}

#[test]
fn signature_pass_degrades_to_empty_on_non_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.c");
    std::fs::write(&path, b"// caf\xe9\nint ok(int a, char *b) {\n").unwrap();

    let extractor = Extractor::default();
    let record = ctestgen_core::model::FunctionRecord::new("ok", "int", path.clone(), 2);
    let signature = extractor.signature(&record);
    assert!(signature.text.is_empty());
    assert!(signature.parameters.is_empty());
}

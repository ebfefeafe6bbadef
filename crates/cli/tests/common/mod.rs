#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write fixture file");
}

/// Project with one covered, one untested and one static function.
pub fn partially_tested_project() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(
        dir.path(),
        "main/crypto.c",
        "\
static void log_event(const char* msg) {
}

int double_sha256(const uint8_t* data, size_t len) {
    return 0;
}

int helper(int value) {
    return value * 2;
}
",
    );
    write_file(
        dir.path(),
        "test/test_crypto.c",
        "void test_module_double_sha256(void) {\n}\n",
    );
    dir
}

/// Project whose only public function already has a test.
pub fn fully_tested_project() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "main/adc.c", "int adc_read(int channel) {\n}\n");
    write_file(dir.path(), "test/test_adc.c", "void test_adc_read(void) {\n}\n");
    dir
}

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Write `contents` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, contents).expect("write fixture file");
}

/// A small ESP-IDF style project with `main/` sources and `test/` tests.
pub fn sample_project() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let root = dir.path();

    write_file(
        root,
        "main/crypto.c",
        "\
#include \"crypto.h\"

// int commented_out(int x) {
static void log_event(const char* msg) {
    printf(\"%s\\n\", msg);
}

int double_sha256(const uint8_t* data, size_t len, uint8_t* out) {
    return 0;
}

int helper(int value) {
    return value * 2;
}
",
    );
    write_file(
        root,
        "main/main.c",
        "\
#include \"crypto.h\"

void app_main(void) {
    helper(1);
}

int main(void) {
    return 0;
}
",
    );
    write_file(
        root,
        "test/test_crypto.c",
        "\
#include \"unity.h\"

void test_module_double_sha256(void) {
    TEST_ASSERT(true);
}
",
    );

    dir
}

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::Signature;

static PARAMETER_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));

/// Re-read `path` and collect the signature starting at `line_number`.
///
/// Best effort: a file that cannot be read, or is not valid UTF-8, yields an
/// empty signature. Extraction decodes lossily, so such a function is still
/// reported; it just gets no parameter-driven stubs.
pub fn read_signature(path: &Path, line_number: usize, lookahead: usize) -> Signature {
    match fs::read_to_string(path) {
        Ok(source) => signature_from_source(&source, line_number, lookahead),
        Err(err) => {
            debug!("Cannot read {} for signature parsing: {}", path.display(), err);
            Signature::default()
        }
    }
}

/// Collect the signature starting at 1-based `line_number` within `source`.
///
/// Lines are trimmed and accumulated until one contains `{` or `;`, reading at
/// most `lookahead` lines.
pub fn signature_from_source(source: &str, line_number: usize, lookahead: usize) -> Signature {
    let Some(start) = line_number.checked_sub(1) else {
        return Signature::default();
    };

    let mut parts = Vec::new();
    for line in source.lines().skip(start).take(lookahead) {
        let line = line.trim();
        parts.push(line);
        if line.contains('{') || line.contains(';') {
            break;
        }
    }

    let text = parts.join(" ");
    let parameters = parse_parameters(&text);
    Signature::new(text, parameters)
}

/// Split the first parenthesized segment of `signature` into parameter tokens.
///
/// Empty tokens and a lone `void` are dropped, so `f(void)` has no parameters.
pub fn parse_parameters(signature: &str) -> Vec<String> {
    let Some(caps) = PARAMETER_LIST_RE.captures(signature) else {
        return Vec::new();
    };
    caps[1]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "void")
        .map(str::to_string)
        .collect()
}

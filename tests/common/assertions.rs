//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::app::TestRun;

/// Assert the command exited successfully
pub fn assert_success(run: &TestRun) {
    assert!(
        run.success,
        "Expected success. stdout: {} stderr: {}",
        run.stdout, run.stderr
    );
}

/// Assert the command failed and reported `kind` on stderr
pub fn assert_failed_with_kind(run: &TestRun, kind: &str) {
    assert!(!run.success, "Expected failure, got stdout: {}", run.stdout);
    assert!(
        run.stderr.contains(&format!("[{}]", kind)),
        "Expected error kind [{}] on stderr, got: {}",
        kind,
        run.stderr
    );
    assert_eq!(run.stdout, "", "Nothing should reach stdout on failure");
}

/// Assert a text report line is `0x<16 hex> 0x<16 hex>`
pub fn assert_hash_line(line: &str) {
    let parts: Vec<&str> = line.split(' ').collect();
    assert_eq!(parts.len(), 2, "Expected two hashes in {:?}", line);
    for part in parts {
        assert!(
            part.len() == 18
                && part.starts_with("0x")
                && part[2..]
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "Malformed hash {:?} in line {:?}",
            part,
            line
        );
    }
}

//! Custom assertion macros for scenario and CLI tests.

/// Assert that output (stdout or stderr) contains expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a command succeeded, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

//! Assertion macros with descriptive failure output.

/// Assert that stdout or stderr contains `pattern`.
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

/// Assert that the command succeeded, showing its output if not.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success (exit {}).\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the exact lines of a file in the environment.
#[macro_export]
macro_rules! assert_file_lines {
    ($env:expr, $file:expr, $lines:expr) => {
        let content = $env.read_file($file);
        let actual: Vec<&str> = content.lines().collect();
        let expected: Vec<&str> = $lines.to_vec();
        assert_eq!(actual, expected, "unexpected content in {}", $file);
    };
}

//! Exit code constants for the coverage-agent CLI.
//!
//! - 0: Success
//! - 1: User error (missing credential, filesystem failures)
//! - 2: Pulling tests from Testomat.io failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing API key, or a directory/file could not be created.
pub const USER_ERROR: i32 = 1;

/// The remote test pull failed.
pub const FETCH_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, FETCH_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn failures_are_non_zero() {
        assert_eq!(SUCCESS, 0);
        assert_ne!(USER_ERROR, 0);
        assert_ne!(FETCH_FAILURE, 0);
    }
}

//! Exit code constants for the promptline CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown activity, uninitialized workspace)
//! - 2: Configuration error (unreadable or invalid config/state files)
//! - 3: Generative model failure (missing key, HTTP error, malformed payload)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown ids, or missing workspace.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config.yaml, product.yaml or timeline.yaml could not be used.
pub const CONFIG_ERROR: i32 = 2;

/// Generative model failure: the request could not be made or its reply was unusable.
pub const LLM_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_ERROR, LLM_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}

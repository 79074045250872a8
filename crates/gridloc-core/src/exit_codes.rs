//! Exit codes for the gridloc CLI.
//!
//! Exit codes communicate outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0: success
//! - 10-19: user/environment errors (recoverable by user action)
//! - 20-29: internal errors (bugs, should be reported)

/// Exit codes for gridloc operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success: run completed or input validated cleanly
    Clean = 0,

    /// Invalid arguments
    ArgsError = 10,

    /// Scenario file missing, unreadable, or malformed
    ScenarioError = 11,

    /// Scenario rejected by the filter, or the run degenerated
    FilterError = 12,

    /// Internal error (bug - please report)
    InternalError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    /// These can be resolved by user action.
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Check if this exit code is an internal error (codes 20-29).
    /// These indicate bugs and should be reported.
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ScenarioError => "ERR_SCENARIO",
            ExitCode::FilterError => "ERR_FILTER",
            ExitCode::InternalError => "ERR_INTERNAL",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::ArgsError.as_i32(), 10);
        assert_eq!(ExitCode::ScenarioError.as_i32(), 11);
        assert_eq!(ExitCode::FilterError.as_i32(), 12);
        assert_eq!(ExitCode::InternalError.as_i32(), 20);
    }

    #[test]
    fn classification_follows_ranges() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::Clean.is_user_error());

        assert!(ExitCode::ScenarioError.is_user_error());
        assert!(!ExitCode::ScenarioError.is_internal_error());

        assert!(ExitCode::InternalError.is_internal_error());
        assert!(!ExitCode::InternalError.is_user_error());
    }

    #[test]
    fn display_includes_name_and_code() {
        assert_eq!(ExitCode::FilterError.to_string(), "ERR_FILTER (12)");
    }
}

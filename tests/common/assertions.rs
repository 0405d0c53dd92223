//! Custom assertion macros and utilities

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that a string does not contain a substring
#[macro_export]
macro_rules! assert_not_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            !$haystack.contains($needle),
            "Expected '{}' not to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert the status and the generic `{ error, status }` body of an error response
#[macro_export]
macro_rules! assert_error_status {
    ($response:expr, $status:expr) => {{
        assert_eq!($response.status_code(), $status);
        let body: serde_json::Value = $response.json();
        assert_eq!(body["status"], $status.as_u16());
        body
    }};
}

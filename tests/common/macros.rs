/// Asserts two floats are within `1e-9` of each other.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() < 1e-9,
            "expected {} to be close to {}",
            left,
            right
        );
    };
}

/// Asserts that the game's plant has the given status code after a round.
#[macro_export]
macro_rules! assert_status {
    ($outcome:expr, $status:expr) => {
        assert_eq!(
            $outcome.status, $status,
            "unexpected status, reason: {:?}",
            $outcome.reason
        );
    };
}

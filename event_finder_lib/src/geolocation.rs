use thiserror::Error;

use crate::coordinate::Coordinate;

/// Why the platform could not give us a position fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("permission denied")]
    Denied,
    #[error("position unavailable")]
    Unavailable,
    #[error("timed out")]
    Timeout,
}

impl LocationError {
    /// Maps a `PositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::Denied,
            3 => LocationError::Timeout,
            _ => LocationError::Unavailable,
        }
    }
}

/// The position the map is built around: the fix, or `fallback` when there is none.
pub fn resolve(fix: Result<Coordinate, LocationError>, fallback: Coordinate) -> Coordinate {
    fix.unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FALLBACK;

    #[test]
    fn position_error_codes() {
        assert_eq!(LocationError::from_code(1), LocationError::Denied);
        assert_eq!(LocationError::from_code(2), LocationError::Unavailable);
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
    }

    #[test]
    fn denied_permission_uses_fallback() {
        let denied = Err(LocationError::from_code(1));
        assert_eq!(resolve(denied, DEFAULT_FALLBACK), Coordinate::new(40.7589, -73.9851));
    }

    #[test]
    fn every_failure_uses_fallback() {
        let fallback = Coordinate::new(48.8566, 2.3522);
        for err in [LocationError::Denied, LocationError::Unavailable, LocationError::Timeout] {
            assert_eq!(resolve(Err(err), fallback), fallback);
        }
    }

    #[test]
    fn fix_wins_over_fallback() {
        let fix = Coordinate::new(51.5074, -0.1278);
        assert_eq!(resolve(Ok(fix), DEFAULT_FALLBACK), fix);
    }
}

//! Coarse classification of HTTP status codes by their leading digit.

use std::fmt;

/// The five HTTP status classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusClass {
    /// Classify a status code by its hundreds digit.
    ///
    /// Codes outside [100, 599] have no defined class; callers should treat
    /// `None` as an unexpected transport state.
    pub fn of(code: u16) -> Option<StatusClass> {
        match code / 100 {
            1 => Some(StatusClass::Informational),
            2 => Some(StatusClass::Success),
            3 => Some(StatusClass::Redirection),
            4 => Some(StatusClass::ClientError),
            5 => Some(StatusClass::ServerError),
            _ => None,
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusClass::Informational => "informational",
            StatusClass::Success => "success",
            StatusClass::Redirection => "redirection",
            StatusClass::ClientError => "client error",
            StatusClass::ServerError => "server error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_hundreds_band() {
        for code in [100, 101, 199] {
            assert_eq!(StatusClass::of(code), Some(StatusClass::Informational));
        }
        for code in [200, 201, 204, 299] {
            assert_eq!(StatusClass::of(code), Some(StatusClass::Success));
        }
        for code in [300, 301, 399] {
            assert_eq!(StatusClass::of(code), Some(StatusClass::Redirection));
        }
        for code in [400, 404, 422, 499] {
            assert_eq!(StatusClass::of(code), Some(StatusClass::ClientError));
        }
        for code in [500, 503, 599] {
            assert_eq!(StatusClass::of(code), Some(StatusClass::ServerError));
        }
    }

    #[test]
    fn out_of_range_codes_have_no_class() {
        for code in [0, 42, 99, 600, 999, u16::MAX] {
            assert_eq!(StatusClass::of(code), None);
        }
    }
}

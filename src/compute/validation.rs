//! Validation of the temporal arguments carried in the variadic domain slot.

use crate::error::{Result, RoleError};
use crate::types::{TimeWindow, Timestamp};

/// Number of arguments a link window is made of: start and end.
pub const WINDOW_ARITY: usize = 2;

/// Number of arguments a containment query carries: the request time.
pub const REQUEST_ARITY: usize = 1;

/// Parses a `[start, end]` argument slice into a [`TimeWindow`].
///
/// # Examples
///
/// ```
/// use session_rbac::compute::validation::parse_time_window;
///
/// let window = parse_time_window("add_link", &["2020-01-01", "2020-12-31"]).unwrap();
/// assert_eq!(window.start.as_str(), "2020-01-01");
///
/// // A lone start time is rejected
/// assert!(parse_time_window("add_link", &["2020-01-01"]).is_err());
/// ```
pub fn parse_time_window<S: AsRef<str>>(operation: &'static str, args: &[S]) -> Result<TimeWindow> {
    match args {
        [start, end] => Ok(TimeWindow::new(start.as_ref(), end.as_ref())),
        _ => Err(RoleError::invalid_arguments(
            operation,
            WINDOW_ARITY,
            args.len(),
        )),
    }
}

/// Parses a single-element argument slice into a request [`Timestamp`].
///
/// # Examples
///
/// ```
/// use session_rbac::compute::validation::parse_request_time;
///
/// let at = parse_request_time("has_link", &["2020-06-01"]).unwrap();
/// assert_eq!(at.as_str(), "2020-06-01");
///
/// let none: [&str; 0] = [];
/// assert!(parse_request_time("has_link", &none).is_err());
/// ```
pub fn parse_request_time<S: AsRef<str>>(operation: &'static str, args: &[S]) -> Result<Timestamp> {
    match args {
        [at] => Ok(Timestamp::new(at.as_ref())),
        _ => Err(RoleError::invalid_arguments(
            operation,
            REQUEST_ARITY,
            args.len(),
        )),
    }
}

impl TimeWindow {
    /// Builds a window from variadic `[start, end]` arguments.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        parse_time_window("time_window", args)
    }
}

impl Timestamp {
    /// Builds a request time from variadic `[at]` arguments.
    pub fn from_request_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        parse_request_time("request_time", args)
    }
}

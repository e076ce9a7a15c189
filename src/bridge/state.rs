//! Session storage for the JS bridge
//!
//! WASM is single-threaded: one session lives in a thread-local and every
//! entry point borrows it for the duration of one call.

use std::cell::RefCell;

use chrono::{DateTime, Utc};

use crate::session::Session;

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Run `f` with the page's session borrowed mutably
pub(crate) fn with_session<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    SESSION.with(|session_cell| f(&mut session_cell.borrow_mut()))
}

/// Wall-clock time from the browser
///
/// Falls back to the Unix epoch, with a console warning, if the browser
/// clock is outside chrono's range.
pub(crate) fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now();
    match timestamp_from_millis(millis) {
        Some(stamp) => stamp,
        None => {
            web_sys::console::warn_1(&format!("Clock value {millis} out of range, using epoch").into());
            DateTime::default()
        }
    }
}

fn timestamp_from_millis(millis: f64) -> Option<DateTime<Utc>> {
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

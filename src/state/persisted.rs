//! The signed-in user's id and name, kept in the host key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads these on load to know whose drawings to show; the index
//! page writes them when a user is picked. The storage keys are shared with
//! data written by earlier versions of the front-end and must not change.
//!
//! TRADE-OFFS
//! ==========
//! Reads never fail: a missing or malformed id reads as `0` and a missing
//! name reads as `""`. Write failures are logged and otherwise dropped.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStore;

pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";

pub struct PersistedState<S> {
    store: S,
}

impl<S: KeyValueStore> PersistedState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored user id, or `0` when absent or not a number.
    #[must_use]
    pub fn user_id(&self) -> i64 {
        self.store
            .get_item(USER_ID_KEY)
            .map_or(0, |raw| parse_leading_int(&raw))
    }

    pub fn set_user_id(&self, user_id: i64) {
        self.write(USER_ID_KEY, &user_id.to_string());
    }

    /// Stored username, or `""` when absent.
    #[must_use]
    pub fn username(&self) -> String {
        self.store.get_item(USERNAME_KEY).unwrap_or_default()
    }

    pub fn set_username(&self, username: &str) {
        self.write(USERNAME_KEY, username);
    }

    /// Record `user` as the signed-in user.
    pub fn remember(&self, user: &User) {
        self.set_user_id(user.id);
        self.set_username(&user.username);
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set_item(key, value) {
            log::warn!("{e}");
        }
    }
}

/// Parse a base-10 integer prefix the way browsers' `parseInt` does.
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit. No digits, or a value outside `i64`, yields `0`.
fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}

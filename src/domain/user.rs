// SPDX-License-Identifier: MPL-2.0
//! User identity newtype.

use std::fmt;

/// Server-side user identifier carried by every avatar.
///
/// The session user's own id is compared against feed entries to decide
/// which avatar triggers the uploader instead of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_value() {
        assert_eq!(UserId::new(42).to_string(), "42");
    }

    #[test]
    fn equality_compares_values() {
        assert_eq!(UserId::new(7), UserId::from(7));
        assert_ne!(UserId::new(7), UserId::new(8));
    }
}

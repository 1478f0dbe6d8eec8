//! Cosmetic per-card like toggles. Session-only, never counted.

use std::collections::BTreeSet;

/// Liked card ids.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LikeSet {
    liked: BTreeSet<String>,
}

impl LikeSet {
    /// Flip the like state for a card; returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.to_string());
            true
        }
    }

    /// Whether a card is liked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.liked.contains(id)
    }
}

/// Icon and tint classes for the like control.
#[must_use]
pub const fn like_classes(liked: bool) -> (&'static str, &'static str) {
    if liked {
        ("ri-heart-fill", "text-red-500")
    } else {
        ("ri-heart-line", "text-base-content")
    }
}

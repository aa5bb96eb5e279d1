//! Event record type
//!
//! An `Event` is the validated form of one remote event record. Field
//! constraints live in the validator; the constants below are the fixed
//! parts of those constraints.

use serde::{Deserialize, Serialize};

/// Required prefix for event identifiers.
pub const EVENT_ID_PREFIX: &str = "e";

/// Minimum length of an event identifier, in characters.
pub const EVENT_ID_MIN_LEN: usize = 2;

/// Required leading path segment for event images.
pub const EVENT_IMAGE_PREFIX: &str = "images";

/// A validated event record.
///
/// Instances are only produced by [`EventValidator`](super::EventValidator),
/// so every field already satisfies its constraints: `id` starts with
/// [`EVENT_ID_PREFIX`], `image` starts with [`EVENT_IMAGE_PREFIX`],
/// `title` and `location` are non-empty, and `date` carries a
/// `YYYY-MM-DD` pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event identifier (the remote map key)
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description, preserved verbatim
    pub description: String,
    /// Image path, rooted at the images directory
    pub image: String,
    /// Venue or city
    pub location: String,
    /// Calendar date as a `YYYY-MM-DD` string
    pub date: String,
    /// Whether the event is featured on the landing page
    #[serde(rename = "isFeatured")]
    pub is_featured: bool,
}

//! Room type tags and their fixed profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of room categories.
///
/// The declaration order is the reporting order used by statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    /// Single occupancy room.
    Simple,
    /// Room with two beds.
    Double,
    /// Business room with desk and mini bar.
    Executive,
    /// Multi-room suite.
    Suite,
}

/// Fixtures copied onto every room of a type at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTypeProfile {
    /// Ordered amenity list copied onto every room of this type.
    pub amenities: &'static [&'static str],
}

const SIMPLE_PROFILE: RoomTypeProfile = RoomTypeProfile {
    amenities: &["TV", "WiFi", "Private Bathroom"],
};

const DOUBLE_PROFILE: RoomTypeProfile = RoomTypeProfile {
    amenities: &["TV", "WiFi", "Private Bathroom", "Two Beds"],
};

const EXECUTIVE_PROFILE: RoomTypeProfile = RoomTypeProfile {
    amenities: &[
        "TV",
        "WiFi",
        "Private Bathroom",
        "King Bed",
        "Work Desk",
        "Mini Bar",
    ],
};

const SUITE_PROFILE: RoomTypeProfile = RoomTypeProfile {
    amenities: &[
        "TV",
        "WiFi",
        "Private Bathroom",
        "King Bed",
        "Living Room",
        "Mini Bar",
        "Balcony",
    ],
};

impl RoomType {
    /// Every room type, in reporting order.
    pub const ALL: [Self; 4] = [Self::Simple, Self::Double, Self::Executive, Self::Suite];

    /// Wire tag for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Double => "double",
            Self::Executive => "executive",
            Self::Suite => "suite",
        }
    }

    /// Fixed defaults for this type.
    #[must_use]
    pub const fn profile(self) -> &'static RoomTypeProfile {
        match self {
            Self::Simple => &SIMPLE_PROFILE,
            Self::Double => &DOUBLE_PROFILE,
            Self::Executive => &EXECUTIVE_PROFILE,
            Self::Suite => &SUITE_PROFILE,
        }
    }

    /// Case-insensitive comparison against a caller-supplied label.
    ///
    /// # Examples
    /// ```
    /// use hotel_rooms::domain::RoomType;
    ///
    /// assert!(RoomType::Suite.matches_label("SUITE"));
    /// assert!(!RoomType::Suite.matches_label("suiteroom"));
    /// ```
    #[must_use]
    pub fn matches_label(self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tag is not one of the recognised room types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid room type: {0}")]
pub struct ParseRoomTypeError(pub String);

impl FromStr for RoomType {
    type Err = ParseRoomTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == value)
            .ok_or_else(|| ParseRoomTypeError(value.to_owned()))
    }
}

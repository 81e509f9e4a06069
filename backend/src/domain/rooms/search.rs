//! Search filters and aggregate statistics over the room collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Room, RoomType};

/// Optional filters combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSearchCriteria {
    /// Case-insensitive type tag.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    /// Exact availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    /// Inclusive lower price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Minimum room occupancy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<u32>,
}

impl RoomSearchCriteria {
    /// Whether `room` satisfies every supplied filter.
    #[must_use]
    pub fn matches(&self, room: &Room) -> bool {
        self.room_type
            .as_deref()
            .is_none_or(|label| room.room_type().matches_label(label))
            && self.is_available.is_none_or(|flag| room.is_available() == flag)
            && self.min_price.is_none_or(|min| room.base_price() >= min)
            && self.max_price.is_none_or(|max| room.base_price() <= max)
            && self.occupancy.is_none_or(|wanted| room.occupancy() >= wanted)
    }
}

/// Availability counts for one slice of the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCounts {
    /// Rooms in the slice.
    pub total: usize,
    /// Rooms currently available.
    pub available: usize,
    /// Rooms currently occupied.
    pub occupied: usize,
}

impl AvailabilityCounts {
    fn record(&mut self, available: bool) {
        self.total = self.total.saturating_add(1);
        if available {
            self.available = self.available.saturating_add(1);
        } else {
            self.occupied = self.occupied.saturating_add(1);
        }
    }
}

/// Aggregate statistics, always computed from the live collection.
///
/// `by_type` carries an entry for every [`RoomType`], zeroed when no room of
/// that type exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatistics {
    /// Total rooms.
    pub total: usize,
    /// Available rooms.
    pub available: usize,
    /// Occupied rooms.
    pub occupied: usize,
    /// Breakdown keyed by type tag.
    pub by_type: BTreeMap<RoomType, AvailabilityCounts>,
}

impl RoomStatistics {
    /// Tally `rooms`.
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        let mut overall = AvailabilityCounts::default();
        let mut by_type: BTreeMap<RoomType, AvailabilityCounts> = RoomType::ALL
            .into_iter()
            .map(|room_type| (room_type, AvailabilityCounts::default()))
            .collect();

        for room in rooms {
            overall.record(room.is_available());
            by_type
                .entry(room.room_type())
                .or_default()
                .record(room.is_available());
        }

        Self {
            total: overall.total,
            available: overall.available,
            occupied: overall.occupied,
            by_type,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::RoomFactory;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[fixture]
    fn rooms() -> Vec<Room> {
        let mut occupied = RoomFactory::create_room("double", "202", 80.0, None, now())
            .expect("valid room");
        occupied.update_status(false, now());
        vec![
            RoomFactory::create_room("simple", "101", 50.0, None, now()).expect("valid room"),
            RoomFactory::create_room("double", "201", 80.0, None, now()).expect("valid room"),
            occupied,
            RoomFactory::create_room("suite", "401", 200.0, Some(4), now()).expect("valid room"),
        ]
    }

    fn numbers(rooms: &[Room], criteria: &RoomSearchCriteria) -> Vec<String> {
        rooms
            .iter()
            .filter(|room| criteria.matches(room))
            .map(|room| room.number().to_string())
            .collect()
    }

    #[rstest]
    fn empty_criteria_match_everything(rooms: Vec<Room>) {
        assert_eq!(numbers(&rooms, &RoomSearchCriteria::default()).len(), rooms.len());
    }

    #[rstest]
    #[case(RoomSearchCriteria { room_type: Some("DOUBLE".into()), ..Default::default() }, &["201", "202"][..])]
    #[case(RoomSearchCriteria { is_available: Some(false), ..Default::default() }, &["202"][..])]
    #[case(RoomSearchCriteria { min_price: Some(80.0), max_price: Some(80.0), ..Default::default() }, &["201", "202"][..])]
    #[case(RoomSearchCriteria { occupancy: Some(3), ..Default::default() }, &["401"][..])]
    #[case(
        RoomSearchCriteria {
            room_type: Some("double".into()),
            is_available: Some(true),
            min_price: Some(80.0),
            ..Default::default()
        },
        &["201"][..]
    )]
    #[case(RoomSearchCriteria { room_type: Some("penthouse".into()), ..Default::default() }, &[][..])]
    fn filters_combine_with_and(
        rooms: Vec<Room>,
        #[case] criteria: RoomSearchCriteria,
        #[case] expected: &[&str],
    ) {
        assert_eq!(numbers(&rooms, &criteria), expected);
    }

    #[rstest]
    fn statistics_partition_the_collection(rooms: Vec<Room>) {
        let stats = RoomStatistics::from_rooms(&rooms);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.occupied, 1);
        assert_eq!(stats.total, stats.available + stats.occupied);
        assert_eq!(
            stats.by_type.values().map(|counts| counts.total).sum::<usize>(),
            stats.total
        );
        assert_eq!(
            stats.by_type.get(&RoomType::Double),
            Some(&AvailabilityCounts {
                total: 2,
                available: 1,
                occupied: 1
            })
        );
        assert_eq!(
            stats.by_type.get(&RoomType::Executive),
            Some(&AvailabilityCounts::default())
        );
    }

    #[rstest]
    fn statistics_serialise_every_type_key() {
        let stats = RoomStatistics::from_rooms(std::iter::empty::<&Room>());
        let value = serde_json::to_value(stats).expect("statistics serialise");
        let by_type = value["byType"].as_object().expect("byType is an object");
        let mut keys: Vec<&str> = by_type.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["double", "executive", "simple", "suite"]);
        assert_eq!(value["total"], serde_json::json!(0));
    }
}

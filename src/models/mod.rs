use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;

/// Availability state of a room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Reserved => "reserved",
            RoomStatus::Maintenance => "maintenance",
        };
        f.write_str(label)
    }
}

/// Core room data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub address: String,
    pub description: String,
    /// Floor area in square meters
    pub area: f64,
    pub price: f64,
    pub max_occupancy: u32,
    #[serde(default)]
    pub status: RoomStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub picture_urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
}

/// Accept `null` wherever a list is expected.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Room {
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn has_pictures(&self) -> bool {
        !self.picture_urls.is_empty()
    }
}

/// Read-only collection of rooms handed to the query engine.
///
/// Room order is the order the source delivered them in; every query that
/// returns several rooms preserves it.
#[derive(Debug, Clone)]
pub struct Catalog {
    rooms: Vec<Room>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(source: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Names that occur more than once, in first-repeat order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for room in &self.rooms {
            if !seen.insert(room.name.as_str()) && !duplicates.contains(&room.name.as_str()) {
                duplicates.push(room.name.as_str());
            }
        }
        duplicates
    }
}

impl Deref for Catalog {
    type Target = [Room];

    fn deref(&self) -> &[Room] {
        &self.rooms
    }
}

//! Room query engine.
//!
//! Every function here is a pure function over a borrowed slice of rooms.
//! Results borrow from the catalog, so nothing is cloned until a caller
//! decides to keep a room.

pub mod filter;
pub mod lookup;
pub mod sort;
pub mod suggest;
pub mod types;

pub use filter::filter;
pub use lookup::{find_by_id, find_by_name};
pub use sort::sort_for_display;
pub use suggest::{suggest, suggest_tags};
pub use types::{PriceRange, SearchParams};

/// Case-insensitive substring test shared by suggestions and tag filtering.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{Room, RoomStatus};

    pub fn room(name: &str, price: f64, tags: &[&str], pictures: &[&str]) -> Room {
        Room {
            id: format!("id-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            address: format!("{} Street", name),
            description: format!("Room {}", name),
            area: 25.0,
            price,
            max_occupancy: 2,
            status: RoomStatus::Available,
            picture_urls: pictures.iter().map(|p| p.to_string()).collect(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

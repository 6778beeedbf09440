use crate::models::Room;
use crate::query::contains_ignore_case;
use crate::query::types::{PriceRange, SearchParams};
use tracing::debug;

/// Rooms priced within `[min_price, max_price]` that carry a tag matching
/// `tag`, in catalog order.
///
/// A `None` or non-finite bound is unbounded on that side. A `None` or empty tag disables
/// the tag test. Contradictory bounds (`min > max`) give an empty result.
pub fn filter<'a>(
    rooms: &'a [Room],
    min_price: Option<f64>,
    max_price: Option<f64>,
    tag: Option<&str>,
) -> Vec<&'a Room> {
    let range = PriceRange::new(min_price, max_price);
    if range.is_contradictory() {
        debug!("Contradictory price range {:?}, nothing can match", range);
        return Vec::new();
    }

    let tag = tag.filter(|t| !t.is_empty());
    let matched: Vec<&Room> = rooms
        .iter()
        .filter(|room| range.contains(room.price))
        .filter(|room| tag.map_or(true, |t| has_matching_tag(room, t)))
        .collect();

    debug!(
        "Filter {:?} tag={:?} matched {} of {} rooms",
        range,
        tag,
        matched.len(),
        rooms.len()
    );
    matched
}

/// Same as [`filter`], taking bundled parameters.
pub fn filter_with<'a>(rooms: &'a [Room], params: &SearchParams) -> Vec<&'a Room> {
    filter(rooms, params.price.min, params.price.max, params.tag.as_deref())
}

/// True when any tag of `room` contains `tag`, ignoring case.
pub fn has_matching_tag(room: &Room, tag: &str) -> bool {
    room.tags.iter().any(|t| contains_ignore_case(t, tag))
}

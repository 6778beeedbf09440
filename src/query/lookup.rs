use crate::models::Room;
use tracing::debug;

/// The room whose name equals `name` exactly (case-sensitive).
pub fn find_by_name<'a>(rooms: &'a [Room], name: &str) -> Option<&'a Room> {
    let found = rooms.iter().find(|room| room.name == name);
    if found.is_none() {
        debug!("No room named {:?}", name);
    }
    found
}

/// The room with the given id.
pub fn find_by_id<'a>(rooms: &'a [Room], id: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::room;

    #[test]
    fn test_every_room_found_by_name() {
        let rooms = vec![room("Deluxe 101", 500.0, &[], &[]), room("Suite 2", 900.0, &[], &[])];
        for r in &rooms {
            assert_eq!(find_by_name(&rooms, &r.name), Some(r));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let rooms = vec![room("Deluxe 101", 500.0, &[], &[])];
        assert!(find_by_name(&rooms, "deluxe 101").is_none());
        assert!(find_by_name(&rooms, "Deluxe").is_none());
        assert!(find_by_name(&rooms, "nonexistent").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let rooms = vec![room("Deluxe 101", 500.0, &[], &[])];
        assert_eq!(
            find_by_id(&rooms, "id-deluxe-101").map(|r| r.name.as_str()),
            Some("Deluxe 101")
        );
        assert!(find_by_id(&rooms, "missing").is_none());
    }
}

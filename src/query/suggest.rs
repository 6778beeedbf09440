use crate::models::Room;
use crate::query::contains_ignore_case;
use std::collections::HashSet;

/// Names of rooms containing `partial_name`, ignoring case, in catalog order.
///
/// Empty input gives no suggestions.
pub fn suggest<'a>(rooms: &'a [Room], partial_name: &str) -> Vec<&'a str> {
    if partial_name.is_empty() {
        return Vec::new();
    }

    rooms
        .iter()
        .filter(|room| contains_ignore_case(&room.name, partial_name))
        .map(|room| room.name.as_str())
        .collect()
}

/// Distinct tags containing `partial_tag`, ignoring case.
///
/// Tags are deduplicated case-insensitively and returned in first-seen order,
/// spelled the way they were first seen. Empty input gives no suggestions.
pub fn suggest_tags<'a>(rooms: &'a [Room], partial_tag: &str) -> Vec<&'a str> {
    if partial_tag.is_empty() {
        return Vec::new();
    }

    let needle = partial_tag.to_lowercase();
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for tag in rooms.iter().flat_map(|room| room.tags.iter()) {
        let folded = tag.to_lowercase();
        if folded.contains(&needle) && seen.insert(folded) {
            tags.push(tag.as_str());
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::room;

    #[test]
    fn test_empty_input_has_no_suggestions() {
        let rooms = vec![room("Deluxe 101", 500.0, &["wifi"], &[])];
        assert!(suggest(&rooms, "").is_empty());
        assert!(suggest_tags(&rooms, "").is_empty());
    }

    #[test]
    fn test_substring_match_in_catalog_order() {
        let rooms = vec![
            room("Suite 10", 1.0, &[], &[]),
            room("Deluxe 101", 1.0, &[], &[]),
            room("Standard 2", 1.0, &[], &[]),
            room("Deluxe 102", 1.0, &[], &[]),
        ];

        assert_eq!(suggest(&rooms, "10"), vec!["Suite 10", "Deluxe 101", "Deluxe 102"]);
        assert_eq!(suggest(&rooms, "dELUXE"), vec!["Deluxe 101", "Deluxe 102"]);
        assert!(suggest(&rooms, "penthouse").is_empty());
    }

    #[test]
    fn test_tags_deduplicated_first_seen() {
        let rooms = vec![
            room("A", 1.0, &["WiFi", "garden"], &[]),
            room("B", 1.0, &["wifi", "Garage"], &[]),
            room("C", 1.0, &["pool"], &[]),
        ];

        assert_eq!(suggest_tags(&rooms, "GA"), vec!["garden", "Garage"]);
        assert_eq!(suggest_tags(&rooms, "fi"), vec!["WiFi"]);
        assert!(suggest_tags(&rooms, "sauna").is_empty());
    }
}

use crate::models::Room;

/// Order rooms for the list view.
///
/// Tagged rooms come first, then within each group rooms with pictures come
/// before rooms without. Everything else keeps its input order. Price plays
/// no part.
pub fn sort_for_display<'a>(rooms: &[&'a Room]) -> Vec<&'a Room> {
    let mut sorted = rooms.to_vec();
    // `sort_by_key` is stable
    sorted.sort_by_key(|room| (!room.has_tags(), !room.has_pictures()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::room;

    fn names<'a>(rooms: &[&'a Room]) -> Vec<&'a str> {
        rooms.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_tags_then_pictures() {
        let a = room("A", 10.0, &[], &[]);
        let b = room("B", 20.0, &["ac"], &["u1"]);
        let c = room("C", 30.0, &[], &["u2"]);

        let sorted = sort_for_display(&[&a, &b, &c]);
        assert_eq!(names(&sorted), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_tagged_without_picture_beats_untagged_with_picture() {
        let a = room("A", 10.0, &[], &["u1"]);
        let b = room("B", 20.0, &["wifi"], &[]);

        assert_eq!(names(&sort_for_display(&[&a, &b])), vec!["B", "A"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = room("A", 300.0, &["x"], &["u"]);
        let b = room("B", 100.0, &["y"], &["v"]);
        let c = room("C", 200.0, &["z"], &["w"]);

        assert_eq!(names(&sort_for_display(&[&a, &b, &c])), vec!["A", "B", "C"]);
        assert_eq!(names(&sort_for_display(&[&c, &a, &b])), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_idempotent() {
        let a = room("A", 10.0, &[], &[]);
        let b = room("B", 20.0, &["ac"], &[]);
        let c = room("C", 30.0, &[], &["u2"]);
        let d = room("D", 40.0, &["x"], &["u3"]);

        let once = sort_for_display(&[&a, &b, &c, &d]);
        let twice = sort_for_display(&once);
        assert_eq!(names(&once), vec!["D", "B", "C", "A"]);
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_for_display(&[]).is_empty());
    }
}

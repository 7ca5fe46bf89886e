//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Every persisted record (stock item, movement, order, employee, customer)
/// is identified by an opaque string id assigned at creation.
pub trait Entity {
    /// Returns the entity identifier.
    fn id(&self) -> &str;
}

/// Find an entity by id in a collection.
pub fn find_by_id<'a, E: Entity>(records: &'a [E], id: &str) -> Option<&'a E> {
    records.iter().find(|r| r.id() == id)
}

/// Index of the entity with the given id, if present.
pub fn position_of<E: Entity>(records: &[E], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec(&'static str);

    impl Entity for Rec {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn finds_by_id() {
        let recs = vec![Rec("a"), Rec("b")];
        assert_eq!(find_by_id(&recs, "b").map(|r| r.0), Some("b"));
        assert_eq!(position_of(&recs, "b"), Some(1));
        assert!(find_by_id(&recs, "c").is_none());
    }
}

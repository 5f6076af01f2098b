//! Ownership classification of a live path

use crate::models::{Identity, Ownership};
use chrono::{DateTime, FixedOffset};

/// Classify one path. First match wins:
/// `Complete` > `Partial` > `Inherited` > `None`.
///
/// # Arguments
/// * `owners` - Contributors who touched the path
/// * `created_on` - When the path was first added
/// * `last_active` - Last commit time of the distinguished contributor
/// * `distinguished` - The distinguished identity
pub fn classify(
    owners: &Identity,
    created_on: DateTime<FixedOffset>,
    last_active: DateTime<FixedOffset>,
    distinguished: &Identity,
) -> Ownership {
    if owners == distinguished {
        Ownership::Complete
    } else if owners.intersects(distinguished) {
        Ownership::Partial
    } else if created_on < last_active {
        Ownership::Inherited
    } else {
        Ownership::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::commit_timestamp;

    fn vijay() -> Identity {
        Identity::pair("Vijay Ganesh", Some("David L. Dill"))
    }

    fn at(secs: i64) -> DateTime<FixedOffset> {
        commit_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_exact_identity_is_complete() {
        assert_eq!(classify(&vijay(), at(0), at(10), &vijay()), Ownership::Complete);
        // Complete wins even when created after the last activity
        assert_eq!(classify(&vijay(), at(20), at(10), &vijay()), Ownership::Complete);
    }

    #[test]
    fn test_shared_ownership_is_partial() {
        let mut owners = vijay();
        owners.merge(&Identity::single("Alice"));
        assert_eq!(classify(&owners, at(0), at(10), &vijay()), Ownership::Partial);

        // Overlap on the co-attributed name alone is enough
        let mut owners = Identity::single("David L. Dill");
        owners.merge(&Identity::single("Bob"));
        assert_eq!(classify(&owners, at(20), at(10), &vijay()), Ownership::Partial);
    }

    #[test]
    fn test_untouched_file_before_last_activity_is_inherited() {
        let owners = Identity::single("Bob");
        assert_eq!(classify(&owners, at(5), at(10), &vijay()), Ownership::Inherited);
    }

    #[test]
    fn test_untouched_file_after_last_activity_is_none() {
        let owners = Identity::single("Bob");
        assert_eq!(classify(&owners, at(15), at(10), &vijay()), Ownership::None);
        // Strictly earlier is required
        assert_eq!(classify(&owners, at(10), at(10), &vijay()), Ownership::None);
    }

    #[test]
    fn test_offsets_compare_by_instant() {
        let owners = Identity::single("Bob");
        let created = commit_timestamp(1_000, 120).unwrap();
        let last = commit_timestamp(1_001, -300).unwrap();
        assert_eq!(classify(&owners, created, last, &vijay()), Ownership::Inherited);
    }
}

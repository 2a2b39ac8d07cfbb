//! Field checks applied to an entry before it reaches the store.

use crate::{EngineError, Entry, ResultEngine};

/// Checks that `entry` can be persisted.
///
/// Fields are checked in a fixed order (description, month, year, owner,
/// value, type) and only the first violation is reported.
pub fn validate_entry(entry: &Entry) -> ResultEngine<()> {
    let invalid = |reason: &str| Err(EngineError::Validation(reason.to_string()));

    if entry
        .description
        .as_deref()
        .is_none_or(|description| description.trim().is_empty())
    {
        return invalid("invalid description");
    }
    if entry.month.is_none_or(|month| !(1..=12).contains(&month)) {
        return invalid("invalid month");
    }
    if entry.year.is_none() {
        return invalid("invalid year");
    }
    if entry.owner.is_none() {
        return invalid("invalid user");
    }
    if entry.value.is_none_or(|value| !value.is_positive()) {
        return invalid("invalid value");
    }
    if entry.entry_type.is_none() {
        return invalid("missing entry type");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::{EntryType, MoneyCents};

    fn valid_entry() -> Entry {
        Entry {
            description: Some("Rent".to_string()),
            month: Some(3),
            year: Some(2020),
            value: Some(MoneyCents::new(100_000)),
            entry_type: Some(EntryType::Expense),
            owner: Some(Uuid::new_v4()),
            ..Default::default()
        }
    }

    fn reason(entry: &Entry) -> String {
        match validate_entry(entry) {
            Err(EngineError::Validation(reason)) => reason,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_complete_entry() {
        assert_eq!(validate_entry(&valid_entry()), Ok(()));
    }

    #[test]
    fn status_is_not_required() {
        let entry = valid_entry();
        assert!(entry.status.is_none());
        assert!(validate_entry(&entry).is_ok());
    }

    #[test]
    fn reports_first_missing_field_in_order() {
        let mut entry = Entry::default();
        assert_eq!(reason(&entry), "invalid description");

        entry.description = Some("Test".to_string());
        assert_eq!(reason(&entry), "invalid month");

        entry.month = Some(2);
        assert_eq!(reason(&entry), "invalid year");

        entry.year = Some(2020);
        assert_eq!(reason(&entry), "invalid user");

        entry.owner = Some(Uuid::new_v4());
        assert_eq!(reason(&entry), "invalid value");

        entry.value = Some(MoneyCents::new(1000));
        assert_eq!(reason(&entry), "missing entry type");

        entry.entry_type = Some(EntryType::Income);
        assert!(validate_entry(&entry).is_ok());
    }

    #[test]
    fn blank_description_is_invalid() {
        let mut entry = valid_entry();
        entry.description = Some("   ".to_string());
        assert_eq!(reason(&entry), "invalid description");
    }

    #[test]
    fn month_out_of_range_is_invalid() {
        let mut entry = valid_entry();
        entry.month = Some(13);
        assert_eq!(reason(&entry), "invalid month");

        entry.month = Some(0);
        assert_eq!(reason(&entry), "invalid month");

        entry.month = Some(12);
        assert!(validate_entry(&entry).is_ok());
    }

    #[test]
    fn non_positive_value_is_invalid() {
        let mut entry = valid_entry();
        entry.value = Some(MoneyCents::ZERO);
        assert_eq!(reason(&entry), "invalid value");

        entry.value = Some(MoneyCents::new(-1));
        assert_eq!(reason(&entry), "invalid value");
    }

    #[test]
    fn earlier_violation_wins() {
        let mut entry = valid_entry();
        entry.month = Some(13);
        entry.value = None;
        entry.entry_type = None;
        assert_eq!(reason(&entry), "invalid month");
    }
}

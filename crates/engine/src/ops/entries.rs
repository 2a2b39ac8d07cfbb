use uuid::Uuid;

use crate::{
    EngineError, Entry, EntryFilter, EntryStatus, EntryStore, EntryType, MoneyCents,
    ResultEngine, validate_entry,
};

fn require_id(entry: &Entry) -> ResultEngine<Uuid> {
    entry
        .id
        .ok_or_else(|| EngineError::KeyNotFound("entry id".to_string()))
}

/// Entry use cases: validation, persistence, status changes and balances.
#[derive(Clone, Debug)]
pub struct EntryService<S> {
    store: S,
}

impl<S: EntryStore> EntryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and inserts a new entry.
    ///
    /// A missing status defaults to [`EntryStatus::Pending`]. Nothing reaches
    /// the store when validation fails.
    pub async fn save(&self, mut entry: Entry) -> ResultEngine<Entry> {
        validate_entry(&entry)?;
        entry.status.get_or_insert_default();

        let saved = self.store.create(&entry).await?;
        tracing::info!(
            "saved entry {:?} for user {:?}",
            saved.id,
            saved.owner
        );
        Ok(saved)
    }

    /// Validates and overwrites an existing entry.
    ///
    /// The entry must carry the id of an existing row.
    pub async fn update(&self, entry: Entry) -> ResultEngine<Entry> {
        require_id(&entry)?;
        validate_entry(&entry)?;
        self.store.update(&entry).await
    }

    pub async fn delete(&self, entry: &Entry) -> ResultEngine<()> {
        let id = require_id(entry)?;
        self.store.delete(id).await?;
        tracing::info!("deleted entry {id}");
        Ok(())
    }

    /// Replaces the status and persists the entry through [`update`].
    ///
    /// Every transition is allowed, including back to `Pending`.
    ///
    /// [`update`]: EntryService::update
    pub async fn update_status(
        &self,
        mut entry: Entry,
        status: EntryStatus,
    ) -> ResultEngine<Entry> {
        entry.status = Some(status);
        self.update(entry).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<Entry>> {
        self.store.find_by_id(id).await
    }

    pub async fn search(&self, filter: &EntryFilter) -> ResultEngine<Vec<Entry>> {
        self.store.find_by_filter(filter).await
    }

    /// Income minus expenses over every entry of the user, whatever its
    /// status.
    pub async fn balance_for_user(&self, user_id: Uuid) -> ResultEngine<MoneyCents> {
        let income = self
            .store
            .sum_by_owner_and_type(user_id, EntryType::Income)
            .await?;
        let expense = self
            .store
            .sum_by_owner_and_type(user_id, EntryType::Expense)
            .await?;

        let balance = income
            .checked_sub(expense)
            .ok_or_else(|| EngineError::Overflow("balance overflow".to_string()))?;
        tracing::debug!("balance of user {user_id}: {balance}");
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fake::{Call, FakeStore};

    fn owner() -> Uuid {
        Uuid::from_u128(1)
    }

    fn rent() -> Entry {
        Entry {
            description: Some("Rent".to_string()),
            month: Some(3),
            year: Some(2020),
            value: Some(MoneyCents::new(100_000)),
            entry_type: Some(EntryType::Expense),
            owner: Some(owner()),
            ..Default::default()
        }
    }

    fn service() -> EntryService<FakeStore> {
        EntryService::new(FakeStore::default())
    }

    #[tokio::test]
    async fn save_defaults_status_to_pending() {
        let service = service();

        let saved = service.save(rent()).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.registration_date.is_some());
        assert_eq!(saved.status, Some(EntryStatus::Pending));
    }

    #[tokio::test]
    async fn save_keeps_explicit_status() {
        let service = service();
        let mut entry = rent();
        entry.status = Some(EntryStatus::Settled);

        let saved = service.save(entry).await.unwrap();

        assert_eq!(saved.status, Some(EntryStatus::Settled));
    }

    #[tokio::test]
    async fn save_invalid_entry_never_reaches_store() {
        let service = service();
        let mut entry = rent();
        entry.month = Some(13);

        let err = service.save(entry).await.unwrap_err();

        assert_eq!(err, EngineError::Validation("invalid month".to_string()));
        assert!(service.store.calls().is_empty());
    }

    #[tokio::test]
    async fn update_persists_existing_entry() {
        let service = service();
        let mut saved = service.save(rent()).await.unwrap();
        saved.description = Some("Rent (March)".to_string());

        let updated = service.update(saved.clone()).await.unwrap();

        assert_eq!(updated.description.as_deref(), Some("Rent (March)"));
        assert_eq!(updated.registration_date, saved.registration_date);
        assert_eq!(
            service.store.calls().last(),
            Some(&Call::Update(saved.id.unwrap()))
        );
    }

    #[tokio::test]
    async fn update_without_id_is_not_found() {
        let service = service();

        let err = service.update(rent()).await.unwrap_err();

        assert!(matches!(err, EngineError::KeyNotFound(_)));
        assert!(service.store.calls().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let service = service();
        let mut entry = rent();
        entry.id = Some(Uuid::new_v4());

        let err = service.update(entry).await.unwrap_err();

        assert!(matches!(err, EngineError::KeyNotFound(_)));
    }

    #[tokio::test]
    async fn update_revalidates() {
        let service = service();
        let mut saved = service.save(rent()).await.unwrap();
        saved.value = Some(MoneyCents::ZERO);

        let err = service.update(saved).await.unwrap_err();

        assert_eq!(err, EngineError::Validation("invalid value".to_string()));
        assert_eq!(service.store.calls().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let service = service();
        let saved = service.save(rent()).await.unwrap();
        let id = saved.id.unwrap();

        service.delete(&saved).await.unwrap();

        assert_eq!(service.store.calls().last(), Some(&Call::Delete(id)));
        assert_eq!(service.find_by_id(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_without_id_is_not_found() {
        let service = service();

        let err = service.delete(&rent()).await.unwrap_err();

        assert!(matches!(err, EngineError::KeyNotFound(_)));
        assert!(service.store.calls().is_empty());
    }

    #[tokio::test]
    async fn update_status_allows_any_transition() {
        let service = service();
        let saved = service.save(rent()).await.unwrap();

        let settled = service
            .update_status(saved, EntryStatus::Settled)
            .await
            .unwrap();
        assert_eq!(settled.status, Some(EntryStatus::Settled));

        let cancelled = service
            .update_status(settled, EntryStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(cancelled.status, Some(EntryStatus::Cancelled));

        let pending = service
            .update_status(cancelled, EntryStatus::Pending)
            .await
            .unwrap();
        assert_eq!(pending.status, Some(EntryStatus::Pending));
    }

    #[tokio::test]
    async fn find_by_id_absence_is_not_an_error() {
        let service = service();

        assert_eq!(service.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn search_matches_set_fields_only() {
        let service = service();
        service.save(rent()).await.unwrap();
        let mut salary = rent();
        salary.description = Some("Salary".to_string());
        salary.entry_type = Some(EntryType::Income);
        salary.month = Some(4);
        service.save(salary).await.unwrap();

        let all = service
            .search(&EntryFilter {
                owner: Some(owner()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let march = service
            .search(&EntryFilter {
                month: Some(3),
                owner: Some(owner()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(march.len(), 1);
        assert_eq!(march[0].description.as_deref(), Some("Rent"));

        let other_user = service
            .search(&EntryFilter {
                owner: Some(Uuid::from_u128(2)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(other_user.is_empty());
    }

    #[tokio::test]
    async fn balance_is_income_minus_expense() {
        let service = service();
        let mut salary = rent();
        salary.description = Some("Salary".to_string());
        salary.entry_type = Some(EntryType::Income);
        salary.value = Some(MoneyCents::new(1000));
        service.save(salary).await.unwrap();

        let mut groceries = rent();
        groceries.value = Some(MoneyCents::new(300));
        service.save(groceries).await.unwrap();

        assert_eq!(
            service.balance_for_user(owner()).await.unwrap(),
            MoneyCents::new(700)
        );
    }

    #[tokio::test]
    async fn balance_counts_every_status() {
        let service = service();
        let mut cancelled = rent();
        cancelled.status = Some(EntryStatus::Cancelled);
        cancelled.value = Some(MoneyCents::new(250));
        service.save(cancelled).await.unwrap();

        assert_eq!(
            service.balance_for_user(owner()).await.unwrap(),
            MoneyCents::new(-250)
        );
    }

    #[tokio::test]
    async fn balance_overflow_is_reported() {
        let service = service();
        for description in ["Lottery", "Inheritance"] {
            let mut income = rent();
            income.description = Some(description.to_string());
            income.entry_type = Some(EntryType::Income);
            income.value = Some(MoneyCents::new(i64::MAX));
            service.save(income).await.unwrap();
        }

        assert_eq!(
            service.balance_for_user(owner()).await,
            Err(EngineError::Overflow("balance overflow".to_string()))
        );
    }

    #[tokio::test]
    async fn balance_without_entries_is_zero() {
        let service = service();

        assert_eq!(
            service.balance_for_user(Uuid::new_v4()).await.unwrap(),
            MoneyCents::ZERO
        );
    }
}

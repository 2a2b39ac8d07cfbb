//! In-memory store used by the service unit tests.
//!
//! Writes are recorded so tests can assert the store was (or was not) hit.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{EngineError, Entry, EntryType, MoneyCents, ResultEngine, User};

use super::{EntryFilter, EntryStore, UserStore};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Create,
    Update(Uuid),
    Delete(Uuid),
    CreateUser(String),
}

#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    entries: Mutex<Vec<Entry>>,
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStore {
    pub(crate) fn with_user(user: User) -> Self {
        let store = Self::default();
        store.users.lock().unwrap().push(user);
        store
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn matches(filter: &EntryFilter, entry: &Entry) -> bool {
    filter
        .description
        .as_ref()
        .is_none_or(|d| entry.description.as_ref() == Some(d))
        && filter.month.is_none_or(|m| entry.month == Some(m))
        && filter.year.is_none_or(|y| entry.year == Some(y))
        && filter.owner.is_none_or(|o| entry.owner == Some(o))
}

#[async_trait]
impl EntryStore for FakeStore {
    async fn create(&self, entry: &Entry) -> ResultEngine<Entry> {
        self.record(Call::Create);
        let mut saved = entry.clone();
        saved.id = Some(Uuid::new_v4());
        saved.registration_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        self.entries.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, entry: &Entry) -> ResultEngine<Entry> {
        let id = entry
            .id
            .ok_or_else(|| EngineError::KeyNotFound("entry id".to_string()))?;
        self.record(Call::Update(id));
        let mut entries = self.entries.lock().unwrap();
        let stored = entries
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or_else(|| EngineError::KeyNotFound(format!("entry {id}")))?;
        let registration_date = stored.registration_date;
        *stored = entry.clone();
        stored.registration_date = registration_date;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> ResultEngine<()> {
        self.record(Call::Delete(id));
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != Some(id));
        if entries.len() == before {
            return Err(EngineError::KeyNotFound(format!("entry {id}")));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<Entry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == Some(id))
            .cloned())
    }

    async fn find_by_filter(&self, filter: &EntryFilter) -> ResultEngine<Vec<Entry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches(filter, e))
            .cloned()
            .collect())
    }

    async fn sum_by_owner_and_type(
        &self,
        owner: Uuid,
        entry_type: EntryType,
    ) -> ResultEngine<MoneyCents> {
        let entries = self.entries.lock().unwrap();
        super::checked_total(
            entries
                .iter()
                .filter(|e| e.owner == Some(owner) && e.entry_type == Some(entry_type))
                .filter_map(|e| e.value),
        )
    }
}

#[async_trait]
impl UserStore for FakeStore {
    async fn create(&self, user: &User) -> ResultEngine<User> {
        self.record(Call::CreateUser(user.email.clone()));
        self.users.lock().unwrap().push(user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> ResultEngine<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> ResultEngine<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }
}

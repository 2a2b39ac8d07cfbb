//! Store ports - persistence abstraction for entries and users.
//!
//! The services only talk to these traits. [`DatabaseStore`] implements both
//! on top of a sea-orm connection; tests plug in-memory fakes instead.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{EngineError, Entry, EntryType, MoneyCents, ResultEngine, User};

pub use database::DatabaseStore;

mod database;
#[cfg(test)]
pub(crate) mod fake;

/// Equality filter over entries.
///
/// Every field left to `None` matches any value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub owner: Option<Uuid>,
}

/// Adds up entry values, failing with `Overflow` instead of wrapping.
fn checked_total(mut values: impl Iterator<Item = MoneyCents>) -> ResultEngine<MoneyCents> {
    values
        .try_fold(MoneyCents::ZERO, MoneyCents::checked_add)
        .ok_or_else(|| EngineError::Overflow("balance overflow".to_string()))
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a new row, assigning its id and registration date.
    async fn create(&self, entry: &Entry) -> ResultEngine<Entry>;

    /// Overwrite the row identified by `entry.id`.
    ///
    /// Fails with `KeyNotFound` if there is no such row. The registration
    /// date is never touched.
    async fn update(&self, entry: &Entry) -> ResultEngine<Entry>;

    /// Remove a row, failing with `KeyNotFound` if it does not exist.
    async fn delete(&self, id: Uuid) -> ResultEngine<()>;

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<Entry>>;

    async fn find_by_filter(&self, filter: &EntryFilter) -> ResultEngine<Vec<Entry>>;

    /// Sum of the values of every entry of `owner` with the given type,
    /// regardless of status. Zero when there is none, `Overflow` when the
    /// total does not fit in cents.
    async fn sum_by_owner_and_type(
        &self,
        owner: Uuid,
        entry_type: EntryType,
    ) -> ResultEngine<MoneyCents>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. A duplicate email fails with `BusinessRule`.
    async fn create(&self, user: &User) -> ResultEngine<User>;

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<User>>;

    async fn find_by_email(&self, email: &str) -> ResultEngine<Option<User>>;

    async fn exists_by_email(&self, email: &str) -> ResultEngine<bool>;
}

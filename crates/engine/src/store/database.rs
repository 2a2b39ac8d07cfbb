use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveValue, DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    SqlErr, prelude::*,
};
use uuid::Uuid;

use crate::{
    EngineError, Entry, EntryType, MoneyCents, ResultEngine, User, entries, users,
};

use super::{EntryFilter, EntryStore, UserStore};

/// Sea-orm backed store for both entries and users.
#[derive(Clone, Debug)]
pub struct DatabaseStore {
    database: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

fn entry_not_found(id: Uuid) -> EngineError {
    EngineError::KeyNotFound(format!("entry {id}"))
}

#[async_trait]
impl EntryStore for DatabaseStore {
    async fn create(&self, entry: &Entry) -> ResultEngine<Entry> {
        let mut model = entries::ActiveModel::from(entry);
        model.id = ActiveValue::Set(Uuid::new_v4());
        model.registration_date = ActiveValue::Set(Utc::now().date_naive());

        let model = model.insert(&self.database).await?;
        tracing::debug!("inserted entry {}", model.id);
        Entry::try_from(model)
    }

    async fn update(&self, entry: &Entry) -> ResultEngine<Entry> {
        let id = entry
            .id
            .ok_or_else(|| EngineError::KeyNotFound("entry id".to_string()))?;
        let mut model = entries::ActiveModel::from(entry);
        model.id = ActiveValue::Unchanged(id);

        match model.update(&self.database).await {
            Ok(model) => {
                tracing::debug!("updated entry {id}");
                Entry::try_from(model)
            }
            Err(DbErr::RecordNotUpdated) => Err(entry_not_found(id)),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> ResultEngine<()> {
        let result = entries::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(entry_not_found(id));
        }
        tracing::debug!("deleted entry {id}");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<Entry>> {
        entries::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Entry::try_from)
            .transpose()
    }

    async fn find_by_filter(&self, filter: &EntryFilter) -> ResultEngine<Vec<Entry>> {
        let mut query = entries::Entity::find();
        if let Some(description) = &filter.description {
            query = query.filter(entries::Column::Description.eq(description.clone()));
        }
        if let Some(month) = filter.month {
            query = query.filter(entries::Column::Month.eq(month));
        }
        if let Some(year) = filter.year {
            query = query.filter(entries::Column::Year.eq(year));
        }
        if let Some(owner) = filter.owner {
            query = query.filter(entries::Column::UserId.eq(owner));
        }

        query
            .order_by_asc(entries::Column::RegistrationDate)
            .order_by_asc(entries::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Entry::try_from)
            .collect()
    }

    async fn sum_by_owner_and_type(
        &self,
        owner: Uuid,
        entry_type: EntryType,
    ) -> ResultEngine<MoneyCents> {
        let values = entries::Entity::find()
            .select_only()
            .column(entries::Column::ValueMinor)
            .filter(entries::Column::UserId.eq(owner))
            .filter(entries::Column::EntryType.eq(entry_type.as_str()))
            .into_tuple::<i64>()
            .all(&self.database)
            .await?;

        super::checked_total(values.into_iter().map(MoneyCents::new))
    }
}

#[async_trait]
impl UserStore for DatabaseStore {
    async fn create(&self, user: &User) -> ResultEngine<User> {
        match users::ActiveModel::from(user).insert(&self.database).await {
            Ok(model) => Ok(model.into()),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(EngineError::BusinessRule(
                    "email already registered".to_string(),
                ))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<User>> {
        Ok(users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> ResultEngine<Option<User>> {
        Ok(users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.database)
            .await?
            .map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> ResultEngine<bool> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.database)
            .await?;
        Ok(count > 0)
    }
}

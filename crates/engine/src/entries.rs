//! Entry primitives.
//!
//! An [`Entry`] is a single income or expense record owned by a user, tagged
//! with the month/year it belongs to and a lifecycle [`EntryStatus`].
//!
//! Every field of the in-memory entry is optional: an entry built from user
//! input may be incomplete until [`validate_entry`](crate::validate_entry)
//! accepts it. Rows in the `entries` table always have every column set.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{EngineError, MoneyCents};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl TryFrom<&str> for EntryType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(EngineError::Validation("invalid entry type".to_string())),
        }
    }
}

/// Lifecycle of an entry.
///
/// New entries start as `Pending`. The engine does not restrict transitions:
/// any status can be replaced by any other one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    #[default]
    Pending,
    Settled,
    Cancelled,
}

impl EntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Settled => "SETTLED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl TryFrom<&str> for EntryStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "PENDING" => Ok(Self::Pending),
            "SETTLED" => Ok(Self::Settled),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(EngineError::Validation("invalid status".to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// Assigned by the store on creation.
    pub id: Option<Uuid>,
    pub description: Option<String>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub value: Option<MoneyCents>,
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
    /// Id of the owning user.
    pub owner: Option<Uuid>,
    /// Set by the store on creation, never updated afterwards.
    pub registration_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub month: i32,
    pub year: i32,
    pub value_minor: i64,
    pub entry_type: String,
    pub status: String,
    pub user_id: Uuid,
    pub registration_date: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Builds the mutable columns of a row from a validated entry.
///
/// `id` and `registration_date` are left unset; the store decides them.
impl From<&Entry> for ActiveModel {
    fn from(entry: &Entry) -> Self {
        Self {
            id: ActiveValue::NotSet,
            description: set_or_not(entry.description.clone()),
            month: set_or_not(entry.month),
            year: set_or_not(entry.year),
            value_minor: set_or_not(entry.value.map(MoneyCents::cents)),
            entry_type: set_or_not(entry.entry_type.map(|t| t.as_str().to_string())),
            status: set_or_not(entry.status.map(|s| s.as_str().to_string())),
            user_id: set_or_not(entry.owner),
            registration_date: ActiveValue::NotSet,
        }
    }
}

fn set_or_not<V: Into<sea_orm::Value>>(value: Option<V>) -> ActiveValue<V> {
    match value {
        Some(value) => ActiveValue::Set(value),
        None => ActiveValue::NotSet,
    }
}

impl TryFrom<Model> for Entry {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(model.id),
            description: Some(model.description),
            month: Some(model.month),
            year: Some(model.year),
            value: Some(MoneyCents::new(model.value_minor)),
            entry_type: Some(EntryType::try_from(model.entry_type.as_str())?),
            status: Some(EntryStatus::try_from(model.status.as_str())?),
            owner: Some(model.user_id),
            registration_date: Some(model.registration_date),
        })
    }
}

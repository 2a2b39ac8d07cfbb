use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod user {
    use super::*;

    /// Registration request.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserNew {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserCredentials {
        pub email: String,
        pub password: String,
    }

    /// A user as returned by the API (the password hash is never exposed).
    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserView {
        pub id: Uuid,
        pub name: String,
        pub email: String,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Balance {
        pub user_id: Uuid,
        /// Income minus expenses, in cents. Negative when expenses win.
        pub balance_minor: i64,
    }
}

pub mod entry {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum EntryType {
        Income,
        Expense,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum EntryStatus {
        Pending,
        Settled,
        Cancelled,
    }

    /// Body of create and update requests.
    ///
    /// Every field is optional; missing or unknown values are reported by the
    /// engine validation.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EntryPayload {
        pub description: Option<String>,
        pub month: Option<i32>,
        pub year: Option<i32>,
        /// Decimal amount, `.` or `,` separated (e.g. `"1000.50"`).
        pub value: Option<String>,
        /// `INCOME` or `EXPENSE`.
        #[serde(rename = "type")]
        pub entry_type: Option<String>,
        /// `PENDING`, `SETTLED` or `CANCELLED`.
        pub status: Option<String>,
        /// Owner id.
        pub user: Option<Uuid>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct StatusUpdate {
        pub status: String,
    }

    /// Query string of the search endpoint. `user` is required.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EntrySearch {
        pub description: Option<String>,
        pub month: Option<i32>,
        pub year: Option<i32>,
        pub user: Option<Uuid>,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: Uuid,
        pub description: String,
        pub month: i32,
        pub year: i32,
        pub value_minor: i64,
        #[serde(rename = "type")]
        pub entry_type: EntryType,
        pub status: EntryStatus,
        pub user: Uuid,
        pub registration_date: NaiveDate,
    }
}

use sea_orm::DatabaseConnection;

use crate::{DatabaseStore, ResultEngine};

mod entries;
mod users;

pub use entries::EntryService;
pub use users::UserService;

/// Entry point of the engine: the entry and user services wired to the
/// database.
#[derive(Debug)]
pub struct Engine {
    entries: EntryService<DatabaseStore>,
    users: UserService<DatabaseStore>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn entries(&self) -> &EntryService<DatabaseStore> {
        &self.entries
    }

    pub fn users(&self) -> &UserService<DatabaseStore> {
        &self.users
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        self.database.ping().await?;

        let store = DatabaseStore::new(self.database);
        Ok(Engine {
            entries: EntryService::new(store.clone()),
            users: UserService::new(store),
        })
    }
}

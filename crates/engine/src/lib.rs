//! Domain engine for personal finance entries.
//!
//! Users own entries (incomes and expenses). The engine validates entries,
//! persists them through the [`EntryStore`]/[`UserStore`] ports and computes
//! per-user balances.
pub use credentials::{hash_password, verify_password};
pub use entries::{Entry, EntryStatus, EntryType};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder, EntryService, UserService};
pub use store::{DatabaseStore, EntryFilter, EntryStore, UserStore};
pub use users::{NewUser, User};
pub use validation::validate_entry;

mod credentials;
pub mod entries;
mod error;
mod money;
mod ops;
mod store;
pub mod users;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;

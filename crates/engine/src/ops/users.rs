use uuid::Uuid;

use crate::{
    EngineError, NewUser, ResultEngine, User, UserStore,
    credentials::{hash_password, verify_password},
};

/// Registration and authentication of users.
#[derive(Clone, Debug)]
pub struct UserService<S> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Looks the user up by email and checks the password against the stored
    /// hash.
    pub async fn authenticate(&self, email: &str, password: &str) -> ResultEngine<User> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| EngineError::Authentication("no such user".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!("wrong password for user {}", user.id);
            return Err(EngineError::Authentication("wrong password".to_string()));
        }
        Ok(user)
    }

    /// Fails with a business rule error if `email` is already taken.
    pub async fn validate_email(&self, email: &str) -> ResultEngine<()> {
        if self.store.exists_by_email(email).await? {
            return Err(EngineError::BusinessRule(
                "email already registered".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn register(&self, new_user: NewUser) -> ResultEngine<User> {
        self.validate_email(&new_user.email).await?;

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: hash_password(&new_user.password)?,
        };
        let user = self.store.create(&user).await?;
        tracing::info!("registered user {}", user.id);
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> ResultEngine<Option<User>> {
        self.store.find_by_id(id).await
    }
}

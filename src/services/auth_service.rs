//! Authentication service for account registration and credential checks.

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, Role, User};
use crate::repositories::UserRepository;
use crate::utils::password::{hash_password, verify_password};

/// Auth service wrapping the `UserRepository`.
///
/// Session issuance lives in the HTTP layer; this service only deals with
/// accounts and credentials.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    /// Creates a new AuthService with the given repository.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Registers a new account.
    ///
    /// Username and email must be unused. The password is hashed with Argon2
    /// before storage. An absent role defaults to the least-privileged one.
    ///
    /// # Returns
    /// The created user, or `Duplicate` when username/email is taken
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Option<&str>,
    ) -> AppResult<User> {
        let role = match role {
            Some(value) => value
                .parse::<Role>()
                .map_err(|e| AppError::validation("role", e))?,
            None => Role::default(),
        };

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "username".to_string(),
                value: username.to_string(),
            });
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: email.to_string(),
            });
        }

        let new_user = NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            role: role.as_str().to_string(),
        };

        self.users.create(new_user).await
    }

    /// Checks login credentials.
    ///
    /// # Returns
    /// The user on success. An unknown username yields `NotFound`; a wrong
    /// password yields `Unauthorized`.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "username".to_string(),
                value: username.to_string(),
            })?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized("Incorrect password"));
        }

        Ok(user)
    }

    /// Gets a user by ID, for session re-validation.
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("user", id))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::services::test_support::{database_services, unique_tag};

    #[tokio::test]
    async fn test_wrong_password_is_incorrect_password() {
        let Some(services) = database_services().await else {
            return;
        };
        let tag = unique_tag();
        let username = format!("user-{}", tag);

        services
            .auth
            .register(&username, &format!("{}@example.com", tag), "secret123", None)
            .await
            .unwrap();

        let err = services
            .auth
            .login(&username, "wrong-password")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { message } if message == "Incorrect password"));
    }

    #[tokio::test]
    async fn test_unknown_username_is_not_found() {
        let Some(services) = database_services().await else {
            return;
        };

        let err = services
            .auth
            .login(&format!("ghost-{}", unique_tag()), "secret123")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { field, .. } if field == "username"));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let Some(services) = database_services().await else {
            return;
        };
        let tag = unique_tag();
        let username = format!("user-{}", tag);

        services
            .auth
            .register(&username, &format!("{}@example.com", tag), "secret123", None)
            .await
            .unwrap();

        let err = services
            .auth
            .register(
                &username,
                &format!("other-{}@example.com", tag),
                "secret123",
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { field, .. } if field == "username"));
    }
}

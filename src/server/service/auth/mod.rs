//! Registration, login and session user lookup.

pub mod password;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::user::{normalize_email, LoginDto, RegisterDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::auth::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account
    ///
    /// Validates the payload, lower-cases the email and stores an Argon2id hash of the
    /// password.
    ///
    /// # Arguments
    /// - `payload` - Name, email and password submitted by the client
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The new user
    /// - `Err(Error::ValidationError)` - Name, email or password don't meet the constraints
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - Email already registered
    pub async fn register(&self, payload: RegisterDto) -> Result<UserDto, Error> {
        let (name, email) = payload.validate()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken(email).into());
        }

        let password_hash = hash_password(payload.password).await?;

        // A concurrent registration can still win between the lookup and the insert
        let user = match user_repo.create(&name, &email, &password_hash).await {
            Ok(user) => user,
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Err(AuthError::EmailTaken(email).into());
                }

                return Err(err.into());
            }
        };

        tracing::info!(user_id = %user.id, "Registered new user");

        Ok(to_dto(user))
    }

    /// Checks credentials
    ///
    /// An unknown email and a wrong password produce the same error.
    ///
    /// # Arguments
    /// - `payload` - Email, matched in any letter case, and password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The credentials match
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn login(&self, payload: LoginDto) -> Result<UserDto, Error> {
        let invalid = || AuthError::InvalidCredentials {
            email: payload.email.clone(),
        };

        let Ok(email) = normalize_email(&payload.email) else {
            return Err(invalid().into());
        };

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(invalid().into());
        };

        if !verify_password(payload.password.clone(), user.password_hash.clone()).await? {
            return Err(invalid().into());
        }

        Ok(to_dto(user))
    }

    /// Retrieves a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - No user has this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(to_dto))
    }
}

fn to_dto(user: UserModel) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
    }
}

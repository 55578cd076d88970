use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::{
    db::{
        connection::Database,
        helpers::{format_datetime, parse_datetime},
        models::User,
    },
    identity::{Identity, IdentityProvider},
};

impl Database {
    /// Register a user together with the access token the auth layer issued.
    pub async fn create_user(
        &self,
        user_id: &str,
        email: Option<&str>,
        access_token: &str,
    ) -> Result<User> {
        let user_id = user_id.to_string();
        let email = email.map(str::to_string);
        let access_token = access_token.to_string();
        self.execute(move |conn| {
            let created_at = Utc::now();
            conn.execute(
                "INSERT INTO users (id, email, access_token, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, email, access_token, format_datetime(&created_at)],
            )
            .with_context(|| "failed to insert user")?;

            Ok(User {
                id: user_id,
                email,
                created_at,
            })
        })
        .await
    }

    pub async fn find_user_by_token(&self, access_token: &str) -> Result<Option<User>> {
        let access_token = access_token.to_string();
        self.execute(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, email, created_at FROM users WHERE access_token = ?1",
                    params![access_token],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, Option<String>>(1)?,
                            row.get::<_, String>(2)?,
                        ))
                    },
                )
                .optional()?;

            row.map(|(id, email, created_at)| -> Result<User> {
                Ok(User {
                    id,
                    email,
                    created_at: parse_datetime(&created_at, "created_at")?,
                })
            })
            .transpose()
        })
        .await
    }
}

#[async_trait]
impl IdentityProvider for Database {
    async fn resolve_token(&self, token: &str) -> Result<Option<Identity>> {
        Ok(self.find_user_by_token(token).await?.map(|user| Identity {
            user_id: user.id,
            email: user.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokens_resolve_to_identities() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("users.sqlite3")).unwrap();
        db.create_user("u1", Some("me@example.com"), "secret")
            .await
            .unwrap();

        let identity = db.resolve_token("secret").await.unwrap().unwrap();
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.email.as_deref(), Some("me@example.com"));
        assert!(db.resolve_token("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_tokens_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("users.sqlite3")).unwrap();
        db.create_user("u1", None, "same").await.unwrap();
        assert!(db.create_user("u2", None, "same").await.is_err());
    }
}

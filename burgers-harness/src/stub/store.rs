use std::collections::HashMap;
use std::sync::Mutex;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

/// Orders listed by the public feed and per-user history.
pub const ORDER_PAGE_SIZE: usize = 50;

const FIRST_ORDER_NUMBER: u64 = 10_000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user already exists")]
    UserExists,
    #[error("email or password are incorrect")]
    InvalidCredentials,
    #[error("email already taken")]
    EmailTaken,
    #[error("user not found")]
    NotFound,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: String,
    pub email: String,
    pub name: String,
    password_hash: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub id: String,
    pub owner: Option<String>,
    pub ingredients: Vec<String>,
    pub name: String,
    pub number: u64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, StoredUser>,
    // access token -> user id
    tokens: HashMap<String, String>,
    orders: Vec<StoredOrder>,
    issued_orders: u64,
}

impl Inner {
    fn email_in_use(&self, email: &str, except: Option<&str>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id.as_str()) != except)
    }

    fn open_session(&mut self, user_id: &str) -> Session {
        let access_token = format!("Bearer {}", random_hex::<32>());
        self.tokens.insert(access_token.clone(), user_id.to_string());
        Session {
            access_token,
            refresh_token: random_hex::<40>(),
        }
    }
}

/// In-memory accounts, sessions and orders of the stand-in backend.
#[derive(Default)]
pub struct StubStore {
    inner: Mutex<Inner>,
}

fn random_hex<const N: usize>() -> String {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}

pub fn new_object_id() -> String {
    random_hex::<12>()
}

// Throwaway test accounts; keep hashing cheap.
fn hasher() -> Result<Argon2<'static>, StoreError> {
    let params = Params::new(1024, 1, 1, None).map_err(|e| StoreError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| StoreError::Hash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(StoredUser, Session), StoreError> {
        let password_hash = hash_password(password)?;

        let mut inner = self.lock();
        if inner.email_in_use(email, None) {
            return Err(StoreError::UserExists);
        }

        let user = StoredUser {
            id: new_object_id(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash,
        };
        inner.users.insert(user.id.clone(), user.clone());
        let session = inner.open_session(&user.id);
        Ok((user, session))
    }

    pub fn login(&self, email: &str, password: &str) -> Result<(StoredUser, Session), StoreError> {
        let user = self
            .lock()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(StoreError::InvalidCredentials);
        }

        let mut inner = self.lock();
        // The account may have been removed while the password was checked.
        if !inner.users.contains_key(&user.id) {
            return Err(StoreError::InvalidCredentials);
        }
        let session = inner.open_session(&user.id);
        Ok((user, session))
    }

    pub fn user_for_token(&self, token: &str) -> Option<StoredUser> {
        let inner = self.lock();
        inner
            .tokens
            .get(token)
            .and_then(|id| inner.users.get(id))
            .cloned()
    }

    pub fn update_user(
        &self,
        id: &str,
        email: Option<&str>,
        password: Option<&str>,
        name: Option<&str>,
    ) -> Result<StoredUser, StoreError> {
        let password_hash = password.map(hash_password).transpose()?;

        let mut inner = self.lock();
        if let Some(email) = email {
            if inner.email_in_use(email, Some(id)) {
                return Err(StoreError::EmailTaken);
            }
        }

        let user = inner.users.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(email) = email {
            user.email = email.to_string();
        }
        if let Some(name) = name {
            user.name = name.to_string();
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        Ok(user.clone())
    }

    /// Remove the account and every session it holds. Its orders stay in the feed.
    pub fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.users.remove(id).ok_or(StoreError::NotFound)?;
        inner.tokens.retain(|_, owner| owner.as_str() != id);
        Ok(())
    }

    pub fn create_order(
        &self,
        owner: Option<&str>,
        ingredients: Vec<String>,
        name: String,
    ) -> StoredOrder {
        let mut inner = self.lock();
        inner.issued_orders += 1;
        let now = Utc::now();
        let order = StoredOrder {
            id: new_object_id(),
            owner: owner.map(str::to_string),
            ingredients,
            name,
            number: FIRST_ORDER_NUMBER + inner.issued_orders,
            status: "done".to_string(),
            created_at: now,
            updated_at: now,
        };
        inner.orders.push(order.clone());
        order
    }

    /// The user's most recent orders, oldest first.
    pub fn orders_for(&self, user_id: &str) -> Vec<StoredOrder> {
        let inner = self.lock();
        let owned: Vec<StoredOrder> = inner
            .orders
            .iter()
            .filter(|o| o.owner.as_deref() == Some(user_id))
            .cloned()
            .collect();
        let skip = owned.len().saturating_sub(ORDER_PAGE_SIZE);
        owned.into_iter().skip(skip).collect()
    }

    /// Public feed: most recent orders first, plus overall and today's totals.
    pub fn feed(&self) -> (Vec<StoredOrder>, u64, u64) {
        let inner = self.lock();
        let today = Utc::now().date_naive();
        let total = inner.orders.len() as u64;
        let total_today = inner
            .orders
            .iter()
            .filter(|o| o.created_at.date_naive() == today)
            .count() as u64;
        let recent = inner
            .orders
            .iter()
            .rev()
            .take(ORDER_PAGE_SIZE)
            .cloned()
            .collect();
        (recent, total, total_today)
    }

    pub fn user_order_totals(&self, user_id: &str) -> (u64, u64) {
        let inner = self.lock();
        let today = Utc::now().date_naive();
        let owned = inner
            .orders
            .iter()
            .filter(|o| o.owner.as_deref() == Some(user_id));
        let (total, total_today) = owned.fold((0, 0), |(t, d), o| {
            (t + 1, d + u64::from(o.created_at.date_naive() == today))
        });
        (total, total_today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_duplicate_email() {
        let store = StubStore::new();
        store.register("a@ya.ru", "pw", "a").unwrap();

        let err = store.register("a@ya.ru", "other", "b").unwrap_err();
        assert!(matches!(err, StoreError::UserExists));
    }

    #[test]
    fn login_checks_password() {
        let store = StubStore::new();
        store.register("a@ya.ru", "pw", "a").unwrap();

        assert!(store.login("a@ya.ru", "pw").is_ok());
        assert!(matches!(
            store.login("a@ya.ru", "nope"),
            Err(StoreError::InvalidCredentials)
        ));
        assert!(matches!(
            store.login("b@ya.ru", "pw"),
            Err(StoreError::InvalidCredentials)
        ));
    }

    #[test]
    fn tokens_are_bearer_prefixed_and_resolve() {
        let store = StubStore::new();
        let (user, session) = store.register("a@ya.ru", "pw", "a").unwrap();

        assert!(session.access_token.starts_with("Bearer "));
        assert_eq!(store.user_for_token(&session.access_token).unwrap().id, user.id);
        assert!(store.user_for_token("Bearer nothing").is_none());
    }

    #[test]
    fn update_rejects_email_of_other_account() {
        let store = StubStore::new();
        let (a, _) = store.register("a@ya.ru", "pw", "a").unwrap();
        store.register("b@ya.ru", "pw", "b").unwrap();

        let err = store.update_user(&a.id, Some("b@ya.ru"), None, None).unwrap_err();
        assert!(matches!(err, StoreError::EmailTaken));

        // Re-submitting one's own email is not a conflict.
        let same = store.update_user(&a.id, Some("a@ya.ru"), None, Some("renamed")).unwrap();
        assert_eq!(same.name, "renamed");
    }

    #[test]
    fn changed_password_is_used_for_login() {
        let store = StubStore::new();
        let (user, _) = store.register("a@ya.ru", "pw", "a").unwrap();

        store.update_user(&user.id, None, Some("pw2"), None).unwrap();

        assert!(store.login("a@ya.ru", "pw").is_err());
        assert!(store.login("a@ya.ru", "pw2").is_ok());
    }

    #[test]
    fn delete_revokes_sessions() {
        let store = StubStore::new();
        let (user, session) = store.register("a@ya.ru", "pw", "a").unwrap();

        store.delete_user(&user.id).unwrap();

        assert!(store.user_for_token(&session.access_token).is_none());
        assert!(matches!(store.delete_user(&user.id), Err(StoreError::NotFound)));
    }

    #[test]
    fn order_numbers_increase_and_history_is_per_user() {
        let store = StubStore::new();
        let (user, _) = store.register("a@ya.ru", "pw", "a").unwrap();

        let first = store.create_order(None, vec!["x".into()], "n".into());
        let second = store.create_order(Some(&user.id), vec!["x".into()], "n".into());

        assert!(second.number > first.number);
        let history = store.orders_for(&user.id);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].number, second.number);
        assert_eq!(store.user_order_totals(&user.id), (1, 1));

        let (feed, total, today) = store.feed();
        assert_eq!(feed[0].number, second.number);
        assert_eq!((total, today), (2, 2));
    }

    #[test]
    fn history_and_feed_keep_only_the_latest_page() {
        let store = StubStore::new();
        let (user, _) = store.register("a@ya.ru", "pw", "a").unwrap();

        let numbers: Vec<u64> = (0..=ORDER_PAGE_SIZE)
            .map(|_| {
                store
                    .create_order(Some(&user.id), vec!["x".into()], "n".into())
                    .number
            })
            .collect();
        let oldest = numbers[0];
        let newest = numbers[ORDER_PAGE_SIZE];

        let history = store.orders_for(&user.id);
        assert_eq!(history.len(), ORDER_PAGE_SIZE);
        assert_eq!(history[0].number, oldest + 1);
        assert_eq!(history[ORDER_PAGE_SIZE - 1].number, newest);

        let (feed, total, today) = store.feed();
        assert_eq!(feed.len(), ORDER_PAGE_SIZE);
        assert_eq!(feed[0].number, newest);
        assert_eq!(feed[ORDER_PAGE_SIZE - 1].number, oldest + 1);
        assert_eq!(total, ORDER_PAGE_SIZE as u64 + 1);
        assert_eq!(today, ORDER_PAGE_SIZE as u64 + 1);

        let totals = store.user_order_totals(&user.id);
        assert_eq!(totals, (ORDER_PAGE_SIZE as u64 + 1, ORDER_PAGE_SIZE as u64 + 1));
    }
}

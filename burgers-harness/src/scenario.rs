//! Per-test fixture that owns the accounts a scenario creates.
//!
//! [`Scenario::run`] executes the test body on its own task, then deletes
//! every tracked account whether the body returned or panicked. A panic is
//! re-raised after cleanup so the test still fails with its original message.

use std::future::Future;
use std::sync::{Arc, Mutex};

use stellar_burgers_core::UserCreateRequest;

use crate::client::{ApiClient, ValidatableResponse};
use crate::error::Result;

#[derive(Clone)]
pub struct Scenario {
    client: ApiClient,
    accounts: Arc<Mutex<Vec<UserCreateRequest>>>,
}

impl Scenario {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            accounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Run `body`, then clean up, then hand back its output or resume its panic.
    pub async fn run<F, Fut, T>(client: ApiClient, body: F) -> T
    where
        F: FnOnce(Scenario) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let scenario = Scenario::new(client);
        let outcome = tokio::spawn(body(scenario.clone())).await;

        let removed = scenario.cleanup().await;
        tracing::debug!(removed, "scenario finished");

        match outcome {
            Ok(value) => value,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => panic!("scenario task did not complete: {}", err),
        }
    }

    /// Register a user and schedule its deletion, even if registration fails.
    pub async fn register_user(&self, request: &UserCreateRequest) -> Result<ValidatableResponse> {
        self.track(request);
        self.client.users().create_user(request).await
    }

    /// Schedule deletion of an account created elsewhere.
    pub fn track(&self, request: &UserCreateRequest) {
        self.lock_accounts().push(request.clone());
    }

    /// Follow a successful profile change so cleanup logs in with the new
    /// credentials. Fields absent from `change` keep their old values.
    pub fn retrack(&self, old_email: &str, change: &UserCreateRequest) {
        let mut accounts = self.lock_accounts();
        if let Some(account) = accounts
            .iter_mut()
            .find(|a| a.email.as_deref() == Some(old_email))
        {
            if change.email.is_some() {
                account.email = change.email.clone();
            }
            if change.password.is_some() {
                account.password = change.password.clone();
            }
            if change.name.is_some() {
                account.name = change.name.clone();
            }
        }
    }

    pub fn tracked(&self) -> Vec<UserCreateRequest> {
        self.lock_accounts().clone()
    }

    /// Delete every tracked account. Failures are logged and skipped.
    pub async fn cleanup(&self) -> usize {
        let accounts = std::mem::take(&mut *self.lock_accounts());
        let users = self.client.users();
        let mut removed = 0;

        for account in &accounts {
            match users.delete_user(account).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!("Failed to clean up test user {:?}: {}", account.email, e),
            }
        }
        removed
    }

    fn lock_accounts(&self) -> std::sync::MutexGuard<'_, Vec<UserCreateRequest>> {
        self.accounts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_scenario() -> Scenario {
        Scenario::new(ApiClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn retrack_follows_changed_credentials() {
        let scenario = offline_scenario();
        let original = UserCreateRequest::new("old@ya.ru", "pw", "test");
        scenario.track(&original);

        let change = UserCreateRequest {
            email: Some("new@ya.ru".to_string()),
            password: Some("pw2".to_string()),
            name: None,
        };
        scenario.retrack("old@ya.ru", &change);

        assert_eq!(
            scenario.tracked(),
            vec![UserCreateRequest::new("new@ya.ru", "pw2", "test")]
        );
    }

    #[test]
    fn retrack_ignores_unknown_email() {
        let scenario = offline_scenario();
        scenario.track(&UserCreateRequest::new("a@ya.ru", "pw", "test"));

        scenario.retrack("b@ya.ru", &UserCreateRequest::random_change());

        assert_eq!(scenario.tracked()[0].email.as_deref(), Some("a@ya.ru"));
    }

    #[tokio::test]
    async fn cleanup_drains_tracked_accounts_even_when_backend_is_down() {
        let scenario = offline_scenario();
        scenario.track(&UserCreateRequest::random());

        assert_eq!(scenario.cleanup().await, 0);
        assert!(scenario.tracked().is_empty());
    }

    #[tokio::test]
    async fn run_returns_body_output() {
        let value = Scenario::run(ApiClient::new("http://127.0.0.1:9"), |_| async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    #[should_panic(expected = "assertion inside scenario")]
    async fn run_resumes_body_panic() {
        Scenario::run(ApiClient::new("http://127.0.0.1:9"), |_| async {
            panic!("assertion inside scenario");
        })
        .await
    }
}

use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use chrono::Utc;
use tokio::task::JoinHandle;

use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::PasswordService;
use crate::domain::auth::ports::RevocationStore;
use crate::domain::auth::service::AuthService;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;
use crate::domain::employee::service::EmployeeService;

/// Use-case services behind the HTTP boundary.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthServicePort>,
    pub employees: Arc<dyn EmployeeServicePort>,
}

impl Services {
    /// Compose the use-cases over one set of adapters.
    ///
    /// The employee repository serves both account lookup during login and
    /// the employee endpoints.
    pub fn new<ER, PS, RS>(
        repository: Arc<ER>,
        passwords: Arc<PS>,
        revocations: Arc<RS>,
        tokens: Arc<TokenService>,
    ) -> Self
    where
        ER: EmployeeRepository,
        PS: PasswordService,
        RS: RevocationStore,
    {
        let auth = AuthService::new(
            Arc::clone(&repository),
            Arc::clone(&passwords),
            revocations,
            tokens,
        );
        let employees = EmployeeService::new(repository, passwords);

        Self {
            auth: Arc::new(auth),
            employees: Arc::new(employees),
        }
    }
}

/// Periodically drop revocations whose token has expired.
///
/// Returns `None` when `interval` is `None`.
pub fn spawn_revocation_sweeper<RS>(
    store: Arc<RS>,
    interval: Option<Duration>,
) -> Option<JoinHandle<()>>
where
    RS: RevocationStore,
{
    let period = interval?;

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match store.purge_expired(Utc::now().timestamp()).await {
                Ok(purged) => tracing::debug!(purged, "Revocation sweep finished"),
                Err(e) => tracing::error!(error = %e, "Revocation sweep failed"),
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::revocation::InMemoryRevocationStore;

    #[tokio::test]
    async fn test_sweeper_disabled_without_interval() {
        let store = Arc::new(InMemoryRevocationStore::new());
        assert!(spawn_revocation_sweeper(store, None).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_purges_expired_entries() {
        let store = Arc::new(InMemoryRevocationStore::new());
        let past = Utc::now().timestamp() - 60;
        let future = Utc::now().timestamp() + 3600;

        store.revoke("expired", Some(past)).await.unwrap();
        store.revoke("live", Some(future)).await.unwrap();

        let handle =
            spawn_revocation_sweeper(Arc::clone(&store), Some(Duration::from_secs(30))).unwrap();

        tokio::time::sleep(Duration::from_secs(31)).await;
        tokio::task::yield_now().await;

        assert!(!store.is_revoked("expired").await.unwrap());
        assert!(store.is_revoked("live").await.unwrap());

        handle.abort();
    }
}

//! `AppCore`, the handle adapters hold on to.

use crate::ports::Repos;

use super::{AuthService, BlockchainService, ChatHistoryService, ProfileService};

/// Every service, built once from a [`Repos`] at startup.
///
/// ```ignore
/// let core = AppCore::new(CoreFactory::build_repos(pool));
/// let records = core.blockchain().records_for_order(42).await?;
/// ```
pub struct AppCore {
    blockchain: BlockchainService,
    chat_history: ChatHistoryService,
    profiles: ProfileService,
    auth: AuthService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            blockchain: BlockchainService::new(repos.blockchain_records),
            chat_history: ChatHistoryService::new(repos.chat_history),
            profiles: ProfileService::new(repos.profiles, repos.addresses),
            auth: AuthService::new(repos.access_tokens),
        }
    }

    /// Access the blockchain ledger service.
    pub const fn blockchain(&self) -> &BlockchainService {
        &self.blockchain
    }

    /// Chat exchanges.
    pub const fn chat_history(&self) -> &ChatHistoryService {
        &self.chat_history
    }

    /// Access the profile service.
    pub const fn profiles(&self) -> &ProfileService {
        &self.profiles
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::access_token_repository::MockAccessTokenRepository;
    use crate::ports::blockchain_repository::MockBlockchainRecordRepository;
    use crate::ports::chat_history::MockChatHistoryRepository;
    use crate::ports::profile_repository::{MockAddressRepository, MockUserProfileRepository};
    use std::sync::Arc;

    #[tokio::test]
    async fn services_share_injected_repositories() {
        let mut records = MockBlockchainRecordRepository::new();
        records
            .expect_find_by_order_id()
            .times(1)
            .returning(|_| Ok(vec![]));

        let repos = Repos::new(
            Arc::new(records),
            Arc::new(MockChatHistoryRepository::new()),
            Arc::new(MockUserProfileRepository::new()),
            Arc::new(MockAddressRepository::new()),
            Arc::new(MockAccessTokenRepository::new()),
        );
        let core = AppCore::new(repos);

        assert!(core.blockchain().records_for_order(1).await.unwrap().is_empty());
    }
}

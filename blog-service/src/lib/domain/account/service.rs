use std::sync::Arc;

use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::CreateAccountCommand;
use crate::account::models::NewAccount;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: CreateAccountCommand) -> Result<Account, AccountError> {
        // Hash before anything touches storage; plaintext never leaves here
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AccountError::PasswordHashing(e.to_string()))?;

        let account = NewAccount {
            username: command.username,
            email: command.email,
            password_hash,
        };

        self.repository.create(account).await
    }

    async fn get_account(&self, id: AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.0))
    }

    async fn get_account_by_email(&self, email: &str) -> Result<Account, AccountError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AccountError::NotFoundByEmail(email.to_string()))
    }
}

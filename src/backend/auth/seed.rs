/**
 * Startup Seeding
 *
 * Ensures the administrator and customer accounts exist. An account is only
 * created when its password is configured; existing accounts are left as
 * they are.
 */

use crate::backend::auth::identity::{IdentityProvider, IdentityResult, NewIdentityUser};
use crate::backend::auth::{ADMINISTRATOR_ROLE, CUSTOMER_ROLE};
use crate::backend::server::config::SeedConfig;

pub const ADMIN_USERNAME: &str = "admin@bookstore.com";
pub const CUSTOMER_USERNAME: &str = "customer1@gmail.com";

/// Seed the configured accounts
pub async fn seed_users(provider: &dyn IdentityProvider, seed: &SeedConfig) -> IdentityResult<()> {
    if let Some(password) = &seed.admin_password {
        ensure_user(provider, ADMIN_USERNAME, password, ADMINISTRATOR_ROLE).await?;
    }
    if let Some(password) = &seed.customer_password {
        ensure_user(provider, CUSTOMER_USERNAME, password, CUSTOMER_ROLE).await?;
    }
    Ok(())
}

async fn ensure_user(
    provider: &dyn IdentityProvider,
    username: &str,
    password: &str,
    role: &str,
) -> IdentityResult<()> {
    if provider.find_by_name(username).await?.is_some() {
        tracing::debug!("Seed user {} already exists", username);
        return Ok(());
    }

    let user = NewIdentityUser {
        username: username.to_string(),
        email: username.to_string(),
        password: password.to_string(),
    };
    provider.create_user(user, &[role.to_string()]).await?;
    tracing::info!("Seeded user {} with role {}", username, role);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::identity::{MemoryIdentityProvider, SignInOutcome};

    fn seed(admin: Option<&str>, customer: Option<&str>) -> SeedConfig {
        SeedConfig {
            admin_password: admin.map(str::to_string),
            customer_password: customer.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_seeds_both_accounts_with_roles() {
        let provider = MemoryIdentityProvider::with_cost(4);
        seed_users(&provider, &seed(Some("Adm1n!"), Some("Cust0mer!")))
            .await
            .unwrap();

        let admin = provider.find_by_name(ADMIN_USERNAME).await.unwrap().unwrap();
        let customer = provider.find_by_name(CUSTOMER_USERNAME).await.unwrap().unwrap();
        assert_eq!(provider.get_roles(&admin).await.unwrap(), vec![ADMINISTRATOR_ROLE]);
        assert_eq!(provider.get_roles(&customer).await.unwrap(), vec![CUSTOMER_ROLE]);
        assert_eq!(
            provider.password_sign_in(ADMIN_USERNAME, "Adm1n!").await.unwrap(),
            SignInOutcome::Succeeded
        );
    }

    #[tokio::test]
    async fn test_skips_accounts_without_password() {
        let provider = MemoryIdentityProvider::with_cost(4);
        seed_users(&provider, &seed(None, Some("Cust0mer!"))).await.unwrap();

        assert!(provider.find_by_name(ADMIN_USERNAME).await.unwrap().is_none());
        assert!(provider.find_by_name(CUSTOMER_USERNAME).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_existing_account_is_not_replaced() {
        let provider = MemoryIdentityProvider::with_cost(4);
        seed_users(&provider, &seed(Some("first"), None)).await.unwrap();
        let before = provider.find_by_name(ADMIN_USERNAME).await.unwrap().unwrap();

        seed_users(&provider, &seed(Some("second"), None)).await.unwrap();
        let after = provider.find_by_name(ADMIN_USERNAME).await.unwrap().unwrap();

        assert_eq!(before.id, after.id);
        assert_eq!(
            provider.password_sign_in(ADMIN_USERNAME, "first").await.unwrap(),
            SignInOutcome::Succeeded
        );
    }
}

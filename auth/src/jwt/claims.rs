use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Identity claims carried by an access token.
///
/// Fully self-contained: the account identifier and email plus issue and
/// expiry instants. Nothing is persisted server-side; verification
/// reconstructs these on every request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the account identifier, as a string per RFC 7519
    pub sub: String,

    /// Account email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated account.
    ///
    /// Expiry is computed as issue time plus `ttl_hours`.
    pub fn for_account(account_id: i64, email: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            sub: account_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Parse the subject back into an account identifier.
    ///
    /// # Errors
    /// * `InvalidClaims` - Subject is not a numeric identifier
    pub fn account_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidClaims(format!("non-numeric subject: {}", self.sub)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_account() {
        let claims = Claims::for_account(42, "alice@example.com", 24);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert_eq!(claims.account_id().unwrap(), 42);
    }

    #[test]
    fn test_account_id_rejects_non_numeric_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "alice@example.com".to_string(),
            iat: 0,
            exp: 0,
        };

        assert!(matches!(
            claims.account_id(),
            Err(JwtError::InvalidClaims(_))
        ));
    }
}

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role a marketplace account is registered under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Seller,
    Buyer,
    Transporter,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct UnknownRole(pub String);

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Seller,
        UserRole::Buyer,
        UserRole::Transporter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Seller => "seller",
            UserRole::Buyer => "buyer",
            UserRole::Transporter => "transporter",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_literal() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn rejects_unknown_and_mixed_case() {
        assert!("Admin".parse::<UserRole>().is_err());
        assert_eq!(
            "farmer".parse::<UserRole>(),
            Err(UnknownRole("farmer".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase_literals() {
        let json = serde_json::to_string(&UserRole::Transporter).unwrap();
        assert_eq!(json, "\"transporter\"");
    }
}

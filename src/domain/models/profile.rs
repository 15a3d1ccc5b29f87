use crate::domain::models::account::Account;

/// Identity attached to an authenticated inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub security_id: String,
    pub username: String,
    pub email: String,
}

impl From<&Account> for UserProfile {
    fn from(account: &Account) -> Self {
        UserProfile {
            security_id: account.id.to_owned(),
            username: account.username.to_owned(),
            email: account.email.to_owned(),
        }
    }
}

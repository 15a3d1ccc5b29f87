use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::account::{Account, Credentials, Email, NewAccount, Password};
use crate::domain::models::token::Token;

#[derive(Debug, Deserialize)]
pub struct UserMsAccount {
    id: String,
    username: String,
    email: String,
}

#[derive(Serialize)]
pub struct UserMsNewAccount {
    username: String,
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct UserMsCredentials {
    email: String,
    password: String,
}

#[derive(Serialize)]
pub struct UserMsEmail {
    email: String,
}

#[derive(Serialize)]
pub struct UserMsPassword {
    password: String,
}

#[derive(Debug, Deserialize)]
pub struct UserMsToken {
    token: String,
}

impl From<UserMsAccount> for Account {
    fn from(acc: UserMsAccount) -> Self {
        Account {
            id: acc.id,
            username: acc.username,
            email: acc.email,
        }
    }
}

impl From<UserMsToken> for Token {
    fn from(token: UserMsToken) -> Self {
        Token { token: token.token }
    }
}

impl From<NewAccount> for UserMsNewAccount {
    fn from(acc: NewAccount) -> Self {
        UserMsNewAccount {
            username: acc.username,
            email: acc.email,
            password: acc.password,
        }
    }
}

impl From<Credentials> for UserMsCredentials {
    fn from(credentials: Credentials) -> Self {
        UserMsCredentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}

impl From<Email> for UserMsEmail {
    fn from(email: Email) -> Self {
        UserMsEmail { email: email.email }
    }
}

impl From<Password> for UserMsPassword {
    fn from(password: Password) -> Self {
        UserMsPassword {
            password: password.password,
        }
    }
}

/// Pulls a human readable message out of an error response body.
///
/// Accepts `{"message": ..}` as well as the nested `{"error": {"message": ..}}`
/// envelope. Falls back to the raw body when it is not JSON.
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();

    if body.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("error").and_then(|error| error.get("message")))
            .and_then(Value::as_str)
            .map(str::to_owned),
        Err(_) => Some(body.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case::flat(r#"{"message":"exists"}"#, Some("exists"))]
    #[case::nested(r#"{"error":{"statusCode":404,"message":"Account not found"}}"#, Some("Account not found"))]
    #[case::plain_text("upstream exploded", Some("upstream exploded"))]
    #[case::json_without_message(r#"{"code":"E1"}"#, None)]
    #[case::empty("  ", None)]
    fn test_error_message(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(error_message(body).as_deref(), expected);
    }

    #[test]
    fn test_account_ignores_unknown_fields() {
        let account: UserMsAccount = serde_json::from_str(
            r#"{"id":"u1","username":"alice","email":"a@x.com","emailVerified":false}"#,
        )
        .unwrap();

        assert_eq!(
            Account::from(account),
            Account {
                id: "u1".to_string(),
                username: "alice".to_string(),
                email: "a@x.com".to_string(),
            }
        );
    }
}

/// Opaque session token issued by the user service on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token: String,
}

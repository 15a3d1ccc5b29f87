use actix_web::HttpRequest;
use actix_web::http::header;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::domain::{
    models::{
        account::{Account, Credentials, Email, NewAccount, Password},
        token::Token,
    },
    services::user_ms::{UserMsError, UserMsResult, UserMsService, UserMsServiceFactory},
};
use crate::infrastructure::models::user_ms::{
    UserMsAccount, UserMsCredentials, UserMsEmail, UserMsNewAccount, UserMsPassword, UserMsToken,
    error_message,
};

pub struct UserMsServiceImpl {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl UserMsServiceImpl {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: None,
        }
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let builder = self.http.request(method, url);

        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[async_trait]
impl UserMsService for UserMsServiceImpl {
    fn set_token_from_request(&mut self, request: &HttpRequest) -> UserMsResult<()> {
        self.token = Some(bearer_token(request)?);
        Ok(())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn sign_up(&self, new_account: NewAccount) -> UserMsResult<Account> {
        let response = self
            .request(reqwest::Method::POST, "/auth/sign-up")
            .json(&UserMsNewAccount::from(new_account))
            .send()
            .await?;

        Ok(handle_response::<UserMsAccount>(response).await?.into())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn login(&self, credentials: Credentials) -> UserMsResult<Token> {
        let response = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&UserMsCredentials::from(credentials))
            .send()
            .await?;

        Ok(handle_response::<UserMsToken>(response).await?.into())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn who_am_i(&self) -> UserMsResult<Account> {
        let response = self
            .request(reqwest::Method::GET, "/auth/who-am-i")
            .send()
            .await?;

        Ok(handle_response::<UserMsAccount>(response).await?.into())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn request_email_verification(&self) -> UserMsResult<Account> {
        let response = self
            .request(reqwest::Method::POST, "/account/request-email-verification")
            .send()
            .await?;

        Ok(handle_response::<UserMsAccount>(response).await?.into())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn verify_email(&self) -> UserMsResult<Account> {
        let response = self
            .request(reqwest::Method::PATCH, "/account/verify-email")
            .send()
            .await?;

        Ok(handle_response::<UserMsAccount>(response).await?.into())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn request_password_recovery(&self, email: Email) -> UserMsResult<()> {
        let response = self
            .request(reqwest::Method::POST, "/credentials/request-password-recovery")
            .json(&UserMsEmail::from(email))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }

    #[tracing::instrument(skip_all, err(level = "warn"))]
    async fn update_password(&self, password: Password) -> UserMsResult<()> {
        let response = self
            .request(reqwest::Method::PATCH, "/credentials/update-password")
            .json(&UserMsPassword::from(password))
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

pub struct UserMsServiceFactoryImpl {
    http: Client,
    base_url: String,
}

impl UserMsServiceFactoryImpl {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

impl UserMsServiceFactory for UserMsServiceFactoryImpl {
    fn create(&self) -> Box<dyn UserMsService> {
        Box::new(UserMsServiceImpl::new(
            self.http.clone(),
            self.base_url.to_owned(),
        ))
    }
}

fn bearer_token(request: &HttpRequest) -> UserMsResult<String> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(UserMsError::Unauthenticated)?
        .to_str()
        .map_err(|_| UserMsError::Unauthenticated)?;

    value
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .and_then(|(_, credentials)| credentials.split_whitespace().next())
        .map(str::to_owned)
        .ok_or(UserMsError::Unauthenticated)
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> UserMsResult<T> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

async fn check_status(response: Response) -> UserMsResult<Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            tracing::debug!(error = %err, "Failed to read user-ms error body");
            String::new()
        }
    };
    let message = error_message(&body)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("user-ms responded with {status}"));

    Err(UserMsError::Upstream {
        status: status.as_u16(),
        message,
    })
}

use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Account payloads are tiny; anything larger is rejected before parsing.
const PAYLOAD_LIMIT: usize = 16_384;

/// JSON body extractor that runs `validator` rules before the handler sees it.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T> ValidJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn is_json(mime: mime::Mime) -> bool {
    mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON)
}

impl<T> FromRequest for ValidJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(req, payload, Some(&is_json), true)
            .limit(PAYLOAD_LIMIT)
            .map(|res: Result<T, _>| -> Result<Self, AppError> {
                let payload = res.map_err(AppError::from)?;
                payload.validate().map_err(AppError::from)?;
                Ok(ValidJson(payload))
            })
            .boxed_local()
    }
}

use actix_web::HttpResponse;

use crate::domain::error::AppResult;

pub type ApiResult<T = HttpResponse> = AppResult<T>;

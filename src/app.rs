use actix_web::{
    App, HttpMessage,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    middleware::{Next, from_fn},
    web,
};

use tracing_actix_web::{RequestId, TracingLogger};

use actix_cors::Cors;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::{Components, OpenApi, Server};
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::container::Container;

use std::sync::Arc;

pub fn create(container: Arc<Container>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .into_utoipa_app()
        .openapi(docs())
        .configure(api::routes)
        .openapi_service(|api| {
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
        })
        .into_app()
        .wrap(TracingLogger::default())
        .wrap(cors(&container.allowed_origins))
        .wrap(from_fn(request_headers))
        .app_data(web::Data::new(container.user_ms_factory.clone()))
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PATCH"])
        .allowed_headers(&[header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .block_on_origin_mismatch(false)
        .max_age(3600)
}

async fn request_headers(
    req: ServiceRequest,
    svc: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let mut res = svc.call(req).await?;
    let request_id = res.request().extensions().get::<RequestId>().copied();

    if let Some(request_id) = request_id {
        if let Ok(value) = header::HeaderValue::from_str(&request_id.to_string()) {
            res.headers_mut()
                .insert(header::HeaderName::from_static("x-request-id"), value);
        }
    }
    Ok(res)
}

pub fn docs() -> OpenApi {
    let mut openapi = OpenApi::default();

    openapi.info.title = String::from("Account Gateway API");
    openapi.info.description = Some(String::from(
        "Forwards account and authentication calls to the user service",
    ));
    openapi.info.version = String::from(env!("CARGO_PKG_VERSION"));

    openapi.servers = Some(servers());
    openapi.components = Some(components());

    openapi
}

fn servers() -> Vec<Server> {
    vec![server("http://localhost:8080", "Localhost")]
}

fn server(url: &str, description: &str) -> Server {
    Server::builder()
        .description(Some(description.to_owned()))
        .url(url.to_owned())
        .build()
}

fn components() -> Components {
    Components::builder()
        .security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        )
        .build()
}

use std::{net::SocketAddr, sync::Arc};

use axum::{http::HeaderValue, Router};
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_health_contracts::HealthFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: SocketAddr,
    /// Origins that may call the contact endpoint from a browser.
    pub allowed_origins: Arc<[HeaderValue]>,
    pub contact_success_message: Arc<str>,
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    /// Serve the api until the process receives ctrl-c or SIGTERM.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.config.addr;
        let router = self.into_router();
        let listener = TcpListener::bind(addr).await?;
        info!("listening on {}", listener.local_addr()?);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Into::into)
    }

    pub fn into_router(self) -> Router<()> {
        let RestServerConfig {
            allowed_origins,
            contact_success_message,
            ..
        } = self.config;

        let router = Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(
                self.contact.into(),
                contact_success_message,
            ));

        // the last layer added runs first
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::cors::add(router, &allowed_origins);
        middlewares::request_id::add(router)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutting down");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use folio_core_contact_contracts::MockContactFeatureService;
    use folio_core_health_contracts::MockHealthFeatureService;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::middlewares::request_id::REQUEST_ID_HEADER;

    fn sut(allowed_origins: &[&'static str]) -> Router<()> {
        RestServer::new(
            MockHealthFeatureService::new(),
            MockContactFeatureService::new(),
            RestServerConfig {
                addr: ([127, 0, 0, 1], 0).into(),
                allowed_origins: allowed_origins
                    .iter()
                    .map(|&origin| HeaderValue::from_static(origin))
                    .collect(),
                contact_success_message: "Form submitted successfully".into(),
            },
        )
        .into_router()
    }

    #[tokio::test]
    async fn request_id_header() {
        let request = Request::get("/api/contact").body(Body::empty()).unwrap();

        let response = sut(&[]).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header(header::ORIGIN, "https://jo.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = sut(&["https://jo.example"]).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://jo.example"
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn cors_unknown_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header(header::ORIGIN, "https://evil.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = sut(&["https://jo.example"]).oneshot(request).await.unwrap();

        assert!(!response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}

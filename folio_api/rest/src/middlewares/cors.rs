use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use folio_utils::Apply;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allow browsers on `allowed_origins` to post to the api. Without any
/// allowed origin, no CORS headers are sent at all.
pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    allowed_origins: &[HeaderValue],
) -> Router<S> {
    let layer = (!allowed_origins.is_empty()).then(|| {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
            .allow_methods([Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    });

    router.apply_map(layer, |router, layer| router.layer(layer))
}

//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! The storefront ships no scripts at all, so the policy only has to allow
//! same-origin styles, forms and images (plus the image host when the public
//! asset root lives on another origin).

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

use crate::state::AppState;

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: same-origin` - No referrer leakage to other sites
/// - `Content-Security-Policy` - See [`content_security_policy`]
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let csp = content_security_policy(&state.config().public_url);
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("same-origin"));

    match HeaderValue::from_str(&csp) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::warn!("Invalid CSP header value: {e}"),
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

/// Build the CSP for a given public asset root.
///
/// ```text
/// default-src 'none';
/// style-src 'self';
/// img-src 'self' [asset origin];
/// form-action 'self';
/// base-uri 'self';
/// frame-ancestors 'none'
/// ```
#[must_use]
pub fn content_security_policy(public_url: &str) -> String {
    let img_src = Url::parse(public_url).map_or_else(
        |_| "'self'".to_string(),
        |url| format!("'self' {}", url.origin().ascii_serialization()),
    );

    format!(
        "default-src 'none'; \
         style-src 'self'; \
         img-src {img_src}; \
         form-action 'self'; \
         base-uri 'self'; \
         frame-ancestors 'none'"
    )
}

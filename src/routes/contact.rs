// ============================================================================
// Contact Submission Route
// ============================================================================
//
// POST /api/contact - the rate-limited relay between the website's contact
// form and the external delivery service.
//
// Flow:
// 1. Derive the origin identifier from proxy headers
// 2. Check the per-origin cooldown (429 with retry seconds while active)
// 3. Read the submitted form fields and forward them to the relay as JSON
// 4. Pass the relay's status and body back to the caller verbatim
// 5. Start the cooldown only when the relay confirmed delivery
//
// ============================================================================

use axum::{
    Form, Json,
    extract::{FromRequest, Multipart, Request, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;
use std::time::Instant;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::limiter::RateDecision;
use crate::metrics;
use crate::utils::{extract_client_ip, log_safe_id};

/// POST /api/contact
///
/// Accepts `multipart/form-data` (browser `FormData` posts) or
/// `application/x-www-form-urlencoded`. Field contents are not validated
/// here; the relay owns schema and spam decisions, including the honeypot
/// field, which is forwarded untouched.
pub async fn submit_contact(
    State(app_context): State<Arc<AppContext>>,
    req: Request,
) -> AppResult<impl IntoResponse> {
    metrics::SUBMISSIONS_TOTAL.inc();

    let origin = extract_client_ip(req.headers());
    let origin_hash = log_safe_id(&origin, &app_context.config.logging.hash_salt);

    // Cooldown gate runs before the body is even read; denied requests must
    // never reach the relay.
    if let RateDecision::Denied { retry_after_secs } = app_context.limiter.check(&origin).await {
        metrics::SUBMISSIONS_DENIED_TOTAL.inc();
        tracing::warn!(
            origin_hash = %origin_hash,
            retry_after_secs = retry_after_secs,
            "Submission denied by cooldown"
        );
        return Err(AppError::RateLimited { retry_after_secs });
    }

    let fields = read_form_fields(req).await?;

    tracing::debug!(
        origin_hash = %origin_hash,
        field_count = fields.len(),
        "Forwarding submission to relay"
    );

    let started = Instant::now();
    let reply = match app_context.relay.forward(&fields).await {
        Ok(reply) => reply,
        Err(e) => {
            metrics::RELAY_FAILURES_TOTAL.inc();
            return Err(AppError::Relay(e));
        }
    };
    metrics::RELAY_LATENCY_SECONDS.observe(started.elapsed().as_secs_f64());

    // Only a confirmed delivery starts the cooldown: a relay-side rejection
    // leaves the caller free to fix the form and retry immediately.
    if reply.accepted {
        app_context.limiter.record(&origin).await;
    }

    tracing::info!(
        origin_hash = %origin_hash,
        relay_status = %reply.status.as_u16(),
        accepted = reply.accepted,
        "Submission relayed"
    );

    Ok((reply.status, Json(reply.body)))
}

/// Collect the submission's string fields from either supported encoding.
///
/// Multipart file parts are skipped without reading their contents: the
/// relay takes text fields only.
async fn read_form_fields(req: Request) -> AppResult<Vec<(String, String)>> {
    let is_multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let mut multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| AppError::payload(e.to_string()))?;

        let mut fields = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::payload(e.to_string()))?
        {
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::payload(e.to_string()))?;
            fields.push((name, value));
        }

        Ok(fields)
    } else {
        let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, &())
            .await
            .map_err(|e| AppError::payload(e.to_string()))?;

        Ok(fields)
    }
}

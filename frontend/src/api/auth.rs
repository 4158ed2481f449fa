//! Mock authentication: there is no server, any non-empty credentials pass
//! after a simulated round trip.

use super::types::{Identity, LoginRequest};
use crate::error::AppError;
use crate::state::session::SessionStore;
use crate::utils::lifecycle::ViewLifetime;

pub fn validate_login(request: &LoginRequest) -> Result<(), AppError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::validation("Please fill in all fields"));
    }
    Ok(())
}

pub async fn simulate_round_trip(delay_ms: u32) {
    if delay_ms > 0 {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
    }
}

/// Returns `Ok(None)` when the requesting view went away during the round
/// trip; the session is left untouched in that case.
pub async fn login(
    request: LoginRequest,
    session: &SessionStore,
    delay_ms: u32,
    lifetime: &ViewLifetime,
) -> Result<Option<Identity>, AppError> {
    validate_login(&request)?;
    simulate_round_trip(delay_ms).await;
    if !lifetime.is_alive() {
        log::debug!("login completed after its view was disposed; ignoring");
        return Ok(None);
    }
    session.login(&request.email, request.role.as_str()).map(Some)
}

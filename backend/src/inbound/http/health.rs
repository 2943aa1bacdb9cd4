//! Health endpoints: liveness and readiness checks for orchestrators and load
//! balancers.
//!
//! Readiness is tied to the vehicle store. The server registers the store it
//! wired once it is bound, and every readiness check pings that store, so a
//! lost database turns readiness to 503 while liveness stays green.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use actix_web::{HttpResponse, get, http::header, web};
use tracing::warn;

use crate::domain::ports::VehicleStore;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    store: OnceLock<Arc<dyn VehicleStore>>,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            store: OnceLock::new(),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a health state that is live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the vehicle store backing the API; readiness checks ping it
    /// from now on. Only the first registration is kept.
    pub fn mark_ready(&self, store: Arc<dyn VehicleStore>) {
        if self.store.set(store).is_err() {
            warn!("vehicle store already registered with health state");
        }
    }

    /// Flag the service as unhealthy so liveness checks fail during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether a vehicle store has been registered.
    pub fn is_ready(&self) -> bool {
        self.store.get().is_some()
    }

    /// Return liveness state.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    async fn store_reachable(&self) -> bool {
        let Some(store) = self.store.get() else {
            return false;
        };
        match store.ping().await {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "vehicle store readiness check failed");
                false
            }
        }
    }

    fn status_response(healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness check. Returns 200 when a vehicle store is registered and
/// answers a ping; 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Vehicle store reachable; server accepts traffic"),
        (status = 503, description = "Server starting or vehicle store unreachable")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::status_response(state.store_reachable().await)
}

/// Liveness check. Returns 200 while the process is alive and 503 once
/// draining. Independent of the vehicle store.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::status_response(state.is_alive())
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use medicare_core::{ChatSession, ClinicInfo, Responder};
use uuid::Uuid;

/// Shared application state accessible from all route handlers.
///
/// Each session owns its own transcript; the lock only guards the map that
/// lets handlers find a session again between requests.
#[derive(Clone)]
pub struct AppState {
    pub clinic: Arc<ClinicInfo>,
    pub responder: Arc<Responder>,
    pub sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
}

impl AppState {
    pub fn new(clinic: ClinicInfo) -> Self {
        let responder = Responder::new(&clinic);
        Self {
            clinic: Arc::new(clinic),
            responder: Arc::new(responder),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

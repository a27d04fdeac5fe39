#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::Router;
use std::sync::Arc;

use dice_duel::{routes, AppState, DuelService, KeyValueStore, RoundEngine, RoundLog};

use super::mocks::{RecordingDiagnostics, ScriptedRoller};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: Arc<dyn KeyValueStore>,
    pub diagnostics: Arc<RecordingDiagnostics>,
    pub duel: Arc<DuelService>,
}

impl TestSetup {
    /// A fresh log over the same store, as after a page reload
    pub fn reopened_log(&self) -> RoundLog {
        RoundLog::with_diagnostics(self.store.clone(), self.diagnostics.clone())
    }

    pub fn router(&self) -> Router {
        routes().with_state(AppState::new(self.duel.clone()))
    }
}

pub struct TestSetupBuilder {
    faces: Vec<u8>,
    store: Option<Arc<dyn KeyValueStore>>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            faces: vec![1, 2],
            store: None,
        }
    }

    /// Dice faces handed out in order, alternating player 1 and player 2
    pub fn with_faces(mut self, faces: &[u8]) -> Self {
        self.faces = faces.to_vec();
        self
    }

    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> TestSetup {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(dice_duel::InMemoryStore::new()));
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let log = RoundLog::with_diagnostics(store.clone(), diagnostics.clone());
        let engine = RoundEngine::new(Arc::new(ScriptedRoller::new(&self.faces)));

        TestSetup {
            store,
            diagnostics,
            duel: Arc::new(DuelService::new(engine, log)),
        }
    }
}

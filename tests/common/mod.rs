#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    middleware, Router,
};
use chrono::Utc;
use k3_audit_api::{
    api_v1_routes,
    config::AppConfig,
    db,
    entities::{equipment, equipment_standard, org_unit, peruntukan, personnel, team, vendor},
    events::{self, EventSender},
    middleware_helpers::request_id::request_id_middleware,
    AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;
use uuid::Uuid;

/// Test harness backed by a throwaway file-based SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    db_file: String,
    _event_task: tokio::task::JoinHandle<()>,
}

impl TestApp {
    /// Construct a new test application with a fresh database.
    pub async fn new() -> Self {
        let db_file = format!("k3_audit_test_{}.db", Uuid::new_v4().simple());
        let _ = std::fs::remove_file(&db_file);

        let mut cfg = AppConfig::new(
            format!("sqlite://{db_file}?mode=rwc"),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let (event_tx, event_rx) = mpsc::channel(256);
        let event_sender = Arc::new(EventSender::new(event_tx));
        let event_task = tokio::spawn(events::process_events(event_rx));

        let state = AppState::new(Arc::new(pool), cfg, Some(event_sender));

        let router = Router::new()
            .nest("/api/v1", api_v1_routes())
            .layer(middleware::from_fn(request_id_middleware))
            .with_state(state.clone());

        Self {
            router,
            state,
            db_file,
            _event_task: event_task,
        }
    }

    /// Send a JSON request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    // Seed helpers insert reference rows directly; the tests under scrutiny
    // exercise the workflow endpoints, not reference bootstrap.

    pub async fn seed_org_unit(&self, name: &str) -> Uuid {
        let model = org_unit::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            code: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed org unit");
        model.id
    }

    pub async fn seed_vendor(&self, name: &str) -> Uuid {
        let model = vendor::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            org_unit_id: Set(None),
            alamat: Set(None),
            phone: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed vendor");
        model.id
    }

    pub async fn seed_team(&self, name: &str, vendor_id: Uuid) -> Uuid {
        let model = team::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            vendor_id: Set(Some(vendor_id)),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed team");
        model.id
    }

    pub async fn seed_personnel(&self, name: &str, vendor_id: Uuid, team_id: Option<Uuid>) -> Uuid {
        let model = personnel::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            badge_number: Set(None),
            jabatan: Set(None),
            vendor_id: Set(Some(vendor_id)),
            team_id: Set(team_id),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed personnel");
        model.id
    }

    pub async fn seed_peruntukan(&self, name: &str) -> Uuid {
        let model = peruntukan::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed peruntukan");
        model.id
    }

    pub async fn seed_equipment(&self, name: &str, category: &str) -> Uuid {
        let model = equipment::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            category: Set(category.to_string()),
            satuan: Set(Some("unit".to_string())),
            description: Set(None),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed equipment");
        model.id
    }

    pub async fn seed_equipment_standard(
        &self,
        peruntukan_id: Uuid,
        equipment_id: Uuid,
        required_qty: i32,
    ) -> Uuid {
        let model = equipment_standard::ActiveModel {
            id: Set(Uuid::new_v4()),
            peruntukan_id: Set(peruntukan_id),
            equipment_id: Set(equipment_id),
            required_qty: Set(required_qty),
            created_at: Set(Utc::now()),
        }
        .insert(&*self.state.db)
        .await
        .expect("seed equipment standard");
        model.id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self._event_task.abort();
        let _ = std::fs::remove_file(&self.db_file);
    }
}

/// Read a response body as JSON.
pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not valid JSON")
}

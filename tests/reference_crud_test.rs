mod common;

use axum::http::{Method, StatusCode};
use chrono::Utc;
use common::{response_json, TestApp};
use k3_audit_api::entities::{assessment_personnel, equipment_standard};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn vendor_crud_lifecycle() {
    let app = TestApp::new().await;

    let org_unit_id = app.seed_org_unit("Divisi Tambang").await;

    let created = app
        .request(
            Method::POST,
            "/api/v1/vendors",
            Some(json!({
                "name": "PT Maju Bersama",
                "org_unit_id": org_unit_id,
                "alamat": "Jl. Industri No. 5",
                "phone": "+62811111111",
            })),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = response_json(created).await;
    assert_eq!(body["success"], true);
    let vendor = &body["data"];
    let vendor_id = vendor["id"].as_str().expect("vendor id").to_string();
    assert_eq!(vendor["name"], "PT Maju Bersama");

    let fetched = app
        .request(Method::GET, &format!("/api/v1/vendors/{}", vendor_id), None)
        .await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let updated = app
        .request(
            Method::PUT,
            &format!("/api/v1/vendors/{}", vendor_id),
            Some(json!({ "phone": "+62822222222" })),
        )
        .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let updated = response_json(updated).await;
    assert_eq!(updated["data"]["phone"], "+62822222222");
    assert_eq!(updated["data"]["name"], "PT Maju Bersama");

    let listed = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/vendors?org_unit_id={}", org_unit_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(listed["data"]["total"], 1);

    let deleted = app
        .request(
            Method::DELETE,
            &format!("/api/v1/vendors/{}", vendor_id),
            None,
        )
        .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = app
        .request(Method::GET, &format!("/api/v1/vendors/{}", vendor_id), None)
        .await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    let gone = response_json(gone).await;
    assert_eq!(gone["success"], false);
}

#[tokio::test]
async fn vendor_creation_requires_a_name() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/vendors",
            Some(json!({ "name": "" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let app = TestApp::new().await;
    let missing = Uuid::new_v4();

    for uri in [
        format!("/api/v1/vendors/{}", missing),
        format!("/api/v1/teams/{}", missing),
        format!("/api/v1/personnel/{}", missing),
        format!("/api/v1/org-units/{}", missing),
        format!("/api/v1/equipment/{}", missing),
        format!("/api/v1/peruntukan/{}", missing),
        format!("/api/v1/equipment-standards/{}", missing),
        format!("/api/v1/assessments/{}", missing),
        format!("/api/v1/vendor-assets/{}", missing),
    ] {
        let response = app.request(Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {}", uri);
    }

    let delete = app
        .request(Method::DELETE, &format!("/api/v1/vendors/{}", missing), None)
        .await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn equipment_standard_lifecycle_and_listing_by_peruntukan() {
    let app = TestApp::new().await;

    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let other_peruntukan = app.seed_peruntukan("Kendaraan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;

    let created = app
        .request(
            Method::POST,
            "/api/v1/equipment-standards",
            Some(json!({
                "peruntukan_id": peruntukan_id,
                "equipment_id": helmet,
                "required_qty": 3,
            })),
        )
        .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let standard = response_json(created).await;
    let standard_id = standard["data"]["id"].as_str().expect("id").to_string();
    assert_eq!(standard["data"]["required_qty"], 3);

    let negative = app
        .request(
            Method::POST,
            "/api/v1/equipment-standards",
            Some(json!({
                "peruntukan_id": peruntukan_id,
                "equipment_id": helmet,
                "required_qty": -1,
            })),
        )
        .await;
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);

    let updated = response_json(
        app.request(
            Method::PUT,
            &format!("/api/v1/equipment-standards/{}", standard_id),
            Some(json!({ "required_qty": 5 })),
        )
        .await,
    )
    .await;
    assert_eq!(updated["data"]["required_qty"], 5);

    let for_peruntukan = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/equipment-standards?peruntukan_id={}", peruntukan_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(for_peruntukan["data"]["total"], 1);

    let for_other = response_json(
        app.request(
            Method::GET,
            &format!(
                "/api/v1/equipment-standards?peruntukan_id={}",
                other_peruntukan
            ),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(for_other["data"]["total"], 0);
}

#[tokio::test]
async fn equipment_listing_filters_by_category() {
    let app = TestApp::new().await;

    app.seed_equipment("Helm", "APD").await;
    app.seed_equipment("Rompi", "APD").await;
    app.seed_equipment("Dump Truck", "Kendaraan").await;

    let apd = response_json(
        app.request(Method::GET, "/api/v1/equipment?category=APD", None)
            .await,
    )
    .await;
    assert_eq!(apd["data"]["total"], 2);

    let vehicles = response_json(
        app.request(Method::GET, "/api/v1/equipment?category=Kendaraan", None)
            .await,
    )
    .await;
    assert_eq!(vehicles["data"]["total"], 1);

    let all = response_json(app.request(Method::GET, "/api/v1/equipment", None).await).await;
    assert_eq!(all["data"]["total"], 3);
}

#[tokio::test]
async fn assessment_listing_filters_and_paginates() {
    let app = TestApp::new().await;

    let vendor_a = app.seed_vendor("PT A").await;
    let vendor_b = app.seed_vendor("PT B").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let person_a = app.seed_personnel("A", vendor_a, None).await;
    let person_b = app.seed_personnel("B", vendor_b, None).await;

    for (vendor_id, personnel_id) in [(vendor_a, person_a), (vendor_a, person_a), (vendor_b, person_b)] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/assessments",
                Some(json!({
                    "tanggal_penilaian": "2024-06-01",
                    "shift": "Pagi",
                    "vendor_id": vendor_id,
                    "peruntukan_id": peruntukan_id,
                    "personnel_id": personnel_id,
                    "assessor_id": Uuid::new_v4(),
                    "items": [{
                        "equipment_id": helmet,
                        "required_qty": 1,
                        "actual_qty": 1,
                        "layak": 1,
                        "tidak_layak": 0,
                        "berfungsi": 1,
                        "tidak_berfungsi": 0,
                    }],
                })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let by_vendor = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/assessments?vendor_id={}", vendor_a),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(by_vendor["data"]["total"], 2);

    let by_status = response_json(
        app.request(Method::GET, "/api/v1/assessments?status=Submitted", None)
            .await,
    )
    .await;
    assert_eq!(by_status["data"]["total"], 3);

    let paged = response_json(
        app.request(Method::GET, "/api/v1/assessments?page=1&per_page=2", None)
            .await,
    )
    .await;
    assert_eq!(
        paged["data"]["assessments"].as_array().map(|a| a.len()),
        Some(2)
    );
    assert_eq!(paged["data"]["total"], 3);

    let drafts = response_json(
        app.request(Method::GET, "/api/v1/assessments?status=Draft", None)
            .await,
    )
    .await;
    assert_eq!(drafts["data"]["total"], 0);
}

#[tokio::test]
async fn store_rejects_rows_referencing_missing_parents() {
    let app = TestApp::new().await;

    let orphan_junction = assessment_personnel::ActiveModel {
        id: Set(Uuid::new_v4()),
        assessment_id: Set(Uuid::new_v4()),
        personnel_id: Set(Uuid::new_v4()),
        created_at: Set(Utc::now()),
    }
    .insert(&*app.state.db)
    .await;
    assert!(orphan_junction.is_err());

    let orphan_standard = equipment_standard::ActiveModel {
        id: Set(Uuid::new_v4()),
        peruntukan_id: Set(Uuid::new_v4()),
        equipment_id: Set(Uuid::new_v4()),
        required_qty: Set(1),
        created_at: Set(Utc::now()),
    }
    .insert(&*app.state.db)
    .await;
    assert!(orphan_standard.is_err());
}

#[tokio::test]
async fn health_and_status_endpoints_respond() {
    let app = TestApp::new().await;

    let health = app.request(Method::GET, "/api/v1/health", None).await;
    assert_eq!(health.status(), StatusCode::OK);
    let health = response_json(health).await;
    assert_eq!(health["success"], true);
    assert_eq!(health["data"]["checks"]["database"], "healthy");

    let status = app.request(Method::GET, "/api/v1/status", None).await;
    assert_eq!(status.status(), StatusCode::OK);
    let status = response_json(status).await;
    assert_eq!(status["data"]["status"], "ok");
}

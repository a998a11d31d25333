mod common;

use axum::http::{Method, StatusCode};
use common::{response_json, TestApp};
use k3_audit_api::entities::{assessment, assessment_personnel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;
use uuid::Uuid;

fn item_payload(equipment_id: Uuid, required: i32, actual: i32, tl: i32, tb: i32) -> serde_json::Value {
    json!({
        "equipment_id": equipment_id,
        "required_qty": required,
        "actual_qty": actual,
        "layak": actual - tl,
        "tidak_layak": tl,
        "berfungsi": actual - tb,
        "tidak_berfungsi": tb,
    })
}

#[tokio::test]
async fn submission_with_individual_owner_creates_audit_record_and_assets() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Aman Sentosa").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm Safety", "APD").await;
    let boots = app.seed_equipment("Sepatu Safety", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 2).await;
    app.seed_equipment_standard(peruntukan_id, boots, 2).await;
    let personnel_id = app.seed_personnel("Budi", vendor_id, None).await;
    let assessor_id = Uuid::new_v4();

    let body = json!({
        "tanggal_penilaian": "2024-06-01",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": assessor_id,
        "items": [
            item_payload(helmet, 2, 2, 0, 0),
            item_payload(boots, 2, 1, 1, 0),
        ],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response_json(response).await;
    let outcome = &body["data"];
    let assessment = &outcome["assessment"];
    assert_eq!(assessment["status"], "Submitted");
    assert_eq!(assessment["jumlah_item"], 2);
    assert_eq!(assessment["jumlah_layak"], 2);
    assert_eq!(assessment["jumlah_tidak_layak"], 1);
    assert_eq!(assessment["jumlah_berfungsi"], 3);
    assert_eq!(assessment["jumlah_tidak_berfungsi"], 0);
    // item scores: 2 (compliant, clean) and -1 (short quantity, one unfit)
    assert_eq!(assessment["total_score"], 0.5);

    let items = outcome["items"].as_array().expect("items array");
    assert_eq!(items.len(), 2);
    let helmet_item = items
        .iter()
        .find(|i| i["equipment_id"] == json!(helmet))
        .expect("helmet item");
    assert_eq!(helmet_item["kesesuaian_kontrak"], 2);
    assert_eq!(helmet_item["score_item"], 2);
    assert_eq!(helmet_item["status_kesesuaian"], "Sesuai");
    let boots_item = items
        .iter()
        .find(|i| i["equipment_id"] == json!(boots))
        .expect("boots item");
    assert_eq!(boots_item["kesesuaian_kontrak"], 0);
    assert_eq!(boots_item["kondisi_fisik"], -1);
    assert_eq!(boots_item["score_item"], -1);
    assert_eq!(boots_item["status_kesesuaian"], "Tidak Sesuai");

    // Every derived asset attributes to the personnel owner.
    let changes = outcome["vendor_assets"].as_array().expect("asset changes");
    assert_eq!(changes.len(), 2);
    assert!(changes.iter().all(|c| c["action"] == "created"));

    let list = app
        .request(
            Method::GET,
            &format!("/api/v1/vendor-assets?owner_id={}", personnel_id),
            None,
        )
        .await;
    assert_eq!(list.status(), StatusCode::OK);
    let list = response_json(list).await;
    assert_eq!(list["data"]["total"], 2);
    for asset in list["data"]["vendor_assets"].as_array().expect("assets") {
        assert_eq!(asset["owner_id"], json!(personnel_id));
        assert_eq!(asset["vendor_id"], json!(vendor_id));
    }
}

#[tokio::test]
async fn responses_are_wrapped_in_the_standard_envelope() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Amplop").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let personnel_id = app.seed_personnel("Gita", vendor_id, None).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-09",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 1, 1, 0, 0)],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let envelope = response_json(response).await;
    assert_eq!(envelope["success"], true);
    assert!(envelope.as_object().expect("object body").contains_key("message"));
    let data = envelope["data"].as_object().expect("data payload");
    assert!(data.contains_key("assessment"));
    assert!(data.contains_key("items"));
    assert!(data.contains_key("vendor_assets"));

    // Failures carry the same discriminator, flipped.
    let missing = app
        .request(
            Method::GET,
            &format!("/api/v1/assessments/{}", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let error = response_json(missing).await;
    assert_eq!(error["success"], false);
    assert!(error["message"].as_str().expect("message").contains("not found"));
}

#[tokio::test]
async fn vehicle_peruntukan_attributes_assets_to_team() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Truk Jaya").await;
    let peruntukan_id = app.seed_peruntukan("Kendaraan Operasional").await;
    let truck = app.seed_equipment("Dump Truck", "Kendaraan").await;
    let apar = app.seed_equipment("APAR", "APD").await;
    app.seed_equipment_standard(peruntukan_id, truck, 1).await;
    app.seed_equipment_standard(peruntukan_id, apar, 1).await;
    let team_id = app.seed_team("Tim A", vendor_id).await;
    let personnel_id = app.seed_personnel("Siti", vendor_id, Some(team_id)).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-02",
        "shift": "Malam",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "team_id": team_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [
            item_payload(truck, 1, 1, 0, 0),
            item_payload(apar, 1, 1, 0, 1),
        ],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let outcome = response_json(response).await;
    assert_eq!(
        outcome["data"]["vendor_assets"].as_array().map(|a| a.len()),
        Some(2)
    );

    // One vehicle standard is enough to make the whole submission team-owned,
    // including the non-vehicle items.
    let list = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/vendor-assets?owner_id={}", team_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(list["data"]["total"], 2);

    let by_personnel = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/vendor-assets?owner_id={}", personnel_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(by_personnel["data"]["total"], 0);
}

#[tokio::test]
async fn missing_owner_skips_asset_projection_but_keeps_assessment() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Tanpa Tim").await;
    let peruntukan_id = app.seed_peruntukan("Kendaraan Tambang").await;
    let truck = app.seed_equipment("Excavator", "Kendaraan").await;
    app.seed_equipment_standard(peruntukan_id, truck, 1).await;

    // Vehicle-based peruntukan but no team reference supplied.
    let body = json!({
        "tanggal_penilaian": "2024-06-03",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(truck, 1, 1, 0, 0)],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let outcome = response_json(response).await;
    assert_eq!(
        outcome["data"]["vendor_assets"].as_array().map(|a| a.len()),
        Some(0)
    );

    let assessment_id = outcome["data"]["assessment"]["id"]
        .as_str()
        .expect("id")
        .to_string();
    let fetched = app
        .request(
            Method::GET,
            &format!("/api/v1/assessments/{}", assessment_id),
            None,
        )
        .await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let assets = response_json(
        app.request(Method::GET, "/api/v1/vendor-assets", None)
            .await,
    )
    .await;
    assert_eq!(assets["data"]["total"], 0);
}

#[tokio::test]
async fn resubmission_updates_existing_assets_in_place() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Ulang").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 2).await;
    let personnel_id = app.seed_personnel("Andi", vendor_id, None).await;

    let first = json!({
        "tanggal_penilaian": "2024-06-01",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 2, 2, 0, 0)],
    });
    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(first))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first_outcome = response_json(response).await;
    assert_eq!(first_outcome["data"]["vendor_assets"][0]["action"], "created");
    let asset_id = first_outcome["data"]["vendor_assets"][0]["id"].clone();

    let second = json!({
        "tanggal_penilaian": "2024-06-08",
        "shift": "Malam",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 2, 1, 1, 0)],
    });
    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(second))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let second_outcome = response_json(response).await;
    assert_eq!(second_outcome["data"]["vendor_assets"][0]["action"], "updated");
    assert_eq!(second_outcome["data"]["vendor_assets"][0]["id"], asset_id);

    // Still one row per (owner, equipment); the latest submission wins.
    let list = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/vendor-assets?owner_id={}", personnel_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(list["data"]["total"], 1);
    let asset = &list["data"]["vendor_assets"][0];
    assert_eq!(asset["jumlah_terakhir"], 1);
    assert_eq!(asset["tanggal_distribusi"], "2024-06-08");
    assert_eq!(asset["kesesuaian_kontrak"], 0);
    assert_eq!(asset["score"], -1);
    assert_eq!(asset["status_kesesuaian"], "Tidak Sesuai");
    assert_eq!(
        asset["last_assessment_id"],
        second_outcome["data"]["assessment"]["id"]
    );
}

#[tokio::test]
async fn personnel_participants_are_linked_and_deduplicated() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Regu").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let primary = app.seed_personnel("Primary", vendor_id, None).await;
    let second = app.seed_personnel("Second", vendor_id, None).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-04",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": primary,
        "personnel_ids": [primary, second],
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 1, 1, 0, 0)],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let outcome = response_json(response).await;
    let assessment_id: Uuid = outcome["data"]["assessment"]["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("assessment id");

    let linked = assessment_personnel::Entity::find()
        .filter(assessment_personnel::Column::AssessmentId.eq(assessment_id))
        .count(&*app.state.db)
        .await
        .expect("count junction rows");
    assert_eq!(linked, 2);
}

#[tokio::test]
async fn failed_item_insert_rolls_back_the_header() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Gagal Baris").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let personnel_id = app.seed_personnel("Hadi", vendor_id, None).await;

    // Break the line-item table so the second stage of the transaction fails.
    app.state
        .db
        .execute_unprepared("DROP TABLE assessment_items")
        .await
        .expect("drop item table");

    let body = json!({
        "tanggal_penilaian": "2024-06-10",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 1, 1, 0, 0)],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let error = response_json(response).await;
    assert_eq!(error["success"], false);

    // The header must not survive a failed item insert.
    let headers = assessment::Entity::find()
        .count(&*app.state.db)
        .await
        .expect("count headers");
    assert_eq!(headers, 0);
}

#[tokio::test]
async fn junction_failure_leaves_audit_record_intact() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Setengah").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let personnel_id = app.seed_personnel("Indra", vendor_id, None).await;

    // Break only the participant junction; the audit record and the asset
    // projection must still go through.
    app.state
        .db
        .execute_unprepared("DROP TABLE assessment_personnel")
        .await
        .expect("drop junction table");

    let body = json!({
        "tanggal_penilaian": "2024-06-11",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 1, 1, 0, 0)],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let outcome = response_json(response).await;
    assert_eq!(outcome["success"], true);
    assert_eq!(
        outcome["data"]["vendor_assets"].as_array().map(|a| a.len()),
        Some(1)
    );
    let assessment_id = outcome["data"]["assessment"]["id"]
        .as_str()
        .expect("id")
        .to_string();

    let fetched = app
        .request(
            Method::GET,
            &format!("/api/v1/assessments/{}", assessment_id),
            None,
        )
        .await;
    assert_eq!(fetched.status(), StatusCode::OK);

    let items = response_json(
        app.request(
            Method::GET,
            &format!("/api/v1/assessments/{}/items", assessment_id),
            None,
        )
        .await,
    )
    .await;
    assert_eq!(items["data"].as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn empty_item_list_is_rejected_without_writing_anything() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Kosong").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let personnel_id = app.seed_personnel("Dewi", vendor_id, None).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-05",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = response_json(
        app.request(Method::GET, "/api/v1/assessments", None).await,
    )
    .await;
    assert_eq!(list["data"]["total"], 0);
}

#[tokio::test]
async fn negative_quantities_are_rejected() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Minus").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    let personnel_id = app.seed_personnel("Eko", vendor_id, None).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-06",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [{
            "equipment_id": helmet,
            "required_qty": 1,
            "actual_qty": -1,
            "layak": 0,
            "tidak_layak": 0,
            "berfungsi": 0,
            "tidak_berfungsi": 0,
        }],
    });

    let response = app
        .request(Method::POST, "/api/v1/assessments", Some(body))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = response_json(response).await;
    assert!(error["message"]
        .as_str()
        .expect("message")
        .contains("actual_qty"));
}

#[tokio::test]
async fn assessment_items_endpoint_returns_derived_lines() {
    let app = TestApp::new().await;

    let vendor_id = app.seed_vendor("PT Baris").await;
    let peruntukan_id = app.seed_peruntukan("Perorangan").await;
    let helmet = app.seed_equipment("Helm", "APD").await;
    app.seed_equipment_standard(peruntukan_id, helmet, 1).await;
    let personnel_id = app.seed_personnel("Fajar", vendor_id, None).await;

    let body = json!({
        "tanggal_penilaian": "2024-06-07",
        "shift": "Pagi",
        "vendor_id": vendor_id,
        "peruntukan_id": peruntukan_id,
        "personnel_id": personnel_id,
        "assessor_id": Uuid::new_v4(),
        "items": [item_payload(helmet, 1, 2, 0, 1)],
    });

    let outcome = response_json(
        app.request(Method::POST, "/api/v1/assessments", Some(body))
            .await,
    )
    .await;
    let assessment_id = outcome["data"]["assessment"]["id"]
        .as_str()
        .expect("id")
        .to_string();

    let items = app
        .request(
            Method::GET,
            &format!("/api/v1/assessments/{}/items", assessment_id),
            None,
        )
        .await;
    assert_eq!(items.status(), StatusCode::OK);
    let items = response_json(items).await;
    let items = items["data"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kesesuaian_kontrak"], 2);
    assert_eq!(items[0]["kondisi_fungsi"], -1);
    assert_eq!(items[0]["score_item"], 1);

    let missing = app
        .request(
            Method::GET,
            &format!("/api/v1/assessments/{}/items", Uuid::new_v4()),
            None,
        )
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

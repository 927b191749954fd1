use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use pharmasync_client::{
    BackendConfig, ClientConfig, ClientError, HttpBackend, InventoryBackend, Session,
};
use pharmasync_core::{MedicineName, PharmacyName};
use pharmasync_inventory::{
    LowStockRule, MedicineRecord, PharmacyRecord, SearchHit, StockEdit,
};

/// In-memory stand-in for the inventory backend.
#[derive(Clone)]
struct Stub {
    pharmacies: Arc<Mutex<Vec<PharmacyRecord>>>,
    updates: Arc<Mutex<Vec<StockEdit>>>,
    reject_medicine: Option<&'static str>,
}

impl Stub {
    fn new(pharmacies: Vec<PharmacyRecord>) -> Self {
        Self {
            pharmacies: Arc::new(Mutex::new(pharmacies)),
            updates: Arc::new(Mutex::new(Vec::new())),
            reject_medicine: None,
        }
    }

    fn rejecting(mut self, medicine: &'static str) -> Self {
        self.reject_medicine = Some(medicine);
        self
    }

    fn stock_of(&self, pharmacy: &str, medicine: &str) -> Option<u32> {
        self.pharmacies
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name.as_str() == pharmacy)
            .and_then(|p| p.find(medicine))
            .map(|m| m.stock)
    }

    fn router(self) -> Router {
        Router::new()
            .route("/pharmacies", get(list_pharmacies))
            .route("/pharmacy/:name", get(get_pharmacy))
            .route("/medicines", get(list_medicines))
            .route("/search", post(search))
            .route("/update_stock", post(update_stock))
            .with_state(self)
    }
}

async fn list_pharmacies(State(stub): State<Stub>) -> Json<Vec<PharmacyRecord>> {
    Json(stub.pharmacies.lock().unwrap().clone())
}

async fn get_pharmacy(
    State(stub): State<Stub>,
    Path(name): Path<String>,
) -> Result<Json<PharmacyRecord>, StatusCode> {
    stub.pharmacies
        .lock()
        .unwrap()
        .iter()
        .find(|p| p.name.as_str() == name)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_medicines(State(stub): State<Stub>) -> Json<Vec<String>> {
    let mut names: Vec<String> = stub
        .pharmacies
        .lock()
        .unwrap()
        .iter()
        .flat_map(|p| p.inventory.iter().map(|m| m.medicine.to_string()))
        .collect();
    names.sort();
    names.dedup();
    Json(names)
}

async fn search(State(stub): State<Stub>, Json(body): Json<Value>) -> Json<Vec<SearchHit>> {
    let medicine = body["medicine"].as_str().unwrap_or_default().to_string();
    let hits = stub
        .pharmacies
        .lock()
        .unwrap()
        .iter()
        .filter_map(|p| {
            p.find(&medicine)
                .filter(|m| m.stock > 0)
                .map(|m| SearchHit {
                    pharmacy: p.name.clone(),
                    stock: m.stock,
                    address: p.address.clone(),
                })
        })
        .collect();
    Json(hits)
}

async fn update_stock(State(stub): State<Stub>, Json(edit): Json<StockEdit>) -> StatusCode {
    stub.updates.lock().unwrap().push(edit.clone());

    if stub.reject_medicine == Some(edit.medicine.as_str()) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut pharmacies = stub.pharmacies.lock().unwrap();
    let row = pharmacies
        .iter_mut()
        .find(|p| p.name == edit.pharmacy)
        .and_then(|p| p.inventory.iter_mut().find(|m| m.medicine == edit.medicine));

    match row {
        Some(row) => {
            row.stock = edit.new_stock;
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        // Same client as prod, stub backend bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn backend(&self) -> HttpBackend {
        HttpBackend::new(&BackendConfig {
            uri: self.base_url.clone(),
            timeout_secs: 5,
        })
        .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn seed() -> Vec<PharmacyRecord> {
    vec![
        PharmacyRecord::new("Central", "1 Main St").with_inventory(vec![
            MedicineRecord::new("Aspirin", 10).with_subscriptions(2),
            MedicineRecord::new("Ibuprofen", 0),
            MedicineRecord::new("Insulin", 3).with_subscriptions(5),
        ]),
        PharmacyRecord::new("Green Cross", "22 Elm Rd").with_inventory(vec![
            MedicineRecord::new("Aspirin", 4),
            MedicineRecord::new("Codeine", 7),
        ]),
    ]
}

#[tokio::test]
async fn reads_round_trip_through_http() {
    let server = TestServer::spawn(Stub::new(seed()).router()).await;
    let backend = server.backend();

    let pharmacies = backend.list_pharmacies().await.unwrap();
    assert_eq!(pharmacies, seed());

    let green = backend
        .get_pharmacy(&PharmacyName::from("Green Cross"))
        .await
        .unwrap();
    assert_eq!(green.address, "22 Elm Rd");

    let medicines = backend.list_medicines().await.unwrap();
    assert_eq!(
        medicines,
        vec![
            MedicineName::from("Aspirin"),
            MedicineName::from("Codeine"),
            MedicineName::from("Ibuprofen"),
            MedicineName::from("Insulin"),
        ]
    );
}

#[tokio::test]
async fn search_posts_medicine_and_returns_hits() {
    let server = TestServer::spawn(Stub::new(seed()).router()).await;
    let backend = server.backend();

    let hits = backend.search(&MedicineName::from("Aspirin")).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].pharmacy.as_str(), "Green Cross");
    assert_eq!(hits[1].stock, 4);

    // Out of stock everywhere is an empty result, not an error.
    let none = backend.search(&MedicineName::from("Ibuprofen")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn unknown_pharmacy_is_an_api_error() {
    let server = TestServer::spawn(Stub::new(seed()).router()).await;
    let err = server
        .backend()
        .get_pharmacy(&PharmacyName::from("Nowhere"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn batch_stops_at_first_rejected_edit() {
    let stub = Stub::new(seed()).rejecting("Ibuprofen");
    let server = TestServer::spawn(stub.clone().router()).await;
    let session = Session::new(server.backend(), LowStockRule::default());

    let central = session
        .pharmacy(&PharmacyName::from("Central"))
        .await
        .value
        .expect("Central is seeded");

    let edits = session
        .plan_edits(
            &central,
            &[
                (MedicineName::from("Aspirin"), 12),
                (MedicineName::from("Ibuprofen"), 5),
                (MedicineName::from("Insulin"), 9),
            ],
        )
        .unwrap();
    assert_eq!(edits.len(), 3);

    let report = session.submit(edits).await;

    // Only the first two edits ever reached the backend.
    let sent: Vec<String> = stub
        .updates
        .lock()
        .unwrap()
        .iter()
        .map(|e| e.medicine.to_string())
        .collect();
    assert_eq!(sent, vec!["Aspirin", "Ibuprofen"]);

    assert_eq!(report.applied, vec![StockEdit::new("Central", "Aspirin", 12)]);
    assert_eq!(report.not_attempted, vec![StockEdit::new("Central", "Insulin", 9)]);

    // No rollback of the applied edit, and the skipped one is untouched.
    assert_eq!(stub.stock_of("Central", "Aspirin"), Some(12));
    assert_eq!(stub.stock_of("Central", "Ibuprofen"), Some(0));
    assert_eq!(stub.stock_of("Central", "Insulin"), Some(3));

    let err = report.into_result().unwrap_err();
    assert!(err.to_string().starts_with("failed to update Ibuprofen"));
}

#[tokio::test]
async fn successful_batch_is_visible_on_next_read() {
    let stub = Stub::new(seed());
    let server = TestServer::spawn(stub.clone().router()).await;
    let session = Session::new(server.backend(), LowStockRule::default());

    let report = session
        .submit(vec![StockEdit::new("Green Cross", "Codeine", 0)])
        .await;
    assert!(report.is_success());

    let overview = session.overview().await;
    assert!(!overview.is_degraded());
    assert_eq!(overview.value.get("Codeine"), Some(&0));
    assert_eq!(overview.value.get("Aspirin"), Some(&14));
}

#[tokio::test]
async fn unreachable_backend_degrades_reads() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default().with_backend_uri(format!("http://{}", addr));
    let session = Session::connect(&config.validated().unwrap()).unwrap();

    let pharmacies = session.pharmacies().await;
    assert!(pharmacies.value.is_empty());
    assert!(
        pharmacies
            .warning
            .as_deref()
            .unwrap()
            .starts_with("Could not load pharmacies: transport error")
    );
}

#[tokio::test]
async fn malformed_payload_is_a_parse_error() {
    let app = Router::new().route(
        "/pharmacies",
        get(|| async {
            Json(json!([{
                "name": "Central",
                "address": "1 Main St",
                "inventory": [{"medicine": "Aspirin", "stock": -3}]
            }]))
        }),
    );
    let server = TestServer::spawn(app).await;

    let err = server.backend().list_pharmacies().await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

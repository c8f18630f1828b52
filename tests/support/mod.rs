// Stub EDSM server shared by the integration tests in this binary.
use axum::{Json, Router, extract::Query, routing::get};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const SPHERE_SYSTEMS_PATH: &str = "/api-v1/sphere-systems";

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the stub is running and return its base URL (scheme, host and port).
pub fn ensure_stub_edsm() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // A dedicated OS thread keeps the runtime away from the blocking client under test.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                axum::serve(listener, stub_app()).await.expect("stub server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

fn stub_app() -> Router {
    Router::new()
        .route(SPHERE_SYSTEMS_PATH, get(sphere_systems))
        .route("/maintenance", get(maintenance))
        .route("/rejected", get(rejected))
}

// Echo the received query back as the last system so tests can check the parameters.
async fn sphere_systems(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let param = |key: &str| params.get(key).map(String::as_str).unwrap_or("-").to_string();
    let echo = format!(
        "x={} y={} z={} radius={}",
        param("x"),
        param("y"),
        param("z"),
        param("radius")
    );

    Json(json!([
        {"name": "Sol", "id": 27, "distance": 0},
        {"name": "Alpha Centauri", "coords": {"x": 3.03125, "y": -0.09375, "z": 3.15625}},
        {"name": echo}
    ]))
}

async fn maintenance() -> &'static str {
    "<html>EDSM is under maintenance</html>"
}

async fn rejected() -> Json<Value> {
    Json(json!({}))
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("stub server did not become ready in time");
}

use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes;
use server::state::ServerState;

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    service::seed::seed_sample_data(&db).await?;

    let app = routes::build_router(ServerState::new(db), tower_http::cors::CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_patch_then_read_back() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.patch(format!("{}/powers/1", app.base_url))
        .json(&json!({"description": "Flight power description long enough"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.patch(format!("{}/powers/1", app.base_url))
        .json(&json!({"description": "short"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let body = c.get(format!("{}/powers/1", app.base_url)).send().await?.json::<serde_json::Value>().await?;
    assert_eq!(body["description"], "Flight power description long enough");
    Ok(())
}

#[tokio::test]
async fn e2e_cors_headers_present() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .get(format!("{}/heroes", app.base_url))
        .header("Origin", "http://localhost:3000")
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}

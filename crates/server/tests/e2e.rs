use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, AppState};

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Use DATABASE_URL from environment; if not present, skip tests gracefully
    if std::env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!("missing DATABASE_URL"));
    }

    // Connect DB and run migrations
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = AppState { db };
    let app: Router = routes::build_router(state, cors());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn catalog_flow_end_to_end() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip e2e: {}", e);
            return Ok(());
        }
    };
    let client = reqwest::Client::new();

    // health
    let res = client.get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), 200);
    let health: Value = res.json().await?;
    assert_eq!(health["status"], "ok");

    // create brand
    let res = client
        .post(format!("{}/marcas/", app.base_url))
        .json(&json!({"nombre": "Honda", "pais_origen": "Japan", "anio_fundacion": 1948}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let brand: Value = res.json().await?;
    let brand_id = brand["id"].as_i64().expect("brand id");
    assert_eq!(brand["nombre"], "Honda");
    assert_eq!(brand["pais_origen"], "Japan");
    assert_eq!(brand["anio_fundacion"], 1948);

    // brand validation failure
    let res = client
        .post(format!("{}/marcas/", app.base_url))
        .json(&json!({"nombre": "Antique", "pais_origen": "UK", "anio_fundacion": 1700}))
        .send()
        .await?;
    assert_eq!(res.status(), 422);

    // motorcycle with a missing brand is 404
    let res = client
        .post(format!("{}/motos/", app.base_url))
        .json(&json!({
            "modelo": "Ghost", "cilindrada": 500, "potencia": 47,
            "precio": 7000.0, "anio": 2023, "marca_id": 2147483647
        }))
        .send()
        .await?;
    assert_eq!(res.status(), 404);

    // create motorcycle
    let res = client
        .post(format!("{}/motos/", app.base_url))
        .json(&json!({
            "modelo": "CB500", "cilindrada": 500, "potencia": 47,
            "precio": 7000.0, "anio": 2023, "marca_id": brand_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let moto: Value = res.json().await?;
    let moto_id = moto["id"].as_i64().expect("moto id");
    assert_eq!(moto["modelo"], "CB500");
    assert_eq!(moto["marca_id"], brand_id);

    // list with oversized limit is capped; filter by brand isolates our rows
    let res = client
        .get(format!("{}/motos/?limit=500&marca_id={}", app.base_url, brand_id))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let listed: Vec<Value> = res.json().await?;
    assert!(listed.len() <= 100);
    assert!(listed.iter().any(|m| m["id"].as_i64() == Some(moto_id)));

    // the tipo filter is accepted but has no backing column
    let res = client
        .get(format!("{}/motos/?tipo=sport&marca_id={}", app.base_url, brand_id))
        .send()
        .await?;
    assert_eq!(res.status(), 200);

    // single read comes joined with its brand
    let res = client.get(format!("{}/motos/{}", app.base_url, moto_id)).send().await?;
    assert_eq!(res.status(), 200);
    let with_brand: Value = res.json().await?;
    assert_eq!(with_brand["modelo"], "CB500");
    assert_eq!(with_brand["marca"]["nombre"], "Honda");

    // an empty patch body is a no-op, not an error
    let res = client
        .patch(format!("{}/motos/{}", app.base_url, moto_id))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let unchanged: Value = res.json().await?;
    assert_eq!(unchanged["precio"], 7000.0);
    assert_eq!(unchanged["modelo"], "CB500");

    // partial update touches only precio
    let res = client
        .patch(format!("{}/motos/{}", app.base_url, moto_id))
        .json(&json!({"precio": 9000.0}))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let updated: Value = res.json().await?;
    assert_eq!(updated["precio"], 9000.0);
    assert_eq!(updated["modelo"], "CB500");
    assert_eq!(updated["cilindrada"], 500);
    assert_eq!(updated["anio"], 2023);

    // create specification; a second one for the same moto is rejected
    let res = client
        .post(format!("{}/especificaciones/", app.base_url))
        .json(&json!({
            "tipo_motor": "inline-4", "refrigeracion": "liquid",
            "transmision": 6, "capacidad_tanque": 17.0, "id_moto": moto_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), 200);
    let spec: Value = res.json().await?;
    assert_eq!(spec["id_moto"], moto_id);

    let res = client
        .post(format!("{}/especificaciones/", app.base_url))
        .json(&json!({
            "tipo_motor": "v-twin", "refrigeracion": "air",
            "transmision": 5, "capacidad_tanque": 12.0, "id_moto": moto_id
        }))
        .send()
        .await?;
    assert_eq!(res.status(), 400);

    // specification for a missing motorcycle is 404
    let res = client
        .post(format!("{}/especificaciones/", app.base_url))
        .json(&json!({
            "tipo_motor": "single", "refrigeracion": "air",
            "transmision": 4, "capacidad_tanque": 9.5, "id_moto": 2147483647
        }))
        .send()
        .await?;
    assert_eq!(res.status(), 404);

    // delete cascades the specification and acknowledges
    let res = client.delete(format!("{}/motos/{}", app.base_url, moto_id)).send().await?;
    assert_eq!(res.status(), 200);
    let ack: Value = res.json().await?;
    assert_eq!(ack["ok"], true);

    let res = client.get(format!("{}/motos/{}", app.base_url, moto_id)).send().await?;
    assert_eq!(res.status(), 404);
    let res = client.delete(format!("{}/motos/{}", app.base_url, moto_id)).send().await?;
    assert_eq!(res.status(), 404);

    // patching the deleted moto is also 404
    let res = client
        .patch(format!("{}/motos/{}", app.base_url, moto_id))
        .json(&json!({"precio": 1.0}))
        .send()
        .await?;
    assert_eq!(res.status(), 404);

    Ok(())
}

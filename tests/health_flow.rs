mod common;

use actix_web::{test, http::StatusCode};
use common::{TestContext, client::TestClient};

#[actix_web::test]
async fn test_health_check_flow_success() {
    println!("\n\n[+] Running test: test_health_check_flow_success");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.store.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let req = test::TestRequest::get()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: Health check successful.");
}

#[actix_web::test]
async fn test_health_check_flow_wrong_http_method() {
    println!("\n\n[+] Running test: test_health_check_flow_wrong_http_method");
    let ctx = TestContext::new();
    let client = TestClient::new(ctx.store.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending POST request to /health (expecting failure)");
    let req = test::TestRequest::post()
        .uri("/health")
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: Correctly returned NOT_FOUND for wrong HTTP method.");
}

use futures_util::future::join_all;
use serde_json::Value;

use crate::helpers::TestApp;

fn order_body(customer_id: i64, items: &[(i64, i64)]) -> Value{
    let items: Vec<Value> = items.iter()
        .map(|(product_id, quantity)| serde_json::json!({ "product_id": product_id, "quantity": quantity }))
        .collect();

    serde_json::json!({ "customer_id": customer_id, "items": items })
}

#[actix_web::test]
async fn single_line_order_decrements_stock_and_prices_line(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("widget", 10.0, 5).await;

    let response = app.post_json("/orders", &order_body(customer_id, &[(product_id, 3)])).await;
    assert_eq!(response.status().as_u16(), 201);

    let order: Value = response.json().await.unwrap();
    assert_eq!(order["customer_id"].as_i64(), Some(customer_id));
    assert_eq!(order["status"], "Pending");
    assert!(order["order_date"].is_string());

    assert_eq!(app.stock_level_of(product_id), 2);

    let response = app.get(&format!("/orders/{}/items", order["id"])).await;
    assert_eq!(response.status().as_u16(), 200);

    let items: Vec<Value> = response.json().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_id"].as_i64(), Some(product_id));
    assert_eq!(items[0]["quantity"].as_i64(), Some(3));
    assert_eq!(items[0]["price"].as_f64(), Some(30.0));
    assert_eq!(items[0]["order_id"], order["id"]);
}

#[actix_web::test]
async fn multi_line_order_creates_item_per_line(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let first = app.create_product("bolt", 0.5, 50).await;
    let second = app.create_product("nut", 0.25, 75).await;
    let third = app.create_product("washer", 0.125, 28).await;

    let body = order_body(customer_id, &[(first, 5), (second, 8), (third, 28)]);
    let response = app.post_json("/orders", &body).await;
    assert_eq!(response.status().as_u16(), 201);
    let order: Value = response.json().await.unwrap();

    assert_eq!(app.stock_level_of(first), 45);
    assert_eq!(app.stock_level_of(second), 67);
    assert_eq!(app.stock_level_of(third), 0);

    let items: Vec<Value> = app.get(&format!("/orders/{}/items", order["id"])).await.json().await.unwrap();
    let lines: Vec<(i64, i64, f64)> = items.iter()
        .map(|item| (
            item["product_id"].as_i64().unwrap(),
            item["quantity"].as_i64().unwrap(),
            item["price"].as_f64().unwrap()
        ))
        .collect();

    assert_eq!(lines, vec![(first, 5, 2.5), (second, 8, 2.0), (third, 28, 3.5)]);
}

#[actix_web::test]
async fn insufficient_stock_aborts_whole_order(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let plenty = app.create_product("plenty", 2.0, 10).await;
    let scarce = app.create_product("scarce", 3.0, 1).await;

    let body = order_body(customer_id, &[(plenty, 4), (scarce, 2)]);
    let response = app.post_json("/orders", &body).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], format!("insufficient stock for product ID {}", scarce));

    assert_eq!(app.stock_level_of(plenty), 10);
    assert_eq!(app.stock_level_of(scarce), 1);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn only_first_failing_line_is_reported(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let first = app.create_product("first", 1.0, 0).await;
    let second = app.create_product("second", 1.0, 0).await;

    let response = app.post_json("/orders", &order_body(customer_id, &[(first, 1), (second, 1)])).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], format!("insufficient stock for product ID {}", first));
}

#[actix_web::test]
async fn unknown_product_is_reported_as_insufficient_stock(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;

    let response = app.post_json("/orders", &order_body(customer_id, &[(9999, 1)])).await;
    assert_eq!(response.status().as_u16(), 400);

    let error: Value = response.json().await.unwrap();
    assert_eq!(error["error"], "insufficient stock for product ID 9999");
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn exact_stock_can_be_ordered(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("last one", 99.0, 1).await;

    let response = app.post_json("/orders", &order_body(customer_id, &[(product_id, 1)])).await;
    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(app.stock_level_of(product_id), 0);

    let response = app.post_json("/orders", &order_body(customer_id, &[(product_id, 1)])).await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.stock_level_of(product_id), 0);
}

#[actix_web::test]
async fn non_positive_quantity_is_rejected(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("gizmo", 5.0, 5).await;

    for quantity in [0, -3] {
        let response = app.post_json("/orders", &order_body(customer_id, &[(product_id, quantity)])).await;
        assert_eq!(response.status().as_u16(), 400);
    }

    assert_eq!(app.stock_level_of(product_id), 5);
    assert_eq!(app.order_count(), 0);
}

#[actix_web::test]
async fn order_for_unknown_customer_is_not_found(){
    let app = TestApp::spawn_app().await;
    let product_id = app.create_product("gadget", 5.0, 5).await;

    let response = app.post_json("/orders", &order_body(8080, &[(product_id, 1)])).await;
    assert_eq!(response.status().as_u16(), 404);

    assert_eq!(app.stock_level_of(product_id), 5);
}

#[actix_web::test]
async fn malformed_order_body_is_bad_request(){
    let app = TestApp::spawn_app().await;

    let response = app.post_json("/orders", &serde_json::json!({ "items": [] })).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[actix_web::test]
async fn read_order_by_id(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("clock", 12.0, 3).await;

    let created: Value = app.post_json("/orders", &order_body(customer_id, &[(product_id, 1)]))
        .await
        .json()
        .await
        .unwrap();

    let response = app.get(&format!("/orders/{}", created["id"])).await;
    assert_eq!(response.status().as_u16(), 200);

    let order: Value = response.json().await.unwrap();
    assert_eq!(order, created);
}

#[actix_web::test]
async fn read_missing_order_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/orders/123").await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.get("/orders/123/items").await;
    assert_eq!(response.status().as_u16(), 404);
}

#[actix_web::test]
async fn order_status_can_be_overwritten(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("frame", 7.0, 2).await;

    let created: Value = app.post_json("/orders", &order_body(customer_id, &[(product_id, 2)]))
        .await
        .json()
        .await
        .unwrap();

    let response = app.put_json(&format!("/orders/{}", created["id"]), &serde_json::json!({ "status": "Shipped" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let order: Value = response.json().await.unwrap();
    assert_eq!(order["status"], "Shipped");
    assert_eq!(order["customer_id"], created["customer_id"]);
}

#[actix_web::test]
async fn overlong_status_is_rejected(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;

    let created: Value = app.post_json("/orders", &order_body(customer_id, &[]))
        .await
        .json()
        .await
        .unwrap();

    let status = "x".repeat(51);
    let response = app.put_json(&format!("/orders/{}", created["id"]), &serde_json::json!({ "status": status })).await;
    assert_eq!(response.status().as_u16(), 409);

    let order: Value = app.get(&format!("/orders/{}", created["id"])).await.json().await.unwrap();
    assert_eq!(order["status"], "Pending");
}

#[actix_web::test]
async fn concurrent_orders_never_oversell(){
    let app = TestApp::spawn_app().await;
    let customer_id = app.create_customer().await;
    let product_id = app.create_product("limited edition", 50.0, 5).await;

    let body = order_body(customer_id, &[(product_id, 1)]);
    let requests = (0..20).map(|_| app.post_json("/orders", &body));
    let responses = join_all(requests).await;

    let created = responses.iter().filter(|r| r.status().as_u16() == 201).count();
    let rejected = responses.iter().filter(|r| r.status().as_u16() == 400).count();

    assert_eq!(created, 5);
    assert_eq!(rejected, 15);
    assert_eq!(app.stock_level_of(product_id), 0);
    assert_eq!(app.order_count(), 5);
}

#[actix_web::test]
async fn status_update_of_missing_order_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.put_json("/orders/31", &serde_json::json!({ "status": "Shipped" })).await;

    assert_eq!(response.status().as_u16(), 404);
}

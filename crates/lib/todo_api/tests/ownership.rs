//! List and todo CRUD scoped by ownership, end to end.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{JANE, JOHN, TestApp, spawn_app};

async fn create_list(app: &TestApp, cookie: &str, title: &str) -> i64 {
    let resp = app
        .send(Method::POST, "/lists", Some(cookie), Some(json!({"title": title})))
        .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.json);
    resp.json["id"].as_i64().unwrap()
}

async fn create_todo(app: &TestApp, cookie: &str, list_id: i64, title: &str) -> i64 {
    let resp = app
        .send(
            Method::POST,
            &format!("/lists/{list_id}/todos"),
            Some(cookie),
            Some(json!({"title": title})),
        )
        .await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.json);
    resp.json["id"].as_i64().unwrap()
}

#[tokio::test]
async fn other_users_list_is_not_found() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;
    let jane = app.access_cookie_for(JANE).await;

    let created = app
        .send(
            Method::POST,
            "/lists",
            Some(&john),
            Some(json!({"title": "Shopping List"})),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.json["id"], 1);
    assert_eq!(created.json["title"], "Shopping List");
    assert_eq!(created.json["createdBy"], 1);
    assert!(created.json["description"].is_null());
    assert!(created.json["createdAt"].is_string());

    let as_jane = app.send(Method::GET, "/lists/1", Some(&jane), None).await;
    assert_eq!(as_jane.status, StatusCode::NOT_FOUND);
    assert_eq!(as_jane.json, json!({"error": "List not found"}));

    for (method, body) in [
        (Method::PUT, Some(json!({"title": "Mine now"}))),
        (Method::DELETE, None),
    ] {
        let resp = app.send(method, "/lists/1", Some(&jane), body).await;
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
    }

    let jane_lists = app.send(Method::GET, "/lists", Some(&jane), None).await;
    assert_eq!(jane_lists.json, json!([]));

    let todos = app.send(Method::GET, "/lists/1/todos", Some(&jane), None).await;
    assert_eq!(todos.status, StatusCode::NOT_FOUND);

    let add = app
        .send(
            Method::POST,
            "/lists/1/todos",
            Some(&jane),
            Some(json!({"title": "Sneaky"})),
        )
        .await;
    assert_eq!(add.status, StatusCode::NOT_FOUND);

    let still_there = app.send(Method::GET, "/lists/1", Some(&john), None).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.json["title"], "Shopping List");
}

#[tokio::test]
async fn other_users_todo_is_forbidden() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;
    let jane = app.access_cookie_for(JANE).await;

    let list_id = create_list(&app, &john, "Groceries").await;
    let todo_id = create_todo(&app, &john, list_id, "Milk").await;
    let uri = format!("/todos/{todo_id}");

    for (method, body) in [
        (Method::GET, None),
        (Method::PUT, Some(json!({"done": true}))),
        (Method::DELETE, None),
    ] {
        let resp = app.send(method, &uri, Some(&jane), body).await;
        assert_eq!(resp.status, StatusCode::FORBIDDEN);
        assert_eq!(resp.json, json!({"error": "Forbidden"}));
    }

    let missing = app.send(Method::GET, "/todos/999", Some(&jane), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.json, json!({"error": "Todo not found"}));

    let owner = app.send(Method::GET, &uri, Some(&john), None).await;
    assert_eq!(owner.status, StatusCode::OK);
    assert_eq!(owner.json["done"], false);
}

#[tokio::test]
async fn deleting_a_list_removes_its_todos() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;

    let list_id = create_list(&app, &john, "Weekend").await;
    let todo_id = create_todo(&app, &john, list_id, "Mow the lawn").await;

    let deleted = app
        .send(Method::DELETE, &format!("/lists/{list_id}"), Some(&john), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json, json!({"message": "List deleted successfully"}));

    let todo = app
        .send(Method::GET, &format!("/todos/{todo_id}"), Some(&john), None)
        .await;
    assert_eq!(todo.status, StatusCode::NOT_FOUND);

    let again = app
        .send(Method::DELETE, &format!("/lists/{list_id}"), Some(&john), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn owner_crud_round() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;

    let created = app
        .send(
            Method::POST,
            "/lists",
            Some(&john),
            Some(json!({"title": "Chores", "description": "house"})),
        )
        .await;
    let list_id = created.json["id"].as_i64().unwrap();

    let renamed = app
        .send(
            Method::PUT,
            &format!("/lists/{list_id}"),
            Some(&john),
            Some(json!({"title": "Weekend chores"})),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.json["title"], "Weekend chores");
    assert_eq!(renamed.json["description"], "house");

    let first = create_todo(&app, &john, list_id, "Dishes").await;
    let second = create_todo(&app, &john, list_id, "Laundry").await;

    let toggled = app
        .send(
            Method::PUT,
            &format!("/todos/{first}"),
            Some(&john),
            Some(json!({"done": true})),
        )
        .await;
    assert_eq!(toggled.status, StatusCode::OK);
    assert_eq!(
        toggled.json,
        json!({"id": first, "listId": list_id, "title": "Dishes", "done": true})
    );

    let removed = app
        .send(Method::DELETE, &format!("/todos/{second}"), Some(&john), None)
        .await;
    assert_eq!(removed.json, json!({"message": "Todo deleted successfully"}));

    let todos = app
        .send(Method::GET, &format!("/lists/{list_id}/todos"), Some(&john), None)
        .await;
    assert_eq!(todos.status, StatusCode::OK);
    assert_eq!(todos.json.as_array().unwrap().len(), 1);
    assert_eq!(todos.json[0]["id"], first);

    let lists = app.send(Method::GET, "/lists", Some(&john), None).await;
    assert_eq!(lists.json.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn bad_ids_and_bodies_are_rejected() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;

    let bad_list = app.send(Method::GET, "/lists/abc", Some(&john), None).await;
    assert_eq!(bad_list.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_list.json, json!({"error": "Invalid list ID"}));

    let bad_todo = app.send(Method::GET, "/todos/0", Some(&john), None).await;
    assert_eq!(bad_todo.json, json!({"error": "Invalid todo ID"}));

    let empty_title = app
        .send(Method::POST, "/lists", Some(&john), Some(json!({"title": ""})))
        .await;
    assert_eq!(empty_title.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_title.json["details"][0]["path"], "title");
    assert_eq!(empty_title.json["details"][0]["message"], "Title is required");

    let wrong_type = app
        .send(Method::POST, "/lists", Some(&john), Some(json!({"title": 5})))
        .await;
    assert_eq!(wrong_type.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_type.json["error"], "Validation error");
    assert_eq!(wrong_type.json["details"][0]["path"], "title");
}

#[tokio::test]
async fn path_id_is_checked_before_the_body() {
    let app = spawn_app().await;
    let john = app.access_cookie_for(JOHN).await;

    for (method, uri, label) in [
        (Method::POST, "/lists/abc/todos", "list"),
        (Method::PUT, "/lists/abc", "list"),
        (Method::PUT, "/todos/-1", "todo"),
    ] {
        let resp = app
            .send(method, uri, Some(&john), Some(json!({"title": ""})))
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST);
        assert_eq!(resp.json, json!({"error": format!("Invalid {label} ID")}));
    }
}

#[tokio::test]
async fn list_routes_require_a_session() {
    let app = spawn_app().await;
    for (method, uri) in [
        (Method::GET, "/lists"),
        (Method::GET, "/lists/1"),
        (Method::GET, "/lists/1/todos"),
        (Method::GET, "/todos/1"),
        (Method::DELETE, "/todos/1"),
    ] {
        let resp = app.send(method, uri, None, None).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED);
        assert_eq!(resp.json, json!({"error": "Not authenticated"}));
    }
}

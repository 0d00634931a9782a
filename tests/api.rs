// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the backend client, against a mock server.

use iced_feed::api::{Client, FilePayload};
use iced_feed::domain::{PostType, UserId};
use iced_feed::error::ApiError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    Client::new(&server.uri()).expect("client")
}

#[tokio::test]
async fn get_user_info_parses_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_user_info/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "ana",
            "profile_pic": "/static/uploads/ana.png",
            "bio": "Fotógrafa"
        })))
        .mount(&server)
        .await;

    let info = client_for(&server)
        .await
        .get_user_info(UserId::new(2))
        .await
        .expect("user info");

    assert_eq!(info.username, "ana");
    assert_eq!(info.profile_pic, "/static/uploads/ana.png");
    assert_eq!(info.bio.as_deref(), Some("Fotógrafa"));
}

#[tokio::test]
async fn get_user_info_null_bio_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_user_info/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "ana",
            "profile_pic": "/static/uploads/ana.png",
            "bio": null
        })))
        .mount(&server)
        .await;

    let info = client_for(&server)
        .await
        .get_user_info(UserId::new(2))
        .await
        .expect("user info");

    assert!(info.bio.is_none());
}

#[tokio::test]
async fn get_user_info_error_field_is_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_user_info/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Usuário não encontrado"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .get_user_info(UserId::new(99))
        .await
        .expect_err("should fail");

    match error {
        ApiError::Server(message) => assert_eq!(message, "Usuário não encontrado"),
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_user_info_http_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/get_user_info/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .get_user_info(UserId::new(2))
        .await
        .expect_err("should fail");

    assert!(matches!(error, ApiError::Status(500)));
}

#[tokio::test]
async fn upload_success_returns_new_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload_profile_pic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "new_pic_url": "/static/uploads/ana_new.png",
            "message": "Foto de perfil atualizada!"
        })))
        .mount(&server)
        .await;

    let url = client_for(&server)
        .await
        .upload_profile_pic(FilePayload {
            file_name: "me.png".to_string(),
            bytes: vec![1, 2, 3],
        })
        .await
        .expect("upload");

    assert_eq!(url, "/static/uploads/ana_new.png");
}

#[tokio::test]
async fn upload_success_flag_false_prefers_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload_profile_pic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Extensão não permitida"
        })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .upload_profile_pic(FilePayload {
            file_name: "me.bmp".to_string(),
            bytes: vec![1],
        })
        .await
        .expect_err("should fail");

    match error {
        ApiError::Server(message) => assert_eq!(message, "Extensão não permitida"),
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_http_error_with_json_message_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload_profile_pic"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "message": "Arquivo muito grande" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .upload_profile_pic(FilePayload {
            file_name: "huge.png".to_string(),
            bytes: vec![0; 16],
        })
        .await
        .expect_err("should fail");

    match error {
        ApiError::Server(message) => assert_eq!(message, "Arquivo muito grande"),
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_success_without_url_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload_profile_pic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .upload_profile_pic(FilePayload {
            file_name: "me.png".to_string(),
            bytes: vec![1],
        })
        .await
        .expect_err("should fail");

    assert!(matches!(error, ApiError::InvalidResponse(_)));
}

#[tokio::test]
async fn create_post_posts_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create_post"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .create_post(
            PostType::Image,
            "uma foto",
            Some(FilePayload {
                file_name: "praia.png".to_string(),
                bytes: vec![9, 9, 9],
            }),
        )
        .await
        .expect("create post");
}

#[tokio::test]
async fn create_post_http_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create_post"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .await
        .create_post(PostType::Text, "olá", None)
        .await
        .expect_err("should fail");

    assert!(matches!(error, ApiError::Status(401)));
}

#[tokio::test]
async fn fetch_feed_parses_posts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 2,
                "user_id": 3,
                "username": "bruno",
                "content": "bom dia",
                "type": "text",
                "profile_pic": "/static/uploads/bruno.png",
                "created_at": "2025-11-02T14:30:00Z"
            },
            {
                "id": 1,
                "user_id": 2,
                "username": "ana",
                "content": "",
                "type": "image",
                "media_path": "uploads/2_praia.png",
                "profile_pic": "/static/uploads/ana.png",
                "created_at": "2025-11-01T09:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let posts = client_for(&server).await.fetch_feed().await.expect("feed");

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].username, "bruno");
    assert_eq!(posts[1].post_type(), Some(PostType::Image));
    assert_eq!(posts[1].media_path.as_deref(), Some("uploads/2_praia.png"));
}

#[tokio::test]
async fn fetch_image_returns_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/static/uploads/ana.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![137, 80, 78, 71]))
        .mount(&server)
        .await;

    let bytes = client_for(&server)
        .await
        .fetch_image("/static/uploads/ana.png")
        .await
        .expect("image");

    assert_eq!(bytes, vec![137, 80, 78, 71]);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port 1 is reserved and never listening
    let client = Client::new("http://127.0.0.1:1").expect("client");

    let error = client
        .get_user_info(UserId::new(2))
        .await
        .expect_err("should fail");

    assert!(matches!(error, ApiError::Transport(_)));
}

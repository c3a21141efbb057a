//! Paged listing over HTTP.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use anime_backend::test_support::{USER_USERNAME, anime_app, in_memory_state};
use rstest::rstest;
use serde_json::{Value, json};

use support::{body_json, signed_in};

const TITLES: [&str; 5] = ["Overlord", "Berserk", "Kingdom", "Angel Beats", "Hajime no Ippo"];

async fn page_names(uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(anime_app(in_memory_state().await)).await;
    for name in TITLES {
        test::call_service(
            &app,
            signed_in(TestRequest::post().uri("/animes"), USER_USERNAME)
                .set_json(json!({ "name": name }))
                .to_request(),
        )
        .await;
    }
    let response =
        test::call_service(&app, signed_in(TestRequest::get().uri(uri), USER_USERNAME).to_request())
            .await;
    (response.status(), body_json(response).await)
}

fn names(page: &Value) -> Vec<&str> {
    page["content"]
        .as_array()
        .expect("content array")
        .iter()
        .map(|anime| anime["name"].as_str().expect("name"))
        .collect()
}

#[actix_web::test]
async fn default_page_holds_everything_in_id_order() {
    let (status, page) = page_names("/animes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&page), TITLES);
    assert_eq!(page["size"], 20);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 1);
    assert_eq!(page["first"], true);
    assert_eq!(page["last"], true);
}

#[rstest]
#[case("/animes?page=0&size=2&sort=name", &["Angel Beats", "Berserk"])]
#[case("/animes?page=1&size=2&sort=name,asc", &["Hajime no Ippo", "Kingdom"])]
#[case("/animes?page=0&size=2&sort=name,desc", &["Overlord", "Kingdom"])]
#[case("/animes?page=2&size=2&sort=id,desc", &["Overlord"])]
#[case("/animes?page=9&size=2", &[])]
#[actix_web::test]
async fn sorted_pages_slice_the_catalogue(#[case] uri: &str, #[case] expected: &[&str]) {
    let (status, page) = page_names(uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&page), expected);
    assert_eq!(page["totalElements"], 5);
    assert_eq!(page["totalPages"], 3);
}

#[rstest]
#[case("/animes?size=2001", "size")]
#[case("/animes?sort=rating,asc", "sort")]
#[actix_web::test]
async fn invalid_paging_names_the_field(#[case] uri: &str, #[case] field: &str) {
    let (status, payload) = page_names(uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["fields"], field);
}

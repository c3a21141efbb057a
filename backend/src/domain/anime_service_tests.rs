//! Tests for the anime service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockAnimeRepository;
use crate::domain::{AnimeName, ErrorCode};
use mockall::predicate::eq;
use rstest::rstest;

fn make_service(repo: MockAnimeRepository) -> AnimeService<MockAnimeRepository> {
    AnimeService::new(Arc::new(repo))
}

fn anime(id: i64, name: &str) -> Anime {
    Anime::new(
        AnimeId::new(id),
        AnimeName::new(name).expect("valid fixture name"),
    )
}

fn name(raw: &str) -> AnimeName {
    AnimeName::new(raw).expect("valid fixture name")
}

#[tokio::test]
async fn create_returns_record_with_assigned_id() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_insert()
        .withf(|record| record.name().as_ref() == "Angel Beats")
        .times(1)
        .return_once(|record| Ok(Anime::new(AnimeId::new(1), record.name().clone())));

    let created = make_service(repo)
        .create(AnimeInsert {
            name: name("Angel Beats"),
        })
        .await
        .expect("create succeeds");

    assert_eq!(created, anime(1, "Angel Beats"));
}

#[tokio::test]
async fn find_by_id_reports_not_found() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_id()
        .with(eq(AnimeId::new(99)))
        .times(1)
        .return_once(|_| Ok(None));

    let err = make_service(repo)
        .find_by_id(AnimeId::new(99))
        .await
        .expect_err("unknown id");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), ANIME_NOT_FOUND);
}

#[tokio::test]
async fn replace_saves_over_existing_record() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(anime(1, "Hajime no Ippo"))));
    repo.expect_save()
        .withf(|record| *record == anime(1, "Hajime no Ippo 2"))
        .times(1)
        .return_once(|_| Ok(()));

    make_service(repo)
        .replace(AnimeUpdate {
            id: AnimeId::new(1),
            name: name("Hajime no Ippo 2"),
        })
        .await
        .expect("replace succeeds");
}

#[tokio::test]
async fn replace_of_unknown_id_does_not_save() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_save().never();

    let err = make_service(repo)
        .replace(AnimeUpdate {
            id: AnimeId::new(4),
            name: name("Kingdom"),
        })
        .await
        .expect_err("unknown id");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_removes_existing_record() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(anime(3, "Overlord"))));
    repo.expect_delete()
        .with(eq(AnimeId::new(3)))
        .times(1)
        .return_once(|_| Ok(()));

    make_service(repo)
        .delete(AnimeId::new(3))
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn delete_of_unknown_id_does_not_delete() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_delete().never();

    let err = make_service(repo)
        .delete(AnimeId::new(3))
        .await
        .expect_err("unknown id");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn find_by_name_passes_fragment_through() {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_by_name()
        .withf(|fragment| fragment == "Ippo")
        .times(1)
        .return_once(|_| Ok(vec![anime(1, "Hajime no Ippo")]));

    let found = make_service(repo)
        .find_by_name("Ippo")
        .await
        .expect("search succeeds");

    assert_eq!(found, vec![anime(1, "Hajime no Ippo")]);
}

#[tokio::test]
async fn list_page_forwards_request() {
    let request = PageRequest::new(1, 2).expect("valid request");
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_page()
        .withf(|req| req.page() == 1 && req.size() == 2)
        .times(1)
        .return_once(|req| Ok(Page::new(vec![anime(3, "Overlord")], req, 3)));

    let page = make_service(repo)
        .list_page(&request)
        .await
        .expect("page succeeds");

    assert_eq!(page.content, vec![anime(3, "Overlord")]);
    assert_eq!(page.total_pages, 2);
    assert!(page.last);
}

#[rstest]
#[case(AnimeRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(AnimeRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_codes(
    #[case] failure: AnimeRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockAnimeRepository::new();
    repo.expect_find_all().times(1).return_once(move || Err(failure));

    let err = make_service(repo).list_all().await.expect_err("failure");

    assert_eq!(err.code(), expected);
}

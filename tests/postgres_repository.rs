//! Интеграционные тесты PostgresWebinarRepository.
//!
//! `#[sqlx::test]` создаёт отдельную базу на каждый тест (по `DATABASE_URL`),
//! накатывает миграции и удаляет базу после теста.
#![cfg(feature = "postgres-tests")]

use chrono::{TimeZone, Utc};
use sqlx::PgPool;

use webinar_system::{
    models::Webinar,
    repositories::{PostgresWebinarRepository, RepositoryError, WebinarRepository},
};

fn webinar(seats: i32) -> Webinar {
    Webinar {
        id: "webinar-id".to_string(),
        organizer_id: "organizer-id".to_string(),
        title: "Webinar title".to_string(),
        start_date: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2022, 1, 1, 1, 0, 0).unwrap(),
        seats,
    }
}

async fn insert_row(pool: &PgPool, webinar: &Webinar) {
    sqlx::query(
        r#"INSERT INTO "Webinar" (id, "organizerId", title, "startDate", "endDate", seats)
           VALUES ($1, $2, $3, $4, $5, $6)"#,
    )
    .bind(&webinar.id)
    .bind(&webinar.organizer_id)
    .bind(&webinar.title)
    .bind(webinar.start_date)
    .bind(webinar.end_date)
    .bind(webinar.seats)
    .execute(pool)
    .await
    .unwrap();
}

async fn fetch_row(pool: &PgPool, id: &str) -> Option<Webinar> {
    sqlx::query_as::<_, Webinar>(r#"SELECT * FROM "Webinar" WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

fn repository(pool: &PgPool) -> PostgresWebinarRepository {
    PostgresWebinarRepository::new(pool.clone())
}

#[sqlx::test(migrations = "./src/migrations")]
async fn creates_a_webinar(pool: PgPool) {
    repository(&pool).create(&webinar(100)).await.unwrap();

    assert_eq!(fetch_row(&pool, "webinar-id").await, Some(webinar(100)));
}

#[sqlx::test(migrations = "./src/migrations")]
async fn create_rejects_duplicate_id(pool: PgPool) {
    insert_row(&pool, &webinar(100)).await;

    let res = repository(&pool).create(&webinar(5)).await;

    assert!(matches!(res, Err(RepositoryError::Duplicate(_))));
    assert_eq!(fetch_row(&pool, "webinar-id").await.unwrap().seats, 100);
}

#[sqlx::test(migrations = "./src/migrations")]
async fn finds_a_webinar_by_id(pool: PgPool) {
    insert_row(&pool, &webinar(100)).await;

    let found = repository(&pool).find_by_id("webinar-id").await.unwrap();

    assert_eq!(found, Some(webinar(100)));
}

#[sqlx::test(migrations = "./src/migrations")]
async fn find_unknown_id_is_none(pool: PgPool) {
    let found = repository(&pool).find_by_id("unknown").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./src/migrations")]
async fn updates_a_webinar(pool: PgPool) {
    insert_row(&pool, &webinar(100)).await;

    repository(&pool).update(&webinar(300)).await.unwrap();

    assert_eq!(fetch_row(&pool, "webinar-id").await.unwrap().seats, 300);
}

#[sqlx::test(migrations = "./src/migrations")]
async fn update_of_missing_row_fails(pool: PgPool) {
    let res = repository(&pool).update(&webinar(300)).await;
    assert!(matches!(res, Err(RepositoryError::MissingRow(_))));
}

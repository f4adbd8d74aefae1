#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use course_api::api::links::API_PREFIX;
use course_api::api::routes::course_routes;
use course_api::application::services::CourseService;
use course_api::infrastructure::persistence::PgCourseRepository;
use course_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_course(pool: &PgPool, title: &str, url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO courses (title, url) VALUES ($1, $2) RETURNING id")
        .bind(title)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_review(pool: &PgPool, course_id: i64, rating: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO reviews (course_id, rating, comment) VALUES ($1, $2, '') RETURNING id",
    )
    .bind(course_id)
    .bind(rating)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_courses(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM courses")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repo = Arc::new(PgCourseRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(CourseService::new(repo)))
}

pub fn create_test_server(pool: PgPool) -> TestServer {
    let app = Router::new()
        .nest(API_PREFIX, course_routes())
        .with_state(create_test_state(pool));
    TestServer::new(app).unwrap()
}

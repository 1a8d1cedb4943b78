//! JSON entity route.

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};

use crate::entity::{Greeting, Person};
use crate::http::response::AppError;
use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/json", post(greet_person))
        .route("/json/sample", get(sample))
}

async fn greet_person(
    person: Result<Json<Person>, JsonRejection>,
) -> Result<Json<Greeting>, AppError> {
    let Json(person) = person?;
    if person.name.trim().is_empty() {
        return Err(AppError::Unprocessable("name must not be blank".into()));
    }
    Ok(Json(Greeting::from(person)))
}

async fn sample() -> Json<Person> {
    Json(Person {
        name: "Ada Lovelace".into(),
        age: 36,
        email: Some("ada@example.com".into()),
    })
}

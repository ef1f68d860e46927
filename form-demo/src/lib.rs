//! Template demo service: a greeting form and a four-subject score calculator.

pub mod error;
pub mod scoring;
pub mod views;

use axum::{
    extract::Path,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

pub use error::ViewError;
pub use scoring::{Outcome, Scorecard};

use views::{render, FinalResultFormView, GreetingFormView, IndexView, ResultsView, SuccessView};

#[derive(Debug, Deserialize)]
pub struct Greeting {
    pub name: String,
}

pub fn app() -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/form", get(greeting_form).post(greet))
        .route("/result", get(greeting_form).post(greet))
        .route("/success/{score}", get(success))
        .route("/results/{score}", get(results))
        .route("/FinalResult", get(final_result_form).post(final_result));
    server_support::with_request_tracing(router)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    server_support::serve(listener, app()).await
}

async fn index() -> Result<Html<String>, ViewError> {
    render(&IndexView {})
}

async fn greeting_form() -> Result<Html<String>, ViewError> {
    render(&GreetingFormView {})
}

async fn greet(Form(greeting): Form<Greeting>) -> String {
    format!("Welcome {} !", greeting.name)
}

async fn success(Path(score): Path<i64>) -> Result<Html<String>, ViewError> {
    render(&SuccessView { score })
}

async fn results(Path(score): Path<i64>) -> Result<Html<String>, ViewError> {
    render(&ResultsView {
        score,
        outcome: Outcome::classify(score as f64),
    })
}

async fn final_result_form() -> Result<Html<String>, ViewError> {
    render(&FinalResultFormView {})
}

async fn final_result(Form(scores): Form<Scorecard>) -> Result<Redirect, ViewError> {
    let average = scores.average();
    let score = scores.whole_score().ok_or(ViewError::InvalidScore)?;
    let target = format!("/results/{score}");
    tracing::info!(average, %target, "scores averaged");
    Ok(Redirect::to(&target))
}

//! Page views. Each struct names its template and carries the data it needs;
//! [`render`] is the only place a view turns into a response body.

use askama::Template;
use axum::response::Html;

use crate::error::ViewError;
use crate::scoring::Outcome;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {}

#[derive(Template)]
#[template(path = "form.html")]
pub struct GreetingFormView {}

#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessView {
    pub score: i64,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsView {
    pub score: i64,
    pub outcome: Outcome,
}

#[derive(Template)]
#[template(path = "final_result.html")]
pub struct FinalResultFormView {}

pub fn render<T: Template>(view: &T) -> Result<Html<String>, ViewError> {
    Ok(Html(view.render()?))
}

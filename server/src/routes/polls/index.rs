use actix_web::{
    web::{block, Data, Json},
    Result,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<Question>> for IndexResponse {
    fn from(latest_question_list: Vec<Question>) -> Self {
        let message = if latest_question_list.is_empty() {
            Some(NO_POLLS_MESSAGE.to_string())
        } else {
            None
        };

        IndexResponse {
            latest_question_list,
            message,
        }
    }
}

pub async fn index(pool: Data<PgPool>) -> Result<Json<IndexResponse>, Error> {
    let connection = get_conn(&pool)?;

    let questions = block(move || Question::list_visible(&connection, Utc::now())).await??;
    debug!("Listing {} published questions", questions.len());

    Ok(Json(questions.into()))
}

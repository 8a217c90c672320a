use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, Question},
    Connection,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsResponse {
    pub question: Question,
    pub choices: Vec<Choice>,
}

pub async fn get_question_results(
    connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
) -> Result<ResultsResponse, Error> {
    let data: Result<(Question, Vec<Choice>), Error> = block(move || {
        let question = Question::get_visible(&connection, question_id, now)?;
        let choices = Choice::find_by_question(&connection, &question)?;
        Ok((question, choices))
    })
    .await?;

    let (question, choices) = data?;

    Ok(ResultsResponse { question, choices })
}

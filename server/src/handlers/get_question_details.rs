use actix_web::web::block;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use db::{
    models::{Choice, ChoiceDetails, Question},
    Connection,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailResponse {
    pub question: Question,
    pub choices: Vec<ChoiceDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub async fn get_question_details(
    connection: Connection,
    question_id: i32,
    now: DateTime<Utc>,
    error_message: Option<String>,
) -> Result<DetailResponse, Error> {
    let data: Result<(Question, Vec<ChoiceDetails>), Error> = block(move || {
        let question = Question::get_visible(&connection, question_id, now)?;
        let choices = Choice::find_details_by_question(&connection, &question)?;
        Ok((question, choices))
    })
    .await?;

    let (question, choices) = data?;

    Ok(DetailResponse {
        question,
        choices,
        error_message,
    })
}

use actix_web::{
    http::header,
    web::{block, Data, Form, Path},
    HttpResponse, Result,
};
use chrono::Utc;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::handlers::get_question_details;
use crate::validate::validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct VoteForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required(message = "You didn't select a choice."))]
    pub choice: Option<i32>,
}

// a radio group submitted with nothing checked can arrive as `choice=`
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

pub fn results_location(question_id: i32) -> String {
    format!("/polls/{}/results/", question_id)
}

pub async fn vote(
    pool: Data<PgPool>,
    question_id: Path<i32>,
    form: Form<VoteForm>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let form = form.into_inner();
    let connection = get_conn(&pool)?;
    let now = Utc::now();

    let choice_id = match (validate(&form), form.choice) {
        (Ok(()), Some(choice_id)) => choice_id,
        (Err(Error::ValidationError(messages)), _) => {
            let response =
                get_question_details(connection, question_id, now, Some(messages.join(" "))).await?;
            return Ok(HttpResponse::Ok().json(response));
        }
        (Err(err), _) => return Err(err),
        (Ok(()), None) => unreachable!("choice is required by VoteForm validation"),
    };

    let data: Result<Choice, Error> = block(move || {
        let question = Question::get_visible(&connection, question_id, now)?;
        Choice::vote(&connection, question.id, choice_id)
    })
    .await?;

    let choice = data?;
    info!(
        "Recorded vote for choice {} on question {}, now at {}",
        choice.id, question_id, choice.votes
    );

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, results_location(question_id)))
        .finish())
}

use actix_web::{
    web::{Data, Json, Path},
    Result,
};
use chrono::Utc;

use db::{get_conn, PgPool};
use errors::Error;

use crate::handlers::{get_question_details, DetailResponse};

pub async fn detail(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<DetailResponse>, Error> {
    let connection = get_conn(&pool)?;
    let response =
        get_question_details(connection, question_id.into_inner(), Utc::now(), None).await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use diesel::{self, ExpressionMethods, QueryDsl, RunQueryDsl};

    use db::{
        get_conn,
        models::{Choice, Question, QUESTION_NOT_FOUND},
        schema::questions,
    };
    use errors::ErrorResponse;

    use crate::handlers::DetailResponse;
    use crate::tests::helpers::tests::{get_pool, lock_db, test_get};

    #[actix_rt::test]
    async fn test_malformed_id() {
        let (status, body): (u16, ErrorResponse) = test_get("/polls/not-a-number/").await;
        assert_eq!(status, 404);
        assert_eq!(body.errors, vec![QUESTION_NOT_FOUND.to_string()]);
    }

    #[actix_rt::test]
    async fn test_future_question() {
        let _guard = lock_db();
        let pool = get_pool();
        let conn = get_conn(&pool).unwrap();

        let question = Question::create(
            &conn,
            "Future Question".to_string(),
            Utc::now() + Duration::days(5),
        )
        .unwrap();

        let (status, body): (u16, ErrorResponse) =
            test_get(&format!("/polls/{}/", question.id)).await;
        assert_eq!(status, 404);
        assert_eq!(body.errors.len(), 1);

        diesel::delete(questions::table.filter(questions::id.eq(question.id)))
            .execute(&conn)
            .unwrap();
    }

    #[actix_rt::test]
    async fn test_past_question() {
        let _guard = lock_db();
        let pool = get_pool();
        let conn = get_conn(&pool).unwrap();

        let question = Question::create(
            &conn,
            "Past Question".to_string(),
            Utc::now() - Duration::days(5),
        )
        .unwrap();
        let first = Choice::create(&conn, question.id, "Not much".to_string()).unwrap();
        let second = Choice::create(&conn, question.id, "The sky".to_string()).unwrap();

        let (status, body): (u16, DetailResponse) =
            test_get(&format!("/polls/{}/", question.id)).await;
        assert_eq!(status, 200);
        assert_eq!(body.question.question_text, "Past Question");
        assert_eq!(
            body.choices.iter().map(|c| c.id).collect::<Vec<i32>>(),
            vec![first.id, second.id]
        );
        assert_eq!(body.error_message, None);

        diesel::delete(questions::table.filter(questions::id.eq(question.id)))
            .execute(&conn)
            .unwrap();
    }
}

use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions;

pub const QUESTION_NOT_FOUND: &str = "No question matches the given query.";

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    pub fn create(
        conn: &PgConnection,
        question_text: String,
        pub_date: DateTime<Utc>,
    ) -> Result<Question, Error> {
        let question = diesel::insert_into(questions::table)
            .values(NewQuestion {
                question_text,
                pub_date,
            })
            .get_result(conn)?;

        Ok(question)
    }

    /// True when the question went live within the last day, as of `now`.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.pub_date <= now
    }

    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// Every question published as of `now`, most recent first.
    pub fn list_visible(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        use questions::dsl::{id, pub_date, questions as questions_table};

        let results = questions_table
            .filter(pub_date.le(now))
            .order((pub_date.desc(), id.desc()))
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Future questions are treated as missing, so they cannot be reached by id either.
    pub fn get_visible(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        use questions::dsl::questions as questions_table;

        questions_table
            .find(question_id)
            .first::<Question>(conn)
            .optional()?
            .filter(|question| question.is_published(now))
            .ok_or_else(|| Error::NotFound(QUESTION_NOT_FOUND.to_string()))
    }
}

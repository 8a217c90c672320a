use diesel::{self, BelongingToDsl, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[belongs_to(Question)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[table_name = "choices"]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
}

/// A choice as offered on the voting form, without its tally.
#[derive(Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct ChoiceDetails {
    pub id: i32,
    pub choice_text: String,
}

impl Choice {
    pub fn create(
        conn: &PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(conn: &PgConnection, question: &Question) -> Result<Vec<Choice>, Error> {
        use choices::dsl::id;

        let results = Choice::belonging_to(question)
            .order(id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    pub fn find_details_by_question(
        conn: &PgConnection,
        question: &Question,
    ) -> Result<Vec<ChoiceDetails>, Error> {
        use choices::dsl::{choice_text, id};

        let results = Choice::belonging_to(question)
            .select((id, choice_text))
            .order(id.asc())
            .load::<ChoiceDetails>(conn)?;

        Ok(results)
    }

    /// Adds one vote in a single UPDATE so concurrent votes on the same row cannot be lost.
    /// A choice that doesn't exist or belongs to another question is reported as not found.
    pub fn vote(conn: &PgConnection, question_id: i32, choice_id: i32) -> Result<Choice, Error> {
        use choices::dsl::{choices as choices_table, id, question_id as question_id_field, votes};

        let target = choices_table
            .filter(id.eq(choice_id))
            .filter(question_id_field.eq(question_id));

        diesel::update(target)
            .set(votes.eq(votes + 1))
            .get_result::<Choice>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound("No choice matches the given query.".to_string()))
    }
}

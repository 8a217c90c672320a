use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
};

fn main() {
    dotenv().ok();

    let pool = new_pool();
    let conn = get_conn(&pool).unwrap();
    let now = Utc::now();

    for (question_text, pub_date, choices) in &[
        ("What's up?", now, vec!["Not much", "The sky", "Just hacking again"]),
        (
            "Which language should we learn next?",
            now + Duration::days(1),
            vec!["Rust", "Zig", "OCaml"],
        ),
    ] {
        let question = Question::create(&conn, question_text.to_string(), *pub_date).unwrap();
        for choice_text in choices {
            Choice::create(&conn, question.id, choice_text.to_string()).unwrap();
        }
    }
}

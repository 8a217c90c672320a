mod get_question_details;
mod get_question_results;

pub use self::get_question_details::*;
pub use self::get_question_results::*;

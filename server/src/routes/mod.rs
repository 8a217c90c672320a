use actix_web::{
    error::{PathError, UrlencodedError},
    http::header,
    web, HttpRequest, HttpResponse,
};

use db::models::QUESTION_NOT_FOUND;
use errors::{Error, ErrorResponse};

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(redirect_to_polls)).service(
        web::scope("/polls")
            .app_data(web::PathConfig::default().error_handler(path_error))
            .app_data(web::FormConfig::default().error_handler(form_error))
            .route("/", web::get().to(polls::index))
            .route("/{id}/", web::get().to(polls::detail))
            .route("/{id}/results/", web::get().to(polls::results))
            .route("/{id}/vote/", web::post().to(polls::vote)),
    );
}

// an id that isn't a number can't name a question
fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!("Unmatched question id in {} - {}", req.path(), err);
    Error::NotFound(QUESTION_NOT_FOUND.to_string()).into()
}

fn form_error(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected form posted to {} - {}", req.path(), err);
    Error::BadRequest(err.to_string()).into()
}

async fn redirect_to_polls() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/polls/"))
        .finish()
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

#[cfg(test)]
pub mod tests {
    use std::env;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::BoxBody, dev::ServiceResponse, error::Error, test, web, web::Data, App,
    };
    use diesel::pg::PgConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use dotenv::dotenv;
    use serde::{de::DeserializeOwned, Serialize};

    use db::PgPool;

    use crate::routes::{not_found, routes};

    static DB_LOCK: Mutex<()> = Mutex::new(());

    /// Tests that touch the database hold this for their whole run.
    pub fn lock_db() -> MutexGuard<'static, ()> {
        DB_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pool that only connects on first checkout, so routes that never touch
    /// the database can be exercised without one.
    pub fn get_pool() -> PgPool {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://postgres@localhost/polls_test".to_string());
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        Pool::builder().build_unchecked(manager)
    }

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(get_pool()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await
    }

    pub async fn read_json<R>(res: ServiceResponse<BoxBody>) -> R
    where
        R: DeserializeOwned,
    {
        let status = res.status();
        let body = test::read_body(res).await;
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        (status, read_json(res).await)
    }

    /// Helper for form POST integration tests
    pub async fn test_post_form<T: Serialize>(route: &str, params: T) -> ServiceResponse<BoxBody> {
        let app = get_service().await;
        let req = test::TestRequest::post().set_form(&params).uri(route);

        test::call_service(&app, req.to_request()).await
    }
}

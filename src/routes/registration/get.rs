use super::{lock_session, PageError};
use crate::page::PageSession;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use std::sync::Mutex;

pub async fn registration_page(
    session: web::Data<Mutex<PageSession>>,
) -> Result<HttpResponse, PageError> {
    let html_body = lock_session(&session)?.page.render()?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html_body))
}

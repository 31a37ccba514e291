use super::{lock_session, PageError};
use crate::page::PageSession;
use crate::utils::see_other;
use actix_web::{web, HttpResponse};
use std::sync::Mutex;

#[tracing::instrument(name = "Clear the registration form", skip(session))]
pub async fn clear_form(session: web::Data<Mutex<PageSession>>) -> Result<HttpResponse, PageError> {
    let mut guard = lock_session(&session)?;
    let PageSession { controller, page } = &mut *guard;
    controller.clear(page);
    Ok(see_other("/"))
}

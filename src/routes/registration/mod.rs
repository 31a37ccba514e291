mod clear;
mod get;
mod post;

pub use clear::clear_form;
pub use get::registration_page;
pub use post::{submit_registration, FormData};

use crate::page::PageSession;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, ResponseError};
use std::sync::{Mutex, MutexGuard};

#[derive(thiserror::Error)]
pub enum PageError {
    #[error("The registration page is unavailable after a previous failure")]
    LockPoisoned,
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Every action runs to completion while holding the page, so submits and clears never interleave.
fn lock_session(
    session: &web::Data<Mutex<PageSession>>,
) -> Result<MutexGuard<'_, PageSession>, PageError> {
    session.lock().map_err(|_| PageError::LockPoisoned)
}

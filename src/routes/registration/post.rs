use super::{lock_session, PageError};
use crate::domain::FormInput;
use crate::page::PageSession;
use crate::utils::see_other;
use actix_web::{web, HttpResponse};
use std::sync::Mutex;

/// An unticked checkbox is simply missing from the payload, every other input is always sent.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    birth_date: String,
    terms: Option<String>,
}

impl From<FormData> for FormInput {
    fn from(form: FormData) -> Self {
        FormInput {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            birth_date: form.birth_date,
            terms: form.terms.is_some(),
        }
    }
}

/// Validation failures are not errors here: the messages land on the page and the browser is sent
/// back to it either way.
#[tracing::instrument(name = "Submit a registration", skip(form, session))]
pub async fn submit_registration(
    form: web::Form<FormData>,
    session: web::Data<Mutex<PageSession>>,
) -> Result<HttpResponse, PageError> {
    let input = FormInput::from(form.0);

    let mut guard = lock_session(&session)?;
    let PageSession { controller, page } = &mut *guard;
    page.fill(&input);
    controller.submit(&input, page);

    Ok(see_other("/"))
}

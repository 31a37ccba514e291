use crate::controller::{FormController, FormView};
use crate::domain::{Field, FormInput, Submission};
use anyhow::Context as _;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tera::{Context, Tera};

const NEUTRAL_CLASSES: &str = "border-slate-300 focus:ring-blue-500";
const INVALID_CLASSES: &str = "border-red-500 focus:ring-red-500";

/// The template is compiled into the binary so the page renders whatever the working directory.
pub static TEMPLATES: Lazy<Result<Tera, tera::Error>> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(
        "registration.html",
        include_str!("../templates/registration.html"),
    )?;
    Ok(tera)
});

/// Visible state of the registration page: what the inputs hold, the message under each of them,
/// the hidden timestamp and the results table.
#[derive(Debug, Default)]
pub struct RegistrationPage {
    values: FormInput,
    errors: BTreeMap<Field, String>,
    timestamp: String,
    rows: Vec<[String; 6]>,
}

#[derive(serde::Serialize)]
struct FieldContext {
    id: &'static str,
    error_id: &'static str,
    value: String,
    error: String,
    classes: &'static str,
}

impl RegistrationPage {
    /// Mirrors what the user typed into the inputs before an action is triggered.
    pub fn fill(&mut self, input: &FormInput) {
        self.values = input.clone();
    }

    pub fn values(&self) -> &FormInput {
        &self.values
    }

    pub fn error(&self, field: Field) -> &str {
        self.errors.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn rows(&self) -> &[[String; 6]] {
        &self.rows
    }

    fn field_context(&self, field: Field) -> FieldContext {
        let value = match field {
            Field::FullName => self.values.full_name.clone(),
            Field::Email => self.values.email.clone(),
            Field::Phone => self.values.phone.clone(),
            Field::BirthDate => self.values.birth_date.clone(),
            Field::Terms => String::new(),
        };
        let error = self.error(field).to_string();
        let classes = if error.is_empty() {
            NEUTRAL_CLASSES
        } else {
            INVALID_CLASSES
        };
        FieldContext {
            id: field.id(),
            error_id: field.error_id(),
            value,
            error,
            classes,
        }
    }

    pub fn render(&self) -> Result<String, anyhow::Error> {
        let templates = TEMPLATES
            .as_ref()
            .map_err(|e| anyhow::anyhow!("Failed to load page templates: {e}"))?;

        let mut context = Context::new();
        for field in Field::ALL {
            context.insert(field.id(), &self.field_context(field));
        }
        context.insert("terms_checked", &self.values.terms);
        context.insert("timestamp", &self.timestamp);
        context.insert("rows", &self.rows);

        templates
            .render("registration.html", &context)
            .context("Error rendering registration html")
    }
}

impl FormView for RegistrationPage {
    fn set_field_error(&mut self, field: Field, message: &str) {
        if message.is_empty() {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, message.to_string());
        }
    }

    fn append_result_row(&mut self, submission: &Submission) {
        self.rows.push(submission.row());
    }

    fn reset_form(&mut self) {
        self.values = FormInput::default();
    }

    fn set_timestamp(&mut self, timestamp: &str) {
        self.timestamp = timestamp.to_string();
    }
}

/// The page together with the controller that owns its transitions. Lives for as long as the
/// application does.
#[derive(Debug)]
pub struct PageSession {
    pub controller: FormController,
    pub page: RegistrationPage,
}

impl PageSession {
    pub fn new(minimum_age: u32) -> Self {
        let controller = FormController::new(minimum_age);
        let mut page = RegistrationPage::default();
        controller.start(&mut page);
        Self { controller, page }
    }
}

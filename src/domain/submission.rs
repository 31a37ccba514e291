use crate::domain::{
    BirthDate, EmailAddress, Field, FieldErrors, FullName, PhoneNumber, TermsAcceptance,
};
use chrono::NaiveDate;

/// Raw values of the registration form, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub terms: bool,
}

/// # Type Driven Development
/// A `Submission` can only be obtained through [`Submission::parse`], which checks every field.
/// Holding one is proof that the registration passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub timestamp: String,
    pub full_name: FullName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birth_date: BirthDate,
    pub terms: TermsAcceptance,
}

impl Submission {
    /// Every field is checked, whatever happens to the others, so the returned `FieldErrors` carries
    /// one message per invalid field.
    pub fn parse(
        input: &FormInput,
        timestamp: String,
        today: NaiveDate,
        minimum_age: u32,
    ) -> Result<Submission, FieldErrors> {
        let full_name = FullName::parse(&input.full_name);
        let email = EmailAddress::parse(&input.email);
        let phone = PhoneNumber::parse(&input.phone);
        let birth_date = BirthDate::parse(&input.birth_date, today, minimum_age);
        let terms = TermsAcceptance::parse(input.terms);

        match (full_name, email, phone, birth_date, terms) {
            (Ok(full_name), Ok(email), Ok(phone), Ok(birth_date), Ok(terms)) => Ok(Submission {
                timestamp,
                full_name,
                email,
                phone,
                birth_date,
                terms,
            }),
            (full_name, email, phone, birth_date, terms) => {
                let mut errors = FieldErrors::default();
                errors.set(Field::FullName, full_name.err().unwrap_or_default());
                errors.set(Field::Email, email.err().unwrap_or_default());
                errors.set(Field::Phone, phone.err().unwrap_or_default());
                errors.set(Field::BirthDate, birth_date.err().unwrap_or_default());
                errors.set(Field::Terms, terms.err().unwrap_or_default());
                Err(errors)
            }
        }
    }

    /// Cell texts of the result row, in column order.
    pub fn row(&self) -> [String; 6] {
        [
            self.timestamp.clone(),
            self.full_name.to_string(),
            self.email.to_string(),
            self.phone.to_string(),
            self.birth_date.to_string(),
            if self.terms.accepted() { "Yes" } else { "No" }.to_string(),
        ]
    }
}

mod birth_date;
mod email_address;
mod field;
mod field_errors;
mod full_name;
mod phone_number;
mod submission;
mod terms_acceptance;

pub use birth_date::BirthDate;
pub use email_address::EmailAddress;
pub use field::Field;
pub use field_errors::FieldErrors;
pub use full_name::FullName;
pub use phone_number::PhoneNumber;
pub use submission::{FormInput, Submission};
pub use terms_acceptance::TermsAcceptance;

mod health_check;
mod registration;

pub use health_check::*;
pub use registration::*;

/// Only an accepted checkbox can be turned into a `TermsAcceptance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermsAcceptance(bool);

impl TermsAcceptance {
    pub fn parse(checked: bool) -> Result<TermsAcceptance, String> {
        if checked {
            Ok(Self(true))
        } else {
            Err("You must accept the terms to submit.".into())
        }
    }

    pub fn accepted(&self) -> bool {
        self.0
    }
}

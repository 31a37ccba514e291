/// The five inputs of the registration form. The identifier doubles as the id of the HTML input
/// and, prefixed with `err`, of the element holding its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    BirthDate,
    Terms,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FullName,
        Field::Email,
        Field::Phone,
        Field::BirthDate,
        Field::Terms,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::BirthDate => "birthDate",
            Field::Terms => "terms",
        }
    }

    pub fn error_id(&self) -> &'static str {
        match self {
            Field::FullName => "errFullName",
            Field::Email => "errEmail",
            Field::Phone => "errPhone",
            Field::BirthDate => "errBirthDate",
            Field::Terms => "errTerms",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

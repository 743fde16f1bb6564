//! Locale handling and validation messages
//!
//! The service speaks German by default, matching the forms the input comes
//! from; `lang=en` switches display names and validation messages together.

/// Requested display locale. Only `en` is recognized; everything else,
/// including an absent parameter, falls back to German.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    De,
    En,
}

impl Lang {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("en") => Lang::En,
            _ => Lang::De,
        }
    }
}

/// Validation message for a field the client left empty.
pub fn msg_required(lang: Lang, field: &str) -> String {
    match lang {
        Lang::De => format!("{field} ist erforderlich."),
        Lang::En => format!("{field} is required."),
    }
}

/// Validation message for input that does not parse as a number.
pub fn msg_not_a_number(lang: Lang, field: &str, value: &str) -> String {
    match lang {
        Lang::De => format!("{field} muss eine Zahl sein, \"{value}\" ist keine."),
        Lang::En => format!("{field} must be a number, \"{value}\" is not."),
    }
}

//! Talent check calculation
//!
//! Coerces raw form input into factor values and applies the talent's
//! weights. Input arrives as the union `number | string`; strings come
//! straight from form fields, so surrounding whitespace and a German comma
//! decimal separator are tolerated.

use crate::domain::{CalculationInputs, RawInput, Talent};
use crate::i18n::{self, Lang};

/// Coerce the five inputs to floats, collecting a localized message for
/// every field that is missing or fails to parse.
pub fn coerce_inputs(inputs: &CalculationInputs, lang: Lang) -> Result<[f64; 5], Vec<String>> {
    let mut values = [0.0; 5];
    let mut errors = Vec::new();

    for (slot, (field, value)) in values.iter_mut().zip(inputs.fields()) {
        match value {
            None => errors.push(i18n::msg_required(lang, field)),
            Some(RawInput::Number(n)) => *slot = *n,
            Some(RawInput::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    errors.push(i18n::msg_required(lang, field));
                } else {
                    match parse_number(trimmed) {
                        Some(n) => *slot = n,
                        None => errors.push(i18n::msg_not_a_number(lang, field, text)),
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Effective talent value: the base value plus each factor weighted by the
/// coerced input.
pub fn effective_value(talent: &Talent, values: &[f64; 5]) -> f64 {
    let factors = talent.factors.as_f64();
    let weighted: f64 = factors.iter().zip(values).map(|(f, v)| f * v).sum();
    talent.base_talent_value.as_f64().unwrap_or(0.0) + weighted
}

fn parse_number(trimmed: &str) -> Option<f64> {
    trimmed.replace(',', ".").parse().ok()
}

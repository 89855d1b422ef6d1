//! Value sanitization applied to the live value of a native input.
//!
//! Only the live value is sanitized; the `value` attribute keeps whatever the
//! author assigned.

use crate::temporal::{parse_float, parse_temporal};
use crate::types::InputType;

/// Sanitize a value for the given input type.
pub fn sanitize(ty: InputType, value: &str) -> String {
    match ty {
        InputType::Text | InputType::Search | InputType::Tel | InputType::Password => {
            strip_newlines(value)
        }
        InputType::Email | InputType::Url => {
            strip_newlines(value).trim_matches(is_ascii_whitespace).to_string()
        }
        InputType::Number => match parse_float(value) {
            Some(_) => value.to_string(),
            None => String::new(),
        },
        _ if ty.is_temporal() => match parse_temporal(ty, value) {
            Some(_) => value.to_string(),
            None => String::new(),
        },
        _ => value.to_string(),
    }
}

fn strip_newlines(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
}

fn is_ascii_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

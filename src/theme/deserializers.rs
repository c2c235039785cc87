use serde::{Deserialize, Deserializer, de::Error};

use super::{CssLength, Px};

/// Highest index into a ten-step color shade scale.
pub const MAX_PRIMARY_SHADE: u8 = 9;

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Px, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.parse::<u32>() {
                Ok(pixels) => Ok(Px(pixels)),
                Err(_) => Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrInt::Int(pixels) => Ok(Px(pixels)),
    }
}

pub fn de_primary_shade<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let shade = u8::deserialize(deserializer)?;

    if shade > MAX_PRIMARY_SHADE {
        return Err(D::Error::custom(format!(
            "primary shade must be between 0 and {MAX_PRIMARY_SHADE}, got {shade}"
        )));
    }

    Ok(shade)
}

pub fn de_font_stack<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let stack = String::deserialize(deserializer)?;

    if stack.split(',').all(|family| family.trim().is_empty()) {
        return Err(D::Error::custom("font stack can't be empty."));
    }

    Ok(stack)
}

pub fn de_css_length<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let length = String::deserialize(deserializer)?;

    if parse_css_length(&length).is_none() {
        return Err(D::Error::custom(format!(
            "expected a length ending with 'rem' or 'px', got \"{length}\""
        )));
    }

    Ok(length)
}

pub fn de_line_height<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let line_height = f64::deserialize(deserializer)?;

    if !line_height.is_finite() || line_height <= 0. {
        return Err(D::Error::custom(format!(
            "line height must be a positive number, got {line_height}"
        )));
    }

    Ok(line_height)
}

pub fn de_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;

    if string.trim().is_empty() {
        return Err(D::Error::custom("string can't be empty."));
    }

    Ok(string)
}

/// Interprets a CSS length written as `<number>rem` or `<number>px`.
pub fn parse_css_length(string: &str) -> Option<CssLength> {
    let string = string.trim();

    if let Some(value) = string.strip_suffix("rem")
        && let Ok(value) = value.parse::<f32>()
    {
        return Some(CssLength::Rems(value));
    } else if let Some(value) = string.strip_suffix("px")
        && let Ok(value) = value.parse::<f32>()
    {
        return Some(CssLength::Pixels(value));
    }

    None
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    Int(u32),
    String(String),
}

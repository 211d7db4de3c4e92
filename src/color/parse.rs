use smallvec::SmallVec;

use crate::error::{GraphError, GraphResult};

use super::Rgb;

/// Parses a color string into [`Rgb`].
///
/// `rgb(r, g, b)` and the bare `(r, g, b)` tuple form are tokenized here;
/// everything else is delegated to `csscolorparser`.
pub fn parse_color(input: &str) -> GraphResult<Rgb> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GraphError::invalid("color string must not be empty"));
    }

    match rgb_function_body(trimmed) {
        Some(body) => parse_rgb_channels(body, input),
        None => parse_css_color(trimmed, input),
    }
}

/// Returns the text between the parentheses of `rgb( ... )` or `( ... )`.
fn rgb_function_body(text: &str) -> Option<&str> {
    let rest = match text.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("rgb") => text[3..].trim_start(),
        _ => text,
    };
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_channels(body: &str, input: &str) -> GraphResult<Rgb> {
    let tokens: SmallVec<[&str; 3]> = body.split(',').map(str::trim).collect();
    if tokens.len() != 3 {
        return Err(GraphError::invalid(format!(
            "expected 3 channels in `{input}`, found {}",
            tokens.len()
        )));
    }

    let mut channels = [0_u8; 3];
    for (slot, (name, token)) in channels
        .iter_mut()
        .zip(["red", "green", "blue"].into_iter().zip(tokens))
    {
        let value = parse_integer_token(token).ok_or_else(|| {
            GraphError::invalid(format!(
                "channel `{name}` in `{input}` is not an integer: `{token}`"
            ))
        })?;
        *slot = clamp_channel(value);
    }

    Ok(Rgb::from(channels))
}

/// Parses an optionally signed decimal integer. Digit strings too long for
/// `i64` saturate toward their sign instead of failing.
fn parse_integer_token(token: &str) -> Option<i64> {
    if let Ok(value) = token.parse::<i64>() {
        return Some(value);
    }

    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn clamp_channel(value: i64) -> u8 {
    u8::try_from(value.clamp(0, 255)).unwrap_or(u8::MAX)
}

fn parse_css_color(text: &str, input: &str) -> GraphResult<Rgb> {
    let [red, green, blue, _alpha] = csscolorparser::parse(text)
        .map_err(|e| GraphError::invalid(format!("unrecognized color `{input}`: {e}")))?
        .to_rgba8();
    Ok(Rgb::new(red, green, blue))
}

//! Initial gross-weight resolution from a query string.
//!
//! The starting weight can be handed to the application as a query-string
//! argument (`weight=1250`). Resolution is a pure function so it is
//! testable without any UI context.

use percent_encoding::percent_decode_str;

/// Query parameter carrying the initial gross weight.
const WEIGHT_PARAM: &str = "weight";

/// Resolve the initial gross weight from a raw query string.
///
/// Accepts `weight=...` pairs separated by `&`, with an optional leading
/// `?`; values are percent-decoded. The first run of ASCII digits in the
/// value is parsed as the weight (`"750abc"` and `"abc750"` both give
/// 750). A missing parameter, a digit-free value, or an out-of-range
/// number falls back to `default_weight`.
pub fn parse_initial_weight(raw_query: &str, default_weight: u32) -> u32 {
    match weight_param(raw_query).as_deref().and_then(parse_weight) {
        Some(weight) => weight,
        None => {
            tracing::debug!(
                "no usable weight in query '{}', defaulting to {}",
                raw_query,
                default_weight
            );
            default_weight
        }
    }
}

/// Extract the decoded value of the `weight` parameter, if present.
fn weight_param(raw_query: &str) -> Option<String> {
    let query = raw_query.strip_prefix('?').unwrap_or(raw_query);

    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key != WEIGHT_PARAM {
            continue;
        }
        return match percent_decode_str(value).decode_utf8() {
            Ok(decoded) => Some(decoded.into_owned()),
            Err(e) => {
                tracing::warn!("weight parameter is not valid UTF-8: {}", e);
                None
            }
        };
    }
    None
}

/// Parse the first run of ASCII digits in `value` as grams.
fn parse_weight(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let rest = &value[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    match rest[..end].parse() {
        Ok(weight) => Some(weight),
        Err(e) => {
            tracing::warn!("weight '{}' does not fit: {}", &rest[..end], e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: u32 = 1250;

    #[test]
    fn plain_weight_is_parsed() {
        assert_eq!(parse_initial_weight("weight=750", DEFAULT), 750);
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        assert_eq!(parse_initial_weight("?weight=750", DEFAULT), 750);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_initial_weight("weight=750abc", DEFAULT), 750);
    }

    #[test]
    fn first_digit_run_wins() {
        assert_eq!(parse_initial_weight("weight=abc750", DEFAULT), 750);
        assert_eq!(parse_initial_weight("weight=7a5", DEFAULT), 7);
    }

    #[test]
    fn digit_free_value_falls_back() {
        assert_eq!(parse_initial_weight("weight=abc", DEFAULT), DEFAULT);
    }

    #[test]
    fn missing_parameter_falls_back() {
        assert_eq!(parse_initial_weight("", DEFAULT), DEFAULT);
        assert_eq!(parse_initial_weight("other=750", DEFAULT), DEFAULT);
    }

    #[test]
    fn other_parameters_are_skipped() {
        assert_eq!(parse_initial_weight("unit=g&weight=900", DEFAULT), 900);
    }

    #[test]
    fn percent_encoded_value_is_decoded() {
        assert_eq!(parse_initial_weight("weight=%37%35%30", DEFAULT), 750);
    }

    #[test]
    fn oversized_number_falls_back() {
        assert_eq!(
            parse_initial_weight("weight=99999999999999999999", DEFAULT),
            DEFAULT
        );
    }

    #[test]
    fn value_above_slider_range_is_not_clamped() {
        assert_eq!(parse_initial_weight("weight=5000", DEFAULT), 5000);
    }
}

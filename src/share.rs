//! Shareable links.
//!
//! A shared quiz travels inside the link itself: the quiz JSON is zlib
//! compressed and written as unpadded URL-safe base64 after
//! `#/quiz/shared?data=`. Links produced by the browser build of the app use
//! the same encoding and decode here unchanged.

use std::io::{Read, Write};

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use tracing::{debug, warn};

use crate::error::ShareError;
use crate::models::Quiz;

/// Route fragment for links that carry a whole quiz.
pub const SHARED_ROUTE: &str = "#/quiz/shared";
const QUIZ_ROUTE: &str = "#/quiz/";
const DATA_PARAM: &str = "data";

/// URL-safe alphabet, no padding on output, padding optional on input.
const LINK_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Serialize, compress and base64 a quiz for use in a link.
pub fn encode_quiz_data(quiz: &Quiz) -> Result<String, ShareError> {
    let json = serde_json::to_string(quiz).map_err(|e| ShareError::Encode(e.to_string()))?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(json.as_bytes())
        .map_err(|e| ShareError::Encode(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| ShareError::Encode(e.to_string()))?;

    debug!(
        quiz_id = %quiz.id,
        json_bytes = json.len(),
        compressed_bytes = compressed.len(),
        "quiz encoded"
    );
    Ok(LINK_ENGINE.encode(compressed))
}

/// Reverse of [`encode_quiz_data`].
pub fn decode_quiz_data(encoded: &str) -> Result<Quiz, ShareError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Err(ShareError::Empty);
    }

    inflate_quiz(encoded).inspect_err(|err| {
        warn!(error = ?err, "failed to decode shared quiz");
    })
}

fn inflate_quiz(encoded: &str) -> Result<Quiz, ShareError> {
    let compressed = LINK_ENGINE
        .decode(encoded)
        .map_err(|e| ShareError::Corrupted(Box::new(e)))?;

    let mut json = String::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_string(&mut json)
        .map_err(|e| ShareError::Corrupted(Box::new(e)))?;

    serde_json::from_str(&json).map_err(|e| ShareError::Corrupted(Box::new(e)))
}

/// Everything before the `#` fragment of `url`.
fn strip_fragment(url: &str) -> &str {
    url.split('#').next().unwrap_or(url)
}

/// Link that embeds the whole quiz.
pub fn generate_shareable_link(base_url: &str, quiz: &Quiz) -> Result<String, ShareError> {
    let data = encode_quiz_data(quiz)?;
    Ok(format!(
        "{}{}?{}={}",
        strip_fragment(base_url),
        SHARED_ROUTE,
        DATA_PARAM,
        data
    ))
}

/// Link that refers to a quiz by id. Only resolves where the quiz is stored.
pub fn quiz_link(base_url: &str, quiz_id: &str) -> String {
    format!("{}{}{}", strip_fragment(base_url), QUIZ_ROUTE, quiz_id)
}

/// Pull the encoded quiz out of a pasted link, or accept the bare payload.
pub fn extract_share_data(input: &str) -> Result<&str, ShareError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ShareError::Empty);
    }

    let Some(fragment_start) = input.find('#') else {
        if input.contains("://") {
            return Err(ShareError::MissingData);
        }
        return Ok(input);
    };

    let fragment = &input[fragment_start..];
    let query = fragment
        .split_once('?')
        .map(|(_, query)| query)
        .ok_or(ShareError::MissingData)?;

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == DATA_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
        .ok_or(ShareError::MissingData)
}

/// Quiz id from a `#/quiz/<id>` link. Shared-quiz links have no id.
pub fn extract_quiz_id(input: &str) -> Option<&str> {
    let input = input.trim();
    let start = input.find(QUIZ_ROUTE)? + QUIZ_ROUTE.len();
    let rest = &input[start..];
    let id = rest.split(['/', '?']).next()?;
    if id.is_empty() || id == "shared" {
        None
    } else {
        Some(id)
    }
}

/// Decode a shared quiz from whatever the user pasted.
pub fn decode_link(input: &str) -> Result<Quiz, ShareError> {
    decode_quiz_data(extract_share_data(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;

    fn sample_quiz() -> Quiz {
        let mut quiz = Quiz::new(
            "Rust basics",
            vec![
                Question::new(
                    "Which keyword declares an immutable binding?",
                    vec!["let".into(), "mut".into(), "var".into(), "const fn".into()],
                    0,
                )
                .with_explanation("Bindings are immutable unless marked mut."),
                Question::new(
                    "Ünïcödé option?",
                    vec!["ja".into(), "nein".into(), "vielleicht".into(), "?".into()],
                    2,
                ),
            ],
        );
        quiz.description = "A short warm-up".into();
        quiz.time_limit = Some(10);
        quiz
    }

    #[test]
    fn test_encoded_data_is_url_safe() {
        let encoded = encode_quiz_data(&sample_quiz()).unwrap();
        assert!(!encoded.is_empty());
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_decode_restores_quiz() {
        let quiz = sample_quiz();
        let decoded = decode_quiz_data(&encode_quiz_data(&quiz).unwrap()).unwrap();
        assert_eq!(decoded, quiz);
    }

    #[test]
    fn test_decode_accepts_padding() {
        let quiz = sample_quiz();
        let mut encoded = encode_quiz_data(&quiz).unwrap();
        while encoded.len() % 4 != 0 {
            encoded.push('=');
        }
        assert_eq!(decode_quiz_data(&encoded).unwrap(), quiz);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_quiz_data("not-a-quiz"),
            Err(ShareError::Corrupted(_))
        ));
        assert!(matches!(decode_quiz_data("   "), Err(ShareError::Empty)));

        // valid base64, valid zlib, not a quiz
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"{\"hello\":1}").unwrap();
        let payload = LINK_ENGINE.encode(encoder.finish().unwrap());
        assert!(matches!(
            decode_quiz_data(&payload),
            Err(ShareError::Corrupted(_))
        ));
    }

    #[test]
    fn test_generate_link_drops_existing_fragment() {
        let quiz = sample_quiz();
        let link = generate_shareable_link("https://example.org/app/#/my-quizzes", &quiz).unwrap();
        assert!(link.starts_with("https://example.org/app/#/quiz/shared?data="));
        assert_eq!(decode_link(&link).unwrap(), quiz);
    }

    #[test]
    fn test_extract_share_data() {
        assert_eq!(
            extract_share_data("https://x.test/#/quiz/shared?data=abc_-1").unwrap(),
            "abc_-1"
        );
        assert_eq!(
            extract_share_data("https://x.test/#/quiz/shared?ref=1&data=xyz").unwrap(),
            "xyz"
        );
        assert_eq!(extract_share_data("  rawpayload \n").unwrap(), "rawpayload");
        assert!(matches!(extract_share_data(""), Err(ShareError::Empty)));
        assert!(matches!(
            extract_share_data("https://x.test/#/quiz/shared"),
            Err(ShareError::MissingData)
        ));
        assert!(matches!(
            extract_share_data("https://x.test/"),
            Err(ShareError::MissingData)
        ));
    }

    #[test]
    fn test_quiz_id_links() {
        let link = quiz_link("https://x.test/#/home", "1234");
        assert_eq!(link, "https://x.test/#/quiz/1234");
        assert_eq!(extract_quiz_id(&link), Some("1234"));
        assert_eq!(extract_quiz_id("https://x.test/#/quiz/1234/results"), Some("1234"));
        assert_eq!(extract_quiz_id("https://x.test/#/quiz/shared?data=a"), None);
        assert_eq!(extract_quiz_id("https://x.test/"), None);
    }
}

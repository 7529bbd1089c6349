use chardetng::EncodingDetector;
use encoding_rs::UTF_8;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes a fetched body to text.
///
/// A UTF-8 BOM is dropped and the rest read as UTF-8. Without a BOM the
/// charset is guessed, which covers spreadsheet CSV exports saved as
/// windows-1252 and friends. Undecodable bytes become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        let (text, _) = UTF_8.decode_without_bom_handling(rest);
        return text.into_owned();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::debug!("decoded body as {} with replacement characters", encoding.name());
    }

    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_utf8_round_trips() {
        assert_eq!(decode_text("Date,Venue\n2024-06-01,Café".as_bytes()), "Date,Venue\n2024-06-01,Café");
    }

    #[test]
    fn bom_is_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"Date,Time");
        assert_eq!(decode_text(&bytes), "Date,Time");
    }

    #[test]
    fn latin1_export_is_decoded() {
        // "Caf\xe9 Rouge" as windows-1252
        let bytes = b"Date,Venue\n2024-06-01,Caf\xe9 Rouge\n";
        let text = decode_text(bytes);
        assert!(text.contains("Café Rouge"), "{text}");
    }

    #[test]
    fn empty_body_is_empty() {
        assert_eq!(decode_text(b""), "");
    }
}

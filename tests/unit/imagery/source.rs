use super::*;

#[test]
fn data_uri_is_classified_inline() {
    let source = ImageSource::classify("data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(
        source,
        ImageSource::DataUri {
            payload: "iVBORw0KGgo=".to_string()
        }
    );
}

#[test]
fn bare_urls_are_remote() {
    let source = ImageSource::classify("https://example.com/pic.png");
    assert_eq!(
        source,
        ImageSource::Remote {
            url: "https://example.com/pic.png".to_string()
        }
    );
}

#[test]
fn data_uri_without_base64_marker_falls_back_to_remote() {
    let source = ImageSource::classify("data:text/plain,hello");
    assert!(matches!(source, ImageSource::Remote { .. }));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let source = ImageSource::classify("  data:image/jpeg;base64,QUJD  ");
    assert_eq!(
        source,
        ImageSource::DataUri {
            payload: "QUJD".to_string()
        }
    );
}

#[test]
fn decode_accepts_valid_payloads() {
    assert_eq!(decode_data_uri("QUJD").unwrap(), b"ABC");
    assert_eq!(decode_data_uri(" QUJD ").unwrap(), b"ABC");
}

#[test]
fn decode_rejects_invalid_and_empty_payloads() {
    assert!(decode_data_uri("not base64 !!!").is_err());
    assert!(decode_data_uri("").is_err());
}

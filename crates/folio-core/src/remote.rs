//! Remote image fallback URLs
//!
//! When an image cannot be resolved locally, the renderer is handed a URL
//! derived from the project's GitHub raw-content path. This module only
//! computes the address; fetching it is the renderer's job, and a failed
//! fetch is the renderer's failure to report.

use std::sync::LazyLock;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Base URL for remotely hosted project images
pub const REMOTE_IMAGE_BASE: &str =
    "https://raw.githubusercontent.com/gitgitgitgitgitgitgitgitgitgitgitgit/Personal_website/main/Projects/";

/// Everything outside the RFC 3986 unreserved set gets percent-encoded.
/// Spaces, `#`, `&`, `?` in authored filenames all round-trip safely.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse(REMOTE_IMAGE_BASE).expect("remote image base is a valid URL"));

/// Derive the remote URL for a logical image name.
///
/// Pure and deterministic; no network call is made here. Valid absolute
/// URL for every input string, including names with spaces and punctuation.
pub fn remote_image_url(logical_name: &str) -> Url {
    remote_image_url_from(&BASE, logical_name)
}

/// Same derivation against a caller-supplied base (config override).
///
/// The base must end with a trailing slash, otherwise its last segment is
/// replaced by the join; config loading normalizes this.
pub fn remote_image_url_from(base: &Url, logical_name: &str) -> Url {
    let encoded = utf8_percent_encode(logical_name, PATH_SEGMENT).to_string();
    base.join(&encoded)
        .expect("percent-encoded segment joins onto an absolute base")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_is_percent_encoded() {
        let url = remote_image_url("kali closed.jpg");
        assert_eq!(
            url.as_str(),
            format!("{}kali%20closed.jpg", REMOTE_IMAGE_BASE)
        );
        assert!(!url.as_str().contains(' '));
    }

    #[test]
    fn test_known_image_names_round_trip() {
        // These match the hosted layout exactly.
        for (name, expected_tail) in [
            ("kali open.jpg", "kali%20open.jpg"),
            ("kali on.jpg", "kali%20on.jpg"),
            ("linux usbs.jpg", "linux%20usbs.jpg"),
            ("nethunter.jpg", "nethunter.jpg"),
            ("esp8266.jpg", "esp8266.jpg"),
            ("badusb.jpg", "badusb.jpg"),
            ("rasberrypizerow2.jpg", "rasberrypizerow2.jpg"),
        ] {
            let url = remote_image_url(name);
            assert_eq!(url.as_str(), format!("{}{}", REMOTE_IMAGE_BASE, expected_tail));
        }
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = remote_image_url("a#b&c?d.jpg");
        assert_eq!(
            url.as_str(),
            format!("{}a%23b%26c%3Fd.jpg", REMOTE_IMAGE_BASE)
        );
        // None of the raw reserved characters survive into the path.
        assert!(url.fragment().is_none());
        assert!(url.query().is_none());
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        let url = remote_image_url("a-b_c.d~e.jpg");
        assert!(url.as_str().ends_with("a-b_c.d~e.jpg"));
    }

    #[test]
    fn test_result_is_absolute_url() {
        for name in ["", "x.jpg", "with space.png", "ümlaut.jpg", "100%.jpg"] {
            let url = remote_image_url(name);
            assert_eq!(url.scheme(), "https");
            assert!(url.host_str().is_some());
        }
    }

    #[test]
    fn test_custom_base() {
        let base = Url::parse("https://cdn.example.com/img/").unwrap();
        let url = remote_image_url_from(&base, "kali closed.jpg");
        assert_eq!(url.as_str(), "https://cdn.example.com/img/kali%20closed.jpg");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            remote_image_url("kali closed.jpg"),
            remote_image_url("kali closed.jpg")
        );
    }
}

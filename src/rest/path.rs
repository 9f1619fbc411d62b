//! Path building for resource URLs.
//!
//! Every identifier interpolated into a path is percent-encoded, so an id
//! containing `/`, spaces or other reserved characters always stays a single
//! path segment.
//!
//! Paths come in three shapes:
//!
//! - member: `/v1/{collection}/{id}`
//! - action: `/v1/{collection}/{id}/{action}`
//! - nested: `/v1/{collection}/{id}/{plural}[/{nested_id}]`
//!
//! # Example
//!
//! ```rust
//! use stripe_resources::rest::{action_path, build_path, member_path};
//!
//! assert_eq!(member_path("/v1/accounts", "acct_123"), "/v1/accounts/acct_123");
//! assert_eq!(
//!     action_path("/v1/issuing/disputes", "idp_1", "submit"),
//!     "/v1/issuing/disputes/idp_1/submit"
//! );
//!
//! let url = build_path(
//!     "/v1/accounts/{account}/persons/{id}",
//!     &[("account", "acct_123"), ("id", "person 1")],
//! );
//! assert_eq!(url, "/v1/accounts/acct_123/persons/person%201");
//! ```

/// Percent-encodes one path segment.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Builds a path from a template by interpolating percent-encoded ids.
///
/// Replaces each `{name}` placeholder with the encoded value paired with
/// `name`. Placeholders without a value are left as-is.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &encode_segment(value));
    }

    result
}

/// Returns the path of one member of `collection`.
#[must_use]
pub fn member_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", encode_segment(id))
}

/// Returns the path of a named action on one member of `collection`.
#[must_use]
pub fn action_path(collection: &str, id: &str, action: &str) -> String {
    format!("{}/{action}", member_path(collection, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_template_interpolation_single_id() {
        let result = build_path("/v1/accounts/{id}", &[("id", "acct_123")]);
        assert_eq!(result, "/v1/accounts/acct_123");
    }

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let result = build_path(
            "/v1/accounts/{account}/persons/{id}",
            &[("account", "acct_1"), ("id", "person_2")],
        );
        assert_eq!(result, "/v1/accounts/acct_1/persons/person_2");
    }

    #[test]
    fn test_path_template_leaves_missing_placeholders() {
        let result = build_path("/v1/accounts/{account}/persons/{id}", &[("id", "person_2")]);
        assert_eq!(result, "/v1/accounts/{account}/persons/person_2");
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        assert_eq!(member_path("/v1/accounts", "a/b c"), "/v1/accounts/a%2Fb%20c");
        assert_eq!(
            action_path("/v1/accounts", "acct?x=1", "reject"),
            "/v1/accounts/acct%3Fx%3D1/reject"
        );
    }

    #[test]
    fn test_plain_ids_are_untouched() {
        assert_eq!(encode_segment("acct_1Nv0FGQ9RKHgCVdK"), "acct_1Nv0FGQ9RKHgCVdK");
        assert_eq!(encode_segment("ba-1.x~y"), "ba-1.x~y");
    }
}

use url::form_urlencoded;

/////////////////
// QueryParams //
/////////////////

/// Decoded `application/x-www-form-urlencoded` query parameters, in their
/// original order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn parse(raw: &str) -> Self {
        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// First value for `key`; repeated parameters resolve to the first
    /// occurrence.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(param_key, _)| param_key == key)
            .map(|(_, value)| value.as_str())
    }
}

///////////
// Tests //
///////////

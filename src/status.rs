use http::StatusCode;
use std::fmt;
use std::str::FromStr;

/// Whether `status` is a 4xx or 5xx response.
pub fn is_error(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

/// Selects the vendor-specific reading of ambiguous error statuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorProfile {
    #[default]
    Generic,
    #[serde(alias = "salesforce")]
    SalesforceStyle,
    #[serde(alias = "concur")]
    ConcurStyle,
}

impl VendorProfile {
    /// Lower-case phrases that turn a `403 Forbidden` into `401 Unauthorized`.
    fn expired_token_phrases(self) -> &'static [&'static str] {
        match self {
            Self::Generic => &[],
            Self::SalesforceStyle => &["missing_oauth_token", "bad_oauth_token"],
            Self::ConcurStyle => &["token is expired", "incorrect credentials"],
        }
    }

    /// Effective status of a response with `status` and `body_text`.
    ///
    /// Only `403` is ever reinterpreted. Matching is case-insensitive.
    pub fn remap(self, status: StatusCode, body_text: &str) -> StatusCode {
        if status != StatusCode::FORBIDDEN {
            return status;
        }
        let phrases = self.expired_token_phrases();
        if phrases.is_empty() {
            return status;
        }
        let body_text = body_text.to_lowercase();
        if phrases.iter().any(|phrase| body_text.contains(phrase)) {
            StatusCode::UNAUTHORIZED
        } else {
            status
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::SalesforceStyle => "salesforce_style",
            Self::ConcurStyle => "concur_style",
        }
    }
}

impl fmt::Display for VendorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown vendor profile: {0:?}")]
pub struct ParseVendorProfileError(String);

impl FromStr for VendorProfile {
    type Err = ParseVendorProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "generic" => Ok(Self::Generic),
            "salesforce" | "salesforce_style" => Ok(Self::SalesforceStyle),
            "concur" | "concur_style" => Ok(Self::ConcurStyle),
            _ => Err(ParseVendorProfileError(s.to_owned())),
        }
    }
}

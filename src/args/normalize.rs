use url::{Host, Url};

use crate::error::ValidationError;

const DEFAULT_SCHEME: &str = "https";
const WWW_PREFIX: &str = "www.";

/// Normalize user input into an absolute probe target.
///
/// Inputs without a scheme get `https://`; dotted domain hosts without a
/// leading `www.` label get one. IP addresses and single-label hosts such
/// as `localhost` are left untouched so local targets stay reachable.
///
/// # Errors
///
/// Returns a `ValidationError` when the input cannot be parsed as an
/// absolute URL or the parsed URL has no host.
pub fn normalize_url(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("{}://{}", DEFAULT_SCHEME, trimmed)
    };

    let mut parsed = Url::parse(&with_scheme).map_err(|err| ValidationError::InvalidUrl {
        value: input.to_owned(),
        source: err,
    })?;

    let domain = match parsed.host() {
        Some(Host::Domain(domain)) => Some(domain.to_owned()),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => None,
        None => {
            return Err(ValidationError::UrlMissingHost {
                value: input.to_owned(),
            });
        }
    };

    if let Some(host) = domain
        && !host.starts_with(WWW_PREFIX)
        && host.contains('.')
    {
        let prefixed = format!("{}{}", WWW_PREFIX, host);
        parsed
            .set_host(Some(&prefixed))
            .map_err(|err| ValidationError::InvalidUrl {
                value: input.to_owned(),
                source: err,
            })?;
    }

    Ok(parsed)
}

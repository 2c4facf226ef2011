//! EmailEndpoint value object.

use super::address::contains_valid_address;
use super::display_name::normalize_display_name;
use crate::error::{EndpointError, EndpointResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Rendering used for an endpoint without an address.
pub const INVALID_ADDRESS: &str = "Invalid address";

/// Separator placed between the display name and the address when hashing.
const HASH_SEPARATOR: &str = "&*^%$@$#@@$";

/// An e-mail participant: an optional validated address plus an optional
/// display name.
///
/// Both fields are normalized on the way in. A blank address is stored as
/// `None` and leaves the endpoint invalid; a non-blank address that does not
/// contain an accepted address is rejected with
/// [`EndpointError::InvalidFormat`].
///
/// # Example
///
/// ```
/// use mail_endpoint::EmailEndpoint;
///
/// let endpoint = EmailEndpoint::new(Some(" alice@example.com "), Some("Alice")).unwrap();
/// assert!(endpoint.is_valid());
/// assert_eq!(endpoint.address(), Some("alice@example.com"));
/// assert_eq!(endpoint.to_string(), "Alice <alice@example.com>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailEndpoint {
    address: Option<String>,
    display_name: Option<String>,
}

impl EmailEndpoint {
    /// Create a new endpoint from raw address and display-name input.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::InvalidFormat` if `address` is non-blank and
    /// does not contain an accepted address.
    pub fn new(address: Option<&str>, display_name: Option<&str>) -> EndpointResult<Self> {
        Ok(Self {
            address: normalize_address(address, "address")?,
            display_name: normalize_display_name(display_name),
        })
    }

    /// Create an endpoint with an address and no display name.
    pub fn with_address(address: &str) -> EndpointResult<Self> {
        Self::new(Some(address), None)
    }

    /// Create an endpoint with neither address nor display name.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stored, trimmed address.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Replace the address.
    ///
    /// On error the previous address is kept.
    pub fn set_address(&mut self, value: Option<&str>) -> EndpointResult<()> {
        self.address = normalize_address(value, "value")?;
        Ok(())
    }

    /// The display name, falling back to the address when none is stored.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.address.as_deref())
    }

    /// The stored display name, without the address fallback.
    pub fn raw_display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Replace the display name. Never fails.
    pub fn set_display_name(&mut self, value: Option<&str>) {
        self.display_name = normalize_display_name(value);
    }

    /// Whether an address is present.
    pub fn is_valid(&self) -> bool {
        self.address.is_some()
    }
}

/// Trim and validate a raw address. Blank input yields `None`.
fn normalize_address(value: Option<&str>, param: &'static str) -> EndpointResult<Option<String>> {
    let Some(address) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if !contains_valid_address(address) {
        tracing::debug!(param, address, "Rejected address with invalid format");
        return Err(EndpointError::InvalidFormat { param });
    }

    Ok(Some(address.to_string()))
}

fn lowercase_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().flat_map(char::to_lowercase)
}

fn address_eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => lowercase_chars(a).eq(lowercase_chars(b)),
        _ => false,
    }
}

impl PartialEq for EmailEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.display_name == other.display_name
            && address_eq_ignore_case(self.address(), other.address())
    }
}

impl Eq for EmailEndpoint {}

// The address is case-folded so that endpoints equal under `eq` hash alike.
impl Hash for EmailEndpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut buffer = String::new();
        if let Some(display_name) = &self.display_name {
            buffer.push_str(display_name);
        }
        buffer.push_str(HASH_SEPARATOR);
        if let Some(address) = &self.address {
            buffer.extend(lowercase_chars(address));
        }
        buffer.hash(state);
    }
}

// Display support
impl fmt::Display for EmailEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.address, &self.display_name) {
            (None, _) => f.write_str(INVALID_ADDRESS),
            (Some(address), Some(display_name)) => write!(f, "{} <{}>", display_name, address),
            (Some(address), None) => f.write_str(address),
        }
    }
}

/// Parses the rendered form: `Name <address>`, a bare address, or the
/// invalid-address placeholder.
impl FromStr for EmailEndpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == INVALID_ADDRESS {
            return Ok(Self::empty());
        }

        if let Some(inner) = s.strip_suffix('>') {
            if let Some(open) = inner.rfind('<') {
                let display_name = &inner[..open];
                let address = &inner[open + 1..];
                return Self::new(Some(address), Some(display_name));
            }
        }

        Self::new(Some(s), None)
    }
}

/// Borrowed view of the raw stored fields, used for serialization.
#[derive(Serialize)]
struct EndpointRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
}

/// Unvalidated input, fed through [`EmailEndpoint::new`] on deserialization.
#[derive(Deserialize)]
struct EndpointRecord {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

// Serde support - serialize the raw stored fields
impl Serialize for EmailEndpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EndpointRef {
            address: self.address.as_deref(),
            display_name: self.display_name.as_deref(),
        }
        .serialize(serializer)
    }
}

// Serde support - deserialize through the validating constructor
impl<'de> Deserialize<'de> for EmailEndpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = EndpointRecord::deserialize(deserializer)?;
        EmailEndpoint::new(record.address.as_deref(), record.display_name.as_deref())
            .map_err(serde::de::Error::custom)
    }
}

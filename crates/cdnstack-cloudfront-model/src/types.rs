//! Shared types for the CloudFront distribution-configuration graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Passthrough map for wire elements this model does not know about.
///
/// Unrecognized tags are stored verbatim under their tag name so that schema
/// additions on the provider side survive a decode without erroring. Entries
/// are never re-rendered.
pub type ExtraFields = BTreeMap<String, String>;

/// CloudFront ViewerProtocolPolicy enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewerProtocolPolicy {
    /// Serve viewers over HTTP or HTTPS. Default variant.
    #[default]
    #[serde(rename = "allow-all")]
    AllowAll,
    /// Redirect HTTP viewers to HTTPS.
    #[serde(rename = "redirect-to-https")]
    RedirectToHttps,
    /// Reject plain-HTTP viewers.
    #[serde(rename = "https-only")]
    HttpsOnly,
}

impl ViewerProtocolPolicy {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllowAll => "allow-all",
            Self::RedirectToHttps => "redirect-to-https",
            Self::HttpsOnly => "https-only",
        }
    }
}

impl std::fmt::Display for ViewerProtocolPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ViewerProtocolPolicy {
    fn from(s: &str) -> Self {
        match s {
            "redirect-to-https" => Self::RedirectToHttps,
            "https-only" => Self::HttpsOnly,
            _ => Self::default(),
        }
    }
}

/// CloudFront cookie Forward enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CookieForward {
    /// Forward every cookie. Default variant.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Forward only the whitelisted cookie names.
    #[serde(rename = "whitelist")]
    Whitelist,
    /// Forward no cookies.
    #[serde(rename = "none")]
    None,
}

impl CookieForward {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Whitelist => "whitelist",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for CookieForward {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CookieForward {
    fn from(s: &str) -> Self {
        match s {
            "whitelist" => Self::Whitelist,
            "none" => Self::None,
            _ => Self::default(),
        }
    }
}

/// An integer wire value that keeps malformed text instead of failing.
///
/// Numeric fields such as `MinTTL` and the origin ports are populated
/// best-effort: text that parses as an integer becomes [`IntValue::Int`],
/// anything else is preserved untouched as [`IntValue::Text`] so downstream
/// callers can decide what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntValue {
    /// A value that parsed as an integer.
    Int(i64),
    /// The raw text of a value that did not parse.
    Text(String),
}

impl IntValue {
    /// Parse wire text, falling back to the raw string on failure.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.parse::<i64>()
            .map_or_else(|_| Self::Text(text.to_string()), Self::Int)
    }

    /// The integer value, if this parsed as one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// True for `Int(0)` and for empty text, the wire notion of "absent".
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl Default for IntValue {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i64> for IntValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl std::fmt::Display for IntValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Ordered list of cookie names forwarded to the origin when the cookie
/// policy is `whitelist`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhitelistedNames {
    /// Cookie names, in document order.
    pub items: Vec<String>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// Ordered list of header names. Carried on the wire under
/// `ForwardedValues` but otherwise unused by this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    /// Header names, in document order.
    pub items: Vec<String>,
}

/// Accounts permitted to generate signed URLs or cookies for restricted
/// content. Entries are account ids or the literal `"self"`; order is
/// preserved from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedSigners {
    /// Account ids or `"self"`, in document order.
    pub items: Vec<String>,
}

impl TrustedSigners {
    /// Build a signer list from account ids / `"self"` literals.
    #[must_use]
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }
}

/// HTTP verbs the distribution accepts for a cache behavior, with the
/// sub-list of verbs whose responses are cached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedMethods {
    /// Accepted HTTP verbs, e.g. `["GET", "HEAD"]`.
    pub items: Vec<String>,
    /// Verbs whose responses are cached; subset of `items`.
    pub cached_methods: Vec<String>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// Which cookies get forwarded to the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookies {
    /// Forwarding policy: `all`, `whitelist`, or `none`.
    pub forward: Option<CookieForward>,
    /// Only meaningful when `forward` is `whitelist`.
    pub whitelisted_names: Option<WhitelistedNames>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// Which parts of an inbound request are passed through to the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardedValues {
    /// Whether the query string is forwarded. Always present on the wire.
    pub query_string: bool,
    /// Cookie forwarding policy.
    pub cookies: Option<Cookies>,
    /// Header names carried on the wire; decoded but never re-rendered.
    pub headers: Option<Headers>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// A rule mapping a URL path pattern to an origin and its caching and
/// forwarding policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBehavior {
    /// The pattern of request paths this behavior applies to, e.g. `*.jpg`.
    pub path_pattern: Option<String>,
    /// Id of the origin this behavior routes to. Required for a usable
    /// behavior.
    pub target_origin_id: String,
    /// What gets forwarded to the origin.
    pub forwarded_values: Option<ForwardedValues>,
    /// Accounts allowed to sign URLs/cookies for restricted content.
    pub trusted_signers: Option<TrustedSigners>,
    /// How viewers may reach the distribution.
    pub viewer_protocol_policy: Option<ViewerProtocolPolicy>,
    /// Minimum TTL in seconds; kept as raw text if the document carried a
    /// non-numeric value.
    pub min_ttl: Option<IntValue>,
    /// HTTP verb allow-list.
    pub allowed_methods: Option<AllowedMethods>,
    /// Whether media files are distributed in Microsoft Smooth Streaming
    /// format. Always rendered, defaulting to false.
    pub smooth_streaming: Option<bool>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// The behavior applied to requests no `PathPattern` matches.
///
/// Structurally identical to [`CacheBehavior`]; only the tag name at the
/// parse and serialize sites differs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultCacheBehavior(pub CacheBehavior);

impl std::ops::Deref for DefaultCacheBehavior {
    type Target = CacheBehavior;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for DefaultCacheBehavior {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<CacheBehavior> for DefaultCacheBehavior {
    fn from(behavior: CacheBehavior) -> Self {
        Self(behavior)
    }
}

/// Ordered collection of cache behaviors.
///
/// Order defines rule-matching priority downstream, so it is preserved
/// exactly as given by the caller or the document. The wire `<Quantity>`
/// always equals `items.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheBehaviors {
    /// Behaviors in rule-matching priority order.
    pub items: Vec<CacheBehavior>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

impl CacheBehaviors {
    /// Build a collection from an ordered sequence of behaviors.
    #[must_use]
    pub fn new(items: Vec<CacheBehavior>) -> Self {
        Self {
            items,
            extra: ExtraFields::new(),
        }
    }
}

/// A custom (non-S3) backend the distribution fetches content from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomOrigin {
    /// Hostname the distribution fetches content from.
    pub dns_name: Option<String>,
    /// Origin HTTP port, conventionally 80.
    pub http_port: Option<IntValue>,
    /// Origin HTTPS port, conventionally 443.
    pub https_port: Option<IntValue>,
    /// `http-only` or `match-viewer`.
    pub origin_protocol_policy: Option<String>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// The configuration document for a distribution, serializable as a request
/// body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionConfig {
    /// Caller-supplied idempotency token.
    pub caller_reference: Option<String>,
    /// The backend the distribution fronts.
    pub custom_origin: Option<CustomOrigin>,
    /// Alternate domain names for the distribution.
    pub cnames: Vec<String>,
    /// Free-form description.
    pub comment: Option<String>,
    /// Always rendered with an explicit `true`/`false`.
    pub enabled: bool,
    /// Behavior for requests no path pattern matches.
    pub default_cache_behavior: Option<DefaultCacheBehavior>,
    /// Path-pattern behaviors in priority order.
    pub cache_behaviors: Option<CacheBehaviors>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// A configured CDN endpoint as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution {
    /// Provider-assigned distribution id.
    pub id: Option<String>,
    /// Deployment status, e.g. `InProgress` or `Deployed`.
    pub status: Option<String>,
    /// When the configuration last changed.
    pub last_modified_time: Option<chrono::DateTime<chrono::Utc>>,
    /// Invalidation batches still propagating.
    pub in_progress_invalidation_batches: Option<IntValue>,
    /// The distribution's assigned domain name.
    pub domain_name: Option<String>,
    /// The configuration this distribution was created from.
    pub config: Option<DistributionConfig>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// One entry of a [`DistributionList`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionSummary {
    /// Provider-assigned distribution id.
    pub id: Option<String>,
    /// Deployment status.
    pub status: Option<String>,
    /// When the configuration last changed.
    pub last_modified_time: Option<chrono::DateTime<chrono::Utc>>,
    /// The distribution's assigned domain name.
    pub domain_name: Option<String>,
    /// The backend the distribution fronts.
    pub custom_origin: Option<CustomOrigin>,
    /// Alternate domain names.
    pub cnames: Vec<String>,
    /// Whether the distribution accepts requests.
    pub enabled: bool,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

/// A page of distribution summaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionList {
    /// Pagination marker this page started from.
    pub marker: Option<String>,
    /// Page size the listing was requested with.
    pub max_items: Option<IntValue>,
    /// Whether more pages follow.
    pub is_truncated: bool,
    /// Summaries in listing order.
    pub summaries: Vec<DistributionSummary>,
    /// Unrecognized wire elements.
    pub extra: ExtraFields,
}

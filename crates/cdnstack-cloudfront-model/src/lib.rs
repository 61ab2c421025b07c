//! CloudFront distribution-configuration data model for `CdnStack`.
//!
//! Plain mutable records describing a distribution's cache configuration:
//! origins, cache behaviors, forwarding rules, and signer lists. Ownership is
//! strictly tree-shaped; no entity has identity beyond being a field on its
//! parent. Conversion to and from the CloudFront XML wire format lives in the
//! `cdnstack-cloudfront-xml` crate.

pub mod types;

pub use types::{
    AllowedMethods, CacheBehavior, CacheBehaviors, CookieForward, Cookies, CustomOrigin,
    DefaultCacheBehavior, Distribution, DistributionConfig, DistributionList, DistributionSummary,
    ForwardedValues, Headers, IntValue, TrustedSigners, ViewerProtocolPolicy, WhitelistedNames,
};

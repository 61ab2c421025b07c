//! CloudFront XML serialization/deserialization for `CdnStack`.
//!
//! This crate is the wire layer for the CloudFront provisioning protocol,
//! handling conversion between the distribution-configuration model types and
//! the XML documents the service exchanges. It is purely a data-binding
//! layer: HTTP, signing, and request dispatch live elsewhere.
//!
//! # Key components
//!
//! - [`CfSerialize`] trait and [`to_xml`] function for rendering request bodies
//! - [`CfDeserialize`] trait and [`from_xml`] function for hydrating response
//!   documents into structs
//!
//! # CloudFront XML conventions
//!
//! - Namespace: `http://cloudfront.amazonaws.com/doc/2012-07-01/`
//! - Booleans: lowercase `true`/`false`
//! - Collections: a `<Quantity>` count followed by an `<Items>` block
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//!
//! Field population is best-effort: non-numeric text in integer fields is
//! kept verbatim, and unrecognized elements land in each node's passthrough
//! map rather than failing the decode.

pub mod deserialize;
pub mod error;
pub mod serialize;

pub use deserialize::{CfDeserialize, from_xml};
pub use error::XmlError;
pub use serialize::{CLOUDFRONT_NAMESPACE, CfSerialize, to_xml};

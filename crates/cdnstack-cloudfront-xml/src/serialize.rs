//! CloudFront XML serialization: rendering model types as request bodies.
//!
//! This module provides the [`CfSerialize`] trait and implementations for the
//! distribution-configuration types that are sent to the service. Rendering
//! follows the CloudFront wire conventions:
//!
//! - Optional fields render their element only when the value is present and
//!   non-empty (and non-zero for integers).
//! - `SmoothStreaming`, `QueryString`, and the trusted-signers `Enabled` flag
//!   always render with an explicit `true`/`false`.
//! - Collections render a `<Quantity>` count and an `<Items>` block.
//!
//! Element ordering within each fragment is contractual; whitespace is not,
//! so output is compact.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesText, Event};

use crate::error::XmlError;

/// The CloudFront XML namespace.
pub const CLOUDFRONT_NAMESPACE: &str = "http://cloudfront.amazonaws.com/doc/2012-07-01/";

/// Trait for serializing CloudFront types to XML.
///
/// Implementors write their content into the current XML context. Leaf and
/// value-holder types write their own enclosing element; document-level types
/// ([`CacheBehavior`], [`DistributionConfig`]) write only their children so
/// the caller controls the tag name (`CacheBehavior` vs
/// `DefaultCacheBehavior`, root element vs nested).
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait CfSerialize {
    /// Serialize this value as XML into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize a value as a complete CloudFront request body.
///
/// Produces an XML declaration, the namespaced root element, and the
/// serialized content of the value.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: CfSerialize>(root_element: &str, value: &T) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(quick_xml::events::BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        None,
    )))?;

    writer
        .create_element(root_element)
        .with_attribute(("xmlns", CLOUDFRONT_NAMESPACE))
        .write_inner_content(|w| value.serialize_xml(w))?;

    Ok(buf)
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is present and non-empty.
fn write_present_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        if !v.is_empty() {
            write_text_element(writer, tag, v)?;
        }
    }
    Ok(())
}

/// Write `<tag>true|false</tag>` unconditionally. Absent means false.
fn write_flag<W: Write>(writer: &mut Writer<W>, tag: &str, value: Option<bool>) -> io::Result<()> {
    write_text_element(writer, tag, if value.unwrap_or(false) { "true" } else { "false" })
}

/// Write `<tag>value</tag>` only for a present, non-zero integer value.
///
/// Zero and empty raw text count as absent, matching the wire convention that
/// a falsy value suppresses its element.
fn write_present_int<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&IntValue>,
) -> io::Result<()> {
    if let Some(v) = value {
        if !v.is_zero() {
            write_text_element(writer, tag, &v.to_string())?;
        }
    }
    Ok(())
}

/// Write a `<Quantity>n</Quantity><Items>...</Items>` pair for a string list,
/// with each entry wrapped in `item_tag`. Empty lists write nothing.
fn write_quantified_items<W: Write>(
    writer: &mut Writer<W>,
    item_tag: &str,
    items: &[String],
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    write_text_element(writer, "Quantity", &items.len().to_string())?;
    writer.create_element("Items").write_inner_content(|w| {
        for item in items {
            write_text_element(w, item_tag, item)?;
        }
        Ok(())
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CfSerialize implementations
// ---------------------------------------------------------------------------

use cdnstack_cloudfront_model::types::{
    AllowedMethods, CacheBehavior, CacheBehaviors, CookieForward, Cookies, CustomOrigin,
    DefaultCacheBehavior, DistributionConfig, ForwardedValues, IntValue, TrustedSigners,
    WhitelistedNames,
};

impl CfSerialize for TrustedSigners {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("TrustedSigners")
            .write_inner_content(|w| {
                // The service does not support disabling signer checking once
                // the list is non-empty, so Enabled is always true.
                write_text_element(w, "Enabled", "true")?;
                write_quantified_items(w, "AwsAccountNumber", &self.items)?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CfSerialize for WhitelistedNames {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("WhitelistedNames")
            .write_inner_content(|w| write_quantified_items(w, "Name", &self.items))?;
        Ok(())
    }
}

impl CfSerialize for Cookies {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Cookies").write_inner_content(|w| {
            if let Some(ref forward) = self.forward {
                write_text_element(w, "Forward", forward.as_str())?;
            }
            // WhitelistedNames is only meaningful under the whitelist policy,
            // and an empty whitelist stays off the wire.
            if self.forward == Some(CookieForward::Whitelist) {
                if let Some(ref names) = self.whitelisted_names {
                    if !names.items.is_empty() {
                        names.serialize_xml(w)?;
                    }
                }
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl CfSerialize for ForwardedValues {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("ForwardedValues")
            .write_inner_content(|w| {
                write_flag(w, "QueryString", Some(self.query_string))?;
                if let Some(ref cookies) = self.cookies {
                    cookies.serialize_xml(w)?;
                }
                // headers is decoded for completeness but never rendered.
                Ok(())
            })?;
        Ok(())
    }
}

impl CfSerialize for AllowedMethods {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("AllowedMethods")
            .write_inner_content(|w| {
                write_quantified_items(w, "Method", &self.items)?;
                if !self.cached_methods.is_empty() {
                    w.create_element("CachedMethods").write_inner_content(|w| {
                        write_quantified_items(w, "Method", &self.cached_methods)
                    })?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl CfSerialize for CacheBehavior {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_present_text(writer, "PathPattern", self.path_pattern.as_deref())?;
        write_present_text(writer, "TargetOriginId", Some(&self.target_origin_id))?;
        if let Some(ref forwarded) = self.forwarded_values {
            forwarded.serialize_xml(writer)?;
        }
        if let Some(ref signers) = self.trusted_signers {
            if !signers.items.is_empty() {
                signers.serialize_xml(writer)?;
            }
        }
        if let Some(ref policy) = self.viewer_protocol_policy {
            write_text_element(writer, "ViewerProtocolPolicy", policy.as_str())?;
        }
        write_present_int(writer, "MinTTL", self.min_ttl.as_ref())?;
        if let Some(ref methods) = self.allowed_methods {
            methods.serialize_xml(writer)?;
        }
        write_flag(writer, "SmoothStreaming", self.smooth_streaming)?;
        Ok(())
    }
}

impl CfSerialize for DefaultCacheBehavior {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("DefaultCacheBehavior")
            .write_inner_content(|w| self.0.serialize_xml(w))?;
        Ok(())
    }
}

impl CfSerialize for CacheBehaviors {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("CacheBehaviors")
            .write_inner_content(|w| {
                write_text_element(w, "Quantity", &self.items.len().to_string())?;
                if !self.items.is_empty() {
                    w.create_element("Items").write_inner_content(|w| {
                        for behavior in &self.items {
                            w.create_element("CacheBehavior")
                                .write_inner_content(|w| behavior.serialize_xml(w))?;
                        }
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl CfSerialize for CustomOrigin {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("CustomOrigin")
            .write_inner_content(|w| {
                write_present_text(w, "DNSName", self.dns_name.as_deref())?;
                write_present_int(w, "HTTPPort", self.http_port.as_ref())?;
                write_present_int(w, "HTTPSPort", self.https_port.as_ref())?;
                write_present_text(
                    w,
                    "OriginProtocolPolicy",
                    self.origin_protocol_policy.as_deref(),
                )?;
                Ok(())
            })?;
        Ok(())
    }
}

impl CfSerialize for DistributionConfig {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        if let Some(ref origin) = self.custom_origin {
            origin.serialize_xml(writer)?;
        }
        write_present_text(writer, "CallerReference", self.caller_reference.as_deref())?;
        for cname in &self.cnames {
            write_text_element(writer, "CNAME", cname)?;
        }
        write_present_text(writer, "Comment", self.comment.as_deref())?;
        write_flag(writer, "Enabled", Some(self.enabled))?;
        if let Some(ref behavior) = self.default_cache_behavior {
            behavior.serialize_xml(writer)?;
        }
        if let Some(ref behaviors) = self.cache_behaviors {
            behaviors.serialize_xml(writer)?;
        }
        Ok(())
    }
}

//! CloudFront XML deserialization: hydrating model types from response
//! documents.
//!
//! This module provides the [`CfDeserialize`] trait and implementations for
//! the distribution-configuration graph. Decoding is best-effort by design:
//!
//! - numeric fields keep malformed text verbatim instead of erroring,
//! - boolean fields are true iff the lower-cased text equals `"true"`,
//! - unrecognized elements land in the node's `extra` passthrough map so
//!   provider schema additions survive a decode.
//!
//! Only structural malformation (truncated documents, invalid XML) surfaces
//! as an error, propagated from the underlying reader unmodified.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::XmlError;

/// Trait for deserializing CloudFront types from XML.
///
/// Implementors parse XML elements from the reader and populate the struct
/// fields. The opening tag of this element has already been consumed by the
/// caller; the implementation reads child content and returns once the
/// matching end tag is consumed. Nested structures delegate to the child
/// type's implementation and assign the finished child on its close.
pub trait CfDeserialize: Sized {
    /// Deserialize an instance from the given XML reader.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is structurally malformed.
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;
}

/// Deserialize a CloudFront XML document into a typed value.
///
/// Finds the root element and delegates to the type's `CfDeserialize`
/// implementation.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or has no root element.
pub fn from_xml<T: CfDeserialize>(xml: &[u8]) -> Result<T, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    // Skip the XML declaration and find the root element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => {
                return T::deserialize_xml(&mut reader);
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_string()));
            }
            // Skip declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Read the text content of the current element and consume its end tag.
///
/// Expects the reader to be positioned right after a `Start` event. Reads
/// the text content and consumes through the matching `End` event.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Read an element of unknown shape, flattening any nested markup to its
/// concatenated text content, and consume the matching end tag.
fn read_flattened_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(text);
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading element content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Store an unrecognized element verbatim in the node's passthrough map.
fn store_extra(
    extra: &mut ExtraFields,
    tag: &str,
    reader: &mut Reader<&[u8]>,
) -> Result<(), XmlError> {
    let text = read_flattened_content(reader)?;
    tracing::debug!(tag, "storing unrecognized element in passthrough map");
    extra.insert(tag.to_string(), text);
    Ok(())
}

/// True iff the lower-cased wire text equals `"true"`. Anything else,
/// including empty text, is false; this never errors.
fn parse_flag(s: &str) -> bool {
    s.eq_ignore_ascii_case("true")
}

/// Parse an ISO 8601 timestamp from XML text.
fn parse_timestamp(s: &str) -> Result<chrono::DateTime<chrono::Utc>, XmlError> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .or_else(|_| {
            // CloudFront timestamps look like 2014-02-03T11:03:41.087Z.
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|e| XmlError::ParseError(format!("invalid timestamp '{s}': {e}")))
}

/// Read an `<Items>`-style run of identically named leaf elements into a
/// string list, in document order. Other elements are consumed and ignored.
fn read_string_list(reader: &mut Reader<&[u8]>, item_tag: &str) -> Result<Vec<String>, XmlError> {
    let mut items = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                if tag_name == item_tag {
                    items.push(read_text_content(reader)?);
                } else {
                    read_flattened_content(reader)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in list".to_string(),
                ));
            }
            _ => {}
        }
    }
    Ok(items)
}

/// Read a `<Quantity>`/`<Items>` block into a string list.
///
/// `Quantity` is consumed and discarded; the item count is implied by the
/// list itself.
fn read_quantified_string_list(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<String>, XmlError> {
    let mut items = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                match tag_name {
                    "Items" => items = read_string_list(reader, item_tag)?,
                    _ => {
                        read_flattened_content(reader)?;
                    }
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in quantified list".to_string(),
                ));
            }
            _ => {}
        }
    }
    Ok(items)
}

/// Deserialize a list of structured items where each item is wrapped in the
/// given element name.
fn deserialize_list<T: CfDeserialize>(
    reader: &mut Reader<&[u8]>,
    item_tag: &str,
) -> Result<Vec<T>, XmlError> {
    let mut items = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                if tag_name == item_tag {
                    items.push(T::deserialize_xml(reader)?);
                } else {
                    read_flattened_content(reader)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in list".to_string(),
                ));
            }
            _ => {}
        }
    }
    Ok(items)
}

// ---------------------------------------------------------------------------
// CfDeserialize implementations
// ---------------------------------------------------------------------------

use cdnstack_cloudfront_model::types::{
    AllowedMethods, CacheBehavior, CacheBehaviors, CookieForward, Cookies, CustomOrigin,
    DefaultCacheBehavior, Distribution, DistributionConfig, DistributionList, DistributionSummary,
    ExtraFields, ForwardedValues, Headers, IntValue, TrustedSigners, ViewerProtocolPolicy,
    WhitelistedNames,
};

impl CfDeserialize for WhitelistedNames {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut names = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Quantity" => {
                            read_text_content(reader)?;
                        }
                        "Items" => names.items = read_string_list(reader, "Name")?,
                        _ => store_extra(&mut names.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in WhitelistedNames".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(names)
    }
}

impl CfDeserialize for Headers {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let items = read_quantified_string_list(reader, "Name")?;
        Ok(Headers { items })
    }
}

impl CfDeserialize for TrustedSigners {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut items = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        // Enabled is always true on the wire when the list is
                        // non-empty; nothing to keep.
                        "Enabled" | "Quantity" => {
                            read_text_content(reader)?;
                        }
                        "Items" => items = read_string_list(reader, "AwsAccountNumber")?,
                        _ => {
                            read_flattened_content(reader)?;
                        }
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in TrustedSigners".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(TrustedSigners { items })
    }
}

impl CfDeserialize for AllowedMethods {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut methods = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Quantity" => {
                            read_text_content(reader)?;
                        }
                        "Items" => methods.items = read_string_list(reader, "Method")?,
                        "CachedMethods" => {
                            methods.cached_methods =
                                read_quantified_string_list(reader, "Method")?;
                        }
                        _ => store_extra(&mut methods.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in AllowedMethods".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(methods)
    }
}

impl CfDeserialize for Cookies {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut cookies = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Forward" => {
                            let text = read_text_content(reader)?;
                            cookies.forward = Some(CookieForward::from(text.as_str()));
                        }
                        "WhitelistedNames" => {
                            cookies.whitelisted_names =
                                Some(WhitelistedNames::deserialize_xml(reader)?);
                        }
                        _ => store_extra(&mut cookies.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Cookies".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(cookies)
    }
}

impl CfDeserialize for ForwardedValues {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut forwarded = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "QueryString" => {
                            let text = read_text_content(reader)?;
                            forwarded.query_string = parse_flag(&text);
                        }
                        "Cookies" => {
                            forwarded.cookies = Some(Cookies::deserialize_xml(reader)?);
                        }
                        "Headers" => {
                            forwarded.headers = Some(Headers::deserialize_xml(reader)?);
                        }
                        _ => store_extra(&mut forwarded.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in ForwardedValues".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(forwarded)
    }
}

impl CfDeserialize for CacheBehavior {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut behavior = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "PathPattern" => {
                            behavior.path_pattern = Some(read_text_content(reader)?);
                        }
                        "TargetOriginId" => {
                            behavior.target_origin_id = read_text_content(reader)?;
                        }
                        "ForwardedValues" => {
                            behavior.forwarded_values =
                                Some(ForwardedValues::deserialize_xml(reader)?);
                        }
                        "TrustedSigners" => {
                            behavior.trusted_signers =
                                Some(TrustedSigners::deserialize_xml(reader)?);
                        }
                        "ViewerProtocolPolicy" => {
                            let text = read_text_content(reader)?;
                            behavior.viewer_protocol_policy =
                                Some(ViewerProtocolPolicy::from(text.as_str()));
                        }
                        "MinTTL" => {
                            let text = read_text_content(reader)?;
                            behavior.min_ttl = Some(IntValue::parse(&text));
                        }
                        "AllowedMethods" => {
                            behavior.allowed_methods =
                                Some(AllowedMethods::deserialize_xml(reader)?);
                        }
                        "SmoothStreaming" => {
                            let text = read_text_content(reader)?;
                            behavior.smooth_streaming = Some(parse_flag(&text));
                        }
                        _ => store_extra(&mut behavior.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in CacheBehavior".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(behavior)
    }
}

impl CfDeserialize for DefaultCacheBehavior {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        Ok(Self(CacheBehavior::deserialize_xml(reader)?))
    }
}

impl CfDeserialize for CacheBehaviors {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut behaviors = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Quantity" => {
                            read_text_content(reader)?;
                        }
                        "Items" => {
                            behaviors.items = deserialize_list(reader, "CacheBehavior")?;
                        }
                        _ => store_extra(&mut behaviors.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in CacheBehaviors".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(behaviors)
    }
}

impl CfDeserialize for CustomOrigin {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut origin = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "DNSName" => origin.dns_name = Some(read_text_content(reader)?),
                        "HTTPPort" => {
                            let text = read_text_content(reader)?;
                            origin.http_port = Some(IntValue::parse(&text));
                        }
                        "HTTPSPort" => {
                            let text = read_text_content(reader)?;
                            origin.https_port = Some(IntValue::parse(&text));
                        }
                        "OriginProtocolPolicy" => {
                            origin.origin_protocol_policy = Some(read_text_content(reader)?);
                        }
                        _ => store_extra(&mut origin.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in CustomOrigin".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(origin)
    }
}

impl CfDeserialize for DistributionConfig {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut config = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "CustomOrigin" => {
                            config.custom_origin = Some(CustomOrigin::deserialize_xml(reader)?);
                        }
                        "CallerReference" => {
                            config.caller_reference = Some(read_text_content(reader)?);
                        }
                        "CNAME" => config.cnames.push(read_text_content(reader)?),
                        "Comment" => config.comment = Some(read_text_content(reader)?),
                        "Enabled" => {
                            let text = read_text_content(reader)?;
                            config.enabled = parse_flag(&text);
                        }
                        "DefaultCacheBehavior" => {
                            config.default_cache_behavior =
                                Some(DefaultCacheBehavior::deserialize_xml(reader)?);
                        }
                        "CacheBehaviors" => {
                            config.cache_behaviors = Some(CacheBehaviors::deserialize_xml(reader)?);
                        }
                        _ => store_extra(&mut config.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in DistributionConfig".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

impl CfDeserialize for Distribution {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut distribution = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Id" => distribution.id = Some(read_text_content(reader)?),
                        "Status" => distribution.status = Some(read_text_content(reader)?),
                        "LastModifiedTime" => {
                            let text = read_text_content(reader)?;
                            distribution.last_modified_time = Some(parse_timestamp(&text)?);
                        }
                        "InProgressInvalidationBatches" => {
                            let text = read_text_content(reader)?;
                            distribution.in_progress_invalidation_batches =
                                Some(IntValue::parse(&text));
                        }
                        "DomainName" => {
                            distribution.domain_name = Some(read_text_content(reader)?);
                        }
                        "DistributionConfig" => {
                            distribution.config =
                                Some(DistributionConfig::deserialize_xml(reader)?);
                        }
                        _ => store_extra(&mut distribution.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in Distribution".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(distribution)
    }
}

impl CfDeserialize for DistributionSummary {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut summary = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Id" => summary.id = Some(read_text_content(reader)?),
                        "Status" => summary.status = Some(read_text_content(reader)?),
                        "LastModifiedTime" => {
                            let text = read_text_content(reader)?;
                            summary.last_modified_time = Some(parse_timestamp(&text)?);
                        }
                        "DomainName" => summary.domain_name = Some(read_text_content(reader)?),
                        "CustomOrigin" => {
                            summary.custom_origin = Some(CustomOrigin::deserialize_xml(reader)?);
                        }
                        "CNAME" => summary.cnames.push(read_text_content(reader)?),
                        "Enabled" => {
                            let text = read_text_content(reader)?;
                            summary.enabled = parse_flag(&text);
                        }
                        _ => store_extra(&mut summary.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in DistributionSummary".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(summary)
    }
}

impl CfDeserialize for DistributionList {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut list = Self::default();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.name();
                    let tag_name = std::str::from_utf8(name.as_ref())
                        .map_err(|e| XmlError::ParseError(e.to_string()))?;
                    match tag_name {
                        "Marker" => list.marker = Some(read_text_content(reader)?),
                        "MaxItems" => {
                            let text = read_text_content(reader)?;
                            list.max_items = Some(IntValue::parse(&text));
                        }
                        "IsTruncated" => {
                            let text = read_text_content(reader)?;
                            list.is_truncated = parse_flag(&text);
                        }
                        "DistributionSummary" => {
                            list.summaries.push(DistributionSummary::deserialize_xml(reader)?);
                        }
                        _ => store_extra(&mut list.extra, tag_name, reader)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in DistributionList".to_string(),
                    ));
                }
                _ => {}
            }
        }

        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::to_xml;

    #[test]
    fn test_should_deserialize_whitelisted_names() {
        let xml = br"<WhitelistedNames>
            <Quantity>1</Quantity>
            <Items>
               <Name>example-cookie</Name>
            </Items>
        </WhitelistedNames>";

        let names: WhitelistedNames = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(names.items, vec!["example-cookie".to_string()]);
    }

    #[test]
    fn test_should_keep_non_numeric_min_ttl_as_text() {
        let xml = br"<CacheBehavior>
            <TargetOriginId>example</TargetOriginId>
            <MinTTL>not-a-number</MinTTL>
        </CacheBehavior>";

        let behavior: CacheBehavior = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(
            behavior.min_ttl,
            Some(IntValue::Text("not-a-number".to_string()))
        );
    }

    #[test]
    fn test_should_treat_only_true_text_as_true() {
        for (text, expected) in [
            ("true", true),
            ("True", true),
            ("TRUE", true),
            ("false", false),
            ("yes", false),
            ("", false),
        ] {
            let xml = format!(
                "<ForwardedValues><QueryString>{text}</QueryString></ForwardedValues>"
            );
            let forwarded: ForwardedValues =
                from_xml(xml.as_bytes()).expect("deserialization should succeed");
            assert_eq!(forwarded.query_string, expected, "text {text:?}");
        }
    }

    #[test]
    fn test_should_store_unknown_elements_in_extra() {
        let xml = br"<CacheBehavior>
            <TargetOriginId>example</TargetOriginId>
            <Compress>true</Compress>
        </CacheBehavior>";

        let behavior: CacheBehavior = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(behavior.extra.get("Compress").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_should_assign_whitelisted_names_built_during_open() {
        let xml = br"<Cookies>
            <Forward>whitelist</Forward>
            <WhitelistedNames>
               <Quantity>2</Quantity>
               <Items>
                  <Name>session</Name>
                  <Name>locale</Name>
               </Items>
            </WhitelistedNames>
        </Cookies>";

        let cookies: Cookies = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(cookies.forward, Some(CookieForward::Whitelist));
        let names = cookies.whitelisted_names.expect("names assigned on close");
        assert_eq!(names.items, vec!["session".to_string(), "locale".to_string()]);
    }

    #[test]
    fn test_should_preserve_cache_behavior_order() {
        let xml = br"<CacheBehaviors>
            <Quantity>2</Quantity>
            <Items>
               <CacheBehavior>
                  <PathPattern>*.jpg</PathPattern>
                  <TargetOriginId>example-custom-origin</TargetOriginId>
                  <SmoothStreaming>false</SmoothStreaming>
               </CacheBehavior>
               <CacheBehavior>
                  <PathPattern>*.png</PathPattern>
                  <TargetOriginId>example-custom-origin-2</TargetOriginId>
                  <SmoothStreaming>false</SmoothStreaming>
               </CacheBehavior>
            </Items>
        </CacheBehaviors>";

        let behaviors: CacheBehaviors = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(behaviors.items.len(), 2);
        assert_eq!(behaviors.items[0].path_pattern.as_deref(), Some("*.jpg"));
        assert_eq!(behaviors.items[1].path_pattern.as_deref(), Some("*.png"));
    }

    #[test]
    fn test_should_deserialize_allowed_methods_with_cached_methods() {
        let xml = br"<AllowedMethods>
            <Quantity>3</Quantity>
            <Items>
               <Method>GET</Method>
               <Method>HEAD</Method>
               <Method>OPTIONS</Method>
            </Items>
            <CachedMethods>
               <Quantity>2</Quantity>
               <Items>
                  <Method>GET</Method>
                  <Method>HEAD</Method>
               </Items>
            </CachedMethods>
        </AllowedMethods>";

        let methods: AllowedMethods = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(methods.items, vec!["GET", "HEAD", "OPTIONS"]);
        assert_eq!(methods.cached_methods, vec!["GET", "HEAD"]);
    }

    #[test]
    fn test_should_deserialize_full_distribution_document() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <Distribution xmlns="http://cloudfront.amazonaws.com/doc/2012-07-01/">
            <Id>EEEEEEEEEEEEEE</Id>
            <Status>InProgress</Status>
            <LastModifiedTime>2014-02-04T10:34:07.873Z</LastModifiedTime>
            <InProgressInvalidationBatches>0</InProgressInvalidationBatches>
            <DomainName>d2000000000000.cloudfront.net</DomainName>
            <DistributionConfig>
                <CustomOrigin>
                    <DNSName>example.com</DNSName>
                    <HTTPPort>80</HTTPPort>
                    <HTTPSPort>443</HTTPSPort>
                    <OriginProtocolPolicy>match-viewer</OriginProtocolPolicy>
                </CustomOrigin>
                <CallerReference>aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee</CallerReference>
                <Comment>example.com distribution</Comment>
                <Enabled>false</Enabled>
                <DefaultCacheBehavior>
                   <TargetOriginId>example</TargetOriginId>
                   <ForwardedValues>
                      <QueryString>true</QueryString>
                      <Cookies>
                         <Forward>whitelist</Forward>
                         <WhitelistedNames>
                            <Quantity>1</Quantity>
                            <Items>
                               <Name>example-cookie</Name>
                            </Items>
                         </WhitelistedNames>
                      </Cookies>
                   </ForwardedValues>
                   <TrustedSigners>
                      <Enabled>true</Enabled>
                      <Quantity>1</Quantity>
                      <Items>
                         <AwsAccountNumber>self</AwsAccountNumber>
                      </Items>
                   </TrustedSigners>
                   <ViewerProtocolPolicy>redirect-to-https</ViewerProtocolPolicy>
                   <MinTTL>0</MinTTL>
                   <SmoothStreaming>false</SmoothStreaming>
                </DefaultCacheBehavior>
                <CacheBehaviors>
                  <Quantity>2</Quantity>
                  <Items>
                     <CacheBehavior>
                        <PathPattern>*.jpg</PathPattern>
                        <TargetOriginId>example-custom-origin</TargetOriginId>
                        <ForwardedValues>
                           <QueryString>false</QueryString>
                           <Cookies>
                              <Forward>all</Forward>
                           </Cookies>
                        </ForwardedValues>
                        <TrustedSigners>
                           <Enabled>true</Enabled>
                           <Quantity>2</Quantity>
                           <Items>
                              <AwsAccountNumber>self</AwsAccountNumber>
                              <AwsAccountNumber>111122223333</AwsAccountNumber>
                           </Items>
                        </TrustedSigners>
                        <ViewerProtocolPolicy>allow-all</ViewerProtocolPolicy>
                        <MinTTL>86400</MinTTL>
                        <SmoothStreaming>false</SmoothStreaming>
                     </CacheBehavior>
                     <CacheBehavior>
                        <PathPattern>*.png</PathPattern>
                        <TargetOriginId>example-custom-origin-2</TargetOriginId>
                        <SmoothStreaming>false</SmoothStreaming>
                     </CacheBehavior>
                  </Items>
                </CacheBehaviors>
            </DistributionConfig>
        </Distribution>"#;

        let distribution: Distribution = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(distribution.id.as_deref(), Some("EEEEEEEEEEEEEE"));
        assert_eq!(distribution.status.as_deref(), Some("InProgress"));
        assert_eq!(
            distribution.in_progress_invalidation_batches,
            Some(IntValue::Int(0))
        );

        let config = distribution.config.expect("config present");
        let origin = config.custom_origin.expect("origin present");
        assert_eq!(origin.dns_name.as_deref(), Some("example.com"));
        assert_eq!(origin.http_port, Some(IntValue::Int(80)));
        assert_eq!(origin.https_port, Some(IntValue::Int(443)));
        assert_eq!(origin.origin_protocol_policy.as_deref(), Some("match-viewer"));
        assert!(!config.enabled);

        let default_behavior = config.default_cache_behavior.expect("default behavior");
        assert_eq!(default_behavior.target_origin_id, "example");
        let forwarded = default_behavior
            .forwarded_values
            .as_ref()
            .expect("forwarded values");
        assert!(forwarded.query_string);
        let cookies = forwarded.cookies.as_ref().expect("cookies");
        assert_eq!(cookies.forward, Some(CookieForward::Whitelist));
        assert_eq!(
            cookies
                .whitelisted_names
                .as_ref()
                .expect("whitelisted names")
                .items,
            vec!["example-cookie".to_string()]
        );
        assert_eq!(
            default_behavior
                .trusted_signers
                .as_ref()
                .expect("signers")
                .items,
            vec!["self".to_string()]
        );
        assert_eq!(default_behavior.min_ttl, Some(IntValue::Int(0)));
        assert_eq!(default_behavior.smooth_streaming, Some(false));

        let behaviors = config.cache_behaviors.expect("cache behaviors");
        assert_eq!(behaviors.items.len(), 2);
        assert_eq!(behaviors.items[0].path_pattern.as_deref(), Some("*.jpg"));
        assert_eq!(
            behaviors.items[0]
                .trusted_signers
                .as_ref()
                .expect("signers")
                .items,
            vec!["self".to_string(), "111122223333".to_string()]
        );
        assert_eq!(behaviors.items[0].min_ttl, Some(IntValue::Int(86400)));
        assert_eq!(behaviors.items[1].path_pattern.as_deref(), Some("*.png"));
        assert_eq!(
            behaviors.items[1].target_origin_id,
            "example-custom-origin-2"
        );
    }

    #[test]
    fn test_should_deserialize_distribution_list() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <DistributionList xmlns="http://cloudfront.amazonaws.com/doc/2012-07-01/">
            <Marker></Marker>
            <MaxItems>100</MaxItems>
            <IsTruncated>false</IsTruncated>
            <DistributionSummary>
                <Id>EEEEEEEEEEEEE</Id>
                <Status>InProgress</Status>
                <LastModifiedTime>2014-02-03T11:03:41.087Z</LastModifiedTime>
                <DomainName>abcdef12345678.cloudfront.net</DomainName>
                <CustomOrigin>
                    <DNSName>example.com</DNSName>
                    <HTTPPort>80</HTTPPort>
                    <HTTPSPort>443</HTTPSPort>
                    <OriginProtocolPolicy>http-only</OriginProtocolPolicy>
                </CustomOrigin>
                <CNAME>static.example.com</CNAME>
                <Enabled>true</Enabled>
            </DistributionSummary>
        </DistributionList>"#;

        let list: DistributionList = from_xml(xml).expect("deserialization should succeed");
        assert_eq!(list.max_items, Some(IntValue::Int(100)));
        assert!(!list.is_truncated);
        assert_eq!(list.summaries.len(), 1);
        let summary = &list.summaries[0];
        assert_eq!(summary.id.as_deref(), Some("EEEEEEEEEEEEE"));
        assert_eq!(summary.cnames, vec!["static.example.com".to_string()]);
        assert!(summary.enabled);
        assert_eq!(
            summary
                .custom_origin
                .as_ref()
                .expect("origin")
                .dns_name
                .as_deref(),
            Some("example.com")
        );
    }

    #[test]
    fn test_should_round_trip_cache_behavior() {
        let xml = br"<CacheBehavior>
            <PathPattern>*.jpg</PathPattern>
            <TargetOriginId>example-custom-origin</TargetOriginId>
            <ForwardedValues>
               <QueryString>false</QueryString>
               <Cookies>
                  <Forward>whitelist</Forward>
                  <WhitelistedNames>
                     <Quantity>1</Quantity>
                     <Items>
                        <Name>example-cookie</Name>
                     </Items>
                  </WhitelistedNames>
               </Cookies>
            </ForwardedValues>
            <TrustedSigners>
               <Enabled>true</Enabled>
               <Quantity>2</Quantity>
               <Items>
                  <AwsAccountNumber>self</AwsAccountNumber>
                  <AwsAccountNumber>111122223333</AwsAccountNumber>
               </Items>
            </TrustedSigners>
            <ViewerProtocolPolicy>allow-all</ViewerProtocolPolicy>
            <MinTTL>86400</MinTTL>
            <SmoothStreaming>false</SmoothStreaming>
        </CacheBehavior>";

        let decoded: CacheBehavior = from_xml(xml).expect("decode fixture");
        let body = to_xml("CacheBehavior", &decoded).expect("render decoded behavior");
        let again: CacheBehavior = from_xml(&body).expect("decode rendered body");
        assert_eq!(decoded, again);
    }

    #[test]
    fn test_should_fail_on_truncated_document() {
        let xml = br"<CacheBehavior><TargetOriginId>example";
        let result: Result<CacheBehavior, XmlError> = from_xml(xml);
        assert!(result.is_err());
    }

    #[test]
    fn test_should_fail_on_empty_input() {
        let result: Result<CacheBehavior, XmlError> = from_xml(b"");
        assert!(matches!(result, Err(XmlError::MissingElement(_))));
    }
}

//! WSDL XML decoder.
//!
//! This module walks a WSDL 1.1 document once and fills in a [`Definition`].
//! Elements and attributes are matched on their local names, so any prefix
//! (`wsdl:`, `xsd:`, none) is accepted. Elements the model does not cover are
//! skipped, and elements the model expects but the document omits leave the
//! corresponding fields empty.

use crate::error::ParseError;
use crate::messages::{
    FaultOperation, InputOperation, Message, OutputOperation, Part, PortType, WsdlOperation,
};
use crate::types::{Definition, FormDefault, Schema, Types};
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesDecl, BytesRef, BytesStart, Event};

/// Parses a WSDL document from raw bytes.
///
/// # Arguments
/// * `input` - UTF-8 encoded WSDL document
///
/// # Returns
/// Decoded definition or parse error.
///
/// # Errors
/// Returns `ParseError` if the input is not well-formed XML, declares an
/// encoding other than UTF-8, or contains no root element. Missing WSDL
/// elements are not errors.
pub fn parse_wsdl(input: &[u8]) -> Result<Definition, ParseError> {
    let xml = std::str::from_utf8(input)?;
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Decl(ref decl) => check_encoding(decl)?,
            Event::Start(ref e) => {
                let root = local_name(e)?;
                attributes(e)?;
                log_root(&root);
                let definition = parse_definitions(&mut reader, &root)?;
                tracing::debug!(
                    "Decoded WSDL definition: {} messages, {} operations",
                    definition.messages.len(),
                    definition.port_type.operations.len()
                );
                return Ok(definition);
            }
            Event::Empty(ref e) => {
                attributes(e)?;
                log_root(&local_name(e)?);
                return Ok(Definition::default());
            }
            Event::Eof => return Err(ParseError::NoRootElement),
            _ => {}
        }
        buf.clear();
    }
}

/// Parses a WSDL document from a string.
///
/// # Errors
/// Returns `ParseError` under the same conditions as [`parse_wsdl`].
pub fn parse_wsdl_str(xml: &str) -> Result<Definition, ParseError> {
    parse_wsdl(xml.as_bytes())
}

impl std::str::FromStr for Definition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wsdl_str(s)
    }
}

fn log_root(root: &str) {
    if root != "definitions" {
        tracing::debug!("Root element is '{}', expected 'definitions'", root);
    }
}

/// Rejects documents whose declaration names a non UTF-8 encoding.
fn check_encoding(decl: &BytesDecl<'_>) -> Result<(), ParseError> {
    if let Some(encoding) = decl.encoding() {
        let encoding = encoding?;
        let label = std::str::from_utf8(&encoding)?;
        let supported = ["utf-8", "utf8", "us-ascii", "ascii"]
            .iter()
            .any(|known| label.eq_ignore_ascii_case(known));
        if !supported {
            return Err(ParseError::unsupported_encoding(label));
        }
    }
    Ok(())
}

/// Parses the children of the root `definitions` element.
fn parse_definitions(reader: &mut Reader<&[u8]>, root: &str) -> Result<Definition, ParseError> {
    let mut definition = Definition::new();
    let mut seen_documentation = false;
    let mut seen_port_type = false;
    let mut seen_types = false;

    for_each_child(reader, root, |reader, e, has_children| {
        match local_name(e)?.as_str() {
            "documentation" if !seen_documentation => {
                seen_documentation = true;
                if has_children {
                    definition.documentation = read_text(reader, "documentation")?;
                }
                Ok(true)
            }
            "message" => {
                let message = parse_message(reader, e, has_children)?;
                definition.add_message(message);
                Ok(true)
            }
            "portType" if !seen_port_type => {
                seen_port_type = true;
                definition.port_type = parse_port_type(reader, e, has_children)?;
                Ok(true)
            }
            "types" if !seen_types => {
                seen_types = true;
                if has_children {
                    definition.types = parse_types(reader)?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    })?;

    Ok(definition)
}

/// Parses a message definition.
fn parse_message(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_children: bool,
) -> Result<Message, ParseError> {
    let mut message = Message::default();

    for (key, value) in attributes(e)? {
        if key == "name" {
            message.name = value;
        }
    }

    if has_children {
        let mut part = None;
        for_each_child(reader, "message", |_, child, _| {
            if part.is_none() && local_name(child)? == "part" {
                part = Some(parse_part(child)?);
            }
            Ok(false)
        })?;
        message.part = part.unwrap_or_default();
    }

    Ok(message)
}

/// Parses a message part.
fn parse_part(e: &BytesStart<'_>) -> Result<Part, ParseError> {
    let mut part = Part::default();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "element" => part.element = value,
            "name" => part.name = value,
            _ => {}
        }
    }

    Ok(part)
}

/// Parses a port type and its operations.
fn parse_port_type(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_children: bool,
) -> Result<PortType, ParseError> {
    let mut port_type = PortType::default();

    for (key, value) in attributes(e)? {
        if key == "name" {
            port_type.name = value;
        }
    }

    if has_children {
        for_each_child(reader, "portType", |reader, child, child_has_children| {
            if local_name(child)? != "operation" {
                return Ok(false);
            }
            let operation = parse_operation(reader, child, child_has_children)?;
            port_type.add_operation(operation);
            Ok(true)
        })?;
    }

    Ok(port_type)
}

/// Parses an abstract operation.
fn parse_operation(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    has_children: bool,
) -> Result<WsdlOperation, ParseError> {
    let mut operation = WsdlOperation::default();

    for (key, value) in attributes(e)? {
        if key == "name" {
            operation.name = value;
        }
    }

    if !has_children {
        return Ok(operation);
    }

    let mut input = None;
    let mut output = None;
    let mut fault = None;

    for_each_child(reader, "operation", |_, child, _| {
        match local_name(child)?.as_str() {
            "input" if input.is_none() => {
                input = Some(InputOperation::new(message_attr(child)?));
            }
            "output" if output.is_none() => {
                output = Some(OutputOperation::new(message_attr(child)?));
            }
            "fault" if fault.is_none() => {
                let mut parsed = FaultOperation::default();
                for (key, value) in attributes(child)? {
                    match key.as_str() {
                        "message" => parsed.message = value,
                        "name" => parsed.name = value,
                        _ => {}
                    }
                }
                fault = Some(parsed);
            }
            _ => {}
        }
        Ok(false)
    })?;

    operation.input = input.unwrap_or_default();
    operation.output = output.unwrap_or_default();
    operation.fault = fault;

    Ok(operation)
}

/// Returns the `message` attribute of an input or output element.
fn message_attr(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let mut message = String::new();
    for (key, value) in attributes(e)? {
        if key == "message" {
            message = value;
        }
    }
    Ok(message)
}

/// Parses the types section. Only the first schema's attributes are kept.
fn parse_types(reader: &mut Reader<&[u8]>) -> Result<Types, ParseError> {
    let mut schema = None;

    for_each_child(reader, "types", |_, child, _| {
        if schema.is_none() && local_name(child)? == "schema" {
            schema = Some(parse_schema_attributes(child)?);
        }
        Ok(false)
    })?;

    Ok(Types {
        schema: schema.unwrap_or_default(),
    })
}

/// Parses the attributes of an embedded XML Schema element.
fn parse_schema_attributes(e: &BytesStart<'_>) -> Result<Schema, ParseError> {
    let mut schema = Schema::default();

    for (key, value) in attributes(e)? {
        match key.as_str() {
            "attributeFormDefault" => {
                schema.attribute_form_default = Some(FormDefault::parse(&value));
            }
            "elementFormDefault" => {
                schema.element_form_default = Some(FormDefault::parse(&value));
            }
            "targetNamespace" => schema.target_namespace = value,
            _ => {}
        }
    }

    Ok(schema)
}

/// Reads the direct children of the current element up to its end tag.
///
/// `on_child` receives each child start tag and whether it has content. It
/// returns `true` if it consumed the child through its end tag; otherwise the
/// child's content is skipped here. Attributes and entity references are
/// checked for every child, mapped or not.
fn for_each_child<F>(
    reader: &mut Reader<&[u8]>,
    element: &str,
    mut on_child: F,
) -> Result<(), ParseError>
where
    F: FnMut(&mut Reader<&[u8]>, &BytesStart<'_>, bool) -> Result<bool, ParseError>,
{
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                attributes(e)?;
                if !on_child(reader, e, true)? {
                    skip_element(reader, &local_name(e)?)?;
                }
            }
            Event::Empty(ref e) => {
                attributes(e)?;
                on_child(reader, e, false)?;
            }
            Event::GeneralRef(ref r) => check_reference(r)?,
            Event::End(_) => return Ok(()),
            Event::Eof => return Err(ParseError::unexpected_eof(element)),
            _ => {}
        }
        buf.clear();
    }
}

/// Reads the character data of the current element up to its end tag.
///
/// Text and CDATA of the element itself are concatenated without trimming;
/// nested elements are skipped.
fn read_text(reader: &mut Reader<&[u8]>, element: &str) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(ref t) => {
                let raw = std::str::from_utf8(t)?;
                text.push_str(&unescape(raw)?);
            }
            Event::CData(ref c) => text.push_str(std::str::from_utf8(c)?),
            Event::GeneralRef(ref r) => push_reference(&mut text, r)?,
            Event::Start(ref e) => skip_element(reader, &local_name(e)?)?,
            Event::End(_) => break,
            Event::Eof => return Err(ParseError::unexpected_eof(element)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Appends the text a character or predefined entity reference stands for.
fn push_reference(text: &mut String, r: &BytesRef<'_>) -> Result<(), ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        text.push(ch);
        return Ok(());
    }

    let name = std::str::from_utf8(r)?;
    let resolved =
        resolve_predefined_entity(name).ok_or_else(|| ParseError::unknown_entity(name))?;
    text.push_str(resolved);
    Ok(())
}

/// Rejects character and entity references that do not resolve.
fn check_reference(r: &BytesRef<'_>) -> Result<(), ParseError> {
    push_reference(&mut String::new(), r)
}

/// Skips to the end of the current element, still rejecting malformed
/// attributes and unknown entities inside it.
fn skip_element(reader: &mut Reader<&[u8]>, element: &str) -> Result<(), ParseError> {
    tracing::trace!("Skipping unmapped element '{}'", element);

    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                attributes(e)?;
                depth += 1;
            }
            Event::Empty(ref e) => {
                attributes(e)?;
            }
            Event::GeneralRef(ref r) => check_reference(r)?,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => return Err(ParseError::unexpected_eof(element)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Returns the local name of an element, without its prefix.
fn local_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let name = e.local_name();
    Ok(std::str::from_utf8(name.as_ref())?.to_string())
}

/// Collects the attributes of an element as unescaped `(local name, value)`
/// pairs.
fn attributes(e: &BytesStart<'_>) -> Result<Vec<(String, String)>, ParseError> {
    let mut attrs = Vec::new();

    for attr in e.attributes() {
        let attr = attr?;
        let key = attr.key.local_name();
        let key = std::str::from_utf8(key.as_ref())?;
        let raw = std::str::from_utf8(&attr.value)?;
        attrs.push((key.to_string(), unescape(raw)?.into_owned()));
    }

    Ok(attrs)
}

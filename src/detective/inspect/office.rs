//! Office document metadata from OOXML containers (docx, pptx, xlsx).
//!
//! The container is a zip; core document properties live in the
//! `docProps/core.xml` part. Author and title map from the Dublin Core
//! `creator` and `title` elements, matched by resolved namespace rather
//! than prefix. A container without the part yields empty properties.

use crate::error::{CasefileError, Result};
use crate::report::OfficeProperties;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Core-properties part name inside the container.
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// Namespace qualifying the author and title elements.
const DC_NAMESPACE: Namespace<'static> = Namespace(b"http://purl.org/dc/elements/1.1/");

#[derive(Clone, Copy)]
enum CoreField {
    Author,
    Title,
}

/// Extract author and title from a container's core-properties part.
///
/// A missing part is empty properties, not a failure; an unopenable
/// container or malformed XML is an error for the dispatcher to absorb.
pub fn core_properties(path: &Path) -> Result<OfficeProperties> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| CasefileError::Inspection(format!("container open failed: {}", e)))?;

    let part = match archive.by_name(CORE_PROPERTIES_PART) {
        Ok(part) => part,
        Err(zip::result::ZipError::FileNotFound) => {
            debug!(path = %path.display(), "no core-properties part");
            return Ok(OfficeProperties::default());
        }
        Err(e) => {
            return Err(CasefileError::Inspection(format!(
                "core-properties part unreadable: {}",
                e
            )));
        }
    };
    parse_core_xml(part)
}

fn parse_core_xml<R: Read>(part: R) -> Result<OfficeProperties> {
    let mut xml_reader = NsReader::from_reader(BufReader::new(part));
    xml_reader.config_mut().trim_text(true);

    let mut properties = OfficeProperties::default();
    let mut current: Option<CoreField> = None;
    let mut buf = Vec::new();
    loop {
        match xml_reader.read_resolved_event_into(&mut buf) {
            Ok((ResolveResult::Bound(ns), Event::Start(ref e))) if ns == DC_NAMESPACE => {
                current = match e.name().local_name().as_ref() {
                    b"creator" => Some(CoreField::Author),
                    b"title" => Some(CoreField::Title),
                    _ => None,
                };
            }
            Ok((_, Event::Start(_))) => current = None,
            Ok((_, Event::Text(ref e))) => {
                if let Some(field) = current {
                    let text = e
                        .unescape()
                        .map_err(|err| {
                            CasefileError::Inspection(format!("core.xml text error: {}", err))
                        })?
                        .trim()
                        .to_string();
                    if !text.is_empty() {
                        match field {
                            CoreField::Author => {
                                properties.author.get_or_insert(text);
                            }
                            CoreField::Title => {
                                properties.title.get_or_insert(text);
                            }
                        }
                    }
                }
            }
            Ok((_, Event::End(_))) => current = None,
            Ok((_, Event::Eof)) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(CasefileError::Inspection(format!(
                    "core.xml parse error: {}",
                    e
                )));
            }
        }
        buf.clear();
    }
    Ok(properties)
}

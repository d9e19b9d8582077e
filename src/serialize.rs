//! The serialize module writes the ordered entries to sitemap.xml and the optional
//! sitemap_pages.json dump.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::PageEntry;
use crate::constants::{SITEMAP_NAMESPACE, SITEMAP_SCHEMA_LOCATION, XSI_NAMESPACE};
use crate::error::SitemapError;

const INDENT_SIZE: usize = 2;

/// Writes entries as a sitemap document, in the given order.
///
/// Each `url` holds `loc`, `lastmod`, `changefreq` and `priority`, in that order.
/// The document is indented by two spaces per level and starts with a UTF-8 XML
/// declaration. An existing file is overwritten.
///
/// # Arguments
///
/// * `entries` - Entries to write, already de-duplicated and sorted
/// * `path` - Destination file
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_sitemap(entries: &[PageEntry], path: &Path) -> Result<(), SitemapError> {
    let file = File::create(path)?;
    let mut writer = Writer::new_with_indent(BufWriter::new(file), b' ', INDENT_SIZE);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
    urlset.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    urlset.push_attribute(("xsi:schemaLocation", SITEMAP_SCHEMA_LOCATION));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        let priority = entry.priority.to_string();
        for (tag, text) in [
            ("loc", entry.location.as_str()),
            ("lastmod", entry.last_modified.as_str()),
            ("changefreq", entry.change_frequency.as_str()),
            ("priority", priority.as_str()),
        ] {
            write_leaf(&mut writer, tag, text)?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut output = writer.into_inner();
    output.write_all(b"\n")?;
    output.flush()?;

    info!("Wrote {} URLs to {}", entries.len(), path.display());
    Ok(())
}

fn write_leaf<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Dumps entries, titles included, as a pretty-printed JSON array for inspection.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the entries cannot be encoded.
pub fn write_pages_json(entries: &[PageEntry], path: &Path) -> Result<(), SitemapError> {
    let mut output = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut output, entries)?;
    output.write_all(b"\n")?;
    output.flush()?;

    info!("Wrote page details to {}", path.display());
    Ok(())
}

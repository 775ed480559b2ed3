//! RSS 2.0 serialization

use crate::error::FeedResult;
use crate::feed::{Feed, FeedItem};
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const INDENT: usize = 4;

impl Feed {
    /// Serializes the feed as a complete RSS 2.0 document
    ///
    /// Text fields are XML-escaped. Item links and GUIDs are written
    /// verbatim, exactly as scraped.
    pub fn to_rss_string(&self) -> FeedResult<String> {
        let mut buf = Vec::new();
        self.write_rss(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Serializes the feed into `sink`
    pub fn write_rss<W: Write>(&self, sink: W) -> FeedResult<()> {
        let mut writer = Writer::new_with_indent(sink, b' ', INDENT);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        writer.write_event(Event::Start(
            BytesStart::new("rss").with_attributes([("version", "2.0")]),
        ))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        let channel = &self.channel;
        write_text_element(&mut writer, "title", &channel.title)?;
        write_text_element(&mut writer, "link", &channel.link)?;
        write_text_element(&mut writer, "description", &channel.description)?;
        write_text_element(&mut writer, "language", &channel.language)?;

        for item in &self.items {
            write_item(&mut writer, item)?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;
        writer.get_mut().write_all(b"\n")?;

        Ok(())
    }
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &FeedItem) -> FeedResult<()> {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(writer, "title", &item.title)?;
    write_raw_element(writer, "link", &item.link)?;
    write_raw_element(writer, "guid", &item.guid)?;
    if let Some(published) = &item.published {
        write_raw_element(writer, "pubDate", &published.to_rfc822())?;
    }

    writer.write_event(Event::End(BytesEnd::new("item")))?;
    Ok(())
}

/// `<name>escaped text</name>`
fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> FeedResult<()> {
    write_raw_element(writer, name, &escape(text))
}

/// `<name>content</name>` with `content` emitted as-is
///
/// Empty content still emits a text event, keeping the closing tag inline.
fn write_raw_element<W: Write>(writer: &mut Writer<W>, name: &str, content: &str) -> FeedResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

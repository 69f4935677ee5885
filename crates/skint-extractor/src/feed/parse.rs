//! RSS 2.0 parsing on top of the `quick-xml` event reader.

use quick_xml::events::{BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Reader;

use crate::error::FeedFormatError;
use crate::types::{Feed, FeedItem};

/// Parse an RSS document and return only its items.
///
/// # Errors
///
/// See [`parse_feed`].
pub fn parse_items(xml: &str) -> Result<Vec<FeedItem>, FeedFormatError> {
    parse_feed(xml).map(|feed| feed.items)
}

/// Parse an RSS document into channel metadata and items.
///
/// A channel with a single `<item>` yields a one-element `items` vector, the
/// same shape as a channel with many. Missing item children become empty
/// strings. Entity references are decoded; CDATA is taken verbatim.
///
/// # Errors
///
/// - [`FeedFormatError::Xml`] if the markup is not well-formed XML.
/// - [`FeedFormatError::UnclosedElement`] if the document ends before every
///   open element is closed.
/// - [`FeedFormatError::MissingElement`] if the root is not `<rss>` or it
///   has no `<channel>`.
pub fn parse_feed(xml: &str) -> Result<Feed, FeedFormatError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut feed = Feed::default();
    let mut path: Vec<String> = Vec::new();
    let mut saw_rss = false;
    let mut saw_channel = false;
    let mut item: Option<FeedItem> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = element_name(e.name());
                match path.len() {
                    0 if name == "rss" => saw_rss = true,
                    1 if saw_rss && name == "channel" => saw_channel = true,
                    2 if in_channel(&path) && name == "item" => item = Some(FeedItem::default()),
                    _ => {}
                }
                path.push(name);
                if is_field_path(&path) {
                    text.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                let name = element_name(e.name());
                match path.len() {
                    0 if name == "rss" => saw_rss = true,
                    1 if saw_rss && name == "channel" => saw_channel = true,
                    2 if in_channel(&path) && name == "item" => {
                        feed.items.push(FeedItem::default());
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if path.len() >= 3 && in_channel(&path) {
                    text.push_str(&decode_text(&e));
                }
            }
            Ok(Event::CData(e)) => {
                if path.len() >= 3 && in_channel(&path) {
                    text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::End(_)) => {
                let at_field = is_field_path(&path);
                let Some(name) = path.pop() else {
                    continue;
                };
                if !in_channel(&path) {
                    continue;
                }
                if path.len() == 2 && name == "item" {
                    if let Some(done) = item.take() {
                        feed.items.push(done);
                    }
                } else if at_field {
                    let value = text.trim().to_string();
                    text.clear();
                    if path.len() == 3 {
                        if let Some(current) = item.as_mut() {
                            assign_item_field(current, &name, value);
                        }
                    } else {
                        assign_channel_field(&mut feed, &name, value);
                    }
                }
            }
            Ok(Event::Eof) => {
                if let Some(open) = path.pop() {
                    return Err(FeedFormatError::UnclosedElement(open));
                }
                break;
            }
            Err(e) => return Err(FeedFormatError::Xml(e)),
            _ => {}
        }
    }

    if !saw_rss {
        return Err(FeedFormatError::MissingElement("rss"));
    }
    if !saw_channel {
        return Err(FeedFormatError::MissingElement("channel"));
    }

    tracing::debug!(items = feed.items.len(), "parsed RSS feed");
    Ok(feed)
}

fn element_name(name: QName<'_>) -> String {
    String::from_utf8_lossy(name.as_ref()).into_owned()
}

/// `true` when `path` is `rss/channel/...`.
fn in_channel(path: &[String]) -> bool {
    path.len() >= 2 && path[0] == "rss" && path[1] == "channel"
}

/// `true` when `path` ends at a channel child (other than `item`) or an
/// item child, the two places text values are collected.
fn is_field_path(path: &[String]) -> bool {
    if !in_channel(path) {
        return false;
    }
    match path.len() {
        3 => path[2] != "item",
        4 => path[2] == "item",
        _ => false,
    }
}

/// Unescape a text node, keeping the raw text when it holds an entity the
/// XML spec does not define (`&nbsp;` and friends are common in feeds).
fn decode_text(e: &BytesText<'_>) -> String {
    match e.unescape() {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(e).into_owned(),
    }
}

fn assign_item_field(item: &mut FeedItem, name: &str, value: String) {
    match name {
        "title" => item.title = value,
        "description" => item.description = value,
        "link" => item.link = value,
        "content:encoded" => item.full_content = value,
        _ => {}
    }
}

fn assign_channel_field(feed: &mut Feed, name: &str, value: String) {
    let value = Some(value).filter(|v| !v.is_empty());
    match name {
        "title" => feed.title = value,
        "link" => feed.link = value,
        "description" => feed.description = value,
        "lastBuildDate" => feed.last_build_date = value,
        _ => {}
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

//! Flattening of EditorJS documents (CMS page content, product and category
//! descriptions) into plain text blocks. Inline markup is stripped; the
//! templates escape whatever text remains.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
}

/// One renderable block. `level` is only meaningful for headings, `items`
/// and `ordered` only for lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub kind: BlockKind,
    pub text: String,
    pub level: u8,
    pub ordered: bool,
    pub items: Vec<String>,
}

impl TextBlock {
    fn paragraph(text: String) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text,
            level: 0,
            ordered: false,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    blocks: Vec<RawBlock>,
}

#[derive(Debug, Deserialize)]
struct RawBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

/// Parses EditorJS JSON into text blocks. Unknown block types and empty
/// blocks are skipped. Content that is not EditorJS JSON is treated as a
/// single paragraph of markup.
#[must_use]
pub fn parse_blocks(content: &str) -> Vec<TextBlock> {
    let content = content.trim();
    if content.is_empty() {
        return Vec::new();
    }

    let document: Document = match serde_json::from_str(content) {
        Ok(document) => document,
        Err(err) => {
            tracing::debug!(error = %err, "content is not EditorJS JSON; rendering as text");
            let text = strip_markup(content);
            return if text.is_empty() {
                Vec::new()
            } else {
                vec![TextBlock::paragraph(text)]
            };
        }
    };

    document.blocks.iter().filter_map(convert_block).collect()
}

/// First paragraph of a document, for meta descriptions.
#[must_use]
pub fn summary(content: &str) -> Option<String> {
    parse_blocks(content)
        .into_iter()
        .find(|block| block.kind == BlockKind::Paragraph)
        .map(|block| block.text)
}

fn convert_block(block: &RawBlock) -> Option<TextBlock> {
    let text = || {
        block
            .data
            .get("text")
            .and_then(Value::as_str)
            .map(strip_markup)
            .filter(|text| !text.is_empty())
    };

    match block.kind.as_str() {
        "paragraph" | "quote" => text().map(TextBlock::paragraph),
        "header" => {
            let level = block
                .data
                .get("level")
                .and_then(Value::as_u64)
                .and_then(|level| u8::try_from(level).ok())
                .map_or(2, |level| level.clamp(1, 6));
            text().map(|text| TextBlock {
                kind: BlockKind::Heading,
                level,
                ..TextBlock::paragraph(text)
            })
        }
        "list" => {
            let items: Vec<String> = block
                .data
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(list_item_text).collect())
                .unwrap_or_default();
            if items.is_empty() {
                return None;
            }
            let ordered = block.data.get("style").and_then(Value::as_str) == Some("ordered");
            Some(TextBlock {
                kind: BlockKind::List,
                text: String::new(),
                level: 0,
                ordered,
                items,
            })
        }
        _ => None,
    }
}

/// List items are plain strings in older EditorJS output and
/// `{ "content": .. }` objects in newer nested lists.
fn list_item_text(item: &Value) -> Option<String> {
    let raw = match item {
        Value::String(text) => text.as_str(),
        Value::Object(map) => map.get("content").and_then(Value::as_str)?,
        _ => return None,
    };
    let text = strip_markup(raw);
    (!text.is_empty()).then_some(text)
}

/// Removes tags, decodes the handful of entities EditorJS emits and
/// collapses whitespace.
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let without_tags = TAG.replace_all(input, " ");
    let decoded = without_tags
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "time": 1700000000000,
        "blocks": [
            {"id": "a", "type": "header", "data": {"text": "Shipping &amp; Returns", "level": 2}},
            {"id": "b", "type": "paragraph", "data": {"text": "Orders ship in <b>2&nbsp;days</b>.<br>"}},
            {"id": "c", "type": "list", "data": {"style": "ordered", "items": ["Pack it", {"content": "<i>Label</i> it", "items": []}]}},
            {"id": "d", "type": "image", "data": {"file": {"url": "x.png"}}},
            {"id": "e", "type": "paragraph", "data": {"text": "<br>"}}
        ],
        "version": "2.28.0"
    }"#;

    #[test]
    fn converts_editorjs_blocks() {
        let blocks = parse_blocks(DOC);

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Heading);
        assert_eq!(blocks[0].text, "Shipping & Returns");
        assert_eq!(blocks[0].level, 2);
        assert_eq!(blocks[1].text, "Orders ship in 2 days .");
        assert_eq!(blocks[2].kind, BlockKind::List);
        assert!(blocks[2].ordered);
        assert_eq!(blocks[2].items, ["Pack it", "Label it"]);
    }

    #[test]
    fn summary_is_first_paragraph() {
        assert_eq!(summary(DOC).as_deref(), Some("Orders ship in 2 days ."));
        assert_eq!(summary(""), None);
    }

    #[test]
    fn non_json_content_becomes_one_paragraph() {
        let blocks = parse_blocks("<p>Plain <em>text</em></p>");
        assert_eq!(blocks, vec![TextBlock::paragraph("Plain text".to_owned())]);
    }

    #[test]
    fn strip_markup_keeps_literal_angle_brackets_decoded() {
        assert_eq!(strip_markup("a &lt;b&gt; c"), "a <b> c");
    }
}

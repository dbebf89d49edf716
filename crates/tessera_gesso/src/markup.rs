//! Markup fragment parser.
//!
//! Parses the body of a raw markup node into a small tree: elements with
//! attributes, text and comments. Void elements and `/>` close themselves,
//! `<script>`/`<style>` bodies are kept verbatim, and entities are decoded.
//! Malformed input is recovered from and reported as [`GessoError`]s.

use std::borrow::Cow;

use tessera_carton::{is_raw_text_tag, is_void_tag, CompactString};

use crate::error::GessoError;

/// Character codes for fast comparison
mod char_codes {
    pub const TAB: u8 = 0x09;
    pub const NEWLINE: u8 = 0x0A;
    pub const FORM_FEED: u8 = 0x0C;
    pub const CARRIAGE_RETURN: u8 = 0x0D;
    pub const SPACE: u8 = 0x20;
    pub const EXCLAMATION_MARK: u8 = 0x21;
    pub const DOUBLE_QUOTE: u8 = 0x22;
    pub const SINGLE_QUOTE: u8 = 0x27;
    pub const SLASH: u8 = 0x2F;
    pub const LT: u8 = 0x3C;
    pub const EQ: u8 = 0x3D;
    pub const GT: u8 = 0x3E;
}

use char_codes::*;

/// A parsed markup node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    Element {
        tag: CompactString,
        attrs: Vec<(CompactString, CompactString)>,
        children: Vec<MarkupNode>,
    },
    Text(CompactString),
    Comment(CompactString),
}

/// Result of parsing a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFragment {
    /// Top-level nodes in document order
    pub nodes: Vec<MarkupNode>,
    /// Recovered problems
    pub errors: Vec<GessoError>,
}

/// Parse a markup fragment.
pub fn parse_fragment(input: &str) -> ParsedFragment {
    MarkupParser::new(input).parse()
}

#[inline]
fn is_whitespace(c: u8) -> bool {
    matches!(c, SPACE | TAB | NEWLINE | FORM_FEED | CARRIAGE_RETURN)
}

#[inline]
fn is_tag_start_char(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Open element on the stack.
struct OpenElement {
    tag: CompactString,
    attrs: Vec<(CompactString, CompactString)>,
    children: Vec<MarkupNode>,
}

struct MarkupParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    index: usize,
    stack: Vec<OpenElement>,
    nodes: Vec<MarkupNode>,
    errors: Vec<GessoError>,
}

impl<'a> MarkupParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            index: 0,
            stack: Vec::new(),
            nodes: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn parse(mut self) -> ParsedFragment {
        while self.index < self.bytes.len() {
            if self.bytes[self.index] == LT && self.starts_markup() {
                self.parse_markup();
            } else {
                self.parse_text();
            }
        }

        while let Some(open) = self.stack.pop() {
            self.errors.push(GessoError::UnclosedElement(open.tag.clone()));
            self.close(open);
        }

        ParsedFragment {
            nodes: self.nodes,
            errors: self.errors,
        }
    }

    /// Whether the `<` at the cursor opens a tag, end tag or comment.
    fn starts_markup(&self) -> bool {
        match self.bytes.get(self.index + 1) {
            Some(&EXCLAMATION_MARK) => true,
            Some(&SLASH) => self
                .bytes
                .get(self.index + 2)
                .is_some_and(|&c| is_tag_start_char(c)),
            Some(&c) => is_tag_start_char(c),
            None => false,
        }
    }

    fn parse_text(&mut self) {
        let start = self.index;
        self.index += 1;
        while self.index < self.bytes.len()
            && !(self.bytes[self.index] == LT && self.starts_markup())
        {
            self.index += 1;
        }
        let input = self.input;
        let text = decode(&input[start..self.index]);
        self.push_text(&text);
    }

    fn parse_markup(&mut self) {
        match self.bytes[self.index + 1] {
            EXCLAMATION_MARK => self.parse_bang(),
            SLASH => self.parse_end_tag(),
            _ => self.parse_start_tag(),
        }
    }

    /// `<!-- ... -->`, or a declaration such as `<!doctype>` which is dropped.
    fn parse_bang(&mut self) {
        let start = self.index;
        if self.input[start..].starts_with("<!--") {
            let body = start + 4;
            match self.input[body..].find("-->") {
                Some(end) => {
                    let text = &self.input[body..body + end];
                    self.push(MarkupNode::Comment(text.into()));
                    self.index = body + end + 3;
                }
                None => {
                    self.errors.push(GessoError::UnterminatedComment(start));
                    let text = &self.input[body..];
                    self.push(MarkupNode::Comment(text.into()));
                    self.index = self.bytes.len();
                }
            }
            return;
        }

        match self.input[start..].find('>') {
            Some(end) => self.index = start + end + 1,
            None => {
                self.errors.push(GessoError::UnterminatedTag(start));
                self.index = self.bytes.len();
            }
        }
    }

    fn parse_end_tag(&mut self) {
        let start = self.index;
        self.index += 2;
        let tag = self.read_name();
        match self.input[self.index..].find('>') {
            Some(end) => self.index += end + 1,
            None => {
                self.errors.push(GessoError::UnterminatedTag(start));
                self.index = self.bytes.len();
                return;
            }
        }

        let Some(depth) = self.stack.iter().rposition(|open| open.tag == tag) else {
            self.errors.push(GessoError::UnexpectedEndTag { tag, offset: start });
            return;
        };
        while self.stack.len() > depth {
            let Some(open) = self.stack.pop() else {
                break;
            };
            if self.stack.len() > depth {
                self.errors.push(GessoError::UnclosedElement(open.tag.clone()));
            }
            self.close(open);
        }
    }

    fn parse_start_tag(&mut self) {
        let start = self.index;
        self.index += 1;
        let tag = self.read_name();
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.bytes.get(self.index) {
                None => {
                    self.errors.push(GessoError::UnterminatedTag(start));
                    return;
                }
                Some(&GT) => {
                    self.index += 1;
                    break;
                }
                Some(&SLASH) => {
                    self.index += 1;
                    if self.bytes.get(self.index) == Some(&GT) {
                        self.index += 1;
                        self_closing = true;
                        break;
                    }
                }
                Some(_) => {
                    if let Some(attr) = self.read_attribute() {
                        if !attrs.iter().any(|(name, _)| *name == attr.0) {
                            attrs.push(attr);
                        }
                    }
                }
            }
        }

        if self_closing || is_void_tag(&tag) {
            self.push(MarkupNode::Element {
                tag,
                attrs,
                children: Vec::new(),
            });
            return;
        }

        if is_raw_text_tag(&tag) {
            let body = self.read_raw_text(&tag);
            let children = if body.is_empty() {
                Vec::new()
            } else if matches!(tag.as_str(), "script" | "style") {
                vec![MarkupNode::Text(body.into())]
            } else {
                vec![MarkupNode::Text(decode(body).as_ref().into())]
            };
            self.push(MarkupNode::Element {
                tag,
                attrs,
                children,
            });
            return;
        }

        self.stack.push(OpenElement {
            tag,
            attrs,
            children: Vec::new(),
        });
    }

    /// Read `name`, `name=value`, `name="value"` or `name='value'`.
    fn read_attribute(&mut self) -> Option<(CompactString, CompactString)> {
        let start = self.index;
        while self.index < self.bytes.len() {
            let c = self.bytes[self.index];
            if is_whitespace(c) || c == EQ || c == GT || (c == SLASH && self.index > start) {
                break;
            }
            self.index += 1;
        }
        if self.index == start {
            // Stray `=`
            self.index += 1;
            return None;
        }
        let name = self.input[start..self.index].to_ascii_lowercase();

        self.skip_whitespace();
        if self.bytes.get(self.index) != Some(&EQ) {
            return Some((name.into(), CompactString::default()));
        }
        self.index += 1;
        self.skip_whitespace();

        let value = match self.bytes.get(self.index) {
            Some(&quote @ (DOUBLE_QUOTE | SINGLE_QUOTE)) => {
                let body = self.index + 1;
                let end = self.bytes[body..]
                    .iter()
                    .position(|&c| c == quote)
                    .map_or(self.bytes.len(), |end| body + end);
                self.index = (end + 1).min(self.bytes.len());
                &self.input[body..end]
            }
            _ => {
                let body = self.index;
                while self.index < self.bytes.len()
                    && !is_whitespace(self.bytes[self.index])
                    && self.bytes[self.index] != GT
                {
                    self.index += 1;
                }
                &self.input[body..self.index]
            }
        };

        Some((name.into(), decode(value).as_ref().into()))
    }

    /// Consume up to and including `</tag>`, returning the body.
    fn read_raw_text(&mut self, tag: &str) -> &'a str {
        let input = self.input;
        let body = self.index;
        let rest = &input[body..];
        let closing = format!("</{tag}");
        let end = rest
            .to_ascii_lowercase()
            .find(&closing)
            .unwrap_or(rest.len());
        let text = &input[body..body + end];

        self.index = body + end;
        if end < rest.len() {
            match input[self.index..].find('>') {
                Some(close) => self.index += close + 1,
                None => self.index = self.bytes.len(),
            }
        } else {
            self.errors.push(GessoError::UnclosedElement(tag.into()));
        }
        text
    }

    fn read_name(&mut self) -> CompactString {
        let start = self.index;
        while self.index < self.bytes.len() {
            let c = self.bytes[self.index];
            if is_whitespace(c) || c == SLASH || c == GT {
                break;
            }
            self.index += 1;
        }
        self.input[start..self.index].to_ascii_lowercase().into()
    }

    fn skip_whitespace(&mut self) {
        while self.index < self.bytes.len() && is_whitespace(self.bytes[self.index]) {
            self.index += 1;
        }
    }

    fn push_text(&mut self, text: &str) {
        let children = match self.stack.last_mut() {
            Some(open) => &mut open.children,
            None => &mut self.nodes,
        };
        // Adjacent text merges, as it does in a parsed document
        if let Some(MarkupNode::Text(last)) = children.last_mut() {
            last.push_str(text);
        } else {
            children.push(MarkupNode::Text(text.into()));
        }
    }

    fn push(&mut self, node: MarkupNode) {
        match self.stack.last_mut() {
            Some(open) => open.children.push(node),
            None => self.nodes.push(node),
        }
    }

    fn close(&mut self, open: OpenElement) {
        self.push(MarkupNode::Element {
            tag: open.tag,
            attrs: open.attrs,
            children: open.children,
        });
    }
}

fn decode(text: &str) -> Cow<'_, str> {
    htmlize::unescape(text)
}

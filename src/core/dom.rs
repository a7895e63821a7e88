// src/core/dom.rs
//
// Tolerant HTML tree for structural selection. Not a conforming HTML5
// parser; it copes with what real wiki pages throw at it:
// - unclosed and stray end tags
// - void elements and `/>` self-closing
// - implicit closing of p / li / dt / dd / tr / td / th / option
// - raw-text script and style bodies
//
// Nodes live in an arena in document (pre-)order, so walking the arena
// front to back is a document-order traversal.

use std::str::FromStr;

use super::sanitize::{decode_entities, normalize_ws};
use crate::error::SelectorError;

pub type NodeId = usize;

const ROOT: NodeId = 0;

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_TEXT: &[&str] = &["script", "style"];

const CLOSES_P: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "dl", "fieldset", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "main", "nav", "ol", "p", "pre", "section",
    "table", "ul",
];

#[derive(Debug, Clone)]
enum NodeKind {
    Root,
    Element { name: String, attrs: Vec<(String, String)> },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

struct Tag {
    name: String,
    attrs: Vec<(String, String)>,
    self_closing: bool,
    end: usize, // one past '>'
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let mut doc = Document {
            nodes: vec![Node { kind: NodeKind::Root, parent: None, children: Vec::new() }],
        };
        let lc = html.to_ascii_lowercase(); // same byte offsets as `html`
        let b = html.as_bytes();
        let n = b.len();
        let mut stack: Vec<NodeId> = vec![ROOT];
        let mut text_start = 0usize;
        let mut i = 0usize;

        while i < n {
            if b[i] != b'<' {
                i += 1;
                continue;
            }
            match b.get(i + 1).copied() {
                Some(b'!') | Some(b'?') => {
                    doc.push_text(&stack, &html[text_start..i]);
                    i = if lc[i..].starts_with("<!--") {
                        lc[i + 4..].find("-->").map_or(n, |p| i + 4 + p + 3)
                    } else {
                        lc[i..].find('>').map_or(n, |p| i + p + 1)
                    };
                    text_start = i;
                }
                Some(b'/') => {
                    let name_end = scan_name(b, i + 2);
                    if name_end == i + 2 {
                        i += 1; // "</ " or "</>": literal text
                        continue;
                    }
                    doc.push_text(&stack, &html[text_start..i]);
                    let name = &lc[i + 2..name_end];
                    doc.close(&mut stack, name);
                    i = lc[name_end..].find('>').map_or(n, |p| name_end + p + 1);
                    text_start = i;
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    let Some(tag) = parse_tag(html, &lc, i) else {
                        i += 1;
                        continue;
                    };
                    doc.push_text(&stack, &html[text_start..i]);
                    let raw = RAW_TEXT.contains(&tag.name.as_str()) && !tag.self_closing;
                    let name = tag.name.clone();
                    let id = doc.open(&mut stack, tag.name, tag.attrs, tag.self_closing);
                    i = tag.end;
                    if raw {
                        let closer = join!("</", &name);
                        let body_end = lc[i..].find(&closer).map_or(n, |p| i + p);
                        if body_end > i {
                            doc.push_child(id, NodeKind::Text(s!(&html[i..body_end])));
                        }
                        stack.pop();
                        i = lc[body_end..].find('>').map_or(n, |p| body_end + p + 1);
                    }
                    text_start = i;
                }
                _ => i += 1, // stray '<' stays in the text
            }
        }
        doc.push_text(&stack, &html[text_start.min(n)..]);
        doc
    }

    fn push_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node { kind, parent: Some(parent), children: Vec::new() });
        self.nodes[parent].children.push(id);
        id
    }

    fn push_text(&mut self, stack: &[NodeId], raw: &str) {
        if raw.is_empty() {
            return;
        }
        let parent = stack.last().copied().unwrap_or(ROOT);
        self.push_child(parent, NodeKind::Text(decode_entities(raw)));
    }

    fn open(&mut self, stack: &mut Vec<NodeId>, name: String, attrs: Vec<(String, String)>, self_closing: bool) -> NodeId {
        match name.as_str() {
            "li" => self.close_implied(stack, &["li"], &["ul", "ol"]),
            "dt" | "dd" => self.close_implied(stack, &["dt", "dd"], &["dl"]),
            "tr" => self.close_implied(stack, &["tr"], &["table", "thead", "tbody", "tfoot"]),
            "td" | "th" => self.close_implied(stack, &["td", "th"], &["tr", "table"]),
            "option" => self.close_implied(stack, &["option"], &["select"]),
            _ => {}
        }
        if CLOSES_P.contains(&name.as_str()) {
            self.close_implied(stack, &["p"], &["button", "table", "td", "th", "li", "dd", "dt"]);
        }

        let is_void = VOID.contains(&name.as_str());
        let parent = stack.last().copied().unwrap_or(ROOT);
        let id = self.push_child(parent, NodeKind::Element { name, attrs });
        if !is_void && !self_closing {
            stack.push(id);
        }
        id
    }

    /// Pop back past the nearest open `targets` element, unless a `boundary`
    /// element is open above it.
    fn close_implied(&self, stack: &mut Vec<NodeId>, targets: &[&str], boundaries: &[&str]) {
        for pos in (1..stack.len()).rev() {
            let Some(name) = self.name(stack[pos]) else { continue };
            if targets.contains(&name) {
                stack.truncate(pos);
                return;
            }
            if boundaries.contains(&name) {
                return;
            }
        }
    }

    fn close(&self, stack: &mut Vec<NodeId>, name: &str) {
        // stray closers are ignored
        if let Some(pos) = stack.iter().rposition(|&id| self.name(id) == Some(name)) {
            if pos > 0 {
                stack.truncate(pos);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].children.is_empty()
    }

    /// Lowercased tag name, `None` for text and the root.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn attr(&self, id: NodeId, key: &str) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent.filter(|&p| p != ROOT)
    }

    /// Concatenated descendant text, script/style bodies excluded.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = s!();
        let mut todo = vec![id];
        while let Some(cur) = todo.pop() {
            match &self.nodes[cur].kind {
                NodeKind::Text(t) => out.push_str(t),
                NodeKind::Element { name, .. } if RAW_TEXT.contains(&name.as_str()) => {}
                _ => todo.extend(self.nodes[cur].children.iter().rev()),
            }
        }
        out
    }

    /// Elements matching `sel`, in document order.
    pub fn select(&self, sel: &Selector) -> Vec<NodeId> {
        (1..self.nodes.len())
            .filter(|&id| self.name(id).is_some())
            .filter(|&id| sel.groups.iter().any(|g| self.matches_complex(id, g)))
            .collect()
    }

    /// `text` of every match, whitespace-collapsed, blanks dropped.
    pub fn select_text(&self, sel: &Selector) -> Vec<String> {
        self.select(sel)
            .into_iter()
            .map(|id| normalize_ws(&self.text(id)))
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn matches_complex(&self, id: NodeId, complex: &Complex) -> bool {
        let last = complex.parts.len() - 1;
        self.matches_compound(id, &complex.parts[last].1) && self.match_left(id, &complex.parts, last)
    }

    // parts[idx] already matched at `id`; check everything to its left.
    fn match_left(&self, id: NodeId, parts: &[(Combinator, Compound)], idx: usize) -> bool {
        if idx == 0 {
            return true;
        }
        let target = &parts[idx - 1].1;
        match parts[idx].0 {
            Combinator::Child => self
                .parent_element(id)
                .is_some_and(|p| self.matches_compound(p, target) && self.match_left(p, parts, idx - 1)),
            Combinator::Descendant => {
                let mut cur = self.parent_element(id);
                while let Some(a) = cur {
                    if self.matches_compound(a, target) && self.match_left(a, parts, idx - 1) {
                        return true;
                    }
                    cur = self.parent_element(a);
                }
                false
            }
        }
    }

    fn matches_compound(&self, id: NodeId, c: &Compound) -> bool {
        let Some(name) = self.name(id) else { return false };
        if c.tag.as_deref().is_some_and(|t| t != name) {
            return false;
        }
        if let Some(want) = &c.id {
            if self.attr(id, "id") != Some(want.as_str()) {
                return false;
            }
        }
        if !c.classes.is_empty() {
            let have = self.attr(id, "class").unwrap_or("");
            if !c.classes.iter().all(|cls| have.split_whitespace().any(|h| h == cls)) {
                return false;
            }
        }
        true
    }
}

fn scan_name(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && (b[i].is_ascii_alphanumeric() || b[i] == b'-' || b[i] == b':' || b[i] == b'_') {
        i += 1;
    }
    i
}

/// Parse an opening tag at `start` (pointing at '<'). `None` if the tag
/// never closes.
fn parse_tag(html: &str, lc: &str, start: usize) -> Option<Tag> {
    let b = html.as_bytes();
    let n = b.len();
    let name_end = scan_name(b, start + 1);
    let name = s!(&lc[start + 1..name_end]);
    let mut attrs = Vec::new();
    let mut self_closing = false;
    let mut i = name_end;

    loop {
        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        match *b.get(i)? {
            b'>' => {
                return Some(Tag { name, attrs, self_closing, end: i + 1 });
            }
            b'/' => {
                self_closing = true;
                i += 1;
                continue;
            }
            _ => {}
        }
        self_closing = false;

        let key_start = i;
        while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        if i == key_start {
            i += 1; // lone '=' or similar junk
            continue;
        }
        let key = s!(&lc[key_start..i]);

        while i < n && b[i].is_ascii_whitespace() {
            i += 1;
        }
        let mut value = s!();
        if b.get(i) == Some(&b'=') {
            i += 1;
            while i < n && b[i].is_ascii_whitespace() {
                i += 1;
            }
            match *b.get(i)? {
                q @ (b'"' | b'\'') => {
                    let close = html[i + 1..].find(q as char)? + i + 1;
                    value = decode_entities(&html[i + 1..close]);
                    i = close + 1;
                }
                _ => {
                    let v_start = i;
                    while i < n && !b[i].is_ascii_whitespace() && b[i] != b'>' {
                        i += 1;
                    }
                    value = decode_entities(&html[v_start..i]);
                }
            }
        }
        attrs.push((key, value));
    }
}

/* ---------------- Selectors ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>, // None = any
    id: Option<String>,
    classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Complex {
    parts: Vec<(Combinator, Compound)>, // first combinator unused
}

/// A CSS-style query: type, `*`, `.class`, `#id`, compound forms, descendant
/// (space) and child (`>`) combinators, and `,` groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Complex>,
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let chars: Vec<(usize, char)> = src.char_indices().collect();
        let mut groups = Vec::new();
        let mut from = 0usize;
        loop {
            let comma = chars[from..].iter().position(|&(_, c)| c == ',').map(|p| from + p);
            let to = comma.unwrap_or(chars.len());
            groups.push(parse_complex(&chars[from..to])?);
            match comma {
                Some(c) => from = c + 1,
                None => break,
            }
        }
        Ok(Selector { groups })
    }
}

fn is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn parse_complex(chars: &[(usize, char)]) -> Result<Complex, SelectorError> {
    let mut parts: Vec<(Combinator, Compound)> = Vec::new();
    let mut pending: Option<Combinator> = None;
    let mut i = 0usize;

    loop {
        let mut saw_ws = false;
        while i < chars.len() && chars[i].1.is_whitespace() {
            saw_ws = true;
            i += 1;
        }
        let Some(&(pos, c)) = chars.get(i) else { break };

        if c == '>' {
            if parts.is_empty() || pending == Some(Combinator::Child) {
                return Err(SelectorError::Unexpected { found: c, pos });
            }
            pending = Some(Combinator::Child);
            i += 1;
            continue;
        }
        if saw_ws && !parts.is_empty() && pending.is_none() {
            pending = Some(Combinator::Descendant);
        }

        let (compound, next) = parse_compound(chars, i)?;
        if next == i {
            return Err(SelectorError::Unexpected { found: c, pos });
        }
        parts.push((pending.take().unwrap_or(Combinator::Descendant), compound));
        i = next;
    }

    if pending.is_some() {
        return Err(SelectorError::DanglingCombinator);
    }
    if parts.is_empty() {
        return Err(SelectorError::Empty);
    }
    Ok(Complex { parts })
}

fn parse_compound(chars: &[(usize, char)], mut i: usize) -> Result<(Compound, usize), SelectorError> {
    let ident = |from: usize| -> (String, usize) {
        let mut j = from;
        while j < chars.len() && is_ident(chars[j].1) {
            j += 1;
        }
        (chars[from..j].iter().map(|&(_, c)| c).collect(), j)
    };

    let mut out = Compound::default();
    match chars.get(i) {
        Some(&(_, '*')) => i += 1,
        Some(&(_, c)) if is_ident(c) => {
            let (name, j) = ident(i);
            out.tag = Some(name.to_ascii_lowercase());
            i = j;
        }
        _ => {}
    }

    while let Some(&(pos, c)) = chars.get(i) {
        if c != '.' && c != '#' {
            break;
        }
        let (name, j) = ident(i + 1);
        if name.is_empty() {
            return Err(SelectorError::Unexpected { found: c, pos });
        }
        if c == '.' { out.classes.push(name) } else { out.id = Some(name) }
        i = j;
    }

    if let Some(&(pos, c)) = chars.get(i) {
        if !c.is_whitespace() && c != '>' {
            return Err(SelectorError::Unexpected { found: c, pos });
        }
    }
    Ok((out, i))
}

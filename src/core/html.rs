// src/core/html.rs
//
// Small tag locator over raw HTML text. No DOM is built: an `Element` is a set
// of byte offsets into the source plus its parsed attributes.
// Tag names match case-insensitively. Closing tags are matched by depth, so
// nested elements of the same name are handled. An element with no closing
// tag runs to the end of the container it was found in, unless HTML lets
// that end tag be omitted (`td`, `li`, `dd`, ...): those also end at the next
// sibling that implies it, or when the parent closes.

use std::ops::Range;

use regex::Regex;

use crate::error::{FilterDesc, Result, ScrapeError};
use super::sanitize::decode_entities;

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];
const RAW_TEXT: &[&str] = &["script", "style"];

const TABLE_CELL_END: &[&str] = &["td", "th", "tr", "tbody", "thead", "tfoot"];

/// Elements whose end tag may be omitted, and the opening tags that end them.
const IMPLIED_END: &[(&str, &[&str])] = &[
    ("td", TABLE_CELL_END),
    ("th", TABLE_CELL_END),
    ("tr", &["tr", "tbody", "thead", "tfoot"]),
    ("thead", &["tbody", "tfoot"]),
    ("tbody", &["tbody", "tfoot"]),
    ("li", &["li"]),
    ("dt", &["dt", "dd"]),
    ("dd", &["dt", "dd"]),
    ("option", &["option"]),
    ("p", &[
        "p", "div", "ul", "ol", "dl", "table", "section", "pre", "blockquote",
        "hr", "form", "figure", "h1", "h2", "h3", "h4", "h5", "h6",
    ]),
];

/* ---------------- Attribute filters ---------------- */

/// Attribute constraint for a lookup.
/// `class` compares against each whitespace-separated class token.
#[derive(Debug, Clone, Copy)]
pub enum Attr<'f> {
    Is(&'f str, &'f str),
    AnyOf(&'f str, &'f [&'f str]),
    Matches(&'f str, &'f Regex),
}

impl<'f> Attr<'f> {
    pub fn class(value: &'f str) -> Self { Attr::Is("class", value) }

    fn key(&self) -> &'f str {
        match self {
            Attr::Is(k, _) | Attr::AnyOf(k, _) | Attr::Matches(k, _) => k,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        let eq = |want: &str| {
            if self.key() == "class" {
                value.split_ascii_whitespace().any(|c| c == want)
            } else {
                value == want
            }
        };
        match self {
            Attr::Is(_, want) => eq(want),
            Attr::AnyOf(_, wants) => wants.iter().any(|w| eq(w)),
            Attr::Matches(_, re) => re.is_match(value),
        }
    }

    fn describe(&self) -> String {
        match self {
            Attr::Is(k, v) => format!("{k}={v:?}"),
            Attr::AnyOf(k, vs) => format!("{k} in {vs:?}"),
            Attr::Matches(k, re) => format!("{k}~/{}/", re.as_str()),
        }
    }
}

pub fn describe_filters(filters: &[Attr<'_>]) -> FilterDesc {
    FilterDesc(filters.iter().map(Attr::describe).collect())
}

pub fn not_found(tag: &str, filters: &[Attr<'_>]) -> ScrapeError {
    ScrapeError::TagNotFound { tag: s!(tag), filters: describe_filters(filters) }
}

/* ---------------- Tag scanning ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Open,
    Close,
    /// Comment, doctype, processing instruction
    Other,
}

#[derive(Debug, Clone, Copy)]
struct RawTag<'a> {
    start: usize,
    end: usize,
    name: &'a str,
    attrs: &'a str,
    kind: Kind,
    self_closing: bool,
}

/// Index just past the `>` closing the tag that starts at `from`.
/// Quotes inside the tag are respected.
fn tag_end(b: &[u8], from: usize) -> Option<usize> {
    let mut i = from + 1;
    let mut in_s = false;
    let mut in_d = false;
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

fn find_ci(s: &str, needle: &str, from: usize, limit: usize) -> Option<usize> {
    let hay = &s.as_bytes()[from..limit];
    let n = needle.as_bytes();
    if n.len() > hay.len() { return None; }
    (0..=hay.len() - n.len())
        .find(|&i| hay[i..i + n.len()].eq_ignore_ascii_case(n))
        .map(|i| from + i)
}

fn next_raw_tag(s: &str, from: usize, limit: usize) -> Option<RawTag<'_>> {
    let b = &s.as_bytes()[..limit];
    let mut i = from;
    while i < limit {
        let lt = i + s[i..limit].find('<')?;
        let rest = &s[lt..limit];

        if rest.starts_with("<!--") {
            let end = lt + rest.find("-->")? + 3;
            return Some(RawTag { start: lt, end, name: "", attrs: "", kind: Kind::Other, self_closing: false });
        }
        if rest.starts_with("<!") || rest.starts_with("<?") {
            let end = lt + rest.find('>')? + 1;
            return Some(RawTag { start: lt, end, name: "", attrs: "", kind: Kind::Other, self_closing: false });
        }

        let closing = rest.as_bytes().get(1) == Some(&b'/');
        let name_start = lt + 1 + usize::from(closing);
        let name_len = b[name_start..]
            .iter()
            .take_while(|c| c.is_ascii_alphanumeric() || **c == b'-' || **c == b':')
            .count();
        if name_len == 0 {
            // stray '<' in text
            i = lt + 1;
            continue;
        }

        let end = tag_end(b, lt)?;
        let name_end = name_start + name_len;
        let mut attrs_end = end - 1;
        // `href=a/>` keeps its slash; only `<br/>`, `<br />`, `x="y"/>` self-close
        let self_closing = attrs_end > name_end
            && b[attrs_end - 1] == b'/'
            && (attrs_end - 1 == name_end
                || matches!(b[attrs_end - 2], b'"' | b'\'' | b' ' | b'\t' | b'\n' | b'\r'));
        if self_closing { attrs_end -= 1; }

        return Some(RawTag {
            start: lt,
            end,
            name: &s[name_start..name_end],
            attrs: &s[name_end..attrs_end.max(name_end)],
            kind: if closing { Kind::Close } else { Kind::Open },
            self_closing,
        });
    }
    None
}

/// Tags in `[pos, limit)`. Skips over script/style bodies.
struct Tags<'a> {
    s: &'a str,
    pos: usize,
    limit: usize,
}

impl<'a> Tags<'a> {
    fn new(s: &'a str, pos: usize, limit: usize) -> Self { Self { s, pos, limit } }
}

impl<'a> Iterator for Tags<'a> {
    type Item = RawTag<'a>;

    fn next(&mut self) -> Option<RawTag<'a>> {
        let tag = next_raw_tag(self.s, self.pos, self.limit)?;
        self.pos = tag.end;
        if tag.kind == Kind::Open && is_raw_text(tag.name) {
            let close = join!("</", &tag.name.to_ascii_lowercase());
            self.pos = find_ci(self.s, &close, tag.end, self.limit).unwrap_or(self.limit);
        }
        Some(tag)
    }
}

fn is_raw_text(name: &str) -> bool {
    RAW_TEXT.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn is_void(name: &str) -> bool {
    VOID.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn has_implied_end(name: &str) -> bool {
    IMPLIED_END.iter().any(|(n, _)| *n == name)
}

/// Does an opening `<next>` end an unclosed `open` element?
fn ended_by(open: &str, next: &str) -> bool {
    IMPLIED_END
        .iter()
        .find(|(n, _)| *n == open)
        .is_some_and(|(_, enders)| enders.contains(&next))
}

fn parse_attrs(src: &str) -> Vec<(String, String)> {
    let b = src.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < b.len() {
        while i < b.len() && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= b.len() { break; }

        let ks = i;
        while i < b.len() && !b[i].is_ascii_whitespace() && b[i] != b'=' && b[i] != b'/' { i += 1; }
        let key = src[ks..i].to_ascii_lowercase();

        while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
        if i < b.len() && b[i] == b'=' {
            i += 1;
            while i < b.len() && b[i].is_ascii_whitespace() { i += 1; }
            let value = if i < b.len() && (b[i] == b'"' || b[i] == b'\'') {
                let q = b[i];
                i += 1;
                let vs = i;
                while i < b.len() && b[i] != q { i += 1; }
                let v = &src[vs..i];
                i = (i + 1).min(b.len());
                v
            } else {
                let vs = i;
                while i < b.len() && !b[i].is_ascii_whitespace() { i += 1; }
                &src[vs..i]
            };
            out.push((key, decode_entities(value)));
        } else {
            out.push((key, s!()));
        }
    }
    out
}

/* ---------------- Elements ---------------- */

/// A located element: offsets into the source document.
#[derive(Debug, Clone)]
pub struct Element<'a> {
    src: &'a str,
    name: String,
    attrs: Vec<(String, String)>,
    inner: Range<usize>,
    end: usize,
    /// End of the container this element was found in; bounds sibling scans.
    limit: usize,
}

impl<'a> Element<'a> {
    /// Whole-document root.
    pub fn document(src: &'a str) -> Self {
        Self {
            src,
            name: s!("#document"),
            attrs: Vec::new(),
            inner: 0..src.len(),
            end: src.len(),
            limit: src.len(),
        }
    }

    fn from_open(src: &'a str, tag: RawTag<'a>, limit: usize) -> Self {
        let name = tag.name.to_ascii_lowercase();
        let attrs = parse_attrs(tag.attrs);
        let closed = |inner: Range<usize>, end: usize| Element {
            src, name: name.clone(), attrs: attrs.clone(), inner, end, limit,
        };

        if tag.self_closing || is_void(&name) {
            return closed(tag.end..tag.end, tag.end);
        }

        if is_raw_text(&name) {
            let close = join!("</", &name);
            return match find_ci(src, &close, tag.end, limit) {
                Some(cs) => {
                    let end = tag_end(&src.as_bytes()[..limit], cs).unwrap_or(limit);
                    closed(tag.end..cs, end)
                }
                None => closed(tag.end..limit, limit),
            };
        }

        // Elements opened inside this one and not yet closed.
        let mut open: Vec<String> = Vec::new();
        for t in Tags::new(src, tag.end, limit) {
            let tname = t.name.to_ascii_lowercase();
            match t.kind {
                Kind::Open => {
                    while open.last().is_some_and(|top| ended_by(top, &tname)) {
                        open.pop();
                    }
                    if open.is_empty() && ended_by(&name, &tname) {
                        return closed(tag.end..t.start, t.start);
                    }
                    if !t.self_closing && !is_void(&tname) {
                        open.push(tname);
                    }
                }
                Kind::Close => {
                    if let Some(i) = open.iter().rposition(|n| *n == tname) {
                        open.truncate(i);
                    } else if tname == name {
                        return closed(tag.end..t.start, t.end);
                    } else if has_implied_end(&name) {
                        // parent closes
                        return closed(tag.end..t.start, t.start);
                    }
                }
                Kind::Other => {}
            }
        }
        closed(tag.end..limit, limit)
    }

    fn matches(&self, filters: &[Attr<'_>]) -> bool {
        filters.iter().all(|f| self.attr(f.key()).is_some_and(|v| f.accepts(v)))
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn inner_html(&self) -> &'a str { &self.src[self.inner.clone()] }

    /// Visible text: tags removed, entities decoded, whitespace kept as-is.
    pub fn text(&self) -> String {
        let mut raw = String::with_capacity(self.inner.len());
        let mut pos = self.inner.start;
        let mut tags = Tags::new(self.src, self.inner.start, self.inner.end);
        while let Some(t) = tags.next() {
            raw.push_str(&self.src[pos..t.start]);
            pos = tags.pos;
        }
        raw.push_str(&self.src[pos..self.inner.end]);
        decode_entities(&raw)
    }

    /// First descendant `<tag>` satisfying every filter, in document order.
    pub fn find(&self, tag: &str, filters: &[Attr<'_>]) -> Option<Element<'a>> {
        self.descendants(tag).find(|e| e.matches(filters))
    }

    /// Every descendant `<tag>` satisfying the filters, nested matches included.
    pub fn find_all(&self, tag: &str, filters: &[Attr<'_>]) -> Vec<Element<'a>> {
        self.descendants(tag).filter(|e| e.matches(filters)).collect()
    }

    /// Next element after this one, at the same depth, named `tag`.
    pub fn find_next_sibling(&self, tag: &str, filters: &[Attr<'_>]) -> Option<Element<'a>> {
        let mut pos = self.end;
        while let Some(t) = next_raw_tag(self.src, pos, self.limit) {
            match t.kind {
                Kind::Other => pos = t.end,
                // parent closes
                Kind::Close => return None,
                Kind::Open => {
                    let el = Element::from_open(self.src, t, self.limit);
                    if el.name.eq_ignore_ascii_case(tag) && el.matches(filters) {
                        return Some(el);
                    }
                    pos = el.end.max(t.end);
                }
            }
        }
        None
    }

    fn descendants(&self, tag: &str) -> impl Iterator<Item = Element<'a>> {
        let src = self.src;
        let limit = self.inner.end;
        Tags::new(src, self.inner.start, limit)
            .filter(move |t| t.kind == Kind::Open && t.name.eq_ignore_ascii_case(tag))
            .map(move |t| Element::from_open(src, t, limit))
    }
}

/// First descendant of `root` named `tag` that satisfies `filters`,
/// or `ScrapeError::TagNotFound`.
pub fn find_tag<'a>(root: &Element<'a>, tag: &str, filters: &[Attr<'_>]) -> Result<Element<'a>> {
    root.find(tag, filters).ok_or_else(|| not_found(tag, filters))
}

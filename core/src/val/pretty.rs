use std::fmt::Write as _;

use super::{Fields, Value};

/// Renders values the way a notebook prints them, e.g. `%{bar: 2, foo: [1, 2]}`.
///
/// Collections that do not fit in `width` columns are broken one entry per
/// line and nested entries are laid out recursively. Collections longer than
/// `limit` entries end with `...`.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    pub width: usize,
    pub limit: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self { width: 80, limit: 50 }
    }
}

enum Layout<'v> {
    Scalar(String),
    Collection {
        open: String,
        close: &'static str,
        entries: Vec<(String, &'v Value)>,
        truncated: bool,
    },
}

impl Printer {
    pub fn new(width: usize, limit: usize) -> Self {
        Self {
            width: width.max(10),
            limit: limit.max(1),
        }
    }

    pub fn print(&self, value: &Value) -> String {
        self.render(value, 0, 0)
    }

    /// Single-line rendering, still honouring the entry limit
    pub fn flat(&self, value: &Value) -> String {
        match self.layout(value) {
            Layout::Scalar(s) => s,
            Layout::Collection {
                open,
                close,
                entries,
                truncated,
            } => {
                let mut out = open;
                for (i, (prefix, child)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(prefix);
                    out.push_str(&self.flat(child));
                }
                if truncated {
                    out.push_str(if entries.is_empty() { "..." } else { ", ..." });
                }
                out.push_str(close);
                out
            }
        }
    }

    // `used` counts the columns already taken on the line the value starts on
    fn render(&self, value: &Value, indent: usize, used: usize) -> String {
        let flat = self.flat(value);
        if used + flat.chars().count() <= self.width {
            return flat;
        }
        match self.layout(value) {
            Layout::Scalar(s) => s,
            Layout::Collection {
                open,
                close,
                entries,
                truncated,
            } => {
                let inner = indent + 2;
                let mut out = open;
                let count = entries.len();
                for (i, (prefix, child)) in entries.iter().enumerate() {
                    out.push('\n');
                    pad(&mut out, inner);
                    out.push_str(prefix);
                    out.push_str(&self.render(child, inner, inner + prefix.chars().count()));
                    if i + 1 < count || truncated {
                        out.push(',');
                    }
                }
                if truncated {
                    out.push('\n');
                    pad(&mut out, inner);
                    out.push_str("...");
                }
                out.push('\n');
                pad(&mut out, indent);
                out.push_str(close);
                out
            }
        }
    }

    fn layout<'v>(&self, value: &'v Value) -> Layout<'v> {
        match value {
            Value::Nil => Layout::Scalar("nil".to_string()),
            Value::Bool(b) => Layout::Scalar(b.to_string()),
            Value::Int(i) => Layout::Scalar(itoa::Buffer::new().format(*i).to_string()),
            Value::Float(f) => Layout::Scalar(ryu::Buffer::new().format(*f).to_string()),
            Value::Str(s) => Layout::Scalar(self.quote(s)),
            Value::Atom(a) => Layout::Scalar(format!(":{}", a)),
            Value::Namespace(name) => Layout::Scalar(name.to_string()),
            Value::Opaque(text) => Layout::Scalar(text.to_string()),
            Value::List(items) => {
                let entries: Vec<(String, &Value)> =
                    items.iter().take(self.limit).map(|v| (String::new(), v)).collect();
                Layout::Collection {
                    open: "[".to_string(),
                    close: "]",
                    truncated: items.len() > self.limit,
                    entries,
                }
            }
            Value::Map(fields) => self.fields_layout("%{".to_string(), fields),
            Value::Struct(s) => self.fields_layout(format!("%{}{{", s.namespace), &s.fields),
        }
    }

    fn fields_layout<'v>(&self, open: String, fields: &'v Fields) -> Layout<'v> {
        let entries = fields
            .iter()
            .take(self.limit)
            .map(|(k, v)| (field_prefix(k), v))
            .collect();
        Layout::Collection {
            open,
            close: "}",
            entries,
            truncated: fields.len() > self.limit,
        }
    }

    fn quote(&self, s: &str) -> String {
        // long strings are cut so a single field cannot flood the popup
        let max = self.width * 4;
        let mut out = String::with_capacity(s.len().min(max) + 2);
        out.push('"');
        for (i, c) in s.chars().enumerate() {
            if i == max {
                out.push_str("...");
                break;
            }
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                c if c.is_control() => {
                    let _ = write!(out, "\\u{{{:x}}}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

fn field_prefix(key: &str) -> String {
    let plain = key.chars().next().is_some_and(|c| c.is_alphabetic() || c == '_')
        && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '?' || c == '!');
    if plain {
        format!("{}: ", key)
    } else {
        format!("{:?}: ", key)
    }
}

fn pad(out: &mut String, n: usize) {
    out.extend(std::iter::repeat_n(' ', n));
}

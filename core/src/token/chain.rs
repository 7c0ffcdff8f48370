/// Marker typed directly before the identifier being completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sigil {
    /// `:name`, a quoted namespace literal
    Colon,
    /// `&name`, function capture
    Capture,
    /// `!name`
    Bang,
    /// `^name`, pinned variable
    Pin,
    /// `@name`, attribute access
    Attribute,
}

impl Sigil {
    fn from_char(c: char) -> Option<Self> {
        match c {
            ':' => Some(Sigil::Colon),
            '&' => Some(Sigil::Capture),
            '!' => Some(Sigil::Bang),
            '^' => Some(Sigil::Pin),
            '@' => Some(Sigil::Attribute),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// Nothing sensible can be completed here
    Invalid,
    /// A lone hint, possibly empty
    Bare,
    /// `seg.seg.hint`
    Dotted,
    /// `:hint`
    NamespaceLiteral,
}

/// Trailing access chain of the text before the cursor.
///
/// `Enum.ma` parses into segments `["Enum"]` and hint `"ma"`; `map.` into
/// `["map"]` and an empty hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub sigil: Option<Sigil>,
    pub segments: Vec<String>,
    pub hint: String,
    pub kind: ChainKind,
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline]
fn is_run_char(c: char) -> bool {
    is_ident_char(c) || c == '.' || c == '?' || c == '!'
}

// identifier: no leading digit, `?`/`!` only as the final char
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars().peekable();
    match chars.next() {
        Some(c) if is_ident_char(c) && !c.is_ascii_digit() => {}
        _ => return false,
    }
    while let Some(c) = chars.next() {
        if c == '?' || c == '!' {
            return chars.peek().is_none();
        }
        if !is_ident_char(c) {
            return false;
        }
    }
    true
}

impl Chain {
    pub fn invalid() -> Self {
        Self {
            sigil: None,
            segments: Vec::new(),
            hint: String::new(),
            kind: ChainKind::Invalid,
        }
    }

    /// Parse the trailing chain of `text`; never fails, malformed input
    /// yields a chain of kind [`ChainKind::Invalid`].
    pub fn parse(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut start = chars.len();
        while start > 0 && is_run_char(chars[start - 1]) {
            start -= 1;
        }

        let mut run = &chars[start..];
        let mut sigil = None;

        if run.first() == Some(&'!') {
            while run.first() == Some(&'!') {
                run = &run[1..];
            }
            sigil = Some(Sigil::Bang);
        } else if start > 0 {
            let before = chars[start - 1];
            // `a:b`, `::`, `&&` are operators, not sigils
            let glued = start >= 2 && {
                let prev = chars[start - 2];
                is_ident_char(prev) || Sigil::from_char(prev).is_some()
            };
            if !glued {
                sigil = Sigil::from_char(before);
            } else if before == ':' && run.is_empty() {
                // `key:` or `Mod::`, nothing to complete yet
                return Self::invalid();
            }
        }

        let run: String = run.iter().collect();
        let mut parts: Vec<&str> = run.split('.').collect();
        let hint = parts.pop().unwrap_or_default();

        if !hint.is_empty() && !is_identifier(hint) {
            return Self::invalid();
        }
        if parts.iter().any(|seg| !is_identifier(seg)) {
            return Self::invalid();
        }

        let kind = match (parts.is_empty(), sigil) {
            (false, _) => ChainKind::Dotted,
            (true, Some(Sigil::Colon)) => ChainKind::NamespaceLiteral,
            (true, _) => ChainKind::Bare,
        };

        Self {
            sigil,
            segments: parts.into_iter().map(str::to_string).collect(),
            hint: hint.to_string(),
            kind,
        }
    }
}

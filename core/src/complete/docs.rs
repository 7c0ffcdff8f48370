use crate::registry::Documentation;
use crate::val::{Printer, Value};

/// Text up to the first blank line
pub(crate) fn first_paragraph(text: &str) -> String {
    text.trim_start()
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn fenced(code: &str) -> String {
    format!("```\n{}\n```", code)
}

/// First paragraph of the docs followed by the typespec fence.
///
/// `Missing` stays `None` so callers can tell undocumented symbols from
/// deliberately blank ones.
pub(crate) fn symbol_docs(doc: &Documentation, spec: Option<&str>, width: usize) -> Option<String> {
    let text = doc.as_text()?;
    let paragraph = first_paragraph(text);
    let fence = spec
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| fenced(&wrap_signature(s, width)));
    Some(match (paragraph.is_empty(), fence) {
        (_, None) => paragraph,
        (true, Some(fence)) => fence,
        (false, Some(fence)) => format!("{}\n\n{}", paragraph, fence),
    })
}

pub(crate) fn namespace_docs(doc: &Documentation) -> Option<String> {
    doc.as_text().map(first_paragraph)
}

pub(crate) fn value_docs(value: &Value, printer: &Printer) -> String {
    fenced(&printer.print(value))
}

/// Break each over-long line of a signature after its top-level commas.
///
/// `f(a, b) :: t` wider than `width` becomes
/// ```text
/// f(
///   a,
///   b
/// ) :: t
/// ```
pub(crate) fn wrap_signature(spec: &str, width: usize) -> String {
    spec.lines()
        .map(|line| {
            if line.chars().count() <= width {
                line.to_string()
            } else {
                wrap_line(line).unwrap_or_else(|| line.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str) -> Option<String> {
    let open = line.find('(')?;
    let mut depth = 0usize;
    let mut close = None;
    let mut splits = Vec::new();
    for (idx, c) in line.char_indices().skip_while(|(i, _)| *i < open) {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    close = Some(idx);
                    break;
                }
            }
            ',' if depth == 1 => splits.push(idx),
            _ => {}
        }
    }
    let close = close?;
    if close == open + 1 {
        return None;
    }

    let mut args = Vec::with_capacity(splits.len() + 1);
    let mut from = open + 1;
    for split in splits {
        args.push(line[from..split].trim());
        from = split + 1;
    }
    args.push(line[from..close].trim());

    let mut out = String::with_capacity(line.len() + args.len() * 4);
    out.push_str(&line[..=open]);
    for (i, arg) in args.iter().enumerate() {
        out.push_str("\n  ");
        out.push_str(arg);
        if i + 1 < args.len() {
            out.push(',');
        }
    }
    out.push('\n');
    out.push_str(&line[close..]);
    Some(out)
}

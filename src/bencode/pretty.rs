use std::fmt;

use super::value::Value;

const INDENT: &str = "  ";

/// Indented, human-readable rendering of a [`Value`].
///
/// Created by [`Value::pretty`].
///
/// ```
/// use piecemeal::bencode::decode;
///
/// let value = decode(b"d4:listli1e3:twoe4:name4:spame").unwrap();
/// let rendered = value.pretty().to_string();
/// assert!(rendered.contains("\"name\": \"spam\""));
/// ```
pub struct Pretty<'a> {
    value: &'a Value,
}

impl<'a> Pretty<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self { value }
    }
}

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.value, 0)
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(f, "{}", i),
        Value::Str(s) => write!(f, "{:?}", s),
        Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
        Value::List(items) if items.is_empty() => f.write_str("[]"),
        Value::List(items) => {
            f.write_str("[\n")?;
            for item in items {
                write_indent(f, depth + 1)?;
                write_value(f, item, depth + 1)?;
                f.write_str(",\n")?;
            }
            write_indent(f, depth)?;
            f.write_str("]")
        }
        Value::Dict(entries) if entries.is_empty() => f.write_str("{}"),
        Value::Dict(entries) => {
            f.write_str("{\n")?;
            for (key, val) in entries {
                write_indent(f, depth + 1)?;
                write_value(f, key, depth + 1)?;
                f.write_str(": ")?;
                write_value(f, val, depth + 1)?;
                f.write_str(",\n")?;
            }
            write_indent(f, depth)?;
            f.write_str("}")
        }
    }
}

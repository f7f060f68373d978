use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::objects::{ObjId, Object};

/// Serializes indirect objects to a `Write` target while tracking the
/// byte offset of each one for the cross-reference table.
pub struct DocWriter<W: Write> {
    out: W,
    offset: usize,
    offsets: BTreeMap<u32, usize>,
}

impl<W: Write> DocWriter<W> {
    pub fn new(out: W) -> Self {
        DocWriter {
            out,
            offset: 0,
            offsets: BTreeMap::new(),
        }
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.offset += bytes.len();
        Ok(())
    }

    /// Write the PDF 1.7 header and the binary-detection comment
    /// (four bytes >= 128).
    pub fn write_header(&mut self) -> io::Result<()> {
        self.emit(b"%PDF-1.7\n")?;
        self.emit(b"%\xe2\xe3\xcf\xd3\n")
    }

    /// Write one indirect object, recording its offset for the xref.
    pub fn write_object(&mut self, id: ObjId, obj: &Object) -> io::Result<()> {
        self.offsets.insert(id.0, self.offset);
        self.emit(format!("{} 0 obj\n", id.0).as_bytes())?;
        let mut body = Vec::new();
        render(obj, &mut body);
        self.emit(&body)?;
        self.emit(b"\nendobj\n")
    }

    /// Write the xref table, trailer, startxref, and %%EOF marker.
    pub fn write_trailer(
        &mut self,
        root: ObjId,
        info: Option<ObjId>,
    ) -> io::Result<()> {
        let xref_at = self.offset;
        let size = self.offsets.keys().next_back().map_or(1, |n| n + 1);

        self.emit(format!("xref\n0 {}\n", size).as_bytes())?;
        // Object 0 heads the free list. Every entry is exactly 20 bytes.
        self.emit(b"0000000000 65535 f\r\n")?;
        for num in 1..size {
            match self.offsets.get(&num) {
                Some(&off) => {
                    self.emit(format!("{:010} 00000 n\r\n", off).as_bytes())?
                }
                None => self.emit(b"0000000000 00000 f\r\n")?,
            }
        }

        self.emit(
            format!("trailer\n<< /Size {} /Root {} 0 R", size, root.0)
                .as_bytes(),
        )?;
        if let Some(info) = info {
            self.emit(format!(" /Info {} 0 R", info.0).as_bytes())?;
        }
        self.emit(b" >>\n")?;
        self.emit(format!("startxref\n{}\n%%EOF\n", xref_at).as_bytes())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Serialize an object to its PDF text representation.
fn render(obj: &Object, out: &mut Vec<u8>) {
    match obj {
        Object::Null => out.extend_from_slice(b"null"),
        Object::Boolean(true) => out.extend_from_slice(b"true"),
        Object::Boolean(false) => out.extend_from_slice(b"false"),
        Object::Integer(n) => out.extend_from_slice(n.to_string().as_bytes()),
        Object::Real(v) => out.extend_from_slice(format_real(*v).as_bytes()),
        Object::Name(name) => {
            out.push(b'/');
            out.extend_from_slice(name.as_bytes());
        }
        Object::Text(s) => {
            out.push(b'(');
            out.extend_from_slice(escape_text(s).as_bytes());
            out.push(b')');
        }
        Object::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                render(item, out);
            }
            out.push(b']');
        }
        Object::Dict(entries) => render_dict(entries, out),
        Object::Stream { dict, data } => {
            let mut full = dict.clone();
            full.push(("Length".to_string(), Object::Integer(data.len() as i64)));
            render_dict(&full, out);
            out.extend_from_slice(b"\nstream\n");
            out.extend_from_slice(data);
            out.extend_from_slice(b"\nendstream");
        }
        Object::Ref(id) => {
            out.extend_from_slice(format!("{} 0 R", id.0).as_bytes())
        }
    }
}

fn render_dict(entries: &[(String, Object)], out: &mut Vec<u8>) {
    out.extend_from_slice(b"<<");
    for (key, val) in entries {
        out.extend_from_slice(b" /");
        out.extend_from_slice(key.as_bytes());
        out.push(b' ');
        render(val, out);
    }
    out.extend_from_slice(b" >>");
}

/// Escape the characters with special meaning inside a literal string.
pub fn escape_text(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a number for PDF output: no trailing zeros, never scientific
/// notation.
pub(crate) fn format_real(v: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

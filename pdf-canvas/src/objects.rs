/// Indirect object identifier. Documents produced by this crate are
/// written in one pass, so the generation number is always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjId(pub u32);

/// PDF object types per PDF 32000-1:2008 Section 7.3.
#[derive(Debug, Clone)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Name object, stored without the leading `/`.
    Name(String),
    /// Literal string, stored without the enclosing parens.
    Text(String),
    Array(Vec<Object>),
    /// Key-value pairs. A Vec keeps output order deterministic.
    Dict(Vec<(String, Object)>),
    Stream {
        dict: Vec<(String, Object)>,
        data: Vec<u8>,
    },
    Ref(ObjId),
}

impl Object {
    pub fn name(s: &str) -> Self {
        Object::Name(s.to_string())
    }

    pub fn text(s: &str) -> Self {
        Object::Text(s.to_string())
    }

    pub fn dict(entries: Vec<(&str, Object)>) -> Self {
        Object::Dict(own_keys(entries))
    }

    pub fn stream(dict: Vec<(&str, Object)>, data: Vec<u8>) -> Self {
        Object::Stream {
            dict: own_keys(dict),
            data,
        }
    }
}

fn own_keys(entries: Vec<(&str, Object)>) -> Vec<(String, Object)> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dict_keeps_entry_order() {
        let obj = Object::dict(vec![
            ("Type", Object::name("Page")),
            ("Parent", Object::Ref(ObjId(2))),
            ("Contents", Object::Ref(ObjId(5))),
        ]);
        match obj {
            Object::Dict(entries) => {
                let keys: Vec<&str> =
                    entries.iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(keys, ["Type", "Parent", "Contents"]);
            }
            _ => panic!("expected Dict"),
        }
    }

    #[test]
    fn stream_owns_dict_and_data() {
        let obj = Object::stream(
            vec![("Filter", Object::name("FlateDecode"))],
            b"q Q".to_vec(),
        );
        match obj {
            Object::Stream { dict, data } => {
                assert_eq!(dict.len(), 1);
                assert_eq!(data, b"q Q");
            }
            _ => panic!("expected Stream"),
        }
    }
}

/// A materialized literal value.
///
/// `undefined` is folded into `Null`. Object members keep source order and
/// may repeat a key; lookups follow JavaScript and return the last one.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

impl Literal {
    pub fn get(&self, key: &str) -> Option<&Literal> {
        match self {
            Literal::Object(members) => members
                .iter()
                .rev()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Literal]> {
        match self {
            Literal::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Literal::Object(_))
    }

    /// String member that is present and non-empty.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Literal::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(members: &[(&str, Literal)]) -> Literal {
        Literal::Object(
            members
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        let value = object(&[
            ("title", Literal::String("first".into())),
            ("title", Literal::String("second".into())),
        ]);
        assert_eq!(value.get("title").and_then(Literal::as_str), Some("second"));
    }

    #[test]
    fn test_non_empty_str() {
        let value = object(&[
            ("title", Literal::String(String::new())),
            ("description", Literal::Number(1.0)),
            ("name", Literal::String("Acme".into())),
        ]);
        assert_eq!(value.non_empty_str("title"), None);
        assert_eq!(value.non_empty_str("description"), None);
        assert_eq!(value.non_empty_str("missing"), None);
        assert_eq!(value.non_empty_str("name"), Some("Acme"));
    }

    #[test]
    fn test_get_on_non_object() {
        assert_eq!(Literal::Array(vec![]).get("title"), None);
    }
}

//! Query strings with delimiter-joined multi values.
//!
//! `tags=a,b,c` decodes to a list when the delimiter is `","` and to the
//! plain string `"a,b,c"` when no delimiter is configured. No percent
//! encoding is applied in either direction.

use std::collections::BTreeMap;

const AMP: char = '&';
const EQ: char = '=';

pub type QueryParams = BTreeMap<String, QueryValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Multi(Vec<String>),
}

impl QueryValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multi(v) => Some(v),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(v: Vec<String>) -> Self {
        Self::Multi(v)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(v: Vec<&str>) -> Self {
        Self::Multi(v.into_iter().map(str::to_owned).collect())
    }
}

/// Encoder and decoder sharing one multi-value delimiter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCodec {
    delimiter: String,
}

impl QueryCodec {
    /// An empty delimiter disables multi values.
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn decode(&self, query: &str) -> QueryParams {
        let mut params = QueryParams::new();
        for pair in query.split(AMP) {
            let mut kv = pair.split(EQ);
            let key = kv.next().unwrap_or_default();
            let value = kv.next().unwrap_or_default();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            let value = if !self.delimiter.is_empty() && value.contains(&*self.delimiter) {
                QueryValue::Multi(
                    value
                        .split(&*self.delimiter)
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned)
                        .collect(),
                )
            } else {
                QueryValue::Single(value.to_owned())
            };
            params.insert(key.to_owned(), value);
        }
        params
    }

    /// Pairs with an empty key or an empty single value are skipped.
    pub fn encode(&self, params: &QueryParams) -> String {
        let mut qs = String::new();
        for (key, value) in params {
            if key.is_empty() {
                continue;
            }
            let value = match value {
                QueryValue::Single(s) if s.is_empty() => continue,
                QueryValue::Single(s) => s.clone(),
                QueryValue::Multi(v) => v.join(self.delimiter.as_str()),
            };
            if !qs.is_empty() {
                qs.push(AMP);
            }
            qs.push_str(key);
            qs.push(EQ);
            qs.push_str(&value);
        }
        qs
    }
}

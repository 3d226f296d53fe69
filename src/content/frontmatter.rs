//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Delimiter line opening and closing a YAML block
const DELIMITER: &str = "---";

/// Custom deserializer that turns any YAML scalar into a string
///
/// Numbers are formatted from their parsed value, not copied from the
/// source text: `title: 2024` yields `"2024"`, `1.10` yields `"1.1"` and
/// `0o17` yields `"15"`.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or scalar value")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(ScalarString)
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Tag::deserialize(deserializer)? {
        Tag::Single(value) => vec![value],
        Tag::List(values) => values,
    })
}

/// `team: ` with no value means no team
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The `tag` field
///
/// Front matter normally carries a single tag string. When the key is
/// absent the value is an empty list, not an empty string, and page code
/// relies on telling the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Tag {
    Single(String),
    List(Vec<String>),
}

impl Default for Tag {
    fn default() -> Self {
        Tag::List(Vec::new())
    }
}

impl Tag {
    /// The tags as a slice-like list, regardless of representation
    pub fn values(&self) -> Vec<&str> {
        match self {
            Tag::Single(value) => vec![value.as_str()],
            Tag::List(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Tag::Single(value) => value.is_empty(),
            Tag::List(values) => values.is_empty(),
        }
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, SeqAccess, Visitor};
        use std::fmt;

        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a list of strings")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value))
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value.to_string()))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value.to_string()))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::Single(value.to_string()))
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(WrappedScalar(item)) = seq.next_element()? {
                    vec.push(item);
                }
                Ok(Tag::List(vec))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::default())
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Tag::default())
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

/// Sequence element read through [`scalar_string`]
struct WrappedScalar(String);

impl<'de> Deserialize<'de> for WrappedScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        scalar_string(deserializer).map(WrappedScalar)
    }
}

/// A collaborator listed on a work project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    #[serde(deserialize_with = "scalar_string")]
    pub name: String,
    #[serde(deserialize_with = "scalar_string")]
    pub role: String,
    #[serde(deserialize_with = "scalar_string")]
    pub avatar: String,
    #[serde(rename = "linkedIn", deserialize_with = "scalar_string")]
    pub linked_in: String,
}

/// Front-matter metadata of a post or project
///
/// `title`, `publishedAt` and `summary` are expected but not enforced; a
/// missing key leaves the field empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "scalar_string")]
    pub title: String,
    #[serde(rename = "publishedAt", deserialize_with = "scalar_string")]
    pub published_at: String,
    #[serde(deserialize_with = "scalar_string")]
    pub summary: String,
    #[serde(deserialize_with = "scalar_string")]
    pub image: String,
    #[serde(deserialize_with = "string_or_vec")]
    pub images: Vec<String>,
    pub tag: Tag,
    #[serde(deserialize_with = "null_as_default")]
    pub team: Vec<TeamMember>,

    /// Additional custom fields, in front-matter order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Metadata {
    /// Parse front-matter from file contents
    ///
    /// Returns (metadata, body) where the body has its leading and trailing
    /// blank lines removed. A file without an opening `---` line has default
    /// metadata and is all body. The error carries a human-readable reason.
    pub fn parse(raw: &str) -> Result<(Self, &str), String> {
        let (yaml, body) = match split_front_matter(raw)? {
            Some(parts) => parts,
            None => return Ok((Metadata::default(), trim_blank_lines(raw))),
        };

        let has_content = yaml.lines().any(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        });
        if !has_content {
            return Ok((Metadata::default(), trim_blank_lines(body)));
        }

        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|e| format!("invalid YAML: {}", e))?;

        let metadata = match value {
            serde_yaml::Value::Mapping(_) => serde_yaml::from_value::<Metadata>(value)
                .map_err(|e| format!("unexpected field value: {}", e))?,
            serde_yaml::Value::Null => Metadata::default(),
            _ => return Err("front-matter is not a key/value mapping".to_string()),
        };

        Ok((metadata, trim_blank_lines(body)))
    }
}

/// Split a file into its YAML block and the body following it
///
/// Returns `Ok(None)` when the first line is not a delimiter.
fn split_front_matter(raw: &str) -> Result<Option<(&str, &str)>, String> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut lines = raw.split_inclusive('\n');
    let first = match lines.next() {
        Some(line) => line,
        None => return Ok(None),
    };
    if first.trim_end() != DELIMITER {
        return Ok(None);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let yaml = &raw[yaml_start..offset];
            let body = &raw[offset + line.len()..];
            return Ok(Some((yaml, body)));
        }
        offset += line.len();
    }

    Err(format!("missing closing `{}` delimiter", DELIMITER))
}

/// Remove blank lines at both ends, keeping indentation of the first line
fn trim_blank_lines(body: &str) -> &str {
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }

    let rest = &body[start..];
    let content_end = rest.trim_end().len();
    let end = rest[content_end..]
        .find('\n')
        .map_or(rest.len(), |i| content_end + i);

    rest[..end].trim_end_matches('\r')
}

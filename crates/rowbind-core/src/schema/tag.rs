/// A parsed column annotation.
///
/// The annotation is a comma-separated list. The first token is the column
/// name and is used verbatim. The remaining tokens are trimmed and matched
/// case-sensitively against the known keywords; anything else is ignored.
///
/// ```
/// use rowbind_core::schema::Tag;
///
/// let tag = Tag::parse("id, PRIMARY_KEY, AUTO_INCREMENT");
/// assert_eq!(tag.column.as_deref(), Some("id"));
/// assert!(tag.primary_key);
/// assert!(tag.auto);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tag {
    /// The column name, or `None` when the annotation leaves it blank.
    pub column: Option<String>,

    pub primary_key: bool,

    pub auto: bool,
}

const PRIMARY_KEY: &[&str] = &["PRIMARY_KEY", "PRIMARY KEY"];
const AUTO: &[&str] = &["AUTO_INCREMENT", "SERIAL", "AUTO INCREMENT"];

impl Tag {
    pub fn parse(src: &str) -> Tag {
        let mut tokens = src.split(',');
        let mut tag = Tag::default();

        if let Some(column) = tokens.next() {
            if !column.trim().is_empty() {
                tag.column = Some(column.to_string());
            }
        }

        for token in tokens {
            let token = token.trim();

            if PRIMARY_KEY.contains(&token) {
                tag.primary_key = true;
            } else if AUTO.contains(&token) {
                tag.auto = true;
            }
        }

        tag
    }

    /// Returns the column name, falling back to `field` when the annotation
    /// does not name one.
    pub fn column_or<'a>(&'a self, field: &'a str) -> &'a str {
        self.column.as_deref().unwrap_or(field)
    }
}

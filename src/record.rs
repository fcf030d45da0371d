//! Records keyed by their identifier, and the map that orders them.

use compare::Compare;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use super::map::Map;

/// A map from record identifiers to records, ordered lexicographically by identifier.
///
/// # Examples
///
/// ```
/// use search_tree::{Record, RecordMap};
///
/// let mut records = RecordMap::default();
///
/// for id in ["B", "A", "D", "C", "F"] {
///     records.insert_record(Record::new(id)?);
/// }
///
/// assert_eq!(records.keys().map(String::as_str).collect::<Vec<_>>(), ["A", "B", "C", "D", "F"]);
/// assert_eq!(records.get("D").map(Record::id), Some("D"));
/// assert!(records.get("Z").is_none());
/// # Ok::<(), search_tree::RecordError>(())
/// ```
pub type RecordMap = Map<String, Record, Lexical>;

/// A comparator that orders strings by their bytes.
///
/// Unlike `compare::Natural<String>`, it compares a `String` key against a `str` query, so a
/// `RecordMap` can be searched without allocating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lexical;

impl<L: ?Sized, R: ?Sized> Compare<L, R> for Lexical where L: AsRef<str>, R: AsRef<str> {
    fn compare(&self, l: &L, r: &R) -> Ordering { l.as_ref().cmp(r.as_ref()) }
}

/// The ways a record can be rejected before it reaches a map.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum RecordError {
    #[error("record id must not be empty")]
    EmptyId,
}

/// A record stored under its identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    id: String,
    title: String,
    category: String,
    amount: f64,
}

impl Record {
    /// Creates a record with the given identifier, an empty title and category, and an amount
    /// of zero.
    ///
    /// Returns an error if the identifier is empty or consists only of whitespace, since such a
    /// key cannot be looked up meaningfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Record, RecordError};
    ///
    /// let record = Record::new("98109")?;
    /// assert_eq!(record.id(), "98109");
    /// assert_eq!(record.amount(), 0.0);
    ///
    /// assert_eq!(Record::new("  "), Err(RecordError::EmptyId));
    /// # Ok::<(), RecordError>(())
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Result<Record, RecordError> {
        let id = id.into();
        if id.trim().is_empty() { return Err(RecordError::EmptyId); }
        Ok(Record { id, title: String::new(), category: String::new(), amount: 0.0 })
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Record {
        self.title = title.into();
        self
    }

    pub fn with_category<S: Into<String>>(mut self, category: S) -> Record {
        self.category = category.into();
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Record {
        self.amount = amount;
        self
    }

    /// Returns the identifier the record is ordered by.
    pub fn id(&self) -> &str { &self.id }

    pub fn title(&self) -> &str { &self.title }

    pub fn category(&self) -> &str { &self.category }

    pub fn amount(&self) -> f64 { self.amount }
}

impl fmt::Display for Record {
    /// Formats the record as a single line: `id: title | amount | category`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} | {} | {}", self.id, self.title, self.amount, self.category)
    }
}

impl<C> Map<String, Record, C> where C: Compare<String> {
    /// Inserts a record under its own identifier.
    ///
    /// As with [`Map::insert`](struct.Map.html#method.insert), a record whose identifier is
    /// already present is added alongside the existing one rather than replacing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Record, RecordMap};
    ///
    /// let mut records = RecordMap::default();
    /// records.insert_record(Record::new("A")?.with_title("first"));
    /// records.insert_record(Record::new("A")?.with_title("second"));
    ///
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records.get("A").map(Record::title), Some("first"));
    /// # Ok::<(), search_tree::RecordError>(())
    /// ```
    pub fn insert_record(&mut self, record: Record) {
        self.insert(record.id.clone(), record);
    }
}

impl<C> Extend<Record> for Map<String, Record, C> where C: Compare<String> {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, it: I) {
        for record in it { self.insert_record(record); }
    }
}

impl<C> FromIterator<Record> for Map<String, Record, C> where C: Compare<String> + Default {
    fn from_iter<I: IntoIterator<Item = Record>>(it: I) -> Self {
        let mut map = Map::default();
        map.extend(it);
        map
    }
}

#[cfg(test)]
mod test {
    use compare::Compare;
    use super::{Lexical, Record, RecordError, RecordMap};

    #[test]
    fn rejects_blank_ids() {
        assert_eq!(Record::new(""), Err(RecordError::EmptyId));
        assert_eq!(Record::new(" \t"), Err(RecordError::EmptyId));
        assert_eq!(RecordError::EmptyId.to_string(), "record id must not be empty");
    }

    #[test]
    fn builds_fields() {
        let record = Record::new("98109").unwrap()
            .with_title("Dell Laptop")
            .with_category("Enterprise")
            .with_amount(1234.5);

        assert_eq!(record.id(), "98109");
        assert_eq!(record.title(), "Dell Laptop");
        assert_eq!(record.category(), "Enterprise");
        assert_eq!(record.amount(), 1234.5);
        assert_eq!(record.to_string(), "98109: Dell Laptop | 1234.5 | Enterprise");
    }

    #[test]
    fn lexical_compares_across_string_types() {
        assert!(Lexical.compares_lt("10", &"9".to_string()));
        assert!(Lexical.compares_eq(&"abc".to_string(), "abc"));
        assert!(Lexical.compares_gt("b", "abc"));
    }

    #[test]
    fn collects_records_in_id_order() {
        let records: RecordMap = ["30", "100", "2"].iter()
            .map(|id| Record::new(*id).unwrap())
            .collect();

        let ids: Vec<&str> = records.values().map(Record::id).collect();
        assert_eq!(ids, ["100", "2", "30"]);
        assert_eq!(records["2"].id(), "2");
    }
}

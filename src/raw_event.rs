use hashbrown::HashMap;
use jiff::Timestamp;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// The flat key/value field set carried by one raw event record.
///
/// Keys keep their insertion order, which mirrors the field order of the
/// source event schema. Unlabeled positional fields arrive under synthetic
/// names (`data_0`, `data_1`, ...) supplied by the producer and are ordinary
/// keys here. Keys are unique within one payload; inserting an existing key
/// overwrites its value in place. Absence of a key means "not present" --
/// there is no null value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(Box<str>, Box<str>)>,
    index: HashMap<Box<str>, usize, ahash::RandomState>,
}

impl Payload {
    pub fn new() -> Self {
        Payload::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Payload {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, ahash::RandomState::new()),
        }
    }

    pub fn insert(&mut self, key: impl Into<Box<str>>, value: impl Into<Box<str>>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut payload = Payload::new();
        for (key, value) in pairs {
            payload.insert(key, value);
        }
        payload
    }
}

impl<K: Into<Box<str>>, V: Into<Box<str>>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (key, value) in iter {
            payload.insert(key, value);
        }
        payload
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_ref(), value.as_ref())?;
        }
        map.end()
    }
}

/// One source record as supplied by the log-reading collaborator.
///
/// The engine does not care how the record was obtained (live subscription,
/// historical query, file replay) -- only about its shape. It is passed by
/// shared reference into classification and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEvent {
    pub channel: String,
    pub provider: String,
    pub event_id: u32,
    pub record_id: u64,
    pub time_created: Timestamp,
    pub computer: String,
    pub message: String,
    pub payload: Payload,
}

impl RawEvent {
    /// The leading "subject" phrase of the rendered message: the first
    /// sentence (period included) of the first line, or the whole first line
    /// when it carries no period.
    pub fn subject(&self) -> &str {
        let line = self.message.lines().next().unwrap_or("").trim();
        match line.find('.') {
            Some(position) => &line[..=position],
            None => line,
        }
    }
}

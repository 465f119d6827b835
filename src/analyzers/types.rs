//! Data types used by the grading pipeline.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::analyzers::grade::Letter;

/// Insertion-ordered table keyed by student name.
///
/// Built 1:1 from a [`Roster`](crate::roster::Roster), so it shares the
/// roster's key set and iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentTable<T> {
    entries: Vec<(String, T)>,
}

/// Student name to arithmetic mean of their scores.
pub type Averages = StudentTable<f64>;

/// Student name to letter grade.
pub type LetterGrades = StudentTable<Letter>;

impl<T> StudentTable<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for StudentTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(String, T)> for StudentTable<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Serialize> Serialize for StudentTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The student with the highest average.
///
/// An empty class yields the `("", 0.0)` sentinel from [`TopPerformer::none`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    pub name: String,
    pub average: f64,
}

impl TopPerformer {
    pub fn none() -> Self {
        Self {
            name: String::new(),
            average: 0.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

/// Class-wide mean of averages and how many students passed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassStatistics {
    pub class_average: f64,
    pub num_passed: usize,
    pub total_students: usize,
}

/// One flattened row per student, used by the CSV and JSON renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub num_scores: usize,
    pub average: f64,
    pub letter: Letter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_preserves_insertion_order() {
        let table: Averages = vec![("Zed".to_string(), 1.0), ("Amy".to_string(), 2.0)]
            .into_iter()
            .collect();

        let names: Vec<_> = table.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(table.get("Amy"), Some(&2.0));
        assert_eq!(table.get("Bob"), None);
    }

    #[test]
    fn test_table_serializes_as_ordered_object() {
        let table: Averages = vec![("Zed".to_string(), 1.5), ("Amy".to_string(), 2.0)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"Zed":1.5,"Amy":2.0}"#);
    }

    #[test]
    fn test_top_performer_sentinel() {
        let top = TopPerformer::none();

        assert!(top.is_none());
        assert_eq!(top.name, "");
        assert_eq!(top.average, 0.0);
    }
}

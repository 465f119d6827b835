use serde::Serialize;

/// One student's entry in a [`Roster`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub name: String,
    pub scores: Vec<f64>,
}

/// Student names mapped to their ordered score lists.
///
/// Iteration follows insertion order, which drives both the raw-grades
/// section of the report and tie-breaking for the top performer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in class shipped with the binary.
    pub fn canonical() -> Self {
        Roster::new()
            .with_student("Alice", vec![40.0, 55.0, 7.0])
            .with_student("Bob", vec![92.0, 88.0, 95.0])
            .with_student("Charlie", vec![75.0, 80.0, 82.0])
    }

    /// Adds a student, or replaces the scores of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, scores: Vec<f64>) {
        let name = name.into();
        match self.students.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.scores = scores,
            None => self.students.push(StudentRecord { name, scores }),
        }
    }

    /// Builder form of [`Roster::insert`].
    pub fn with_student(mut self, name: impl Into<String>, scores: Vec<f64>) -> Self {
        self.insert(name, scores);
        self
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.students
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.scores.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<f64>)> for Roster {
    fn from_iter<I: IntoIterator<Item = (N, Vec<f64>)>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for (name, scores) in iter {
            roster.insert(name, scores);
        }
        roster
    }
}

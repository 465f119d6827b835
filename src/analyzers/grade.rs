use std::fmt;

use serde::Serialize;

use crate::analyzers::types::{Averages, LetterGrades};

/// Letter grade assigned to a numeric average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    F,
}

impl Letter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::F => "F",
        }
    }

    /// C or better.
    pub fn is_passing(&self) -> bool {
        matches!(self, Letter::A | Letter::B | Letter::C)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[low, high]` score band for one letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeRange {
    pub letter: Letter,
    pub low: f64,
    pub high: f64,
}

impl GradeRange {
    pub const fn new(letter: Letter, low: f64, high: f64) -> Self {
        Self { letter, low, high }
    }

    pub fn contains(&self, score: f64) -> bool {
        self.low <= score && score <= self.high
    }
}

/// Bands in declaration order, checked first-to-last.
static CANONICAL_SCALE: &[GradeRange] = &[
    GradeRange::new(Letter::A, 90.0, 100.0),
    GradeRange::new(Letter::B, 80.0, 89.99),
    GradeRange::new(Letter::C, 70.0, 79.99),
    GradeRange::new(Letter::D, 60.0, 69.99),
    GradeRange::new(Letter::F, 0.0, 59.99),
];

/// Ordered list of grade bands.
///
/// | Range         | Grade |
/// |---------------|-------|
/// | 90 – 100      | A     |
/// | 80 – 89.99    | B     |
/// | 70 – 79.99    | C     |
/// | 60 – 69.99    | D     |
/// | 0 – 59.99     | F     |
///
/// Lookup returns the first band that contains the score, so overlapping
/// bands resolve to whichever was declared earlier. Nothing checks that
/// the bands are contiguous: the canonical scale leaves gaps such as
/// `(89.99, 90.0)`, and scores in a gap grade as F.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeScale {
    ranges: Vec<GradeRange>,
}

impl GradeScale {
    pub fn new(ranges: Vec<GradeRange>) -> Self {
        Self { ranges }
    }

    pub fn canonical() -> Self {
        Self::new(CANONICAL_SCALE.to_vec())
    }

    pub fn ranges(&self) -> &[GradeRange] {
        &self.ranges
    }

    /// Converts a score into a letter.
    ///
    /// Scores outside every band fall back to A above 100 and F otherwise,
    /// which also covers negative scores and the canonical scale's gaps.
    pub fn letter_for(&self, score: f64) -> Letter {
        match self.ranges.iter().find(|r| r.contains(score)) {
            Some(range) => range.letter,
            None if score > 100.0 => Letter::A,
            None => Letter::F,
        }
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Grades a score against the canonical scale.
pub fn letter_from_score(score: f64) -> Letter {
    GradeScale::canonical().letter_for(score)
}

/// Maps every student's average to a letter, keeping roster order.
pub fn determine_letter_grades(averages: &Averages, scale: &GradeScale) -> LetterGrades {
    averages
        .iter()
        .map(|(name, &avg)| (name.to_string(), scale.letter_for(avg)))
        .collect()
}

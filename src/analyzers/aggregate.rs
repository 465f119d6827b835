use crate::analyzers::average::{calculate_student_averages, mean};
use crate::analyzers::grade::{GradeScale, Letter, determine_letter_grades};
use crate::analyzers::top::find_top_performer;
use crate::analyzers::types::{
    Averages, ClassStatistics, LetterGrades, StudentSummary, TopPerformer,
};
use crate::roster::Roster;
use serde::Serialize;
use tracing::debug;

/// Computes the class average and the number of students graded C or better.
///
/// An empty class yields `(0.0, 0)`.
pub fn compute_class_statistics(averages: &Averages, letters: &LetterGrades) -> ClassStatistics {
    let values: Vec<f64> = averages.values().copied().collect();
    let num_passed = letters.values().filter(|l| l.is_passing()).count();

    ClassStatistics {
        class_average: mean(&values),
        num_passed,
        total_students: averages.len(),
    }
}

/// Everything derived from one roster, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeReport {
    pub roster: Roster,
    pub averages: Averages,
    pub letters: LetterGrades,
    pub top: TopPerformer,
    pub class: ClassStatistics,
}

impl GradeReport {
    /// `(name, average, letter)` sorted by name, as shown in the averages section.
    pub fn alphabetical(&self) -> Vec<(&str, f64, Letter)> {
        let mut rows: Vec<_> = self
            .averages
            .iter()
            .zip(self.letters.values())
            .map(|((name, &avg), &letter)| (name, avg, letter))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// One summary per student in roster order.
    ///
    /// Averages and letters are built 1:1 from the roster in the same
    /// order, so the three are walked in lockstep.
    pub fn summaries(&self) -> Vec<StudentSummary> {
        self.roster
            .iter()
            .zip(self.averages.values())
            .zip(self.letters.values())
            .map(|((student, &average), &letter)| StudentSummary {
                name: student.name.clone(),
                num_scores: student.scores.len(),
                average,
                letter,
            })
            .collect()
    }
}

/// Runs the grading pipeline over a roster.
///
/// Roster -> averages -> {letters, top performer} -> class statistics.
/// The roster is only borrowed, so repeated runs give identical reports.
#[tracing::instrument(skip_all, fields(students = roster.len()))]
pub fn analyze(roster: &Roster, scale: &GradeScale) -> GradeReport {
    let averages = calculate_student_averages(roster);
    let letters = determine_letter_grades(&averages, scale);
    let top = find_top_performer(&averages);
    let class = compute_class_statistics(&averages, &letters);

    debug!(
        top_student = %top.name,
        top_average = top.average,
        class_average = class.class_average,
        num_passed = class.num_passed,
        "Roster graded"
    );

    GradeReport {
        roster: roster.clone(),
        averages,
        letters,
        top,
        class,
    }
}

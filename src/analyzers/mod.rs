//! Score aggregation and letter grading.
//!
//! This module averages each student's scores, maps averages to letter
//! grades through an ordered [`grade::GradeScale`], picks the top
//! performer, and summarizes the class.

pub mod aggregate;
pub mod average;
pub mod grade;
pub mod top;
pub mod types;

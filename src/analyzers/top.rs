use crate::analyzers::types::{Averages, TopPerformer};

/// Finds the student with the highest average.
///
/// Ties go to whoever comes first in roster order. Returns
/// [`TopPerformer::none`] for an empty table.
pub fn find_top_performer(averages: &Averages) -> TopPerformer {
    let mut best: Option<(&str, f64)> = None;

    for (name, &avg) in averages.iter() {
        let replace = match best {
            Some((_, top)) => avg > top,
            None => true,
        };
        if replace {
            best = Some((name, avg));
        }
    }

    match best {
        Some((name, average)) => TopPerformer {
            name: name.to_string(),
            average,
        },
        None => TopPerformer::none(),
    }
}

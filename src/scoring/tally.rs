//! Raw aggregation: folds an assessment's responses into per-category totals.

use crate::types::catalog::{Category, Question, Response};
use crate::types::score::CategoryTally;
use crate::types::{CategoryId, QuestionId};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::warn;

/// Sums raw points, answered-question counts and achievable maxima per
/// category. Every catalog category gets an entry, zeroed when nothing
/// touched it.
///
/// A question's max score is added only the first time that question id is
/// seen, so a duplicated response cannot inflate the achievable maximum.
/// Responses referencing unknown questions are logged and skipped; upstream
/// data drift must not block scoring of the rest of the assessment.
pub fn tally_responses(
    categories: &[Category],
    questions: &[Question],
    responses: &[Response],
) -> BTreeMap<CategoryId, CategoryTally> {
    let mut tallies: BTreeMap<CategoryId, CategoryTally> = categories
        .iter()
        .map(|category| (category.id, CategoryTally::default()))
        .collect();

    let questions_by_id: HashMap<QuestionId, &Question> =
        questions.iter().map(|question| (question.id, question)).collect();
    let mut counted_for_max: HashSet<QuestionId> = HashSet::new();

    for response in responses {
        let Some(question) = questions_by_id.get(&response.question_id) else {
            warn!(
                question_id = response.question_id,
                "response references unknown question, skipping"
            );
            continue;
        };
        let Some(tally) = tallies.get_mut(&question.category_id) else {
            warn!(
                question_id = question.id,
                category_id = question.category_id,
                "question maps to a category missing from the catalog, skipping"
            );
            continue;
        };

        tally.raw_score += response.raw_score;
        tally.question_count += 1;
        if counted_for_max.insert(question.id) {
            tally.max_possible += question.max_score;
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::QuestionKind;

    fn category(id: i64, number: u32) -> Category {
        Category {
            id,
            number,
            name: format!("Goal {number}"),
            color: String::new(),
        }
    }

    fn question(id: i64, category_id: i64, max_score: f64) -> Question {
        Question {
            id,
            category_id,
            kind: QuestionKind::Select,
            max_score,
            display_order: 0,
            options: vec![],
        }
    }

    fn response(question_id: i64, raw_score: f64) -> Response {
        Response {
            question_id,
            raw_score,
            note: None,
        }
    }

    #[test]
    fn every_catalog_category_gets_an_entry() {
        let categories = vec![category(1, 1), category(2, 2), category(3, 3)];
        let questions = vec![question(10, 1, 5.0)];
        let responses = vec![response(10, 4.0)];

        let tallies = tally_responses(&categories, &questions, &responses);
        assert_eq!(tallies.len(), 3);
        assert_eq!(tallies[&2], CategoryTally::default());
        assert_eq!(tallies[&3], CategoryTally::default());
    }

    #[test]
    fn sums_raw_and_max_per_category() {
        let categories = vec![category(1, 1)];
        let questions = vec![question(10, 1, 5.0), question(11, 1, 3.0)];
        let responses = vec![response(10, 4.0), response(11, 1.5)];

        let tallies = tally_responses(&categories, &questions, &responses);
        let tally = tallies[&1];
        assert_eq!(tally.raw_score, 5.5);
        assert_eq!(tally.max_possible, 8.0);
        assert_eq!(tally.question_count, 2);
    }

    #[test]
    fn duplicate_question_does_not_double_count_max() {
        let categories = vec![category(1, 1)];
        let questions = vec![question(10, 1, 5.0)];
        let responses = vec![response(10, 2.0), response(10, 3.0)];

        let tallies = tally_responses(&categories, &questions, &responses);
        let tally = tallies[&1];
        // Raw points and counts accumulate, the achievable max does not.
        assert_eq!(tally.raw_score, 5.0);
        assert_eq!(tally.max_possible, 5.0);
        assert_eq!(tally.question_count, 2);
    }

    #[test]
    fn unknown_question_is_skipped_without_affecting_others() {
        let categories = vec![category(1, 1)];
        let questions = vec![question(10, 1, 5.0)];
        let responses = vec![response(999, 4.0), response(10, 3.0)];

        let tallies = tally_responses(&categories, &questions, &responses);
        let tally = tallies[&1];
        assert_eq!(tally.raw_score, 3.0);
        assert_eq!(tally.max_possible, 5.0);
        assert_eq!(tally.question_count, 1);
    }

    #[test]
    fn question_with_uncataloged_category_is_skipped() {
        let categories = vec![category(1, 1)];
        let questions = vec![question(10, 77, 5.0)];
        let responses = vec![response(10, 4.0)];

        let tallies = tally_responses(&categories, &questions, &responses);
        assert_eq!(tallies[&1], CategoryTally::default());
    }
}

// ============================================================
// Response Selection Heuristic
// ============================================================
// Given the user's lemmatized token set and the predicted
// intent's candidate responses, pick the best response:
//
//   1. Classify the query into zero or more keyword categories
//      (temporal, switching, fee) by intersecting the query's
//      token set with each category's question keywords.
//   2. Score every candidate: base score = size of the overlap
//      between query tokens and the response's own token set.
//   3. Add a flat +10 per matching category whose marker
//      substrings appear anywhere in the lowercased response
//      text. The bonus is gated on the response side: a query
//      may be a fee question, but a response that never mentions
//      fees gets no fee bonus.
//   4. Highest score wins; strictly-greater comparison, so on a
//      tie the first response in list order keeps the slot.
//
// This is the single selection policy for the whole system —
// both front-ends go through select_best_response.

use std::collections::HashSet;

use crate::data::tokenizer::tokenize_and_lemmatize;

/// Flat bonus granted per matching category.
const CATEGORY_BONUS: i32 = 10;

/// A question category with its detection and boost vocabularies.
///
/// `question_keywords` are matched against the query's lemmatized
/// token set (exact token match); `response_markers` are matched
/// against the raw lowercased response text (substring containment).
struct Category {
    name:              &'static str,
    question_keywords: &'static [&'static str],
    response_markers:  &'static [&'static str],
}

const CATEGORIES: [Category; 3] = [
    Category {
        name:              "temporal",
        question_keywords: &["when", "date", "time", "schedule"],
        response_markers:  &["next", "october", "schedule", "date"],
    },
    Category {
        name:              "switching",
        question_keywords: &["switch", "transfer", "change"],
        response_markers:  &["switch", "advisor", "portal", "transfer"],
    },
    Category {
        name:              "fee",
        question_keywords: &["fee", "fees", "cost", "price"],
        response_markers:  &["fee", "fees", "cost", "price"],
    },
];

/// Select the best response for a query.
///
/// `input_words` is the query's tokenized/lemmatized word list;
/// `responses` are the predicted intent's candidates in their
/// registered order. Returns `None` only for an empty candidate
/// list, which the loader already rules out for trained intents.
pub fn select_best_response<'a>(
    input_words: &[String],
    responses:   &'a [String],
) -> Option<&'a str> {
    let first = responses.first()?;

    let input_set: HashSet<&str> = input_words.iter().map(String::as_str).collect();

    // Which categories does this query fall into?
    let active: Vec<&Category> = CATEGORIES
        .iter()
        .filter(|c| c.question_keywords.iter().any(|k| input_set.contains(k)))
        .collect();

    if !active.is_empty() {
        tracing::debug!(
            "Query categories: {:?}",
            active.iter().map(|c| c.name).collect::<Vec<_>>()
        );
    }

    let mut best_score: i32 = -1;
    let mut best_response: &str = first;

    for response in responses {
        let score = score_response(&input_set, &active, response);

        // Strictly greater — ties keep the earlier response
        if score > best_score {
            best_score    = score;
            best_response = response;
        }
    }

    Some(best_response)
}

/// Score one candidate response: token overlap plus category bonuses.
fn score_response(
    input_set: &HashSet<&str>,
    active:    &[&Category],
    response:  &str,
) -> i32 {
    let response_words = tokenize_and_lemmatize(response);
    let response_set: HashSet<&str> =
        response_words.iter().map(String::as_str).collect();

    let mut score = input_set.intersection(&response_set).count() as i32;

    let response_lower = response.to_lowercase();
    for category in active {
        if category
            .response_markers
            .iter()
            .any(|m| response_lower.contains(m))
        {
            score += CATEGORY_BONUS;
        }
    }

    score
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::tokenize_and_lemmatize;

    fn resp(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_candidate_list() {
        let words = tokenize_and_lemmatize("hello");
        assert_eq!(select_best_response(&words, &[]), None);
    }

    #[test]
    fn test_plain_overlap_wins_without_categories() {
        let words = tokenize_and_lemmatize("tell me about the portal login");
        let responses = resp(&[
            "Our office is open from 9 to 5.",
            "You can log in to the portal with your student number.",
        ]);
        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[1]);
    }

    #[test]
    fn test_tie_keeps_first_in_list_order() {
        // Both responses overlap the query on exactly one token
        let words = tokenize_and_lemmatize("hello there");
        let responses = resp(&["hello friend", "hello stranger"]);
        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[0]);
    }

    #[test]
    fn test_zero_scores_fall_back_to_first_response() {
        let words = tokenize_and_lemmatize("xyzzy");
        let responses = resp(&["first answer", "second answer"]);
        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[0]);
    }

    #[test]
    fn test_category_bonus_requires_response_markers() {
        // Fee question, but neither response mentions fees:
        // no bonus anywhere, plain overlap decides.
        let words = tokenize_and_lemmatize("what is the fee");
        let responses = resp(&[
            "Our advisors are available on weekdays.",
            "What a great question that is.",
        ]);
        let best = select_best_response(&words, &responses).unwrap();
        // "what"+"is" overlap beats "advisor" response's zero overlap
        assert_eq!(best, responses[1]);
    }

    #[test]
    fn test_category_bonus_beats_raw_overlap() {
        let words = tokenize_and_lemmatize("when is the deadline");
        let responses = resp(&[
            // High token overlap, no temporal marker
            "The deadline is the deadline, is it not, is is is.",
            // One overlap token but carries the "date" marker
            "The closing date is announced on the notice board.",
        ]);
        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[1]);
    }

    #[test]
    fn test_bonuses_are_additive_across_categories() {
        // Temporal + switching both match the query,
        // and the response carries markers for both → +20 total.
        let words = tokenize_and_lemmatize("when can I switch advisors");
        let responses = resp(&[
            "Please contact the front desk for help.",
            "You can schedule an advisor switch through the portal.",
        ]);

        let input_set: std::collections::HashSet<&str> =
            words.iter().map(String::as_str).collect();
        let active: Vec<&Category> = CATEGORIES
            .iter()
            .filter(|c| c.question_keywords.iter().any(|k| input_set.contains(k)))
            .collect();
        assert_eq!(active.len(), 2);

        let base: i32 = {
            let rw = tokenize_and_lemmatize(&responses[1]);
            let rs: std::collections::HashSet<&str> =
                rw.iter().map(String::as_str).collect();
            input_set.intersection(&rs).count() as i32
        };
        assert_eq!(
            score_response(&input_set, &active, &responses[1]),
            base + 2 * CATEGORY_BONUS
        );

        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[1]);
    }

    #[test]
    fn test_markers_match_as_substrings() {
        // "update" contains the temporal marker "date"
        let words = tokenize_and_lemmatize("when will I hear back");
        let input_set: std::collections::HashSet<&str> =
            words.iter().map(String::as_str).collect();
        let active: Vec<&Category> = CATEGORIES
            .iter()
            .filter(|c| c.question_keywords.iter().any(|k| input_set.contains(k)))
            .collect();

        let score = score_response(&input_set, &active, "We will send an update soon.");
        assert!(score >= CATEGORY_BONUS);
    }

    #[test]
    fn test_lemmatized_query_keywords_still_detected() {
        // "fees" lemmatizes to "fee", which is itself a fee keyword
        let words = tokenize_and_lemmatize("how much are the fees");
        let responses = resp(&[
            "We are open on weekdays.",
            "The consultation cost is R500 per session.",
        ]);
        let best = select_best_response(&words, &responses).unwrap();
        assert_eq!(best, responses[1]);
    }
}

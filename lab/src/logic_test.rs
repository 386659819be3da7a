use std::collections::BTreeMap;

use super::*;

fn pairs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|&(k, v)| (k.to_owned(), v.to_owned())).collect()
}

// =============================================================
// Grid challenges
// =============================================================

#[test]
fn grid_solution_assignment_is_solved() {
    for challenge in &GRID_CHALLENGES {
        let assignment = pairs(challenge.solution);
        assert!(challenge.is_complete(&assignment));
        assert!(challenge.is_solved(&assignment));
    }
}

#[test]
fn grid_swapped_assignment_is_not_solved() {
    let challenge = &GRID_CHALLENGES[0];
    let assignment = pairs(&[("🐕", "🍎"), ("🐱", "🍌"), ("🐰", "🥕")]);
    assert!(challenge.is_complete(&assignment));
    assert!(!challenge.is_solved(&assignment));
}

#[test]
fn grid_partial_assignment_is_incomplete() {
    let challenge = &GRID_CHALLENGES[0];
    let assignment = pairs(&[("🐕", "🥕")]);
    assert!(!challenge.is_complete(&assignment));
    assert!(!challenge.is_solved(&assignment));
}

#[test]
fn grid_data_is_internally_consistent() {
    for challenge in &GRID_CHALLENGES {
        assert_eq!(challenge.items.len(), challenge.categories.len());
        assert_eq!(challenge.solution.len(), challenge.items.len());
        for (item, category) in challenge.solution {
            assert!(challenge.items.contains(item));
            assert!(challenge.categories.contains(category));
        }
    }
}

// =============================================================
// Pattern and sequence challenges
// =============================================================

#[test]
fn pattern_answer_is_among_options() {
    for challenge in &PATTERN_CHALLENGES {
        assert!(challenge.options.contains(&challenge.answer));
        assert!(challenge.is_correct(challenge.answer));
    }
}

#[test]
fn pattern_rejects_other_options() {
    let challenge = &PATTERN_CHALLENGES[0];
    assert!(!challenge.is_correct("◻︎"));
    assert!(!challenge.is_correct(""));
}

#[test]
fn pattern_sequences_have_exactly_one_hole() {
    for challenge in &PATTERN_CHALLENGES {
        let holes = challenge.sequence.iter().filter(|s| **s == "?").count();
        assert_eq!(holes, 1);
    }
}

#[test]
fn sequence_answer_is_among_options() {
    for challenge in &SEQUENCE_CHALLENGES {
        assert!(challenge.options.contains(&challenge.answer));
        assert!(challenge.is_correct(challenge.answer));
    }
}

#[test]
fn sequence_sequences_have_exactly_one_hole() {
    for challenge in &SEQUENCE_CHALLENGES {
        let holes = challenge.sequence.iter().filter(|s| **s == Slot::Hole).count();
        assert_eq!(holes, 1);
    }
}

#[test]
fn sequence_rejects_wrong_number() {
    assert!(!SEQUENCE_CHALLENGES[0].is_correct(7));
}

// =============================================================
// Progression
// =============================================================

#[test]
fn run_counts_correct_answers_and_finishes() {
    let mut run = ChallengeRun::new(3);
    assert!(!run.is_finished());

    run.record(true);
    run.record(false);
    run.record(true);

    assert!(run.is_finished());
    assert_eq!(run.score(), 2);
    assert_eq!(run.index(), 3);
}

#[test]
fn run_record_is_a_no_op_after_finish() {
    let mut run = ChallengeRun::new(1);
    run.record(true);
    run.record(true);
    assert_eq!(run.score(), 1);
    assert_eq!(run.index(), 1);
}

#[test]
fn run_percent_rounds_down() {
    let mut run = ChallengeRun::new(3);
    run.record(true);
    run.record(true);
    run.record(false);
    assert_eq!(run.percent(), 66);
}

#[test]
fn empty_run_percent_is_zero() {
    assert_eq!(ChallengeRun::new(0).percent(), 0);
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_walks_grid_challenges_in_order() {
    let mut session = LogicSession::new(ChallengeKind::Grid);

    for challenge in &GRID_CHALLENGES {
        let raw = serde_json::to_string(&pairs(challenge.solution)).unwrap();
        assert!(session.submit(&raw).unwrap());
    }

    assert!(session.run().is_finished());
    assert_eq!(session.run().score(), 3);
    assert_eq!(session.run().percent(), 100);
    assert!(session.current().is_none());
}

#[test]
fn session_rejects_incomplete_grid_assignment_without_advancing() {
    let mut session = LogicSession::new(ChallengeKind::Grid);
    let raw = serde_json::to_string(&pairs(&[("🐕", "🥕")])).unwrap();

    let err = session.submit(&raw).unwrap_err();
    assert!(matches!(err, AnswerError::Incomplete));
    assert_eq!(session.run().index(), 0);
}

#[test]
fn session_rejects_malformed_grid_payload() {
    let mut session = LogicSession::new(ChallengeKind::Grid);
    let err = session.submit("not json").unwrap_err();
    assert!(matches!(err, AnswerError::Assignment(_)));
}

#[test]
fn session_grades_pattern_answers() {
    let mut session = LogicSession::new(ChallengeKind::Pattern);
    assert!(session.submit("◼︎").unwrap());
    assert!(!session.submit("🟢").unwrap());
    assert!(session.submit("🟡◼︎").unwrap());
    assert_eq!(session.run().score(), 2);
}

#[test]
fn session_parses_sequence_answers() {
    let mut session = LogicSession::new(ChallengeKind::Sequence);
    assert!(session.submit(" 8 ").unwrap());
    assert!(matches!(session.submit("eight").unwrap_err(), AnswerError::Number(_)));
}

#[test]
fn session_refuses_submissions_after_finish() {
    let mut session = LogicSession::new(ChallengeKind::Sequence);
    session.submit("8").unwrap();
    session.submit("15").unwrap();
    session.submit("3").unwrap();

    assert!(matches!(session.submit("3").unwrap_err(), AnswerError::Finished));
}

#[test]
fn session_current_tracks_the_challenge_index() {
    let mut session = LogicSession::new(ChallengeKind::Sequence);
    let first = session.current().unwrap();
    assert_eq!(first["rule"], "+2 Rule");

    session.submit("8").unwrap();
    let second = session.current().unwrap();
    assert_eq!(second["rule"], "+5 Rule");
}

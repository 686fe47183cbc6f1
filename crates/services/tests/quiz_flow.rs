//! End-to-end flows: settings in, exercises out, highscore recorded.

use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::model::{OperationMode, QuizSettingsDraft, Task};
use quiz_core::time::fixed_clock;
use services::session_view::OutcomeView;
use services::{ExerciseGenerator, QuizServices, SessionError, Tick};

fn seeded_generator(seed: u64) -> ExerciseGenerator<StdRng> {
    ExerciseGenerator::with_rng(StdRng::seed_from_u64(seed))
}

/// With min == max == 2 every multiplication task is 2 × 2.
fn fixed_product_draft(total: u32) -> QuizSettingsDraft {
    QuizSettingsDraft {
        min_operand: Some(2),
        max_operand: Some(2),
        total_exercises: Some(total),
        operation: Some(OperationMode::Multiplication),
        ..QuizSettingsDraft::new()
    }
}

#[tokio::test]
async fn perfect_run_sets_a_highscore() {
    let services = QuizServices::in_memory(fixed_clock());
    let mut generator = seeded_generator(7);

    let mut session = services
        .start_session(fixed_product_draft(4), &mut generator)
        .await
        .unwrap();
    assert_eq!(session.exercises().len(), 4);
    assert!(matches!(
        *session.exercises()[0].task(),
        Task::Multiply { left: 2, right: 2 }
    ));

    for index in 0..4 {
        session.answer(index, "4").unwrap();
    }
    assert!(session.is_fully_answered());

    let (outcome, is_new_record) = services.finish_session(&mut session).await.unwrap();
    assert!(is_new_record);
    assert_eq!(outcome.percentage, 100);
    assert_eq!(OutcomeView::new(&outcome).score_line(), "4/4");

    let settings = services.settings().load().await;
    let best = services.highscores().best_for(&settings).await.unwrap();
    assert_eq!(best.percentage, 100);
}

#[tokio::test]
async fn worse_rerun_does_not_touch_the_record() {
    let services = QuizServices::in_memory(fixed_clock());
    let mut generator = seeded_generator(7);

    let mut first = services
        .start_session(fixed_product_draft(2), &mut generator)
        .await
        .unwrap();
    first.answer(0, "4").unwrap();
    first.answer(1, "4").unwrap();
    let (_, is_new_record) = services.finish_session(&mut first).await.unwrap();
    assert!(is_new_record);

    // Starting again abandons the finished session entirely.
    let mut second = services
        .start_session(fixed_product_draft(2), &mut generator)
        .await
        .unwrap();
    second.answer(0, "4").unwrap();
    second.answer(1, "5").unwrap();
    let (outcome, is_new_record) = services.finish_session(&mut second).await.unwrap();
    assert!(!is_new_record);
    assert_eq!(outcome.percentage, 50);

    let settings = services.settings().load().await;
    let best = services.highscores().best_for(&settings).await.unwrap();
    assert_eq!(best.percentage, 100);
}

#[tokio::test]
async fn settings_submitted_at_start_are_persisted() {
    let services = QuizServices::in_memory(fixed_clock());
    let mut generator = seeded_generator(3);

    let draft = QuizSettingsDraft {
        min_operand: Some(3),
        max_operand: Some(9),
        total_exercises: Some(6),
        operation: Some(OperationMode::Division),
        ..QuizSettingsDraft::new()
    };
    services.start_session(draft, &mut generator).await.unwrap();

    let loaded = services.settings().load().await;
    assert_eq!(loaded.min_operand(), 3);
    assert_eq!(loaded.max_operand(), 9);
    assert_eq!(loaded.operation(), OperationMode::Division);
}

#[tokio::test]
async fn expiry_finishes_with_a_partial_score() {
    let services = QuizServices::in_memory(fixed_clock());
    let mut generator = seeded_generator(11);

    let draft = QuizSettingsDraft {
        time_limit_minutes: Some(1),
        ..fixed_product_draft(4)
    };
    let mut session = services.start_session(draft, &mut generator).await.unwrap();
    session.answer(0, "4").unwrap();
    session.answer(1, "4").unwrap();

    loop {
        match session.tick().unwrap() {
            Tick::Running(_) => {}
            Tick::Expired => break,
        }
    }

    let (outcome, _) = services.finish_session(&mut session).await.unwrap();
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.total, 4);
    assert_eq!(outcome.percentage, 50);
    assert!(matches!(
        session.answer(2, "4"),
        Err(SessionError::UnknownExercise(_)) | Err(SessionError::Finished)
    ));
}

#[tokio::test]
async fn flow_works_over_a_sqlite_backend() {
    let services = QuizServices::new_sqlite(
        "sqlite:file:quiz_flow_test?mode=memory&cache=shared",
        fixed_clock(),
    )
    .await
    .unwrap();
    let mut generator = seeded_generator(23);

    let mut session = services
        .start_session(fixed_product_draft(3), &mut generator)
        .await
        .unwrap();
    for index in 0..3 {
        session.answer(index, "4").unwrap();
    }
    let (_, is_new_record) = services.finish_session(&mut session).await.unwrap();
    assert!(is_new_record);

    let settings = services.settings().load().await;
    assert_eq!(settings.min_operand(), 2);
    let best = services.highscores().best_for(&settings).await.unwrap();
    assert_eq!(best.score, "3/3");
}

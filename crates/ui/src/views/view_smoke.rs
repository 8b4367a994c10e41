use std::time::Duration;

use memtest_core::model::{PHASE_SECS, Phase, SEQUENCE_LEN};

use super::test_harness::{TEST_SYMBOLS, setup_view_harness};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn welcome_screen_renders_intro() {
    let harness = setup_view_harness(1);
    let html = harness.render();
    assert!(html.contains("StudyMate"), "missing title in {html}");
    assert!(html.contains("How it works:"), "missing steps in {html}");
    assert!(html.contains("Start Your Brain Journey"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memorize_screen_shows_the_target_and_timer() {
    let mut harness = setup_view_harness(2);
    harness.dispatch(QuizIntent::Start);

    let html = harness.render();
    assert!(html.contains("Memorize These!"), "missing heading in {html}");
    assert!(html.contains("30s"), "missing timer in {html}");
    let target = harness.target();
    assert_eq!(target.len(), SEQUENCE_LEN);
    for symbol in &target {
        assert!(html.contains(symbol.as_str()), "missing {symbol} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn ticks_update_the_countdown_badge() {
    let mut harness = setup_view_harness(3);
    harness.dispatch(QuizIntent::Start);
    let id = harness.snapshot().countdown;
    harness.dispatch(QuizIntent::Tick(id));
    harness.dispatch(QuizIntent::Tick(id));

    let html = harness.render();
    assert!(html.contains("28s"), "missing 28s in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn perfect_recall_walks_to_deep_thinker() {
    let mut harness = setup_view_harness(4);
    harness.dispatch(QuizIntent::Start);
    let target = harness.target();
    harness.expire_phase();

    let html = harness.render();
    assert!(html.contains("Tap in Order!"), "missing recall heading in {html}");
    assert!(html.contains("Your Order (0/10):"), "missing progress in {html}");
    assert!(!html.contains("quiz-submit"), "submit shown too early in {html}");
    for symbol in TEST_SYMBOLS {
        assert!(html.contains(symbol), "missing palette {symbol} in {html}");
    }

    for symbol in target {
        harness.dispatch(QuizIntent::Pick(symbol));
    }
    let html = harness.render();
    assert!(html.contains("Your Order (10/10):"), "missing progress in {html}");
    assert!(html.contains("quiz-submit"), "missing submit in {html}");

    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert_eq!(harness.snapshot().phase, Phase::Results);
    assert!(html.contains("Your Memory Score"), "missing score label in {html}");
    assert!(html.contains("100%"), "missing score in {html}");
    assert!(html.contains("Deep Thinker"), "missing profile in {html}");
    assert!(html.contains("Perfect Study Duration"), "missing details in {html}");
    assert!(html.contains("40-50 minutes"), "missing duration in {html}");
    assert!(html.contains("linear-gradient(135deg, #a855f7, #ec4899)"), "missing theme in {html}");
    assert!(html.contains("Your Personalized Study Tips"), "missing tips in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unanswered_recall_ends_as_fast_thinker() {
    let mut harness = setup_view_harness(5);
    harness.dispatch(QuizIntent::Start);
    harness.expire_phase();
    harness.expire_phase();

    let html = harness.render();
    assert!(html.contains("0%"), "missing score in {html}");
    assert!(html.contains("Fast Thinker"), "missing profile in {html}");
    assert!(html.contains("Try Again"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unpick_removes_the_slot_and_frees_the_palette_entry() {
    let mut harness = setup_view_harness(6);
    harness.dispatch(QuizIntent::Start);
    let target = harness.target();
    harness.expire_phase();

    harness.dispatch(QuizIntent::Pick(target[0].clone()));
    harness.dispatch(QuizIntent::Pick(target[1].clone()));
    harness.dispatch(QuizIntent::Unpick(0));

    let snapshot = harness.snapshot();
    assert_eq!(snapshot.picks, vec![target[1].clone()]);
    let freed = snapshot
        .palette
        .iter()
        .find(|entry| entry.symbol == target[0])
        .expect("palette entry");
    assert!(!freed.picked);
    assert!(harness.render().contains("Your Order (1/10):"));
}

#[tokio::test(flavor = "current_thread")]
async fn try_again_returns_to_welcome() {
    let mut harness = setup_view_harness(7);
    harness.dispatch(QuizIntent::Start);
    harness.expire_phase();
    harness.expire_phase();
    harness.dispatch(QuizIntent::Restart);

    assert_eq!(harness.snapshot().phase, Phase::Welcome);
    let html = harness.render();
    assert!(html.contains("Start Your Brain Journey"), "missing start in {html}");
    assert!(!html.contains("Your Memory Score"), "stale results in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ticker_counts_down_in_real_time() {
    let mut harness = setup_view_harness(8);
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;
    assert!(harness.ticking());

    harness.advance(Duration::from_millis(3_500)).await;
    assert_eq!(harness.snapshot().remaining_secs, PHASE_SECS - 3);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("27s"), "missing 27s in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ticker_moves_memorize_into_recall() {
    let mut harness = setup_view_harness(9);
    harness.dispatch(QuizIntent::Start);
    harness.drive_async().await;

    harness.advance(Duration::from_millis(30_500)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.phase, Phase::Recall);
    assert_eq!(snapshot.remaining_secs, PHASE_SECS);
    assert!(harness.ticking());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn submit_cancels_the_ticker() {
    let mut harness = setup_view_harness(10);
    harness.dispatch(QuizIntent::Start);
    let target = harness.target();
    harness.expire_phase();
    harness.drive_async().await;
    assert_eq!(harness.snapshot().phase, Phase::Recall);
    assert!(harness.ticking());

    for symbol in target {
        harness.dispatch(QuizIntent::Pick(symbol));
    }
    harness.dispatch(QuizIntent::Submit);
    harness.drive_async().await;
    assert!(!harness.ticking());

    let results = harness.snapshot();
    assert_eq!(results.phase, Phase::Results);
    harness.advance(Duration::from_secs(60)).await;
    assert_eq!(harness.snapshot(), results);
    assert!(!harness.ticking());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn restart_leaves_no_ticker_running() {
    let mut harness = setup_view_harness(11);
    harness.dispatch(QuizIntent::Start);
    harness.expire_phase();
    harness.expire_phase();
    harness.dispatch(QuizIntent::Restart);
    harness.drive_async().await;
    assert!(!harness.ticking());

    harness.advance(Duration::from_secs(45)).await;
    let snapshot = harness.snapshot();
    assert_eq!(snapshot.phase, Phase::Welcome);
    assert_eq!(snapshot.remaining_secs, 0);
}

//! End-to-end quest flows through the command router
//!
//! These tests drive the same router the Telegram handlers use, against a
//! temporary ledger and image directory. Run with:
//! cargo test --test quest_flow_test

mod common;

use common::{text, QuestFixture};
use pretty_assertions::assert_eq;
use puzzle_quest::quest::texts;
use puzzle_quest::quest::Reply;
use puzzle_quest::storage::ProgressStore;

const PIECE3_SUMMARY: &str = "🧩 Знайдено: 3\n🔍 Ще залишилось: 1, 2, 4, 5, 6, 7, 8, 9, 10";

#[tokio::test]
async fn test_claim_piece3_without_images() {
    let fx = QuestFixture::new();

    let first = fx.start("42", "piece3").await;
    assert_eq!(
        first.replies,
        vec![
            text("🎉 Ти знайшов частину #3!"),
            text(texts::PIECE_IMAGE_MISSING),
            text(PIECE3_SUMMARY),
        ]
    );

    let second = fx.start("42", "piece3").await;
    assert_eq!(
        second.replies,
        vec![
            text("✅ Частина #3 вже знайдена."),
            text(texts::PIECE_IMAGE_MISSING),
            text(PIECE3_SUMMARY),
        ]
    );

    let ledger = ProgressStore::new(fx.ledger_path()).load().unwrap();
    assert_eq!(ledger.pieces("42").len(), 1);
}

#[tokio::test]
async fn test_claim_sends_piece_image_when_present() {
    let fx = QuestFixture::new();
    let image = fx.add_piece_image(3);

    let response = fx.start("42", "PIECE3").await;

    assert_eq!(
        response.replies,
        vec![
            text("🎉 Ти знайшов частину #3!"),
            Reply::Image(image),
            text(PIECE3_SUMMARY),
        ]
    );
}

#[tokio::test]
async fn test_collecting_all_pieces_celebrates_once() {
    let fx = QuestFixture::new();
    let full = fx.add_full_picture();

    for n in 1..=9 {
        let response = fx.start("42", &format!("piece{}", n)).await;
        assert!(!response.replies.contains(&Reply::Image(full.clone())));
        assert!(!response.texts().contains(&texts::CONGRATULATIONS));
    }

    let last = fx.start("42", "piece10").await;
    let summary = last.replies[2].as_text().unwrap();
    assert!(summary.ends_with(texts::COMPLETE_BANNER));
    assert_eq!(
        last.replies[3..].to_vec(),
        vec![Reply::Image(full.clone()), text(texts::CONGRATULATIONS)]
    );

    // Scanning an owned piece at 10/10 shows progress but does not celebrate again
    let again = fx.start("42", "piece4").await;
    assert_eq!(again.replies.len(), 3);
    assert!(again.texts()[2].ends_with(texts::COMPLETE_BANNER));
    assert!(!again.texts().contains(&texts::CONGRATULATIONS));
}

#[tokio::test]
async fn test_full_picture_fallback() {
    let fx = QuestFixture::new();

    for n in [10, 9, 8, 7, 6, 5, 4, 3, 2] {
        fx.start("7", &format!("piece{}", n)).await;
    }
    let last = fx.start("7", "piece1").await;

    assert_eq!(
        last.replies[3..].to_vec(),
        vec![text(texts::FULL_IMAGE_MISSING), text(texts::CONGRATULATIONS)]
    );
}

#[tokio::test]
async fn test_users_progress_independently() {
    let fx = QuestFixture::new();

    fx.start("1", "piece1").await;
    fx.start("2", "piece2").await;

    assert_eq!(
        fx.progress("1").await.texts(),
        vec!["🧩 Знайдено: 1\n🔍 Ще залишилось: 2, 3, 4, 5, 6, 7, 8, 9, 10"]
    );
    assert_eq!(
        fx.progress("2").await.texts(),
        vec!["🧩 Знайдено: 2\n🔍 Ще залишилось: 1, 3, 4, 5, 6, 7, 8, 9, 10"]
    );
}

#[tokio::test]
async fn test_reset_then_progress_is_empty() {
    let fx = QuestFixture::new();

    assert_eq!(fx.reset("42").await.texts(), vec![texts::NOTHING_TO_RESET]);

    fx.start("42", "piece3").await;
    fx.start("43", "piece4").await;
    assert_eq!(fx.reset("42").await.texts(), vec![texts::RESET_DONE]);

    assert_eq!(
        fx.progress("42").await.texts(),
        vec!["🧩 Знайдено: \n🔍 Ще залишилось: 1, 2, 3, 4, 5, 6, 7, 8, 9, 10"]
    );
    let ledger = ProgressStore::new(fx.ledger_path()).load().unwrap();
    assert!(ledger.get("42").is_none());
    assert!(ledger.get("43").is_some());
}

#[tokio::test]
async fn test_decoys_and_unknown_codes() {
    let fx = QuestFixture::new();

    assert_eq!(fx.start("42", "").await.texts(), vec![texts::WELCOME]);
    assert_eq!(fx.start("42", "Fake10").await.texts(), vec![texts::FAKE_CODE]);
    assert_eq!(fx.start("42", "piece0").await.texts(), vec![texts::UNKNOWN_PIECE]);
    assert_eq!(fx.start("42", "piecex").await.texts(), vec![texts::UNKNOWN_PIECE]);
    assert_eq!(fx.start("42", "treasure").await.texts(), vec![texts::UNKNOWN_CODE]);

    assert!(!fx.ledger_path().exists());
}

#[tokio::test]
async fn test_reads_ledger_written_by_hand() {
    let fx = QuestFixture::new();
    std::fs::write(fx.ledger_path(), r#"{"42": [5, 2]}"#).unwrap();

    assert_eq!(
        fx.progress("42").await.texts(),
        vec!["🧩 Знайдено: 2, 5\n🔍 Ще залишилось: 1, 3, 4, 6, 7, 8, 9, 10"]
    );

    fx.start("42", "piece1").await;
    let ledger = ProgressStore::new(fx.ledger_path()).load().unwrap();
    let order: Vec<u8> = ledger.pieces("42").iter().map(|p| p.get()).collect();
    assert_eq!(order, vec![5, 2, 1]);
}

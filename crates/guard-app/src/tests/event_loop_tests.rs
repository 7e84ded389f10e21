//! Drives the event loop through its channels the way the console does

use std::sync::Arc;
use std::time::Duration;

use guard_config::Config;
use guard_core::MenuAnalyzer;
use guard_source_builtin::BuiltinIngredients;
use guard_types::{AppEvent, NoticeLevel};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;

struct Harness {
    tx: AsyncSender<AppEvent>,
    rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    handle: JoinHandle<anyhow::Result<()>>,
}

fn start() -> Harness {
    let analyzer = MenuAnalyzer::new(Arc::new(BuiltinIngredients::new()));
    let state = Arc::new(AppState::with_analyzer(Config::default(), analyzer));
    let (ui_tx, ui_rx) = kanal::bounded_async(16);
    let (app_tx, app_rx) = kanal::bounded_async(16);
    let cancel = CancellationToken::new();

    let handle = tokio::spawn(event_loop(state, ui_rx, app_tx, cancel.child_token()));

    Harness {
        tx: ui_tx,
        rx: app_rx,
        cancel,
        handle,
    }
}

async fn next(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

#[tokio::test]
async fn test_add_then_duplicate_allergy() {
    let h = start();

    h.tx.send(AppEvent::AddAllergy("Dairy".into())).await.unwrap();
    match next(&h.rx).await {
        AppEvent::Notice(notice) => {
            assert_eq!(notice.level, NoticeLevel::Info);
            assert_eq!(notice.title, "Allergy added");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match next(&h.rx).await {
        AppEvent::AllergiesChanged {
            allergies,
            quick_picks,
        } => {
            assert_eq!(allergies.len(), 1);
            assert!(!quick_picks.iter().any(|q| q == "Dairy"));
            assert!(quick_picks.iter().any(|q| q == "Soy"));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    h.tx.send(AppEvent::AddAllergy("dairy".into())).await.unwrap();
    match next(&h.rx).await {
        AppEvent::Notice(notice) => {
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.title, "Already added");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    h.cancel.cancel();
    h.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_analyze_without_menu_reports_error() {
    let h = start();

    h.tx.send(AppEvent::AnalyzeMenu).await.unwrap();
    match next(&h.rx).await {
        AppEvent::Notice(notice) => {
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.title, "No menu text");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    h.cancel.cancel();
    h.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_typed_menu_is_analyzed_in_order() {
    let h = start();

    h.tx.send(AppEvent::AddAllergy("Dairy".into())).await.unwrap();
    next(&h.rx).await;
    next(&h.rx).await;

    h.tx.send(AppEvent::SetMenuText {
        text: "Tomato Soup $6\nChicken Salad $9".into(),
        source: guard_types::MenuSource::Typed,
    })
    .await
    .unwrap();
    assert!(matches!(
        next(&h.rx).await,
        AppEvent::MenuLoaded { lines: 2, .. }
    ));

    h.tx.send(AppEvent::AnalyzeMenu).await.unwrap();
    assert!(matches!(next(&h.rx).await, AppEvent::AnalysisStarted));

    match next(&h.rx).await {
        AppEvent::ShowResults(dishes) => {
            assert_eq!(dishes.len(), 2);
            assert!(dishes[0].name().eq_ignore_ascii_case("tomato soup"));
            assert!(!dishes[0].is_recommended());
            assert_eq!(dishes[0].allergy_matches().to_vec(), vec!["Dairy".to_string()]);
            assert!(dishes[1].name().eq_ignore_ascii_case("chicken salad"));
            assert!(dishes[1].is_recommended());
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match next(&h.rx).await {
        AppEvent::Notice(notice) => assert_eq!(notice.title, "Analysis complete"),
        other => panic!("unexpected event: {other:?}"),
    }

    h.cancel.cancel();
    h.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_image_file_is_refused() {
    let h = start();

    h.tx.send(AppEvent::LoadMenuFile("lunch.PNG".into()))
        .await
        .unwrap();
    match next(&h.rx).await {
        AppEvent::Notice(notice) => {
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.title, "Image upload");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    h.cancel.cancel();
    h.handle.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_shutdown_is_forwarded_to_output() {
    let h = start();

    h.tx.send(AppEvent::Shutdown).await.unwrap();
    assert!(matches!(next(&h.rx).await, AppEvent::Shutdown));

    let result = timeout(Duration::from_secs(2), h.handle).await;
    assert!(result.unwrap().unwrap().is_ok());
}

use std::sync::Arc;

use guard_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod allergies;
pub mod analyze;
pub mod menu;

use allergies::{AddKind, allergies_changed, handle_add_allergy, handle_remove_allergy};
use analyze::handle_analyze_menu;
use menu::{handle_load_menu_file, handle_set_menu_text};

/// App's main loop. The UI side is always told to shut down when it ends.
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let result = run_events(state, &ui_to_app_rx, &app_to_ui_tx, &cancel).await;
    let _ = app_to_ui_tx.send(AppEvent::Shutdown).await;
    result
}

async fn run_events(
    state: Arc<AppState>,
    ui_to_app_rx: &AsyncReceiver<AppEvent>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            break;
        }

        handle_events(state.clone(), app_to_ui_tx, event, cancel.child_token()).await?;
    }

    Ok(())
}

async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    match event {
        AppEvent::AddAllergy(name) => {
            handle_add_allergy(state, name, AddKind::FreeText, app_to_ui_tx).await?;
        }
        AppEvent::QuickPick(label) => {
            handle_add_allergy(state, label, AddKind::QuickPick, app_to_ui_tx).await?;
        }
        AppEvent::RemoveAllergy(key) => {
            handle_remove_allergy(state, key, app_to_ui_tx).await?;
        }
        AppEvent::ListAllergies => {
            let snapshot = allergies_changed(&*state.allergies.read().await);
            app_to_ui_tx.send(snapshot).await?;
        }
        AppEvent::SetMenuText { text, source } => {
            handle_set_menu_text(state, text, source, app_to_ui_tx).await?;
        }
        AppEvent::LoadMenuFile(path) => {
            tracing::debug!("Loading menu file {}", path.display());
            handle_load_menu_file(state, path, app_to_ui_tx).await?;
        }
        AppEvent::AnalyzeMenu => {
            handle_analyze_menu(state, cancel, app_to_ui_tx).await?;
        }
        AppEvent::Shutdown => {}
        AppEvent::AllergiesChanged { .. }
        | AppEvent::MenuLoaded { .. }
        | AppEvent::AnalysisStarted
        | AppEvent::ShowResults(_)
        | AppEvent::Notice(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}

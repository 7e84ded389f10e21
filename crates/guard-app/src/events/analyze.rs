use std::sync::Arc;

use guard_core::AnalysisError;
use guard_types::{AppEvent, Notice};
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub async fn handle_analyze_menu(
    state: Arc<AppState>,
    cancel: CancellationToken,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let menu = state.menu.read().await.clone();
    let allergies = state.allergies.read().await.to_vec();

    let Some(menu) = menu.filter(|m| !m.text.trim().is_empty()) else {
        app_to_ui_tx
            .send(AppEvent::Notice(Notice::error(
                "No menu text",
                "Please enter or upload menu text first",
            )))
            .await?;
        return Ok(());
    };

    tracing::info!("Analyzing menu from {}", menu.source);
    app_to_ui_tx.send(AppEvent::AnalysisStarted).await?;

    match state.analyzer.analyze(&menu.text, &allergies, &cancel).await {
        Ok(dishes) => {
            let count = dishes.len();
            app_to_ui_tx.send(AppEvent::ShowResults(dishes)).await?;
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::info(
                    "Analysis complete",
                    format!("Analyzed {count} dishes from the menu"),
                )))
                .await?;
        }
        Err(AnalysisError::Cancelled) => {
            tracing::info!("Analysis cancelled");
            // UI may already be gone when cancellation came from shutdown
            let _ = app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(
                    "Analysis cancelled",
                    "The menu analysis was stopped",
                )))
                .await;
        }
        Err(e) => {
            tracing::error!("Error analyzing menu: {e}");
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(
                    "Analysis failed",
                    "Failed to analyze the menu. Please try again.",
                )))
                .await?;
        }
    }

    Ok(())
}

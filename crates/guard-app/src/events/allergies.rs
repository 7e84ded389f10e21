use std::sync::Arc;

use guard_core::{AllergyError, AllergyList};
use guard_types::{AppEvent, Notice};
use kanal::AsyncSender;

use crate::state::AppState;

/// Snapshot of the list for the UI
pub fn allergies_changed(list: &AllergyList) -> AppEvent {
    AppEvent::AllergiesChanged {
        allergies: list.to_vec(),
        quick_picks: list
            .available_quick_picks()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AddKind {
    FreeText,
    QuickPick,
}

pub async fn handle_add_allergy(
    state: Arc<AppState>,
    name: String,
    kind: AddKind,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (result, snapshot) = {
        let mut allergies = state.allergies.write().await;
        let result = match kind {
            AddKind::FreeText => allergies.add(&name),
            AddKind::QuickPick => allergies.quick_pick(&name),
        };
        (result, allergies_changed(&allergies))
    };

    match result {
        Ok(allergy) => {
            tracing::info!("Allergy added: {}", allergy.name);
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::info(
                    "Allergy added",
                    format!("Added {} to your allergy list", allergy.name),
                )))
                .await?;
            app_to_ui_tx.send(snapshot).await?;
        }
        Err(AllergyError::Empty) => {
            tracing::debug!("Ignoring empty allergy name");
        }
        Err(AllergyError::Duplicate(_)) => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error(
                    "Already added",
                    "This allergy is already in your list",
                )))
                .await?;
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error("Not added", e.to_string())))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_remove_allergy(
    state: Arc<AppState>,
    key: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (result, snapshot) = {
        let mut allergies = state.allergies.write().await;
        let result = allergies.remove_by_id_or_name(&key);
        (result, allergies_changed(&allergies))
    };

    match result {
        Ok(removed) => {
            tracing::info!("Allergy removed: {}", removed.name);
            app_to_ui_tx.send(snapshot).await?;
        }
        Err(e) => {
            app_to_ui_tx
                .send(AppEvent::Notice(Notice::error("Not removed", e.to_string())))
                .await?;
        }
    }

    Ok(())
}

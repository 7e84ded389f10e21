use std::path::PathBuf;
use std::sync::Arc;

use guard_core::InputError;
use guard_types::{AppEvent, MenuSource, Notice};
use kanal::AsyncSender;

use crate::state::{AppState, MenuText};

pub async fn handle_set_menu_text(
    state: Arc<AppState>,
    text: String,
    source: MenuSource,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let lines = text.lines().filter(|l| !l.trim().is_empty()).count();
    tracing::debug!("Menu text set: {} non-blank lines from {:?}", lines, source);

    *state.menu.write().await = Some(MenuText {
        text,
        source: source.clone(),
    });

    app_to_ui_tx
        .send(AppEvent::MenuLoaded { lines, source })
        .await?;

    Ok(())
}

pub async fn handle_load_menu_file(
    state: Arc<AppState>,
    path: PathBuf,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match guard_core::read_menu_file(&path).await {
        Ok(text) => {
            handle_set_menu_text(state, text, MenuSource::File(path), app_to_ui_tx).await
        }
        Err(e) => {
            tracing::warn!("Menu file {} refused: {}", path.display(), e);
            let notice = match e {
                InputError::ImageNotSupported => Notice::error("Image upload", e.to_string()),
                InputError::UnsupportedFile(_) => Notice::error(
                    "Unsupported file",
                    "Please upload a text file or image",
                ),
                InputError::Io(_) => Notice::error("Could not read file", e.to_string()),
            };
            app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
            Ok(())
        }
    }
}

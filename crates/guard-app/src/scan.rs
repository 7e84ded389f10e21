use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use guard_config::Config;
use guard_core::{AllergyError, AllergyList, MenuAnalyzer};
use guard_types::MenuSource;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;

use crate::profile::build_lookup;
use crate::report::{ReportFormat, render};
use crate::state::MenuText;

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Plain-text menu file, read from stdin when omitted
    #[arg(long)]
    pub menu: Option<PathBuf>,

    /// Allergy to check for, repeatable
    #[arg(long = "allergy", short = 'a')]
    pub allergies: Vec<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Skip the delay between ingredient lookups
    #[arg(long)]
    pub no_pacing: bool,
}

/// Build the allergy list from repeated flags, skipping blanks and repeats
pub fn collect_allergies(names: &[String]) -> AllergyList {
    let mut list = AllergyList::new();
    for name in names {
        match list.add(name) {
            Ok(_) => {}
            Err(AllergyError::Duplicate(name)) => {
                tracing::warn!("Allergy {name} given more than once, ignoring repeat");
            }
            Err(e) => tracing::warn!("Skipping allergy: {e}"),
        }
    }
    list
}

async fn read_menu(args: &ScanArgs) -> anyhow::Result<MenuText> {
    if let Some(path) = &args.menu {
        let text = guard_core::read_menu_file(path)
            .await
            .with_context(|| format!("Failed to load menu from {}", path.display()))?;
        return Ok(MenuText {
            text,
            source: MenuSource::File(path.clone()),
        });
    }

    if atty::is(atty::Stream::Stdin) {
        anyhow::bail!("No menu text: pass --menu FILE or pipe the menu on stdin");
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read menu from stdin")?;
    Ok(MenuText {
        text,
        source: MenuSource::Stdin,
    })
}

pub async fn run(
    args: ScanArgs,
    mut config: Config,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    if args.no_pacing {
        config.analysis.pacing_ms = 0;
    }

    let menu = read_menu(&args).await?;
    tracing::info!("Read menu from {}", menu.source);
    let allergies = collect_allergies(&args.allergies);

    let analyzer = MenuAnalyzer::from_config(&config, build_lookup(&config));
    let dishes = analyzer
        .analyze(&menu.text, allergies.as_slice(), &cancel)
        .await?;

    let report = render(&dishes, args.format, config.report.max_ingredients)?;
    println!("{report}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_allergies_skips_repeats_and_blanks() {
        let names: Vec<String> = ["Dairy", " ", "dairy", "Soy"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let list = collect_allergies(&names);
        let kept: Vec<&str> = list.as_slice().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(kept, vec!["Dairy", "Soy"]);
    }
}

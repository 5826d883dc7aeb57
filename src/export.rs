// src/export.rs
//! CSV export: fetch the server-rendered file and save it under a fixed name.

use crate::api::ListingRepository;
use crate::constants::{
    BUILDINGS_EXPORT_FILENAME, CART_EXPORT_FILENAME, EXPORT_BUILDINGS_PATH, EXPORT_CART_PATH,
};
use crate::error::AppError;
use crate::output::{deliver, DeliveryTarget, OutputPlan};
use std::fmt;
use std::path::PathBuf;

/// Which collection to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportKind {
    /// Every known building
    #[value(name = "buildings")]
    AllBuildings,
    /// The current cart contents
    #[value(name = "cart")]
    Cart,
}

impl ExportKind {
    /// Backend path serving this export.
    pub fn path(&self) -> &'static str {
        match self {
            ExportKind::AllBuildings => EXPORT_BUILDINGS_PATH,
            ExportKind::Cart => EXPORT_CART_PATH,
        }
    }

    /// Fixed filename the export is saved under.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportKind::AllBuildings => BUILDINGS_EXPORT_FILENAME,
            ExportKind::Cart => CART_EXPORT_FILENAME,
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportKind::AllBuildings => write!(f, "buildings"),
            ExportKind::Cart => write!(f, "cart"),
        }
    }
}

/// Where the exported bytes go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportDestination {
    /// Save `<dir>/<filename>`
    Directory(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub kind: ExportKind,
    /// `None` when streamed to stdout.
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

/// Requests the export and delivers it.
///
/// An empty export (e.g. an empty cart) still hits the endpoint and is saved.
pub async fn export_csv(
    repository: &dyn ListingRepository,
    kind: ExportKind,
    destination: ExportDestination,
) -> Result<ExportOutcome, AppError> {
    log::info!("Requesting {} export", kind);
    let payload = repository.export_csv(kind).await?;
    let bytes = payload.len();

    let (plan, path) = plan_delivery(kind, destination, payload);
    let report = deliver(plan)?;

    if !report.is_success() {
        return Err(AppError::DeliveryFailed {
            failures: report.failed.iter().map(|f| f.error.clone()).collect(),
        });
    }

    log::info!("Exported {} ({} bytes)", kind, bytes);
    Ok(ExportOutcome { kind, path, bytes })
}

fn plan_delivery(
    kind: ExportKind,
    destination: ExportDestination,
    content: Vec<u8>,
) -> (OutputPlan, Option<PathBuf>) {
    match destination {
        ExportDestination::Directory(dir) => {
            let path = dir.join(kind.filename());
            let plan = OutputPlan::new().with_operation(DeliveryTarget::SaveFile {
                path: path.clone(),
                content,
            });
            (plan, Some(path))
        }
        ExportDestination::Stdout => (
            OutputPlan::new().with_operation(DeliveryTarget::PrintToStdout { content }),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_paths_and_filenames() {
        assert_eq!(ExportKind::AllBuildings.path(), "/export/buildings");
        assert_eq!(ExportKind::Cart.path(), "/export/cart");
        assert_eq!(ExportKind::AllBuildings.filename(), "buildings.csv");
        assert_eq!(ExportKind::Cart.filename(), "cart.csv");
    }

    #[test]
    fn directory_destination_targets_fixed_filename() {
        let (plan, path) = plan_delivery(
            ExportKind::Cart,
            ExportDestination::Directory(PathBuf::from("out")),
            b"a_id\n".to_vec(),
        );
        assert_eq!(path, Some(PathBuf::from("out").join("cart.csv")));
        assert_eq!(plan.operations.len(), 1);
        assert!(matches!(
            &plan.operations[0],
            DeliveryTarget::SaveFile { path, content }
                if path.ends_with("cart.csv") && content == b"a_id\n"
        ));
    }

    #[test]
    fn stdout_destination_has_no_path() {
        let (plan, path) =
            plan_delivery(ExportKind::AllBuildings, ExportDestination::Stdout, vec![]);
        assert_eq!(path, None);
        assert!(matches!(
            &plan.operations[0],
            DeliveryTarget::PrintToStdout { content } if content.is_empty()
        ));
    }
}

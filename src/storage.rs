use crate::errors::AppError;
use crate::models::Roster;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub async fn load_data(path: &Path) -> Roster {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(roster) => roster,
            Err(err) => {
                error!("failed to parse roster file {}: {err}", path.display());
                set_aside(path).await;
                Roster::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Roster::default(),
        Err(err) => {
            error!("failed to read roster file {}: {err}", path.display());
            Roster::default()
        }
    }
}

pub async fn persist_data(path: &Path, roster: &Roster) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(roster).map_err(AppError::internal)?;
    let tmp = sibling(path, "tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

/// Keeps an unparsable file out of the way of the next write.
async fn set_aside(path: &Path) {
    let target = sibling(path, "corrupt");
    match fs::rename(path, &target).await {
        Ok(()) => warn!("moved unreadable roster file to {}", target.display()),
        Err(err) => error!("failed to move roster file {}: {err}", path.display()),
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

use crate::api::{StockroomApi, StockroomPaths};
use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Name of the per-project data directory.
pub const PROJECT_DIR_NAME: &str = ".stockroom";

/// Overrides the global data directory when set.
pub const HOME_ENV: &str = "STOCKROOM_HOME";

pub struct StockroomContext {
    pub api: StockroomApi<FileStore>,
    pub scope: Scope,
    pub config: StockroomConfig,
}

/// Walk up from `cwd` looking for a directory that already holds a `.stockroom/` directory.
/// Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stockroom", "stockroom")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StockroomError::Config("Could not determine data directory".to_string()))
}

/// Resolve the scope directories. `data_dir` pins both scopes to one directory.
///
/// An unresolvable global directory is left as `None`, so only global-scope commands fail.
pub fn resolve_paths(cwd: &Path, data_dir: Option<&Path>) -> StockroomPaths {
    if let Some(dir) = data_dir {
        return StockroomPaths {
            project: Some(dir.to_path_buf()),
            global: Some(dir.to_path_buf()),
        };
    }

    let project = find_project_root(cwd)
        .unwrap_or_else(|| cwd.to_path_buf())
        .join(PROJECT_DIR_NAME);

    let global = match global_data_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            tracing::debug!(error = %e, "no global data directory");
            None
        }
    };

    StockroomPaths {
        project: Some(project),
        global,
    }
}

pub fn initialize(cwd: &Path, use_global: bool, data_dir: Option<&Path>) -> Result<StockroomContext> {
    let paths = resolve_paths(cwd, data_dir);

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let scope_dir = paths.scope_dir(scope)?;
    let config = StockroomConfig::load(&scope_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        StockroomConfig::default()
    });

    let store = FileStore::new(scope_dir).with_data_file(&config.data_file);
    let api = StockroomApi::new(store, paths);

    Ok(StockroomContext { api, scope, config })
}

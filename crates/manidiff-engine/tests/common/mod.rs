use manidiff_engine::{IndexManager, Settings};
use manidiff_store::ManifestSource;
use std::path::Path;

pub const DEPLOYMENT_WEB: &str = "apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 2
";

pub const CONFIGMAP_CFG: &str = "apiVersion: v1
kind: ConfigMap
metadata:
  name: cfg
data:
  mode: fast
";

/// Settings that place storage roots under `parent`
#[allow(dead_code)]
pub fn settings_in(parent: &Path) -> Settings {
    Settings {
        temp_parent: Some(parent.to_path_buf()),
        ..Settings::default()
    }
}

/// Manager whose storage roots live under `parent`
#[allow(dead_code)]
pub fn manager_in(parent: &Path) -> IndexManager {
    IndexManager::new(settings_in(parent))
}

#[allow(dead_code)]
pub fn source(name: &str, content: &str) -> ManifestSource {
    ManifestSource::text(name, content)
}

/// Number of entries directly under `dir`
#[allow(dead_code)]
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

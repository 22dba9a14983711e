use std::fs;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_MEMORY_FRACTION: f32 = 0.25;
/// 512 MiB.
pub const DEFAULT_DISK_CAPACITY_BYTES: u64 = 512 * 1024 * 1024;
const DISK_CACHE_DIR: &str = "image_cache";

/// Cache and presentation policy for whatever image engine the host wires
/// up. This crate never fetches or caches anything itself; it only holds the
/// numbers, plus the two presentation flags the [`Image`](crate::components::Image)
/// component reads ambiently (crossfade and verbose logging).
#[derive(Clone, Debug, PartialEq)]
pub struct ImageLoaderConfig {
    memory_fraction: f32,
    disk_capacity_bytes: u64,
    crossfade: bool,
    verbose_logging: bool,
    root_override: Option<PathBuf>,
}

impl Default for ImageLoaderConfig {
    fn default() -> Self {
        Self {
            memory_fraction: DEFAULT_MEMORY_FRACTION,
            disk_capacity_bytes: DEFAULT_DISK_CAPACITY_BYTES,
            crossfade: true,
            verbose_logging: true,
            root_override: None,
        }
    }
}

impl ImageLoaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of the host's memory budget the memory cache may use.
    /// Clamped to 0..=1.
    pub fn memory_fraction(mut self, value: f32) -> Self {
        self.memory_fraction = value.clamp(0.0, 1.0);
        self
    }

    pub fn disk_capacity_bytes(mut self, value: u64) -> Self {
        self.disk_capacity_bytes = value;
        self
    }

    pub fn crossfade(mut self, value: bool) -> Self {
        self.crossfade = value;
        self
    }

    pub fn verbose_logging(mut self, value: bool) -> Self {
        self.verbose_logging = value;
        self
    }

    /// Root the disk cache somewhere other than the OS temp dir.
    pub fn disk_root_at(mut self, value: impl Into<PathBuf>) -> Self {
        self.root_override = Some(value.into());
        self
    }

    pub fn crossfade_enabled(&self) -> bool {
        self.crossfade
    }

    pub fn verbose_logging_enabled(&self) -> bool {
        self.verbose_logging
    }

    pub fn memory_fraction_value(&self) -> f32 {
        self.memory_fraction
    }

    pub fn disk_capacity(&self) -> u64 {
        self.disk_capacity_bytes
    }

    /// Concrete memory-cache budget for a host-reported total.
    pub fn memory_budget_bytes(&self, total_bytes: u64) -> u64 {
        let fraction = f64::from(self.memory_fraction.clamp(0.0, 1.0));
        (total_bytes as f64 * fraction) as u64
    }

    pub fn disk_root(&self) -> PathBuf {
        self.root_override
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DISK_CACHE_DIR))
    }

    pub fn ensure_disk_root(&self) -> anyhow::Result<PathBuf> {
        let root = self.disk_root();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating image cache directory {}", root.display()))?;
        Ok(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let config = ImageLoaderConfig::default();
        assert_eq!(config.memory_fraction_value(), 0.25);
        assert_eq!(config.disk_capacity(), 536_870_912);
        assert!(config.crossfade_enabled());
        assert!(config.verbose_logging_enabled());
    }

    #[test]
    fn memory_budget_is_a_quarter_by_default() {
        let config = ImageLoaderConfig::default();
        assert_eq!(config.memory_budget_bytes(1_000_000), 250_000);
        assert_eq!(config.memory_budget_bytes(0), 0);
    }

    #[test]
    fn memory_fraction_is_clamped() {
        let config = ImageLoaderConfig::new().memory_fraction(1.5);
        assert_eq!(config.memory_fraction_value(), 1.0);
        assert_eq!(config.memory_budget_bytes(4096), 4096);

        let config = ImageLoaderConfig::new().memory_fraction(-0.5);
        assert_eq!(config.memory_budget_bytes(4096), 0);
    }

    #[test]
    fn disk_root_defaults_under_the_temp_dir() {
        let root = ImageLoaderConfig::default().disk_root();
        assert!(root.starts_with(std::env::temp_dir()));
        assert!(root.ends_with("image_cache"));
    }

    #[test]
    fn ensure_disk_root_creates_the_directory() {
        let target = std::env::temp_dir().join("mellowui-loader-test-root");
        let _ = fs::remove_dir_all(&target);

        let config = ImageLoaderConfig::new().disk_root_at(&target);
        let root = config.ensure_disk_root().unwrap();
        assert!(root.is_dir());

        let _ = fs::remove_dir_all(&target);
    }
}

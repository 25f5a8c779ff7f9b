//! The stock MAGIS desktop manifest

use crate::math::Vec2;
use crate::window::{WindowKind, DEFAULT_BASELINE_Z};
use super::{Manifest, ManifestEntry};

impl Manifest {
    /// The seven-window MAGIS desktop; the core panel starts open
    pub fn magis() -> Self {
        Manifest::new(
            DEFAULT_BASELINE_Z,
            vec![
                ManifestEntry::new("chalamandra", "CHALAMANDRA_CORE.exe", WindowKind::Chalamandra, Vec2::new(100.0, 50.0))
                    .opened()
                    .with_z(10),
                ManifestEntry::new("matrix", "MATRIX_ANALYZER_360.exe", WindowKind::Matrix, Vec2::new(150.0, 80.0))
                    .with_z(11)
                    .with_dock_label("MATRIX"),
                ManifestEntry::new("terminal", "FLOW_LOG.sh", WindowKind::Terminal, Vec2::new(200.0, 150.0))
                    .with_z(12)
                    .with_dock_label("TERM"),
                ManifestEntry::new("cicd", "DEPLOYMENT_ANALYZER.sh", WindowKind::Cicd, Vec2::new(400.0, 100.0))
                    .with_z(13)
                    .with_dock_label("DEPLOY"),
                ManifestEntry::new("media", "MEDIA_STUDIO.bin", WindowKind::Media, Vec2::new(500.0, 50.0))
                    .with_z(14)
                    .with_dock_label("STUDIO"),
                ManifestEntry::new("live", "NEURAL_LINK.live", WindowKind::Live, Vec2::new(600.0, 200.0))
                    .with_z(15)
                    .with_dock_label("LINK"),
                ManifestEntry::new("about", "SYSTEM_SPECS.nfo", WindowKind::About, Vec2::new(300.0, 150.0))
                    .with_z(16)
                    .with_dock_label("INFO"),
            ],
        )
    }
}

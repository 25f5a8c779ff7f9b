//! Window kind tags

use serde::{Deserialize, Serialize};

use crate::render::Accent;

/// Selects which content view the host mounts inside a window frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindowKind {
    /// Core launcher panel
    Chalamandra,
    /// Stat matrix analyzer
    Matrix,
    /// Flow log terminal
    Terminal,
    /// Deployment analyzer
    #[serde(alias = "DEPLOY")]
    Cicd,
    /// Media generation studio
    Media,
    /// Live audio link
    Live,
    /// System info sheet
    About,
}

impl WindowKind {
    /// All kinds, in manifest order of the stock desktop
    pub const ALL: [WindowKind; 7] = [
        WindowKind::Chalamandra,
        WindowKind::Matrix,
        WindowKind::Terminal,
        WindowKind::Cicd,
        WindowKind::Media,
        WindowKind::Live,
        WindowKind::About,
    ];

    /// Frame accent colour for this kind
    pub fn accent(self) -> Accent {
        match self {
            WindowKind::Matrix | WindowKind::About => Accent::Gold,
            WindowKind::Cicd => Accent::Green,
            WindowKind::Media => Accent::Red,
            WindowKind::Live => Accent::Cyan,
            WindowKind::Chalamandra | WindowKind::Terminal => Accent::Purple,
        }
    }

    /// Upper-case tag as it appears in manifests
    pub fn tag(self) -> &'static str {
        match self {
            WindowKind::Chalamandra => "CHALAMANDRA",
            WindowKind::Matrix => "MATRIX",
            WindowKind::Terminal => "TERMINAL",
            WindowKind::Cicd => "CICD",
            WindowKind::Media => "MEDIA",
            WindowKind::Live => "LIVE",
            WindowKind::About => "ABOUT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_uses_tag() {
        for kind in WindowKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.tag()));
        }
    }

    #[test]
    fn test_deploy_alias() {
        let kind: WindowKind = serde_json::from_str("\"DEPLOY\"").unwrap();
        assert_eq!(kind, WindowKind::Cicd);
    }

    #[test]
    fn test_accents() {
        assert_eq!(WindowKind::Matrix.accent(), Accent::Gold);
        assert_eq!(WindowKind::Cicd.accent(), Accent::Green);
        assert_eq!(WindowKind::Terminal.accent(), Accent::Purple);
    }
}

// Graphics quality tiers. The core never interprets these; they are resolved once
// and forwarded unchanged to the render collaborator.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphicsQuality {
    Smooth,
    #[default]
    Balanced,
    Hd,
    UltraHd,
    ExtremeHd,
    Qhdr,
}

/// Concrete renderer settings for a quality tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsProfile {
    pub quality: GraphicsQuality,
    pub pixel_ratio: f32,
    pub shadows_enabled: bool,
    pub shadow_map_size: u32,
    pub anisotropy: u32,
}

impl GraphicsQuality {
    pub const ALL: [GraphicsQuality; 6] = [
        GraphicsQuality::Smooth,
        GraphicsQuality::Balanced,
        GraphicsQuality::Hd,
        GraphicsQuality::UltraHd,
        GraphicsQuality::ExtremeHd,
        GraphicsQuality::Qhdr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphicsQuality::Smooth => "smooth",
            GraphicsQuality::Balanced => "balanced",
            GraphicsQuality::Hd => "hd",
            GraphicsQuality::UltraHd => "ultrahd",
            GraphicsQuality::ExtremeHd => "extremehd",
            GraphicsQuality::Qhdr => "qhdr",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(name))
    }

    pub fn profile(self) -> GraphicsProfile {
        let (pixel_ratio, shadows_enabled, shadow_map_size, anisotropy) = match self {
            GraphicsQuality::Smooth => (0.5, false, 512, 1),
            GraphicsQuality::Balanced => (1.0, true, 1024, 2),
            GraphicsQuality::Hd => (1.5, true, 2048, 4),
            GraphicsQuality::UltraHd => (2.0, true, 4096, 8),
            GraphicsQuality::ExtremeHd => (2.5, true, 8192, 16),
            GraphicsQuality::Qhdr => (3.0, true, 16384, 16),
        };
        GraphicsProfile {
            quality: self,
            pixel_ratio,
            shadows_enabled,
            shadow_map_size,
            anisotropy,
        }
    }
}

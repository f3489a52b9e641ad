use super::provider::FontProvider;
use std::path::PathBuf;

/// Font file tried when the requested font cannot be found.
pub const DEFAULT_PLATFORM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Where fonts are looked up.
///
/// This only describes locations; [`FontConfig::resolve`] turns it into a
/// [`FontProvider`] that does the lookups and caches the results.
#[derive(Clone, Debug)]
pub struct FontConfig {
    /// Directories searched for a requested font file name, in order.
    pub font_dirs: Vec<PathBuf>,
    /// Font file used when the requested font cannot be loaded.
    /// `None` skips straight to the built-in font.
    pub platform_default: Option<PathBuf>,
    /// Whether a requested identifier may be matched against installed
    /// font family names (default: true).
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_dirs: Vec::new(),
            platform_default: Some(PathBuf::from(DEFAULT_PLATFORM_FONT)),
            load_system_fonts: true,
        }
    }
}

impl FontConfig {
    /// No system fonts and no platform default: anything that is not a
    /// readable font file renders with the built-in bitmap font.
    pub fn builtin_only() -> Self {
        Self {
            font_dirs: Vec::new(),
            platform_default: None,
            load_system_fonts: false,
        }
    }

    /// Build the provider for this configuration.
    ///
    /// The system font scan, if enabled, is deferred until the first lookup
    /// that needs it.
    pub fn resolve(&self) -> FontProvider {
        FontProvider::new(self)
    }
}

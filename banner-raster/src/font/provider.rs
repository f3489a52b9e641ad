//! Font resolution: an ordered chain of loader strategies plus a shared cache.

use super::builtin::BuiltinFont;
use super::config::FontConfig;
use super::outline::OutlineFont;
use super::Font;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use thiserror::Error;

/// Which loader strategy produced a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSourceKind {
    /// The identifier named a font file (directly or inside a font dir).
    RequestedFile,
    /// The identifier matched an installed font family.
    SystemFamily,
    /// The configured platform default font file.
    PlatformDefault,
    /// The built-in bitmap font.
    Builtin,
}

/// Why a single strategy could not produce a font. Never leaves this module
/// except through log output.
#[derive(Debug, Error)]
pub(crate) enum FontLoadError {
    #[error("no font file found for {0:?}")]
    NotFound(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} does not contain a usable font face", .0.display())]
    InvalidFontData(PathBuf),

    #[error("no installed font family named {0:?}")]
    FamilyNotFound(String),

    #[error("strategy disabled")]
    Disabled,
}

/// Font bytes plus the family name cosmic-text should ask for.
#[derive(Clone)]
pub(crate) struct OutlineData {
    pub(crate) data: Arc<Vec<u8>>,
    pub(crate) family: String,
}

impl OutlineData {
    /// Validate font bytes and read the family name of the first face.
    fn from_bytes(data: Vec<u8>, path: &Path) -> Result<Self, FontLoadError> {
        let data = Arc::new(data);
        let db = database_with(&data);
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _lang)| name.clone()))
            .ok_or_else(|| FontLoadError::InvalidFontData(path.to_path_buf()))?;
        Ok(Self { data, family })
    }
}

/// Build a font database holding only `data`, without copying the bytes.
pub(crate) fn database_with(data: &Arc<Vec<u8>>) -> fontdb::Database {
    let mut db = fontdb::Database::new();
    let source: Arc<dyn AsRef<[u8]> + Sync + Send> = data.clone();
    db.load_font_source(fontdb::Source::Binary(source));
    db
}

#[derive(Clone)]
enum ResolvedFont {
    Outline(OutlineData),
    Builtin,
}

#[derive(Clone)]
struct CacheEntry {
    font: ResolvedFont,
    kind: FontSourceKind,
}

/// One step of the fallback chain.
trait FontStrategy: Send + Sync {
    fn kind(&self) -> FontSourceKind;
    fn resolve(&self, identifier: &str) -> Result<ResolvedFont, FontLoadError>;
}

/// The identifier as a file path, then relative to each font directory.
struct RequestedFile {
    font_dirs: Vec<PathBuf>,
}

impl FontStrategy for RequestedFile {
    fn kind(&self) -> FontSourceKind {
        FontSourceKind::RequestedFile
    }

    fn resolve(&self, identifier: &str) -> Result<ResolvedFont, FontLoadError> {
        if identifier.is_empty() {
            return Err(FontLoadError::NotFound(identifier.to_string()));
        }
        let requested = PathBuf::from(identifier);
        let mut candidates = vec![requested.clone()];
        if requested.is_relative() {
            candidates.extend(self.font_dirs.iter().map(|dir| dir.join(&requested)));
        }
        let path = candidates
            .into_iter()
            .find(|p| p.is_file())
            .ok_or_else(|| FontLoadError::NotFound(identifier.to_string()))?;
        load_file(&path).map(ResolvedFont::Outline)
    }
}

/// The identifier as an installed family name.
struct SystemFamily {
    enabled: bool,
    db: OnceLock<fontdb::Database>,
}

impl SystemFamily {
    fn database(&self) -> &fontdb::Database {
        self.db.get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            log::debug!(target: "fonts", "scanned {} system font faces", db.len());
            db
        })
    }
}

impl FontStrategy for SystemFamily {
    fn kind(&self) -> FontSourceKind {
        FontSourceKind::SystemFamily
    }

    fn resolve(&self, identifier: &str) -> Result<ResolvedFont, FontLoadError> {
        if !self.enabled {
            return Err(FontLoadError::Disabled);
        }
        let not_found = || FontLoadError::FamilyNotFound(identifier.to_string());
        let db = self.database();
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(identifier)],
            ..fontdb::Query::default()
        };
        let id = db.query(&query).ok_or_else(not_found)?;
        let family = db
            .face(id)
            .and_then(|face| face.families.first().map(|(name, _lang)| name.clone()))
            .ok_or_else(not_found)?;
        let data = db
            .with_face_data(id, |data, _index| data.to_vec())
            .ok_or_else(not_found)?;
        Ok(ResolvedFont::Outline(OutlineData {
            data: Arc::new(data),
            family,
        }))
    }
}

/// A fixed font file, independent of the identifier.
struct PlatformDefault {
    path: Option<PathBuf>,
}

impl FontStrategy for PlatformDefault {
    fn kind(&self) -> FontSourceKind {
        FontSourceKind::PlatformDefault
    }

    fn resolve(&self, _identifier: &str) -> Result<ResolvedFont, FontLoadError> {
        let path = self.path.as_ref().ok_or(FontLoadError::Disabled)?;
        load_file(path).map(ResolvedFont::Outline)
    }
}

struct Builtin;

impl FontStrategy for Builtin {
    fn kind(&self) -> FontSourceKind {
        FontSourceKind::Builtin
    }

    fn resolve(&self, _identifier: &str) -> Result<ResolvedFont, FontLoadError> {
        Ok(ResolvedFont::Builtin)
    }
}

fn load_file(path: &Path) -> Result<OutlineData, FontLoadError> {
    let data = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    OutlineData::from_bytes(data, path)
}

/// Loads fonts by identifier and point size, never failing.
///
/// Resolved font bytes are cached by identifier and shared between callers;
/// every [`FontProvider::load`] call still returns an independent [`Font`]
/// so concurrent requests share no mutable state.
pub struct FontProvider {
    strategies: Vec<Box<dyn FontStrategy>>,
    cache: RwLock<HashMap<String, CacheEntry>>,
}

impl FontProvider {
    pub fn new(config: &FontConfig) -> Self {
        let strategies: Vec<Box<dyn FontStrategy>> = vec![
            Box::new(RequestedFile {
                font_dirs: config.font_dirs.clone(),
            }),
            Box::new(SystemFamily {
                enabled: config.load_system_fonts,
                db: OnceLock::new(),
            }),
            Box::new(PlatformDefault {
                path: config.platform_default.clone(),
            }),
            Box::new(Builtin),
        ];
        Self {
            strategies,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load `identifier` at `point_size` pixels per em.
    ///
    /// Falls back through the platform default to the built-in font; the
    /// result may look different from what was requested.
    pub fn load(&self, identifier: &str, point_size: u32) -> Font {
        self.load_with_source(identifier, point_size).0
    }

    /// Like [`FontProvider::load`], also reporting which strategy won.
    pub fn load_with_source(&self, identifier: &str, point_size: u32) -> (Font, FontSourceKind) {
        let entry = self.resolve(identifier);
        let font = match &entry.font {
            ResolvedFont::Outline(data) => Font::Outline(OutlineFont::new(data, point_size as f32)),
            ResolvedFont::Builtin => Font::Builtin(BuiltinFont),
        };
        (font, entry.kind)
    }

    fn resolve(&self, identifier: &str) -> CacheEntry {
        if let Some(entry) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identifier)
        {
            return entry.clone();
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have filled the slot while we waited for the lock.
        if let Some(entry) = cache.get(identifier) {
            return entry.clone();
        }
        let entry = self.resolve_uncached(identifier);
        cache.insert(identifier.to_string(), entry.clone());
        entry
    }

    fn resolve_uncached(&self, identifier: &str) -> CacheEntry {
        for strategy in &self.strategies {
            match strategy.resolve(identifier) {
                Ok(font) => {
                    let kind = strategy.kind();
                    match kind {
                        FontSourceKind::RequestedFile | FontSourceKind::SystemFamily => {
                            log::debug!(target: "fonts", "{identifier:?} resolved via {kind:?}");
                        }
                        FontSourceKind::PlatformDefault | FontSourceKind::Builtin => {
                            log::warn!(target: "fonts", "font {identifier:?} unavailable, using {kind:?}");
                        }
                    }
                    return CacheEntry { font, kind };
                }
                Err(err) => {
                    log::debug!(target: "fonts", "{:?} failed for {identifier:?}: {err}", strategy.kind());
                }
            }
        }
        CacheEntry {
            font: ResolvedFont::Builtin,
            kind: FontSourceKind::Builtin,
        }
    }

    #[cfg(test)]
    fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

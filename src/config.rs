use log::debug;
use std::path::{Path, PathBuf};

pub const ROOT_ENV: &str = "FW_ASSETS_ROOT";

pub const LOGO_JPEG: &str = "src/logo_small.jpg";
pub const LOGO_HEADER: &str = "src/logo.h";
pub const LOGO_WEBP: &str = "src/logo.webp";
pub const FAVICON_SOURCE: &str = "web-ui/src/assets/logo.webp";
pub const FAVICON_DIR: &str = "data";
pub const FAVICON_FILE: &str = "favicon.ico";

/// Paths are fixed relative to the firmware project root; only the root moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 从环境变量读取根目录, 默认当前目录
    pub fn from_env() -> Self {
        let root = std::env::var_os(ROOT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        debug!("Firmware root: {}", root.display());
        Self::new(root)
    }

    fn resolve(&self, rel: impl AsRef<Path>) -> PathBuf {
        if self.root == Path::new(".") {
            rel.as_ref().to_path_buf()
        } else {
            self.root.join(rel)
        }
    }

    pub fn logo_jpeg(&self) -> PathBuf {
        self.resolve(LOGO_JPEG)
    }

    pub fn logo_header(&self) -> PathBuf {
        self.resolve(LOGO_HEADER)
    }

    pub fn logo_webp(&self) -> PathBuf {
        self.resolve(LOGO_WEBP)
    }

    pub fn favicon_source(&self) -> PathBuf {
        self.resolve(FAVICON_SOURCE)
    }

    pub fn favicon_output(&self) -> PathBuf {
        self.resolve(Path::new(FAVICON_DIR).join(FAVICON_FILE))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".")
    }
}

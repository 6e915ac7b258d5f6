//! Console status lines printed by the binary.

use std::path::Path;

use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    LogoHeader,
    FaviconBase64,
    FaviconIco,
}

pub const BASE64_BANNER: &str = "Copy the following line into your C++ code:";

impl Tool {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "logo-header" => Some(Tool::LogoHeader),
            "favicon-base64" => Some(Tool::FaviconBase64),
            "favicon-ico" => Some(Tool::FaviconIco),
            _ => None,
        }
    }

    /// `dest` 为生成的文件; base64 工具输出到 stdout, 没有成功提示行
    pub fn success(self, dest: &Path) -> Option<String> {
        match self {
            Tool::LogoHeader => Some(format!("{} generated successfully.", dest.display())),
            Tool::FaviconIco => Some(format!("'{}' created successfully.", dest.display())),
            Tool::FaviconBase64 => None,
        }
    }

    pub fn failure(self, err: &AssetError) -> String {
        let AssetError::NotFound(path) = err else {
            return format!("An error occurred: {err}");
        };
        let path = path.display();
        match self {
            Tool::LogoHeader => format!(
                "Error: {path} not found. Make sure the image is in the 'src' directory."
            ),
            Tool::FaviconBase64 => format!("Error: {path} not found."),
            Tool::FaviconIco => format!("Error: Source image not found at '{path}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    fn not_found(path: &str) -> AssetError {
        AssetError::NotFound(PathBuf::from(path))
    }

    #[test]
    fn parses_subcommands() {
        assert_eq!(Tool::from_arg("logo-header"), Some(Tool::LogoHeader));
        assert_eq!(Tool::from_arg("favicon-base64"), Some(Tool::FaviconBase64));
        assert_eq!(Tool::from_arg("favicon-ico"), Some(Tool::FaviconIco));
        assert_eq!(Tool::from_arg("logo"), None);
    }

    #[test]
    fn not_found_messages_name_the_path() {
        assert_eq!(
            Tool::LogoHeader.failure(&not_found("src/logo_small.jpg")),
            "Error: src/logo_small.jpg not found. Make sure the image is in the 'src' directory."
        );
        assert_eq!(
            Tool::FaviconBase64.failure(&not_found("src/logo.webp")),
            "Error: src/logo.webp not found."
        );
        assert_eq!(
            Tool::FaviconIco.failure(&not_found("web-ui/src/assets/logo.webp")),
            "Error: Source image not found at 'web-ui/src/assets/logo.webp'"
        );
    }

    #[test]
    fn other_errors_use_generic_message() {
        let err = AssetError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        for tool in [Tool::LogoHeader, Tool::FaviconBase64, Tool::FaviconIco] {
            assert_eq!(tool.failure(&err), "An error occurred: I/O error: denied");
        }
    }

    #[test]
    fn success_lines() {
        assert_eq!(
            Tool::LogoHeader.success(Path::new("src/logo.h")).as_deref(),
            Some("src/logo.h generated successfully.")
        );
        assert_eq!(
            Tool::FaviconIco.success(Path::new("data/favicon.ico")).as_deref(),
            Some("'data/favicon.ico' created successfully.")
        );
        assert_eq!(Tool::FaviconBase64.success(Path::new("src/logo.webp")), None);
    }
}

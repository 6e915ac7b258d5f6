use std::{
    io,
    path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum AssetError {
    NotFound(PathBuf),
    Io(io::Error),
    Image(image::ImageError),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            AssetError::Io(err) => write!(f, "I/O error: {err}"),
            AssetError::Image(err) => write!(f, "Image error: {err}"),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::NotFound(_) => None,
            AssetError::Io(err) => Some(err),
            AssetError::Image(err) => Some(err),
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        AssetError::Image(err)
    }
}

impl AssetError {
    /// 读取输入文件时出错, 缺失文件归为 NotFound
    pub fn reading(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AssetError::NotFound(path.to_path_buf())
        } else {
            AssetError::Io(err)
        }
    }

    /// 解码输入图片时出错
    pub fn decoding(path: &Path, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::reading(path, e),
            other => AssetError::Image(other),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::NotFound(_))
    }
}

/// 打开并解码图片, 格式由文件内容推断
pub fn open_image(path: &Path) -> Result<image::DynamicImage, AssetError> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| AssetError::reading(path, e))?
        .with_guessed_format()
        .map_err(|e| AssetError::reading(path, e))?;
    reader.decode().map_err(|e| AssetError::decoding(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_maps_to_not_found() {
        let path = Path::new("does/not/exist.jpg");
        let err = open_image(path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "File not found: does/not/exist.jpg");
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = AssetError::reading(
            Path::new("x"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, AssetError::Io(_)));
    }
}

use std::path::{Path, PathBuf};

/// An asset resolved to its file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    pub name: String,
    pub path: PathBuf,
}

impl AssetFile {
    /// `image/<extension>`, the extension taken verbatim from the name.
    pub fn content_type(&self) -> String {
        let extension = Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("image/{}", extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str) -> AssetFile {
        AssetFile { name: name.to_string(), path: PathBuf::from(name) }
    }

    #[test]
    fn content_type_uses_last_extension_verbatim() {
        assert_eq!(asset("frame.png").content_type(), "image/png");
        assert_eq!(asset("scan.tar.GZ").content_type(), "image/GZ");
        assert_eq!(asset("notes.txt").content_type(), "image/txt");
        assert_eq!(asset("README").content_type(), "image/");
    }
}

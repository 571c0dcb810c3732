//! Image file boundary.
//!
//! - `load_image`: read a PNG/JPEG/BMP/GIF into an owned RGB8 buffer.
//! - `save_image`: encode by destination extension and replace the target atomically.
//! - `output_path`: `<dir>/<stem>_<transform><ext>` naming for batch outputs.

use crate::{ImageEffectError, ImageEffectResult, TransformKind};
use image::{ImageFormat, ImageReader, RgbImage};
use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Load an image from disk and convert it to 8-bit RGB.
///
/// The format is sniffed from the file content and falls back to the
/// extension.
pub fn load_image(path: impl AsRef<Path>) -> ImageEffectResult<RgbImage> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| ImageEffectError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    if path.is_dir() {
        return Err(unreadable(io::Error::other("path is a directory")));
    }

    let image = ImageReader::open(path)
        .map_err(unreadable)?
        .with_guessed_format()
        .map_err(unreadable)?
        .decode()
        .map_err(|source| ImageEffectError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image.into_rgb8())
}

/// Save `image` to `path`, picking the encoding from the extension.
///
/// The image is encoded into a temporary file next to `path` and then
/// renamed over it, so `path` either holds the complete new image or is left
/// as it was.
pub fn save_image(image: &RgbImage, path: impl AsRef<Path>) -> ImageEffectResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| ImageEffectError::UnsupportedFormat(path.to_path_buf()))?;

    let write_err = |source: io::Error| ImageEffectError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = temp_file_in(dir).map_err(write_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        image
            .write_to(&mut writer, format)
            .map_err(|source| ImageEffectError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Destination for the output of `kind` applied to `source`.
///
/// Uses `out_dir` when given, otherwise the directory of `source`. The file
/// name is the source stem, an underscore, the transform suffix and the
/// source extension.
pub fn output_path(source: &Path, out_dir: Option<&Path>, kind: TransformKind) -> PathBuf {
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push("_");
    name.push(kind.file_suffix());
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }

    dir.join(name)
}

/// Hidden temporary file in `dir`, created with the usual `0o666 & !umask`
/// mode so the persisted output is not owner-only.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".mosaic-effect");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_output_path() {
        let source = Path::new("/photos/cat.png");
        assert_eq!(
            output_path(source, None, TransformKind::DotMosaic),
            PathBuf::from("/photos/cat_dotmosaic.png")
        );
        assert_eq!(
            output_path(source, Some(Path::new("/out")), TransformKind::Invert),
            PathBuf::from("/out/cat_invert.png")
        );
        assert_eq!(
            output_path(Path::new("cat.tar.jpg"), None, TransformKind::Grayscale),
            PathBuf::from("cat.tar_grayscale.jpg")
        );
        assert_eq!(
            output_path(Path::new("/photos/cat"), None, TransformKind::Pixelate),
            PathBuf::from("/photos/cat_pixelate")
        );
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("grid.png");
        let img = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 50, y as u8 * 80, 7]));

        save_image(&img, &path).unwrap();
        assert_eq!(file_count(temp_dir.path()), 1);
        assert_eq!(load_image(&path).unwrap(), img);
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.bmp");

        save_image(&RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])), &path).unwrap();
        save_image(&RgbImage::from_pixel(3, 1, Rgb([9, 8, 7])), &path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 1));
        assert_eq!(*loaded.get_pixel(0, 0), Rgb([9, 8, 7]));
        assert_eq!(file_count(temp_dir.path()), 1);
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/out.png");
        save_image(&RgbImage::new(1, 1), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_save_unsupported_extension() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.xyz");

        let err = save_image(&RgbImage::new(1, 1), &path).unwrap_err();
        assert!(matches!(err, ImageEffectError::UnsupportedFormat(_)));
        assert_eq!(err.kind(), crate::ErrorKind::Encoding);
        assert_eq!(file_count(temp_dir.path()), 0);
    }

    #[test]
    fn test_failed_encode_leaves_nothing() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.png");

        assert!(save_image(&RgbImage::new(0, 0), &path).is_err());
        assert!(!path.exists());
        assert_eq!(file_count(temp_dir.path()), 0);
    }

    #[test]
    fn test_load_missing() {
        let temp_dir = tempdir().unwrap();
        let err = load_image(temp_dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ImageEffectError::Unreadable { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_load_directory() {
        let temp_dir = tempdir().unwrap();
        let err = load_image(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ImageEffectError::Unreadable { .. }));
    }

    #[test]
    fn test_load_corrupt() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ImageEffectError::Decode { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Encoding);
    }

    #[test]
    fn test_load_sniffs_content() {
        let temp_dir = tempdir().unwrap();
        let png = temp_dir.path().join("real.png");
        let img = RgbImage::from_pixel(2, 2, Rgb([40, 50, 60]));
        save_image(&img, &png).unwrap();

        let misnamed = temp_dir.path().join("real.jpg");
        fs::rename(&png, &misnamed).unwrap();
        assert_eq!(load_image(&misnamed).unwrap(), img);
    }
}

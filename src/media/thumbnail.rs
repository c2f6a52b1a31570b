use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Width of cached thumbnails (height follows the aspect ratio)
const THUMBNAIL_WIDTH: u32 = 480;

/// Upper bound for downloaded thumbnails
const MAX_DOWNLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// Thumbnail failures. Carried inside UI messages, so payloads are strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThumbnailError {
    #[error("no thumbnail reference")]
    Empty,
    #[error("download failed: {0}")]
    Download(String),
    #[error("could not read {0}")]
    Read(String),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("could not write cache file: {0}")]
    Cache(String),
    #[error("task join error: {0}")]
    Join(String),
}

/// Resolve a thumbnail and return the cached file path.
///
/// Runs on the blocking pool because downloading and resizing are slow.
pub async fn fetch(movie_id: String, reference: String, cache_dir: PathBuf) -> Result<PathBuf, ThumbnailError> {
    tokio::task::spawn_blocking(move || fetch_blocking(&movie_id, &reference, &cache_dir))
        .await
        .map_err(|e| ThumbnailError::Join(e.to_string()))?
}

/// Blocking implementation of thumbnail resolution
fn fetch_blocking(movie_id: &str, reference: &str, cache_dir: &Path) -> Result<PathBuf, ThumbnailError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(ThumbnailError::Empty);
    }

    let cached = cache_path(cache_dir, movie_id, reference);
    if cached.exists() {
        if image::open(&cached).is_ok() {
            return Ok(cached);
        }
        // Left behind by an interrupted write or a disk error
        tracing::warn!("⚠️  Discarding unreadable cached thumbnail: {}", cached.display());
        fs::remove_file(&cached).map_err(|e| ThumbnailError::Cache(e.to_string()))?;
    }

    let bytes = if is_remote(reference) {
        download(reference)?
    } else {
        fs::read(reference).map_err(|_| ThumbnailError::Read(reference.to_string()))?
    };

    save_thumbnail(&bytes, &cached)?;
    tracing::debug!("📸 Cached thumbnail: {}", cached.display());
    Ok(cached)
}

fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

fn download(url: &str) -> Result<Vec<u8>, ThumbnailError> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| ThumbnailError::Download(e.to_string()))?;

    response
        .body_mut()
        .with_config()
        .limit(MAX_DOWNLOAD_BYTES)
        .read_to_vec()
        .map_err(|e| ThumbnailError::Download(e.to_string()))
}

/// Decode, resize and write the thumbnail as JPEG.
///
/// The JPEG is written to a temp file next to `destination` and renamed into
/// place, so a reader never sees a partial file.
fn save_thumbnail(bytes: &[u8], destination: &Path) -> Result<(), ThumbnailError> {
    let img = image::load_from_memory(bytes).map_err(|e| ThumbnailError::Decode(e.to_string()))?;

    let thumbnail = if img.width() > THUMBNAIL_WIDTH {
        img.resize(THUMBNAIL_WIDTH, u32::MAX, FilterType::Lanczos3)
    } else {
        img
    };

    let dir = destination
        .parent()
        .ok_or_else(|| ThumbnailError::Cache(format!("no parent for {}", destination.display())))?;
    fs::create_dir_all(dir).map_err(|e| ThumbnailError::Cache(e.to_string()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ThumbnailError::Cache(e.to_string()))?;

    // JPEG has no alpha channel
    image::DynamicImage::ImageRgb8(thumbnail.to_rgb8())
        .write_to(&mut tmp, image::ImageFormat::Jpeg)
        .map_err(|e| ThumbnailError::Cache(e.to_string()))?;

    tmp.persist(destination)
        .map_err(|e| ThumbnailError::Cache(e.error.to_string()))?;
    Ok(())
}

/// Expected cache location for a movie thumbnail (doesn't generate anything).
///
/// The file name is derived from both the id and the reference, so distinct
/// ids never share a file and a changed reference is fetched again.
pub fn cache_path(cache_dir: &Path, movie_id: &str, reference: &str) -> PathBuf {
    let key = format!("{movie_id}\n{}", reference.trim());
    let name = uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, key.as_bytes());
    cache_dir.join(format!("{name}.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn write_png(path: &Path, width: u32, height: u32) {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        img.save(path).unwrap();
    }

    #[test]
    fn test_local_file_is_resized_and_cached() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("poster.png");
        write_png(&source, 960, 540);
        let cache = dir.path().join("cache");

        let path = fetch_blocking("movie-1", source.to_str().unwrap(), &cache).unwrap();

        assert_eq!(path, cache_path(&cache, "movie-1", source.to_str().unwrap()));
        let cached = image::open(&path).unwrap();
        assert_eq!(cached.width(), THUMBNAIL_WIDTH);
        assert_eq!(cached.height(), 270);
    }

    #[test]
    fn test_existing_cache_entry_is_reused() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("poster.png");
        write_png(&source, 64, 36);

        let first = fetch_blocking("7", source.to_str().unwrap(), dir.path()).unwrap();
        fs::remove_file(&source).unwrap();
        let second = fetch_blocking("7", source.to_str().unwrap(), dir.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_references() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(fetch_blocking("a", "  ", dir.path()), Err(ThumbnailError::Empty));
        assert!(matches!(
            fetch_blocking("b", "/definitely/not/here.png", dir.path()),
            Err(ThumbnailError::Read(_))
        ));

        let junk = dir.path().join("junk.png");
        fs::write(&junk, b"not an image").unwrap();
        assert!(matches!(
            fetch_blocking("c", junk.to_str().unwrap(), dir.path()),
            Err(ThumbnailError::Decode(_))
        ));
    }

    #[test]
    fn test_cache_keys_do_not_collide() {
        let dir = Path::new("/cache");

        assert_ne!(cache_path(dir, "a b", "x.png"), cache_path(dir, "a_b", "x.png"));
        assert_ne!(cache_path(dir, "1", "old.png"), cache_path(dir, "1", "new.png"));
        assert_eq!(cache_path(dir, "1", "old.png"), cache_path(dir, "1", " old.png "));
        assert!(cache_path(dir, "../evil", "x").starts_with(dir));
    }

    #[test]
    fn test_truncated_cache_entry_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("poster.png");
        write_png(&source, 64, 36);
        let reference = source.to_str().unwrap();

        let cached = cache_path(dir.path(), "9", reference);
        fs::write(&cached, b"\xFF\xD8 truncated").unwrap();

        let path = fetch_blocking("9", reference, dir.path()).unwrap();

        assert_eq!(path, cached);
        assert!(image::open(&path).is_ok(), "cached thumbnail should decode");
    }

    #[test]
    fn test_changed_reference_is_fetched_again() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        write_png(&first, 40, 20);
        write_png(&second, 80, 20);

        let a = fetch_blocking("1", first.to_str().unwrap(), dir.path()).unwrap();
        let b = fetch_blocking("1", second.to_str().unwrap(), dir.path()).unwrap();

        assert_ne!(a, b);
        assert_eq!(image::open(&b).unwrap().width(), 80);
    }

    #[test]
    fn test_failed_decode_leaves_no_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let junk = dir.path().join("junk.png");
        fs::write(&junk, b"not an image").unwrap();
        let reference = junk.to_str().unwrap();

        assert!(fetch_blocking("j", reference, dir.path()).is_err());
        assert!(!cache_path(dir.path(), "j", reference).exists());
    }

    #[tokio::test]
    async fn test_fetch_runs_off_thread() {
        let dir = tempfile::tempdir().unwrap();
        let result = fetch("x".into(), String::new(), dir.path().to_path_buf()).await;
        assert_eq!(result, Err(ThumbnailError::Empty));
    }
}

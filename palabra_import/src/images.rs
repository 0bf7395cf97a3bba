//! Vocabulary image directory management.
//!
//! Images are stored flat, keyed by their filename. The validator and
//! importer only ever see the image store through the [`ImageStore`] trait.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};


#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("unable to list images in {}", .directory_path.display())]
    UnableToListImages {
        directory_path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("unable to save image to {}", .image_path.display())]
    UnableToSaveImage {
        image_path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("unable to delete image at {}", .image_path.display())]
    UnableToDeleteImage {
        image_path: PathBuf,

        #[source]
        error: io::Error,
    },

    #[error("refusing to use unsafe image name: {:?}", .image_name)]
    UnsafeImageName { image_name: String },
}


/// Returns `false` for names that could escape the image directory:
/// empty names, `.`, `..` and anything containing a path separator.
pub fn is_safe_image_name(image_name: &str) -> bool {
    !image_name.is_empty()
        && image_name != "."
        && image_name != ".."
        && !image_name.contains(['/', '\\'])
}


/// Storage of vocabulary images, keyed by filename.
pub trait ImageStore: Send + Sync {
    /// A missing image directory counts as empty.
    fn list_image_names(&self) -> Result<BTreeSet<String>, ImageStoreError>;

    fn contains_image(&self, image_name: &str) -> bool;

    /// Overwrites any existing image with the same name.
    fn save_image(&self, image_name: &str, contents: &[u8]) -> Result<(), ImageStoreError>;

    /// Returns `false` if there was no such image.
    fn delete_image(&self, image_name: &str) -> Result<bool, ImageStoreError>;
}



/// [`ImageStore`] backed by a local directory.
#[derive(Clone, Debug)]
pub struct FilesystemImageStore {
    images_directory_path: PathBuf,
}

impl FilesystemImageStore {
    pub fn new<P>(images_directory_path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            images_directory_path: images_directory_path.into(),
        }
    }

    pub fn images_directory_path(&self) -> &Path {
        &self.images_directory_path
    }

    fn image_path(&self, image_name: &str) -> Result<PathBuf, ImageStoreError> {
        if !is_safe_image_name(image_name) {
            return Err(ImageStoreError::UnsafeImageName {
                image_name: image_name.to_string(),
            });
        }

        Ok(self.images_directory_path.join(image_name))
    }
}

impl ImageStore for FilesystemImageStore {
    fn list_image_names(&self) -> Result<BTreeSet<String>, ImageStoreError> {
        let directory_entries = match fs::read_dir(&self.images_directory_path) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeSet::new()),
            Err(error) => {
                return Err(ImageStoreError::UnableToListImages {
                    directory_path: self.images_directory_path.clone(),
                    error,
                })
            }
        };

        let mut image_names = BTreeSet::new();

        for entry in directory_entries {
            let entry = entry.map_err(|error| ImageStoreError::UnableToListImages {
                directory_path: self.images_directory_path.clone(),
                error,
            })?;

            if !entry.path().is_file() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(image_name) => {
                    image_names.insert(image_name);
                }
                Err(raw_name) => {
                    debug!(
                        file_name = ?raw_name,
                        "Skipping image with a non-UTF-8 filename."
                    );
                }
            }
        }

        Ok(image_names)
    }

    fn contains_image(&self, image_name: &str) -> bool {
        self.image_path(image_name)
            .map(|image_path| image_path.is_file())
            .unwrap_or(false)
    }

    fn save_image(&self, image_name: &str, contents: &[u8]) -> Result<(), ImageStoreError> {
        let image_path = self.image_path(image_name)?;

        fs::create_dir_all(&self.images_directory_path).map_err(|error| {
            ImageStoreError::UnableToSaveImage {
                image_path: image_path.clone(),
                error,
            }
        })?;

        fs::write(&image_path, contents)
            .map_err(|error| ImageStoreError::UnableToSaveImage { image_path, error })
    }

    fn delete_image(&self, image_name: &str) -> Result<bool, ImageStoreError> {
        let image_path = self.image_path(image_name)?;

        if !image_path.is_file() {
            return Ok(false);
        }

        match fs::remove_file(&image_path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(ImageStoreError::UnableToDeleteImage { image_path, error }),
        }
    }
}



/// An image received from a client.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImageUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}


/// All available image names, sorted.
pub fn list_images(image_store: &dyn ImageStore) -> Result<Vec<String>, ImageStoreError> {
    Ok(image_store.list_image_names()?.into_iter().collect())
}


/// Saves every upload, replacing existing images with the same name.
/// Uploads with unsafe names are skipped.
///
/// Returns the names of the saved images, in upload order.
pub fn add_images(
    image_store: &dyn ImageStore,
    uploads: Vec<ImageUpload>,
) -> Result<Vec<String>, ImageStoreError> {
    let mut saved_image_names = Vec::with_capacity(uploads.len());

    for upload in uploads {
        if !is_safe_image_name(&upload.file_name) {
            warn!(
                file_name = upload.file_name,
                "Skipping uploaded image with unsafe name."
            );
            continue;
        }

        image_store.save_image(&upload.file_name, &upload.contents)?;
        saved_image_names.push(upload.file_name);
    }

    Ok(saved_image_names)
}


/// Deletes the named images. Unsafe names are rejected without touching the store,
/// nonexistent images and failed deletions are skipped.
///
/// Returns the names of the images that were actually deleted.
pub fn delete_images<I, S>(image_store: &dyn ImageStore, image_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut deleted_image_names = Vec::new();

    for image_name in image_names {
        let image_name: String = image_name.into();

        if !is_safe_image_name(&image_name) {
            warn!(
                image_name = image_name,
                "Refusing to delete image with unsafe name."
            );
            continue;
        }

        match image_store.delete_image(&image_name) {
            Ok(true) => deleted_image_names.push(image_name),
            Ok(false) => {}
            Err(error) => {
                warn!(
                    image_name = image_name,
                    error = ?error,
                    "Failed to delete image, skipping."
                );
            }
        }
    }

    deleted_image_names
}

use uuid::Uuid;

use crate::domain::{
    common::{PipelineConfig, entities::app_errors::CoreError},
    storage::value_objects::ImageFile,
};

/// Check a candidate photo against the accepted MIME types and size limit.
pub fn ensure_valid_image(image: &ImageFile, config: &PipelineConfig) -> Result<(), CoreError> {
    let mime_type = image.mime_type.trim().to_ascii_lowercase();
    if !config
        .accepted_mime_types
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(&mime_type))
    {
        return Err(CoreError::InvalidFileType(image.mime_type.clone()));
    }

    if image.len() > config.max_image_bytes {
        return Err(CoreError::FileTooLarge {
            size: image.len(),
            max: config.max_image_bytes,
        });
    }

    if image.is_empty() {
        return Err(CoreError::Invalid("image file is empty".to_string()));
    }

    Ok(())
}

/// Object key derived from the image content, so re-uploading the same photo
/// lands on the same object.
pub fn food_image_object_key(user_id: Uuid, image: &ImageFile) -> String {
    format!(
        "{}/{}.{}",
        user_id,
        image.checksum_sha256(),
        image.extension()
    )
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    fn image(mime_type: &str, size: usize) -> ImageFile {
        ImageFile::new("meal", mime_type, Bytes::from(vec![7u8; size]))
    }

    #[test]
    fn accepts_every_supported_type_up_to_the_limit() {
        let config = PipelineConfig::default();
        for mime_type in ["image/jpeg", "image/jpg", "image/png", "image/webp", "IMAGE/PNG"] {
            assert_eq!(ensure_valid_image(&image(mime_type, 1024), &config), Ok(()));
        }
        assert_eq!(
            ensure_valid_image(&image("image/jpeg", config.max_image_bytes), &config),
            Ok(())
        );
    }

    #[test]
    fn rejects_other_types_and_oversized_files() {
        let config = PipelineConfig::default();

        assert_eq!(
            ensure_valid_image(&image("image/gif", 10), &config),
            Err(CoreError::InvalidFileType("image/gif".to_string()))
        );
        assert_eq!(
            ensure_valid_image(&image("image/png", config.max_image_bytes + 1), &config),
            Err(CoreError::FileTooLarge {
                size: config.max_image_bytes + 1,
                max: config.max_image_bytes,
            })
        );
        assert!(ensure_valid_image(&image("image/png", 0), &config).is_err());
    }

    #[test]
    fn object_key_is_content_addressed() {
        let user_id = Uuid::new_v4();
        let a = ImageFile::new("a.png", "image/png", Bytes::from_static(b"same bytes"));
        let b = ImageFile::new("b.png", "image/png", Bytes::from_static(b"same bytes"));

        assert_eq!(food_image_object_key(user_id, &a), food_image_object_key(user_id, &b));
        assert!(food_image_object_key(user_id, &a).ends_with(".png"));
        // the bucket already names the asset kind, keys start at the user
        assert!(food_image_object_key(user_id, &a).starts_with(&format!("{user_id}/")));
    }
}

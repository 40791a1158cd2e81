//! Editable copy of the user's contact fields, plus a photo that is never
//! persisted.

use data_encoding::BASE64;
use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;

use crate::error::{DomainError, DomainResult};
use crate::models::User;

pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&User> for ProfileDraft {
    fn from(user: &User) -> Self {
        ProfileDraft {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Field changes typed into the edit form. Absent fields are left alone.
#[derive(Debug, Deserialize, Default, Clone, JsonSchema)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Clone, JsonSchema)]
pub struct ImageUpload {
    pub mime_type: String,
    /// Base64 file contents, without a `data:` prefix.
    pub data: String,
}

#[derive(Debug, Serialize, Clone, JsonSchema)]
pub struct ProfileSnapshot {
    pub user: User,
    pub editing: bool,
    pub draft: Option<ProfileDraft>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileEditor {
    draft: Option<ProfileDraft>,
    image: Option<String>,
    max_image_bytes: usize,
}

impl Default for ProfileEditor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGE_BYTES)
    }
}

impl ProfileEditor {
    pub fn new(max_image_bytes: usize) -> Self {
        ProfileEditor {
            draft: None,
            image: None,
            max_image_bytes,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        self.draft.as_ref()
    }

    /// Current photo as a `data:` URL.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn snapshot(&self, user: &User) -> ProfileSnapshot {
        ProfileSnapshot {
            user: user.clone(),
            editing: self.is_editing(),
            draft: self.draft.clone(),
            image: self.image.clone(),
        }
    }

    pub fn begin_edit(&mut self, user: &User) -> &ProfileDraft {
        self.draft.insert(ProfileDraft::from(user))
    }

    pub fn update_draft(&mut self, patch: ProfilePatch) -> DomainResult<&ProfileDraft> {
        let draft = self.draft.as_mut().ok_or(DomainError::NotEditing)?;
        if let Some(name) = patch.name {
            draft.name = name;
        }
        if let Some(email) = patch.email {
            draft.email = email;
        }
        if let Some(phone) = patch.phone {
            draft.phone = phone;
        }
        Ok(&*draft)
    }

    /// Merges the draft into `user` and leaves edit mode. `id` and `type` are
    /// never touched. The caller is responsible for persisting the result.
    pub fn save(&mut self, user: &User) -> DomainResult<User> {
        let draft = self.draft.take().ok_or(DomainError::NotEditing)?;
        Ok(User {
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            ..user.clone()
        })
    }

    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Replaces the photo only if the upload is an image within the size
    /// limit and decodes cleanly. Otherwise the previous photo stays.
    pub fn upload_image(&mut self, upload: ImageUpload) -> DomainResult<&str> {
        if !upload.mime_type.starts_with("image/") {
            return Err(DomainError::UnsupportedImage {
                mime_type: upload.mime_type,
            });
        }

        let bytes = BASE64
            .decode(upload.data.trim().as_bytes())
            .map_err(|_| DomainError::ImageRead)?;
        if bytes.len() > self.max_image_bytes {
            return Err(DomainError::ImageTooLarge {
                size: bytes.len(),
                max_mb: self.max_image_bytes / (1024 * 1024),
            });
        }

        let url = format!(
            "data:{};base64,{}",
            upload.mime_type,
            BASE64.encode(&bytes)
        );
        Ok(self.image.insert(url).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    fn user() -> User {
        User {
            id: "2".to_string(),
            name: "Jane Worker".to_string(),
            email: "jane@example.com".to_string(),
            phone: "9000000000".to_string(),
            user_type: UserType::Worker,
        }
    }

    fn png(bytes: &[u8]) -> ImageUpload {
        ImageUpload {
            mime_type: "image/png".to_string(),
            data: BASE64.encode(bytes),
        }
    }

    #[test]
    fn save_merges_editable_fields_only() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit(&user());
        editor
            .update_draft(ProfilePatch {
                name: Some("Jane Doe".to_string()),
                phone: Some("9111111111".to_string()),
                ..Default::default()
            })
            .unwrap();

        let saved = editor.save(&user()).unwrap();
        assert_eq!(saved.name, "Jane Doe");
        assert_eq!(saved.phone, "9111111111");
        assert_eq!(saved.email, "jane@example.com");
        assert_eq!(saved.id, "2");
        assert_eq!(saved.user_type, UserType::Worker);
        assert!(!editor.is_editing());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut editor = ProfileEditor::default();
        editor.begin_edit(&user());
        editor
            .update_draft(ProfilePatch {
                name: Some("Someone Else".to_string()),
                ..Default::default()
            })
            .unwrap();

        editor.cancel();
        assert!(editor.draft().is_none());
        assert!(matches!(editor.save(&user()), Err(DomainError::NotEditing)));

        // Re-entering edit mode starts from the saved user again.
        assert_eq!(editor.begin_edit(&user()).name, "Jane Worker");
    }

    #[test]
    fn edits_outside_edit_mode_are_rejected() {
        let mut editor = ProfileEditor::default();
        assert!(matches!(
            editor.update_draft(ProfilePatch::default()),
            Err(DomainError::NotEditing)
        ));
    }

    #[test]
    fn image_upload_becomes_a_data_url() {
        let mut editor = ProfileEditor::default();
        let url = editor.upload_image(png(b"\x89PNG")).unwrap().to_string();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(editor.image(), Some(url.as_str()));
    }

    #[test]
    fn failed_uploads_keep_the_previous_image() {
        let mut editor = ProfileEditor::new(8);
        editor.upload_image(png(b"small")).unwrap();
        let before = editor.image().map(str::to_string);

        let not_image = ImageUpload {
            mime_type: "application/pdf".to_string(),
            data: BASE64.encode(b"%PDF"),
        };
        assert!(matches!(
            editor.upload_image(not_image),
            Err(DomainError::UnsupportedImage { .. })
        ));
        assert!(matches!(
            editor.upload_image(png(b"far too many bytes")),
            Err(DomainError::ImageTooLarge { .. })
        ));
        assert!(matches!(
            editor.upload_image(ImageUpload {
                mime_type: "image/png".to_string(),
                data: "!!not base64!!".to_string(),
            }),
            Err(DomainError::ImageRead)
        ));

        assert_eq!(editor.image().map(str::to_string), before);
    }
}

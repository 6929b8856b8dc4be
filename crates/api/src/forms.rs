//! Shared multipart form reader for the image-bearing resource endpoints.
//!
//! The admin screens submit `multipart/form-data` with text fields plus at
//! most one binary `image` part. All three resource handler sets
//! (carousel, post, team) parse through this one reader instead of
//! hand-duplicating field extraction.

use std::collections::HashMap;

use axum::extract::multipart::Multipart;
use hub_core::error::CoreError;

use crate::error::{AppError, AppResult};

/// Field name of the binary image part.
pub const IMAGE_FIELD: &str = "image";

/// A fully drained multipart submission: text fields by name, plus the
/// optional image bytes.
///
/// Empty text values are treated as absent, matching the admin forms which
/// submit every input whether or not it was filled in.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
    image: Option<Vec<u8>>,
}

impl SubmittedForm {
    /// Drain a multipart stream into memory.
    ///
    /// Malformed multipart input is a client error. A present-but-empty
    /// image part counts as no image.
    pub async fn read(multipart: &mut Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == IMAGE_FIELD {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !data.is_empty() {
                    form.image = Some(data.to_vec());
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// A text field's value, if present and non-empty.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// A required text field's value, or a validation error naming it.
    pub fn require(&self, name: &str) -> AppResult<&str> {
        self.text(name)
            .ok_or_else(|| AppError::Core(CoreError::Validation(format!("{name} is required"))))
    }

    /// A checkbox-style field: literal `"true"` is true, anything else
    /// (including absent) is false.
    pub fn flag(&self, name: &str) -> bool {
        self.text(name) == Some("true")
    }

    /// Like [`flag`](Self::flag), but distinguishes an absent field from a
    /// submitted false, for partial updates.
    pub fn flag_opt(&self, name: &str) -> Option<bool> {
        self.text(name).map(|v| v == "true")
    }

    /// Take ownership of the image bytes, or a validation error.
    pub fn require_image(&mut self) -> AppResult<Vec<u8>> {
        self.image
            .take()
            .ok_or_else(|| AppError::Core(CoreError::Validation("image file is required".into())))
    }

    /// Take ownership of the image bytes if present.
    pub fn take_image(&mut self) -> Option<Vec<u8>> {
        self.image.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)], image: Option<&[u8]>) -> SubmittedForm {
        SubmittedForm {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image: image.map(<[u8]>::to_vec),
        }
    }

    #[test]
    fn empty_values_count_as_absent() {
        let form = form_with(&[("title", "")], None);
        assert_eq!(form.text("title"), None);
        assert!(form.require("title").is_err());
    }

    #[test]
    fn require_names_the_missing_field() {
        let form = form_with(&[], None);
        let err = form.require("quote").unwrap_err();
        assert!(err.to_string().contains("quote is required"));
    }

    #[test]
    fn flags_parse_the_true_literal_only() {
        let form = form_with(&[("black", "true"), ("other", "yes")], None);
        assert!(form.flag("black"));
        assert!(!form.flag("other"));
        assert!(!form.flag("missing"));

        assert_eq!(form.flag_opt("black"), Some(true));
        assert_eq!(form.flag_opt("other"), Some(false));
        assert_eq!(form.flag_opt("missing"), None);
    }

    #[test]
    fn require_image_takes_the_bytes() {
        let mut form = form_with(&[], Some(b"png-bytes"));
        assert_eq!(form.require_image().unwrap(), b"png-bytes");
        assert!(form.require_image().is_err(), "bytes were moved out");
    }
}

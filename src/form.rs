use std::collections::HashMap;

use axum::http::HeaderMap;

use crate::upload::UploadedFile;

/// Text fields and file parts of a decoded `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Remove a text field, rejecting it when absent or blank.
    pub fn take_required(&mut self, name: &str) -> Result<String, String> {
        match self.fields.remove(name) {
            Some(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(format!("Missing required field: {name}")),
        }
    }

    pub fn take_optional(&mut self, name: &str) -> String {
        self.fields.remove(name).unwrap_or_default()
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

/// Parse multipart form data using multer.
///
/// Parts carrying a filename are collected as files, everything else as text.
pub async fn parse_multipart(headers: &HeaderMap, body: bytes::Bytes) -> Result<MultipartForm, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = MultipartForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("unknown").to_string();

        if let Some(file_name) = field.file_name().map(str::to_string) {
            let content_type = field.content_type().map(|m| m.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| format!("File read error: {e}"))?;
            form.files.insert(
                name,
                UploadedFile {
                    file_name: Some(file_name),
                    content_type,
                    data,
                },
            );
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| format!("Field read error: {e}"))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

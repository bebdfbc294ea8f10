use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{self, SubmissionMode, MAX_ATTACHMENTS, MAX_ATTACHMENT_BYTES};

use super::form::{Attachment, FormState};

#[derive(Debug, Error, PartialEq)]
pub enum SubmissionError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Could not encode request: {0}")]
    Encode(String),
    #[error("Too many files attached ({count}), the limit is {limit}")]
    TooManyFiles { count: usize, limit: usize },
    #[error("Attachments are too large ({bytes} bytes), the limit is {limit} bytes")]
    AttachmentsTooLarge { bytes: u64, limit: u64 },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Rejects attachment sets the inquiry endpoint will not take.
pub fn check_attachments(files: &[Attachment]) -> Result<(), SubmissionError> {
    if files.len() > MAX_ATTACHMENTS {
        return Err(SubmissionError::TooManyFiles {
            count: files.len(),
            limit: MAX_ATTACHMENTS,
        });
    }
    let bytes: u64 = files.iter().map(|f| f.size_bytes).sum();
    if bytes > MAX_ATTACHMENT_BYTES {
        return Err(SubmissionError::AttachmentsTooLarge {
            bytes,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct Submitter {
    mode: SubmissionMode,
}

impl Default for Submitter {
    fn default() -> Self {
        Self::new(config::submission_mode())
    }
}

impl Submitter {
    pub fn new(mode: SubmissionMode) -> Self {
        Self { mode }
    }

    pub async fn submit_inquiry(&self, payload: FormState) -> Result<(), SubmissionError> {
        check_attachments(&payload.files)?;
        self.send(config::INQUIRY_ENDPOINT, &payload).await
    }

    pub async fn send<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(), SubmissionError> {
        match &self.mode {
            SubmissionMode::Simulated { delay_ms } => {
                gloo_timers::future::TimeoutFuture::new(*delay_ms).await;
                log::info!("Simulated submission to {} finished", endpoint);
                Ok(())
            }
            SubmissionMode::Http { base_url } => {
                let url = format!("{}{}", base_url, endpoint);
                let request = Request::post(&url)
                    .json(body)
                    .map_err(|e| SubmissionError::Encode(e.to_string()))?;

                let response = request.send().await.map_err(|e| {
                    gloo_console::error!("Request to", url.clone(), "failed:", e.to_string());
                    SubmissionError::Network(e.to_string())
                })?;

                if response.ok() {
                    return Ok(());
                }

                let status = response.status();
                let message = match response.json::<ErrorResponse>().await {
                    Ok(err_resp) => err_resp.error,
                    Err(_) => response.status_text(),
                };
                gloo_console::log!("Submission rejected with status", status);
                Err(SubmissionError::Rejected { status, message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(size_bytes: u64) -> Attachment {
        Attachment {
            name: "file.bin".to_string(),
            size_bytes,
            content_type: "application/octet-stream".to_string(),
        }
    }

    #[test]
    fn attachments_within_limits_pass() {
        assert_eq!(check_attachments(&[]), Ok(()));
        let files: Vec<_> = (0..MAX_ATTACHMENTS).map(|_| sized(1024)).collect();
        assert_eq!(check_attachments(&files), Ok(()));
    }

    #[test]
    fn too_many_files_are_rejected() {
        let files: Vec<_> = (0..=MAX_ATTACHMENTS).map(|_| sized(1)).collect();
        assert_eq!(
            check_attachments(&files),
            Err(SubmissionError::TooManyFiles {
                count: MAX_ATTACHMENTS + 1,
                limit: MAX_ATTACHMENTS
            })
        );
    }

    #[test]
    fn oversized_attachments_are_rejected() {
        let files = vec![sized(MAX_ATTACHMENT_BYTES), sized(1)];
        assert!(matches!(
            check_attachments(&files),
            Err(SubmissionError::AttachmentsTooLarge { bytes, .. }) if bytes == MAX_ATTACHMENT_BYTES + 1
        ));
    }

    #[test]
    fn errors_render_for_the_review_banner() {
        let err = SubmissionError::Rejected {
            status: 422,
            message: "email bounced".to_string(),
        };
        assert_eq!(err.to_string(), "Submission rejected (422): email bounced");
    }
}

/// How inquiries and quote requests leave the browser.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionMode {
    /// Wait `delay_ms` and report success. Used while no inquiry API exists.
    Simulated { delay_ms: u32 },
    /// POST JSON to `{base_url}{endpoint}`.
    Http { base_url: String },
}

pub const INQUIRY_ENDPOINT: &str = "/api/inquiries";
pub const QUOTE_ENDPOINT: &str = "/api/quotes";

pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

// Attachment limits enforced at the submission boundary.
pub const MAX_ATTACHMENTS: usize = 10;
pub const MAX_ATTACHMENT_BYTES: u64 = 25 * 1024 * 1024;

pub const HERO_ROTATION_MS: u32 = 3_000;
pub const CAROUSEL_TICK_MS: u32 = 16;
pub const DEMO_FRAME_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Set `CODECRAFT_SUBMIT=http` at build time to send inquiries to the backend.
pub fn submission_mode() -> SubmissionMode {
    match option_env!("CODECRAFT_SUBMIT") {
        Some("http") => SubmissionMode::Http { base_url: get_backend_url().to_string() },
        _ => SubmissionMode::Simulated { delay_ms: SIMULATED_SUBMIT_DELAY_MS },
    }
}

use thiserror::Error;

pub const MISSING_KEY_HINT: &str = "GOOGLE_API_KEY is not set. Add `GOOGLE_API_KEY=your_key` to a .env file \
    next to the binary, or export it in your shell: export GOOGLE_API_KEY=\"your_key\"";

/// Every way a single lookup run can fail. None of these are retried.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid input: {0}")]
    Input(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("failed to fetch restaurants: {0}")]
    Fetch(String),

    #[error("unexpected response from places API: {0}")]
    Parse(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    pub fn missing_credential() -> Self {
        LookupError::Auth(MISSING_KEY_HINT.to_string())
    }

    /// Process exit code for this kind of failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LookupError::Input(_) => 2,
            LookupError::Auth(_) => 3,
            LookupError::Fetch(_) => 4,
            LookupError::Parse(_) => 5,
            LookupError::Io(_) => 1,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest reports both transport and body-decoding failures through one type
        if e.is_decode() {
            LookupError::Parse(e.to_string())
        } else {
            LookupError::Fetch(e.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Parse(e.to_string())
    }
}

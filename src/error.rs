use thiserror::Error;

/// All errors that the crate can generate. None of them are recoverable
/// mid-document: a build that fails is abandoned and no file is written.
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// The configuration file could not be parsed
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    /// An unknown style key, an unsupported font name or an invalid value
    Configuration(String),

    #[error("line {line}: `{record}` is not a valid record, expected format `{expected}`")]
    /// A content directive did not match its grammar
    InputGrammar {
        line: usize,
        record: String,
        expected: &'static str,
    },

    #[error("unsupported layout: {0}")]
    /// The requested layout is explicitly not supported (e.g. multi-row tables)
    UnsupportedLayout(String),

    #[error("no page has been started")]
    /// A drawing primitive was issued before any page was begun
    PageMissing,

    #[error("{0} was referenced before it was written")]
    /// A PDF object was referenced before it was generated
    DanglingReference(String),

    #[error("invalid text state: {0}")]
    /// Text primitives were issued outside of (or nested inside) a text block
    TextState(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please enter or upload menu text first")]
    EmptyMenu,

    #[error("Analysis cancelled")]
    Cancelled,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AllergyError {
    #[error("Allergy name is empty")]
    Empty,

    #[error("{0} is already in your allergy list")]
    Duplicate(String),

    #[error("No allergy with id or name {0}")]
    NotFound(String),

    #[error("{0} is not one of the common allergies")]
    NotCommon(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Image OCR is not yet implemented. Please type the menu text manually for now.")]
    ImageNotSupported,

    #[error("Unsupported file {0}, please upload a text file")]
    UnsupportedFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use crate::model::RootType;
use thiserror::Error;

/// Result type alias using SarfError
pub type Result<T> = std::result::Result<T, SarfError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    MalformedRoot,
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedRoot => "ERR_MALFORMED_ROOT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity, message) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    line: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            line: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (root letters or scheme name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add source line context (1-based)
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(line) = self.line {
            write!(f, " (line: {})", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for morphology operations
///
/// Index and table primitives never return these; they report outcomes as
/// `bool`/`Option`. These variants are the "error marker" results of the
/// engine and the command layer built on top of it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SarfError {
    /// Root does not have exactly three letters
    #[error("Malformed root '{letters}': expected 3 letters, found {len}")]
    MalformedRoot { letters: String, len: usize },

    /// Scheme name is not part of the pattern table for this root type
    #[error("Scheme '{name}' is not defined for {root_type} roots")]
    UnknownScheme { name: String, root_type: RootType },

    /// Root not present in the index
    #[error("Root not found: {letters}")]
    RootNotFound { letters: String },

    /// Scheme not present in the scheme table
    #[error("Scheme not found: {name}")]
    SchemeNotFound { name: String },

    /// Root already present in the index
    #[error("Root already exists: {letters}")]
    RootAlreadyExists { letters: String },

    /// Scheme already present in the scheme table
    #[error("Scheme already exists: {name}")]
    SchemeAlreadyExists { name: String },

    /// Scheme name or pattern rejected (empty, whitespace-only)
    #[error("Invalid scheme: {reason}")]
    InvalidScheme { reason: String },

    /// Word rejected before any lookup (empty, whitespace-only)
    #[error("Invalid word: {reason}")]
    InvalidWord { reason: String },
}

impl From<SarfError> for ExError {
    fn from(err: SarfError) -> Self {
        match err {
            SarfError::MalformedRoot { letters, len } => ExError::new(ExErrorKind::MalformedRoot)
                .with_entity_id(letters)
                .with_message(format!("expected 3 letters, found {}", len)),
            SarfError::UnknownScheme { name, root_type } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message(format!("not defined for {} roots", root_type)),
            SarfError::RootNotFound { letters } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(letters)
                .with_message("Root not found"),
            SarfError::SchemeNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(name)
                .with_message("Scheme not found"),
            SarfError::RootAlreadyExists { letters } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(letters)
                .with_message("Root already exists"),
            SarfError::SchemeAlreadyExists { name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(name)
                .with_message("Scheme already exists"),
            SarfError::InvalidScheme { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
            SarfError::InvalidWord { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

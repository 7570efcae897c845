use patchkit_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using PatchError
pub type Result<T> = std::result::Result<T, PatchError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on
/// programmatically and that log events carry as `err.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Patch application
    PropertyNotFound,
    ReferenceUnresolved,

    // Structured input
    InvalidInput,
    UnknownFields,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::PropertyNotFound => "ERR_PROPERTY_NOT_FOUND",
            ExErrorKind::ReferenceUnresolved => "ERR_REFERENCE_UNRESOLVED",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::UnknownFields => "ERR_UNKNOWN_FIELDS",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the context needed to debug a failed
/// patch call: the operation, the domain type and mutation path involved,
/// and correlation ids when the caller supplied them.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            path: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add domain type context
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add mutation path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

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

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
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
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Hard failures raised while applying a patch
///
/// Anything not listed here (a value that does not coerce to the declared
/// type, an embedded entry that does not decode) is tolerated and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    /// A path segment does not name a registered property
    #[error("Property not found on {type_name}: {path}")]
    PropertyNotFound { type_name: String, path: String },

    /// An identity token could not be resolved to a live object
    #[error("Cannot resolve {type_name} with uid '{uid}' referenced by {path}")]
    ReferenceResolution {
        type_name: String,
        uid: String,
        path: String,
    },
}

/// Errors raised by a codec while decoding a structured input tree
#[derive(Error, Debug)]
pub enum CodecError {
    /// The tree does not decode into the target type
    #[error("Malformed input for {type_name}: {message}")]
    Malformed { type_name: String, message: String },

    /// The tree carries fields the target type does not declare
    #[error("Unknown fields in input for {type_name}: {}", .paths.join(", "))]
    UnknownFields {
        type_name: String,
        paths: Vec<String>,
    },

    /// Reading the tree from a file or stream failed
    #[error("Failed to read structured input: {0}")]
    Io(#[from] std::io::Error),
}

/// A value that cannot be converted into a property's declared type
///
/// Never escapes `apply`; the applier logs it and leaves the property as is.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("expected {expected}, found {found}")]
pub struct CoercionError {
    pub expected: &'static str,
    pub found: String,
}

impl CoercionError {
    pub fn new(expected: &'static str, found: impl Into<String>) -> Self {
        Self {
            expected,
            found: found.into(),
        }
    }
}

impl From<PatchError> for ExError {
    fn from(err: PatchError) -> Self {
        match err {
            PatchError::PropertyNotFound { type_name, path } => {
                ExError::new(ExErrorKind::PropertyNotFound)
                    .with_op("apply")
                    .with_type_name(type_name)
                    .with_path(path)
                    .with_message("Property not found")
            }
            PatchError::ReferenceResolution {
                type_name,
                uid,
                path,
            } => ExError::new(ExErrorKind::ReferenceUnresolved)
                .with_op("apply")
                .with_type_name(type_name)
                .with_path(path)
                .with_message(format!("No object with uid '{}'", uid)),
        }
    }
}

impl From<CodecError> for ExError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Malformed { type_name, message } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("parse")
                    .with_type_name(type_name)
                    .with_message(message)
            }
            CodecError::UnknownFields { type_name, paths } => {
                ExError::new(ExErrorKind::UnknownFields)
                    .with_op("parse")
                    .with_type_name(type_name)
                    .with_message(paths.join(", "))
            }
            CodecError::Io(e) => ExError::new(ExErrorKind::Io)
                .with_op("read_tree")
                .with_message(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            ExErrorKind::PropertyNotFound.code(),
            "ERR_PROPERTY_NOT_FOUND"
        );
        assert_eq!(
            ExErrorKind::ReferenceUnresolved.code(),
            "ERR_REFERENCE_UNRESOLVED"
        );
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::PropertyNotFound)
            .with_op("apply")
            .with_type_name("dataElement")
            .with_path("nope");
        let s = err.to_string();
        assert!(s.starts_with("[ERR_PROPERTY_NOT_FOUND]"));
        assert!(s.contains("dataElement"));
        assert!(s.contains("nope"));
    }

    #[test]
    fn test_coercion_error_message() {
        let err = CoercionError::new("integer", "\"abc\"");
        assert_eq!(err.to_string(), "expected integer, found \"abc\"");
    }
}

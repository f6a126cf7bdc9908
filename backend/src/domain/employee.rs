//! Employee directory records.
//!
//! Names and roles are validated once at the boundary; every other layer
//! handles the typed wrappers defined here.

use std::fmt;

/// Maximum number of characters accepted for a name or role.
pub const EMPLOYEE_TEXT_MAX: usize = 255;

/// Validation failures raised while constructing employee values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// The name is empty or only whitespace.
    EmptyName,
    /// The name exceeds the character limit.
    NameTooLong {
        /// Largest accepted character count.
        max: usize,
    },
    /// The role is empty or only whitespace.
    EmptyRole,
    /// The role exceeds the character limit.
    RoleTooLong {
        /// Largest accepted character count.
        max: usize,
    },
}

impl EmployeeValidationError {
    /// Request field the failure relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::EmptyRole | Self::RoleTooLong { .. } => "role",
        }
    }

    /// Stable machine-readable failure code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyName | Self::EmptyRole => "empty_value",
            Self::NameTooLong { .. } | Self::RoleTooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyRole => write!(f, "role must not be empty"),
            Self::RoleTooLong { max } => write!(f, "role must be at most {max} characters"),
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

fn validate_text(
    value: String,
    empty: EmployeeValidationError,
    too_long: EmployeeValidationError,
) -> Result<String, EmployeeValidationError> {
    if value.trim().is_empty() {
        return Err(empty);
    }
    if value.chars().count() > EMPLOYEE_TEXT_MAX {
        return Err(too_long);
    }
    Ok(value)
}

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn new(value: i32) -> Self { Self(value) }

    /// Raw identifier value.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> i32 { self.0 }
}

impl From<i32> for EmployeeId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employee display name.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - At most [`EMPLOYEE_TEXT_MAX`] characters.
///
/// The value is stored as supplied; surrounding whitespace is not stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeName(String);

impl EmployeeName {
    /// Validate and wrap a name.
    ///
    /// # Examples
    /// ```
    /// use employee_directory::domain::EmployeeName;
    ///
    /// let name = EmployeeName::new("Ada").expect("valid name");
    /// assert_eq!(name.as_ref(), "Ada");
    /// assert!(EmployeeName::new("  ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        validate_text(
            value.into(),
            EmployeeValidationError::EmptyName,
            EmployeeValidationError::NameTooLong {
                max: EMPLOYEE_TEXT_MAX,
            },
        )
        .map(Self)
    }
}

impl AsRef<str> for EmployeeName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmployeeName> for String {
    fn from(value: EmployeeName) -> Self {
        value.0
    }
}

impl fmt::Display for EmployeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Employee job role. Shares the invariants of [`EmployeeName`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeRole(String);

impl EmployeeRole {
    /// Validate and wrap a role.
    pub fn new(value: impl Into<String>) -> Result<Self, EmployeeValidationError> {
        validate_text(
            value.into(),
            EmployeeValidationError::EmptyRole,
            EmployeeValidationError::RoleTooLong {
                max: EMPLOYEE_TEXT_MAX,
            },
        )
        .map(Self)
    }
}

impl AsRef<str> for EmployeeRole {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmployeeRole> for String {
    fn from(value: EmployeeRole) -> Self {
        value.0
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated field values for an employee that has no identifier yet.
///
/// Used both for creation and for whole-record replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    name: EmployeeName,
    role: EmployeeRole,
}

impl EmployeeDraft {
    /// Pair an already validated name and role.
    #[must_use]
    pub const fn new(name: EmployeeName, role: EmployeeRole) -> Self {
        Self { name, role }
    }

    /// Validate raw name and role values together.
    ///
    /// The name is checked first, so a request with both fields invalid
    /// reports the name failure.
    pub fn try_from_parts(
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Result<Self, EmployeeValidationError> {
        Ok(Self::new(EmployeeName::new(name)?, EmployeeRole::new(role)?))
    }

    /// Validated name.
    #[must_use]
    pub const fn name(&self) -> &EmployeeName {
        &self.name
    }

    /// Validated role.
    #[must_use]
    pub const fn role(&self) -> &EmployeeRole {
        &self.role
    }
}

/// Persisted employee record.
///
/// # Examples
/// ```
/// use employee_directory::domain::{Employee, EmployeeDraft, EmployeeId};
///
/// let draft = EmployeeDraft::try_from_parts("Ada", "Engineer").expect("valid draft");
/// let employee = Employee::from_draft(EmployeeId::new(1), draft);
/// assert_eq!(employee.name().as_ref(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: EmployeeId,
    name: EmployeeName,
    role: EmployeeRole,
}

impl Employee {
    /// Assemble a record from its parts.
    #[must_use]
    pub const fn new(id: EmployeeId, name: EmployeeName, role: EmployeeRole) -> Self {
        Self { id, name, role }
    }

    /// Attach a store-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        let EmployeeDraft { name, role } = draft;
        Self { id, name, role }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &EmployeeName {
        &self.name
    }

    /// Job role.
    #[must_use]
    pub const fn role(&self) -> &EmployeeRole {
        &self.role
    }
}

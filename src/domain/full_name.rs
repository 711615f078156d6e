//! FullName value object.

use super::errors::ValidationError;
use std::fmt;

/// A fully qualified protobuf name, e.g. `net.jubjubnest.ObjectId`.
///
/// Stored without the leading dot protoc puts on absolute type references,
/// which is also the form protoc expects in insertion point names.
///
/// # Example
///
/// ```
/// use protoc_gen_constructors::domain::FullName;
///
/// let name = FullName::new(".net.jubjubnest.ObjectId").unwrap();
/// assert_eq!(name.as_str(), "net.jubjubnest.ObjectId");
/// assert_eq!(name.short_name(), "ObjectId");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName(String);

impl FullName {
    /// Create a new FullName, validating every dot separated segment.
    ///
    /// A single leading dot is accepted and dropped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name,
    /// `ValidationError::EmptySegment` for names like `a..b` and
    /// `ValidationError::InvalidCharacter` for segments that are not identifiers.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.strip_prefix('.').unwrap_or(&name);

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        for segment in trimmed.split('.') {
            if segment.is_empty() {
                return Err(ValidationError::EmptySegment(name));
            }
            if !Self::is_identifier(segment) {
                return Err(ValidationError::InvalidCharacter(name));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Qualify `name` with `package`. An empty package leaves the name as is.
    pub fn in_package(package: &str, name: &str) -> Result<Self, ValidationError> {
        if package.is_empty() {
            Self::new(name)
        } else {
            Self::new(format!("{}.{}", package, name))
        }
    }

    fn is_identifier(segment: &str) -> bool {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Iterate the dot separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The last segment.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The enclosing scope, `None` for a single segment name.
    pub fn parent(&self) -> Option<FullName> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| FullName(parent.to_string()))
    }

    /// Append a relative, possibly dotted, name to this scope.
    pub fn child(&self, name: &str) -> Result<FullName, ValidationError> {
        Self::new(format!("{}.{}", self.0, name))
    }

    /// Segments of this name below `package`, or `None` if the name does not
    /// live in that package.
    ///
    /// Names equal to the package itself are not types and yield `None`.
    pub fn strip_package(&self, package: &str) -> Option<Vec<&str>> {
        let relative = if package.is_empty() {
            self.0.as_str()
        } else {
            self.0.strip_prefix(package)?.strip_prefix('.')?
        };

        if relative.is_empty() {
            return None;
        }

        Some(relative.split('.').collect())
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

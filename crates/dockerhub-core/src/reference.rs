//! Repository reference parsing and validation

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Namespace assumed when a reference has no explicit one (official images).
pub const DEFAULT_NAMESPACE: &str = "library";

/// Maximum length of a namespace or repository name component, in bytes.
pub const MAX_COMPONENT_LENGTH: usize = 255;

/// Errors that can occur while parsing a repository reference
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RefError {
    #[error("empty repository reference")]
    Empty,

    #[error("too many path segments in '{0}': expected 'name' or 'namespace/name'")]
    TooManySegments(String),

    #[error("empty {0} component")]
    EmptyComponent(&'static str),

    #[error("invalid character {found:?} in {component} '{value}'")]
    InvalidCharacter {
        component: &'static str,
        value: String,
        found: char,
    },

    #[error("{component} '{value}' exceeds {max} bytes", max = MAX_COMPONENT_LENGTH)]
    TooLong {
        component: &'static str,
        value: String,
    },
}

/// A validated Docker Hub repository reference
///
/// References have the format:
/// ```text
/// <namespace>/<name>
/// ```
/// A bare `<name>` is shorthand for an official image under the
/// [`DEFAULT_NAMESPACE`].
///
/// # Examples
///
/// ```rust
/// use dockerhub_core::RepoRef;
///
/// let repo = RepoRef::parse("acme/widget").unwrap();
/// assert_eq!(repo.namespace(), "acme");
/// assert_eq!(repo.name(), "widget");
///
/// let official = RepoRef::parse("nginx").unwrap();
/// assert_eq!(official.to_string(), "library/nginx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    namespace: String,
    name: String,
}

impl RepoRef {
    /// Create a reference from explicit namespace and name components.
    ///
    /// # Errors
    ///
    /// Returns an error if either component is empty, too long, or contains
    /// characters outside `[a-z0-9._-]`.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Result<Self, RefError> {
        let namespace = namespace.into();
        let name = name.into();

        validate_component("namespace", &namespace)?;
        validate_component("name", &name)?;

        Ok(Self { namespace, name })
    }

    /// Parse a reference from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, has more than one `/`, or
    /// either component fails validation.
    pub fn parse(reference: &str) -> Result<Self, RefError> {
        if reference.is_empty() {
            return Err(RefError::Empty);
        }

        match reference.split_once('/') {
            None => Self::new(DEFAULT_NAMESPACE, reference),
            Some((namespace, name)) if !name.contains('/') => Self::new(namespace, name),
            Some(_) => Err(RefError::TooManySegments(reference.to_string())),
        }
    }

    /// The namespace component (`library` for official images).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The repository name component.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for RepoRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn validate_component(component: &'static str, value: &str) -> Result<(), RefError> {
    if value.is_empty() {
        return Err(RefError::EmptyComponent(component));
    }
    if value.len() > MAX_COMPONENT_LENGTH {
        return Err(RefError::TooLong {
            component,
            value: value.to_string(),
        });
    }
    if let Some(found) = value
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
    {
        return Err(RefError::InvalidCharacter {
            component,
            value: value.to_string(),
            found,
        });
    }
    Ok(())
}

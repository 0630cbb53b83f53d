// src/domain/page/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::slug::{is_normalized, slugify};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(i64);

impl PageId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("page id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PageId> for i64 {
    fn from(value: PageId) -> Self {
        value.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidTitle("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free text shown under the title. Empty is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDescription(String);

impl PageDescription {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Public, globally unique address of a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageSlug(String);

impl PageSlug {
    /// Accept an already normalised slug, e.g. one read back from storage or a URL.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_normalized(&value) {
            return Err(DomainError::Validation(format!(
                "slug '{value}' must match [a-z0-9_-] without leading, trailing or repeated hyphens"
            )));
        }
        Ok(Self(value))
    }

    /// Derive the slug for a title. Titles without any ASCII word character
    /// produce nothing usable and are rejected.
    pub fn from_title(title: &PageTitle) -> DomainResult<Self> {
        Self::from_generated(title, slugify(title.as_str()))
    }

    pub(crate) fn from_generated(title: &PageTitle, candidate: String) -> DomainResult<Self> {
        if candidate.is_empty() {
            return Err(DomainError::InvalidTitle(format!(
                "title '{title}' has no letters or digits to build a page address from"
            )));
        }
        Self::new(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PageSlug> for String {
    fn from(value: PageSlug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_title_is_an_invalid_title() {
        let err = PageTitle::new("   ").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTitle(_)));
    }

    #[test]
    fn slug_from_title() {
        let title = PageTitle::new("Hello World!").unwrap();
        assert_eq!(PageSlug::from_title(&title).unwrap().as_str(), "hello-world");
    }

    #[test]
    fn punctuation_title_is_rejected_before_lookup() {
        let title = PageTitle::new("!!!").unwrap();
        let err = PageSlug::from_title(&title).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTitle(_)));
    }

    #[test]
    fn raw_slug_must_be_normalized() {
        assert!(PageSlug::new("ok-slug").is_ok());
        assert!(PageSlug::new("Bad Slug").is_err());
        assert!(PageSlug::new("").is_err());
        assert!(PageSlug::new("-x").is_err());
    }

    #[test]
    fn page_id_must_be_positive() {
        assert!(PageId::new(0).is_err());
        assert_eq!(i64::from(PageId::new(7).unwrap()), 7);
    }
}

//! Ordered class token set with DOMTokenList semantics.

use crate::ToggleError;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Parse a `class` attribute value. Duplicates keep their first position.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::default();
        for token in value.split_ascii_whitespace() {
            if !list.contains(token) {
                list.tokens.push(token.to_string());
            }
        }
        list
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn add(&mut self, token: &str) -> Result<(), ToggleError> {
        validate_token(token)?;
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
        Ok(())
    }

    pub fn remove(&mut self, token: &str) -> Result<(), ToggleError> {
        validate_token(token)?;
        self.tokens.retain(|t| t != token);
        Ok(())
    }

    /// Flip membership of `token`; returns whether it is present afterwards.
    pub fn toggle(&mut self, token: &str) -> Result<bool, ToggleError> {
        if self.contains(token) {
            self.remove(token)?;
            Ok(false)
        } else {
            self.add(token)?;
            Ok(true)
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[inline]
fn validate_token(token: &str) -> Result<(), ToggleError> {
    if token.is_empty() || token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(ToggleError::InvalidToken(token.to_string()));
    }
    Ok(())
}

//! Colored text fragments collected by one category

use crate::data::TermColor;

/// One list item with its color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub color: TermColor,
}

/// Fragments of a single category, built fresh and consumed at once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentList {
    items: Vec<Fragment>,
}

impl FragmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, color: TermColor) {
        self.items.push(Fragment {
            text: text.into(),
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.items.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|f| f.text.as_str())
    }
}

impl<'a> IntoIterator for &'a FragmentList {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

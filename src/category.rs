//! Notebook categories
//!
//! Every example notebook belongs to exactly one category, and each category
//! owns one `<name>_examples` directory below the input root.

use std::fmt;
use std::str::FromStr;

use crate::constants::CATEGORY_DIRECTORY_SUFFIX;
use crate::errors::{Error, invalid_category_error};

/// A recognised notebook category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Creation,
    Estimation,
    Evaluation,
    Goldenspike,
}

impl Category {
    /// All recognised categories, in the order they are presented to users
    pub const ALL: [Category; 5] = [
        Category::Core,
        Category::Creation,
        Category::Estimation,
        Category::Evaluation,
        Category::Goldenspike,
    ];

    /// The lowercase name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Creation => "creation",
            Category::Estimation => "estimation",
            Category::Evaluation => "evaluation",
            Category::Goldenspike => "goldenspike",
        }
    }

    /// Name of the directory holding this category's notebooks
    ///
    /// The same name is used for the rendered output directory.
    pub fn directory_name(&self) -> String {
        format!("{}{}", self.as_str(), CATEGORY_DIRECTORY_SUFFIX)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Names are matched exactly; `Core` is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| invalid_category_error(s))
    }
}

//! Ordered category cascade.
//!
//! A [`Classifier`] is a list of [`Pass`] records evaluated top to bottom.
//! A pass claims a record when none of its exclusion patterns match the name
//! and at least one of its include matchers matches the pass subject. The
//! first claiming pass decides the category; if none claims, the record is
//! [`Category::Gear`]. Position in the list is the only tie-break.

use std::sync::LazyLock;

use gunworks_core::Category;
use regex::Regex;

/// Which text a pass's include matchers are tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Name,
    /// Manufacturer field. When the manufacturer is blank, the name is used
    /// but a brand must lead it (`WOLF 7.62X39`, not `GRAY WOLF BACKPACK`).
    Brand,
}

/// Conjunction of patterns: matches when every pattern matches.
#[derive(Debug, Clone)]
pub struct Matcher {
    all: Vec<Regex>,
}

impl Matcher {
    fn is_match(&self, text: &str) -> bool {
        self.all.iter().all(|re| re.is_match(text))
    }

    fn is_leading_match(&self, text: &str) -> bool {
        self.all.iter().all(|re| {
            re.find(text)
                .is_some_and(|m| text[..m.start()].trim().is_empty())
        })
    }
}

#[derive(Debug, Clone)]
pub struct Pass {
    pub name: &'static str,
    pub subject: Subject,
    pub exclude: Vec<Regex>,
    pub include: Vec<Matcher>,
    pub result: Category,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("valid classifier regex")
}

impl Pass {
    #[must_use]
    pub fn new(name: &'static str, subject: Subject, result: Category) -> Self {
        Self {
            name,
            subject,
            exclude: Vec::new(),
            include: Vec::new(),
            result,
        }
    }

    /// Add exclusion patterns, tested against the product name.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex. Patterns are compiled when
    /// the pass is built, never during classification.
    #[must_use]
    pub fn exclude(mut self, patterns: &[&str]) -> Self {
        self.exclude.extend(patterns.iter().map(|p| compile(p)));
        self
    }

    /// Add one include matcher per pattern.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex.
    #[must_use]
    pub fn include_any(mut self, patterns: &[&str]) -> Self {
        self.include.extend(patterns.iter().map(|p| Matcher {
            all: vec![compile(p)],
        }));
        self
    }

    /// Add a single include matcher that needs every pattern to match.
    ///
    /// # Panics
    ///
    /// Panics if a pattern is not a valid regex.
    #[must_use]
    pub fn include_all(mut self, patterns: &[&str]) -> Self {
        self.include.push(Matcher {
            all: patterns.iter().map(|p| compile(p)).collect(),
        });
        self
    }

    /// Exclusions are checked before inclusions.
    #[must_use]
    pub fn claims(&self, name: &str, brand: &str) -> bool {
        if self.exclude.iter().any(|re| re.is_match(name)) {
            return false;
        }
        match self.subject {
            Subject::Name => self.include.iter().any(|m| m.is_match(name)),
            Subject::Brand if brand.trim().is_empty() => {
                self.include.iter().any(|m| m.is_leading_match(name))
            }
            Subject::Brand => self.include.iter().any(|m| m.is_match(brand)),
        }
    }
}

/// Category plus the pass that assigned it (`None` for the gear default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub pass: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    passes: Vec<Pass>,
}

impl Classifier {
    #[must_use]
    pub fn new(passes: Vec<Pass>) -> Self {
        Self { passes }
    }

    /// The storefront's curated cascade.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(crate::rules::standard_passes())
    }

    #[must_use]
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    #[must_use]
    pub fn explain(&self, name: &str, brand: &str) -> Classification {
        self.passes
            .iter()
            .find(|pass| pass.claims(name, brand))
            .map_or(
                Classification {
                    category: Category::Gear,
                    pass: None,
                },
                |pass| Classification {
                    category: pass.result,
                    pass: Some(pass.name),
                },
            )
    }

    #[must_use]
    pub fn classify(&self, name: &str, brand: &str) -> Category {
        let outcome = self.explain(name, brand);
        tracing::trace!(
            name,
            category = %outcome.category,
            pass = outcome.pass.unwrap_or("default"),
            "classified"
        );
        outcome.category
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD: LazyLock<Classifier> = LazyLock::new(Classifier::standard);

/// Classify with the standard cascade.
#[must_use]
pub fn classify(name: &str, brand: &str) -> Category {
    STANDARD.classify(name, brand)
}

/// Classify a bare name with no manufacturer field.
#[must_use]
pub fn classify_name(name: &str) -> Category {
    classify(name, "")
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

//! Template compiler for product-context substitution.
//!
//! Templates are plain strings containing `${fieldName}` placeholders. Three
//! names are recognized:
//!
//! - `${productName}` - the product name
//! - `${productDescription}` - the product description
//! - `${productGoals}` - the product goals
//!
//! Compilation is total. A recognized placeholder is always replaced, with a
//! bracketed fallback when the context field is empty. Any other `${...}` token
//! is copied through verbatim. The template is scanned once from left to right
//! and substituted values are never scanned again, so a product name that itself
//! contains `${productGoals}` is emitted literally.
//!
//! There is no escape syntax.

use crate::product::ProductContext;

/// Opening sequence of a placeholder token.
const TOKEN_OPEN: &str = "${";

/// Closing character of a placeholder token.
const TOKEN_CLOSE: char = '}';

/// A recognized placeholder name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    ProductName,
    ProductDescription,
    ProductGoals,
}

impl Placeholder {
    /// All recognized placeholders.
    pub const ALL: [Placeholder; 3] = [
        Placeholder::ProductName,
        Placeholder::ProductDescription,
        Placeholder::ProductGoals,
    ];

    /// Look up a placeholder by the name between `${` and `}`.
    ///
    /// Matching is exact: no trimming and no case folding.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "productName" => Some(Placeholder::ProductName),
            "productDescription" => Some(Placeholder::ProductDescription),
            "productGoals" => Some(Placeholder::ProductGoals),
            _ => None,
        }
    }

    /// The name as written inside a template.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::ProductName => "productName",
            Placeholder::ProductDescription => "productDescription",
            Placeholder::ProductGoals => "productGoals",
        }
    }

    /// The full token, e.g. `${productName}`.
    pub fn token(self) -> String {
        format!("{}{}{}", TOKEN_OPEN, self.name(), TOKEN_CLOSE)
    }

    /// The context field this placeholder reads.
    pub fn value<'a>(self, context: &'a ProductContext) -> &'a str {
        match self {
            Placeholder::ProductName => &context.name,
            Placeholder::ProductDescription => &context.description,
            Placeholder::ProductGoals => &context.goals,
        }
    }
}

/// Text substituted for a placeholder whose context field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallbacks {
    pub name: &'static str,
    pub description: &'static str,
    pub goals: &'static str,
}

impl Fallbacks {
    /// Bracketed fallbacks used when a prompt is shown to the user.
    pub const DISPLAY: Fallbacks = Fallbacks {
        name: "[Product Name]",
        description: "[Product Description]",
        goals: "[Goals]",
    };

    /// Prose fallbacks used when a prompt is sent for OKR generation.
    pub const GENERATION: Fallbacks = Fallbacks {
        name: "the product",
        description: "not specified",
        goals: "not specified",
    };

    /// Fallback text for one placeholder.
    pub fn for_placeholder(&self, placeholder: Placeholder) -> &'static str {
        match placeholder {
            Placeholder::ProductName => self.name,
            Placeholder::ProductDescription => self.description,
            Placeholder::ProductGoals => self.goals,
        }
    }
}

impl Default for Fallbacks {
    fn default() -> Self {
        Fallbacks::DISPLAY
    }
}

/// Compile a template against a product context using the display fallbacks.
///
/// ```text
/// compile("Build ${productName}", {name: "Atlas", ..})  => "Build Atlas"
/// compile("${productGoals}", {goals: "", ..})           => "[Goals]"
/// compile("${unknown}", ..)                             => "${unknown}"
/// ```
pub fn compile(template: &str, context: &ProductContext) -> String {
    compile_with(template, context, &Fallbacks::DISPLAY)
}

/// Compile a template with an explicit fallback table.
pub fn compile_with(template: &str, context: &ProductContext, fallbacks: &Fallbacks) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + TOKEN_OPEN.len()..];

        let substitution = after_open.find(TOKEN_CLOSE).and_then(|end| {
            Placeholder::from_name(&after_open[..end]).map(|placeholder| (placeholder, end))
        });

        match substitution {
            Some((placeholder, end)) => {
                let value = placeholder.value(context);
                if value.is_empty() {
                    result.push_str(fallbacks.for_placeholder(placeholder));
                } else {
                    result.push_str(value);
                }
                rest = &after_open[end + TOKEN_CLOSE.len_utf8()..];
            }
            None => {
                // Not a recognized token: emit the `$` and resume at the `{`
                // so a real token nested after it is still found.
                result.push('$');
                rest = &rest[start + 1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// List the recognized placeholders a template uses, in order of first use.
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(TOKEN_OPEN) {
        let after_open = &rest[start + TOKEN_OPEN.len()..];
        match after_open
            .find(TOKEN_CLOSE)
            .and_then(|end| Placeholder::from_name(&after_open[..end]).map(|p| (p, end)))
        {
            Some((placeholder, end)) => {
                if !found.contains(&placeholder) {
                    found.push(placeholder);
                }
                rest = &after_open[end + TOKEN_CLOSE.len_utf8()..];
            }
            None => rest = &rest[start + 1..],
        }
    }

    found
}

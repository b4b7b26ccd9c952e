//! Prompt compilation subsystem.
//!
//! This module provides:
//!
//! - **Template**: `${placeholder}` substitution of product context into templates
//! - **Selection**: choosing an activity's mega or OKR template
//!
//! # Template Syntax
//!
//! ```text
//! Act as a Lead Product Manager. I am building '${productName}'.
//!
//! 1. Generate 5 distinct user personas based on: '${productDescription}'.
//! 2. For each persona, list 3 critical pain points that '${productGoals}' aims to solve.
//! ```

mod selection;
mod template;

pub use selection::{NO_OKR_TEMPLATE, PromptKind, okr_generation_template, select_template};
pub use template::{Fallbacks, Placeholder, compile, compile_with, placeholders};

//! String helpers exposed to templates.
//!
//! Templates reach these by name, e.g. `<%= classify(name) %>` in contents or
//! `__name@dasherize__` in file names. The set is closed: a template asking for
//! any other helper fails to render.

use std::fmt;
use std::str::FromStr;

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};

/// Named case-conversion helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringHelper {
    /// `my-widget` → `MyWidget`
    Classify,
    /// `myWidget` → `my-widget`
    Dasherize,
    /// `my-widget` → `myWidget`
    Camelize,
    /// `myWidget` → `my_widget`
    Underscore,
    /// `innerHTML` → `inner_html`
    Decamelize,
    /// `widget` → `Widget`
    Capitalize,
}

impl StringHelper {
    pub const ALL: [StringHelper; 6] = [
        Self::Classify,
        Self::Dasherize,
        Self::Camelize,
        Self::Underscore,
        Self::Decamelize,
        Self::Capitalize,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classify => "classify",
            Self::Dasherize => "dasherize",
            Self::Camelize => "camelize",
            Self::Underscore => "underscore",
            Self::Decamelize => "decamelize",
            Self::Capitalize => "capitalize",
        }
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Classify => input.to_upper_camel_case(),
            Self::Dasherize => input.to_kebab_case(),
            Self::Camelize => input.to_lower_camel_case(),
            Self::Underscore | Self::Decamelize => input.to_snake_case(),
            Self::Capitalize => capitalize(input),
        }
    }

    /// `true` if `name` is one of the helper names.
    pub fn is_helper_name(name: &str) -> bool {
        Self::ALL.iter().any(|h| h.as_str() == name)
    }
}

impl FromStr for StringHelper {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| format!("unknown helper '{s}'"))
    }
}

impl fmt::Display for StringHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_builds_pascal_case() {
        assert_eq!(StringHelper::Classify.apply("my-widget"), "MyWidget");
        assert_eq!(StringHelper::Classify.apply("user_profile"), "UserProfile");
    }

    #[test]
    fn dasherize_builds_kebab_case() {
        assert_eq!(StringHelper::Dasherize.apply("myWidget"), "my-widget");
        assert_eq!(StringHelper::Dasherize.apply("MyWidget"), "my-widget");
    }

    #[test]
    fn camelize_builds_lower_camel_case() {
        assert_eq!(StringHelper::Camelize.apply("my-widget"), "myWidget");
    }

    #[test]
    fn underscore_and_decamelize_build_snake_case() {
        assert_eq!(StringHelper::Underscore.apply("myWidget"), "my_widget");
        assert_eq!(StringHelper::Decamelize.apply("innerHTML"), "inner_html");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(StringHelper::Capitalize.apply("widget"), "Widget");
        assert_eq!(StringHelper::Capitalize.apply("myWidget"), "MyWidget");
        assert_eq!(StringHelper::Capitalize.apply(""), "");
    }

    #[test]
    fn parses_by_name() {
        assert_eq!("classify".parse::<StringHelper>(), Ok(StringHelper::Classify));
        assert!("shout".parse::<StringHelper>().is_err());
        assert!(StringHelper::is_helper_name("dasherize"));
        assert!(!StringHelper::is_helper_name("name"));
    }
}

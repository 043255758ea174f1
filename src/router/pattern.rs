use super::core::ParamVec;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// A compiled path template.
///
/// Templates use `:name` for a required segment and `:name?` for an optional
/// one, e.g. `/tasks/:sort/:skip/:limit?`. Matching is case-insensitive and
/// accepts a single trailing slash. Captured values are percent-decoded.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    template: String,
    regex: Regex,
    param_names: Vec<Arc<str>>,
}

impl RoutePattern {
    pub fn compile(template: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidPattern {
            template: template.to_string(),
            reason,
        };

        let mut pattern = String::with_capacity(template.len() + 16);
        pattern.push_str("(?i)^");
        let mut param_names: Vec<Arc<str>> = Vec::new();
        let mut seen = HashSet::new();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let Some(param) = segment.strip_prefix(':') else {
                pattern.push('/');
                pattern.push_str(&regex::escape(segment));
                continue;
            };

            let (name, optional) = match param.strip_suffix('?') {
                Some(name) => (name, true),
                None => (param, false),
            };
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(format!("bad parameter segment `{segment}`")));
            }
            if !seen.insert(name) {
                return Err(invalid(format!("duplicate parameter `{name}`")));
            }

            if optional {
                pattern.push_str("(?:/([^/]+))?");
            } else {
                pattern.push_str("/([^/]+)");
            }
            param_names.push(Arc::from(name));
        }

        pattern.push_str("/?$");
        let regex = Regex::new(&pattern).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            template: template.to_string(),
            regex,
            param_names,
        })
    }

    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in template order
    #[must_use]
    pub fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }

    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and return the captured parameters.
    ///
    /// Optional segments that are absent from the path are left out.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<ParamVec> {
        let caps = self.regex.captures(path)?;
        let mut params = ParamVec::new();
        for (i, name) in self.param_names.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                let value = urlencoding::decode(m.as_str())
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| m.as_str().to_string());
                params.push((Arc::clone(name), value));
            }
        }
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(pattern: &RoutePattern, path: &str) -> Option<Vec<(String, String)>> {
        pattern.captures(path).map(|params| {
            params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect()
        })
    }

    #[test]
    fn test_root_path() {
        let p = RoutePattern::compile("/").unwrap();
        assert!(p.is_match("/"));
        assert!(!p.is_match("/users"));
        assert!(p.param_names().is_empty());
    }

    #[test]
    fn test_literal_path() {
        let p = RoutePattern::compile("/users").unwrap();
        assert!(p.is_match("/users"));
        assert!(p.is_match("/users/"));
        assert!(p.is_match("/USERS"));
        assert!(!p.is_match("/users/1"));
        assert!(!p.is_match("/user"));
    }

    #[test]
    fn test_required_and_optional_params() {
        let p = RoutePattern::compile("/tasks/:sort/:skip/:limit?").unwrap();
        let names: Vec<_> = p.param_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["sort", "skip", "limit"]);

        assert_eq!(
            captured(&p, "/tasks/ASC/0/20"),
            Some(vec![
                ("sort".into(), "ASC".into()),
                ("skip".into(), "0".into()),
                ("limit".into(), "20".into()),
            ])
        );
        assert_eq!(
            captured(&p, "/tasks/ASC/0"),
            Some(vec![("sort".into(), "ASC".into()), ("skip".into(), "0".into())])
        );
        assert_eq!(captured(&p, "/tasks/ASC"), None);
        assert_eq!(captured(&p, "/tasks/ASC/0/20/extra"), None);
    }

    #[test]
    fn test_captures_are_percent_decoded() {
        let p = RoutePattern::compile("/users/:name").unwrap();
        assert_eq!(
            captured(&p, "/users/Pranay%20G"),
            Some(vec![("name".into(), "Pranay G".into())])
        );
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let p = RoutePattern::compile("/v1.0/items").unwrap();
        assert!(p.is_match("/v1.0/items"));
        assert!(!p.is_match("/v1x0/items"));
    }

    #[test]
    fn test_invalid_templates() {
        assert!(RoutePattern::compile("/users/:").is_err());
        assert!(RoutePattern::compile("/users/:id/posts/:id").is_err());
        assert!(RoutePattern::compile("/users/:bad-name").is_err());
    }
}

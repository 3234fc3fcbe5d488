//! Compound simple selectors: `tag#id.class[attr]`.
//!
//! Only what page scripts use to find their own widgets is supported. No
//! combinators, no selector lists, no attribute value matching.

use std::fmt;
use std::str::FromStr;

use crate::element::Node;
use crate::error::SelectorError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut selector = Selector::default();
        let chars: Vec<(usize, char)> = trimmed.char_indices().collect();

        // Leading type selector
        let mut pos = if chars[0].1 == '*' {
            1
        } else {
            let (name, next) = read_name(&chars, 0);
            if !name.is_empty() {
                selector.tag = Some(name.to_ascii_lowercase());
            }
            next
        };

        while pos < chars.len() {
            let (offset, prefix) = chars[pos];
            match prefix {
                '.' | '#' => {
                    let (name, next) = read_name(&chars, pos + 1);
                    if name.is_empty() {
                        return Err(SelectorError::MissingName {
                            input: input.to_string(),
                            prefix,
                            offset,
                        });
                    }
                    if prefix == '.' {
                        selector.classes.push(name);
                    } else {
                        selector.id = Some(name);
                    }
                    pos = next;
                }
                '[' => {
                    let (name, next) = read_name(&chars, pos + 1);
                    if name.is_empty() {
                        return Err(SelectorError::MissingName {
                            input: input.to_string(),
                            prefix,
                            offset,
                        });
                    }
                    match chars.get(next) {
                        Some((_, ']')) => {}
                        Some(&(offset, found)) => {
                            return Err(SelectorError::Unsupported {
                                input: input.to_string(),
                                found,
                                offset,
                            })
                        }
                        None => return Err(SelectorError::UnclosedAttribute(input.to_string())),
                    }
                    selector.attributes.push(name.to_ascii_lowercase());
                    pos = next + 1;
                }
                found => {
                    return Err(SelectorError::Unsupported {
                        input: input.to_string(),
                        found,
                        offset,
                    })
                }
            }
        }

        Ok(selector)
    }

    /// Shorthand for a single `.class` selector.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            classes: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| node.has_class(c))
            && self.attributes.iter().all(|a| node.has_attribute(a))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_name(chars: &[(usize, char)], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && is_name_char(chars[end].1) {
        end += 1;
    }
    (chars[start..end].iter().map(|(_, c)| c).collect(), end)
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote = false;
        if let Some(tag) = &self.tag {
            write!(f, "{tag}")?;
            wrote = true;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
            wrote = true;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
            wrote = true;
        }
        for attr in &self.attributes {
            write!(f, "[{attr}]")?;
            wrote = true;
        }
        if !wrote {
            write!(f, "*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_name_stops_at_prefix() {
        let chars: Vec<(usize, char)> = "collapse-title.x".char_indices().collect();
        let (name, next) = read_name(&chars, 0);
        assert_eq!(name, "collapse-title");
        assert_eq!(next, 14);
    }

    #[test]
    fn test_display_roundtrips_compound() {
        let sel = Selector::parse("details#faq.collapse.wide[open]").unwrap();
        assert_eq!(sel.to_string(), "details#faq.collapse.wide[open]");
        assert_eq!(Selector::parse("*").unwrap().to_string(), "*");
    }
}

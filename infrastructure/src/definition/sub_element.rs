//! Sub-element parser for nested tool definitions
//!
//! Interprets the element a runner nests in place of `tool-class` /
//! `tool-ref`. Supported shapes:
//!
//! | Element | Result |
//! |---------|--------|
//! | `<bean id=".." class="..">` with `property` / `constructor-arg` children | `Bean` |
//! | `<ref bean=".."/>` (or `local`, `parent`) | `Reference` |
//! | `<idref bean=".."/>` (or `local`) | `Value` with the name |
//! | `<value>text</value>` | `Value`, untrimmed |
//! | `<null/>` | `Null` |
//! | `<list>` / `<set>` | `List` of parsed children |
//!
//! Anything else is [`NestedParseError::UnsupportedElement`].

use toolrunner_domain::{
    BeanDefinition, ConfigurationElement, NestedDefinitionParser, NestedParseError,
    ParsedDefinition, PropertyDefinition,
};
use tracing::{debug, trace};

/// Children that carry documentation only
const IGNORED_TAGS: &[&str] = &["description", "meta"];

/// Parser for bean-style nested definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct SubElementParser;

impl SubElementParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_element(
        &self,
        element: &ConfigurationElement,
    ) -> Result<ParsedDefinition, NestedParseError> {
        trace!("Parsing sub-element {}", element.identity());
        match element.tag.as_str() {
            "bean" => self.parse_bean(element).map(ParsedDefinition::Bean),
            "ref" => Self::target(element, &["bean", "local", "parent"])
                .map(ParsedDefinition::Reference),
            "idref" => Self::target(element, &["bean", "local"]).map(ParsedDefinition::Value),
            "value" => Ok(ParsedDefinition::Value(element.text.clone())),
            "null" => Ok(ParsedDefinition::Null),
            "list" | "set" => Self::content(element)
                .map(|child| self.parse_element(child))
                .collect::<Result<Vec<_>, _>>()
                .map(ParsedDefinition::List),
            _ => Err(NestedParseError::UnsupportedElement {
                element: element.identity(),
            }),
        }
    }

    fn parse_bean(
        &self,
        element: &ConfigurationElement,
    ) -> Result<BeanDefinition, NestedParseError> {
        let mut bean = BeanDefinition {
            id: element.attribute("id").map(str::to_string),
            class: element.attribute("class").map(|c| c.trim().to_string()),
            ..Default::default()
        };

        for child in Self::content(element) {
            match child.tag.as_str() {
                "property" => {
                    let name = child
                        .attribute("name")
                        .filter(|n| !n.trim().is_empty())
                        .ok_or_else(|| NestedParseError::MissingAttribute {
                            element: child.identity(),
                            attribute: "name".to_string(),
                        })?;
                    let value = self.parse_value(child)?;
                    bean.properties.push(PropertyDefinition {
                        name: name.trim().to_string(),
                        value,
                    });
                }
                "constructor-arg" => {
                    let value = self.parse_value(child)?;
                    bean.constructor_args.push(value);
                }
                _ => {
                    return Err(NestedParseError::UnsupportedElement {
                        element: child.identity(),
                    });
                }
            }
        }

        debug!(
            "Parsed nested bean {} ({} properties, {} constructor args)",
            bean.class.as_deref().unwrap_or("<no class>"),
            bean.properties.len(),
            bean.constructor_args.len()
        );
        Ok(bean)
    }

    /// Value of a `property` or `constructor-arg`: exactly one of a `value`
    /// attribute, a `ref` attribute, or a single sub-element
    fn parse_value(
        &self,
        element: &ConfigurationElement,
    ) -> Result<ParsedDefinition, NestedParseError> {
        let value = element.attribute("value");
        let reference = element.attribute("ref");
        let sub_elements: Vec<_> = Self::content(element).collect();

        let sources = usize::from(value.is_some())
            + usize::from(reference.is_some())
            + usize::from(!sub_elements.is_empty());
        if sources > 1 || sub_elements.len() > 1 {
            return Err(NestedParseError::AmbiguousValue {
                element: element.identity(),
            });
        }

        match (value, reference, sub_elements.first()) {
            (Some(value), _, _) => Ok(ParsedDefinition::Value(value.to_string())),
            (_, Some(reference), _) if reference.trim().is_empty() => {
                Err(NestedParseError::MissingAttribute {
                    element: element.identity(),
                    attribute: "ref".to_string(),
                })
            }
            (_, Some(reference), _) => Ok(ParsedDefinition::Reference(reference.to_string())),
            (_, _, Some(sub_element)) => self.parse_element(sub_element),
            (None, None, None) => Err(NestedParseError::MissingValue {
                element: element.identity(),
            }),
        }
    }

    /// First non-blank attribute among `names`
    fn target(element: &ConfigurationElement, names: &[&str]) -> Result<String, NestedParseError> {
        names
            .iter()
            .filter_map(|name| element.attribute(name))
            .find(|value| !value.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| NestedParseError::MissingAttribute {
                element: element.identity(),
                attribute: names[0].to_string(),
            })
    }

    fn content(element: &ConfigurationElement) -> impl Iterator<Item = &ConfigurationElement> {
        element
            .children
            .iter()
            .filter(|child| !IGNORED_TAGS.contains(&child.tag.as_str()))
    }
}

impl NestedDefinitionParser for SubElementParser {
    fn parse_nested(
        &self,
        element: &ConfigurationElement,
    ) -> Result<ParsedDefinition, NestedParseError> {
        self.parse_element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(element: &ConfigurationElement) -> Result<ParsedDefinition, NestedParseError> {
        SubElementParser::new().parse_nested(element)
    }

    fn property(name: &str) -> ConfigurationElement {
        ConfigurationElement::new("property").with_attribute("name", name)
    }

    #[test]
    fn test_bean_with_properties_and_constructor_args() {
        let element = ConfigurationElement::new("bean")
            .with_attribute("id", "inner")
            .with_attribute("class", " org.example.WordCount ")
            .with_child(ConfigurationElement::new("description").with_text("counts words"))
            .with_child(ConfigurationElement::new("constructor-arg").with_attribute("value", "x"))
            .with_child(property("reducers").with_attribute("value", "4"))
            .with_child(property("conf").with_attribute("ref", "hadoopConfiguration"))
            .with_child(
                property("paths").with_child(
                    ConfigurationElement::new("list")
                        .with_child(ConfigurationElement::new("value").with_text("/in"))
                        .with_child(ConfigurationElement::new("null")),
                ),
            );

        let parsed = parse(&element).unwrap();
        let bean = parsed.as_bean().unwrap();
        assert_eq!(bean.id.as_deref(), Some("inner"));
        assert_eq!(bean.class.as_deref(), Some("org.example.WordCount"));
        assert_eq!(
            bean.constructor_args,
            vec![ParsedDefinition::Value("x".to_string())]
        );
        assert_eq!(
            bean.property("reducers"),
            Some(&ParsedDefinition::Value("4".to_string()))
        );
        assert_eq!(
            bean.property("conf"),
            Some(&ParsedDefinition::Reference("hadoopConfiguration".to_string()))
        );
        assert_eq!(
            bean.property("paths"),
            Some(&ParsedDefinition::List(vec![
                ParsedDefinition::Value("/in".to_string()),
                ParsedDefinition::Null,
            ]))
        );
    }

    #[test]
    fn test_ref_falls_back_to_local() {
        let element = ConfigurationElement::new("ref").with_attribute("local", "myTool");
        assert_eq!(
            parse(&element).unwrap(),
            ParsedDefinition::Reference("myTool".to_string())
        );
    }

    #[test]
    fn test_ref_without_target() {
        let element = ConfigurationElement::new("ref").with_attribute("bean", " ");
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::MissingAttribute { ref attribute, .. }) if attribute == "bean"
        ));
    }

    #[test]
    fn test_idref_is_value() {
        let element = ConfigurationElement::new("idref").with_attribute("bean", "myTool");
        assert_eq!(
            parse(&element).unwrap(),
            ParsedDefinition::Value("myTool".to_string())
        );
    }

    #[test]
    fn test_value_text_is_not_trimmed() {
        let element = ConfigurationElement::new("value").with_text("  spaced  ");
        assert_eq!(
            parse(&element).unwrap(),
            ParsedDefinition::Value("  spaced  ".to_string())
        );
    }

    #[test]
    fn test_property_requires_name() {
        let element = ConfigurationElement::new("bean")
            .with_child(ConfigurationElement::new("property").with_attribute("value", "1"));
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::MissingAttribute { ref attribute, .. }) if attribute == "name"
        ));
    }

    #[test]
    fn test_property_with_value_and_ref_is_ambiguous() {
        let element = ConfigurationElement::new("bean").with_child(
            property("conf")
                .with_attribute("value", "1")
                .with_attribute("ref", "other"),
        );
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::AmbiguousValue { .. })
        ));
    }

    #[test]
    fn test_property_with_two_sub_elements_is_ambiguous() {
        let element = ConfigurationElement::new("bean").with_child(
            property("conf")
                .with_child(ConfigurationElement::new("null"))
                .with_child(ConfigurationElement::new("null")),
        );
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::AmbiguousValue { .. })
        ));
    }

    #[test]
    fn test_property_without_value() {
        let element = ConfigurationElement::new("bean").with_child(property("conf"));
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::MissingValue { .. })
        ));
    }

    #[test]
    fn test_unsupported_elements() {
        assert!(matches!(
            parse(&ConfigurationElement::new("map")),
            Err(NestedParseError::UnsupportedElement { .. })
        ));
        let bean = ConfigurationElement::new("bean")
            .with_child(ConfigurationElement::new("lookup-method"));
        assert!(matches!(
            parse(&bean),
            Err(NestedParseError::UnsupportedElement { element }) if element.tag == "lookup-method"
        ));
    }

    #[test]
    fn test_nested_errors_surface_from_deep_elements() {
        let element = ConfigurationElement::new("set")
            .with_child(ConfigurationElement::new("bean").with_child(property("x")));
        assert!(matches!(
            parse(&element),
            Err(NestedParseError::MissingValue { element }) if element.tag == "property"
        ));
    }
}

//! XML document source
//!
//! This module provides the [`XmlDocumentSource`] implementation of
//! [`DocumentSourcePort`] that parses configuration files with `roxmltree`.
//!
//! # Overview
//!
//! The source converts the borrowed `roxmltree` DOM into an owned
//! [`ConfigurationElement`] tree:
//!
//! - Tag and attribute names are local names; namespace prefixes are dropped
//! - Comments and processing instructions are skipped
//! - Text and CDATA children are concatenated into `text`
//! - Every element records the line/column where its start tag begins
//!
//! # Example
//!
//! ```
//! use toolrunner_application::DocumentSourcePort;
//! use toolrunner_infrastructure::XmlDocumentSource;
//!
//! let root = XmlDocumentSource::new()
//!     .parse(r#"<beans><tool-runner tool-ref="t"/></beans>"#, "inline")
//!     .unwrap();
//! assert_eq!(root.children[0].attribute("tool-ref"), Some("t"));
//! ```

use roxmltree::{Document, Node, ParsingOptions};
use std::fs;
use std::path::Path;
use toolrunner_application::{DocumentSourceError, DocumentSourcePort};
use toolrunner_domain::{Attribute, ConfigurationElement, SourcePosition};
use tracing::debug;

/// Document source that reads XML from the local file system.
#[derive(Debug, Clone)]
pub struct XmlDocumentSource {
    allow_dtd: bool,
}

impl Default for XmlDocumentSource {
    fn default() -> Self {
        Self { allow_dtd: true }
    }
}

impl XmlDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject documents that carry a DTD
    pub fn without_dtd(mut self) -> Self {
        self.allow_dtd = false;
        self
    }

    fn convert(document: &Document<'_>, node: Node<'_, '_>) -> ConfigurationElement {
        let position = document.text_pos_at(node.range().start);
        let mut element = ConfigurationElement {
            tag: node.tag_name().name().to_string(),
            attributes: node
                .attributes()
                .map(|a| Attribute::new(a.name(), a.value()))
                .collect(),
            children: Vec::new(),
            text: String::new(),
            position: Some(SourcePosition::new(position.row, position.col)),
        };

        for child in node.children() {
            if child.is_element() {
                element.children.push(Self::convert(document, child));
            } else if child.is_text() {
                if let Some(text) = child.text() {
                    element.text.push_str(text);
                }
            }
        }

        element
    }
}

impl DocumentSourcePort for XmlDocumentSource {
    fn load(&self, path: &Path) -> Result<ConfigurationElement, DocumentSourceError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Read {} bytes from {}", content.len(), path.display());
        self.parse(&content, &path.display().to_string())
    }

    fn parse(
        &self,
        source: &str,
        origin: &str,
    ) -> Result<ConfigurationElement, DocumentSourceError> {
        let options = ParsingOptions {
            allow_dtd: self.allow_dtd,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(source, options).map_err(|e| {
            DocumentSourceError::Malformed {
                origin: origin.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self::convert(&document, document.root_element()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BEANS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<beans xmlns="http://www.springframework.org/schema/beans"
       xmlns:hdp="http://www.springframework.org/schema/hadoop">
    <!-- word count -->
    <hdp:tool-runner id="wc" tool-ref="myTool">
        <hdp:arg value="-input"/>
        <hdp:arg value="/data"/>
    </hdp:tool-runner>
    <bean id="myTool" class="org.example.WordCount"><value><![CDATA[a<b]]></value></bean>
</beans>"#;

    #[test]
    fn test_local_names_and_attributes() {
        let root = XmlDocumentSource::new().parse(BEANS, "beans.xml").unwrap();
        assert_eq!(root.tag, "beans");
        assert_eq!(root.children.len(), 2);

        let runner = &root.children[0];
        assert_eq!(runner.tag, "tool-runner");
        assert_eq!(runner.attribute("id"), Some("wc"));
        assert_eq!(runner.attribute("tool-ref"), Some("myTool"));
        assert_eq!(runner.children.len(), 2);
        assert_eq!(runner.children[1].attribute("value"), Some("/data"));
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let root = XmlDocumentSource::new().parse(BEANS, "beans.xml").unwrap();
        assert!(root.attributes.is_empty());
    }

    #[test]
    fn test_positions_are_one_based() {
        let root = XmlDocumentSource::new().parse(BEANS, "beans.xml").unwrap();
        assert_eq!(root.position, Some(SourcePosition::new(2, 1)));
        assert_eq!(root.children[0].position, Some(SourcePosition::new(5, 5)));
    }

    #[test]
    fn test_cdata_is_text() {
        let root = XmlDocumentSource::new().parse(BEANS, "beans.xml").unwrap();
        let value = &root.children[1].children[0];
        assert_eq!(value.tag, "value");
        assert_eq!(value.text, "a<b");
    }

    #[test]
    fn test_malformed_document() {
        let error = XmlDocumentSource::new()
            .parse("<beans><tool-runner></beans>", "broken.xml")
            .unwrap_err();
        match error {
            DocumentSourceError::Malformed { origin, .. } => assert_eq!(origin, "broken.xml"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_dtd_can_be_rejected() {
        let doc = r#"<!DOCTYPE beans [<!ENTITY x "y">]><beans/>"#;
        assert!(XmlDocumentSource::new().parse(doc, "dtd.xml").is_ok());
        assert!(
            XmlDocumentSource::new()
                .without_dtd()
                .parse(doc, "dtd.xml")
                .is_err()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("beans.xml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(BEANS.as_bytes()).unwrap();

        let root = XmlDocumentSource::new().load(&path).unwrap();
        assert_eq!(root.find_all("tool-runner").len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = XmlDocumentSource::new()
            .load(&dir.path().join("absent.xml"))
            .unwrap_err();
        assert!(matches!(error, DocumentSourceError::Io { .. }));
    }
}

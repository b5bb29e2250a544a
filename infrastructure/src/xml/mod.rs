//! XML document loading

mod document_source;

pub use document_source::XmlDocumentSource;

// crates/ipxact-rs/src/error.rs

use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;

/// Errors that can occur while reading or writing IP-XACT documents.
///
/// Missing or empty model content is never an error here: writers emit what
/// they are given and readers fall back to empty values. Consistency checks
/// live in the `validator` module.
#[derive(Debug)]
pub enum IpxactError {
    /// An error from the underlying `quick-xml` reader or writer.
    Xml(XmlError),

    /// A malformed attribute in the XML input.
    XmlAttribute(AttrError),

    /// An invalid character or entity reference in text or attribute content.
    XmlEscape(EscapeError),

    /// The output sink failed (e.g., disk full).
    Io(std::io::Error),

    /// The XML content was not valid UTF-8.
    Utf8(Utf8Error),

    /// The input contained no root element.
    EmptyDocument,

    /// The input ended while an element was still open.
    UnclosedElement(String),

    /// The root element was not the one expected by the caller.
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// The `xmlns:ipxact` namespace did not match a supported standard revision.
    UnsupportedRevision(String),
}

impl From<XmlError> for IpxactError {
    fn from(e: XmlError) -> Self {
        IpxactError::Xml(e)
    }
}

impl From<AttrError> for IpxactError {
    fn from(e: AttrError) -> Self {
        IpxactError::XmlAttribute(e)
    }
}

impl From<EscapeError> for IpxactError {
    fn from(e: EscapeError) -> Self {
        IpxactError::XmlEscape(e)
    }
}

impl From<std::io::Error> for IpxactError {
    fn from(e: std::io::Error) -> Self {
        IpxactError::Io(e)
    }
}

impl From<Utf8Error> for IpxactError {
    fn from(e: Utf8Error) -> Self {
        IpxactError::Utf8(e)
    }
}

impl fmt::Display for IpxactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpxactError::Xml(e) => write!(f, "XML error: {}", e),
            IpxactError::XmlAttribute(e) => write!(f, "XML attribute error: {}", e),
            IpxactError::XmlEscape(e) => write!(f, "XML escape error: {}", e),
            IpxactError::Io(e) => write!(f, "I/O error: {}", e),
            IpxactError::Utf8(e) => write!(f, "Invalid UTF-8 in XML content: {}", e),
            IpxactError::EmptyDocument => write!(f, "The document has no root element"),
            IpxactError::UnclosedElement(name) => {
                write!(f, "Unexpected end of input inside element {}", name)
            }
            IpxactError::UnexpectedRoot { expected, found } => {
                write!(f, "Expected root element {} but found {}", expected, found)
            }
            IpxactError::UnsupportedRevision(uri) => {
                write!(f, "Unsupported IP-XACT namespace: {}", uri)
            }
        }
    }
}

impl std::error::Error for IpxactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IpxactError::Xml(e) => Some(e),
            IpxactError::XmlAttribute(e) => Some(e),
            IpxactError::XmlEscape(e) => Some(e),
            IpxactError::Io(e) => Some(e),
            IpxactError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

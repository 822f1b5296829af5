// crates/ipxact-rs/src/types/common.rs

//! Types shared by every IP-XACT document: standard revision, VLNV and
//! namespace declarations.

use serde::{Deserialize, Serialize};

const NAMESPACE_2014: &str = "http://www.accellera.org/XMLSchema/IPXACT/1685-2014";
const NAMESPACE_2022: &str = "http://www.accellera.org/XMLSchema/IPXACT/1685-2022";

/// The IP-XACT standard revision a document follows.
///
/// The revision decides small but schema-relevant details of the wire form,
/// e.g. whether a transparent bridge references its interface through
/// `masterRef` (2014) or `initiatorRef` (2022).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Revision {
    /// IEEE 1685-2014.
    #[default]
    Std14,
    /// IEEE 1685-2022.
    Std22,
}

impl Revision {
    /// The `xmlns:ipxact` namespace URI of this revision.
    pub fn namespace_uri(self) -> &'static str {
        match self {
            Revision::Std14 => NAMESPACE_2014,
            Revision::Std22 => NAMESPACE_2022,
        }
    }

    /// The `xsi:schemaLocation` value written on document roots.
    pub fn schema_location(self) -> String {
        let uri = self.namespace_uri();
        format!("{} {}/index.xsd", uri, uri)
    }

    /// Maps a namespace URI back to its revision.
    pub fn from_namespace_uri(uri: &str) -> Option<Self> {
        match uri.trim() {
            NAMESPACE_2014 => Some(Revision::Std14),
            NAMESPACE_2022 => Some(Revision::Std22),
            _ => None,
        }
    }
}

/// Vendor, library, name and version: the identifier of a top-level document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Vlnv {
    pub vendor: String,
    pub library: String,
    pub name: String,
    pub version: String,
}

impl Vlnv {
    pub fn new(vendor: &str, library: &str, name: &str, version: &str) -> Self {
        Self {
            vendor: vendor.into(),
            library: library.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl core::fmt::Display for Vlnv {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.vendor, self.library, self.name, self.version
        )
    }
}

/// An `xmlns:<prefix>="<uri>"` declaration on a document root, other than the
/// `xsi` and `ipxact` ones every document carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDeclaration {
    pub prefix: String,
    pub uri: String,
}

impl NamespaceDeclaration {
    pub fn new(prefix: &str, uri: &str) -> Self {
        Self {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }
}

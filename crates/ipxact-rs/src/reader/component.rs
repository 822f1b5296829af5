// crates/ipxact-rs/src/reader/component.rs

//! Loads an `<ipxact:component>` document into a [`Component`].

use super::indirect_interface::read_indirect_interface;
use super::{mandatory_text, optional_text, read_parameters, read_vendor_extensions};
use crate::error::IpxactError;
use crate::types::{Component, InnerComment, NamespaceDeclaration, Revision, Vlnv};
use crate::writer::component::{MODELLED_ELEMENTS, component_order};
use crate::xml::{XmlElement, XmlNode, parse_document};
use log::{debug, warn};
use quick_xml::escape::unescape;

const COMPONENT_ROOT: &str = "ipxact:component";

/// Namespace prefixes that are written on every root and never stored.
const STANDARD_PREFIXES: &[&str] = &["xsi", "ipxact"];

/// Regenerated from the revision on every save.
const SCHEMA_LOCATION: &str = "xsi:schemaLocation";

/// Parses a complete component document.
///
/// Comments before the root element become the component's top comments.
pub fn load_component_from_str(xml: &str) -> Result<Component, IpxactError> {
    let document = parse_document(xml)?;
    let mut component = read_component(&document.root)?;
    component.top_comments = document.leading_comments;
    Ok(component)
}

/// Reads a component from its root element.
pub fn read_component(root: &XmlElement) -> Result<Component, IpxactError> {
    // 1. Check the document type.
    if root.name() != COMPONENT_ROOT {
        return Err(IpxactError::UnexpectedRoot {
            expected: COMPONENT_ROOT,
            found: root.name().to_string(),
        });
    }

    // 2. Detect the revision from the ipxact namespace.
    let revision = detect_revision(root)?;

    let vlnv = Vlnv {
        vendor: mandatory_text(root, "ipxact:vendor")?,
        library: mandatory_text(root, "ipxact:library")?,
        name: mandatory_text(root, "ipxact:name")?,
        version: mandatory_text(root, "ipxact:version")?,
    };
    debug!("Loading component {} ({:?})", vlnv, revision);

    // 3. Modelled children.
    let indirect_interfaces = root
        .children_named("ipxact:indirectInterfaces")
        .flat_map(|container| container.children_named("ipxact:indirectInterface"))
        .map(|element| read_indirect_interface(element, revision))
        .collect::<Result<Vec<_>, _>>()?;

    // 4. Everything else is kept as is.
    let order = component_order(revision);
    let mut other_elements = Vec::new();
    for element in root.child_elements() {
        if MODELLED_ELEMENTS.contains(&element.name()) {
            continue;
        }
        if !order.contains(&element.name()) {
            warn!(
                "Component {}: unknown element <{}> is kept but has no schema position",
                vlnv,
                element.name()
            );
        }
        other_elements.push(element.clone());
    }
    debug!(
        "Component {}: {} indirect interface(s), {} opaque element(s)",
        vlnv,
        indirect_interfaces.len(),
        other_elements.len()
    );

    Ok(Component {
        revision,
        display_name: optional_text(root, "ipxact:displayName")?,
        short_description: optional_text(root, "ipxact:shortDescription")?,
        description: optional_text(root, "ipxact:description")?,
        indirect_interfaces,
        parameters: read_parameters(root, revision)?,
        vendor_extensions: read_vendor_extensions(root),
        namespaces: read_namespaces(root)?,
        top_comments: Vec::new(),
        other_elements,
        root_attributes: read_root_attributes(root)?,
        inner_comments: read_inner_comments(root),
        vlnv,
    })
}

fn detect_revision(root: &XmlElement) -> Result<Revision, IpxactError> {
    match root.attribute("xmlns:ipxact")? {
        Some(uri) => {
            Revision::from_namespace_uri(&uri).ok_or(IpxactError::UnsupportedRevision(uri))
        }
        None => {
            warn!("Component has no xmlns:ipxact declaration; assuming IP-XACT 2014");
            Ok(Revision::Std14)
        }
    }
}

/// Collects the `xmlns:*` declarations other than `xsi` and `ipxact`.
fn read_namespaces(root: &XmlElement) -> Result<Vec<NamespaceDeclaration>, IpxactError> {
    let mut namespaces = Vec::new();
    for (key, raw) in root.attributes() {
        let Some(prefix) = key.strip_prefix("xmlns:") else {
            continue;
        };
        if STANDARD_PREFIXES.contains(&prefix) {
            continue;
        }
        namespaces.push(NamespaceDeclaration::new(prefix, &unescape(raw)?));
    }
    Ok(namespaces)
}

/// Collects the root attributes that are neither namespace declarations nor
/// the schema location.
fn read_root_attributes(root: &XmlElement) -> Result<Vec<(String, String)>, IpxactError> {
    let mut attributes = Vec::new();
    for (key, raw) in root.attributes() {
        if key.starts_with("xmlns:") || key == SCHEMA_LOCATION {
            continue;
        }
        attributes.push((key.to_string(), unescape(raw)?.into_owned()));
    }
    Ok(attributes)
}

/// Anchors each comment between root children to the element that follows it.
fn read_inner_comments(root: &XmlElement) -> Vec<InnerComment> {
    let mut comments = Vec::new();
    let mut pending = Vec::new();
    for node in root.children() {
        match node {
            XmlNode::Comment(text) => pending.push(text.clone()),
            XmlNode::Element(element) => comments.extend(
                pending
                    .drain(..)
                    .map(|text| InnerComment::new(Some(element.name()), text)),
            ),
            _ => {}
        }
    }
    comments.extend(pending.into_iter().map(|text| InnerComment::new(None, text)));
    comments
}

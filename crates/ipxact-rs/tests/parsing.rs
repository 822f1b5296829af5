// crates/ipxact-rs/tests/parsing.rs

use ipxact_rs::{
    Revision, TransparentBridge, Vlnv, load_component_from_str, save_component_to_string,
    validate_component,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

/// A document already in canonical form is written back byte for byte,
/// including the bus interfaces, memory maps and file sets the model does not
/// cover.
#[test]
fn test_canonical_2014_document_round_trips_exactly() {
    let xml = load_test_file("component_2014.xml");

    let component = load_component_from_str(&xml).expect("Failed to parse 2014 component");
    let saved = save_component_to_string(&component).expect("Failed to save component");

    assert_eq!(saved, xml);
}

/// Root attributes and comments between the root children survive a save.
#[test]
fn test_root_attributes_and_inner_comments_round_trip() {
    let xml = load_test_file("component_2014.xml")
        .replace("index.xsd\">", "index.xsd\" kactus2:extra=\"1\">")
        .replace(
            "\t<ipxact:library>",
            "\t<!-- keep me -->\n\t<ipxact:library>",
        )
        .replace(
            "</ipxact:component>",
            "\t<!-- last words -->\n</ipxact:component>",
        );

    let component = load_component_from_str(&xml).unwrap();
    assert_eq!(
        component.root_attributes,
        vec![("kactus2:extra".to_string(), "1".to_string())]
    );
    assert_eq!(component.inner_comments.len(), 2);

    let saved = save_component_to_string(&component).unwrap();
    assert_eq!(saved, xml);
}

#[test]
fn test_2014_document_model() {
    let xml = load_test_file("component_2014.xml");
    let component = load_component_from_str(&xml).unwrap();

    // 1. Document level
    assert_eq!(component.revision, Revision::Std14);
    assert_eq!(
        component.vlnv,
        Vlnv::new("tuni.fi", "ip.hw", "dma_engine", "1.0")
    );
    assert_eq!(
        component.top_comments,
        vec!["Created by Kactus2 3.13.0 on 2024-05-14".to_string()]
    );
    assert_eq!(
        component.description.as_deref(),
        Some("DMA engine & register file.")
    );
    let opaque: Vec<&str> = component.other_elements.iter().map(|e| e.name()).collect();
    assert_eq!(
        opaque,
        vec!["ipxact:busInterfaces", "ipxact:memoryMaps", "ipxact:fileSets"]
    );

    // 2. The memory-mapped interface
    let config = component
        .indirect_interface("config_port")
        .expect("config_port is missing");
    assert_eq!(config.display_name.as_deref(), Some("Configuration port"));
    assert_eq!(config.memory_map_ref.as_deref(), Some("register_file"));
    assert_eq!(config.bits_in_lau.as_deref(), Some("8"));
    assert_eq!(config.endianness.as_deref(), Some("little"));
    assert_eq!(config.parameters[0].value_id, "uuid_1");
    assert_eq!(config.parameters[0].attributes["resolve"], "user");
    assert_eq!(config.vendor_extensions[0].name(), "kactus2:position");

    // 3. The bridged interface
    let bridged = component.indirect_interface("bridge_port").unwrap();
    assert_eq!(bridged.memory_map_ref, None);
    assert_eq!(
        bridged.transparent_bridges,
        vec![
            TransparentBridge::new("cpu_bus"),
            TransparentBridge {
                is_present: Some("DEBUG_EN == 1".to_string()),
                ..TransparentBridge::new("cpu_bus")
            },
        ]
    );

    // 4. Component-level content
    assert_eq!(component.parameters[0].name, "DEBUG_EN");
    assert_eq!(component.vendor_extensions.len(), 2);
}

#[test]
fn test_2014_document_is_consistent() {
    let xml = load_test_file("component_2014.xml");
    let component = load_component_from_str(&xml).unwrap();

    assert_eq!(validate_component(&component), Vec::new());
}

#[test]
fn test_2022_document_model() {
    let xml = load_test_file("component_2022.xml");
    let component = load_component_from_str(&xml).expect("Failed to parse 2022 component");

    assert_eq!(component.revision, Revision::Std22);
    // Text content is kept verbatim, surrounding whitespace included.
    assert_eq!(component.vlnv.vendor, " acme.example ");
    assert_eq!(component.display_name.as_deref(), Some("UART"));
    assert_eq!(component.short_description.as_deref(), Some("Serial port"));
    assert_eq!(component.top_comments.len(), 2);

    let prefixes: Vec<&str> = component
        .namespaces
        .iter()
        .map(|n| n.prefix.as_str())
        .collect();
    assert_eq!(prefixes, vec!["kactus2", "acme"]);

    let window = component.indirect_interface("window").unwrap();
    assert_eq!(window.short_description.as_deref(), Some("Register window"));
    assert_eq!(window.transparent_bridges.len(), 1);
    let bridge = &window.transparent_bridges[0];
    assert_eq!(bridge.master_ref, "host");
    assert_eq!(
        bridge.vendor_extensions[0].element().text().unwrap(),
        "bridged <debug> access"
    );
    assert_eq!(window.parameters[0].vectors.len(), 1);

    assert!(validate_component(&component).is_empty());
}

#[test]
fn test_2022_document_saves_in_canonical_form() {
    let xml = load_test_file("component_2022.xml");
    let component = load_component_from_str(&xml).unwrap();

    let saved = save_component_to_string(&component).unwrap();

    assert!(saved.starts_with(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <!-- Hand written test component -->\n\
         <!-- Second comment -->\n\
         <ipxact:component xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2022\" \
         xmlns:kactus2=\"http://kactus2.cs.tut.fi\" \
         xmlns:acme=\"http://acme.example/ipxact\" \
         xsi:schemaLocation="
    ));
    assert!(saved.contains(
        "\t\t\t<ipxact:transparentBridge initiatorRef=\"host\">\n\
         \t\t\t\t<ipxact:vendorExtensions>\n\
         \t\t\t\t\t<acme:note priority=\"low\">bridged &lt;debug&gt; access</acme:note>\n\
         \t\t\t\t</ipxact:vendorExtensions>\n\
         \t\t\t</ipxact:transparentBridge>\n"
    ));
    // The element without a schema slot ends up right before vendorExtensions.
    assert!(saved.contains(
        "\t\t<acme:entry>one</acme:entry>\n\
         \t</acme:customData>\n\
         \t<ipxact:vendorExtensions>\n"
    ));

    // Saving the reloaded document changes nothing.
    let reloaded = load_component_from_str(&saved).unwrap();
    assert_eq!(reloaded, component);
    assert_eq!(save_component_to_string(&reloaded).unwrap(), saved);
}

#[test]
fn test_revision_change_rewrites_bridges() {
    let xml = load_test_file("component_2014.xml");
    let mut component = load_component_from_str(&xml).unwrap();
    component.revision = Revision::Std22;

    let saved = save_component_to_string(&component).unwrap();

    assert!(saved.contains("<ipxact:transparentBridge initiatorRef=\"cpu_bus\"/>"));
    assert!(!saved.contains("masterRef"));
    assert!(!saved.contains("<ipxact:isPresent>"));
    assert!(saved.contains("1685-2022"));
}

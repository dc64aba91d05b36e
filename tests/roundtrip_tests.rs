//! Round-trip tests: save then load must reproduce the document in both
//! encodings, and both encodings must decode to the same document.

mod common;

use common::*;
use dxfio::{Color, DxfDocument, Entity, Layer, Line, Vector3};

#[test]
fn all_entities_roundtrip_text() {
    let doc = create_all_entities_document();
    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(doc.entities, reloaded.entities);
}

#[test]
fn all_entities_roundtrip_binary() {
    let doc = create_all_entities_document();
    let reloaded = load_bytes(save_binary(&doc)).unwrap();
    assert_eq!(doc.entities, reloaded.entities);
}

#[test]
fn cross_encoding_equivalence() {
    let doc = create_all_entities_document();
    let from_text = load_text(&save_text(&doc)).unwrap();
    let from_binary = load_bytes(save_binary(&doc)).unwrap();
    assert_eq!(from_text.entities, from_binary.entities);
    assert_eq!(from_text.header, from_binary.header);
}

#[test]
fn default_line_roundtrips_to_defaults() {
    // a bare line writes no optional fields and reads back all-default
    let mut doc = DxfDocument::new();
    doc.add_entity(Entity::Line(Line::new()));

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(reloaded.entities.len(), 1);
    match &reloaded.entities[0] {
        Entity::Line(line) => {
            assert_eq!(*line, Line::new());
            assert_eq!(line.p1, Vector3::ZERO);
            assert_eq!(line.p2, Vector3::ZERO);
        }
        other => panic!("expected a line, got {}", other.type_name()),
    }
}

#[test]
fn header_roundtrips() {
    let mut doc = DxfDocument::new();
    doc.header.set_version("AC1009");
    doc.header.set_current_layer("Walls");
    doc.header.set_insertion_units(4);
    doc.header.set_unit_precision(2);
    doc.header.set_extents_min(Vector3::new(-10.0, -20.0, 0.0));
    doc.header.set_extents_max(Vector3::new(100.0, 200.0, 0.0));

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(doc.header, reloaded.header);
    assert_eq!(reloaded.header.current_layer(), "Walls");
    assert_eq!(reloaded.header.unit_precision(), 2);
}

#[test]
fn tables_roundtrip() {
    let mut doc = DxfDocument::new();

    let mut layer = Layer::new("Walls");
    layer.color = Color::RED;
    layer.linetype = "DASHED".to_string();
    layer.flags = dxfio::tables::LayerFlags::FROZEN | dxfio::tables::LayerFlags::LOCKED;
    doc.layers.insert(layer.clone());

    let mut line_type = dxfio::LineType::new("DASHED");
    line_type.description = "- - - -".to_string();
    line_type.pattern_length = 0.75;
    line_type.dash_lengths = vec![0.5, -0.25];
    doc.line_types.insert(line_type.clone());

    let mut vport = dxfio::VPort::new("*ACTIVE");
    vport.view_height = 100.0;
    vport.view_center = Vector3::new(50.0, 25.0, 0.0);
    doc.view_ports.insert(vport.clone());

    let mut style = dxfio::Style::new("NOTES");
    style.fixed_height = 2.5;
    style.font = "simplex".to_string();
    doc.styles.insert(style.clone());

    let mut ucs = dxfio::Ucs::new("PLAN");
    ucs.origin = Vector3::new(1.0, 2.0, 3.0);
    doc.coordinate_systems.insert(ucs.clone());

    doc.app_ids.insert(dxfio::AppId::new("DXFIO"));
    doc.block_records.insert(dxfio::BlockRecord::new("DOOR"));

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(reloaded.layers.get("Walls"), Some(&layer));
    assert_eq!(reloaded.line_types.get("DASHED"), Some(&line_type));
    assert_eq!(reloaded.view_ports.get("*ACTIVE"), Some(&vport));
    assert_eq!(reloaded.styles.get("NOTES"), Some(&style));
    assert_eq!(reloaded.coordinate_systems.get("PLAN"), Some(&ucs));
    assert!(reloaded.app_ids.contains("DXFIO"));
    assert!(reloaded.block_records.contains("DOOR"));

    let binary_reloaded = load_bytes(save_binary(&doc)).unwrap();
    assert_eq!(binary_reloaded.layers.get("Walls"), Some(&layer));
    assert_eq!(binary_reloaded.line_types.get("DASHED"), Some(&line_type));
}

#[test]
fn blocks_roundtrip() {
    let mut doc = DxfDocument::new();
    let mut block = dxfio::Block::new("DOOR");
    block.base_point = Vector3::new(1.0, 2.0, 0.0);
    block.entities.push(Entity::Line(Line::from_points(
        Vector3::ZERO,
        Vector3::new(0.0, 7.0, 0.0),
    )));
    doc.blocks.push(block.clone());

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(reloaded.blocks.len(), 1);
    assert_eq!(reloaded.blocks[0], block);

    let binary_reloaded = load_bytes(save_binary(&doc)).unwrap();
    assert_eq!(binary_reloaded.blocks[0], block);
}

#[test]
fn thumbnail_roundtrips_both_encodings() {
    let mut doc = DxfDocument::new();
    // more than one 128-byte chunk
    let data: Vec<u8> = (0..=255u8).collect();
    doc.thumbnail = Some(dxfio::Thumbnail { data: data.clone() });

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(reloaded.thumbnail.as_ref().unwrap().data, data);

    let binary_reloaded = load_bytes(save_binary(&doc)).unwrap();
    assert_eq!(binary_reloaded.thumbnail.as_ref().unwrap().data, data);
}

#[test]
fn empty_document_roundtrips() {
    let doc = DxfDocument::new();
    let text = save_text(&doc);
    // no content means no sections, just the EOF marker
    assert!(!text.contains("SECTION"));
    let reloaded = load_text(&text).unwrap();
    assert!(reloaded.entities.is_empty());
    assert!(reloaded.header.is_empty());
}

#[test]
fn unknown_entity_reemitted_verbatim() {
    let content = "  0\nSECTION\n  2\nENTITIES\n  0\nWEIRDTYPE\n  8\nCustom\n 10\n1.5\n  0\nENDSEC\n  0\nEOF\n";
    let doc = load_text(content).unwrap();
    assert_eq!(doc.entities.len(), 1);

    let reloaded = load_text(&save_text(&doc)).unwrap();
    assert_eq!(doc.entities, reloaded.entities);
    match &reloaded.entities[0] {
        Entity::Unknown(unknown) => {
            assert_eq!(unknown.type_name, "WEIRDTYPE");
            assert_eq!(unknown.pairs.len(), 2);
        }
        other => panic!("expected unknown entity, got {}", other.type_name()),
    }
}

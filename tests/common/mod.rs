//! Shared test document builders.

#![allow(dead_code)]

use std::io::Cursor;

use dxfio::entities::text::{HorizontalJustification, VerticalJustification};
use dxfio::{
    Arc, Circle, Color, Dimension, DxfDocument, Ellipse, Entity, Image, Line, Polyline, Solid,
    Text, Vector3,
};

/// Load a document from an ASCII DXF string.
pub fn load_text(content: &str) -> dxfio::Result<DxfDocument> {
    DxfDocument::load(Cursor::new(content.as_bytes().to_vec()))
}

/// Load a document from raw bytes (text or binary).
pub fn load_bytes(content: Vec<u8>) -> dxfio::Result<DxfDocument> {
    DxfDocument::load(Cursor::new(content))
}

/// Save a document to an ASCII string.
pub fn save_text(doc: &DxfDocument) -> String {
    let mut buf = Vec::new();
    doc.save(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Save a document to binary bytes.
pub fn save_binary(doc: &DxfDocument) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_binary(&mut buf).unwrap();
    buf
}

/// A document containing one instance of every supported entity kind with
/// deliberately non-default field values, including boundary values
/// (negative coordinates, 360-degree arc, zero-radius circle).
pub fn create_all_entities_document() -> DxfDocument {
    let mut doc = DxfDocument::new();

    let mut line = Line::from_points(
        Vector3::new(-1.0, -2.5, 3.0),
        Vector3::new(4.0, 5.0, -6.0),
    );
    line.thickness = 7.0;
    line.common.color = Color::WHITE;
    doc.add_entity(Entity::Line(line));

    // zero radius is legal on the wire
    let circle = Circle::from_center(Vector3::new(10.0, 20.0, 0.0), 0.0);
    doc.add_entity(Entity::Circle(circle));

    // full sweep arc
    let arc = Arc::from_center(Vector3::new(0.5, 0.5, 0.0), 2.0, 0.0, 360.0);
    doc.add_entity(Entity::Arc(arc));

    let mut ellipse = Ellipse::from_center(
        Vector3::new(1.0, 1.0, 0.0),
        Vector3::new(3.0, 0.0, 0.0),
        0.5,
    );
    ellipse.start_parameter = 0.25;
    ellipse.end_parameter = 4.5;
    doc.add_entity(Entity::Ellipse(ellipse));

    let mut text = Text::from_value(Vector3::new(2.0, 3.0, 0.0), 2.5, "hello dxf");
    text.rotation = 45.0;
    text.horizontal_justification = HorizontalJustification::Center;
    text.vertical_justification = VerticalJustification::Middle;
    text.second_alignment_point = Vector3::new(2.5, 3.0, 0.0);
    doc.add_entity(Entity::Text(text));

    let mut poly = Polyline::from_points(vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(5.0, 0.0, 0.0),
        Vector3::new(5.0, 5.0, 0.0),
    ]);
    poly.flags = 1;
    poly.elevation = 1.5;
    poly.vertices[1].bulge = 0.5;
    doc.add_entity(Entity::Polyline(poly));

    let mut solid = Solid::new();
    solid.first_corner = Vector3::new(0.0, 0.0, 0.0);
    solid.second_corner = Vector3::new(1.0, 0.0, 0.0);
    solid.third_corner = Vector3::new(0.0, 1.0, 0.0);
    solid.fourth_corner = Vector3::new(1.0, 1.0, 0.0);
    doc.add_entity(Entity::Solid(solid));

    let mut dimension = Dimension::new();
    dimension.definition_point = Vector3::new(3.0, 0.0, 0.0);
    dimension.text_midpoint = Vector3::new(1.5, 0.5, 0.0);
    dimension.dimension_type = 1;
    dimension.text = "3.00".to_string();
    doc.add_entity(Entity::Dimension(dimension));

    let mut image = Image::new();
    image.insertion_point = Vector3::new(-5.0, -5.0, 0.0);
    image.size = Vector3::new(640.0, 480.0, 0.0);
    image.brightness = 75;
    doc.add_entity(Entity::Image(image));

    doc
}

//! DXF section writers
//!
//! The structural mirror of the section parsers: sections in canonical
//! order, each entity's type tag followed by its non-default fields in a
//! fixed code order so output stays deterministic and diffable.

use crate::document::DxfDocument;
use crate::entities::{
    Arc, Block, Circle, Dimension, Ellipse, Entity, EntityCommon, Image, Line, Polyline, Solid,
    Text, Vertex, DEFAULT_LAYER, LINETYPE_BY_LAYER,
};
use crate::entities::text::{HorizontalJustification, VerticalJustification};
use crate::error::Result;
use crate::types::{Color, Vector3};

use super::stream_writer::{PairSink, PairSinkExt};

/// Thumbnail bytes per code 310 chunk (256 hex characters in text mode)
const THUMBNAIL_CHUNK_SIZE: usize = 128;

/// Writes all DXF sections
pub struct SectionWriter<'a, W: PairSink> {
    writer: &'a mut W,
}

impl<'a, W: PairSink> SectionWriter<'a, W> {
    /// Create a new section writer
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    // ── HEADER ──────────────────────────────────────────────────────────

    /// Write the HEADER section in variable insertion order
    pub fn write_header(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("HEADER")?;
        for (name, pairs) in document.header.variables() {
            self.writer.write_string(9, name)?;
            for pair in pairs {
                self.writer.write_pair(pair)?;
            }
        }
        self.writer.write_section_end()
    }

    // ── TABLES ──────────────────────────────────────────────────────────

    /// Write the TABLES section, tables in the conventional order
    pub fn write_tables(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("TABLES")?;

        if !document.view_ports.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "VPORT")?;
            for vport in document.view_ports.iter() {
                self.write_vport_record(vport)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.line_types.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "LTYPE")?;
            for line_type in document.line_types.iter() {
                self.write_linetype_record(line_type)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.layers.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "LAYER")?;
            for layer in document.layers.iter() {
                self.write_layer_record(layer)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.styles.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "STYLE")?;
            for style in document.styles.iter() {
                self.write_style_record(style)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.coordinate_systems.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "UCS")?;
            for ucs in document.coordinate_systems.iter() {
                self.write_ucs_record(ucs)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.app_ids.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "APPID")?;
            for app_id in document.app_ids.iter() {
                self.writer.write_string(0, "APPID")?;
                self.writer.write_string(2, &app_id.name)?;
                self.writer.write_short(70, app_id.flags)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        if !document.block_records.is_empty() {
            self.writer.write_string(0, "TABLE")?;
            self.writer.write_string(2, "BLOCK_RECORD")?;
            for record in document.block_records.iter() {
                self.writer.write_string(0, "BLOCK_RECORD")?;
                self.writer.write_string(2, &record.name)?;
                self.writer.write_short(70, record.flags)?;
            }
            self.writer.write_string(0, "ENDTAB")?;
        }

        self.writer.write_section_end()
    }

    fn write_layer_record(&mut self, layer: &crate::tables::Layer) -> Result<()> {
        self.writer.write_string(0, "LAYER")?;
        self.writer.write_string(2, &layer.name)?;
        self.writer.write_short(70, layer.flags.bits())?;
        self.writer.write_short(62, layer.raw_color())?;
        self.writer.write_string(6, &layer.linetype)?;
        Ok(())
    }

    fn write_vport_record(&mut self, vport: &crate::tables::VPort) -> Result<()> {
        self.writer.write_string(0, "VPORT")?;
        self.writer.write_string(2, &vport.name)?;
        self.writer.write_point2d(10, vport.lower_left)?;
        self.writer.write_point2d(11, vport.upper_right)?;
        self.writer.write_point2d(12, vport.view_center)?;
        self.writer.write_point2d(13, vport.snap_base)?;
        self.writer.write_point2d(14, vport.snap_spacing)?;
        self.writer.write_point2d(15, vport.grid_spacing)?;
        self.writer.write_point3d(16, vport.view_direction)?;
        self.writer.write_point3d(17, vport.view_target)?;
        self.writer.write_double(40, vport.view_height)?;
        self.writer.write_double(41, vport.aspect_ratio)?;
        self.writer.write_double(42, vport.lens_length)?;
        self.writer.write_double(43, vport.front_clip)?;
        self.writer.write_double(44, vport.back_clip)?;
        self.writer.write_double(50, vport.snap_rotation)?;
        self.writer.write_double(51, vport.view_twist)?;
        Ok(())
    }

    fn write_style_record(&mut self, style: &crate::tables::Style) -> Result<()> {
        self.writer.write_string(0, "STYLE")?;
        self.writer.write_string(2, &style.name)?;
        self.writer.write_short(70, style.flags)?;
        self.writer.write_double(40, style.fixed_height)?;
        self.writer.write_double(41, style.width_factor)?;
        self.writer.write_double(50, style.oblique_angle)?;
        self.writer.write_short(71, style.generation_flags)?;
        self.writer.write_double(42, style.last_height)?;
        self.writer.write_string(3, &style.font)?;
        self.writer.write_string(4, &style.big_font)?;
        Ok(())
    }

    fn write_ucs_record(&mut self, ucs: &crate::tables::Ucs) -> Result<()> {
        self.writer.write_string(0, "UCS")?;
        self.writer.write_string(2, &ucs.name)?;
        self.writer.write_point3d(10, ucs.origin)?;
        self.writer.write_point3d(11, ucs.x_axis)?;
        self.writer.write_point3d(12, ucs.y_axis)?;
        Ok(())
    }

    fn write_linetype_record(&mut self, line_type: &crate::tables::LineType) -> Result<()> {
        self.writer.write_string(0, "LTYPE")?;
        self.writer.write_string(2, &line_type.name)?;
        self.writer.write_string(3, &line_type.description)?;
        self.writer.write_short(70, line_type.flags)?;
        self.writer.write_short(72, line_type.alignment)?;
        self.writer.write_short(73, line_type.element_count())?;
        self.writer.write_double(40, line_type.pattern_length)?;
        for dash in &line_type.dash_lengths {
            self.writer.write_double(49, *dash)?;
        }
        Ok(())
    }

    // ── BLOCKS ──────────────────────────────────────────────────────────

    /// Write the BLOCKS section
    pub fn write_blocks(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("BLOCKS")?;
        for block in &document.blocks {
            self.write_block(block)?;
        }
        self.writer.write_section_end()
    }

    fn write_block(&mut self, block: &Block) -> Result<()> {
        self.writer.write_string(0, "BLOCK")?;
        if block.layer != DEFAULT_LAYER {
            self.writer.write_string(8, &block.layer)?;
        }
        self.writer.write_string(2, &block.name)?;
        self.writer.write_short(70, block.flags)?;
        self.writer.write_point3d(10, block.base_point)?;
        for entity in &block.entities {
            self.write_entity(entity)?;
        }
        self.writer.write_string(0, "ENDBLK")?;
        Ok(())
    }

    // ── ENTITIES ────────────────────────────────────────────────────────

    /// Write the ENTITIES section
    pub fn write_entities(&mut self, document: &DxfDocument) -> Result<()> {
        self.writer.write_section_start("ENTITIES")?;
        for entity in &document.entities {
            self.write_entity(entity)?;
        }
        self.writer.write_section_end()
    }

    /// Write one entity: type tag, common attributes, then geometry
    pub fn write_entity(&mut self, entity: &Entity) -> Result<()> {
        self.writer.write_string(0, entity.type_name())?;
        if let Some(common) = entity.common() {
            self.write_common(common)?;
        }
        match entity {
            Entity::Line(line) => self.write_line(line),
            Entity::Circle(circle) => self.write_circle(circle),
            Entity::Arc(arc) => self.write_arc(arc),
            Entity::Ellipse(ellipse) => self.write_ellipse(ellipse),
            Entity::Text(text) => self.write_text(text),
            Entity::Polyline(poly) => self.write_polyline(poly),
            Entity::Solid(solid) => self.write_solid(solid),
            Entity::Dimension(dimension) => self.write_dimension(dimension),
            Entity::Image(image) => self.write_image(image),
            Entity::Unknown(unknown) => {
                for pair in &unknown.pairs {
                    self.writer.write_pair(pair)?;
                }
                Ok(())
            }
        }
    }

    /// Write the shared attributes, omitting fields at their defaults
    fn write_common(&mut self, common: &EntityCommon) -> Result<()> {
        if !common.handle.is_null() {
            self.writer.write_handle(5, common.handle)?;
        }
        if common.linetype != LINETYPE_BY_LAYER {
            self.writer.write_string(6, &common.linetype)?;
        }
        if common.layer != DEFAULT_LAYER {
            self.writer.write_string(8, &common.layer)?;
        }
        if common.linetype_scale != 1.0 {
            self.writer.write_double(48, common.linetype_scale)?;
        }
        if !common.visible {
            self.writer.write_short(60, 1)?;
        }
        if common.color != Color::ByLayer {
            self.writer.write_short(62, common.color.raw_value())?;
        }
        if common.paper_space {
            self.writer.write_short(67, 1)?;
        }
        Ok(())
    }

    fn write_thickness(&mut self, thickness: f64) -> Result<()> {
        if thickness != 0.0 {
            self.writer.write_double(39, thickness)?;
        }
        Ok(())
    }

    fn write_normal(&mut self, normal: Vector3) -> Result<()> {
        if normal != Vector3::UNIT_Z {
            self.writer.write_point3d(210, normal)?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: &Line) -> Result<()> {
        self.write_thickness(line.thickness)?;
        self.writer.write_point3d(10, line.p1)?;
        self.writer.write_point3d(11, line.p2)?;
        self.write_normal(line.normal)
    }

    fn write_circle(&mut self, circle: &Circle) -> Result<()> {
        self.write_thickness(circle.thickness)?;
        self.writer.write_point3d(10, circle.center)?;
        self.writer.write_double(40, circle.radius)?;
        self.write_normal(circle.normal)
    }

    fn write_arc(&mut self, arc: &Arc) -> Result<()> {
        self.write_thickness(arc.thickness)?;
        self.writer.write_point3d(10, arc.center)?;
        self.writer.write_double(40, arc.radius)?;
        self.writer.write_double(50, arc.start_angle)?;
        self.writer.write_double(51, arc.end_angle)?;
        self.write_normal(arc.normal)
    }

    fn write_ellipse(&mut self, ellipse: &Ellipse) -> Result<()> {
        self.writer.write_point3d(10, ellipse.center)?;
        self.writer.write_point3d(11, ellipse.major_axis)?;
        self.writer.write_double(40, ellipse.minor_ratio)?;
        self.writer.write_double(41, ellipse.start_parameter)?;
        self.writer.write_double(42, ellipse.end_parameter)?;
        self.write_normal(ellipse.normal)
    }

    fn write_text(&mut self, text: &Text) -> Result<()> {
        self.write_thickness(text.thickness)?;
        self.writer.write_point3d(10, text.location)?;
        self.writer.write_double(40, text.height)?;
        self.writer.write_string(1, &text.value)?;
        if text.rotation != 0.0 {
            self.writer.write_double(50, text.rotation)?;
        }
        if text.relative_x_scale != 1.0 {
            self.writer.write_double(41, text.relative_x_scale)?;
        }
        if text.oblique_angle != 0.0 {
            self.writer.write_double(51, text.oblique_angle)?;
        }
        if text.style_name != "STANDARD" {
            self.writer.write_string(7, &text.style_name)?;
        }
        if text.second_alignment_point != Vector3::ZERO {
            self.writer.write_point3d(11, text.second_alignment_point)?;
        }
        if text.horizontal_justification != HorizontalJustification::Left {
            self.writer
                .write_short(72, text.horizontal_justification.raw_value())?;
        }
        if text.vertical_justification != VerticalJustification::Baseline {
            self.writer
                .write_short(73, text.vertical_justification.raw_value())?;
        }
        self.write_normal(text.normal)
    }

    fn write_polyline(&mut self, poly: &Polyline) -> Result<()> {
        if poly.flags != 0 {
            self.writer.write_short(70, poly.flags)?;
        }
        // codes 10/20 carry dummy zeros; the elevation rides in code 30
        self.writer.write_double(10, 0.0)?;
        self.writer.write_double(20, 0.0)?;
        self.writer.write_double(30, poly.elevation)?;
        if poly.default_start_width != 0.0 {
            self.writer.write_double(40, poly.default_start_width)?;
        }
        if poly.default_end_width != 0.0 {
            self.writer.write_double(41, poly.default_end_width)?;
        }
        self.write_normal(poly.normal)?;

        for vertex in &poly.vertices {
            self.write_vertex(vertex)?;
        }
        self.writer.write_string(0, "SEQEND")?;
        Ok(())
    }

    fn write_vertex(&mut self, vertex: &Vertex) -> Result<()> {
        self.writer.write_string(0, "VERTEX")?;
        self.writer.write_point3d(10, vertex.location)?;
        if vertex.start_width != 0.0 {
            self.writer.write_double(40, vertex.start_width)?;
        }
        if vertex.end_width != 0.0 {
            self.writer.write_double(41, vertex.end_width)?;
        }
        if vertex.bulge != 0.0 {
            self.writer.write_double(42, vertex.bulge)?;
        }
        if vertex.flags != 0 {
            self.writer.write_short(70, vertex.flags)?;
        }
        Ok(())
    }

    fn write_solid(&mut self, solid: &Solid) -> Result<()> {
        self.write_thickness(solid.thickness)?;
        self.writer.write_point3d(10, solid.first_corner)?;
        self.writer.write_point3d(11, solid.second_corner)?;
        self.writer.write_point3d(12, solid.third_corner)?;
        self.writer.write_point3d(13, solid.fourth_corner)?;
        self.write_normal(solid.normal)
    }

    fn write_dimension(&mut self, dimension: &Dimension) -> Result<()> {
        self.writer.write_point3d(10, dimension.definition_point)?;
        self.writer.write_point3d(11, dimension.text_midpoint)?;
        if dimension.dimension_type != 0 {
            self.writer.write_short(70, dimension.dimension_type)?;
        }
        if !dimension.text.is_empty() {
            self.writer.write_string(1, &dimension.text)?;
        }
        if dimension.style_name != "STANDARD" {
            self.writer.write_string(3, &dimension.style_name)?;
        }
        Ok(())
    }

    fn write_image(&mut self, image: &Image) -> Result<()> {
        self.writer.write_point3d(10, image.insertion_point)?;
        self.writer.write_point3d(11, image.u_vector)?;
        self.writer.write_point3d(12, image.v_vector)?;
        self.writer.write_point2d(13, image.size)?;
        if !image.image_definition.is_null() {
            self.writer.write_handle(340, image.image_definition)?;
        }
        if image.display_flags != 1 {
            self.writer.write_short(70, image.display_flags)?;
        }
        if image.clipping {
            self.writer.write_short(280, 1)?;
        }
        if image.brightness != 50 {
            self.writer.write_short(281, image.brightness)?;
        }
        if image.contrast != 50 {
            self.writer.write_short(282, image.contrast)?;
        }
        if image.fade != 0 {
            self.writer.write_short(283, image.fade)?;
        }
        Ok(())
    }

    // ── THUMBNAIL ───────────────────────────────────────────────────────

    /// Write the THUMBNAILIMAGE section
    pub fn write_thumbnail(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_section_start("THUMBNAILIMAGE")?;
        self.writer.write_int(90, data.len() as i32)?;
        for chunk in data.chunks(THUMBNAIL_CHUNK_SIZE) {
            self.writer.write_binary(310, chunk)?;
        }
        self.writer.write_section_end()
    }
}

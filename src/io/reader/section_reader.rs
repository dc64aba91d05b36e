//! DXF section parsers
//!
//! One parser per top-level section, all consuming pairs through the shared
//! buffer cursor. Entity and table-record parsers stop at the next
//! `(0, ...)` pair without consuming it; the caller owns dispatch.

use crate::document::{DxfDocument, Thumbnail};
use crate::entities::{
    Arc, Block, Circle, Dimension, Ellipse, Entity, EntityCommon, Image, Line, Polyline, Solid,
    Text, Unknown, Vertex,
};
use crate::entities::text::{HorizontalJustification, VerticalJustification};
use crate::error::{DxfError, Result};
use crate::header::Header;
use crate::io::buffer::CodePairBuffer;
use crate::io::code_pair::CodePair;
use crate::notification::{NotificationCollection, NotificationType};
use crate::tables::{AppId, BlockRecord, Layer, LayerFlags, LineType, Style, Ucs, VPort};
use crate::types::Color;

/// States of the header variable parser
enum HeaderState {
    AwaitingName,
    AwaitingValue { name: String, pairs: Vec<CodePair> },
}

/// Section parser over a shared pair cursor
pub struct SectionReader<'a> {
    buffer: &'a mut CodePairBuffer,
}

impl<'a> SectionReader<'a> {
    /// Create a new section reader
    pub fn new(buffer: &'a mut CodePairBuffer) -> Self {
        Self { buffer }
    }

    // ── HEADER ──────────────────────────────────────────────────────────

    /// Read the HEADER section.
    ///
    /// Variables arrive as a `(9, name)` pair followed by one or more value
    /// pairs; the two-state machine makes the "dangling name at end of
    /// section" invariant directly checkable.
    pub fn read_header(&mut self, document: &mut DxfDocument) -> Result<()> {
        let mut state = HeaderState::AwaitingName;

        loop {
            let pair = self.buffer.take()?;
            if pair.is_section_end() {
                match state {
                    HeaderState::AwaitingName => {}
                    HeaderState::AwaitingValue { name, pairs } => {
                        if pairs.is_empty() {
                            return Err(DxfError::structure(format!(
                                "header variable '{}' has no value",
                                name
                            )));
                        }
                        Self::store_header_variable(document, name, pairs);
                    }
                }
                return Ok(());
            }

            state = match state {
                HeaderState::AwaitingName => {
                    if pair.code() != 9 {
                        return Err(DxfError::structure(format!(
                            "expected header variable name, got {}",
                            pair
                        )));
                    }
                    HeaderState::AwaitingValue {
                        name: pair.as_str().unwrap_or_default().to_string(),
                        pairs: Vec::new(),
                    }
                }
                HeaderState::AwaitingValue { name, mut pairs } => {
                    if pair.code() == 9 {
                        if pairs.is_empty() {
                            return Err(DxfError::structure(format!(
                                "header variable '{}' has no value",
                                name
                            )));
                        }
                        Self::store_header_variable(document, name, pairs);
                        HeaderState::AwaitingValue {
                            name: pair.as_str().unwrap_or_default().to_string(),
                            pairs: Vec::new(),
                        }
                    } else if pair.code() == 0 {
                        return Err(DxfError::structure(format!(
                            "unexpected {} inside HEADER section",
                            pair
                        )));
                    } else {
                        pairs.push(pair);
                        HeaderState::AwaitingValue { name, pairs }
                    }
                }
            };
        }
    }

    fn store_header_variable(document: &mut DxfDocument, name: String, pairs: Vec<CodePair>) {
        if Header::is_known_variable(&name) {
            document.header.set_raw(name, pairs);
        } else {
            document.notifications.notify(
                NotificationType::Warning,
                format!("ignored unknown header variable '{}'", name),
            );
        }
    }

    // ── TABLES ──────────────────────────────────────────────────────────

    /// Read the TABLES section
    pub fn read_tables(&mut self, document: &mut DxfDocument) -> Result<()> {
        loop {
            let pair = self.buffer.take()?;
            if pair.is_section_end() {
                return Ok(());
            }
            if !pair.is_marker("TABLE") {
                return Err(DxfError::structure(format!(
                    "expected TABLE in TABLES section, got {}",
                    pair
                )));
            }

            let name_pair = self.buffer.take()?;
            if name_pair.code() != 2 {
                return Err(DxfError::structure(format!(
                    "expected table name pair after TABLE, got code {}",
                    name_pair.code()
                )));
            }
            let name = name_pair.as_str().unwrap_or_default().to_string();

            match name.as_str() {
                "LAYER" => self.read_layer_table(document)?,
                "VPORT" => self.read_vport_table(document)?,
                "STYLE" => self.read_style_table(document)?,
                "APPID" => self.read_appid_table(document)?,
                "UCS" => self.read_ucs_table(document)?,
                "BLOCK_RECORD" => self.read_block_record_table(document)?,
                "LTYPE" => self.read_linetype_table(document)?,
                _ => {
                    document.notifications.notify(
                        NotificationType::NotSupported,
                        format!("skipped unrecognized table '{}'", name),
                    );
                    self.skip_table()?;
                }
            }
        }
    }

    /// Consume pairs up to and including the next `(0, "ENDTAB")`
    fn skip_table(&mut self) -> Result<()> {
        loop {
            let pair = self.buffer.take()?;
            if pair.is_marker("ENDTAB") {
                return Ok(());
            }
        }
    }

    /// One table loop: record sentinel starts a record, ENDTAB stops, and
    /// anything else is skipped for forward compatibility.
    fn read_table_records<T>(
        &mut self,
        record_sentinel: &str,
        read_record: impl Fn(&mut Self) -> Result<T>,
        mut store: impl FnMut(T),
    ) -> Result<()> {
        loop {
            let pair = self.buffer.peek()?;
            if pair.is_marker("ENDTAB") {
                self.buffer.advance();
                return Ok(());
            }
            if pair.is_marker(record_sentinel) {
                self.buffer.advance();
                store(read_record(self)?);
            } else {
                self.buffer.advance();
            }
        }
    }

    fn read_layer_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let mut duplicates = Vec::new();
        let layers = &mut document.layers;
        self.read_table_records("LAYER", Self::read_layer_record, |layer: Layer| {
            if layers.insert(layer.clone()).is_some() {
                duplicates.push(layer.name);
            }
        })?;
        for name in duplicates {
            document.notifications.notify(
                NotificationType::Warning,
                format!("duplicate layer '{}' overwritten, last wins", name),
            );
        }
        Ok(())
    }

    fn read_layer_record(&mut self) -> Result<Layer> {
        let mut layer = Layer::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                2 => layer.name = pair.as_str().unwrap_or_default().to_string(),
                6 => layer.linetype = pair.as_str().unwrap_or_default().to_string(),
                62 => {
                    if let Some(value) = pair.as_short() {
                        layer.set_raw_color(value);
                    }
                }
                70 => {
                    if let Some(value) = pair.as_short() {
                        layer.flags = LayerFlags::from_bits_truncate(value);
                    }
                }
                _ => {}
            }
        }
        Ok(layer)
    }

    fn read_vport_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let view_ports = &mut document.view_ports;
        self.read_table_records("VPORT", Self::read_vport_record, |vport| {
            view_ports.insert(vport);
        })
    }

    fn read_vport_record(&mut self) -> Result<VPort> {
        let mut vport = VPort::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            let code = pair.code();
            match code {
                2 => vport.name = pair.as_str().unwrap_or_default().to_string(),
                _ => {
                    if let Some(value) = pair.as_double() {
                        match code {
                            10 => vport.lower_left.x = value,
                            20 => vport.lower_left.y = value,
                            11 => vport.upper_right.x = value,
                            21 => vport.upper_right.y = value,
                            12 => vport.view_center.x = value,
                            22 => vport.view_center.y = value,
                            13 => vport.snap_base.x = value,
                            23 => vport.snap_base.y = value,
                            14 => vport.snap_spacing.x = value,
                            24 => vport.snap_spacing.y = value,
                            15 => vport.grid_spacing.x = value,
                            25 => vport.grid_spacing.y = value,
                            16 => vport.view_direction.x = value,
                            26 => vport.view_direction.y = value,
                            36 => vport.view_direction.z = value,
                            17 => vport.view_target.x = value,
                            27 => vport.view_target.y = value,
                            37 => vport.view_target.z = value,
                            40 => vport.view_height = value,
                            41 => vport.aspect_ratio = value,
                            42 => vport.lens_length = value,
                            43 => vport.front_clip = value,
                            44 => vport.back_clip = value,
                            50 => vport.snap_rotation = value,
                            51 => vport.view_twist = value,
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(vport)
    }

    fn read_style_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let styles = &mut document.styles;
        self.read_table_records("STYLE", Self::read_style_record, |style| {
            styles.insert(style);
        })
    }

    fn read_style_record(&mut self) -> Result<Style> {
        let mut style = Style::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                2 => style.name = pair.as_str().unwrap_or_default().to_string(),
                3 => style.font = pair.as_str().unwrap_or_default().to_string(),
                4 => style.big_font = pair.as_str().unwrap_or_default().to_string(),
                40 => style.fixed_height = pair.as_double().unwrap_or(0.0),
                41 => style.width_factor = pair.as_double().unwrap_or(1.0),
                42 => style.last_height = pair.as_double().unwrap_or(0.0),
                50 => style.oblique_angle = pair.as_double().unwrap_or(0.0),
                70 => style.flags = pair.as_short().unwrap_or(0),
                71 => style.generation_flags = pair.as_short().unwrap_or(0),
                _ => {}
            }
        }
        Ok(style)
    }

    fn read_appid_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let app_ids = &mut document.app_ids;
        self.read_table_records("APPID", Self::read_appid_record, |app_id| {
            app_ids.insert(app_id);
        })
    }

    fn read_appid_record(&mut self) -> Result<AppId> {
        let mut app_id = AppId::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                2 => app_id.name = pair.as_str().unwrap_or_default().to_string(),
                70 => app_id.flags = pair.as_short().unwrap_or(0),
                _ => {}
            }
        }
        Ok(app_id)
    }

    fn read_ucs_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let coordinate_systems = &mut document.coordinate_systems;
        self.read_table_records("UCS", Self::read_ucs_record, |ucs| {
            coordinate_systems.insert(ucs);
        })
    }

    fn read_ucs_record(&mut self) -> Result<Ucs> {
        let mut ucs = Ucs::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            let code = pair.code();
            match code {
                2 => ucs.name = pair.as_str().unwrap_or_default().to_string(),
                _ => {
                    if let Some(value) = pair.as_double() {
                        match code {
                            10 => ucs.origin.x = value,
                            20 => ucs.origin.y = value,
                            30 => ucs.origin.z = value,
                            11 => ucs.x_axis.x = value,
                            21 => ucs.x_axis.y = value,
                            31 => ucs.x_axis.z = value,
                            12 => ucs.y_axis.x = value,
                            22 => ucs.y_axis.y = value,
                            32 => ucs.y_axis.z = value,
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(ucs)
    }

    fn read_block_record_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let block_records = &mut document.block_records;
        self.read_table_records("BLOCK_RECORD", Self::read_block_record, |record| {
            block_records.insert(record);
        })
    }

    fn read_block_record(&mut self) -> Result<BlockRecord> {
        let mut record = BlockRecord::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                2 => record.name = pair.as_str().unwrap_or_default().to_string(),
                70 => record.flags = pair.as_short().unwrap_or(0),
                _ => {}
            }
        }
        Ok(record)
    }

    fn read_linetype_table(&mut self, document: &mut DxfDocument) -> Result<()> {
        let line_types = &mut document.line_types;
        self.read_table_records("LTYPE", Self::read_linetype_record, |line_type| {
            line_types.insert(line_type);
        })
    }

    fn read_linetype_record(&mut self) -> Result<LineType> {
        let mut line_type = LineType::new("");
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                2 => line_type.name = pair.as_str().unwrap_or_default().to_string(),
                3 => line_type.description = pair.as_str().unwrap_or_default().to_string(),
                40 => line_type.pattern_length = pair.as_double().unwrap_or(0.0),
                49 => {
                    if let Some(value) = pair.as_double() {
                        line_type.dash_lengths.push(value);
                    }
                }
                70 => line_type.flags = pair.as_short().unwrap_or(0),
                72 => line_type.alignment = pair.as_short().unwrap_or(65),
                // 73 is the element count, implied by the code 49 pairs
                _ => {}
            }
        }
        Ok(line_type)
    }

    // ── BLOCKS ──────────────────────────────────────────────────────────

    /// Read the BLOCKS section
    pub fn read_blocks(&mut self, document: &mut DxfDocument) -> Result<()> {
        loop {
            let pair = self.buffer.take()?;
            if pair.is_section_end() {
                return Ok(());
            }
            if !pair.is_marker("BLOCK") {
                return Err(DxfError::structure(format!(
                    "expected BLOCK in BLOCKS section, got {}",
                    pair
                )));
            }

            let mut block = Block::new("");
            while self.buffer.peek()?.code() != 0 {
                let pair = self.buffer.take()?;
                match pair.code() {
                    2 => block.name = pair.as_str().unwrap_or_default().to_string(),
                    8 => block.layer = pair.as_str().unwrap_or_default().to_string(),
                    10 => block.base_point.x = pair.as_double().unwrap_or(0.0),
                    20 => block.base_point.y = pair.as_double().unwrap_or(0.0),
                    30 => block.base_point.z = pair.as_double().unwrap_or(0.0),
                    70 => block.flags = pair.as_short().unwrap_or(0),
                    _ => {}
                }
            }

            loop {
                let pair = self.buffer.peek()?;
                if pair.is_marker("ENDBLK") {
                    self.buffer.advance();
                    // swallow the end marker's own attribute pairs
                    self.swallow_entity_body();
                    break;
                }
                if pair.is_section_end() {
                    return Err(DxfError::structure(format!(
                        "BLOCK '{}' not terminated by ENDBLK",
                        block.name
                    )));
                }
                let entity = self.read_entity(&mut document.notifications)?;
                block.entities.push(entity);
            }

            document.blocks.push(block);
        }
    }

    // ── ENTITIES ────────────────────────────────────────────────────────

    /// Read the ENTITIES section
    pub fn read_entities(&mut self, document: &mut DxfDocument) -> Result<()> {
        loop {
            let pair = self.buffer.peek()?;
            if pair.is_section_end() {
                self.buffer.advance();
                return Ok(());
            }
            if pair.code() != 0 {
                return Err(DxfError::structure(format!(
                    "expected entity type pair, got {}",
                    pair
                )));
            }
            let entity = self.read_entity(&mut document.notifications)?;
            document.entities.push(entity);
        }
    }

    /// Read one entity, dispatching on its `(0, <TYPE>)` tag
    fn read_entity(&mut self, notifications: &mut NotificationCollection) -> Result<Entity> {
        let type_pair = self.buffer.take()?;
        let type_name = type_pair.as_str().unwrap_or_default().to_string();

        let entity = match type_name.as_str() {
            "LINE" => Entity::Line(self.read_line()?),
            "CIRCLE" => Entity::Circle(self.read_circle()?),
            "ARC" => Entity::Arc(self.read_arc()?),
            "ELLIPSE" => Entity::Ellipse(self.read_ellipse()?),
            "TEXT" => Entity::Text(self.read_text()?),
            "POLYLINE" => Entity::Polyline(self.read_polyline()?),
            "SOLID" => Entity::Solid(self.read_solid()?),
            "DIMENSION" => Entity::Dimension(self.read_dimension()?),
            "IMAGE" => Entity::Image(self.read_image()?),
            _ => {
                notifications.notify(
                    NotificationType::NotSupported,
                    format!("skipped unrecognized entity type '{}'", type_name),
                );
                Entity::Unknown(self.read_unknown(type_name)?)
            }
        };
        Ok(entity)
    }

    /// Apply a shared attribute code; returns `false` when the pair belongs
    /// to the specific entity.
    fn apply_common(common: &mut EntityCommon, pair: &CodePair) -> bool {
        match pair.code() {
            5 => {
                if let Some(handle) = pair.as_handle() {
                    common.handle = handle;
                }
            }
            6 => common.linetype = pair.as_str().unwrap_or_default().to_string(),
            8 => common.layer = pair.as_str().unwrap_or_default().to_string(),
            48 => common.linetype_scale = pair.as_double().unwrap_or(1.0),
            60 => common.visible = pair.as_short() == Some(0),
            62 => {
                if let Some(value) = pair.as_short() {
                    common.color = Color::from_raw(value);
                }
            }
            67 => common.paper_space = pair.as_short() == Some(1),
            _ => return false,
        }
        true
    }

    fn read_line(&mut self) -> Result<Line> {
        let mut line = Line::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut line.common, &pair) {
                continue;
            }
            if let Some(value) = pair.as_double() {
                match pair.code() {
                    10 => line.p1.x = value,
                    20 => line.p1.y = value,
                    30 => line.p1.z = value,
                    11 => line.p2.x = value,
                    21 => line.p2.y = value,
                    31 => line.p2.z = value,
                    39 => line.thickness = value,
                    210 => line.normal.x = value,
                    220 => line.normal.y = value,
                    230 => line.normal.z = value,
                    _ => {}
                }
            }
        }
        Ok(line)
    }

    fn read_circle(&mut self) -> Result<Circle> {
        let mut circle = Circle::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut circle.common, &pair) {
                continue;
            }
            if let Some(value) = pair.as_double() {
                match pair.code() {
                    10 => circle.center.x = value,
                    20 => circle.center.y = value,
                    30 => circle.center.z = value,
                    39 => circle.thickness = value,
                    40 => circle.radius = value,
                    210 => circle.normal.x = value,
                    220 => circle.normal.y = value,
                    230 => circle.normal.z = value,
                    _ => {}
                }
            }
        }
        Ok(circle)
    }

    fn read_arc(&mut self) -> Result<Arc> {
        let mut arc = Arc::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut arc.common, &pair) {
                continue;
            }
            if let Some(value) = pair.as_double() {
                match pair.code() {
                    10 => arc.center.x = value,
                    20 => arc.center.y = value,
                    30 => arc.center.z = value,
                    39 => arc.thickness = value,
                    40 => arc.radius = value,
                    50 => arc.start_angle = value,
                    51 => arc.end_angle = value,
                    210 => arc.normal.x = value,
                    220 => arc.normal.y = value,
                    230 => arc.normal.z = value,
                    _ => {}
                }
            }
        }
        Ok(arc)
    }

    fn read_ellipse(&mut self) -> Result<Ellipse> {
        let mut ellipse = Ellipse::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut ellipse.common, &pair) {
                continue;
            }
            if let Some(value) = pair.as_double() {
                match pair.code() {
                    10 => ellipse.center.x = value,
                    20 => ellipse.center.y = value,
                    30 => ellipse.center.z = value,
                    11 => ellipse.major_axis.x = value,
                    21 => ellipse.major_axis.y = value,
                    31 => ellipse.major_axis.z = value,
                    40 => ellipse.minor_ratio = value,
                    41 => ellipse.start_parameter = value,
                    42 => ellipse.end_parameter = value,
                    210 => ellipse.normal.x = value,
                    220 => ellipse.normal.y = value,
                    230 => ellipse.normal.z = value,
                    _ => {}
                }
            }
        }
        Ok(ellipse)
    }

    fn read_text(&mut self) -> Result<Text> {
        let mut text = Text::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut text.common, &pair) {
                continue;
            }
            match pair.code() {
                1 => text.value = pair.as_str().unwrap_or_default().to_string(),
                7 => text.style_name = pair.as_str().unwrap_or_default().to_string(),
                72 => {
                    if let Some(value) = pair.as_short() {
                        text.horizontal_justification = HorizontalJustification::from_raw(value);
                    }
                }
                73 => {
                    if let Some(value) = pair.as_short() {
                        text.vertical_justification = VerticalJustification::from_raw(value);
                    }
                }
                code => {
                    if let Some(value) = pair.as_double() {
                        match code {
                            10 => text.location.x = value,
                            20 => text.location.y = value,
                            30 => text.location.z = value,
                            11 => text.second_alignment_point.x = value,
                            21 => text.second_alignment_point.y = value,
                            31 => text.second_alignment_point.z = value,
                            39 => text.thickness = value,
                            40 => text.height = value,
                            41 => text.relative_x_scale = value,
                            50 => text.rotation = value,
                            51 => text.oblique_angle = value,
                            210 => text.normal.x = value,
                            220 => text.normal.y = value,
                            230 => text.normal.z = value,
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(text)
    }

    fn read_polyline(&mut self) -> Result<Polyline> {
        let mut poly = Polyline::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut poly.common, &pair) {
                continue;
            }
            match pair.code() {
                // codes 10/20 carry dummy zeros; the real datum is the elevation
                10 | 20 => {}
                30 => poly.elevation = pair.as_double().unwrap_or(0.0),
                40 => poly.default_start_width = pair.as_double().unwrap_or(0.0),
                41 => poly.default_end_width = pair.as_double().unwrap_or(0.0),
                70 => poly.flags = pair.as_short().unwrap_or(0),
                210 => poly.normal.x = pair.as_double().unwrap_or(0.0),
                220 => poly.normal.y = pair.as_double().unwrap_or(0.0),
                230 => poly.normal.z = pair.as_double().unwrap_or(1.0),
                _ => {}
            }
        }

        // the vertex run, closed by the mandatory SEQEND marker
        loop {
            let pair = self.buffer.peek()?;
            if pair.is_marker("VERTEX") {
                self.buffer.advance();
                poly.vertices.push(self.read_vertex()?);
            } else if pair.is_marker("SEQEND") {
                self.buffer.advance();
                self.swallow_entity_body();
                return Ok(poly);
            } else {
                return Err(DxfError::structure(format!(
                    "POLYLINE vertex run not terminated by SEQEND, got {}",
                    pair
                )));
            }
        }
    }

    fn read_vertex(&mut self) -> Result<Vertex> {
        let mut vertex = Vertex::default();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            match pair.code() {
                10 => vertex.location.x = pair.as_double().unwrap_or(0.0),
                20 => vertex.location.y = pair.as_double().unwrap_or(0.0),
                30 => vertex.location.z = pair.as_double().unwrap_or(0.0),
                40 => vertex.start_width = pair.as_double().unwrap_or(0.0),
                41 => vertex.end_width = pair.as_double().unwrap_or(0.0),
                42 => vertex.bulge = pair.as_double().unwrap_or(0.0),
                70 => vertex.flags = pair.as_short().unwrap_or(0),
                _ => {}
            }
        }
        Ok(vertex)
    }

    /// Consume the remaining attribute pairs of an entity whose content is
    /// not modeled (SEQEND, ENDBLK trailers).
    fn swallow_entity_body(&mut self) {
        while self.buffer.items_remain() {
            if let Ok(pair) = self.buffer.peek() {
                if pair.code() == 0 {
                    break;
                }
            }
            self.buffer.advance();
        }
    }

    fn read_solid(&mut self) -> Result<Solid> {
        let mut solid = Solid::new();
        let mut saw_fourth = false;
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut solid.common, &pair) {
                continue;
            }
            if let Some(value) = pair.as_double() {
                match pair.code() {
                    10 => solid.first_corner.x = value,
                    20 => solid.first_corner.y = value,
                    30 => solid.first_corner.z = value,
                    11 => solid.second_corner.x = value,
                    21 => solid.second_corner.y = value,
                    31 => solid.second_corner.z = value,
                    12 => solid.third_corner.x = value,
                    22 => solid.third_corner.y = value,
                    32 => solid.third_corner.z = value,
                    13 => {
                        solid.fourth_corner.x = value;
                        saw_fourth = true;
                    }
                    23 => solid.fourth_corner.y = value,
                    33 => solid.fourth_corner.z = value,
                    39 => solid.thickness = value,
                    210 => solid.normal.x = value,
                    220 => solid.normal.y = value,
                    230 => solid.normal.z = value,
                    _ => {}
                }
            }
        }
        // a triangle omits the fourth corner; it mirrors the third
        if !saw_fourth {
            solid.fourth_corner = solid.third_corner;
        }
        Ok(solid)
    }

    fn read_dimension(&mut self) -> Result<Dimension> {
        let mut dimension = Dimension::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut dimension.common, &pair) {
                continue;
            }
            match pair.code() {
                1 => dimension.text = pair.as_str().unwrap_or_default().to_string(),
                3 => dimension.style_name = pair.as_str().unwrap_or_default().to_string(),
                70 => dimension.dimension_type = pair.as_short().unwrap_or(0),
                code => {
                    if let Some(value) = pair.as_double() {
                        match code {
                            10 => dimension.definition_point.x = value,
                            20 => dimension.definition_point.y = value,
                            30 => dimension.definition_point.z = value,
                            11 => dimension.text_midpoint.x = value,
                            21 => dimension.text_midpoint.y = value,
                            31 => dimension.text_midpoint.z = value,
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(dimension)
    }

    fn read_image(&mut self) -> Result<Image> {
        let mut image = Image::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            let pair = self.buffer.take()?;
            if Self::apply_common(&mut image.common, &pair) {
                continue;
            }
            match pair.code() {
                70 => image.display_flags = pair.as_short().unwrap_or(1),
                280 => image.clipping = pair.as_short() == Some(1),
                281 => image.brightness = pair.as_short().unwrap_or(50),
                282 => image.contrast = pair.as_short().unwrap_or(50),
                283 => image.fade = pair.as_short().unwrap_or(0),
                340 => {
                    if let Some(handle) = pair.as_handle() {
                        image.image_definition = handle;
                    }
                }
                code => {
                    if let Some(value) = pair.as_double() {
                        match code {
                            10 => image.insertion_point.x = value,
                            20 => image.insertion_point.y = value,
                            30 => image.insertion_point.z = value,
                            11 => image.u_vector.x = value,
                            21 => image.u_vector.y = value,
                            31 => image.u_vector.z = value,
                            12 => image.v_vector.x = value,
                            22 => image.v_vector.y = value,
                            32 => image.v_vector.z = value,
                            13 => image.size.x = value,
                            23 => image.size.y = value,
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(image)
    }

    fn read_unknown(&mut self, type_name: String) -> Result<Unknown> {
        let mut pairs = Vec::new();
        while self.buffer.items_remain() && self.buffer.peek()?.code() != 0 {
            pairs.push(self.buffer.take()?);
        }
        Ok(Unknown { type_name, pairs })
    }

    // ── THUMBNAIL ───────────────────────────────────────────────────────

    /// Read the THUMBNAILIMAGE section
    pub fn read_thumbnail(&mut self, document: &mut DxfDocument) -> Result<()> {
        let length_pair = self.buffer.take()?;
        if length_pair.code() != 90 {
            return Err(DxfError::structure(format!(
                "expected thumbnail length pair, got {}",
                length_pair
            )));
        }
        let declared = length_pair.as_int().unwrap_or(0).max(0) as usize;

        let mut data = Vec::with_capacity(declared);
        loop {
            let pair = self.buffer.take()?;
            if pair.is_section_end() {
                break;
            }
            match pair.as_binary() {
                Some(bytes) => data.extend_from_slice(bytes),
                None => {
                    return Err(DxfError::structure(format!(
                        "unexpected {} in thumbnail section",
                        pair
                    )))
                }
            }
        }

        if data.len() != declared {
            return Err(DxfError::ThumbnailLengthMismatch {
                declared,
                actual: data.len(),
            });
        }

        document.thumbnail = Some(Thumbnail { data });
        Ok(())
    }
}

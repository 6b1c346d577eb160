//! PPTX serialization of a rendered deck.
//!
//! Writes a minimal OPC package with zip and quick-xml: content types, package
//! rels, document properties, one presentation part, one slide master, one
//! blank layout, one theme, and the slide parts. The fixed boilerplate parts
//! are template constants; slide parts are generated from the declarative
//! [`Deck`], so every piece of model-derived text goes through the XML
//! writer's escaping.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::deck::{Cell, Deck, Element, Rect, Slide, TextLine, TextStyle, BRAND_DARK, TEXT_DARK, WHITE};
use crate::deck::{SLIDE_HEIGHT, SLIDE_WIDTH};

#[derive(Error, Debug)]
pub enum PptxError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

const FONT: &str = "Calibri";
const HEADER_ROW_HEIGHT: i64 = 370_840;
const DATA_ROW_HEIGHT: i64 = 335_280;
const HEADER_TEXT_SIZE: u32 = 1100;
const CELL_TEXT_SIZE: u32 = 1000;

type Xml = Writer<Vec<u8>>;

/// Serialize the deck into PPTX bytes.
pub fn write_pptx(deck: &Deck) -> Result<Vec<u8>, PptxError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    put(&mut zip, options, "[Content_Types].xml", &content_types(deck.slides.len())?)?;
    put(&mut zip, options, "_rels/.rels", ROOT_RELS.as_bytes())?;
    put(&mut zip, options, "docProps/core.xml", core_props(&deck.title).as_bytes())?;
    put(&mut zip, options, "docProps/app.xml", APP_PROPS.as_bytes())?;
    put(&mut zip, options, "ppt/presentation.xml", &presentation(deck.slides.len())?)?;
    put(
        &mut zip,
        options,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels(deck.slides.len())?,
    )?;
    put(&mut zip, options, "ppt/theme/theme1.xml", THEME.as_bytes())?;
    put(&mut zip, options, "ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
    put(
        &mut zip,
        options,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        SLIDE_MASTER_RELS.as_bytes(),
    )?;
    put(&mut zip, options, "ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT.as_bytes())?;
    put(
        &mut zip,
        options,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        SLIDE_LAYOUT_RELS.as_bytes(),
    )?;

    for (index, slide) in deck.slides.iter().enumerate() {
        let number = index + 1;
        put(
            &mut zip,
            options,
            &format!("ppt/slides/slide{number}.xml"),
            &slide_xml(slide)?,
        )?;
        put(
            &mut zip,
            options,
            &format!("ppt/slides/_rels/slide{number}.xml.rels"),
            SLIDE_RELS.as_bytes(),
        )?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

fn put(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    name: &str,
    bytes: &[u8],
) -> Result<(), PptxError> {
    zip.start_file(name, options)?;
    zip.write_all(bytes)?;
    Ok(())
}

// Small event-writer helpers; quick-xml escapes text and attribute values.

fn decl(w: &mut Xml) -> Result<(), PptxError> {
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(())
}

fn open(w: &mut Xml, name: &str) -> Result<(), PptxError> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn open_with(w: &mut Xml, name: &str, attrs: &[(&str, &str)]) -> Result<(), PptxError> {
    let mut element = BytesStart::new(name);
    for attr in attrs {
        element.push_attribute(*attr);
    }
    w.write_event(Event::Start(element))?;
    Ok(())
}

fn close(w: &mut Xml, name: &str) -> Result<(), PptxError> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn leaf(w: &mut Xml, name: &str, attrs: &[(&str, &str)]) -> Result<(), PptxError> {
    let mut element = BytesStart::new(name);
    for attr in attrs {
        element.push_attribute(*attr);
    }
    w.write_event(Event::Empty(element))?;
    Ok(())
}

fn text_leaf(w: &mut Xml, name: &str, content: &str) -> Result<(), PptxError> {
    open(w, name)?;
    w.write_event(Event::Text(BytesText::new(content)))?;
    close(w, name)
}

fn write_xfrm(w: &mut Xml, tag: &str, frame: &Rect) -> Result<(), PptxError> {
    let (x, y) = (frame.x.to_string(), frame.y.to_string());
    let (cx, cy) = (frame.cx.to_string(), frame.cy.to_string());
    open(w, tag)?;
    leaf(w, "a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    leaf(w, "a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    close(w, tag)
}

fn write_run(w: &mut Xml, text: &str, style: &TextStyle) -> Result<(), PptxError> {
    open(w, "a:r")?;
    let size = style.size.to_string();
    let mut attrs = vec![("lang", "en-US"), ("sz", size.as_str()), ("dirty", "0")];
    if style.bold {
        attrs.insert(2, ("b", "1"));
    }
    open_with(w, "a:rPr", &attrs)?;
    open(w, "a:solidFill")?;
    leaf(w, "a:srgbClr", &[("val", style.color)])?;
    close(w, "a:solidFill")?;
    leaf(w, "a:latin", &[("typeface", FONT)])?;
    close(w, "a:rPr")?;
    text_leaf(w, "a:t", text)?;
    close(w, "a:r")
}

fn write_paragraph(w: &mut Xml, line: &TextLine, centered: bool) -> Result<(), PptxError> {
    open(w, "a:p")?;
    if line.bullet {
        open_with(w, "a:pPr", &[("marL", "285750"), ("indent", "-285750")])?;
        leaf(w, "a:buFont", &[("typeface", "Arial")])?;
        leaf(w, "a:buChar", &[("char", "\u{2022}")])?;
        close(w, "a:pPr")?;
    } else {
        if centered {
            open_with(w, "a:pPr", &[("algn", "ctr")])?;
        } else {
            open(w, "a:pPr")?;
        }
        leaf(w, "a:buNone", &[])?;
        close(w, "a:pPr")?;
    }
    write_run(w, &line.text, &line.style)?;
    close(w, "a:p")
}

fn write_nv_sp_pr(w: &mut Xml, id: u32, name: &str, text_box: bool) -> Result<(), PptxError> {
    let id = id.to_string();
    open(w, "p:nvSpPr")?;
    leaf(w, "p:cNvPr", &[("id", id.as_str()), ("name", name)])?;
    if text_box {
        leaf(w, "p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        leaf(w, "p:cNvSpPr", &[])?;
    }
    leaf(w, "p:nvPr", &[])?;
    close(w, "p:nvSpPr")
}

fn write_text_box(w: &mut Xml, id: u32, frame: &Rect, lines: &[TextLine]) -> Result<(), PptxError> {
    open(w, "p:sp")?;
    write_nv_sp_pr(w, id, &format!("TextBox {id}"), true)?;
    open(w, "p:spPr")?;
    write_xfrm(w, "a:xfrm", frame)?;
    open_with(w, "a:prstGeom", &[("prst", "rect")])?;
    leaf(w, "a:avLst", &[])?;
    close(w, "a:prstGeom")?;
    leaf(w, "a:noFill", &[])?;
    close(w, "p:spPr")?;
    open(w, "p:txBody")?;
    leaf(w, "a:bodyPr", &[("wrap", "square"), ("anchor", "t")])?;
    leaf(w, "a:lstStyle", &[])?;
    for line in lines {
        write_paragraph(w, line, false)?;
    }
    close(w, "p:txBody")?;
    close(w, "p:sp")
}

fn write_shape(
    w: &mut Xml,
    id: u32,
    frame: &Rect,
    fill: &str,
    rounded: bool,
    label: &Option<(String, TextStyle)>,
) -> Result<(), PptxError> {
    open(w, "p:sp")?;
    write_nv_sp_pr(w, id, &format!("Shape {id}"), false)?;
    open(w, "p:spPr")?;
    write_xfrm(w, "a:xfrm", frame)?;
    open_with(w, "a:prstGeom", &[("prst", if rounded { "roundRect" } else { "rect" })])?;
    leaf(w, "a:avLst", &[])?;
    close(w, "a:prstGeom")?;
    open(w, "a:solidFill")?;
    leaf(w, "a:srgbClr", &[("val", fill)])?;
    close(w, "a:solidFill")?;
    open(w, "a:ln")?;
    leaf(w, "a:noFill", &[])?;
    close(w, "a:ln")?;
    close(w, "p:spPr")?;
    open(w, "p:txBody")?;
    leaf(w, "a:bodyPr", &[("anchor", "ctr")])?;
    leaf(w, "a:lstStyle", &[])?;
    match label {
        Some((text, style)) => {
            let line = TextLine::plain(text.clone(), *style);
            write_paragraph(w, &line, true)?;
        }
        None => {
            open(w, "a:p")?;
            close(w, "a:p")?;
        }
    }
    close(w, "p:txBody")?;
    close(w, "p:sp")
}

fn write_table_cell(
    w: &mut Xml,
    text: &str,
    style: TextStyle,
    fill: Option<&str>,
) -> Result<(), PptxError> {
    open(w, "a:tc")?;
    open(w, "a:txBody")?;
    leaf(w, "a:bodyPr", &[])?;
    leaf(w, "a:lstStyle", &[])?;
    let line = TextLine::plain(text, style);
    write_paragraph(w, &line, false)?;
    close(w, "a:txBody")?;
    open_with(
        w,
        "a:tcPr",
        &[("marL", "45720"), ("marR", "45720"), ("anchor", "ctr")],
    )?;
    if let Some(color) = fill {
        open(w, "a:solidFill")?;
        leaf(w, "a:srgbClr", &[("val", color)])?;
        close(w, "a:solidFill")?;
    }
    close(w, "a:tcPr")?;
    close(w, "a:tc")
}

fn write_table(
    w: &mut Xml,
    id: u32,
    frame: &Rect,
    col_widths: &[i64],
    header: &[String],
    rows: &[Vec<Cell>],
) -> Result<(), PptxError> {
    let id_string = id.to_string();
    let name = format!("Table {id}");
    open(w, "p:graphicFrame")?;
    open(w, "p:nvGraphicFramePr")?;
    leaf(
        w,
        "p:cNvPr",
        &[("id", id_string.as_str()), ("name", name.as_str())],
    )?;
    leaf(w, "p:cNvGraphicFramePr", &[])?;
    leaf(w, "p:nvPr", &[])?;
    close(w, "p:nvGraphicFramePr")?;
    write_xfrm(w, "p:xfrm", frame)?;
    open(w, "a:graphic")?;
    open_with(w, "a:graphicData", &[("uri", TABLE_URI)])?;
    open(w, "a:tbl")?;
    leaf(w, "a:tblPr", &[("firstRow", "1"), ("bandRow", "1")])?;
    open(w, "a:tblGrid")?;
    for width in col_widths {
        let width = width.to_string();
        leaf(w, "a:gridCol", &[("w", width.as_str())])?;
    }
    close(w, "a:tblGrid")?;

    let header_height = HEADER_ROW_HEIGHT.to_string();
    open_with(w, "a:tr", &[("h", header_height.as_str())])?;
    let header_style = TextStyle::new(HEADER_TEXT_SIZE, true, WHITE);
    for cell in header {
        write_table_cell(w, cell, header_style, Some(BRAND_DARK))?;
    }
    close(w, "a:tr")?;

    let row_height = DATA_ROW_HEIGHT.to_string();
    for row in rows {
        open_with(w, "a:tr", &[("h", row_height.as_str())])?;
        for cell in row {
            let style = TextStyle::new(CELL_TEXT_SIZE, false, cell.color.unwrap_or(TEXT_DARK));
            write_table_cell(w, &cell.text, style, None)?;
        }
        close(w, "a:tr")?;
    }

    close(w, "a:tbl")?;
    close(w, "a:graphicData")?;
    close(w, "a:graphic")?;
    close(w, "p:graphicFrame")
}

fn slide_xml(slide: &Slide) -> Result<Vec<u8>, PptxError> {
    let mut w = Writer::new(Vec::new());
    decl(&mut w)?;
    open_with(
        &mut w,
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    open(&mut w, "p:cSld")?;
    open(&mut w, "p:spTree")?;
    open(&mut w, "p:nvGrpSpPr")?;
    leaf(&mut w, "p:cNvPr", &[("id", "1"), ("name", "")])?;
    leaf(&mut w, "p:cNvGrpSpPr", &[])?;
    leaf(&mut w, "p:nvPr", &[])?;
    close(&mut w, "p:nvGrpSpPr")?;
    leaf(&mut w, "p:grpSpPr", &[])?;

    let mut id = 2;
    for element in &slide.elements {
        match element {
            Element::Text { frame, lines } => write_text_box(&mut w, id, frame, lines)?,
            Element::Shape {
                frame,
                fill,
                rounded,
                label,
            } => write_shape(&mut w, id, frame, fill, *rounded, label)?,
            Element::Table {
                frame,
                col_widths,
                header,
                rows,
            } => write_table(&mut w, id, frame, col_widths, header, rows)?,
        }
        id += 1;
    }

    close(&mut w, "p:spTree")?;
    close(&mut w, "p:cSld")?;
    open(&mut w, "p:clrMapOvr")?;
    leaf(&mut w, "a:masterClrMapping", &[])?;
    close(&mut w, "p:clrMapOvr")?;
    close(&mut w, "p:sld")?;
    Ok(w.into_inner())
}

fn content_types(slide_count: usize) -> Result<Vec<u8>, PptxError> {
    let mut w = Writer::new(Vec::new());
    decl(&mut w)?;
    open_with(
        &mut w,
        "Types",
        &[("xmlns", "http://schemas.openxmlformats.org/package/2006/content-types")],
    )?;
    leaf(
        &mut w,
        "Default",
        &[
            ("Extension", "rels"),
            ("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )?;
    leaf(
        &mut w,
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    let overrides = [
        (
            "/ppt/presentation.xml".to_string(),
            "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        ),
        (
            "/ppt/slideMasters/slideMaster1.xml".to_string(),
            "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml",
        ),
        (
            "/ppt/slideLayouts/slideLayout1.xml".to_string(),
            "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml",
        ),
        (
            "/ppt/theme/theme1.xml".to_string(),
            "application/vnd.openxmlformats-officedocument.theme+xml",
        ),
        (
            "/docProps/core.xml".to_string(),
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml".to_string(),
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in &overrides {
        leaf(
            &mut w,
            "Override",
            &[("PartName", part.as_str()), ("ContentType", content_type)],
        )?;
    }
    for number in 1..=slide_count {
        let part = format!("/ppt/slides/slide{number}.xml");
        leaf(
            &mut w,
            "Override",
            &[
                ("PartName", part.as_str()),
                (
                    "ContentType",
                    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml",
                ),
            ],
        )?;
    }
    close(&mut w, "Types")?;
    Ok(w.into_inner())
}

fn presentation(slide_count: usize) -> Result<Vec<u8>, PptxError> {
    let mut w = Writer::new(Vec::new());
    decl(&mut w)?;
    open_with(
        &mut w,
        "p:presentation",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    open(&mut w, "p:sldMasterIdLst")?;
    leaf(
        &mut w,
        "p:sldMasterId",
        &[("id", "2147483648"), ("r:id", "rId1")],
    )?;
    close(&mut w, "p:sldMasterIdLst")?;
    open(&mut w, "p:sldIdLst")?;
    for index in 0..slide_count {
        let id = (256 + index).to_string();
        let r_id = format!("rId{}", index + 2);
        leaf(
            &mut w,
            "p:sldId",
            &[("id", id.as_str()), ("r:id", r_id.as_str())],
        )?;
    }
    close(&mut w, "p:sldIdLst")?;
    let (cx, cy) = (SLIDE_WIDTH.to_string(), SLIDE_HEIGHT.to_string());
    leaf(&mut w, "p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    leaf(&mut w, "p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;
    close(&mut w, "p:presentation")?;
    Ok(w.into_inner())
}

fn presentation_rels(slide_count: usize) -> Result<Vec<u8>, PptxError> {
    let mut w = Writer::new(Vec::new());
    decl(&mut w)?;
    open_with(
        &mut w,
        "Relationships",
        &[("xmlns", "http://schemas.openxmlformats.org/package/2006/relationships")],
    )?;
    leaf(
        &mut w,
        "Relationship",
        &[
            ("Id", "rId1"),
            (
                "Type",
                "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster",
            ),
            ("Target", "slideMasters/slideMaster1.xml"),
        ],
    )?;
    for index in 0..slide_count {
        let id = format!("rId{}", index + 2);
        let target = format!("slides/slide{}.xml", index + 1);
        leaf(
            &mut w,
            "Relationship",
            &[
                ("Id", id.as_str()),
                (
                    "Type",
                    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide",
                ),
                ("Target", target.as_str()),
            ],
        )?;
    }
    close(&mut w, "Relationships")?;
    Ok(w.into_inner())
}

fn core_props(title: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/">"#,
            "<dc:title>{}</dc:title><dc:creator>acta</dc:creator></cp:coreProperties>"
        ),
        escape(title)
    )
}

const APP_PROPS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
    "<Application>acta</Application></Properties>"
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
    r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
    "</Relationships>"
);

const SLIDE_MASTER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
    r#"<p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>"#,
    r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#,
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    "</p:sldMaster>"
);

const SLIDE_MASTER_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/>"#,
    "</Relationships>"
);

const SLIDE_LAYOUT: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld>"#,
    r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#,
    "</p:sldLayout>"
);

const SLIDE_LAYOUT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/>"#,
    "</Relationships>"
);

const SLIDE_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#,
    "</Relationships>"
);

const THEME: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#,
    r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#,
    r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1>"#,
    r#"<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#,
    r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#,
    r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#,
    r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#,
    r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#,
    r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#,
    r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#,
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    r#"<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#,
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "</a:theme>"
);

//! Fixture documents shared by the unit tests

use lopdf::{dictionary, Document, Object, Stream, StringFormat};

/// Text drawn on the single page of [`sample_document`]
pub(crate) const SAMPLE_TEXT: &str = "Hello, protected world!";

/// An unencrypted one-page document with a file identifier
pub(crate) fn sample_document() -> Document {
    let mut doc = Document::with_version("1.5");

    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String((1u8..=16).collect(), StringFormat::Literal),
            Object::String((1u8..=16).rev().collect(), StringFormat::Literal),
        ]),
    );

    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let content = format!("BT\n/F1 12 Tf\n100 700 Td\n({SAMPLE_TEXT}) Tj\nET\n");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Resources" => resources_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// [`sample_document`] serialized to bytes
pub(crate) fn sample_pdf_bytes() -> Vec<u8> {
    let mut buffer = Vec::new();
    sample_document()
        .save_to(&mut buffer)
        .expect("sample document should serialize");
    buffer
}

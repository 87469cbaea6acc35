//! CBZ (zipped image sequence) to PDF conversion
//!
//! Each image in the archive becomes one page, in file-name order, sized at
//! one point per pixel.

use crate::constants::IMAGE_EXTENSIONS;
use crate::types::*;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba};
use lopdf::{Dictionary, Document, Object, Stream};
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Read a CBZ file and convert it to an in-memory PDF
pub async fn cbz_to_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    tokio::task::spawn_blocking(move || cbz_bytes_to_pdf(&bytes)).await?
}

/// Convert CBZ archive bytes to a PDF with one page per image
pub fn cbz_bytes_to_pdf(bytes: &[u8]) -> Result<Document> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| is_image_name(name))
        .map(str::to_string)
        .collect();
    names.sort();

    if names.is_empty() {
        return Err(ImposeError::NoPages);
    }

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::with_capacity(names.len());

    for name in &names {
        let mut data = Vec::new();
        archive.by_name(name)?.read_to_end(&mut data)?;
        let img = image::load_from_memory(&data)?;
        let page_id = add_image_page(&mut doc, img, pages_id)?;
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(kids)),
            ("Count", Object::Integer(count)),
        ])),
    );
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    log::info!("Converted CBZ to PDF: {} pages", names.len());
    Ok(doc)
}

fn is_image_name(name: &str) -> bool {
    if name.ends_with('/') {
        return false;
    }
    let path = Path::new(name);
    // Hidden entries, e.g. macOS `__MACOSX/._001.png` resource forks
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Embed an image as a JPEG XObject on a page of the same size
fn add_image_page(
    doc: &mut Document,
    img: DynamicImage,
    parent_id: lopdf::ObjectId,
) -> Result<lopdf::ObjectId> {
    let rgb = DynamicImage::ImageRgb8(flatten_on_white(&img));
    let (width, height) = (rgb.width(), rgb.height());

    let mut jpeg = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)?;

    let image_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(width as i64)),
        ("Height", Object::Integer(height as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);
    let image_id = doc.add_object(Stream::new(image_dict, jpeg).with_compression(false));

    let content = format!("q {} 0 0 {} 0 0 cm /Im0 Do Q\n", width, height);
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Im0", Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let page = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(parent_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(width as i64),
                Object::Integer(height as i64),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]);
    Ok(doc.add_object(page))
}

/// Composite any transparency onto a white background
fn flatten_on_white(img: &DynamicImage) -> RgbImage {
    if !img.color().has_alpha() {
        return img.to_rgb8();
    }

    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let blend = |c: u8| {
            let (c, a) = (u32::from(c), u32::from(a));
            ((c * a + 255 * (255 - a) + 127) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

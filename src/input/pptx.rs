use super::{LoadError, LoadedDocument};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Load slide text from a PowerPoint (.pptx) deck.
///
/// Slides are read in slide-number order. Paragraphs within a slide are
/// joined with newlines and slides are separated by blank lines.
pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| LoadError::PptxParse(e.to_string()))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    if slides.is_empty() {
        return Err(LoadError::PptxParse("No slides found in deck".to_string()));
    }
    slides.sort_by_key(|(number, _)| *number);

    let mut content = String::new();
    for (_, name) in slides {
        let mut xml = String::new();
        archive
            .by_name(&name)
            .map_err(|e| LoadError::PptxParse(e.to_string()))?
            .read_to_string(&mut xml)?;

        let slide_text = extract_slide_text(&xml)?;
        if !slide_text.is_empty() {
            if !content.is_empty() {
                content.push_str("\n\n");
            }
            content.push_str(&slide_text);
        }
    }

    if content.is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(LoadedDocument {
        text: content,
        source: format!("pptx:{}", path.display()),
    })
}

/// "ppt/slides/slide12.xml" → 12. Layouts, notes and rels do not match.
fn slide_number(name: &str) -> Option<u32> {
    name.strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Text runs (`<a:t>`) of one slide, one line per paragraph (`<a:p>`).
fn extract_slide_text(xml: &str) -> Result<String, LoadError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_run = false,
                b"p" => {
                    let line = current.trim();
                    if !line.is_empty() {
                        paragraphs.push(line.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_run => {
                let text = t.unescape().map_err(|e| LoadError::PptxParse(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(LoadError::PptxParse(e.to_string())),
            _ => {}
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        paragraphs.push(tail.to_string());
    }
    Ok(paragraphs.join("\n"))
}

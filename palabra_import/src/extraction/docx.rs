//! `.docx` text extraction: one line per `w:p` paragraph of `word/document.xml`.

use std::borrow::Cow;
use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::{Captures, Regex};
use zip::ZipArchive;

use super::run_extractor;


const DOCUMENT_XML_PATH: &str = "word/document.xml";

const TEXT_BOX_CONTENT_TAG: &[u8] = b"w:txbxContent";

static PARAGRAPH_REGEX: Lazy<Regex> = Lazy::new(|| {
    // PANIC SAFETY: The pattern is a valid constant.
    Regex::new(r"(?s)<w:p[ >].*?</w:p>").unwrap()
});

static TEXT_BOX_REGEX: Lazy<Regex> = Lazy::new(|| {
    // PANIC SAFETY: The pattern is a valid constant.
    Regex::new(r"(?s)<w:txbxContent[ >].*?</w:txbxContent>").unwrap()
});

static TEXT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    // PANIC SAFETY: The pattern is a valid constant.
    Regex::new(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>").unwrap()
});

static XML_ENTITY_REGEX: Lazy<Regex> = Lazy::new(|| {
    // PANIC SAFETY: The pattern is a valid constant.
    Regex::new(r"&(amp|lt|gt|quot|apos|#[0-9]+|#x[0-9a-fA-F]+);").unwrap()
});


fn read_document_xml(document_bytes: &[u8], maximum_size_bytes: usize) -> Result<String, String> {
    let mut archive = ZipArchive::new(Cursor::new(document_bytes))
        .map_err(|error| format!("not a zip archive: {}", error))?;

    let mut document_file = archive
        .by_name(DOCUMENT_XML_PATH)
        .map_err(|error| format!("missing {}: {}", DOCUMENT_XML_PATH, error))?;

    let size_limit_exceeded = || {
        format!(
            "{} is larger than {} bytes when decompressed",
            DOCUMENT_XML_PATH, maximum_size_bytes
        )
    };

    if document_file.size() > maximum_size_bytes as u64 {
        return Err(size_limit_exceeded());
    }

    // Declared sizes can lie.
    let mut document_xml_bytes = Vec::new();
    document_file
        .by_ref()
        .take(maximum_size_bytes as u64 + 1)
        .read_to_end(&mut document_xml_bytes)
        .map_err(|error| format!("unable to read {}: {}", DOCUMENT_XML_PATH, error))?;

    if document_xml_bytes.len() > maximum_size_bytes {
        return Err(size_limit_exceeded());
    }

    String::from_utf8(document_xml_bytes)
        .map_err(|error| format!("{} is not valid UTF-8: {}", DOCUMENT_XML_PATH, error))
}


/// Walks the XML event stream. Paragraphs nested inside table cells
/// produce their own lines, in document order.
///
/// Text box contents are skipped: Word stores every text box twice
/// (`mc:Choice` and `mc:Fallback`), and neither copy is body text.
fn extract_paragraphs(document_xml: &str) -> Result<Vec<String>, String> {
    let mut reader = Reader::from_str(document_xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut open_paragraphs: Vec<String> = Vec::new();
    let mut inside_text_run = false;
    let mut run_depth: usize = 0;
    let mut text_box_depth: usize = 0;

    loop {
        let event = reader
            .read_event()
            .map_err(|error| format!("malformed XML: {}", error))?;

        match &event {
            Event::Start(element) if element.name().as_ref() == TEXT_BOX_CONTENT_TAG => {
                text_box_depth += 1;
                continue;
            }
            Event::End(element) if element.name().as_ref() == TEXT_BOX_CONTENT_TAG => {
                text_box_depth = text_box_depth.saturating_sub(1);
                continue;
            }
            Event::Eof => {}
            _ if text_box_depth > 0 => continue,
            _ => {}
        }

        match event {
            Event::Start(element) => match element.name().as_ref() {
                b"w:p" => open_paragraphs.push(String::new()),
                b"w:r" => run_depth += 1,
                b"w:t" => inside_text_run = true,
                _ => {}
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if run_depth > 0 => {
                    if let Some(paragraph) = open_paragraphs.last_mut() {
                        paragraph.push('\t');
                    }
                }
                _ => {}
            },
            Event::Text(text) if inside_text_run => {
                let text = text
                    .unescape()
                    .map_err(|error| format!("invalid text content: {}", error))?;

                if let Some(paragraph) = open_paragraphs.last_mut() {
                    paragraph.push_str(&text);
                }
            }
            Event::End(element) => match element.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = open_paragraphs.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => inside_text_run = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !open_paragraphs.is_empty() {
        return Err("document ended inside an unclosed paragraph".to_string());
    }

    Ok(paragraphs)
}


fn unescape_xml_entities(text: &str) -> Cow<'_, str> {
    XML_ENTITY_REGEX.replace_all(text, |captures: &Captures| {
        let entity = &captures[1];

        let replacement = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => {
                let code_point = match entity.strip_prefix("#x") {
                    Some(hexadecimal) => u32::from_str_radix(hexadecimal, 16).ok(),
                    None => entity[1..].parse::<u32>().ok(),
                };

                code_point.and_then(char::from_u32)
            }
        };

        replacement
            .map(String::from)
            .unwrap_or_else(|| captures[0].to_string())
    })
}


/// Regex scan used when the XML cannot be parsed properly.
/// Keeps only non-empty lines.
fn scan_paragraphs(document_xml: &str) -> Vec<String> {
    let body_xml = TEXT_BOX_REGEX.replace_all(document_xml, "");

    PARAGRAPH_REGEX
        .find_iter(&body_xml)
        .map(|paragraph| {
            TEXT_RUN_REGEX
                .captures_iter(paragraph.as_str())
                .map(|captures| unescape_xml_entities(&captures[1]).into_owned())
                .collect::<String>()
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}


pub(super) fn extract_lines(
    document_bytes: &[u8],
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, Vec<String>> {
    let document_xml = read_document_xml(document_bytes, maximum_text_size_bytes)
        .map_err(|failure| vec![failure])?;

    let primary_failure = match run_extractor("document reader", || {
        extract_paragraphs(&document_xml)
    }) {
        Ok(lines) => return Ok(lines),
        Err(failure) => failure,
    };

    run_extractor("raw XML scan", || Ok(scan_paragraphs(&document_xml)))
        .map_err(|fallback_failure| vec![primary_failure, fallback_failure])
}

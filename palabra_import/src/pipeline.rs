//! The two document operations: previewing and preparing an import.
//!
//! Both are synchronous (extraction is CPU bound) and never touch the database;
//! a prepared [`ImportPlan`] is persisted with [`execute_import`][crate::importer::execute_import].

use tracing::debug;

use crate::extraction::extract_document_lines;
use crate::images::ImageStore;
use crate::importer::{lesson_title_from_file_name, plan_import, ImportPlan};
use crate::parser::{parse_text_lines, ParsedDocument};
use crate::validation::{validate_for_commit, validate_for_preview, ValidationIssue};
use crate::ImportError;


/// A parsed document along with every issue preview validation found.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DocumentPreview {
    pub document: ParsedDocument,
    pub issues: Vec<ValidationIssue>,
}


/// Extracts the document's text lines, failing if there are none
/// or if the text would exceed `maximum_text_size_bytes`.
pub fn read_document_lines(
    document_bytes: &[u8],
    file_name: &str,
    maximum_text_size_bytes: usize,
) -> Result<Vec<String>, ImportError> {
    let lines = extract_document_lines(document_bytes, file_name, maximum_text_size_bytes)?;

    if lines.is_empty() {
        return Err(ImportError::NoReadableContent);
    }

    debug!(
        file_name = file_name,
        line_count = lines.len(),
        "Extracted document lines."
    );

    Ok(lines)
}


pub fn preview_lines<I, S>(
    lines: I,
    image_store: &dyn ImageStore,
) -> Result<DocumentPreview, ImportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let document = parse_text_lines(lines);
    let available_images = image_store.list_image_names()?;

    let issues = validate_for_preview(&document, &available_images)?;

    Ok(DocumentPreview { document, issues })
}


/// Parses and validates a document in preview mode. Nothing is persisted.
pub fn parse_document(
    document_bytes: &[u8],
    file_name: &str,
    maximum_text_size_bytes: usize,
    image_store: &dyn ImageStore,
) -> Result<DocumentPreview, ImportError> {
    let lines = read_document_lines(document_bytes, file_name, maximum_text_size_bytes)?;

    preview_lines(lines, image_store)
}


pub fn prepare_import_from_lines<I, S>(
    lines: I,
    file_name: &str,
    image_store: &dyn ImageStore,
) -> Result<ImportPlan, ImportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let document = parse_text_lines(lines);
    let available_images = image_store.list_image_names()?;

    let validated_document = validate_for_commit(document, &available_images)?;

    Ok(plan_import(
        validated_document,
        lesson_title_from_file_name(file_name),
        image_store,
    ))
}


/// Parses and validates a document in commit mode, producing a plan ready to persist.
/// Any validation issue rejects the whole document.
pub fn prepare_document_import(
    document_bytes: &[u8],
    file_name: &str,
    maximum_text_size_bytes: usize,
    image_store: &dyn ImageStore,
) -> Result<ImportPlan, ImportError> {
    let lines = read_document_lines(document_bytes, file_name, maximum_text_size_bytes)?;

    prepare_import_from_lines(lines, file_name, image_store)
}



#[cfg(test)]
mod test {
    use super::*;
    use crate::extraction::docx_test_support::build_docx;
    use crate::images::test_store::InMemoryImageStore;

    const TEXT_LIMIT: usize = 1024 * 1024;

    const LESSON: &[&str] = &[
        "VOCABULARY",
        "WORD: cat",
        "IMAGE NAME: cat.png",
        "WORD: dog",
        "IMAGE NAME: dog.png",
        "",
        "EXERCISES",
        "TYPE: IMAGE_TO_WORD",
        "QUESTION: cat.png",
        "OPTIONS: cat, dog",
        "ANSWER: cat",
        "TYPE: WORD_TO_IMAGE",
        "QUESTION: dog",
        "OPTIONS: cat.png, dog.png",
        "ANSWER: dog.png",
    ];

    #[test]
    fn preview_then_prepare_round_trip() {
        let store = InMemoryImageStore::with_images(&["cat.png", "dog.png"]);
        let document = build_docx(LESSON);

        let preview = parse_document(&document, "animals.docx", TEXT_LIMIT, &store).unwrap();

        assert!(preview.issues.is_empty());
        assert_eq!(preview.document.vocabulary.len(), 2);
        assert_eq!(preview.document.exercises.len(), 2);

        let plan = prepare_document_import(&document, "animals.docx", TEXT_LIMIT, &store).unwrap();

        assert_eq!(plan.lesson_title, "animals");
        assert_eq!(plan.vocabulary.len(), 2);
        assert_eq!(plan.exercises.len(), 2);
        assert!(plan.skipped_vocabulary.is_empty());
    }

    #[test]
    fn second_invalid_exercise_rejects_everything() {
        let store = InMemoryImageStore::with_images(&["cat.png", "dog.png"]);

        let mut lines = LESSON.to_vec();
        lines[11] = "TYPE: MATCHING";

        let result = prepare_import_from_lines(lines, "animals.docx", &store);

        let Err(ImportError::ValidationFailed { issues }) = result else {
            panic!("expected validation to fail");
        };

        assert_eq!(
            issues,
            vec![ValidationIssue::WrongExerciseType {
                exercise_type: "MATCHING".to_string()
            }]
        );
    }

    #[test]
    fn document_without_markers_is_empty() {
        let store = InMemoryImageStore::default();

        assert!(matches!(
            preview_lines(["just some notes", "nothing else"], &store),
            Err(ImportError::EmptyDocument)
        ));
    }

    #[test]
    fn unsupported_file_has_no_readable_content() {
        let store = InMemoryImageStore::default();

        assert!(matches!(
            parse_document(b"VOCABULARY", "lesson.txt", TEXT_LIMIT, &store),
            Err(ImportError::NoReadableContent)
        ));
    }

    #[test]
    fn corrupted_docx_is_unreadable() {
        let store = InMemoryImageStore::default();

        assert!(matches!(
            parse_document(b"not a zip at all", "lesson.docx", TEXT_LIMIT, &store),
            Err(ImportError::UnreadableDocument { .. })
        ));
    }

    #[test]
    fn document_over_text_limit_is_unreadable() {
        let store = InMemoryImageStore::with_images(&["cat.png", "dog.png"]);
        let document = build_docx(LESSON);

        let result = prepare_document_import(&document, "animals.docx", 64, &store);

        let Err(ImportError::UnreadableDocument { error }) = result else {
            panic!("expected the document to be unreadable");
        };

        assert_eq!(error.failures.len(), 1);
    }
}

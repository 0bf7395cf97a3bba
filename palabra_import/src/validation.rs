use std::collections::{BTreeSet, HashSet};

use palabra_core::exercise::ExerciseType;
use thiserror::Error;

use crate::parser::{ExerciseEntry, ExerciseKind, ParsedDocument, VocabularyEntry};
use crate::ImportError;


/// Broad category of a [`ValidationIssue`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IssueKind {
    /// A field is empty or malformed; the author has to fix the document.
    ValidationError,

    /// A word or image filename appears more than once in the document.
    DuplicateError,

    /// The document references an image that is not in the image directory.
    MissingResourceError,
}


/// A single problem found in a parsed document.
///
/// The `Display` output of each variant is the exact message shown to API users.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ValidationIssue {
    #[error("Empty word or image name")]
    EmptyWordOrImageName,

    #[error("Duplicate word: {word}")]
    DuplicateWord { word: String },

    #[error("Duplicate image filename: {image_name}")]
    DuplicateImageFilename { image_name: String },

    #[error("Missing image file: {image_name}")]
    MissingImageFile { image_name: String },

    #[error("Wrong exercise type: {exercise_type}")]
    WrongExerciseType { exercise_type: String },

    #[error("Empty or malformed exercise fields")]
    MalformedExerciseFields,

    #[error("Exercise image missing: {question}")]
    ExerciseImageMissing { question: String },

    /// Commit mode only: the entry has an empty field or its image is not available.
    #[error("Invalid vocabulary entry: {word} / {image_name}")]
    InvalidVocabularyEntry { word: String, image_name: String },
}

impl ValidationIssue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::EmptyWordOrImageName
            | Self::WrongExerciseType { .. }
            | Self::MalformedExerciseFields => IssueKind::ValidationError,
            Self::DuplicateWord { .. } | Self::DuplicateImageFilename { .. } => {
                IssueKind::DuplicateError
            }
            Self::MissingImageFile { .. } | Self::ExerciseImageMissing { .. } => {
                IssueKind::MissingResourceError
            }
            Self::InvalidVocabularyEntry { word, image_name } => {
                if word.is_empty() || image_name.is_empty() {
                    IssueKind::ValidationError
                } else {
                    IssueKind::MissingResourceError
                }
            }
        }
    }
}



fn preview_vocabulary_issues(
    vocabulary: &[VocabularyEntry],
    available_images: &BTreeSet<String>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen_words = HashSet::with_capacity(vocabulary.len());
    let mut seen_image_names = HashSet::with_capacity(vocabulary.len());

    for entry in vocabulary {
        if entry.word.is_empty() || entry.image_name.is_empty() {
            issues.push(ValidationIssue::EmptyWordOrImageName);
        }

        // Empty values go through the duplicate and availability checks as well.
        if !seen_words.insert(entry.word.as_str()) {
            issues.push(ValidationIssue::DuplicateWord {
                word: entry.word.clone(),
            });
        }

        if !seen_image_names.insert(entry.image_name.as_str()) {
            issues.push(ValidationIssue::DuplicateImageFilename {
                image_name: entry.image_name.clone(),
            });
        }

        if !available_images.contains(&entry.image_name) {
            issues.push(ValidationIssue::MissingImageFile {
                image_name: entry.image_name.clone(),
            });
        }
    }

    issues
}

fn preview_exercise_issues(
    exercise: &ExerciseEntry,
    available_images: &BTreeSet<String>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let ExerciseKind::Unrecognized(exercise_type) = &exercise.kind {
        issues.push(ValidationIssue::WrongExerciseType {
            exercise_type: exercise_type.clone(),
        });
    }

    if exercise.question.is_empty() || exercise.options.is_empty() || exercise.answer.is_empty() {
        issues.push(ValidationIssue::MalformedExerciseFields);
    }

    if exercise.kind == ExerciseKind::Recognized(ExerciseType::ImageToWord)
        && !available_images.contains(&exercise.question)
    {
        issues.push(ValidationIssue::ExerciseImageMissing {
            question: exercise.question.clone(),
        });
    }

    issues
}


/// Collects every issue in the document, in document order
/// (all vocabulary issues first, then all exercise issues).
///
/// Fails only if the document is empty.
pub fn validate_for_preview(
    document: &ParsedDocument,
    available_images: &BTreeSet<String>,
) -> Result<Vec<ValidationIssue>, ImportError> {
    if document.is_empty() {
        return Err(ImportError::EmptyDocument);
    }

    let mut issues = preview_vocabulary_issues(&document.vocabulary, available_images);

    issues.extend(
        document
            .exercises
            .iter()
            .flat_map(|exercise| preview_exercise_issues(exercise, available_images)),
    );

    Ok(issues)
}



#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedExercise {
    pub exercise_type: ExerciseType,
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}


/// A document that passed commit-mode validation:
/// every exercise has a recognized type and every vocabulary entry has an available image.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatedDocument {
    pub vocabulary: Vec<VocabularyEntry>,
    pub exercises: Vec<ValidatedExercise>,
}


/// Narrower than [`validate_for_preview`]: only checks what would make the import
/// itself invalid. Any issue rejects the whole document with
/// [`ImportError::ValidationFailed`], carrying every issue found.
pub fn validate_for_commit(
    document: ParsedDocument,
    available_images: &BTreeSet<String>,
) -> Result<ValidatedDocument, ImportError> {
    if document.is_empty() {
        return Err(ImportError::EmptyDocument);
    }

    let mut issues = Vec::new();

    for entry in &document.vocabulary {
        if entry.word.is_empty()
            || entry.image_name.is_empty()
            || !available_images.contains(&entry.image_name)
        {
            issues.push(ValidationIssue::InvalidVocabularyEntry {
                word: entry.word.clone(),
                image_name: entry.image_name.clone(),
            });
        }
    }

    let mut exercises = Vec::with_capacity(document.exercises.len());

    for exercise in document.exercises {
        match exercise.kind {
            ExerciseKind::Recognized(exercise_type) => exercises.push(ValidatedExercise {
                exercise_type,
                question: exercise.question,
                options: exercise.options,
                answer: exercise.answer,
            }),
            ExerciseKind::Unrecognized(exercise_type) => {
                issues.push(ValidationIssue::WrongExerciseType { exercise_type });
            }
        }
    }

    if !issues.is_empty() {
        return Err(ImportError::ValidationFailed { issues });
    }

    Ok(ValidatedDocument {
        vocabulary: document.vocabulary,
        exercises,
    })
}



#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::parse_text_lines;

    fn images(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn messages(issues: &[ValidationIssue]) -> Vec<String> {
        issues.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn clean_document_has_no_issues() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "IMAGE NAME: cat.png",
            "EXERCISES",
            "TYPE: IMAGE_TO_WORD",
            "QUESTION: cat.png",
            "OPTIONS: cat, dog",
            "ANSWER: cat",
        ]);

        let issues = validate_for_preview(&document, &images(&["cat.png"])).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn flags_duplicate_word_exactly_once() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "IMAGE NAME: cat.png",
            "WORD: cat",
            "IMAGE NAME: kitten.png",
        ]);

        let issues =
            validate_for_preview(&document, &images(&["cat.png", "kitten.png"])).unwrap();

        assert_eq!(messages(&issues), vec!["Duplicate word: cat"]);
        assert_eq!(issues[0].kind(), IssueKind::DuplicateError);
    }

    #[test]
    fn accumulates_all_preview_issues_in_order() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "WORD: dog",
            "IMAGE NAME: dog.png",
            "WORD: puppy",
            "IMAGE NAME: dog.png",
            "EXERCISES",
            "TYPE: MATCHING",
            "QUESTION: q",
            "OPTIONS: a",
            "ANSWER: a",
            "TYPE: IMAGE_TO_WORD",
            "QUESTION: bird.png",
            "ANSWER: bird",
        ]);

        let issues = validate_for_preview(&document, &images(&["dog.png"])).unwrap();

        assert_eq!(
            messages(&issues),
            vec![
                "Empty word or image name",
                "Missing image file: ",
                "Duplicate image filename: dog.png",
                "Wrong exercise type: MATCHING",
                "Empty or malformed exercise fields",
                "Exercise image missing: bird.png",
            ]
        );
    }

    #[test]
    fn reports_missing_image_file() {
        let document = parse_text_lines(["VOCABULARY", "WORD: cat", "IMAGE NAME: cat.png"]);

        let issues = validate_for_preview(&document, &images(&[])).unwrap();

        assert_eq!(messages(&issues), vec!["Missing image file: cat.png"]);
        assert_eq!(issues[0].kind(), IssueKind::MissingResourceError);
    }

    #[test]
    fn empty_image_names_are_checked_like_any_other() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "WORD: dog",
            "EXERCISES",
        ]);

        let issues = validate_for_preview(&document, &images(&["cat.png"])).unwrap();

        assert_eq!(
            messages(&issues),
            vec![
                "Empty word or image name",
                "Missing image file: ",
                "Empty word or image name",
                "Duplicate image filename: ",
                "Missing image file: ",
            ]
        );
    }

    #[test]
    fn word_to_image_question_is_not_an_image() {
        let document = parse_text_lines([
            "EXERCISES",
            "TYPE: WORD_TO_IMAGE",
            "QUESTION: cat",
            "OPTIONS: cat.png, dog.png",
            "ANSWER: cat.png",
        ]);

        assert!(validate_for_preview(&document, &images(&[]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn both_modes_reject_empty_document() {
        let document = parse_text_lines(["Just a title", "and some prose."]);

        assert!(matches!(
            validate_for_preview(&document, &images(&[])),
            Err(ImportError::EmptyDocument)
        ));
        assert!(matches!(
            validate_for_commit(document, &images(&[])),
            Err(ImportError::EmptyDocument)
        ));
    }

    #[test]
    fn commit_rejects_whole_document_on_bad_exercise_type() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "IMAGE NAME: cat.png",
            "EXERCISES",
            "TYPE: IMAGE_TO_WORD",
            "QUESTION: cat.png",
            "OPTIONS: cat, dog",
            "ANSWER: cat",
            "TYPE: FILL_IN",
            "QUESTION: The ___ meows.",
            "OPTIONS: cat, dog",
            "ANSWER: cat",
        ]);

        let Err(ImportError::ValidationFailed { issues }) =
            validate_for_commit(document, &images(&["cat.png"]))
        else {
            panic!("expected validation to fail");
        };

        assert_eq!(messages(&issues), vec!["Wrong exercise type: FILL_IN"]);
    }

    #[test]
    fn commit_reports_invalid_vocabulary_entries() {
        let document = parse_text_lines([
            "VOCABULARY",
            "WORD: cat",
            "WORD: dog",
            "IMAGE NAME: dog.png",
            "WORD: bird",
            "IMAGE NAME: bird.png",
        ]);

        let Err(ImportError::ValidationFailed { issues }) =
            validate_for_commit(document, &images(&["bird.png"]))
        else {
            panic!("expected validation to fail");
        };

        assert_eq!(
            messages(&issues),
            vec![
                "Invalid vocabulary entry: cat / ",
                "Invalid vocabulary entry: dog / dog.png",
            ]
        );
        assert_eq!(issues[0].kind(), IssueKind::ValidationError);
        assert_eq!(issues[1].kind(), IssueKind::MissingResourceError);
    }

    #[test]
    fn commit_passes_typed_exercises_through() {
        let document = parse_text_lines([
            "EXERCISES",
            "TYPE: WORD_TO_IMAGE",
            "QUESTION: cat",
            "OPTIONS: cat.png, dog.png",
            "ANSWER: cat.png",
        ]);

        let validated = validate_for_commit(document, &images(&[])).unwrap();

        assert!(validated.vocabulary.is_empty());
        assert_eq!(
            validated.exercises,
            vec![ValidatedExercise {
                exercise_type: ExerciseType::WordToImage,
                question: "cat".to_string(),
                options: vec!["cat.png".to_string(), "dog.png".to_string()],
                answer: "cat.png".to_string(),
            }]
        );
    }
}

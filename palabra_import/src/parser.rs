//! Line-oriented parser for vocabulary documents.
//!
//! A document consists of a `VOCABULARY` section and an `EXERCISES` section:
//!
//! ```text
//! VOCABULARY
//! WORD: cat
//! IMAGE NAME: cat.png
//!
//! EXERCISES
//! TYPE: IMAGE_TO_WORD
//! QUESTION: cat.png
//! OPTIONS: cat, dog, bird
//! ANSWER: cat
//! ```
//!
//! Markers are matched case-insensitively as line prefixes, values are the
//! (trimmed) text after the first colon. Blank and unrecognized lines are ignored.
//!
//! Parsing is a fold over the lines with an explicit [`ParserState`]:
//! a `WORD:` line stays pending until an `IMAGE NAME:` line names its image,
//! or until another `WORD:` line, an `EXERCISES` marker or the end of input
//! leaves it without one. An exercise is emitted on its `ANSWER:` line;
//! an exercise that never reaches one is dropped.

use palabra_core::exercise::ExerciseType;


const VOCABULARY_SECTION_MARKER: &str = "VOCABULARY";
const EXERCISES_SECTION_MARKER: &str = "EXERCISES";

const WORD_MARKER: &str = "WORD:";
const IMAGE_NAME_MARKER: &str = "IMAGE NAME:";

const TYPE_MARKER: &str = "TYPE:";
const QUESTION_MARKER: &str = "QUESTION:";
const OPTIONS_MARKER: &str = "OPTIONS:";
const ANSWER_MARKER: &str = "ANSWER:";



#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VocabularyEntry {
    pub word: String,

    /// Empty if the document never named an image for this word.
    pub image_name: String,
}


/// Exercise type as written in the document.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ExerciseKind {
    Recognized(ExerciseType),
    Unrecognized(String),
}

impl ExerciseKind {
    pub fn from_raw(raw_exercise_type: &str) -> Self {
        match ExerciseType::from_name(raw_exercise_type) {
            Some(exercise_type) => Self::Recognized(exercise_type),
            None => Self::Unrecognized(raw_exercise_type.to_string()),
        }
    }

    /// The type exactly as it appeared in the document.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Recognized(exercise_type) => exercise_type.as_str(),
            Self::Unrecognized(raw_exercise_type) => raw_exercise_type,
        }
    }
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExerciseEntry {
    pub kind: ExerciseKind,

    pub question: String,

    /// Comma-separated values from the `OPTIONS:` line, trimmed, without empty ones.
    pub options: Vec<String>,

    pub answer: String,
}


#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ParsedDocument {
    pub vocabulary: Vec<VocabularyEntry>,

    pub exercises: Vec<ExerciseEntry>,
}

impl ParsedDocument {
    /// Returns `true` if the document has neither vocabulary nor exercises.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty() && self.exercises.is_empty()
    }
}



#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum Section {
    #[default]
    None,
    Vocabulary,
    Exercises,
}


/// Exercise fields gathered since the last `TYPE:` line.
#[derive(Clone, PartialEq, Eq, Debug)]
struct ExerciseDraft {
    raw_exercise_type: String,
    question: String,
    options: Vec<String>,
}

impl ExerciseDraft {
    fn new(raw_exercise_type: &str) -> Self {
        Self {
            raw_exercise_type: raw_exercise_type.to_string(),
            question: String::new(),
            options: Vec::new(),
        }
    }

    fn finish(self, answer: &str) -> ExerciseEntry {
        ExerciseEntry {
            kind: ExerciseKind::from_raw(&self.raw_exercise_type),
            question: self.question,
            options: self.options,
            answer: answer.to_string(),
        }
    }
}


#[derive(Debug, Default)]
struct ParserState {
    section: Section,

    /// Word whose image name we are still looking for.
    pending_word: Option<String>,

    exercise_draft: Option<ExerciseDraft>,

    document: ParsedDocument,
}

impl ParserState {
    fn step(mut self, line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return self;
        }

        if let Some(pending_word) = self.pending_word.take() {
            if let Some(image_name) = strip_marker(line, IMAGE_NAME_MARKER) {
                self.push_vocabulary_entry(pending_word, image_name);
                return self;
            }

            if strip_marker(line, WORD_MARKER).is_some()
                || strip_marker(line, EXERCISES_SECTION_MARKER).is_some()
            {
                self.push_vocabulary_entry(pending_word, "");
            } else {
                self.pending_word = Some(pending_word);
            }
        }

        if strip_marker(line, VOCABULARY_SECTION_MARKER).is_some() {
            self.section = Section::Vocabulary;
            return self;
        }

        if strip_marker(line, EXERCISES_SECTION_MARKER).is_some() {
            self.section = Section::Exercises;
            return self;
        }

        match self.section {
            Section::None => {}
            Section::Vocabulary => {
                if let Some(word) = strip_marker(line, WORD_MARKER) {
                    self.pending_word = Some(word.to_string());
                }
            }
            Section::Exercises => self.step_exercise_field(line),
        }

        self
    }

    fn step_exercise_field(&mut self, line: &str) {
        if let Some(raw_exercise_type) = strip_marker(line, TYPE_MARKER) {
            // Any unfinished draft is silently replaced.
            self.exercise_draft = Some(ExerciseDraft::new(raw_exercise_type));
            return;
        }

        let Some(draft) = self.exercise_draft.as_mut() else {
            return;
        };

        if let Some(question) = strip_marker(line, QUESTION_MARKER) {
            draft.question = question.to_string();
        } else if let Some(options) = strip_marker(line, OPTIONS_MARKER) {
            draft.options = split_options(options);
        } else if let Some(answer) = strip_marker(line, ANSWER_MARKER) {
            if let Some(draft) = self.exercise_draft.take() {
                self.document.exercises.push(draft.finish(answer));
            }
        }
    }

    fn push_vocabulary_entry(&mut self, word: String, image_name: &str) {
        self.document.vocabulary.push(VocabularyEntry {
            word,
            image_name: image_name.to_string(),
        });
    }

    fn finish(mut self) -> ParsedDocument {
        if let Some(pending_word) = self.pending_word.take() {
            self.push_vocabulary_entry(pending_word, "");
        }

        self.document
    }
}


/// If `line` starts with `marker` (ASCII case-insensitively), returns the value
/// after the marker's first colon, trimmed. Section markers have no colon,
/// in which case the rest of the line is returned as-is.
fn strip_marker<'l>(line: &'l str, marker: &str) -> Option<&'l str> {
    let prefix = line.get(..marker.len())?;
    if !prefix.eq_ignore_ascii_case(marker) {
        return None;
    }

    match line.split_once(':') {
        Some((_, value)) if marker.ends_with(':') => Some(value.trim()),
        _ => Some(&line[marker.len()..]),
    }
}

fn split_options(options: &str) -> Vec<String> {
    options
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}



/// Parses already-extracted document lines into vocabulary entries and exercises.
pub fn parse_text_lines<I, S>(lines: I) -> ParsedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(ParserState::default(), |state, line| {
            state.step(line.as_ref())
        })
        .finish()
}

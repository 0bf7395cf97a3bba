//! Persistence of validated documents.
//!
//! Importing is split in two: [`plan_import`] is synchronous and decides what will be
//! written (re-checking the image store and resolving exercise-to-vocabulary links by word),
//! while [`execute_import`] writes the plan inside a single database transaction.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use palabra_core::exercise::ExerciseType;
use palabra_core::id::{LessonContentId, UserId, VocabularyId};
use palabra_database::entities::exercise::{ExerciseMutation, NewExercise};
use palabra_database::entities::lesson_content::{LessonContentMutation, NewLessonContent};
use palabra_database::entities::vocabulary::{NewVocabulary, VocabularyMutation};
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

use crate::images::ImageStore;
use crate::parser::VocabularyEntry;
use crate::validation::{ValidatedDocument, ValidatedExercise};
use crate::ImportError;


/// An exercise about to be persisted, along with the word
/// of the imported vocabulary entry it should link to, if any.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PlannedExercise {
    pub exercise: ValidatedExercise,
    pub vocabulary_word: Option<String>,
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImportPlan {
    pub lesson_title: String,

    /// Only entries whose image is present in the image store.
    pub vocabulary: Vec<VocabularyEntry>,

    pub exercises: Vec<PlannedExercise>,

    /// Entries whose image disappeared after validation.
    pub skipped_vocabulary: Vec<VocabularyEntry>,
}


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ImportSummary {
    pub lesson_content_id: LessonContentId,
    pub vocabulary_created: usize,
    pub exercises_created: usize,
    pub vocabulary_skipped: usize,
}


/// The file name without its final extension, e.g. `lesson-3.docx` becomes `lesson-3`.
pub fn lesson_title_from_file_name(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}


/// The word an exercise should be linked to:
/// image-to-word exercises answer with a word, word-to-image exercises ask with one.
fn linking_word(exercise: &ValidatedExercise) -> &str {
    match exercise.exercise_type {
        ExerciseType::ImageToWord => &exercise.answer,
        ExerciseType::WordToImage => &exercise.question,
    }
}


pub fn plan_import(
    document: ValidatedDocument,
    lesson_title: String,
    image_store: &dyn ImageStore,
) -> ImportPlan {
    let (vocabulary, skipped_vocabulary): (Vec<_>, Vec<_>) = document
        .vocabulary
        .into_iter()
        .partition(|entry| image_store.contains_image(&entry.image_name));

    for skipped_entry in &skipped_vocabulary {
        debug!(
            word = skipped_entry.word,
            image_name = skipped_entry.image_name,
            "Image vanished since validation, skipping vocabulary entry."
        );
    }

    let imported_words = vocabulary
        .iter()
        .map(|entry| entry.word.as_str())
        .collect::<HashSet<_>>();

    let exercises = document
        .exercises
        .into_iter()
        .map(|exercise| {
            let word = linking_word(&exercise);
            let vocabulary_word = imported_words.contains(word).then(|| word.to_string());

            PlannedExercise {
                exercise,
                vocabulary_word,
            }
        })
        .collect();

    ImportPlan {
        lesson_title,
        vocabulary,
        exercises,
        skipped_vocabulary,
    }
}


/// Persists the plan in one transaction: a lesson content record,
/// then vocabulary, then exercises. Any failure rolls everything back.
pub async fn execute_import(
    connection: &mut PgConnection,
    plan: ImportPlan,
    actor: UserId,
) -> Result<ImportSummary, ImportError> {
    let mut transaction = connection.begin().await?;

    let lesson_content = LessonContentMutation::create(
        &mut *transaction,
        NewLessonContent {
            title: plan.lesson_title,
            created_by: actor,
        },
    )
    .await?;

    let mut vocabulary_ids_by_word: HashMap<String, VocabularyId> =
        HashMap::with_capacity(plan.vocabulary.len());

    for entry in plan.vocabulary {
        let vocabulary = VocabularyMutation::create(
            &mut *transaction,
            NewVocabulary {
                word: entry.word,
                image_name: entry.image_name,
            },
        )
        .await?;

        vocabulary_ids_by_word.insert(vocabulary.word, vocabulary.id);
    }

    let mut exercises_created = 0;

    for planned_exercise in plan.exercises {
        let vocabulary_id = planned_exercise
            .vocabulary_word
            .as_ref()
            .and_then(|word| vocabulary_ids_by_word.get(word))
            .copied();

        let exercise = planned_exercise.exercise;

        ExerciseMutation::create(
            &mut *transaction,
            NewExercise {
                exercise_type: exercise.exercise_type,
                question: exercise.question,
                options: exercise.options,
                answer: exercise.answer,
                vocabulary_id,
                lesson_content_id: Some(lesson_content.id),
            },
        )
        .await?;

        exercises_created += 1;
    }

    transaction.commit().await?;

    let summary = ImportSummary {
        lesson_content_id: lesson_content.id,
        vocabulary_created: vocabulary_ids_by_word.len(),
        exercises_created,
        vocabulary_skipped: plan.skipped_vocabulary.len(),
    };

    info!(
        lesson_content_id = %summary.lesson_content_id,
        vocabulary_created = summary.vocabulary_created,
        exercises_created = summary.exercises_created,
        vocabulary_skipped = summary.vocabulary_skipped,
        "Imported document."
    );

    Ok(summary)
}

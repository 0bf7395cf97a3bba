use serde::{Deserialize, Serialize};


/// Kind of a vocabulary exercise.
///
/// Documents and the database both store the type as its
/// upper snake-case name (see [`ExerciseType::as_str`]).
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ExerciseType {
    /// The question is an image filename, options and answer are words.
    #[serde(rename = "IMAGE_TO_WORD")]
    ImageToWord,

    /// The question is a word, options and answer are image filenames.
    #[serde(rename = "WORD_TO_IMAGE")]
    WordToImage,
}

impl ExerciseType {
    pub const fn all() -> [Self; 2] {
        [Self::ImageToWord, Self::WordToImage]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ImageToWord => "IMAGE_TO_WORD",
            Self::WordToImage => "WORD_TO_IMAGE",
        }
    }

    /// Matches the exact type name (case-sensitive),
    /// returning `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|exercise_type| exercise_type.as_str() == name)
    }
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recognizes_only_exact_names() {
        assert_eq!(
            ExerciseType::from_name("IMAGE_TO_WORD"),
            Some(ExerciseType::ImageToWord)
        );
        assert_eq!(
            ExerciseType::from_name("WORD_TO_IMAGE"),
            Some(ExerciseType::WordToImage)
        );

        assert_eq!(ExerciseType::from_name("image_to_word"), None);
        assert_eq!(ExerciseType::from_name("MATCHING"), None);
        assert_eq!(ExerciseType::from_name(""), None);
    }
}

use std::str::FromStr;


pub trait PalabraUuidNewtype: FromStr {}


macro_rules! create_uuid_newtype {
    ($struct_name:ident) => {
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $struct_name(#[serde(with = "uuid::serde::simple")] pub(crate) uuid::Uuid);

        impl $struct_name {
            #[inline]
            pub fn new(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            #[inline]
            pub fn generate() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            #[inline]
            pub fn into_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl std::str::FromStr for $struct_name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let inner_uuid = <uuid::Uuid as std::str::FromStr>::from_str(s)?;

                Ok(Self(inner_uuid))
            }
        }

        impl $crate::id::PalabraUuidNewtype for $struct_name {}

        impl std::fmt::Display for $struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                uuid::fmt::Simple::from_uuid(self.0).fmt(f)
            }
        }
    };
}



create_uuid_newtype!(UserId);

create_uuid_newtype!(VocabularyId);

create_uuid_newtype!(ExerciseId);

create_uuid_newtype!(LessonContentId);



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn displays_and_parses_in_simple_format() {
        let id = VocabularyId::generate();

        let displayed = id.to_string();
        assert_eq!(displayed.len(), 32);
        assert!(!displayed.contains('-'));

        let parsed = VocabularyId::from_str(&displayed).unwrap();
        assert_eq!(parsed, id);
    }
}

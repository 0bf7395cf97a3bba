pub mod exercise;
pub mod lesson_content;
pub mod user;
pub mod vocabulary;

pub mod exam_builder;
pub mod question_gen;

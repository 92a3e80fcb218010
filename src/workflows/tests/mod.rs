mod common;
mod exam_finder;

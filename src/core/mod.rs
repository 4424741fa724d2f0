pub mod activity;
pub mod document;
pub mod frontmatter;
pub mod library;
pub mod paths;
pub mod scanner;
pub mod tree;

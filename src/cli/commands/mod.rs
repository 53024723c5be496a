pub mod docs;
pub mod flags;
pub mod nav;
pub mod shell;

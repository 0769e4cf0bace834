mod json;

pub use json::{DeclarationOutput, JsonOutput, ModuleOutput};

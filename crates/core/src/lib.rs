pub mod color;
pub mod naming;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use source::{VariableSnapshot, VariableSource};
pub use types::{
    MediaQuery, MediaQueryKind, Mode, RawCollection, RawVariable, ResolvedType, Rgba, VariableId,
    VariableSet, VariableSetCollection, VariableValue,
};

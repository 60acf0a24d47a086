pub mod engine;
pub mod error;
pub mod extract;
pub mod forms;
pub mod highlight;
pub mod normalize;
pub mod preprocess;
pub mod registry;
pub mod rulesets;

pub use engine::Engine;
pub use error::{CoreError, Result};
pub use extract::{Extraction, Miss, Segment};
pub use forms::{CandidateForms, FormGenerator, SuffixTable, SuffixTables};
pub use highlight::{Highlighter, Quirk};
pub use normalize::{Definition, NOT_FOUND};
pub use registry::{DictionaryInfo, DictionaryRuleset, RulesetRegistry};

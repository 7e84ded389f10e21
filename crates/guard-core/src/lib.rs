pub mod allergies;
pub mod analysis;
pub mod error;
pub mod extract;
pub mod input;
pub mod matching;
pub mod pacing;
pub mod preprocess;

pub use allergies::{AllergyList, COMMON_ALLERGIES};
pub use analysis::{LookupStrategy, MenuAnalyzer};
pub use error::{AllergyError, AnalysisError, InputError};
pub use extract::{DishLine, extract_dishes};
pub use input::read_menu_file;
pub use matching::find_allergy_matches;

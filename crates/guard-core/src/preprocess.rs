use unicode_normalization::UnicodeNormalization;

pub trait MenuPreprocessor: Send + Sync {
    // Default menu preprocessor
    fn process(&self, text: &str) -> String {
        // Unicode normalization (NFKC), folds fullwidth digits and currency signs
        let text: String = text.nfkc().collect();

        // Lines are split on '\n' later, stray carriage returns would stick to names
        text.replace('\r', "")
    }
}

pub struct DefaultPreprocessor;
impl MenuPreprocessor for DefaultPreprocessor {}

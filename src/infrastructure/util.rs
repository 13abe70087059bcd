// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_collapses_runs() {
        let generator = DefaultSlugGenerator;
        assert_eq!(generator.slugify("Hello World!"), "hello-world");
        assert_eq!(generator.slugify("  --Weird__ Title--  "), "weird-title");
    }
}

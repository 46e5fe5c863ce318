use crate::editing::input::Column;
use crate::models::Language;

/// Which language occupies the first rendered column.
///
/// Pure presentation state: it decides where each side's data lands, never what
/// the data is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayOrder {
    #[default]
    EnFirst,
    BnFirst,
}

impl DisplayOrder {
    pub fn from_en_first(en_first: bool) -> Self {
        if en_first {
            DisplayOrder::EnFirst
        } else {
            DisplayOrder::BnFirst
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::EnFirst => DisplayOrder::BnFirst,
            DisplayOrder::BnFirst => DisplayOrder::EnFirst,
        }
    }

    pub fn first(self) -> Language {
        match self {
            DisplayOrder::EnFirst => Language::En,
            DisplayOrder::BnFirst => Language::Bn,
        }
    }

    pub fn second(self) -> Language {
        self.first().other()
    }

    /// Language whose units are shown in `column`
    pub fn language_for(self, column: Column) -> Language {
        match column {
            Column::First => self.first(),
            Column::Second => self.second(),
        }
    }

    pub fn column_for(self, language: Language) -> Column {
        if language == self.first() {
            Column::First
        } else {
            Column::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DisplayOrder::EnFirst, Column::First, Language::En)]
    #[case(DisplayOrder::EnFirst, Column::Second, Language::Bn)]
    #[case(DisplayOrder::BnFirst, Column::First, Language::Bn)]
    #[case(DisplayOrder::BnFirst, Column::Second, Language::En)]
    fn test_column_language_mapping(
        #[case] order: DisplayOrder,
        #[case] column: Column,
        #[case] language: Language,
    ) {
        assert_eq!(order.language_for(column), language);
        assert_eq!(order.column_for(language), column);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let order = DisplayOrder::BnFirst;
        assert_eq!(order.toggled(), DisplayOrder::EnFirst);
        assert_eq!(order.toggled().toggled(), order);
    }
}

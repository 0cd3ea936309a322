use crate::models::Category;

/// Ordered keyword table used to classify expense notes.
///
/// Categories are checked in insertion order and the first category with a
/// matching keyword wins. The table is built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

const BUILT_IN: &[(Category, &[&str])] = &[
    (
        Category::FoodAndDrinks,
        &[
            "tea", "coffee", "lunch", "dinner", "breakfast", "food", "restaurant", "cafe", "snack",
            "drink", "meal",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "clothes", "shoes", "shirt", "dress", "pants", "buy", "purchase", "store",
        ],
    ),
    (
        Category::Transportation,
        &[
            "uber", "taxi", "bus", "train", "metro", "fuel", "gas", "petrol", "transport", "ride",
            "auto",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie",
            "cinema",
            "game",
            "concert",
            "party",
            "entertainment",
            "show",
            "netflix",
            "spotify",
        ],
    ),
    (
        Category::BillsAndUtilities,
        &[
            "electricity", "bill", "water", "gas", "internet", "wifi", "phone", "mobile", "utility",
            "rent",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "doctor", "hospital", "medicine", "pharmacy", "medical", "health", "clinic", "dentist",
        ],
    ),
    (
        Category::Education,
        &[
            "book",
            "course",
            "class",
            "tuition",
            "school",
            "college",
            "education",
            "study",
            "learning",
        ],
    ),
    (
        Category::Travel,
        &["hotel", "flight", "vacation", "trip", "travel", "booking", "ticket"],
    ),
    (
        Category::Personal,
        &["haircut", "salon", "gym", "personal", "grooming", "spa"],
    ),
];

impl Default for KeywordTable {
    fn default() -> Self {
        let entries = BUILT_IN
            .iter()
            .map(|(cat, words)| (*cat, words.iter().map(|w| w.to_string()).collect()))
            .collect();
        Self { entries }
    }
}

impl KeywordTable {
    /// A table with no keywords; every note classifies as `Other`.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append keywords to a category, adding the category at the end of the
    /// order if it has no entry yet. Keywords are lower-cased; blanks and
    /// duplicates are skipped. `Other` is the fallback and never gets keywords.
    pub fn with_keywords<I, S>(mut self, category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if category.is_catch_all() {
            return self;
        }

        let idx = match self.entries.iter().position(|(c, _)| *c == category) {
            Some(idx) => idx,
            None => {
                self.entries.push((category, Vec::new()));
                self.entries.len() - 1
            }
        };

        let list = &mut self.entries[idx].1;
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !list.contains(&kw) {
                list.push(kw);
            }
        }
        self
    }

    pub fn keywords(&self, category: Category) -> &[String] {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, kws)| kws.as_slice())
            .unwrap_or(&[])
    }

    /// Categories in classification order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn keyword_count(&self) -> usize {
        self.entries.iter().map(|(_, kws)| kws.len()).sum()
    }

    /// Classify already lower-cased, whitespace-split words.
    ///
    /// A keyword matches a word when either one contains the other, so
    /// "gas" matches "gasoline" and a short word like "a" matches any
    /// keyword containing that letter.
    pub fn classify<S: AsRef<str>>(&self, words: &[S]) -> Category {
        self.entries
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|kw| {
                    words.iter().any(|w| {
                        let w = w.as_ref();
                        w.contains(kw.as_str()) || kw.contains(w)
                    })
                })
            })
            .map(|(cat, _)| *cat)
            .unwrap_or(Category::Other)
    }

    /// Lower-case and split `text` on whitespace, then classify.
    pub fn classify_text(&self, text: &str) -> Category {
        let lower = text.trim().to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        self.classify(&words)
    }
}

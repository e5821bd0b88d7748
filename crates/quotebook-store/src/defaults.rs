use quotebook_types::{Quote, QuoteId};

struct Seed {
    id: &'static str,
    text: &'static str,
    author: &'static str,
    source: Option<&'static str>,
    added_at: i64,
    tags: [&'static str; 2],
}

const SEEDS: [Seed; 7] = [
    Seed {
        id: "1",
        text: "Две вещи наполняют душу всегда новым и все более сильным удивлением и благоговением, чем чаще и продолжительнее мы размышляем о них, — это звездное небо надо мной и моральный закон во мне.",
        author: "Иммануил Кант",
        source: Some("Критика практического разума"),
        added_at: 1_620_000_000_000,
        tags: ["философия", "этика"],
    },
    Seed {
        id: "2",
        text: "Тот, кто хочет видеть результаты своего труда немедленно, должен идти в сапожники.",
        author: "Альберт Эйнштейн",
        source: None,
        added_at: 1_620_100_000_000,
        tags: ["наука", "труд"],
    },
    Seed {
        id: "3",
        text: "Если вы хотите вести счастливую жизнь, вы должны быть привязаны к цели, а не к людям или вещам.",
        author: "Альберт Эйнштейн",
        source: None,
        added_at: 1_620_200_000_000,
        tags: ["счастье", "цель"],
    },
    Seed {
        id: "4",
        text: "Жизнь — это то, что с тобой происходит, пока ты строишь другие планы.",
        author: "Джон Леннон",
        source: None,
        added_at: 1_620_300_000_000,
        tags: ["жизнь", "планы"],
    },
    Seed {
        id: "5",
        text: "Счастье — это не нечто готовое. Счастье зависит от ваших действий.",
        author: "Далай-лама XIV",
        source: None,
        added_at: 1_620_400_000_000,
        tags: ["счастье", "действие"],
    },
    Seed {
        id: "6",
        text: "Программирование — это не о том, что вы знаете; это о том, что вы можете выяснить.",
        author: "Крис Пайн",
        source: None,
        added_at: 1_620_500_000_000,
        tags: ["программирование", "знания"],
    },
    Seed {
        id: "7",
        text: "Лучшее время, чтобы посадить дерево, было 20 лет назад. Второе лучшее время — сейчас.",
        author: "Китайская пословица",
        source: None,
        added_at: 1_620_600_000_000,
        tags: ["время", "действие"],
    },
];

/// The collection written on first run
pub fn default_quotes() -> Vec<Quote> {
    SEEDS
        .iter()
        .map(|seed| Quote {
            id: QuoteId::new(seed.id),
            text: seed.text.to_string(),
            author: seed.author.to_string(),
            source: seed.source.map(str::to_string),
            added_at: seed.added_at,
            tags: Some(seed.tags.iter().map(|t| t.to_string()).collect()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_defaults_are_well_formed() {
        let quotes = default_quotes();
        assert_eq!(quotes.len(), 7);

        let ids: HashSet<_> = quotes.iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids.len(), 7);

        for quote in &quotes {
            assert!(!quote.text.trim().is_empty());
            assert!(!quote.author.trim().is_empty());
            assert!(quote.tags().iter().all(|t| *t == t.to_lowercase()));
        }

        assert_eq!(
            quotes[0].source.as_deref(),
            Some("Критика практического разума")
        );
        assert!(quotes[1..].iter().all(|q| q.source.is_none()));
    }
}

//! One-time population of the question catalog.

use crate::models::{Difficulty, QuestionRecord};
use crate::services::{metrics::record_seed_run, QuestionStore};
use service_core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { inserted: usize },
    Skipped { existing: u64 },
    Failed,
}

impl SeedOutcome {
    fn label(&self) -> &'static str {
        match self {
            SeedOutcome::Seeded { .. } => "seeded",
            SeedOutcome::Skipped { .. } => "skipped",
            SeedOutcome::Failed => "failed",
        }
    }
}

/// Inserts [`catalog`] when the store holds no questions.
///
/// Errors are logged and reported as [`SeedOutcome::Failed`]; they never
/// propagate, and there is no retry.
pub async fn seed_if_empty(store: &dyn QuestionStore) -> SeedOutcome {
    let outcome = match try_seed(store).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(error = %e, "Error seeding database");
            SeedOutcome::Failed
        }
    };
    record_seed_run(outcome.label());
    outcome
}

async fn try_seed(store: &dyn QuestionStore) -> Result<SeedOutcome, AppError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!(existing, "Database already seeded.");
        return Ok(SeedOutcome::Skipped { existing });
    }

    tracing::info!("No questions found. Seeding database...");
    let inserted = store.insert_many(catalog()).await?;
    tracing::info!(inserted, "Database seeded successfully!");
    Ok(SeedOutcome::Seeded { inserted })
}

/// The fixed starter catalog.
pub fn catalog() -> Vec<QuestionRecord> {
    use Difficulty::{Easy, Hard, Medium};

    vec![
        QuestionRecord::new(
            "Which planet is known as the Red Planet?",
            &["Earth", "Mars", "Jupiter", "Venus"],
            "Mars",
            Easy,
        ),
        QuestionRecord::new(
            "What is the largest ocean on Earth?",
            &["Atlantic", "Indian", "Arctic", "Pacific"],
            "Pacific",
            Easy,
        ),
        QuestionRecord::new(
            "Who is the richest person as of 2025",
            &["Elon Musk", "Mark Zuckerberg", "Mirania", "King of Uzbekistan"],
            "King of Uzbekistan",
            Medium,
        ),
        QuestionRecord::new(
            "What is the capital city of Japan?",
            &["Osaka", "Kyoto", "Tokyo", "Nagoya"],
            "Tokyo",
            Easy,
        ),
        QuestionRecord::new(
            "Which planet is closest to the sun?",
            &["Earth", "Venus", "Mercury", "Mars"],
            "Mercury",
            Medium,
        ),
        QuestionRecord::new(
            "Who wrote 'Pride and Prejudice'?",
            &["Emily Bronte", "Charlotte Bronte", "Jane Austen", "Mary Shelley"],
            "Jane Austen",
            Medium,
        ),
        QuestionRecord::new(
            "Which element has the chemical symbol 'O'?",
            &["Gold", "Oxygen", "Omnium", "Osmium"],
            "Oxygen",
            Easy,
        ),
        QuestionRecord::new(
            "What is the largest mammal in the world?",
            &["Elephant", "Blue Whale", "Hippopotamus", "Giraffe"],
            "Blue Whale",
            Easy,
        ),
        QuestionRecord::new(
            "Who painted the Mona Lisa?",
            &["Vincent Van Gogh", "Leonardo da Vinci", "Michelangelo", "Pablo Picasso"],
            "Leonardo da Vinci",
            Medium,
        ),
        QuestionRecord::new(
            "What is the currency of France?",
            &["Euro", "Franc", "Pound", "Dollar"],
            "Euro",
            Easy,
        ),
        QuestionRecord::new(
            "Which gas do plants absorb for photosynthesis?",
            &["Oxygen", "Nitrogen", "Carbon Dioxide", "Methane"],
            "Carbon Dioxide",
            Medium,
        ),
        QuestionRecord::new(
            "In which year did the Titanic sink?",
            &["1912", "1911", "1920", "1915"],
            "1912",
            Hard,
        ),
        QuestionRecord::new(
            "What is the main ingredient in sushi?",
            &["Rice", "Bread", "Corn", "Wheat"],
            "Rice",
            Easy,
        ),
        QuestionRecord::new(
            "Who discovered gravity?",
            &["Albert Einstein", "Galileo Galilei", "Isaac Newton", "Charles Darwin"],
            "Isaac Newton",
            Medium,
        ),
        QuestionRecord::new(
            "What is the longest river in the world?",
            &["Amazon", "Nile", "Yangtze", "Mississippi"],
            "Nile",
            Medium,
        ),
        QuestionRecord::new(
            "Which country hosted the 2020 Olympics?",
            &["China", "Japan", "USA", "UK"],
            "Japan",
            Medium,
        ),
        QuestionRecord::new(
            "What is the boiling point of water at sea level?",
            &["100°C", "200°C", "150°C", "50°C"],
            "100°C",
            Easy,
        ),
        QuestionRecord::new(
            "Who was the first president of the United States?",
            &["George Washington", "Thomas Jefferson", "Abraham Lincoln", "John Adams"],
            "George Washington",
            Medium,
        ),
        QuestionRecord::new(
            "Which planet is known as the 'Red Planet'?",
            &["Mars", "Jupiter", "Saturn", "Venus"],
            "Mars",
            Easy,
        ),
        QuestionRecord::new(
            "What is the smallest prime number?",
            &["1", "2", "3", "5"],
            "2",
            Easy,
        ),
        QuestionRecord::new(
            "Who invented the telephone?",
            &["Alexander Graham Bell", "Thomas Edison", "Nikola Tesla", "Marie Curie"],
            "Alexander Graham Bell",
            Medium,
        ),
        QuestionRecord::new(
            "Which metal is liquid at room temperature?",
            &["Mercury", "Silver", "Gold", "Iron"],
            "Mercury",
            Medium,
        ),
        QuestionRecord::new(
            "Which continent is the largest in size?",
            &["Africa", "Asia", "Europe", "North America"],
            "Asia",
            Medium,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryQuestionStore;
    use validator::Validate;

    #[test]
    fn catalog_has_23_valid_records() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 23);
        for record in &catalog {
            assert!(record.validate().is_ok(), "invalid: {}", record.question);
            assert!(record.id.is_none());
        }
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let store = InMemoryQuestionStore::new();

        let outcome = seed_if_empty(&store).await;

        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 23 });
        assert_eq!(store.count().await.unwrap(), 23);
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        let store = InMemoryQuestionStore::new();

        seed_if_empty(&store).await;
        let second = seed_if_empty(&store).await;

        assert_eq!(second, SeedOutcome::Skipped { existing: 23 });
        assert_eq!(store.insert_batches(), 1);
        assert_eq!(store.count().await.unwrap(), 23);
    }

    #[tokio::test]
    async fn non_empty_store_is_left_alone() {
        let store = InMemoryQuestionStore::new();
        store
            .insert_many(vec![QuestionRecord::new(
                "Is this a pre-existing question?",
                &["Yes", "No"],
                "Yes",
                Difficulty::Hard,
            )])
            .await
            .unwrap();

        let outcome = seed_if_empty(&store).await;

        assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn store_errors_are_swallowed() {
        let store = InMemoryQuestionStore::new();
        store.set_failing(true);

        assert_eq!(seed_if_empty(&store).await, SeedOutcome::Failed);

        store.set_failing(false);
        assert_eq!(store.count().await.unwrap(), 0);
    }
}

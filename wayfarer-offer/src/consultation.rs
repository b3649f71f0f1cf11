use wayfarer_shared::ScoredPackage;

const RECOMMEND_WORDS: [&str; 5] = ["recommend", "suggest", "best", "which", "choose"];
const EXIT_WORDS: [&str; 6] = ["exit", "close", "end", "quit", "goodbye", "bye"];

const GENERIC_REPLY: &str = "I'd be happy to help you with more information about the travel packages \
or answer any questions you have about your trip planning!";

/// Rule-based answers to follow-up questions about a recommendation list
pub struct Consultant;

impl Consultant {
    /// `packages` must be in ranked order; the first one is recommended.
    pub fn answer(question: &str, packages: &[ScoredPackage]) -> String {
        let question = question.to_lowercase();
        let wants_pick = RECOMMEND_WORDS.iter().any(|w| question.contains(w));

        match packages.first() {
            Some(best) if wants_pick => {
                let p = &best.package;
                let mut answer = format!(
                    "Based on your preferences, I recommend {name} to {destination}.\n\n\
                     Here's why it's the best match for you:\n\
                     - Highest compatibility score: {score:.1}%\n\
                     - Great rating: {rating} stars with {reviews} reviews\n\
                     - Price range matches your budget: {price}\n\
                     - Perfect for {style} travel style\n\
                     - Includes {accommodation} accommodation\n\n\
                     This package offers: {activities} and includes {includes}.\n\n\
                     Would you like more details about this package or have any other questions?",
                    name = p.name,
                    destination = p.destination,
                    score = best.best_percentage(),
                    rating = p.rating,
                    reviews = p.reviews_count,
                    price = p.price_range,
                    style = p.travel_style,
                    accommodation = p.accommodation_type,
                    activities = p.activities,
                    includes = p.includes,
                );
                if !p.booking_links.is_empty() {
                    let sites: Vec<_> = p.booking_links.keys().map(|site| site.display_name()).collect();
                    answer.push_str(&format!("\n\nYou can book it on {}.", sites.join(", ")));
                }
                answer
            }
            _ => GENERIC_REPLY.to_string(),
        }
    }

    /// Substring match, so "weekend" also counts as leaving.
    pub fn is_exit(input: &str) -> bool {
        let input = input.to_lowercase();
        EXIT_WORDS.iter().any(|w| input.contains(w))
    }
}

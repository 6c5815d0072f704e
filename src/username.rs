//! Random three-word usernames for synthetic enrolment subjects.
//!
//! Usernames are human-readable so a test user is recognizable in the
//! service dashboard. They are fresh per run and never persisted;
//! uniqueness is probabilistic, not guaranteed.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "brave", "calm", "clever", "curious", "eager", "gentle", "happy", "humble", "jolly", "keen",
    "lively", "lucky", "merry", "nimble", "patient", "plucky", "proud", "quiet", "rapid", "sleepy",
    "sturdy", "swift", "tidy", "witty",
];

const COLORS: &[&str] = &[
    "amber", "azure", "coral", "crimson", "golden", "green", "indigo", "ivory", "jade", "maroon",
    "olive", "russet", "scarlet", "silver", "teal", "violet",
];

const ANIMALS: &[&str] = &[
    "badger", "bison", "crane", "dolphin", "falcon", "ferret", "gibbon", "heron", "ibis", "jackal",
    "lemur", "lynx", "magpie", "marmot", "otter", "panther", "puffin", "raven", "seal", "stoat",
    "tapir", "toucan", "walrus", "wombat",
];

/// Generate an `adjective_color_animal` identifier.
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{}_{}_{}",
        ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())],
        COLORS[rng.gen_range(0..COLORS.len())],
        ANIMALS[rng.gen_range(0..ANIMALS.len())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_three_underscore_joined_words() {
        let name = generate();
        let parts: Vec<&str> = name.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert!(ADJECTIVES.contains(&parts[0]));
        assert!(COLORS.contains(&parts[1]));
        assert!(ANIMALS.contains(&parts[2]));
    }

    #[test]
    fn is_lowercase_ascii() {
        let name = generate();
        assert!(name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_'));
    }

    #[test]
    fn repeated_runs_are_mostly_distinct() {
        let names: std::collections::HashSet<String> = (0..200).map(|_| generate()).collect();
        // 9216 combinations; 200 draws should rarely collide more than a few times.
        assert!(names.len() > 150, "too many collisions: {}", names.len());
    }
}

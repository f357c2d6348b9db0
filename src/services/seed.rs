use chrono::NaiveDate;

use crate::models::{Pet, Story};

fn pet(id: u32, name: &str, age: u8, tags: [&str; 4], story: &str, photo: &str) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        story: story.to_string(),
        photo: Some(photo.to_string()),
    }
}

/// Evaluated in const context, so a bad date fails the build
const fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

const STORY_DATES: [NaiveDate; 5] = [
    fixture_date(2024, 8, 15),
    fixture_date(2024, 8, 20),
    fixture_date(2024, 8, 25),
    fixture_date(2024, 8, 28),
    fixture_date(2024, 8, 30),
];

fn story(id: u32, author: &str, content: &str, photo: Option<&str>, timestamp: NaiveDate) -> Story {
    Story {
        id,
        author: author.to_string(),
        content: content.to_string(),
        photo: photo.map(str::to_string),
        timestamp,
    }
}

/// The six reference pets listed on the site
pub fn demo_pets() -> Vec<Pet> {
    vec![
        pet(
            1,
            "Buddy",
            3,
            ["friendly", "kid-friendly", "high-energy", "trained"],
            "Buddy is a golden retriever mix who loves playing fetch and swimming. He was rescued from a busy street and has been waiting for a loving family. He's great with children and other dogs!",
            "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=400&fit=crop",
        ),
        pet(
            2,
            "Luna",
            2,
            ["calm", "apartment-friendly", "low-maintenance", "cuddly"],
            "Luna is a gentle cat who loves quiet afternoons by the window. She's perfect for apartment living and enjoys gentle pets and cozy naps. She came to us when her elderly owner could no longer care for her.",
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=400&fit=crop",
        ),
        pet(
            3,
            "Max",
            5,
            ["loyal", "protective", "experienced-owner", "large"],
            "Max is a German Shepherd mix with a heart of gold. He needs an experienced owner who can provide him with structure and exercise. He's incredibly loyal and would make an excellent companion for the right family.",
            "https://images.unsplash.com/photo-1551717743-49959800b1f6?w=400&h=400&fit=crop",
        ),
        pet(
            4,
            "Mia",
            1,
            ["playful", "small", "kid-friendly", "energetic"],
            "Mia is a young beagle puppy full of energy and curiosity. She loves exploring new places and meeting new people. She's still learning basic commands but is very eager to please and learn.",
            "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=400&h=400&fit=crop",
        ),
        pet(
            5,
            "Oliver",
            4,
            ["independent", "quiet", "apartment-friendly", "senior-friendly"],
            "Oliver is a distinguished orange tabby who prefers the quieter things in life. He's content with his own company but enjoys gentle affection from his humans. Perfect for someone looking for a calm companion.",
            "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?w=400&h=400&fit=crop",
        ),
        pet(
            6,
            "Bella",
            2,
            ["social", "friendly", "medium-energy", "trained"],
            "Bella is a mixed breed with the sweetest temperament. She gets along with everyone she meets - dogs, cats, and humans alike. She knows basic commands and walks well on a leash.",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=400&fit=crop",
        ),
    ]
}

/// The five reference stories shown in the community feed
pub fn demo_stories() -> Vec<Story> {
    vec![
        story(
            1,
            "Sarah M.",
            "It's been 6 months since we adopted Charlie from the shelter, and he's brought so much joy to our family! He's learned so many tricks and loves his daily walks in the park. Thank you for helping us find our perfect companion!",
            Some("https://images.unsplash.com/photo-1601758228041-f3b2795255f1?w=400&h=300&fit=crop"),
            STORY_DATES[0],
        ),
        story(
            2,
            "Adoptly Shelter",
            "Meet our newest arrivals! These three adorable kittens are looking for their forever homes. They're playful, healthy, and ready to bring love to your family. Come visit us this weekend!",
            Some("https://images.unsplash.com/photo-1596854407944-bf87f6fdd49e?w=400&h=300&fit=crop"),
            STORY_DATES[1],
        ),
        story(
            3,
            "Mike & Jenny R.",
            "One year update: Luna has settled in beautifully! She's become the queen of our apartment and loves watching birds from her favorite window perch. Best decision we ever made!",
            Some("https://images.unsplash.com/photo-1513360371669-4adf3dd7dff8?w=400&h=300&fit=crop"),
            STORY_DATES[2],
        ),
        story(
            4,
            "Adoptly Shelter",
            "Success story alert! All five puppies from the Johnson litter have found loving homes! Thank you to everyone who shared their stories and helped spread the word. This is what community looks like!",
            None,
            STORY_DATES[3],
        ),
        story(
            5,
            "Emma T.",
            "Rocky has been with us for 3 months now and he's thriving! From a scared rescue to a confident, happy dog who loves his daily adventures. The patience and love from the shelter staff made all the difference.",
            Some("https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=400&h=300&fit=crop"),
            STORY_DATES[4],
        ),
    ]
}

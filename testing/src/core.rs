//! Example content records for backend tests.  Each builder fills the
//! non-discriminating fields with plausible values; tests override the
//! ones a case actually exercises.

use std::collections::BTreeMap;
use trpcore::{
    article::{Article, ArticleAuthor},
    review::{Review, SpecValue},
    video::Video,
};

pub fn example_review(slug: &str) -> Review {
    Review {
        id: 0,
        title: format!("{slug} review"),
        slug: slug.to_string(),
        brand: "Acme".to_string(),
        category: "Smartphone".to_string(),
        image: format!("/images/{slug}.jpg"),
        gallery: vec![
            format!("/images/{slug}-1.jpg"),
            format!("/images/{slug}-2.jpg"),
        ],
        rating: 4.0,
        price: "$999".to_string(),
        affiliate_links: BTreeMap::from([
            ("amazon".to_string(), format!("https://amazon.example.com/{slug}")),
        ]),
        excerpt: "A short excerpt.".to_string(),
        content: "The full review body.".to_string(),
        specs: BTreeMap::from([
            ("chipset".to_string(), SpecValue::Text("A1".to_string())),
            ("screenSize".to_string(), SpecValue::Number(6.1)),
            ("waterResistant".to_string(), SpecValue::Flag(true)),
        ]),
        pros: vec!["Great screen".to_string()],
        cons: vec!["Pricey".to_string()],
        verdict: Some("Recommended.".to_string()),
        author: "Alex Doe".to_string(),
        publish_date: 1700000000,
        updated_date: 1700000000,
        featured: false,
        trending: false,
    }
}

pub fn example_video(slug: &str) -> Video {
    Video {
        id: 0,
        title: format!("{slug} video"),
        slug: slug.to_string(),
        thumbnail: format!("/thumbs/{slug}.jpg"),
        embed_id: "a1b2c3d4e5f".to_string(),
        duration: "10:24".to_string(),
        views: "120K".to_string(),
        category: "Review".to_string(),
        tags: vec!["smartphone".to_string(), "5G".to_string()],
        description: "A video walkthrough.".to_string(),
        publish_date: 1700000000,
        featured: false,
    }
}

pub fn example_article(slug: &str) -> Article {
    Article {
        id: 0,
        title: format!("{slug} article"),
        slug: slug.to_string(),
        excerpt: "A short excerpt.".to_string(),
        content: "The full article body.".to_string(),
        image: format!("/images/{slug}.jpg"),
        category: "Guides".to_string(),
        tags: vec!["buying-guide".to_string()],
        read_time: "8 min".to_string(),
        author: ArticleAuthor {
            name: "Alex Doe".to_string(),
            avatar: "/avatars/alex.jpg".to_string(),
            bio: None,
        },
        publish_date: 1700000000,
        updated_date: 1700000000,
        featured: false,
        views: 0,
    }
}

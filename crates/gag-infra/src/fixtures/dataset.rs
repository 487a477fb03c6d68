//! The bundled dataset: three users, five posts, two comments.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use gag_core::domain::{Category, Comment, Interest, MediaKind, Post, Reply, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn avatar(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=100&h=100&fit=crop&crop=face")
}

fn media(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=600&h=400&fit=crop")
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

pub(super) fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            username: "memeLord42".to_string(),
            avatar: avatar("1535713875002-d1d0cf377fde"),
            bio: "Professional meme connoisseur".to_string(),
            followers: 1234,
            following: 567,
            upvotes_received: 5432,
            join_date: date(2022, 1, 15),
        },
        User {
            id: "2".to_string(),
            username: "funnyGal2024".to_string(),
            avatar: avatar("1494790108755-2616b612c44b"),
            bio: "Spreading joy one meme at a time".to_string(),
            followers: 892,
            following: 234,
            upvotes_received: 3210,
            join_date: date(2023, 3, 20),
        },
        User {
            id: "3".to_string(),
            username: "catLover99".to_string(),
            avatar: avatar("1472099645785-5658abf4ff4e"),
            bio: "Cats are my spirit animal".to_string(),
            followers: 2341,
            following: 123,
            upvotes_received: 7890,
            join_date: date(2021, 8, 10),
        },
    ]
}

pub(super) fn posts(users: &[User]) -> Vec<Post> {
    let [meme_lord, funny_gal, cat_lover] = [&users[0], &users[1], &users[2]];

    vec![
        Post {
            id: "1".to_string(),
            title: "When you finally understand a math problem after staring at it for 2 hours"
                .to_string(),
            media_url: media("1507003211169-0a1dd7228f2d"),
            media_kind: MediaKind::Image,
            category: "funny".to_string(),
            tags: tags(&["math", "student", "relatable"]),
            author: meme_lord.clone(),
            upvotes: 1523,
            downvotes: 45,
            score: 1478,
            comment_count: 127,
            views: 15234,
            created_at: at(2025, 1, 10, 10, 30),
            nsfw: false,
        },
        Post {
            id: "2".to_string(),
            title: "My cat when I try to work from home".to_string(),
            media_url: media("1514888286974-6c03e2ca1dba"),
            media_kind: MediaKind::Gif,
            category: "animals".to_string(),
            tags: tags(&["cat", "work", "home", "funny"]),
            author: cat_lover.clone(),
            upvotes: 2341,
            downvotes: 23,
            score: 2318,
            comment_count: 89,
            views: 23451,
            created_at: at(2025, 1, 10, 8, 15),
            nsfw: false,
        },
        Post {
            id: "3".to_string(),
            title: "Gaming setup evolution over the years".to_string(),
            media_url: media("1493711662062-fa541adb3fc8"),
            media_kind: MediaKind::Image,
            category: "gaming".to_string(),
            tags: tags(&["gaming", "setup", "evolution", "nostalgia"]),
            author: funny_gal.clone(),
            upvotes: 987,
            downvotes: 67,
            score: 920,
            comment_count: 203,
            views: 12987,
            created_at: at(2025, 1, 10, 6, 45),
            nsfw: false,
        },
        Post {
            id: "4".to_string(),
            title: "When someone asks if you want food".to_string(),
            media_url: media("1565299624946-b28f40a0ca4b"),
            media_kind: MediaKind::Gif,
            category: "food".to_string(),
            tags: tags(&["food", "hungry", "relatable"]),
            author: meme_lord.clone(),
            upvotes: 3421,
            downvotes: 34,
            score: 3387,
            comment_count: 156,
            views: 34210,
            created_at: at(2025, 1, 9, 20, 20),
            nsfw: false,
        },
        Post {
            id: "5".to_string(),
            title: "Monday morning motivation".to_string(),
            media_url: media("1571019613454-1cb2f99b2d8b"),
            media_kind: MediaKind::Image,
            category: "awesome".to_string(),
            tags: tags(&["motivation", "monday", "inspiration"]),
            author: funny_gal.clone(),
            upvotes: 876,
            downvotes: 91,
            score: 785,
            comment_count: 67,
            views: 8760,
            created_at: at(2025, 1, 9, 18, 10),
            nsfw: false,
        },
    ]
}

pub(super) fn comments(users: &[User]) -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_string(),
            post_id: "1".to_string(),
            author: users[1].clone(),
            text: "This is so relatable! 😂".to_string(),
            upvotes: 45,
            downvotes: 2,
            score: 43,
            replies: Vec::new(),
            created_at: at(2025, 1, 10, 11, 0),
        },
        Comment {
            id: "2".to_string(),
            post_id: "1".to_string(),
            author: users[2].clone(),
            text: "Math was never my strong suit lol".to_string(),
            upvotes: 23,
            downvotes: 1,
            score: 22,
            replies: vec![Reply {
                id: "2a".to_string(),
                author: users[0].clone(),
                text: "Same here! But we get there eventually".to_string(),
                upvotes: 12,
                downvotes: 0,
                score: 12,
                created_at: at(2025, 1, 10, 11, 15),
            }],
            created_at: at(2025, 1, 10, 10, 45),
        },
    ]
}

pub(super) fn categories() -> Vec<Category> {
    [
        ("home", "Home", "Home"),
        ("hot", "Hot", "TrendingUp"),
        ("trending", "Trending", "BarChart3"),
        ("fresh", "Fresh", "Clock"),
        ("ask9gag", "Ask 9GAG", "MessageCircle"),
    ]
    .into_iter()
    .map(|(id, name, icon)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub(super) fn interests() -> Vec<Interest> {
    [
        ("usa", "USA", "bg-blue-500"),
        ("oldmeme", "Old Meme", "bg-gray-600"),
        ("anime", "Anime & Manga", "bg-red-500"),
        ("news", "Latest News", "bg-green-500"),
        ("humor", "Humor", "bg-purple-500"),
        ("memes", "Memes", "bg-purple-600"),
        ("politics", "Politics", "bg-blue-600"),
        ("gaming", "Gaming", "bg-orange-500"),
        ("wtf", "WTF", "bg-pink-500"),
        ("relationship", "Relationship & Dating", "bg-red-400"),
        ("music", "Music", "bg-blue-400"),
    ]
    .into_iter()
    .map(|(id, name, color)| Interest {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

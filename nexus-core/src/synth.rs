use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::models::{Article, FeedSource, Platform};

/// Fixed topic vocabulary; every article gets exactly one of these.
pub const TOPIC_TAGS: [&str; 7] = [
    "AI", "Crypto", "Coding", "Politics", "Design", "Apple", "SpaceX",
];

/// Articles are backdated by a uniform offset within this window.
const BACKDATE_WINDOW_MINUTES: i64 = 48 * 60;

/// Probability that a freshly synthesized article starts out read.
const READ_AT_BIRTH: f64 = 0.1;

struct Rendered {
    title: String,
    content: String,
    thumbnail: Option<String>,
}

fn render_template<R: Rng + ?Sized>(source: &FeedSource, article_id: &str, rng: &mut R) -> Rendered {
    match source.platform {
        Platform::Video => Rendered {
            title: format!("{}: New Video Analysis {}", source.name, rng.gen_range(0..100)),
            content: "Explore the latest insights from this channel. Today we look at \
                      emerging trends and performance benchmarks that are shaping the industry."
                .into(),
            thumbnail: Some(format!("https://picsum.photos/seed/{article_id}/400/225")),
        },
        Platform::Microblog => Rendered {
            title: format!("Post from {}", source.name),
            content: "Just shared some thoughts on the current state of decentralized \
                      systems. The community feedback has been incredible! #tech #future"
                .into(),
            thumbnail: None,
        },
        Platform::Forum => Rendered {
            title: format!("Trending in {}", source.name),
            content: "A deep dive into why developers are moving towards minimalist \
                      frameworks. Over 500 comments and counting."
                .into(),
            thumbnail: None,
        },
        Platform::Blog => Rendered {
            title: format!("{} | Weekly Digest", source.name),
            content: "Our latest editorial covers the intersection of user experience and \
                      automated design tools. A must-read for creative professionals."
                .into(),
            thumbnail: Some(format!("https://picsum.photos/seed/{article_id}/400/200")),
        },
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..8)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect::<String>()
        .to_lowercase()
}

/// Synthesizes a batch of articles from the given subscriptions.
///
/// Each article picks a source uniformly at random, renders that platform's
/// template and is backdated up to 48 hours. The batch comes back sorted by
/// `published_at` descending. An empty source list yields an empty batch for
/// any `count`; there is no failure mode.
pub fn synthesize_articles<R: Rng + ?Sized>(
    sources: &[FeedSource],
    count: usize,
    rng: &mut R,
) -> Vec<Article> {
    if sources.is_empty() {
        return Vec::new();
    }

    let now = Utc::now();
    let mut articles = Vec::with_capacity(count);

    for _ in 0..count {
        let source = &sources[rng.gen_range(0..sources.len())];
        let id = random_id(rng);
        let rendered = render_template(source, &id, rng);
        let backdate = rng.gen_range(0..BACKDATE_WINDOW_MINUTES);
        let tag = TOPIC_TAGS[rng.gen_range(0..TOPIC_TAGS.len())];

        articles.push(Article {
            id,
            source_id: source.id.clone(),
            platform: source.platform,
            title: rendered.title,
            content: rendered.content,
            author: source.name.clone(),
            published_at: now - Duration::minutes(backdate),
            url: source.url.clone(),
            thumbnail: rendered.thumbnail,
            is_read: rng.gen_bool(READ_AT_BIRTH),
            summary: None,
            is_summarizing: false,
            tags: vec![tag.to_string()],
        });
    }

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    articles
}

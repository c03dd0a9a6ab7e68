use std::collections::HashSet;

use chrono::{Duration, Utc};
use nexus_core::{default_sources, synthesize_articles, FeedSource, Platform, TOPIC_TAGS};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn synthesize_returns_requested_count_with_valid_attribution() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(7);
    let articles = synthesize_articles(&sources, 24, &mut rng);

    assert_eq!(articles.len(), 24);

    let source_ids: HashSet<&str> = sources.iter().map(|s| s.id.as_str()).collect();
    for article in &articles {
        assert!(source_ids.contains(article.source_id.as_str()));
        let source = sources
            .iter()
            .find(|s| s.id == article.source_id)
            .expect("source exists");
        assert_eq!(article.platform, source.platform);
        assert_eq!(article.author, source.name);
        assert_eq!(article.url, source.url);
    }
}

#[test]
fn synthesize_sorts_by_recency_descending() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(3);
    let articles = synthesize_articles(&sources, 50, &mut rng);

    for pair in articles.windows(2) {
        assert!(pair[0].published_at >= pair[1].published_at);
    }
}

#[test]
fn synthesize_backdates_within_48_hours() {
    let sources = default_sources();
    let before = Utc::now() - Duration::hours(48);
    let mut rng = StdRng::seed_from_u64(11);
    let articles = synthesize_articles(&sources, 40, &mut rng);
    let after = Utc::now();

    for article in &articles {
        assert!(article.published_at <= after);
        assert!(article.published_at >= before);
    }
}

#[test]
fn empty_source_list_yields_empty_batch() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(synthesize_articles(&[], 24, &mut rng).is_empty());
    assert!(synthesize_articles(&[], 0, &mut rng).is_empty());
}

#[test]
fn zero_count_yields_empty_batch() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(synthesize_articles(&sources, 0, &mut rng).is_empty());
}

#[test]
fn thumbnails_follow_platform_templates() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(5);
    let articles = synthesize_articles(&sources, 60, &mut rng);

    for article in &articles {
        match article.platform {
            Platform::Video | Platform::Blog => {
                assert!(article.thumbnail.is_some(), "visual platforms carry a thumbnail");
            }
            Platform::Microblog | Platform::Forum => {
                assert!(article.thumbnail.is_none());
            }
        }
    }
}

#[test]
fn every_article_gets_one_known_tag() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(9);
    let articles = synthesize_articles(&sources, 30, &mut rng);

    for article in &articles {
        assert_eq!(article.tags.len(), 1);
        assert!(TOPIC_TAGS.contains(&article.tags[0].as_str()));
    }
}

#[test]
fn fresh_articles_start_without_summary_state() {
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(13);
    let articles = synthesize_articles(&sources, 20, &mut rng);

    for article in &articles {
        assert!(article.summary.is_none());
        assert!(!article.is_summarizing);
    }
}

#[test]
fn read_flag_defaults_mix_over_large_batches() {
    // p = 0.1 per article; over 2000 draws both states show up.
    let sources = default_sources();
    let mut rng = StdRng::seed_from_u64(21);
    let articles = synthesize_articles(&sources, 2000, &mut rng);

    let read = articles.iter().filter(|a| a.is_read).count();
    assert!(read > 0);
    assert!(read < articles.len());
}

#[test]
fn refresh_after_adding_a_source_draws_from_the_new_registry() {
    let mut sources = default_sources();
    sources.push(FeedSource {
        id: "5".into(),
        name: "Design Weekly".into(),
        url: "https://example.com/design".into(),
        platform: Platform::Blog,
    });

    let mut rng = StdRng::seed_from_u64(17);
    let articles = synthesize_articles(&sources, 24, &mut rng);

    let source_ids: HashSet<&str> = sources.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(articles.len(), 24);
    assert!(articles
        .iter()
        .all(|a| source_ids.contains(a.source_id.as_str())));
}

#[test]
fn same_seed_produces_same_content() {
    let sources = vec![FeedSource {
        id: "s1".into(),
        name: "Only Source".into(),
        url: "https://example.com".into(),
        platform: Platform::Forum,
    }];

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let batch_a = synthesize_articles(&sources, 12, &mut rng_a);
    let batch_b = synthesize_articles(&sources, 12, &mut rng_b);

    // Timestamps differ between the two calls; ids, titles and flags do not.
    let sig = |batch: &[nexus_core::Article]| {
        batch
            .iter()
            .map(|a| (a.id.clone(), a.title.clone(), a.is_read, a.tags.clone()))
            .collect::<Vec<_>>()
    };
    let mut a = sig(&batch_a);
    let mut b = sig(&batch_b);
    a.sort();
    b.sort();
    assert_eq!(a, b);
}

use crate::models::{Article, Platform, ALL_PLATFORMS};

/// Active platform filter for the visible article set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(Platform),
}

impl PlatformFilter {
    pub fn matches(self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(wanted) => wanted == platform,
        }
    }
}

/// Aggregate counts for the stats view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_articles: usize,
    pub read_count: usize,
    pub platform_distribution: Vec<(Platform, usize)>,
}

/// Session state for the dashboard: the current article batch, transient
/// flags and the view filter inputs. All mutation goes through the methods
/// below; nothing here touches the network or the clock.
#[derive(Debug)]
pub struct Dashboard {
    articles: Vec<Article>,
    loading: bool,
    refreshing: bool,
    briefing: Option<String>,
    generating_briefing: bool,
    pub filter: PlatformFilter,
    pub search: String,
}

impl Dashboard {
    /// Starts in the loading state; the first refresh batch clears it.
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            loading: true,
            refreshing: false,
            briefing: None,
            generating_briefing: false,
            filter: PlatformFilter::All,
            search: String::new(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn briefing(&self) -> Option<&str> {
        self.briefing.as_deref()
    }

    pub fn is_generating_briefing(&self) -> bool {
        self.generating_briefing
    }

    /// Manual refreshes additionally raise the `refreshing` flag so the UI
    /// can distinguish a spinner refresh from the first load.
    pub fn begin_refresh(&mut self, manual: bool) {
        self.loading = true;
        if manual {
            self.refreshing = true;
        }
    }

    /// Replaces the whole article batch and clears the loading flags.
    pub fn finish_refresh(&mut self, batch: Vec<Article>) {
        self.articles = batch;
        self.loading = false;
        self.refreshing = false;
    }

    /// Cascade prune after a source deletion. Returns how many articles
    /// were removed; the rest of the batch is untouched.
    pub fn remove_source_articles(&mut self, source_id: &str) -> usize {
        let before = self.articles.len();
        self.articles.retain(|article| article.source_id != source_id);
        before - self.articles.len()
    }

    /// Flips `is_read` on exactly one article. Returns false for an
    /// unknown id.
    pub fn toggle_read(&mut self, article_id: &str) -> bool {
        match self.articles.iter_mut().find(|a| a.id == article_id) {
            Some(article) => {
                article.is_read = !article.is_read;
                true
            }
            None => false,
        }
    }

    /// Marks an article as summarizing and hands back the inputs the
    /// gateway needs. Returns None for an unknown id or when a request for
    /// that article is already in flight.
    pub fn begin_summary(&mut self, article_id: &str) -> Option<(String, Platform)> {
        let article = self.articles.iter_mut().find(|a| a.id == article_id)?;
        if article.is_summarizing {
            return None;
        }
        article.is_summarizing = true;
        Some((article.content.clone(), article.platform))
    }

    /// Applies a finished summary. The text may be a gateway placeholder;
    /// either way the article ends up with a `summary` value. Returns false
    /// when the article no longer exists (its source was deleted while the
    /// call was in flight) and the result is dropped.
    pub fn finish_summary(&mut self, article_id: &str, summary: String) -> bool {
        match self.articles.iter_mut().find(|a| a.id == article_id) {
            Some(article) => {
                article.is_summarizing = false;
                article.summary = Some(summary);
                true
            }
            None => false,
        }
    }

    pub fn begin_briefing(&mut self) {
        self.generating_briefing = true;
    }

    pub fn finish_briefing(&mut self, text: String) {
        self.briefing = Some(text);
        self.generating_briefing = false;
    }

    /// Titles of the first `n` articles in current sort order, the input
    /// for a briefing request.
    pub fn recent_titles(&self, n: usize) -> Vec<String> {
        self.articles
            .iter()
            .take(n)
            .map(|article| article.title.clone())
            .collect()
    }

    /// The filtered view: platform equality (or show-all) and a
    /// case-insensitive substring match against title or author.
    pub fn visible_articles(&self) -> Vec<&Article> {
        let needle = self.search.to_lowercase();
        self.articles
            .iter()
            .filter(|article| {
                self.filter.matches(article.platform)
                    && (needle.is_empty()
                        || article.title.to_lowercase().contains(&needle)
                        || article.author.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn stats(&self) -> DashboardStats {
        let read_count = self.articles.iter().filter(|a| a.is_read).count();
        let platform_distribution = ALL_PLATFORMS
            .iter()
            .map(|&platform| {
                let count = self
                    .articles
                    .iter()
                    .filter(|a| a.platform == platform)
                    .count();
                (platform, count)
            })
            .collect();
        DashboardStats {
            total_articles: self.articles.len(),
            read_count,
            platform_distribution,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

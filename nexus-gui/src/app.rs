use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use eframe::egui::{self, Color32, Rounding, Stroke};
use nexus_core::{
    add_source, list_sources, remove_source, spawn_briefing, spawn_refresh, spawn_summary,
    Article, Dashboard, DashboardConfig, Event, FeedSource, InsightGateway, Platform,
    PlatformFilter, SharedSourceList, ALL_PLATFORMS,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

pub struct AppInit {
    pub runtime: Arc<Runtime>,
    pub sources: SharedSourceList,
    pub gateway: Arc<InsightGateway>,
    pub config: DashboardConfig,
    pub event_tx: mpsc::Sender<Event>,
    pub events: mpsc::Receiver<Event>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppTab {
    Dashboard,
    Sources,
    Stats,
}

enum CardAction {
    ToggleRead(String),
    Summarize(String),
    Open(String),
}

pub struct NexusApp {
    runtime: Arc<Runtime>,
    sources: SharedSourceList,
    gateway: Arc<InsightGateway>,
    config: DashboardConfig,
    event_tx: mpsc::Sender<Event>,
    events: mpsc::Receiver<Event>,
    dashboard: Dashboard,
    tab: AppTab,
    // Add-source modal
    show_add_modal: bool,
    new_source_name: String,
    new_source_url: String,
    new_source_platform: Platform,
    // Delete confirmation
    pending_delete: Option<FeedSource>,
}

impl NexusApp {
    pub fn new(init: AppInit) -> Self {
        let mut app = Self {
            runtime: init.runtime,
            sources: init.sources,
            gateway: init.gateway,
            config: init.config,
            event_tx: init.event_tx,
            events: init.events,
            dashboard: Dashboard::new(),
            tab: AppTab::Dashboard,
            show_add_modal: false,
            new_source_name: String::new(),
            new_source_url: String::new(),
            new_source_platform: Platform::Blog,
            pending_delete: None,
        };
        // Initial load
        app.trigger_refresh(false);
        app
    }

    fn sources_snapshot(&self) -> Vec<FeedSource> {
        self.runtime.block_on(list_sources(&self.sources))
    }

    fn trigger_refresh(&mut self, manual: bool) {
        let sources = self.sources_snapshot();
        self.dashboard.begin_refresh(manual);
        let guard = self.runtime.enter();
        spawn_refresh(sources, self.config.clone(), self.event_tx.clone());
        drop(guard);
    }

    fn trigger_summary(&mut self, article_id: String) {
        if let Some((content, platform)) = self.dashboard.begin_summary(&article_id) {
            let guard = self.runtime.enter();
            spawn_summary(
                self.gateway.clone(),
                article_id,
                content,
                platform,
                self.event_tx.clone(),
            );
            drop(guard);
        }
    }

    fn trigger_briefing(&mut self) {
        if self.dashboard.is_generating_briefing() {
            return;
        }
        self.dashboard.begin_briefing();
        let titles = self.dashboard.recent_titles(self.config.briefing_headlines);
        let guard = self.runtime.enter();
        spawn_briefing(self.gateway.clone(), titles, self.event_tx.clone());
        drop(guard);
    }

    fn submit_new_source(&mut self) {
        let name = self.new_source_name.trim().to_string();
        let url = self.new_source_url.trim().to_string();
        // Blank required fields: decline silently, keep the modal open.
        if name.is_empty() || url.is_empty() {
            return;
        }
        let source = FeedSource {
            id: format!("src-{}", Utc::now().timestamp_millis()),
            name,
            url,
            platform: self.new_source_platform,
        };
        self.runtime.block_on(add_source(&self.sources, source));
        self.new_source_name.clear();
        self.new_source_url.clear();
        self.show_add_modal = false;
        self.trigger_refresh(true);
    }

    fn confirm_delete(&mut self, source_id: &str) {
        self.runtime
            .block_on(remove_source(&self.sources, source_id));
        self.dashboard.remove_source_articles(source_id);
        self.pending_delete = None;
    }

    fn drain_events(&mut self) {
        while let Ok(evt) = self.events.try_recv() {
            match evt {
                Event::ArticlesReady(batch) => {
                    self.dashboard.finish_refresh(batch);
                }
                Event::SummaryReady {
                    article_id,
                    summary,
                } => {
                    if !self.dashboard.finish_summary(&article_id, summary) {
                        tracing::debug!(%article_id, "dropping summary for removed article");
                    }
                }
                Event::BriefingReady(text) => {
                    self.dashboard.finish_briefing(text);
                }
            }
        }
    }

    fn has_pending_work(&self) -> bool {
        self.dashboard.is_loading()
            || self.dashboard.is_generating_briefing()
            || self.dashboard.articles().iter().any(|a| a.is_summarizing)
    }

    fn setup_dark_theme(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let bg_color = Color32::from_rgb(24, 26, 32);
        let panel_color = Color32::from_rgb(32, 34, 42);
        let border_color = Color32::from_rgb(55, 58, 70);
        let text_color = Color32::from_rgb(210, 212, 220);
        let accent_color = Color32::from_rgb(99, 102, 241);

        style.visuals.dark_mode = true;
        style.visuals.panel_fill = panel_color;
        style.visuals.window_fill = bg_color;
        style.visuals.override_text_color = Some(text_color);

        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, border_color);
        style.visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 47, 58);
        style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent_color);
        style.visuals.widgets.active.bg_fill = accent_color;

        style.visuals.widgets.noninteractive.rounding = Rounding::same(4.0);
        style.visuals.widgets.inactive.rounding = Rounding::same(4.0);
        style.visuals.widgets.hovered.rounding = Rounding::same(4.0);
        style.visuals.widgets.active.rounding = Rounding::same(4.0);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);

        ctx.set_style(style);
    }

    fn draw_left_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_panel")
            .min_width(180.0)
            .max_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("⚡ Nexus").strong().size(20.0));
                ui.separator();

                for (tab, label) in [
                    (AppTab::Dashboard, "🏠 Dashboard"),
                    (AppTab::Sources, "📡 Subscriptions"),
                    (AppTab::Stats, "📊 Analytics"),
                ] {
                    if ui
                        .selectable_label(self.tab == tab, egui::RichText::new(label).size(15.0))
                        .clicked()
                    {
                        self.tab = tab;
                    }
                }

                ui.add_space(12.0);
                let w = ui.available_width();
                let btn = egui::Button::new(egui::RichText::new("➕ Add Source").strong());
                if ui.add_sized(egui::vec2(w, 30.0), btn).clicked() {
                    self.show_add_modal = true;
                }
            });
    }

    fn draw_dashboard(&mut self, ui: &mut egui::Ui) {
        self.draw_header(ui);
        ui.add_space(6.0);
        self.draw_briefing_banner(ui);
        ui.add_space(6.0);
        self.draw_filter_chips(ui);
        ui.separator();

        if self.dashboard.is_loading() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.spinner();
                let msg = if self.dashboard.is_refreshing() {
                    "Refreshing your feeds..."
                } else {
                    "Loading your feeds..."
                };
                ui.label(egui::RichText::new(msg).weak());
            });
            return;
        }

        let visible: Vec<Article> = self
            .dashboard
            .visible_articles()
            .into_iter()
            .cloned()
            .collect();

        if visible.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("No articles found").strong().size(16.0));
                ui.label(
                    egui::RichText::new(
                        "Try adjusting your filters or adding more subscriptions.",
                    )
                    .weak(),
                );
            });
            return;
        }

        let mut actions: Vec<CardAction> = Vec::new();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for article in &visible {
                    draw_article_card(ui, article, &mut actions);
                    ui.add_space(6.0);
                }
            });

        for action in actions {
            match action {
                CardAction::ToggleRead(id) => {
                    self.dashboard.toggle_read(&id);
                }
                CardAction::Summarize(id) => self.trigger_summary(id),
                CardAction::Open(url) => {
                    if let Err(err) = webbrowser::open(&url) {
                        tracing::warn!(error = %err, "failed to open article url");
                    }
                }
            }
        }
    }

    fn draw_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Daily Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refresh = ui.add_enabled(
                    !self.dashboard.is_loading(),
                    egui::Button::new("⟳ Refresh"),
                );
                if refresh.clicked() {
                    self.trigger_refresh(true);
                }
                if self.dashboard.is_refreshing() {
                    ui.spinner();
                }
                ui.add_sized(
                    egui::vec2(240.0, 24.0),
                    egui::TextEdit::singleline(&mut self.dashboard.search)
                        .hint_text("Search titles or authors..."),
                );
            });
        });
    }

    fn draw_briefing_banner(&mut self, ui: &mut egui::Ui) {
        let generating = self.dashboard.is_generating_briefing();
        let mut generate_clicked = false;
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("✨ Morning Briefing").strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if generating {
                        "Generating..."
                    } else if self.dashboard.briefing().is_some() {
                        "Regenerate"
                    } else {
                        "Generate with AI"
                    };
                    if ui.add_enabled(!generating, egui::Button::new(label)).clicked() {
                        generate_clicked = true;
                    }
                });
            });
            match self.dashboard.briefing() {
                Some(text) => {
                    ui.label(egui::RichText::new(text).size(14.0));
                }
                None => {
                    ui.label(
                        egui::RichText::new(format!(
                            "Tap 'Generate' to synthesize a quick summary of your {} articles.",
                            self.dashboard.articles().len()
                        ))
                        .weak()
                        .size(13.0),
                    );
                }
            }
        });
        if generate_clicked {
            self.trigger_briefing();
        }
    }

    fn draw_filter_chips(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .selectable_label(self.dashboard.filter == PlatformFilter::All, "All Feeds")
                .clicked()
            {
                self.dashboard.filter = PlatformFilter::All;
            }
            for platform in ALL_PLATFORMS {
                let selected = self.dashboard.filter == PlatformFilter::Only(platform);
                let label = format!("{} {}", platform.icon(), platform.label());
                if ui.selectable_label(selected, label).clicked() {
                    self.dashboard.filter = PlatformFilter::Only(platform);
                }
            }
        });
    }

    fn draw_sources(&mut self, ui: &mut egui::Ui) {
        ui.heading("Subscriptions");
        ui.separator();

        let sources = self.sources_snapshot();
        if sources.is_empty() {
            ui.label(egui::RichText::new("No subscriptions yet.").weak());
        }

        let mut delete_requested: Option<FeedSource> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for source in &sources {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(source.platform.icon()).size(18.0));
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&source.name).strong().size(15.0));
                                ui.label(egui::RichText::new(&source.url).weak().size(12.0));
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui
                                        .small_button("🗑")
                                        .on_hover_text("Remove this subscription")
                                        .clicked()
                                    {
                                        delete_requested = Some(source.clone());
                                    }
                                    ui.label(
                                        egui::RichText::new(source.platform.label())
                                            .weak()
                                            .size(12.0),
                                    );
                                },
                            );
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        if delete_requested.is_some() {
            self.pending_delete = delete_requested;
        }
    }

    fn draw_stats(&mut self, ui: &mut egui::Ui) {
        ui.heading("Analytics");
        ui.separator();

        let stats = self.dashboard.stats();
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Total articles").weak().size(13.0));
                    ui.label(
                        egui::RichText::new(stats.total_articles.to_string())
                            .strong()
                            .size(24.0),
                    );
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Read").weak().size(13.0));
                    ui.label(
                        egui::RichText::new(stats.read_count.to_string())
                            .strong()
                            .size(24.0),
                    );
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new("Unread").weak().size(13.0));
                    ui.label(
                        egui::RichText::new(
                            (stats.total_articles - stats.read_count).to_string(),
                        )
                        .strong()
                        .size(24.0),
                    );
                });
            });
        });

        ui.add_space(12.0);
        ui.label(egui::RichText::new("Platform distribution").strong().size(15.0));
        let total = stats.total_articles.max(1) as f32;
        for (platform, count) in &stats.platform_distribution {
            ui.horizontal(|ui| {
                ui.label(format!("{} {}", platform.icon(), platform.label()));
                ui.add(
                    egui::ProgressBar::new(*count as f32 / total)
                        .desired_width(260.0)
                        .text(count.to_string()),
                );
            });
        }
    }

    fn draw_add_modal(&mut self, ctx: &egui::Context) {
        if !self.show_add_modal {
            return;
        }
        let mut open = self.show_add_modal;
        let mut submitted = false;
        egui::Window::new("Add Subscription")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut self.new_source_name);
                ui.label("URL or handle");
                ui.text_edit_singleline(&mut self.new_source_url);
                ui.label("Platform");
                egui::ComboBox::from_id_source("new_source_platform")
                    .selected_text(self.new_source_platform.label())
                    .show_ui(ui, |ui| {
                        for platform in ALL_PLATFORMS {
                            ui.selectable_value(
                                &mut self.new_source_platform,
                                platform,
                                platform.label(),
                            );
                        }
                    });
                ui.add_space(6.0);
                if ui.button("Add subscription").clicked() {
                    submitted = true;
                }
            });
        self.show_add_modal = open;
        if submitted {
            self.submit_new_source();
        }
    }

    fn draw_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(source) = self.pending_delete.clone() else {
            return;
        };
        egui::Window::new("Remove subscription?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Remove '{}' and all of its articles?",
                    source.name
                ));
                ui.horizontal(|ui| {
                    if ui.button("Remove").clicked() {
                        self.confirm_delete(&source.id);
                    }
                    if ui.button("Cancel").clicked() {
                        self.pending_delete = None;
                    }
                });
            });
    }
}

fn relative_time(published_at: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - published_at).num_minutes().max(0);
    if minutes < 60 {
        format!("{minutes}m ago")
    } else {
        format!("{}h ago", minutes / 60)
    }
}

fn draw_article_card(ui: &mut egui::Ui, article: &Article, actions: &mut Vec<CardAction>) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(article.platform.icon()).size(16.0));
                let mut title = egui::RichText::new(&article.title).strong().size(15.0);
                if article.is_read {
                    title = title.weak();
                }
                ui.label(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(relative_time(article.published_at))
                            .weak()
                            .size(12.0),
                    );
                    for tag in &article.tags {
                        ui.label(egui::RichText::new(format!("#{tag}")).weak().size(12.0));
                    }
                });
            });
            ui.label(
                egui::RichText::new(format!("by {}", article.author))
                    .weak()
                    .size(12.0),
            );
            ui.label(egui::RichText::new(&article.content).size(13.0));

            if let Some(summary) = &article.summary {
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("✨ {summary}"))
                        .italics()
                        .size(13.0)
                        .color(Color32::from_rgb(165, 180, 252)),
                );
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if article.is_summarizing {
                    ui.spinner();
                    ui.label(egui::RichText::new("Summarizing...").weak().size(12.0));
                } else if ui.small_button("✨ Summarize").clicked() {
                    actions.push(CardAction::Summarize(article.id.clone()));
                }
                let read_label = if article.is_read {
                    "Mark unread"
                } else {
                    "Mark read"
                };
                if ui.small_button(read_label).clicked() {
                    actions.push(CardAction::ToggleRead(article.id.clone()));
                }
                if ui.small_button("Open").clicked() {
                    actions.push(CardAction::Open(article.url.clone()));
                }
            });
        });
    });
}

impl eframe::App for NexusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.setup_dark_theme(ctx);
        self.drain_events();

        self.draw_left_panel(ctx);
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            AppTab::Dashboard => self.draw_dashboard(ui),
            AppTab::Sources => self.draw_sources(ui),
            AppTab::Stats => self.draw_stats(ui),
        });

        self.draw_add_modal(ctx);
        self.draw_delete_confirm(ctx);

        // Keep pumping frames while async results are outstanding.
        if self.has_pending_work() {
            ctx.request_repaint_after(Duration::from_millis(150));
        }
    }
}

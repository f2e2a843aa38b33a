//! Localized control panel labels and status notifications.

use rotunda_types::config::Locale;
use rotunda_types::page::PageId;

/// Every user-visible string the kiosk produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskStrings {
    pub pause: &'static str,
    pub resume: &'static str,
    pub countdown_prefix: &'static str,
    pub countdown_suffix: &'static str,
    /// Page button labels in [`PageId::ALL`] order.
    pub pages: [&'static str; 3],
    pub interval_label: &'static str,
    pub idle_label: &'static str,
    pub hide_controls: &'static str,
    pub show_controls: &'static str,
    pub content_toggle: &'static str,

    pub paused_by_screen_click: &'static str,
    pub paused_by_content_click: &'static str,
    pub paused_by_embedded_click: &'static str,
    pub resumed_after_idle: &'static str,
    pub content_mode_enabled: &'static str,
    pub display_mode_enabled: &'static str,
}

impl KioskStrings {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Japanese => Self::japanese(),
        }
    }

    pub fn english() -> Self {
        Self {
            pause: "Pause",
            resume: "Resume",
            countdown_prefix: "Next switch in: ",
            countdown_suffix: "s",
            pages: ["Japanese", "English", "Chinese"],
            interval_label: "Switch interval (s): ",
            idle_label: "Idle time (s): ",
            hide_controls: "Hide controls",
            show_controls: "Show controls",
            content_toggle: "Enable content interaction",
            paused_by_screen_click: "Screen click detected - automatic rotation paused",
            paused_by_content_click: "Content interaction - automatic rotation paused",
            paused_by_embedded_click: "Embedded content clicked - automatic rotation paused",
            resumed_after_idle: "Idle detected - resuming automatic rotation",
            content_mode_enabled: "Content interaction enabled - links are clickable",
            display_mode_enabled: "Display mode enabled - click the screen to pause",
        }
    }

    pub fn japanese() -> Self {
        Self {
            pause: "一時停止",
            resume: "再開",
            countdown_prefix: "次の切り替えまで: ",
            countdown_suffix: "秒",
            pages: ["日本語", "英語", "中国語"],
            interval_label: "切り替え間隔 (秒): ",
            idle_label: "アイドル時間 (秒): ",
            hide_controls: "コントロールを隠す",
            show_controls: "コントロールを表示",
            content_toggle: "コンテンツ操作を有効にする",
            paused_by_screen_click: "画面クリックを検知 - 自動切り替えは一時停止中",
            paused_by_content_click: "コンテンツ操作中 - 自動切り替えは一時停止中",
            paused_by_embedded_click: "iframeコンテンツがクリックされました - 自動切り替えは一時停止中",
            resumed_after_idle: "アイドル状態検出 - 自動ページ切り替えを再開",
            content_mode_enabled: "コンテンツ操作モード有効 - リンククリックが可能になりました",
            display_mode_enabled: "表示モード有効 - 画面クリックで一時停止できます",
        }
    }

    /// Label of the pause/resume button for the given rotation state.
    pub fn toggle_label(&self, rotating: bool) -> &'static str {
        if rotating { self.pause } else { self.resume }
    }

    /// Countdown display text.
    pub fn countdown(&self, seconds: u32) -> String {
        format!("{}{seconds}{}", self.countdown_prefix, self.countdown_suffix)
    }

    pub fn page(&self, page: PageId) -> &'static str {
        self.pages[page.index()]
    }
}

impl Default for KioskStrings {
    fn default() -> Self {
        Self::english()
    }
}
